// tests/integration_tests/selection_test.rs
use super::common::{create_path_list, create_test_file, setup_test_directory};
use anyhow::Result;
use convert_eol::{SelectionOptions, SetupError, select_files};

fn ext_list(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|e| (*e).to_owned()).collect()
}

#[test]
fn test_wildcard_selects_every_regular_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = SelectionOptions {
        directory: Some(temp_dir.path().to_path_buf()),
        ..SelectionOptions::default()
    };

    let files = select_files(&options)?;
    assert_eq!(files.len(), 6, "Should select all six files");

    let empty_allow = SelectionOptions {
        allow_extensions: Vec::new(),
        ..options
    };
    assert_eq!(select_files(&empty_allow)?.len(), 6, "Empty allowlist acts as wildcard");
    Ok(())
}

#[test]
fn test_denylist_beats_allowlist() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = SelectionOptions {
        directory: Some(temp_dir.path().to_path_buf()),
        allow_extensions: ext_list(&[".c", ".h", ".png"]),
        deny_extensions: ext_list(&[".png", ".h"]),
        ..SelectionOptions::default()
    };

    let files = select_files(&options)?;
    let extensions: Vec<&str> = files.iter().map(|f| f.extension.as_str()).collect();
    assert_eq!(extensions, vec![".c"]);
    Ok(())
}

#[test]
fn test_extension_entries_without_dot() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let options = SelectionOptions {
        directory: Some(temp_dir.path().to_path_buf()),
        allow_extensions: ext_list(&["cpp"]),
        ..SelectionOptions::default()
    };

    let files = select_files(&options)?;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, temp_dir.path().join("src/main.cpp"));
    Ok(())
}

#[test]
fn test_path_list_skips_empty_and_missing_entries() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let work = tempfile::tempdir()?;
    let present = create_test_file(work.path(), "present.c", "a\n")?;
    let missing = work.path().join("missing.c");
    let list = create_test_file(
        work.path(),
        "paths.txt",
        &format!(
            "{}\n\n{}\n{}\n",
            present.display(),
            missing.display(),
            temp_dir.path().display()
        ),
    )?;

    let options = SelectionOptions {
        path_file: Some(list),
        ..SelectionOptions::default()
    };

    let files = select_files(&options)?;
    assert_eq!(files.len(), 1, "Only the existing regular file is kept");
    assert_eq!(files[0].path, present);
    Ok(())
}

#[test]
fn test_sources_are_concatenated_in_order() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let work = tempfile::tempdir()?;
    let extra = create_test_file(work.path(), "extra.c", "e\n")?;
    let again = temp_dir.path().join("a.c");
    let list = create_path_list(work.path(), &[&extra, &again])?;

    let options = SelectionOptions {
        directory: Some(temp_dir.path().to_path_buf()),
        path_file: Some(list),
        allow_extensions: ext_list(&[".c"]),
        ..SelectionOptions::default()
    };

    let paths: Vec<_> = select_files(&options)?.into_iter().map(|f| f.path).collect();
    assert_eq!(paths, vec![again.clone(), extra, again]);
    Ok(())
}

#[test]
fn test_path_list_saved_with_bom() -> Result<()> {
    let work = tempfile::tempdir()?;
    let first = create_test_file(work.path(), "a.c", "a\r\n")?;
    let list = create_test_file(
        work.path(),
        "paths.txt",
        &format!("\u{feff}{}\r\n", first.display()),
    )?;

    let options = SelectionOptions {
        path_file: Some(list),
        ..SelectionOptions::default()
    };

    let files = select_files(&options)?;
    assert_eq!(files.len(), 1, "First listed path should survive the BOM");
    assert_eq!(files[0].path, first);
    Ok(())
}

#[test]
fn test_unreadable_path_list_aborts() -> Result<()> {
    let work = tempfile::tempdir()?;
    let options = SelectionOptions {
        path_file: Some(work.path().join("no-such-list.txt")),
        ..SelectionOptions::default()
    };

    let err = select_files(&options).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::PathList { .. })
    ));
    Ok(())
}

#[test]
fn test_create_dir_on_request() -> Result<()> {
    let work = tempfile::tempdir()?;
    let target = work.path().join("fresh");
    let options = SelectionOptions {
        directory: Some(target.clone()),
        create_dir: true,
        ..SelectionOptions::default()
    };

    assert!(select_files(&options)?.is_empty());
    assert!(target.is_dir());
    Ok(())
}
