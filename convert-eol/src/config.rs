// src/config.rs
use crate::cli::Args;
use crate::error::SetupError;
use crate::models::{Eol, SelectionOptions, canonical_extensions};
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub dir: Option<PathBuf>,
    pub pathfile: Option<PathBuf>,
    pub extensionw: Option<Vec<String>>,
    pub extensionb: Option<Vec<String>>,
    pub eol: Option<Eol>,
    pub create_dir: Option<bool>,
}

impl ConfigFile {
    /// Joins relative `dir`/`pathfile` entries onto `base`.
    fn rebase(mut self, base: &Path) -> Self {
        self.dir = self.dir.map(|p| base.join(p));
        self.pathfile = self.pathfile.map(|p| base.join(p));
        self
    }
}

/// # Errors
///
/// Fails on invalid TOML, unknown keys or unrecognised values.
pub fn parse_config(content: &str) -> Result<ConfigFile> {
    toml::from_str(content).context("Invalid config file")
}

/// Loads a config file. Relative paths inside it are taken relative to the
/// file's own directory.
///
/// # Errors
///
/// Returns [`SetupError::Config`] if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let loaded = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
        .and_then(|content| parse_config(&content));

    match loaded {
        Ok(config) => {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            Ok(config.rebase(base))
        }
        Err(source) => Err(SetupError::Config {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

/// Merges command-line flags over the config file (if any) over defaults.
///
/// # Errors
///
/// Fails if `--config` was given and the file cannot be loaded.
pub fn resolve_options(args: &Args) -> Result<SelectionOptions> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ConfigFile::default(),
    };
    let defaults = SelectionOptions::default();

    let allow = args
        .allow_extensions
        .clone()
        .or(config.extensionw)
        .map_or(defaults.allow_extensions, |list| canonical_extensions(list.as_slice()));
    let deny = args
        .deny_extensions
        .clone()
        .or(config.extensionb)
        .map_or(defaults.deny_extensions, |list| canonical_extensions(list.as_slice()));

    Ok(SelectionOptions {
        directory: args.directory.clone().or(config.dir),
        path_file: args.path_file.clone().or(config.pathfile),
        allow_extensions: allow,
        deny_extensions: deny,
        eol: args.eol.or(config.eol).unwrap_or(defaults.eol),
        create_dir: args
            .create_dir_flag()
            .or(config.create_dir)
            .unwrap_or(defaults.create_dir),
    })
}
