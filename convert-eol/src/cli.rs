// src/cli.rs
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::models::Eol;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Convert all files in this directory (recursively)
    #[arg(long = "dir", value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Convert all files listed in this file, one path per line
    #[arg(long = "pathfile", value_name = "PATH")]
    pub path_file: Option<PathBuf>,

    /// Extension allowlist, "*" selects every extension [default: *]
    #[arg(long = "extensionw", value_name = "EXT", num_args = 1..)]
    pub allow_extensions: Option<Vec<String>>,

    /// Extension denylist, takes precedence over the allowlist
    #[arg(long = "extensionb", value_name = "EXT", num_args = 1..)]
    pub deny_extensions: Option<Vec<String>>,

    /// Target EOL: 0 = LF, 1 = CRLF [default: 0]
    #[arg(long, value_name = "0|1")]
    pub eol: Option<Eol>,

    /// Create the --dir directory if it does not exist
    #[arg(long, overrides_with = "no_create_dir")]
    pub create_dir: bool,

    /// Never create the --dir directory, even if the config file asks to
    #[arg(long, overrides_with = "create_dir")]
    pub no_create_dir: bool,

    /// TOML file providing defaults for the options above
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More detail on stderr: -v adds per-file conversion events, -vv traces
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors, hiding the per-candidate selection lines
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Directory creation as requested on the command line, if at all.
    #[must_use]
    pub const fn create_dir_flag(&self) -> Option<bool> {
        if self.create_dir {
            Some(true)
        } else if self.no_create_dir {
            Some(false)
        } else {
            None
        }
    }
}

/// Sample invocation printed when the arguments cannot be parsed.
#[must_use]
pub fn usage_example() -> String {
    String::from(
        "convert-eol --dir ./src --pathfile ./paths.txt \
         --extensionw .c .h .cpp --extensionb .txt .png --eol 0",
    )
}
