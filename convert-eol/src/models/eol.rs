// src/models/eol.rs
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Target line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Eol {
    #[default]
    #[serde(rename = "lf", alias = "LF", alias = "0")]
    Lf,
    #[serde(rename = "crlf", alias = "CRLF", alias = "1")]
    Crlf,
}

impl Eol {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

impl FromStr for Eol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" | "lf" | "LF" => Ok(Self::Lf),
            "1" | "crlf" | "CRLF" => Ok(Self::Crlf),
            other => Err(format!(
                "invalid EOL '{other}': expected 0 (LF) or 1 (CRLF)"
            )),
        }
    }
}

impl fmt::Display for Eol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => f.write_str("LF"),
            Self::Crlf => f.write_str("CRLF"),
        }
    }
}
