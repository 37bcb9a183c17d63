// src/core/selector/extension.rs
use crate::models::{WILDCARD, canonical_extensions};
use std::collections::HashSet;

/// Allow/deny decision over file extensions. The denylist always wins.
#[derive(Debug, Default)]
pub struct ExtensionFilter {
    allow: HashSet<String>,
    allow_all: bool,
    deny: HashSet<String>,
}

impl ExtensionFilter {
    #[must_use]
    pub fn new<S: AsRef<str>>(allow: &[S], deny: &[S]) -> Self {
        let allow: HashSet<String> = canonical_extensions(allow).into_iter().collect();
        let allow_all = allow.is_empty() || allow.contains(WILDCARD);
        let deny = canonical_extensions(deny).into_iter().collect();
        Self {
            allow,
            allow_all,
            deny,
        }
    }

    #[must_use]
    pub fn accepts(&self, extension: &str) -> bool {
        (self.allow_all || self.allow.contains(extension)) && !self.deny.contains(extension)
    }
}
