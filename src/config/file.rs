use crate::config::Mode;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings read from a TOML file. Every field is optional.
///
/// ```toml
/// mode = "async"
/// max_count = 100
/// fail_on_call = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub mode: Option<Mode>,
    pub max_count: Option<usize>,
    pub fail_on_call: Option<usize>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Values set in `overrides` win over the ones in `self`.
    pub fn overlay(self, overrides: FileConfig) -> FileConfig {
        FileConfig {
            mode: overrides.mode.or(self.mode),
            max_count: overrides.max_count.or(self.max_count),
            fail_on_call: overrides.fail_on_call.or(self.fail_on_call),
        }
    }
}
