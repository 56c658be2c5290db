#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use file::FileConfig;

/// How the doer calls are run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One after another, stopping at the first failure.
    #[default]
    Sync,
    /// Fire-and-forget Tokio tasks.
    Async,
}

/// Fully resolved settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: String,
    pub mode: Mode,
    pub max_count: Option<usize>,
    pub fail_on_call: Option<usize>,
}

impl RunConfig {
    pub fn new(input: impl Into<String>, settings: FileConfig) -> Self {
        Self {
            input: input.into(),
            mode: settings.mode.unwrap_or_default(),
            max_count: settings.max_count,
            fail_on_call: settings.fail_on_call,
        }
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_count) = self.max_count {
            validate_positive_number("max_count", max_count, 1)?;
        }
        if let Some(fail_on_call) = self.fail_on_call {
            validate_positive_number("fail_on_call", fail_on_call, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Error;

    #[test]
    fn test_run_config_defaults_to_sync() {
        let config = RunConfig::new("foo", FileConfig::default());

        assert_eq!(config.mode, Mode::Sync);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_run_config_rejects_zero_fail_on_call() {
        let config = RunConfig::new(
            "foo",
            FileConfig {
                fail_on_call: Some(0),
                ..FileConfig::default()
            },
        );

        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValueError { ref field, .. }) if field == "fail_on_call"
        ));
    }

    #[test]
    fn test_run_config_rejects_zero_max_count() {
        let config = RunConfig::new(
            "foo",
            FileConfig {
                max_count: Some(0),
                ..FileConfig::default()
            },
        );

        assert!(config.validate().is_err());
    }
}
