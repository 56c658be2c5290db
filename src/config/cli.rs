use crate::config::{FileConfig, Mode, RunConfig};
use crate::utils::error::Result;
use crate::utils::validation::validate_path;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "counter-doer")]
#[command(about = "Counts the characters of an input and runs a doer that many times")]
pub struct CliConfig {
    /// Text whose characters are counted
    pub input: String,

    #[arg(long, value_enum, help = "Run doer calls sequentially or as detached tasks")]
    pub mode: Option<Mode>,

    #[arg(long, help = "Reject inputs longer than this many characters")]
    pub max_count: Option<usize>,

    #[arg(long, help = "Make the N-th doer call fail (1-based)")]
    pub fail_on_call: Option<usize>,

    #[arg(long, help = "TOML file with default settings")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    fn overrides(&self) -> FileConfig {
        FileConfig {
            mode: self.mode,
            max_count: self.max_count,
            fail_on_call: self.fail_on_call,
        }
    }

    /// Loads the config file, if any, and applies command-line values on top.
    pub fn resolve(&self) -> Result<RunConfig> {
        let base = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                tracing::debug!("Loading config file: {}", path);
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };

        Ok(RunConfig::new(self.input.clone(), base.overlay(self.overrides())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::parse_from([
            "counter-doer",
            "foo",
            "--mode",
            "async",
            "--fail-on-call",
            "2",
        ]);

        assert_eq!(config.input, "foo");
        assert_eq!(config.mode, Some(Mode::Async));
        assert_eq!(config.fail_on_call, Some(2));
        assert!(config.config.is_none());
    }

    #[test]
    fn test_resolve_without_file() {
        let config = CliConfig::parse_from(["counter-doer", "foo"]);

        let run = config.resolve().unwrap();

        assert_eq!(run, RunConfig::new("foo", FileConfig::default()));
    }

    #[test]
    fn test_command_line_wins_over_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "mode = \"async\"\nmax_count = 50").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config =
            CliConfig::parse_from(["counter-doer", "foo", "--config", &path, "--mode", "sync"]);
        let run = config.resolve().unwrap();

        assert_eq!(run.mode, Mode::Sync);
        assert_eq!(run.max_count, Some(50));
    }

    #[test]
    fn test_resolve_rejects_empty_config_path() {
        let config = CliConfig::parse_from(["counter-doer", "foo", "--config", ""]);

        assert!(config.resolve().is_err());
    }
}
