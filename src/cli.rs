//! CLI definitions for the course registry.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Config file used when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Course registry CLI.
#[derive(Debug, Parser)]
#[command(name = "course-registry")]
#[command(about = "In-memory course and participant registry")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path [default: config/default.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Server port, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate the configuration, then exit
    CheckConfig,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            host: None,
            port: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["course-registry"]).unwrap();
        assert_eq!(cli.config, None);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_explicit_default_path_is_kept() {
        let cli = Cli::try_parse_from(["course-registry", "--config", DEFAULT_CONFIG_PATH]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from(DEFAULT_CONFIG_PATH)));
    }

    #[test]
    fn test_run_overrides() {
        let cli =
            Cli::try_parse_from(["course-registry", "run", "--host", "0.0.0.0", "--port", "9000"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Run {
                host: Some("0.0.0.0".to_string()),
                port: Some(9000),
            })
        );
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["course-registry", "check-config", "--config", "/etc/reg.toml"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/reg.toml")));
        assert_eq!(cli.command, Some(Commands::CheckConfig));
    }

    #[test]
    fn test_invalid_port() {
        assert!(Cli::try_parse_from(["course-registry", "run", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_default_command_is_run() {
        assert_eq!(
            Commands::default(),
            Commands::Run {
                host: None,
                port: None
            }
        );
    }
}
