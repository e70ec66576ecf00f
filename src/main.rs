//! Course registry - in-memory course and participant service
//!
//! Main entry point for the CLI and server.

mod cli;
mod server;

use clap::Parser;
use tracing::{error, warn};

use registry_config::{Config, ConfigValidator};

use cli::{Cli, Commands, DEFAULT_CONFIG_PATH};
use server::ConfigSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (mut config, source) = server::load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or_default() {
        Commands::Run { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            server::init_tracing(&config.logging)?;

            if source == ConfigSource::Defaults {
                warn!("Config file {} not found, using defaults", DEFAULT_CONFIG_PATH);
            }

            let result = ConfigValidator::validate(&config);
            for warning in &result.warnings {
                warn!("Config warning: {}", warning);
            }
            if !result.is_valid() {
                for err in &result.errors {
                    error!("Config error: {}", err);
                }
                return Err("invalid configuration".into());
            }

            server::run_server(config).await
        }
        Commands::CheckConfig => {
            if source == ConfigSource::Defaults {
                println!("Config file {} not found, checking defaults", DEFAULT_CONFIG_PATH);
            }
            if !check_config(&config) {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

/// Print validation results. Returns whether the config is usable.
fn check_config(config: &Config) -> bool {
    let result = ConfigValidator::validate(config);

    for warning in &result.warnings {
        println!("warning: {}", warning);
    }
    for err in &result.errors {
        eprintln!("error: {}", err);
    }

    if result.is_valid() {
        println!("Configuration OK (listening on {})", config.server.addr());
    }
    result.is_valid()
}
