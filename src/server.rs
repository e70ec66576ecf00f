//! Server initialization and startup logic.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use registry_api::{AppState, RegistryServer};
use registry_config::{Config, ConfigError, ConfigLoader, LoggingConfig};
use registry_store::RegistryStore;

use crate::cli::DEFAULT_CONFIG_PATH;

/// Where the effective configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    File,
    /// No `--config` was given and the default file was absent.
    Defaults,
}

/// Load the configuration named by `--config`, or the default file.
///
/// Only the implicit default may be missing; an explicitly given file must
/// exist, even when it is the default path.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigSource), ConfigError> {
    load_config_from(explicit, Path::new(DEFAULT_CONFIG_PATH))
}

fn load_config_from(
    explicit: Option<&Path>,
    default: &Path,
) -> Result<(Config, ConfigSource), ConfigError> {
    match explicit {
        Some(path) => ConfigLoader::load(path).map(|config| (config, ConfigSource::File)),
        None => match ConfigLoader::load(default) {
            Ok(config) => Ok((config, ConfigSource::File)),
            Err(ConfigError::NotFound(_)) => Ok((Config::default(), ConfigSource::Defaults)),
            Err(e) => Err(e),
        },
    }
}

/// Initialize tracing with console output and optional daily log files.
///
/// `RUST_LOG` overrides the configured level.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file_layer = if logging.file {
        std::fs::create_dir_all(&logging.directory)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("course-registry")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&logging.directory)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes buffered lines on drop, so it must outlive main.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// Run the server in foreground until Ctrl-C.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting course-registry v{}", env!("CARGO_PKG_VERSION"));

    let state = Arc::new(AppState::new(RegistryStore::new()));
    let server = RegistryServer::new(config.server.clone(), state);

    info!("API Endpoints:");
    info!("  GET    /courses                       - list courses");
    info!("  POST   /courses                       - create course");
    info!("  PUT    /courses/{{course_id}}           - update course");
    info!("  DELETE /courses/{{course_id}}           - delete course");
    info!("  GET    /participants[?course_id=N]    - list participants");
    info!("  POST   /participants                  - create participant");
    info!("  PUT    /participants/{{participant_id}} - update participant");
    info!("  GET    /health, /metrics, /livez, /readyz");

    server.run(shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9100").unwrap();

        let (config, source) = load_config(Some(file.path())).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(source, ConfigSource::File);
    }

    #[test]
    fn test_load_config_explicit_missing_path_fails() {
        let result = load_config(Some(Path::new("/nonexistent/registry.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_config_missing_default_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("default.toml");

        let (config, source) = load_config_from(None, &default).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.server.port, Config::default().server.port);
    }

    #[test]
    fn test_load_config_explicit_default_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("default.toml");

        let result = load_config_from(Some(&default), &default);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_config_present_default_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join("default.toml");
        std::fs::write(&default, "[server]\nport = 9200\n").unwrap();

        let (config, source) = load_config_from(None, &default).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.server.port, 9200);
    }

    #[test]
    fn test_load_config_invalid_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }
}
