use crate::cli::{Args, logs_to_stdout};
use crate::config::Config;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LOG_FILE_NAME: &str = "sf_servers_bot.log";
const DEFAULT_DIRECTIVE: &str = "sf_servers_bot=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into its directory and file name.
///
/// `--log-file` wins over the config file; without either the platform log
/// directory is used.
pub fn resolve_log_location(args: &Args, config: &Config) -> (String, String) {
    match args.log_file.as_ref().or(config.log_file_path.as_ref()) {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), DEFAULT_LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging configuration for the application.
///
/// - Bot mode: logs to both stdout and file
/// - `--once` without `--debug`: logs only to file, stdout is left for the preview
/// - Uses a daily rolling file appender and creates the log directory if needed
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(args, config);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);
    let init_result = if logs_to_stdout(args) {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .try_init()
    } else {
        registry.try_init()
    };
    init_result.map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_log_file_wins_over_config() {
        let args = Args {
            log_file: Some("/var/log/bot/cli.log".to_string()),
            ..Default::default()
        };
        let config = Config {
            log_file_path: Some("/tmp/config.log".to_string()),
            ..Default::default()
        };

        assert_eq!(
            resolve_log_location(&args, &config),
            ("/var/log/bot".to_string(), "cli.log".to_string())
        );
    }

    #[test]
    fn test_config_log_file_used_without_cli_flag() {
        let config = Config {
            log_file_path: Some("/tmp/config.log".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_log_location(&Args::default(), &config),
            ("/tmp".to_string(), "config.log".to_string())
        );
    }

    #[test]
    fn test_bare_file_name_goes_to_current_dir() {
        let args = Args {
            log_file: Some("bot.log".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve_log_location(&args, &Config::default()),
            (".".to_string(), "bot.log".to_string())
        );
    }

    #[test]
    fn test_default_log_location() {
        let (dir, file) = resolve_log_location(&Args::default(), &Config::default());
        assert_eq!(dir, Config::get_log_dir_path());
        assert_eq!(file, "sf_servers_bot.log");
    }
}
