use crate::constants::MAX_HTTP_TIMEOUT_SECONDS;
use crate::error::AppError;
use std::path::Path;

/// Validates an endpoint URL setting.
///
/// # Validation Rules
/// - The value cannot be empty
/// - The value must start with `http://` or `https://`
pub fn validate_url(setting: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{setting} cannot be empty")));
    }

    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{setting} must be an http:// or https:// URL, got '{value}'"
        )));
    }

    Ok(())
}

/// Validates the HTTP timeout, which must be between 1 and
/// [`MAX_HTTP_TIMEOUT_SECONDS`] seconds.
pub fn validate_timeout(timeout_seconds: u64) -> Result<(), AppError> {
    if timeout_seconds == 0 || timeout_seconds > MAX_HTTP_TIMEOUT_SECONDS {
        return Err(AppError::config_error(format!(
            "HTTP timeout must be between 1 and {MAX_HTTP_TIMEOUT_SECONDS} seconds, got {timeout_seconds}"
        )));
    }
    Ok(())
}

/// Validates the optional log file path.
///
/// The parent directory is created when missing so a bad path fails at startup
/// instead of at the first log write.
pub fn validate_log_file_path(log_file_path: &Option<String>) -> Result<(), AppError> {
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
