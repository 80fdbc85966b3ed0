use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_ICON_PATH, env_vars, steam};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{validate_log_file_path, validate_timeout, validate_url};

/// Configuration structure for the bot.
///
/// Values come from an optional TOML file and are then overridden by
/// environment variables (a `.env` file in the working directory is loaded
/// into the environment before this happens).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Discord bot token. Only required when running as a bot.
    #[serde(default)]
    pub bot_token: String,
    /// URL of the server list API returning a JSON array of servers.
    #[serde(default)]
    pub api_url: String,
    /// Steam Web API key. Player names are not looked up when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steam_api_key: Option<String>,
    /// Base URL of the Steam Web API.
    #[serde(default = "default_steam_api_base")]
    pub steam_api_base: String,
    /// HTTP timeout in seconds, applied to every request.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path of the icon attached to the embed.
    #[serde(default = "default_icon_path")]
    pub icon_path: String,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_steam_api_base() -> String {
    steam::DEFAULT_API_BASE.to_string()
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_icon_path() -> String {
    DEFAULT_ICON_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bot_token: String::new(),
            api_url: String::new(),
            steam_api_key: None,
            steam_api_base: default_steam_api_base(),
            http_timeout_seconds: default_http_timeout(),
            icon_path: default_icon_path(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default config file
    /// location when no path is given, then applies environment overrides
    /// and validates the result.
    ///
    /// A missing config file is not an error: the bot can be configured from
    /// the environment alone.
    ///
    /// # Environment Variables
    /// - `SF_BOT_TOKEN` - Discord bot token
    /// - `SF_BOT_API_URL` - Server list API URL
    /// - `SF_BOT_STEAM_API_KEY` - Steam Web API key (empty disables lookups)
    /// - `SF_BOT_STEAM_API_BASE` - Steam Web API base URL
    /// - `SF_BOT_HTTP_TIMEOUT` - HTTP timeout in seconds (default: 10)
    /// - `SF_BOT_ICON_PATH` - Icon file path
    /// - `SF_BOT_LOG_FILE` - Log file path
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let config_path = path.map(str::to_string).unwrap_or_else(get_config_path);

        let mut config = if Path::new(&config_path).exists() {
            info!("Loading configuration from {config_path}");
            Self::load_from_path(&config_path).await?
        } else if path.is_some() {
            return Err(AppError::config_error(format!(
                "Config file '{config_path}' does not exist"
            )));
        } else {
            debug!("No config file at {config_path}, using environment only");
            Config::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a TOML file without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies overrides from a variable lookup, normally the process environment.
    ///
    /// An empty Steam key clears the key, matching an unset variable in a
    /// `.env` file. Unparsable timeouts are ignored. The token, API URL and
    /// Steam key also fall back to the legacy `token`, `api` and `steam_api`
    /// keys.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup_with_legacy =
            |name: &str, legacy: &str| lookup(name).or_else(|| lookup(legacy));

        if let Some(token) = lookup_with_legacy(env_vars::BOT_TOKEN, env_vars::legacy::BOT_TOKEN) {
            self.bot_token = token;
        }

        if let Some(api_url) = lookup_with_legacy(env_vars::API_URL, env_vars::legacy::API_URL) {
            self.api_url = api_url;
        }

        if let Some(key) =
            lookup_with_legacy(env_vars::STEAM_API_KEY, env_vars::legacy::STEAM_API_KEY)
        {
            self.steam_api_key = Some(key);
        }
        if self
            .steam_api_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            self.steam_api_key = None;
        }

        if let Some(base) = lookup(env_vars::STEAM_API_BASE) {
            self.steam_api_base = base;
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }

        if let Some(icon_path) = lookup(env_vars::ICON_PATH) {
            self.icon_path = icon_path;
        }

        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings.
    ///
    /// The bot token is not checked here; see [`Config::require_bot_token`].
    pub fn validate(&self) -> Result<(), AppError> {
        validate_url("API URL", &self.api_url)?;
        validate_url("Steam API base URL", &self.steam_api_base)?;
        validate_timeout(self.http_timeout_seconds)?;
        if self.icon_path.trim().is_empty() {
            return Err(AppError::config_error("Icon path cannot be empty"));
        }
        validate_log_file_path(&self.log_file_path)
    }

    /// Returns the bot token, failing when it is not configured.
    pub fn require_bot_token(&self) -> Result<&str, AppError> {
        let token = self.bot_token.trim();
        if token.is_empty() {
            return Err(AppError::config_error(format!(
                "Bot token is missing, set {} or bot_token in the config file",
                env_vars::BOT_TOKEN
            )));
        }
        Ok(token)
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        get_log_dir_path()
    }
}
