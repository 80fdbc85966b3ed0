//! Application-wide constants and configuration values
//!
//! This module centralizes the platform limits, default timeouts and
//! user-visible texts so the rest of the code never repeats a magic value.

/// Default timeout for HTTP requests in seconds (server list and each Steam batch)
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 10;

/// Upper bound accepted for a configured HTTP timeout
pub const MAX_HTTP_TIMEOUT_SECONDS: u64 = 120;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default location of the icon attached to every embed
pub const DEFAULT_ICON_PATH: &str = "icon.png";

/// Discord embed size limits, counted in characters
pub mod embed_limits {
    /// Maximum length of a single field value
    pub const FIELD_VALUE_MAX: usize = 1024;

    /// Maximum length of a field name
    pub const FIELD_NAME_MAX: usize = 256;

    /// Maximum total length of all text in one embed
    pub const EMBED_TOTAL_MAX: usize = 6000;

    /// Characters reserved at the end of a truncated field for the marker
    pub const TRUNCATION_MARGIN: usize = 30;

    /// Extra characters assumed per field while packing
    pub const FIELD_PADDING: usize = 10;
}

/// Steam Web API settings
pub mod steam {
    /// Default base URL of the Steam Web API
    pub const DEFAULT_API_BASE: &str = "https://api.steampowered.com";

    /// Path of the player summaries endpoint
    pub const PLAYER_SUMMARIES_PATH: &str = "/ISteamUser/GetPlayerSummaries/v2/";

    /// Maximum number of Steam ids per player summaries request
    pub const BATCH_SIZE: usize = 100;

    /// Number of trailing identifier characters used for placeholder names
    pub const PLACEHOLDER_SUFFIX_LEN: usize = 8;
}

/// Texts shown in the embed and in plain replies
pub mod texts {
    pub const COMMAND_NAME: &str = "servers";
    pub const COMMAND_DESCRIPTION: &str = "Fetch and show all SF servers.";

    pub const EMBED_TITLE: &str = "SF Servers";
    pub const EMBED_DESCRIPTION: &str = "Live stats for SF HL2DM servers.";
    pub const EMBED_AUTHOR: &str = "SF Server Bot";
    pub const ICON_ATTACHMENT_NAME: &str = "icon.png";

    pub const NOTICE_HEADER: &str = "Notice";
    pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

    pub const UNNAMED_SERVER: &str = "unnamed";
    pub const UNKNOWN_VERSION: &str = "unknown";
    pub const UNKNOWN_PLAYER: &str = "Unknown";
    pub const MISSING_VALUE: &str = "n/a";
    pub const NO_WEAPON: &str = "none";

    pub const NO_DATA_REPLY: &str = "No servers available or failed to fetch data.";
    pub const TOO_LARGE_REPLY: &str = "Result too large for a single embed.";
    pub const SEND_FAILED_REPLY: &str = "Failed to send the server list.";
}

/// Environment variable names
pub mod env_vars {
    /// Discord bot token
    pub const BOT_TOKEN: &str = "SF_BOT_TOKEN";

    /// URL of the server list API
    pub const API_URL: &str = "SF_BOT_API_URL";

    /// Optional Steam Web API key
    pub const STEAM_API_KEY: &str = "SF_BOT_STEAM_API_KEY";

    /// Steam Web API base URL override
    pub const STEAM_API_BASE: &str = "SF_BOT_STEAM_API_BASE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "SF_BOT_HTTP_TIMEOUT";

    /// Icon file path override
    pub const ICON_PATH: &str = "SF_BOT_ICON_PATH";

    /// Log file path override
    pub const LOG_FILE: &str = "SF_BOT_LOG_FILE";

    /// Keys used by older deployments' `.env` files, read when the
    /// `SF_BOT_*` variable is unset
    pub mod legacy {
        pub const BOT_TOKEN: &str = "token";
        pub const API_URL: &str = "api";
        pub const STEAM_API_KEY: &str = "steam_api";
    }
}
