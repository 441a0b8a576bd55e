//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use roster_core::{CustomBadgeTable, Snowflake};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Built-in roster used when no guild is configured
pub const DEFAULT_FALLBACK_IDS: [i64; 20] = [
    1_287_660_832_133_611_520,
    601_508_234_632_888_320,
    1_012_383_875_810_476_102,
    951_692_654_083_719_199,
    1_097_860_570_318_897_272,
    912_292_782_373_216_276,
    1_093_942_698_664_276_129,
    691_995_909_634_129_941,
    444_255_651_397_632_001,
    722_715_868_789_866_507,
    1_014_836_365_516_615_760,
    1_002_377_371_892_072_498,
    807_477_336_588_812_308,
    1_210_948_757_508_591_666,
    767_437_270_323_429_377,
    777_305_854_931_370_026,
    981_421_662_341_824_552,
    1_138_867_088_400_855_102,
    1_157_544_020_143_255_614,
    1_018_206_700_517_470_228,
];

/// Built-in role → badge mappings
pub const DEFAULT_CUSTOM_BADGES: [(i64, &str); 2] = [
    (1_287_660_832_133_611_520, "slave owner"),
    (601_508_234_632_888_320, "admin"),
];

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub discord: DiscordConfig,
    pub cache: CacheConfig,
    pub roster: RosterConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Upstream Discord API configuration
#[derive(Clone)]
pub struct DiscordConfig {
    pub bot_token: String,
    pub api_base: String,
    pub cdn_base: String,
    /// Guild to load when a request does not name one
    pub guild_id: Option<Snowflake>,
    pub request_timeout_secs: u64,
}

impl DiscordConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Keeps the bot token out of logs
impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("bot_token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("cdn_base", &self.cdn_base)
            .field("guild_id", &self.guild_id)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// Cache TTLs per data kind, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub user_ttl_secs: u64,
    pub presence_ttl_secs: u64,
    pub guild_members_ttl_secs: u64,
    pub guild_presences_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            user_ttl_secs: default_user_ttl(),
            presence_ttl_secs: default_presence_ttl(),
            guild_members_ttl_secs: default_guild_members_ttl(),
            guild_presences_ttl_secs: default_guild_presences_ttl(),
        }
    }
}

/// Roster composition settings
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub fallback_ids: Vec<Snowflake>,
    pub custom_badges: CustomBadgeTable,
    pub load_timeout_secs: u64,
}

impl RosterConfig {
    #[must_use]
    pub fn load_timeout(&self) -> Duration {
        Duration::from_secs(self.load_timeout_secs)
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            fallback_ids: default_fallback_ids(),
            custom_badges: default_custom_badges(),
            load_timeout_secs: default_load_timeout(),
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "discord-roster".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_api_base() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_cdn_base() -> String {
    roster_core::value_objects::DEFAULT_CDN_BASE.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_load_timeout() -> u64 {
    60
}

fn default_user_ttl() -> u64 {
    60
}

fn default_presence_ttl() -> u64 {
    30
}

fn default_guild_members_ttl() -> u64 {
    30
}

fn default_guild_presences_ttl() -> u64 {
    15
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_fallback_ids() -> Vec<Snowflake> {
    DEFAULT_FALLBACK_IDS.iter().copied().map(Snowflake::new).collect()
}

fn default_custom_badges() -> CustomBadgeTable {
    DEFAULT_CUSTOM_BADGES
        .iter()
        .map(|(role, badge)| (Snowflake::new(*role), (*badge).to_string()))
        .collect()
}

/// Read an optional variable, failing if it is set but does not parse
fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        _ => Ok(None),
    }
}

/// Comma-separated snowflake list
fn parse_id_list(name: &'static str, raw: &str) -> Result<Vec<Snowflake>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Snowflake::parse(s).map_err(|_| ConfigError::InvalidValue(name, s.to_string())))
        .collect()
}

/// Comma-separated `role_id:badge` pairs
fn parse_badge_table(name: &'static str, raw: &str) -> Result<CustomBadgeTable, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (role, badge) = pair
                .split_once(':')
                .ok_or_else(|| ConfigError::InvalidValue(name, pair.to_string()))?;
            let role = Snowflake::parse(role)
                .map_err(|_| ConfigError::InvalidValue(name, pair.to_string()))?;
            let badge = badge.trim();
            if badge.is_empty() {
                return Err(ConfigError::InvalidValue(name, pair.to_string()));
            }
            Ok((role, badge.to_string()))
        })
        .collect()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `DISCORD_BOT_TOKEN` is missing or a value is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    ///
    /// # Errors
    /// Same as [`AppConfig::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingVar("DISCORD_BOT_TOKEN"))?;

        let guild_id = match lookup("DISCORD_GUILD_ID").filter(|s| !s.trim().is_empty()) {
            Some(raw) => Some(
                Snowflake::parse(&raw)
                    .map_err(|_| ConfigError::InvalidValue("DISCORD_GUILD_ID", raw))?,
            ),
            None => None,
        };

        let fallback_ids = match lookup("ROSTER_FALLBACK_IDS") {
            Some(raw) => parse_id_list("ROSTER_FALLBACK_IDS", &raw)?,
            None => default_fallback_ids(),
        };

        let custom_badges = match lookup("ROSTER_CUSTOM_BADGES") {
            Some(raw) => parse_badge_table("ROSTER_CUSTOM_BADGES", &raw)?,
            None => default_custom_badges(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_var(&lookup, "API_PORT")?.unwrap_or_else(default_port),
            },
            discord: DiscordConfig {
                bot_token,
                api_base: lookup("DISCORD_API_BASE").unwrap_or_else(default_api_base),
                cdn_base: lookup("DISCORD_CDN_BASE").unwrap_or_else(default_cdn_base),
                guild_id,
                request_timeout_secs: parse_var(&lookup, "DISCORD_REQUEST_TIMEOUT_SECS")?
                    .unwrap_or_else(default_request_timeout),
            },
            cache: CacheConfig {
                user_ttl_secs: parse_var(&lookup, "USER_CACHE_TTL_SECS")?
                    .unwrap_or_else(default_user_ttl),
                presence_ttl_secs: parse_var(&lookup, "PRESENCE_CACHE_TTL_SECS")?
                    .unwrap_or_else(default_presence_ttl),
                guild_members_ttl_secs: parse_var(&lookup, "GUILD_MEMBERS_CACHE_TTL_SECS")?
                    .unwrap_or_else(default_guild_members_ttl),
                guild_presences_ttl_secs: parse_var(&lookup, "GUILD_PRESENCES_CACHE_TTL_SECS")?
                    .unwrap_or_else(default_guild_presences_ttl),
            },
            roster: RosterConfig {
                fallback_ids,
                custom_badges,
                load_timeout_secs: parse_var(&lookup, "ROSTER_LOAD_TIMEOUT_SECS")?
                    .unwrap_or_else(default_load_timeout),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(&lookup, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var(&lookup, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
