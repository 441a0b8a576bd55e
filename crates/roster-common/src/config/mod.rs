//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CacheConfig, ConfigError, CorsConfig, DiscordConfig, Environment,
    RateLimitConfig, RosterConfig, ServerConfig, DEFAULT_CUSTOM_BADGES, DEFAULT_FALLBACK_IDS,
};
