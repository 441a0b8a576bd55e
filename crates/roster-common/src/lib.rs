//! # roster-common
//!
//! Shared utilities including configuration, error handling, and telemetry.

pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, AppSettings, CacheConfig, ConfigError, CorsConfig, DiscordConfig, Environment,
    RateLimitConfig, RosterConfig, ServerConfig, DEFAULT_CUSTOM_BADGES, DEFAULT_FALLBACK_IDS,
};
pub use error::{AppError, AppResult};
pub use telemetry::{
    try_init_tracing, try_init_tracing_for, try_init_tracing_with_config, TracingConfig,
    TracingError,
};
