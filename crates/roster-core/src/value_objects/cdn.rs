//! CDN asset URL derivation
//!
//! Avatar and banner images are addressed by user id and image hash.
//! Hashes prefixed with `a_` are animated and served as GIF.

use std::fmt;

use super::Snowflake;

/// Default Discord CDN host
pub const DEFAULT_CDN_BASE: &str = "https://cdn.discordapp.com";

/// Banner size requested from the CDN
pub const BANNER_SIZE: u32 = 4096;

/// Kind of profile image stored on the CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Avatar,
    Banner,
}

impl AssetKind {
    fn path(self) -> &'static str {
        match self {
            Self::Avatar => "avatars",
            Self::Banner => "banners",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Builds CDN URLs for user assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnUrls {
    base: String,
}

impl Default for CdnUrls {
    fn default() -> Self {
        Self::new(DEFAULT_CDN_BASE)
    }
}

impl CdnUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// File extension for an image hash
    #[inline]
    pub fn extension(hash: &str) -> &'static str {
        if hash.starts_with("a_") {
            "gif"
        } else {
            "png"
        }
    }

    /// URL of an asset without query parameters
    pub fn asset_url(&self, kind: AssetKind, user_id: Snowflake, hash: &str) -> String {
        format!(
            "{}/{}/{}/{}.{}",
            self.base,
            kind,
            user_id,
            hash,
            Self::extension(hash)
        )
    }

    /// Avatar URL: `{cdn}/avatars/{id}/{hash}.{gif|png}`
    pub fn avatar_url(&self, user_id: Snowflake, hash: &str) -> String {
        self.asset_url(AssetKind::Avatar, user_id, hash)
    }

    /// Banner URL: `{cdn}/banners/{id}/{hash}.{gif|png}?size=4096`
    pub fn banner_url(&self, user_id: Snowflake, hash: &str) -> String {
        format!(
            "{}?size={BANNER_SIZE}",
            self.asset_url(AssetKind::Banner, user_id, hash)
        )
    }
}
