//! External user entity - a Discord user record as fetched from upstream

use serde::{Deserialize, Serialize};

use crate::value_objects::{CdnUrls, Snowflake, UserFlags};

/// Discord user as returned by `GET /users/{id}`
///
/// Immutable once fetched, apart from the derived `banner_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUser {
    pub id: Snowflake,
    pub username: String,
    pub display_name: Option<String>,
    pub discriminator: String,
    pub avatar_hash: Option<String>,
    pub banner_hash: Option<String>,
    pub banner_color: Option<String>,
    pub public_flags: u64,
    pub bot: bool,
    /// CDN banner URL, derived from `banner_hash`
    pub banner_url: Option<String>,
}

impl ExternalUser {
    /// Create a user with only the required fields set
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            display_name: None,
            discriminator: "0".to_string(),
            avatar_hash: None,
            banner_hash: None,
            banner_color: None,
            public_flags: 0,
            bot: false,
            banner_url: None,
        }
    }

    /// Get the full tag: username#discriminator (legacy accounts only)
    pub fn tag(&self) -> String {
        if self.discriminator == "0" {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }

    /// Name shown in the roster (global display name, falling back to username)
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// Check if user is a bot account
    #[inline]
    pub fn is_bot(&self) -> bool {
        self.bot
    }

    /// Known badge flags of this user
    #[inline]
    pub fn flags(&self) -> UserFlags {
        UserFlags::from_public_flags(self.public_flags)
    }

    /// Derive `banner_url` from the banner hash, if there is one
    pub fn resolve_banner(&mut self, cdn: &CdnUrls) {
        if let Some(hash) = self.banner_hash.as_deref() {
            self.banner_url = Some(cdn.banner_url(self.id, hash));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_tag() {
        let mut user = ExternalUser::new(Snowflake::new(1), "testuser");
        assert_eq!(user.tag(), "testuser");

        user.discriminator = "1234".to_string();
        assert_eq!(user.tag(), "testuser#1234");
    }

    #[test]
    fn test_name_prefers_display_name() {
        let mut user = ExternalUser::new(Snowflake::new(1), "testuser");
        assert_eq!(user.name(), "testuser");

        user.display_name = Some("Test User".to_string());
        assert_eq!(user.name(), "Test User");
    }

    #[test]
    fn test_resolve_banner() {
        let cdn = CdnUrls::default();
        let mut user = ExternalUser::new(Snowflake::new(123), "testuser");

        user.resolve_banner(&cdn);
        assert!(user.banner_url.is_none());

        user.banner_hash = Some("a_banner".to_string());
        user.resolve_banner(&cdn);
        assert_eq!(
            user.banner_url.as_deref(),
            Some("https://cdn.discordapp.com/banners/123/a_banner.gif?size=4096")
        );
    }

    #[test]
    fn test_flags() {
        let mut user = ExternalUser::new(Snowflake::new(1), "testuser");
        user.public_flags = (1 << 22) | (1 << 10);
        assert_eq!(user.flags(), UserFlags::ACTIVE_DEVELOPER);
    }
}
