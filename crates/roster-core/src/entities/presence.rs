//! Presence entity - a user's live status

use serde::{Deserialize, Deserializer, Serialize};

use crate::value_objects::Snowflake;

/// User online status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// User is online and active
    Online,
    /// User is idle (away from keyboard)
    Idle,
    /// Do not disturb
    Dnd,
    /// User is offline (or invisible)
    #[default]
    Offline,
}

impl UserStatus {
    /// Display order used when grouping a roster
    pub const ORDERED: [UserStatus; 4] = [Self::Online, Self::Idle, Self::Dnd, Self::Offline];

    /// Check if this status counts as online for others
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Offline)
    }

    /// Lenient parse: anything unrecognised (e.g. `invisible`) is offline
    #[must_use]
    pub fn from_upstream(s: &str) -> Self {
        s.parse().unwrap_or(Self::Offline)
    }

    /// Position in [`UserStatus::ORDERED`]
    #[must_use]
    pub fn rank(self) -> usize {
        match self {
            Self::Online => 0,
            Self::Idle => 1,
            Self::Dnd => 2,
            Self::Offline => 3,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => write!(f, "online"),
            Self::Idle => write!(f, "idle"),
            Self::Dnd => write!(f, "dnd"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Self::Online),
            "idle" => Ok(Self::Idle),
            "dnd" => Ok(Self::Dnd),
            "offline" => Ok(Self::Offline),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_upstream(&raw))
    }
}

/// Per-platform status breakdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<UserStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<UserStatus>,
}

impl ClientStatus {
    pub fn is_empty(&self) -> bool {
        self.desktop.is_none() && self.mobile.is_none() && self.web.is_none()
    }
}

/// Activity shown under a user's name (game, custom status, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    /// Upstream activity type (0 = playing, 4 = custom, ...)
    #[serde(rename = "type", default)]
    pub kind: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Live presence of one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    pub user_id: Snowflake,
    pub status: UserStatus,
    #[serde(default)]
    pub client_status: ClientStatus,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Presence {
    #[must_use]
    pub fn new(user_id: Snowflake, status: UserStatus) -> Self {
        Self {
            user_id,
            status,
            client_status: ClientStatus::default(),
            activities: Vec::new(),
        }
    }

    /// Safe default used whenever presence data is unavailable
    #[must_use]
    pub fn offline(user_id: Snowflake) -> Self {
        Self::new(user_id, UserStatus::Offline)
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status.is_visible()
    }
}
