//! PresencePayload -> Presence mapper

use roster_core::Presence;

use crate::models::PresencePayload;

impl From<PresencePayload> for Presence {
    fn from(payload: PresencePayload) -> Self {
        Presence {
            user_id: payload.user.id,
            status: payload.status,
            client_status: payload.client_status,
            activities: payload.activities,
        }
    }
}
