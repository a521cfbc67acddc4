//! Notification records and their listing filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestmat_core::{NotificationId, UserId};

/// A notification addressed to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    /// Free-form payload; shape depends on `type`.
    pub data: serde_json::Value,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Optional predicate for the notifications listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationFilter {
    /// Keep only notifications whose read flag equals this value.
    pub read: Option<bool>,
}

impl NotificationFilter {
    pub fn matches(&self, notification: &Notification) -> bool {
        match self.read {
            Some(read) => notification.read == read,
            None => true,
        }
    }
}
