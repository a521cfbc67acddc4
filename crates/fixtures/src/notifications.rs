//! Notification repository and its fixture dataset.

use gestmat_core::{NotificationId, UserId};
use gestmat_notifications::Notification;

/// Read access to notifications.
pub trait NotificationRepository: Send + Sync {
    fn list(&self) -> Vec<Notification>;
    fn find_by_id(&self, id: NotificationId) -> Option<Notification>;
}

/// Fixture-backed notification repository.
#[derive(Debug)]
pub struct FixtureNotificationRepository {
    notifications: Vec<Notification>,
}

impl FixtureNotificationRepository {
    pub fn new() -> Self {
        Self {
            notifications: seed(),
        }
    }
}

impl Default for FixtureNotificationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationRepository for FixtureNotificationRepository {
    fn list(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    fn find_by_id(&self, id: NotificationId) -> Option<Notification> {
        self.notifications.iter().find(|n| n.id == id).cloned()
    }
}

/// The notifications known to the mock.
pub fn seed() -> Vec<Notification> {
    vec![Notification {
        id: NotificationId::new(1),
        user_id: UserId::new(6),
        kind: "validation_requise".to_string(),
        title: "Validation requise".to_string(),
        message: "Demande DEM2024-001 en attente".to_string(),
        data: serde_json::json!({ "request_id": 1 }),
        read: false,
        created_at: crate::fixture_timestamp("2024-07-15T10:35:00Z"),
    }]
}
