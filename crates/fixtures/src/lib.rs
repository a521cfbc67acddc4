//! Infrastructure layer: fixture-backed repositories standing in for a
//! database.
//!
//! Each module pairs a repository trait with its fixture-backed
//! implementation and the hardcoded dataset it serves. Swapping in a real
//! persistence layer means re-implementing the traits, not touching the
//! handlers.

use chrono::{DateTime, Utc};

pub mod directions;
pub mod materials;
pub mod notifications;
pub mod requests;
pub mod users;

pub use directions::{DirectionRepository, FixtureDirectionRepository};
pub use materials::{FixtureMaterialRepository, MaterialRepository};
pub use notifications::{FixtureNotificationRepository, NotificationRepository};
pub use requests::{FixtureRequestRepository, RequestRepository};
pub use users::{FixtureUserRepository, UserRepository};

/// Parse an RFC 3339 literal from the fixture datasets.
pub(crate) fn fixture_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("fixture timestamps are valid RFC 3339")
}
