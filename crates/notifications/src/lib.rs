//! `gestmat-notifications` — user notification records.

pub mod notification;

pub use notification::{Notification, NotificationFilter};
