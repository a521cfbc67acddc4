//! `gestmat-auth` — authentication boundary for the mock API.
//!
//! User accounts, the shared development credential, and the session
//! registry. Intentionally decoupled from HTTP and storage.

pub mod credentials;
pub mod session;
pub mod user;

pub use credentials::{password_is_valid, DEV_PASSWORD};
pub use session::{InMemorySessionStore, SessionStore, SessionToken};
pub use user::{Role, User, UserFilter};
