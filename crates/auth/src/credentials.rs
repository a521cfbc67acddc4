//! Development credential check.
//!
//! The mock accepts one literal password for every account. This is not
//! authentication; it exists so the frontend's login flow has something to
//! talk to before the real backend lands.

/// The single password accepted for all accounts.
pub const DEV_PASSWORD: &str = "password";

/// Check a candidate password against the shared development credential.
pub fn password_is_valid(candidate: &str) -> bool {
    candidate == DEV_PASSWORD
}
