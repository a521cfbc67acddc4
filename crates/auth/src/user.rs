//! User account records and their listing filter.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestmat_core::{search_matches, DirectionId, UserId};

/// Role identifier carried by a user account.
///
/// Roles are opaque strings at this layer; the fixture accounts use
/// `agent`, `directeur`, `gestionnaire_stock`, `daaf`, `secretaire_executif`
/// and `admin`, but nothing restricts the set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A user account.
///
/// Flat record mirroring the future backend's wire shape. No invariant is
/// enforced beyond field presence; in particular `direction_id` is not
/// checked against the direction records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub direction_id: Option<DirectionId>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional predicates for the users listing. Predicates are ANDed; an
/// absent or empty parameter matches everything.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Free-text search over name and email, case-insensitive.
    pub search: Option<String>,
    /// Exact role match.
    pub role: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() && !search_matches(search, &[&user.name, &user.email]) {
                return false;
            }
        }

        if let Some(role) = self.role.as_deref() {
            if !role.is_empty() && user.role.as_str() != role {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, role: &str) -> User {
        let ts = "2024-01-15T08:00:00Z"
            .parse::<DateTime<Utc>>()
            .expect("valid timestamp");
        User {
            id: UserId::new(1),
            name: name.to_string(),
            email: email.to_string(),
            role: Role::new(role.to_string()),
            direction_id: Some(DirectionId::new(1)),
            active: true,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let filter = UserFilter {
            search: Some("MARIE".to_string()),
            role: None,
        };
        assert!(filter.matches(&user("Marie Koffi", "marie.koffi@adjarra.bj", "directeur")));
        assert!(!filter.matches(&user("Jean Dupont", "jean.dupont@adjarra.bj", "agent")));
    }

    #[test]
    fn search_matches_email_too() {
        let filter = UserFilter {
            search: Some("koffi@".to_string()),
            role: None,
        };
        assert!(filter.matches(&user("Marie Koffi", "marie.koffi@adjarra.bj", "directeur")));
    }

    #[test]
    fn role_filter_is_exact() {
        let filter = UserFilter {
            search: None,
            role: Some("admin".to_string()),
        };
        assert!(filter.matches(&user("Admin Système", "admin@adjarra.bj", "admin")));
        assert!(!filter.matches(&user("Jean Dupont", "jean.dupont@adjarra.bj", "agent")));
    }

    #[test]
    fn predicates_are_anded() {
        let filter = UserFilter {
            search: Some("adjarra".to_string()),
            role: Some("agent".to_string()),
        };
        assert!(filter.matches(&user("Jean Dupont", "jean.dupont@adjarra.bj", "agent")));
        assert!(!filter.matches(&user("Marie Koffi", "marie.koffi@adjarra.bj", "directeur")));
    }

    #[test]
    fn empty_parameters_match_everything() {
        let filter = UserFilter {
            search: Some(String::new()),
            role: Some(String::new()),
        };
        assert!(filter.matches(&user("Jean Dupont", "jean.dupont@adjarra.bj", "agent")));
    }
}
