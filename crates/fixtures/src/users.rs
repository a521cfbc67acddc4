//! User repository and its fixture dataset.

use gestmat_auth::{Role, User};
use gestmat_core::{DirectionId, UserId};

/// Read access to user accounts.
pub trait UserRepository: Send + Sync {
    fn list(&self) -> Vec<User>;
    fn find_by_id(&self, id: UserId) -> Option<User>;
    fn find_by_email(&self, email: &str) -> Option<User>;
}

/// Fixture-backed user repository.
#[derive(Debug)]
pub struct FixtureUserRepository {
    users: Vec<User>,
}

impl FixtureUserRepository {
    pub fn new() -> Self {
        Self { users: seed() }
    }
}

impl Default for FixtureUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for FixtureUserRepository {
    fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    fn find_by_id(&self, id: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.iter().find(|u| u.email == email).cloned()
    }
}

fn user(id: i64, name: &str, email: &str, role: &'static str, direction_id: i64) -> User {
    let ts = crate::fixture_timestamp("2024-01-15T08:00:00Z");
    User {
        id: UserId::new(id),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::new(role),
        direction_id: Some(DirectionId::new(direction_id)),
        active: true,
        created_at: ts,
        updated_at: ts,
    }
}

/// The user accounts known to the mock.
pub fn seed() -> Vec<User> {
    vec![
        user(1, "Jean Dupont", "jean.dupont@adjarra.bj", "agent", 1),
        user(2, "Marie Koffi", "marie.koffi@adjarra.bj", "directeur", 2),
        user(
            3,
            "Pierre Akoka",
            "pierre.akoka@adjarra.bj",
            "gestionnaire_stock",
            4,
        ),
        user(4, "Fatou Tomiyo", "fatou.tomiyo@adjarra.bj", "daaf", 3),
        user(
            5,
            "Ahmed Soumanou",
            "ahmed.soumanou@adjarra.bj",
            "secretaire_executif",
            5,
        ),
        // Direction 6 has no matching direction record; kept as-is.
        user(6, "Admin Système", "admin@adjarra.bj", "admin", 6),
    ]
}
