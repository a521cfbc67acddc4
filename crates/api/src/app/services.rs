//! Service wiring: repositories and the session store behind one façade.

use std::sync::Arc;

use gestmat_auth::{password_is_valid, InMemorySessionStore, SessionStore, SessionToken, User};
use gestmat_core::{DomainError, DomainResult};
use gestmat_directory::Direction;
use gestmat_fixtures::{
    DirectionRepository, FixtureDirectionRepository, FixtureMaterialRepository,
    FixtureNotificationRepository, FixtureRequestRepository, FixtureUserRepository,
    MaterialRepository, NotificationRepository, RequestRepository, UserRepository,
};
use gestmat_inventory::Material;
use gestmat_notifications::Notification;
use gestmat_requests::MaterialRequest;

/// Email of the account served by the fixed current-user endpoint.
const FIXED_CURRENT_USER_EMAIL: &str = "admin@adjarra.bj";

/// Repositories and session storage injected into request handlers.
pub struct AppServices {
    users: Arc<dyn UserRepository>,
    directions: Arc<dyn DirectionRepository>,
    materials: Arc<dyn MaterialRepository>,
    requests: Arc<dyn RequestRepository>,
    notifications: Arc<dyn NotificationRepository>,
    sessions: Arc<dyn SessionStore>,
}

/// Wire the fixture repositories and an in-memory session registry.
pub fn build_services() -> AppServices {
    AppServices::new(
        Arc::new(FixtureUserRepository::new()),
        Arc::new(FixtureDirectionRepository::new()),
        Arc::new(FixtureMaterialRepository::new()),
        Arc::new(FixtureRequestRepository::new()),
        Arc::new(FixtureNotificationRepository::new()),
        Arc::new(InMemorySessionStore::new()),
    )
}

impl AppServices {
    pub fn new(
        users: Arc<dyn UserRepository>,
        directions: Arc<dyn DirectionRepository>,
        materials: Arc<dyn MaterialRepository>,
        requests: Arc<dyn RequestRepository>,
        notifications: Arc<dyn NotificationRepository>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            users,
            directions,
            materials,
            requests,
            notifications,
            sessions,
        }
    }

    pub fn users_list(&self) -> Vec<User> {
        self.users.list()
    }

    pub fn directions_list(&self) -> Vec<Direction> {
        self.directions.list()
    }

    pub fn materials_list(&self) -> Vec<Material> {
        self.materials.list()
    }

    pub fn requests_list(&self) -> Vec<MaterialRequest> {
        self.requests.list()
    }

    pub fn notifications_list(&self) -> Vec<Notification> {
        self.notifications.list()
    }

    /// Authenticate with the shared development credential.
    ///
    /// The created session token is logged, never returned to the caller;
    /// subsequent requests cannot authenticate with it.
    pub fn login(&self, email: &str, password: &str) -> DomainResult<User> {
        if !password_is_valid(password) {
            return Err(DomainError::InvalidCredentials);
        }

        let user = self
            .users
            .find_by_email(email)
            .filter(|user| user.active)
            .ok_or(DomainError::InvalidCredentials)?;

        let token = self.sessions.create(user.id);
        tracing::info!(token = %token, email = %user.email, "session created");

        Ok(user)
    }

    /// Revoke the presented session, if any. Always succeeds.
    pub fn logout(&self, token: Option<&SessionToken>) {
        if let Some(token) = token {
            if self.sessions.revoke(token) {
                tracing::info!(token = %token, "session revoked");
            }
        }
    }

    /// Resolve a session token to its user record.
    pub fn current_user(&self, token: &SessionToken) -> Option<User> {
        let user_id = self.sessions.resolve(token)?;
        self.users.find_by_id(user_id)
    }

    /// The account served by `GET /api/auth/user`, which ignores sessions.
    pub fn fixed_current_user(&self) -> Option<User> {
        self.users.find_by_email(FIXED_CURRENT_USER_EMAIL)
    }
}
