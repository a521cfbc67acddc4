//! Material request repository and its fixture dataset.

use gestmat_core::{RequestId, UserId};
use gestmat_requests::MaterialRequest;

/// Read access to material requests.
pub trait RequestRepository: Send + Sync {
    fn list(&self) -> Vec<MaterialRequest>;
    fn find_by_id(&self, id: RequestId) -> Option<MaterialRequest>;
}

/// Fixture-backed request repository.
#[derive(Debug)]
pub struct FixtureRequestRepository {
    requests: Vec<MaterialRequest>,
}

impl FixtureRequestRepository {
    pub fn new() -> Self {
        Self { requests: seed() }
    }
}

impl Default for FixtureRequestRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestRepository for FixtureRequestRepository {
    fn list(&self) -> Vec<MaterialRequest> {
        self.requests.clone()
    }

    fn find_by_id(&self, id: RequestId) -> Option<MaterialRequest> {
        self.requests.iter().find(|r| r.id == id).cloned()
    }
}

/// The open requests known to the mock.
pub fn seed() -> Vec<MaterialRequest> {
    vec![MaterialRequest {
        id: RequestId::new(1),
        request_number: "DEM2024-001".to_string(),
        requester_id: UserId::new(1),
        status: "en_attente".to_string(),
        priority: "normale".to_string(),
        justification: "Remplacement d'équipements défaillants".to_string(),
        created_at: crate::fixture_timestamp("2024-07-15T10:30:00Z"),
    }]
}
