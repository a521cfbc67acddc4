//! Material request records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gestmat_core::{RequestId, UserId};

/// A request for materials raised by an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequest {
    pub id: RequestId,
    pub request_number: String,
    pub requester_id: UserId,
    pub status: String,
    pub priority: String,
    pub justification: String,
    pub created_at: DateTime<Utc>,
}
