//! Direction records.

use serde::{Deserialize, Serialize};

use gestmat_core::DirectionId;

/// An organisational unit (direction, service, cabinet).
///
/// `level`/`parent_id` describe a tree, but parent/child consistency is
/// never validated; user records may even reference directions that do not
/// exist in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub id: DirectionId,
    pub name: String,
    pub code: String,
    pub level: u32,
    pub parent_id: Option<DirectionId>,
}
