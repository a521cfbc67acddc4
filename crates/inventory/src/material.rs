//! Material records.

use serde::{Deserialize, Serialize};

use gestmat_core::MaterialId;

/// A material held in stock.
///
/// `min_threshold`/`max_threshold` are carried but never compared against
/// `stock_quantity`; the dashboard's low-stock counter is a fixed constant,
/// not a computation over these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    pub code: String,
    pub category: String,
    pub unit: String,
    pub stock_quantity: i64,
    pub min_threshold: i64,
    pub max_threshold: i64,
    /// Price in CFA francs.
    pub unit_price: i64,
    pub status: String,
    pub supplier: String,
}
