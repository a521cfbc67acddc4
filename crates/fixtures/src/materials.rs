//! Material repository and its fixture dataset.

use gestmat_core::MaterialId;
use gestmat_inventory::Material;

/// Read access to materials.
pub trait MaterialRepository: Send + Sync {
    fn list(&self) -> Vec<Material>;
    fn find_by_id(&self, id: MaterialId) -> Option<Material>;
}

/// Fixture-backed material repository.
#[derive(Debug)]
pub struct FixtureMaterialRepository {
    materials: Vec<Material>,
}

impl FixtureMaterialRepository {
    pub fn new() -> Self {
        Self { materials: seed() }
    }
}

impl Default for FixtureMaterialRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialRepository for FixtureMaterialRepository {
    fn list(&self) -> Vec<Material> {
        self.materials.clone()
    }

    fn find_by_id(&self, id: MaterialId) -> Option<Material> {
        self.materials.iter().find(|m| m.id == id).cloned()
    }
}

/// The stock known to the mock.
pub fn seed() -> Vec<Material> {
    vec![
        Material {
            id: MaterialId::new(1),
            name: "Ordinateur portable Dell".to_string(),
            code: "ORD001".to_string(),
            category: "Informatique".to_string(),
            unit: "Pièce".to_string(),
            stock_quantity: 5,
            min_threshold: 2,
            max_threshold: 20,
            unit_price: 450_000,
            status: "actif".to_string(),
            supplier: "Tech Solutions SARL".to_string(),
        },
        Material {
            id: MaterialId::new(2),
            name: "Ramette papier A4".to_string(),
            code: "PAP001".to_string(),
            category: "Fournitures Bureau".to_string(),
            unit: "Ramette".to_string(),
            stock_quantity: 15,
            min_threshold: 10,
            max_threshold: 100,
            unit_price: 3_500,
            status: "actif".to_string(),
            supplier: "Papeterie Centrale".to_string(),
        },
    ]
}
