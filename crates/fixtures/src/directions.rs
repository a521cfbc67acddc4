//! Direction repository and its fixture dataset.

use gestmat_core::DirectionId;
use gestmat_directory::Direction;

/// Read access to directions.
pub trait DirectionRepository: Send + Sync {
    fn list(&self) -> Vec<Direction>;
    fn find_by_id(&self, id: DirectionId) -> Option<Direction>;
}

/// Fixture-backed direction repository.
#[derive(Debug)]
pub struct FixtureDirectionRepository {
    directions: Vec<Direction>,
}

impl FixtureDirectionRepository {
    pub fn new() -> Self {
        Self { directions: seed() }
    }
}

impl Default for FixtureDirectionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionRepository for FixtureDirectionRepository {
    fn list(&self) -> Vec<Direction> {
        self.directions.clone()
    }

    fn find_by_id(&self, id: DirectionId) -> Option<Direction> {
        self.directions.iter().find(|d| d.id == id).cloned()
    }
}

fn direction(id: i64, name: &str, code: &str, level: u32, parent_id: Option<i64>) -> Direction {
    Direction {
        id: DirectionId::new(id),
        name: name.to_string(),
        code: code.to_string(),
        level,
        parent_id: parent_id.map(DirectionId::new),
    }
}

/// The organisational chart known to the mock.
pub fn seed() -> Vec<Direction> {
    vec![
        direction(1, "Direction des Travaux Publics", "DTP", 1, None),
        direction(2, "Direction des Affaires Sociales", "DAS", 1, None),
        direction(
            3,
            "Direction des Affaires Administratives et Financières",
            "DAAF",
            1,
            None,
        ),
        direction(4, "Service du Matériel", "SM", 2, Some(3)),
        direction(5, "Cabinet du Maire", "CM", 1, None),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_directions() {
        assert_eq!(seed().len(), 5);
    }

    #[test]
    fn service_du_materiel_hangs_under_daaf() {
        let repo = FixtureDirectionRepository::new();
        let sm = repo.find_by_id(DirectionId::new(4)).expect("direction 4");
        assert_eq!(sm.code, "SM");
        assert_eq!(sm.level, 2);
        assert_eq!(sm.parent_id, Some(DirectionId::new(3)));
    }

    #[test]
    fn top_level_directions_have_no_parent() {
        let repo = FixtureDirectionRepository::new();
        for d in repo.list().into_iter().filter(|d| d.level == 1) {
            assert_eq!(d.parent_id, None, "{} should be a root", d.code);
        }
    }
}
