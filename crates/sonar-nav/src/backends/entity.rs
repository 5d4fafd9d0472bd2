//! Live entities supplied by the host.

use sonar_catalog::Entry;
use sonar_core::{Cell, EntityQuery, GridQuery, ObjectId, World};

use crate::backend::{Backend, ScanContext};
use crate::error::NavError;

/// Lists every entity the host reports for the region, classified by the
/// host.
///
/// Entities move, so validation re-locates them rather than checking
/// their old cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntityBackend;

impl Backend for EntityBackend {
    fn name(&self) -> &str {
        "entities"
    }

    fn scan(&self, ctx: &mut ScanContext<'_>) -> Result<Vec<Entry>, NavError> {
        let entities = ctx.world().entities(ctx.region())?;
        Ok(entities
            .into_iter()
            .filter(|e| ctx.world().is_valid(e.cell) && ctx.world().is_visible(e.cell))
            .map(|e| {
                ctx.entry(e.cell, e.category, e.subcategory, e.name)
                    .with_payload(e.object)
            })
            .collect())
    }

    fn validate_entry(&self, entry: &mut Entry, world: &dyn World, _cursor: Cell) -> bool {
        let Some(&object) = entry.payload::<ObjectId>() else {
            return false;
        };
        match world.entity_cell(object) {
            Some(cell) if world.cell_region(cell) == Some(world.active_region()) => {
                entry.cell = cell;
                true
            }
            _ => false,
        }
    }

    fn format_name(&self, entry: &Entry) -> String {
        entry.item.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_catalog::BackendId;
    use sonar_core::{Bounds, GridDims, GridError, RegionId};
    use sonar_scan::ScanResult;
    use sonar_test_utils::MockWorld;

    fn scan(world: &MockWorld) -> Result<Vec<Entry>, NavError> {
        let mut result = ScanResult::empty(world.active_region());
        let mut ctx = ScanContext::new(world, world.active_region(), Cell(0), BackendId(5), &mut result);
        EntityBackend.scan(&mut ctx)
    }

    #[test]
    fn entities_keep_host_classification() {
        let mut world = MockWorld::new(GridDims::new(10, 1).unwrap());
        world.add_entity("Hatch", "Creatures", "Wild", Cell(3));
        world.add_entity("Meep", "Duplicants", "Colony", Cell(8));
        let found = scan(&world).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].category, "Creatures");
        assert_eq!(found[1].subcategory, "Colony");
        assert_eq!(EntityBackend.format_name(&found[1]), "Meep");
    }

    #[test]
    fn hidden_entities_are_skipped() {
        let mut world = MockWorld::new(GridDims::new(4, 1).unwrap());
        world.add_entity("Pip", "Creatures", "Wild", Cell(2));
        world.set_visible(Cell(2), false);
        assert!(scan(&world).unwrap().is_empty());
    }

    #[test]
    fn validation_follows_moves_and_rejects_departures() {
        let mut world = MockWorld::new(GridDims::new(10, 1).unwrap());
        let hatch = world.add_entity("Hatch", "Creatures", "Wild", Cell(3));
        let mut entry = scan(&world).unwrap().remove(0);

        world.move_entity(hatch, Cell(6));
        assert!(EntityBackend.validate_entry(&mut entry, &world, Cell(0)));
        assert_eq!(entry.cell, Cell(6));

        let elsewhere = world.add_region(Bounds::new(0, 8, 0, 9).unwrap());
        assert_ne!(elsewhere, RegionId(0));
        world.move_entity(hatch, Cell(9));
        assert!(!EntityBackend.validate_entry(&mut entry, &world, Cell(0)));

        world.remove_entity(hatch);
        assert!(!EntityBackend.validate_entry(&mut entry, &world, Cell(0)));
    }

    #[test]
    fn host_failure_is_an_error() {
        let mut world = MockWorld::new(GridDims::new(2, 1).unwrap());
        world.fail_entities(true);
        assert!(matches!(
            scan(&world),
            Err(NavError::Grid(GridError::Entities { .. }))
        ));
    }
}
