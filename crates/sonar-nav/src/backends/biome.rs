//! Biome zones.

use sonar_catalog::Entry;
use sonar_core::{BiomeId, Cell, GridQuery, World};

use crate::backend::{cluster_label, revalidate_members, Backend, Members, ScanContext};
use crate::error::NavError;

/// Category of biome zones.
pub const BIOMES: &str = "Biomes";
/// Their only subcategory.
pub const ZONES: &str = "Zones";

/// Lists biome clusters under `Biomes / Zones`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BiomeBackend;

impl Backend for BiomeBackend {
    fn name(&self) -> &str {
        "biomes"
    }

    fn scan(&self, ctx: &mut ScanContext<'_>) -> Result<Vec<Entry>, NavError> {
        let clusters = std::mem::take(&mut ctx.result().biomes);
        Ok(clusters
            .into_iter()
            .filter_map(|cluster| {
                let cell = ctx.nearest(&cluster.cells)?;
                Some(
                    ctx.entry(cell, BIOMES, ZONES, cluster.meta.name)
                        .with_payload(Members {
                            key: cluster.meta.biome,
                            cells: cluster.cells,
                        }),
                )
            })
            .collect())
    }

    fn validate_entry(&self, entry: &mut Entry, world: &dyn World, cursor: Cell) -> bool {
        revalidate_members::<BiomeId>(entry, world, cursor, |&biome, cell| {
            world.biome(cell) == Ok(Some(biome))
        })
    }

    fn format_name(&self, entry: &Entry) -> String {
        cluster_label::<BiomeId>(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_catalog::BackendId;
    use sonar_core::GridDims;
    use sonar_scan::{GridScanner, ScannerConfig};
    use sonar_test_utils::MockWorld;

    #[test]
    fn zones_are_listed_by_biome_name() {
        let mut world = MockWorld::new(GridDims::new(4, 4).unwrap());
        let swamp = world.add_biome("Swamp");
        let frozen = world.add_biome("Frozen");
        world.fill_biome(0, 0, 1, 3, swamp);
        world.fill_biome(2, 0, 3, 3, frozen);

        let mut scanner = GridScanner::new(ScannerConfig::default()).unwrap();
        let mut result = scanner.scan(&world, world.active_region()).unwrap();
        let mut ctx = ScanContext::new(&world, world.active_region(), Cell(15), BackendId(0), &mut result);
        let found = BiomeBackend.scan(&mut ctx).unwrap();
        let names: Vec<String> = found.iter().map(|e| BiomeBackend.format_name(e)).collect();
        assert_eq!(names, ["Swamp, 8 tiles", "Frozen, 8 tiles"]);
        assert!(found.iter().all(|e| e.category == "Biomes" && e.subcategory == "Zones"));
        assert_eq!(found[1].cell, Cell(15));
    }
}
