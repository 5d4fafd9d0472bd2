//! Constructed tile runs.

use sonar_catalog::Entry;
use sonar_core::{Cell, GridQuery, PrefabId, World};

use crate::backend::{cluster_label, revalidate_members, Backend, Members, ScanContext};
use crate::error::NavError;

/// Category of constructed things.
pub const BUILDINGS: &str = "Buildings";
/// Subcategory of tile runs.
pub const TILES: &str = "Tiles";

/// Lists tile clusters under `Buildings / Tiles`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TileBackend;

impl Backend for TileBackend {
    fn name(&self) -> &str {
        "tiles"
    }

    fn scan(&self, ctx: &mut ScanContext<'_>) -> Result<Vec<Entry>, NavError> {
        let clusters = std::mem::take(&mut ctx.result().tiles);
        Ok(clusters
            .into_iter()
            .filter_map(|cluster| {
                let cell = ctx.nearest(&cluster.cells)?;
                Some(
                    ctx.entry(cell, BUILDINGS, TILES, cluster.meta.name)
                        .with_payload(Members {
                            key: cluster.meta.prefab,
                            cells: cluster.cells,
                        }),
                )
            })
            .collect())
    }

    fn validate_entry(&self, entry: &mut Entry, world: &dyn World, cursor: Cell) -> bool {
        revalidate_members::<PrefabId>(entry, world, cursor, |&prefab, cell| {
            world.tile(cell) == Ok(Some(prefab))
        })
    }

    fn format_name(&self, entry: &Entry) -> String {
        cluster_label::<PrefabId>(entry)
    }
}
