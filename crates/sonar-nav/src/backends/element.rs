//! Natural material deposits.

use sonar_catalog::Entry;
use sonar_core::{Cell, ElementId, GridQuery, World};

use crate::backend::{cluster_label, revalidate_members, Backend, Members, ScanContext};
use crate::error::NavError;

/// Lists element clusters under `Solids`, `Liquids` or `Gases`, by the
/// element's class.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementBackend;

impl Backend for ElementBackend {
    fn name(&self) -> &str {
        "elements"
    }

    fn scan(&self, ctx: &mut ScanContext<'_>) -> Result<Vec<Entry>, NavError> {
        let clusters = std::mem::take(&mut ctx.result().elements);
        let mut entries = Vec::with_capacity(clusters.len());
        for cluster in clusters {
            let Some(cell) = ctx.nearest(&cluster.cells) else {
                continue;
            };
            let meta = cluster.meta;
            entries.push(
                ctx.entry(cell, meta.phase.label(), meta.class, meta.name)
                    .with_payload(Members {
                        key: meta.element,
                        cells: cluster.cells,
                    }),
            );
        }
        Ok(entries)
    }

    fn validate_entry(&self, entry: &mut Entry, world: &dyn World, cursor: Cell) -> bool {
        revalidate_members::<ElementId>(entry, world, cursor, |&element, cell| {
            matches!(world.material(cell), Ok(Some(m)) if m.element == element)
        })
    }

    fn format_name(&self, entry: &Entry) -> String {
        cluster_label::<ElementId>(entry)
    }
}
