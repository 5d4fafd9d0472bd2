//! Utility network segments and bridges.

use sonar_catalog::Entry;
use sonar_core::{Cell, GridQuery, NetworkKind, ObjectId, PrefabId, World};

use crate::backend::{cluster_label, revalidate_members, Backend, Members, ScanContext};
use crate::error::NavError;

/// Category of every network layer.
pub const NETWORKS: &str = "Networks";

/// Payload of a bridge entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BridgeMark {
    /// Bridge object.
    pub object: ObjectId,
    /// Layer it spans.
    pub network: NetworkKind,
}

/// Lists conduit segments and bridges under `Networks / <layer>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkBackend;

type SegmentKey = (NetworkKind, PrefabId);

impl Backend for NetworkBackend {
    fn name(&self) -> &str {
        "networks"
    }

    fn scan(&self, ctx: &mut ScanContext<'_>) -> Result<Vec<Entry>, NavError> {
        let segments = std::mem::take(&mut ctx.result().segments);
        let bridges = std::mem::take(&mut ctx.result().bridges);
        let mut entries = Vec::new();
        for (network, clusters) in segments {
            for cluster in clusters {
                let Some(cell) = ctx.nearest(&cluster.cells) else {
                    continue;
                };
                entries.push(
                    ctx.entry(cell, NETWORKS, network.label(), cluster.meta.name)
                        .with_payload(Members {
                            key: (network, cluster.meta.prefab),
                            cells: cluster.cells,
                        }),
                );
            }
        }
        for bridge in bridges {
            entries.push(
                ctx.entry(bridge.cell, NETWORKS, bridge.network.label(), bridge.name)
                    .with_payload(BridgeMark {
                        object: bridge.object,
                        network: bridge.network,
                    }),
            );
        }
        Ok(entries)
    }

    fn validate_entry(&self, entry: &mut Entry, world: &dyn World, cursor: Cell) -> bool {
        if let Some(mark) = entry.payload::<BridgeMark>() {
            return matches!(
                world.bridge(entry.cell, mark.network),
                Ok(Some(found)) if found.object == mark.object
            );
        }
        revalidate_members::<SegmentKey>(entry, world, cursor, |&(network, prefab), cell| {
            world.conduit(cell, network) == Ok(Some(prefab))
        })
    }

    fn format_name(&self, entry: &Entry) -> String {
        cluster_label::<SegmentKey>(entry)
    }
}
