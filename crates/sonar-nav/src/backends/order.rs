//! Pending work orders: box selections, construction plans and markers
//! on single objects.

use indexmap::IndexSet;
use sonar_catalog::Entry;
use sonar_core::{
    count_phrase, BoxOrderKind, Cell, GridQuery, IndividualOrderKind, ObjectId, PrefabId, World,
};
use sonar_scan::{nearest_cell, OrderTarget};

use crate::backend::{cluster_label, revalidate_members, Backend, Members, ScanContext};
use crate::error::NavError;

/// Category of every order.
pub const ORDERS: &str = "Orders";
/// Subcategory of construction plans.
pub const BUILD: &str = "Build";

/// Payload of a construction plan group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plans {
    /// Planned prefab.
    pub prefab: PrefabId,
    /// Member cells.
    pub cells: Vec<Cell>,
    /// Distinct planned structures.
    pub objects: IndexSet<ObjectId>,
}

/// Payload of an individual order entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Marker object.
    pub object: ObjectId,
    /// Order kind.
    pub kind: IndividualOrderKind,
}

/// Lists orders under `Orders / <kind>`.
///
/// Box orders are named by what they act on: `"Dig Copper Ore"` for a
/// single target, `"Dig, mixed"` when members disagree, plain `"Sweep"`
/// when the kind has no target.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderBackend;

/// Item name of a box-order cluster.
pub fn box_order_item(kind: BoxOrderKind, target: &OrderTarget) -> String {
    match target {
        OrderTarget::Single(name) => format!("{kind} {name}"),
        OrderTarget::Mixed => format!("{kind}, mixed"),
        OrderTarget::NotApplicable => kind.label().to_string(),
    }
}

impl Backend for OrderBackend {
    fn name(&self) -> &str {
        "orders"
    }

    fn scan(&self, ctx: &mut ScanContext<'_>) -> Result<Vec<Entry>, NavError> {
        let boxes = std::mem::take(&mut ctx.result().box_orders);
        let builds = std::mem::take(&mut ctx.result().build_orders);
        let markers = std::mem::take(&mut ctx.result().individual_orders);
        let mut entries = Vec::with_capacity(boxes.len() + builds.len() + markers.len());

        for cluster in boxes {
            let Some(cell) = ctx.nearest(&cluster.cells) else {
                continue;
            };
            let kind = cluster.meta.kind;
            entries.push(
                ctx.entry(cell, ORDERS, kind.label(), box_order_item(kind, &cluster.meta.target))
                    .with_payload(Members {
                        key: kind,
                        cells: cluster.cells,
                    }),
            );
        }
        for cluster in builds {
            let Some(cell) = ctx.nearest(&cluster.cells) else {
                continue;
            };
            entries.push(ctx.entry(cell, ORDERS, BUILD, cluster.meta.name).with_payload(
                Plans {
                    prefab: cluster.meta.prefab,
                    cells: cluster.cells,
                    objects: cluster.meta.objects,
                },
            ));
        }
        for marker in markers {
            entries.push(
                ctx.entry(marker.cell, ORDERS, marker.kind.label(), marker.target)
                    .with_payload(Marker {
                        object: marker.object,
                        kind: marker.kind,
                    }),
            );
        }
        Ok(entries)
    }

    fn validate_entry(&self, entry: &mut Entry, world: &dyn World, cursor: Cell) -> bool {
        if let Some(marker) = entry.payload::<Marker>() {
            return world.individual_orders(entry.cell).is_ok_and(|marks| {
                marks
                    .iter()
                    .any(|m| m.object == marker.object && m.kind == marker.kind)
            });
        }
        if let Some(plans) = entry.payload::<Plans>() {
            let prefab = plans.prefab;
            let mut cells = Vec::with_capacity(plans.cells.len());
            let mut objects = IndexSet::new();
            for &cell in &plans.cells {
                if let Ok(Some(plan)) = world.build_order(cell) {
                    if plan.prefab == prefab {
                        cells.push(cell);
                        objects.insert(plan.object);
                    }
                }
            }
            let Some(nearest) = nearest_cell(cells.iter().copied(), world.dims(), cursor) else {
                return false;
            };
            entry.cell = nearest;
            entry.set_payload(Plans {
                prefab,
                cells,
                objects,
            });
            return true;
        }
        revalidate_members::<BoxOrderKind>(entry, world, cursor, |&kind, cell| {
            world.box_order(cell) == Ok(Some(kind))
        })
    }

    fn format_name(&self, entry: &Entry) -> String {
        match entry.payload::<Plans>() {
            Some(plans) => format!(
                "{}, {}",
                entry.item,
                count_phrase(plans.objects.len(), "building")
            ),
            None => cluster_label::<BoxOrderKind>(entry),
        }
    }
}
