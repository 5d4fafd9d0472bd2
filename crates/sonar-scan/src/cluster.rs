//! Cluster descriptors and the flat, unclustered scan outputs.

use indexmap::IndexSet;
use sonar_core::{
    BiomeId, BoxOrderKind, Cell, ElementId, GridDims, IndividualOrderKind, NetworkKind, ObjectId,
    Phase, PrefabId,
};

/// A maximal 4-connected group of cells sharing one domain key.
///
/// `cells` is in row-major discovery order. Metadata is computed once,
/// when the component root is first seen during extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster<M> {
    /// Domain-specific description of the cluster.
    pub meta: M,
    /// Member cells.
    pub cells: Vec<Cell>,
}

impl<M> Cluster<M> {
    /// An empty cluster carrying `meta`.
    pub fn new(meta: M) -> Self {
        Self {
            meta,
            cells: Vec::new(),
        }
    }

    /// Number of member cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Member nearest to `origin`; ties go to the earliest in scan order.
    pub fn nearest(&self, dims: GridDims, origin: Cell) -> Option<Cell> {
        nearest_cell(self.cells.iter().copied(), dims, origin)
    }
}

/// Nearest of `cells` to `origin` by Manhattan distance, first wins ties.
pub fn nearest_cell(
    cells: impl IntoIterator<Item = Cell>,
    dims: GridDims,
    origin: Cell,
) -> Option<Cell> {
    let mut best: Option<(u64, Cell)> = None;
    for cell in cells {
        let d = dims.distance(origin, cell);
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, cell));
        }
    }
    best.map(|(_, cell)| cell)
}

/// A natural material deposit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementMeta {
    /// The element.
    pub element: ElementId,
    /// Spoken name.
    pub name: String,
    /// Physical state.
    pub phase: Phase,
    /// Material class (catalog subcategory).
    pub class: String,
}

/// A run of identical constructed tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMeta {
    /// Tile prefab.
    pub prefab: PrefabId,
    /// Spoken name.
    pub name: String,
}

/// A connected segment of one conduit type in one network layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentMeta {
    /// The network layer.
    pub network: NetworkKind,
    /// Conduit prefab.
    pub prefab: PrefabId,
    /// Spoken name.
    pub name: String,
}

/// What a box-order cluster acts on.
///
/// `Mixed` and `NotApplicable` are deliberately distinct: a dig selection
/// spanning copper and iron is mixed, while a sweep order has no target
/// concept at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderTarget {
    /// Every member that reported a target reported this one.
    Single(String),
    /// Members reported more than one distinct target.
    Mixed,
    /// No member reported a target.
    NotApplicable,
}

/// A connected selection of one box order kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxOrderMeta {
    /// The order kind.
    pub kind: BoxOrderKind,
    /// Resolved during post-processing from every member cell.
    pub target: OrderTarget,
}

/// Adjacent construction plans of the same prefab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOrderMeta {
    /// Planned prefab.
    pub prefab: PrefabId,
    /// Spoken name.
    pub name: String,
    /// Distinct planned objects; a plan spanning several cells counts once.
    pub objects: IndexSet<ObjectId>,
}

/// A connected biome zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BiomeMeta {
    /// Biome type.
    pub biome: BiomeId,
    /// Spoken name.
    pub name: String,
}

/// Natural material deposit.
pub type ElementCluster = Cluster<ElementMeta>;
/// Constructed tile run.
pub type TileCluster = Cluster<TileMeta>;
/// Network segment.
pub type SegmentCluster = Cluster<SegmentMeta>;
/// Box-selected order region.
pub type BoxOrderCluster = Cluster<BoxOrderMeta>;
/// Same-prefab construction plans.
pub type BuildOrderCluster = Cluster<BuildOrderMeta>;
/// Biome zone.
pub type BiomeCluster = Cluster<BiomeMeta>;

/// A network bridge. Emitted once per object at its first scanned cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bridge {
    /// Bridge object.
    pub object: ObjectId,
    /// Network layer it belongs to.
    pub network: NetworkKind,
    /// Bridge prefab.
    pub prefab: PrefabId,
    /// Spoken name.
    pub name: String,
    /// First cell in scan order.
    pub cell: Cell,
}

/// An order attached to a single object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndividualOrder {
    /// Marker object.
    pub object: ObjectId,
    /// Order kind.
    pub kind: IndividualOrderKind,
    /// Name of the targeted object.
    pub target: String,
    /// Cell the marker was found on.
    pub cell: Cell,
}
