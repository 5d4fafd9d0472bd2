//! Host traits: the read-only grid surface, live entity queries and the
//! external cursor.
//!
//! The scanner and backends depend only on these traits, never on the
//! host's object model, so the whole engine runs against
//! `sonar-test-utils::MockWorld` in tests.

use smallvec::SmallVec;

use crate::domain::{BoxOrderKind, IndividualOrderKind, NetworkKind, Phase};
use crate::error::GridError;
use crate::geometry::{Bounds, GridDims};
use crate::id::{BiomeId, Cell, ElementId, ObjectId, PrefabId, RegionId};

/// The natural material occupying a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Material {
    /// Which element.
    pub element: ElementId,
    /// Its physical state.
    pub phase: Phase,
}

/// Descriptive data for an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementInfo {
    /// Spoken name, e.g. "Copper Ore".
    pub name: String,
    /// Physical state.
    pub phase: Phase,
    /// Material class used as the catalog subcategory, e.g. "Ores".
    pub class: String,
}

/// A live object and the prefab it instantiates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    /// Object identity; identical across every cell the object occupies.
    pub object: ObjectId,
    /// Its definition.
    pub prefab: PrefabId,
}

/// An individual order marker found on a cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderMark {
    /// The marker's object identity.
    pub object: ObjectId,
    /// What the order asks for.
    pub kind: IndividualOrderKind,
    /// Name of the targeted creature, plant or pipe.
    pub target: String,
}

/// A live entity reported by [`EntityQuery::entities`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityInfo {
    /// Object identity, used to re-locate the entity at validation time.
    pub object: ObjectId,
    /// Spoken name.
    pub name: String,
    /// Catalog category.
    pub category: String,
    /// Catalog subcategory.
    pub subcategory: String,
    /// Current cell.
    pub cell: Cell,
}

/// Read-only view of the play-field grid.
///
/// Geometry queries are infallible. Per-cell domain lookups return
/// `Result` so that a host failure on one cell can be isolated: the
/// scanner logs it, skips that cell and continues.
pub trait GridQuery {
    /// Dimensions of the whole grid.
    fn dims(&self) -> GridDims;

    /// The region the player is currently looking at.
    fn active_region(&self) -> RegionId;

    /// Bounding rectangle of `region`, or `None` if the region is unknown.
    fn region_bounds(&self, region: RegionId) -> Option<Bounds>;

    /// The region owning `cell`, if any.
    fn cell_region(&self, cell: Cell) -> Option<RegionId>;

    /// Whether the player has revealed `cell`.
    fn is_visible(&self, cell: Cell) -> bool;

    /// Whether `cell` addresses the grid.
    fn is_valid(&self, cell: Cell) -> bool {
        self.dims().contains(cell)
    }

    /// Natural material at `cell`. Constructed tiles and vacuum report `None`.
    fn material(&self, cell: Cell) -> Result<Option<Material>, GridError>;

    /// Name, phase and class of an element.
    fn element_info(&self, element: ElementId) -> Option<ElementInfo>;

    /// Constructed tile occupying `cell`.
    fn tile(&self, cell: Cell) -> Result<Option<PrefabId>, GridError>;

    /// Conduit segment of `network` at `cell`.
    fn conduit(&self, cell: Cell, network: NetworkKind) -> Result<Option<PrefabId>, GridError>;

    /// Bridge of `network` occupying `cell`.
    fn bridge(&self, cell: Cell, network: NetworkKind) -> Result<Option<ObjectRef>, GridError>;

    /// Spoken name of a prefab.
    fn prefab_name(&self, prefab: PrefabId) -> Option<String>;

    /// Box-selected order on `cell`.
    fn box_order(&self, cell: Cell) -> Result<Option<BoxOrderKind>, GridError>;

    /// What a box order on `cell` acts on (e.g. the element being dug).
    fn order_target(&self, cell: Cell, kind: BoxOrderKind) -> Result<Option<String>, GridError>;

    /// Planned building (construction order) occupying `cell`.
    fn build_order(&self, cell: Cell) -> Result<Option<ObjectRef>, GridError>;

    /// Individual order markers attached to objects on `cell`.
    fn individual_orders(&self, cell: Cell) -> Result<SmallVec<[OrderMark; 2]>, GridError>;

    /// Biome zone of `cell`.
    fn biome(&self, cell: Cell) -> Result<Option<BiomeId>, GridError>;

    /// Spoken name of a biome.
    fn biome_name(&self, biome: BiomeId) -> Option<String>;
}

/// Live queries for objects that are not derived from the grid layers.
pub trait EntityQuery {
    /// Every catalogued entity currently in `region`.
    fn entities(&self, region: RegionId) -> Result<Vec<EntityInfo>, GridError>;

    /// Current cell of `object`, or `None` if it no longer exists.
    fn entity_cell(&self, object: ObjectId) -> Option<Cell>;
}

/// The host's "current position" cursor.
pub trait CursorControl {
    /// Cell under the cursor.
    fn cursor_cell(&self) -> Cell;

    /// Move the cursor to `cell` and return a description of the destination.
    fn move_cursor(&mut self, cell: Cell) -> String;
}

/// Everything the backends query: the grid plus live entities.
pub trait World: GridQuery + EntityQuery {}

impl<T: GridQuery + EntityQuery + ?Sized> World for T {}
