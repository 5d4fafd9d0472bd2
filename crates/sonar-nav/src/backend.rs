//! The [`Backend`] trait and its [`ScanContext`].
//!
//! Backends are pluggable data sources. Each refresh, every backend gets
//! one `scan` call and turns part of the grid scan (or a live query) into
//! uniform [`Entry`] values. Later, at navigation time, the backend that
//! produced an entry re-checks it against the live world.

use sonar_catalog::{BackendId, Entry};
use sonar_core::{count_phrase, Cell, GridDims, RegionId, World};
use sonar_scan::{nearest_cell, ScanResult};

use crate::error::NavError;

/// A source of catalog entries.
///
/// # Contract
///
/// - Stateless between refreshes: everything `scan` reports comes from
///   the context of that call.
/// - `validate_entry` may move `entry.cell` (and refresh the payload) to
///   the nearest member that still exists; it returns `false` only when
///   nothing of the entry is left.
///
/// # Object safety
///
/// This trait is object-safe; the navigator stores backends as
/// `Vec<Box<dyn Backend>>`.
///
/// # Examples
///
/// ```
/// use sonar_catalog::Entry;
/// use sonar_core::{Cell, World};
/// use sonar_nav::{Backend, NavError, ScanContext};
///
/// struct Landmark(Cell);
///
/// impl Backend for Landmark {
///     fn name(&self) -> &str { "landmark" }
///
///     fn scan(&self, ctx: &mut ScanContext<'_>) -> Result<Vec<Entry>, NavError> {
///         Ok(vec![ctx.entry(self.0, "Items", "Other", "Printing Pod")])
///     }
///
///     fn validate_entry(&self, _: &mut Entry, _: &dyn World, _: Cell) -> bool { true }
///
///     fn format_name(&self, entry: &Entry) -> String { entry.item.clone() }
/// }
///
/// assert_eq!(Landmark(Cell(4)).name(), "landmark");
/// ```
pub trait Backend: Send + 'static {
    /// Unique name for logging.
    fn name(&self) -> &str;

    /// Produce this refresh's entries.
    ///
    /// Take (move out) whatever part of [`ScanContext::result`] this
    /// backend consumes; no other backend reads it afterwards.
    fn scan(&self, ctx: &mut ScanContext<'_>) -> Result<Vec<Entry>, NavError>;

    /// Re-check `entry` against the live world.
    fn validate_entry(&self, entry: &mut Entry, world: &dyn World, cursor: Cell) -> bool;

    /// Spoken label for `entry`, without position information.
    fn format_name(&self, entry: &Entry) -> String;
}

/// Inputs of one [`Backend::scan`] call.
pub struct ScanContext<'a> {
    world: &'a dyn World,
    region: RegionId,
    cursor: Cell,
    backend: BackendId,
    result: &'a mut ScanResult,
}

impl<'a> ScanContext<'a> {
    /// Construct a context.
    ///
    /// Typically called by the navigator, not by backends directly.
    pub fn new(
        world: &'a dyn World,
        region: RegionId,
        cursor: Cell,
        backend: BackendId,
        result: &'a mut ScanResult,
    ) -> Self {
        Self {
            world,
            region,
            cursor,
            backend,
            result,
        }
    }

    /// The live world.
    pub fn world(&self) -> &'a dyn World {
        self.world
    }

    /// Region being refreshed.
    pub fn region(&self) -> RegionId {
        self.region
    }

    /// Cursor cell at refresh time.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.world.dims()
    }

    /// Id the produced entries must carry.
    pub fn backend(&self) -> BackendId {
        self.backend
    }

    /// The grid scan of this refresh.
    pub fn result(&mut self) -> &mut ScanResult {
        self.result
    }

    /// Member of `cells` nearest the cursor.
    pub fn nearest(&self, cells: &[Cell]) -> Option<Cell> {
        nearest_cell(cells.iter().copied(), self.dims(), self.cursor)
    }

    /// An entry tagged with this backend's id.
    pub fn entry(
        &self,
        cell: Cell,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        item: impl Into<String>,
    ) -> Entry {
        Entry::new(self.backend, cell, category, subcategory, item)
    }
}

/// Payload of a cluster entry: the domain key and the member cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Members<K> {
    /// What every member must still hold.
    pub key: K,
    /// Member cells in scan order.
    pub cells: Vec<Cell>,
}

/// Keep the members of `entry` that still satisfy `holds` and move the
/// entry to the nearest survivor. `false` when none survive or the entry
/// does not carry `Members<K>`.
pub fn revalidate_members<K>(
    entry: &mut Entry,
    world: &dyn World,
    cursor: Cell,
    mut holds: impl FnMut(&K, Cell) -> bool,
) -> bool
where
    K: Clone + Send + Sync + 'static,
{
    let Some(members) = entry.payload::<Members<K>>() else {
        return false;
    };
    let survivors: Vec<Cell> = members
        .cells
        .iter()
        .copied()
        .filter(|&c| world.is_valid(c) && holds(&members.key, c))
        .collect();
    let Some(nearest) = nearest_cell(survivors.iter().copied(), world.dims(), cursor) else {
        return false;
    };
    if survivors.len() != members.cells.len() {
        let key = members.key.clone();
        entry.set_payload(Members {
            key,
            cells: survivors,
        });
    }
    entry.cell = nearest;
    true
}

/// `"<item>, <n> tiles"` for a cluster entry, the bare item otherwise.
pub fn cluster_label<K: 'static>(entry: &Entry) -> String {
    match entry.payload::<Members<K>>() {
        Some(members) => format!("{}, {}", entry.item, count_phrase(members.cells.len(), "tile")),
        None => entry.item.clone(),
    }
}
