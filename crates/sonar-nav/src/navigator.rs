//! The four-level navigator.
//!
//! [`Navigator`] owns the scanner, the backends and the current
//! [`Snapshot`], plus a cursor of four indices (category, subcategory,
//! item, instance). It has two states: no snapshot (initially, and after
//! the active region changes) and snapshot active. Every entry point
//! checks for a region switch first and refreshes when there is no
//! snapshot, so callers never refresh by hand unless they want to.
//!
//! After every mutation the cursor indices address an existing element
//! or are all zero on an empty snapshot.

use std::fmt;

use sonar_catalog::{BackendId, Category, Entry, Item, ItemId, Snapshot, Subcategory};
use sonar_core::{distance_phrase, Cell, CursorControl, RegionId, World};
use sonar_scan::GridScanner;
use tracing::{debug, error, warn};

use crate::backend::{Backend, ScanContext};
use crate::backends;
use crate::config::NavigatorConfig;
use crate::error::{ConfigError, NavError};

/// Announced when the catalog, or the current level, is empty.
pub const NOTHING_FOUND: &str = "nothing found";
/// Announced when a teleport target no longer exists.
pub const INVALID: &str = "invalid";

/// Cycling direction. Both wrap around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices.
    Next,
    /// Towards lower indices.
    Previous,
}

impl Direction {
    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Self::Next => (index + 1) % len,
            Self::Previous => (index + len - 1) % len,
        }
    }
}

/// The four cursor indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Category index.
    pub category: usize,
    /// Subcategory index within the category.
    pub subcategory: usize,
    /// Item index within the subcategory.
    pub item: usize,
    /// Instance index within the item.
    pub instance: usize,
}

/// Outcome of [`Navigator::teleport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Teleport {
    /// The cursor moved.
    Moved {
        /// Destination cell.
        cell: Cell,
        /// The host's description of the destination.
        description: String,
    },
    /// The selected instance no longer exists and was removed.
    Invalid,
    /// Nothing is selected.
    Empty,
}

impl Teleport {
    /// What to speak.
    pub fn announcement(&self) -> &str {
        match self {
            Self::Moved { description, .. } => description,
            Self::Invalid => INVALID,
            Self::Empty => NOTHING_FOUND,
        }
    }
}

/// Stateful catalog navigator.
///
/// Driven by explicit calls from the host's event loop; every call runs
/// to completion synchronously.
///
/// # Examples
///
/// ```
/// use sonar_core::{GridDims, Phase};
/// use sonar_nav::{Direction, Navigator, NavigatorConfig};
/// use sonar_test_utils::MockWorld;
///
/// let mut world = MockWorld::new(GridDims::new(8, 1).unwrap());
/// let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
/// world.fill_material(0, 3, 0, 5, copper);
///
/// let mut nav = Navigator::with_standard_backends(NavigatorConfig::default()).unwrap();
/// assert_eq!(nav.cycle_category(&world, Direction::Next), "Solids");
/// assert_eq!(nav.announce_current(&world), "Copper Ore, 3 tiles, 3 right, 1 of 1");
/// ```
pub struct Navigator {
    config: NavigatorConfig,
    scanner: GridScanner,
    backends: Vec<Box<dyn Backend>>,
    snapshot: Option<Snapshot>,
    position: Position,
    region: Option<RegionId>,
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.backends.iter().map(|b| b.name()).collect();
        f.debug_struct("Navigator")
            .field("backends", &names)
            .field("position", &self.position)
            .field("region", &self.region)
            .field("snapshot", &self.snapshot.as_ref().map(Snapshot::len))
            .finish()
    }
}

impl Navigator {
    /// Validate `config` and `backends` and build a navigator with no
    /// snapshot.
    pub fn new(
        config: NavigatorConfig,
        backends: Vec<Box<dyn Backend>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if backends.is_empty() {
            return Err(ConfigError::NoBackends);
        }
        if u16::try_from(backends.len()).is_err() {
            return Err(ConfigError::TooManyBackends {
                count: backends.len(),
            });
        }
        for (i, backend) in backends.iter().enumerate() {
            if backends[..i].iter().any(|b| b.name() == backend.name()) {
                return Err(ConfigError::DuplicateBackend {
                    name: backend.name().to_string(),
                });
            }
        }
        let scanner = GridScanner::new(config.scanner.clone())?;
        Ok(Self {
            config,
            scanner,
            backends,
            snapshot: None,
            position: Position::default(),
            region: None,
        })
    }

    /// A navigator over the six built-in backends.
    pub fn with_standard_backends(config: NavigatorConfig) -> Result<Self, ConfigError> {
        Self::new(config, backends::standard())
    }

    /// The active configuration.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// The current snapshot, if one is active.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// The four cursor indices.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Region the active snapshot was built for.
    pub fn region(&self) -> Option<RegionId> {
        self.region
    }

    /// The selected instance, unvalidated.
    pub fn current_entry(&self) -> Option<&Entry> {
        let (id, index) = self.current_ref()?;
        self.snapshot.as_ref()?.instance(id, index)
    }

    /// Drop the snapshot; the next call refreshes.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
        self.region = None;
    }

    /// Drop the snapshot if the host's active region changed since it
    /// was built. Returns whether it was dropped.
    pub fn check_world_switch<W: World + ?Sized>(&mut self, world: &W) -> bool {
        let active = world.active_region();
        match self.region {
            Some(region) if region != active => {
                debug!(target: "sonar::nav", from = %region, to = %active, "nav.world_switch");
                self.invalidate();
                true
            }
            _ => false,
        }
    }

    /// Re-scan the active region and rebuild the snapshot.
    ///
    /// Keeps the selected category if a category of the same name still
    /// exists; every lower index resets to 0. Returns the announcement of
    /// the selected category, or [`NOTHING_FOUND`]. A failed scan or
    /// backend is logged and yields an empty snapshot.
    pub fn refresh<W: World + CursorControl>(&mut self, world: &W) -> String {
        let region = world.active_region();
        let cursor = world.cursor_cell();
        let previous = self.category().map(|c| c.name().to_string());

        let entries = match self.collect(world, region, cursor) {
            Ok(entries) => entries,
            Err(error) => {
                error!(target: "sonar::nav", %region, %error, "nav.refresh_failed");
                Vec::new()
            }
        };
        let snapshot = Snapshot::build(entries, &self.config.taxonomy, world.dims(), cursor);
        debug!(
            target: "sonar::nav",
            %region,
            categories = snapshot.categories().len(),
            items = snapshot.item_count(),
            instances = snapshot.len(),
            "nav.refresh"
        );

        self.position = Position::default();
        if let Some(index) = previous
            .as_deref()
            .and_then(|name| snapshot.category_position(name))
        {
            self.position.category = index;
        }
        self.snapshot = Some(snapshot);
        self.region = Some(region);
        self.announce_category()
    }

    fn collect<W: World>(
        &mut self,
        world: &W,
        region: RegionId,
        cursor: Cell,
    ) -> Result<Vec<Entry>, NavError> {
        let mut result = self.scanner.scan(world, region)?;
        let mut entries = Vec::new();
        for (i, backend) in self.backends.iter().enumerate() {
            let id = BackendId(i as u16);
            let mut ctx = ScanContext::new(world, region, cursor, id, &mut result);
            let found = backend.scan(&mut ctx).map_err(|e| NavError::Backend {
                name: backend.name().to_string(),
                reason: e.to_string(),
            })?;
            debug!(target: "sonar::nav", backend = backend.name(), entries = found.len(), "nav.backend_scan");
            entries.extend(found);
        }
        Ok(entries)
    }

    /// Refresh if needed. Returns whether a refresh happened.
    fn ensure<W: World + CursorControl>(&mut self, world: &W) -> bool {
        self.check_world_switch(world);
        if self.snapshot.is_none() {
            self.refresh(world);
            return true;
        }
        false
    }

    // ── Cycling ─────────────────────────────────────────────────

    /// Select the next or previous category.
    pub fn cycle_category<W: World + CursorControl>(
        &mut self,
        world: &W,
        direction: Direction,
    ) -> String {
        if self.ensure(world) {
            return self.announce_category();
        }
        let len = self.snapshot.as_ref().map_or(0, |s| s.categories().len());
        if len == 0 {
            return NOTHING_FOUND.to_string();
        }
        self.position = Position {
            category: direction.step(self.position.category, len),
            ..Position::default()
        };
        self.announce_category()
    }

    /// Select the next or previous subcategory that has items.
    pub fn cycle_subcategory<W: World + CursorControl>(
        &mut self,
        world: &W,
        direction: Direction,
    ) -> String {
        if self.ensure(world) {
            return self.announce_subcategory();
        }
        let Some(category) = self.category() else {
            return NOTHING_FOUND.to_string();
        };
        let subs = category.subcategories();
        let mut next = self.position.subcategory;
        for _ in 0..subs.len() {
            next = direction.step(next, subs.len());
            if !subs[next].is_empty() {
                break;
            }
        }
        self.position.subcategory = next;
        self.position.item = 0;
        self.position.instance = 0;
        self.announce_subcategory()
    }

    /// Select the next or previous item and announce its nearest instance.
    pub fn cycle_item<W: World + CursorControl>(&mut self, world: &W, direction: Direction) -> String {
        if self.ensure(world) {
            return self.announce_item(world);
        }
        let len = self.subcategory().map_or(0, Subcategory::len);
        if len == 0 {
            return NOTHING_FOUND.to_string();
        }
        self.position.item = direction.step(self.position.item, len);
        self.position.instance = 0;
        self.announce_item(world)
    }

    /// Select the next or previous instance of the current item.
    pub fn cycle_instance<W: World + CursorControl>(
        &mut self,
        world: &W,
        direction: Direction,
    ) -> String {
        if self.ensure(world) {
            return self.announce_current(world);
        }
        let len = self.item().map_or(0, Item::len);
        if len == 0 {
            return NOTHING_FOUND.to_string();
        }
        self.position.instance = direction.step(self.position.instance, len);
        self.announce_current(world)
    }

    // ── Announcing ──────────────────────────────────────────────

    /// Name of the selected category.
    pub fn announce_category(&self) -> String {
        self.category()
            .map_or_else(|| NOTHING_FOUND.to_string(), |c| c.name().to_string())
    }

    /// Name of the selected subcategory.
    pub fn announce_subcategory(&self) -> String {
        self.subcategory()
            .map_or_else(|| NOTHING_FOUND.to_string(), |s| s.name().to_string())
    }

    /// Validate and announce the selected instance, positioned within its
    /// item.
    ///
    /// Stale instances are removed one by one until a valid one is found
    /// or the catalog runs out.
    pub fn announce_current<W: World + CursorControl>(&mut self, world: &W) -> String {
        self.ensure(world);
        match self.validate_current(world) {
            Some((id, index)) => {
                let count = self.item().map_or(0, Item::len);
                self.describe(world, id, index, self.position.instance, count)
            }
            None => NOTHING_FOUND.to_string(),
        }
    }

    fn announce_item<W: World + CursorControl>(&mut self, world: &W) -> String {
        match self.validate_current(world) {
            Some((id, index)) => {
                let count = self.subcategory().map_or(0, Subcategory::len);
                self.describe(world, id, index, self.position.item, count)
            }
            None => NOTHING_FOUND.to_string(),
        }
    }

    fn describe<W: World + CursorControl>(
        &self,
        world: &W,
        id: ItemId,
        index: usize,
        ordinal: usize,
        count: usize,
    ) -> String {
        let Some(entry) = self.snapshot.as_ref().and_then(|s| s.instance(id, index)) else {
            return NOTHING_FOUND.to_string();
        };
        let name = match self.backends.get(usize::from(entry.backend.0)) {
            Some(backend) => backend.format_name(entry),
            None => entry.item.clone(),
        };
        let phrase = distance_phrase(world.dims(), world.cursor_cell(), entry.cell);
        if self.config.announce_position {
            format!("{name}, {phrase}, {} of {count}", ordinal + 1)
        } else {
            format!("{name}, {phrase}")
        }
    }

    // ── Teleport ────────────────────────────────────────────────

    /// Move the host cursor to the selected instance.
    ///
    /// The instance is validated first; a stale one is removed (with the
    /// cursor repaired) and reported as [`Teleport::Invalid`].
    pub fn teleport<W: World + CursorControl>(&mut self, world: &mut W) -> Teleport {
        self.ensure(&*world);
        let Some((id, index)) = self.current_ref() else {
            return Teleport::Empty;
        };
        let cursor = world.cursor_cell();
        match self.validate_one(&*world, cursor, id, index) {
            Some(cell) => {
                let description = world.move_cursor(cell);
                debug!(target: "sonar::nav", %cell, "nav.teleport");
                Teleport::Moved { cell, description }
            }
            None => {
                warn!(target: "sonar::nav", item = ?self.item().map(Item::name), "nav.teleport_invalid");
                self.remove_current();
                Teleport::Invalid
            }
        }
    }

    // ── Validation and repair ───────────────────────────────────

    /// Ask the owning backend whether instance `index` of `id` still
    /// exists. Returns its (possibly moved) cell.
    fn validate_one(
        &mut self,
        world: &dyn World,
        cursor: Cell,
        id: ItemId,
        index: usize,
    ) -> Option<Cell> {
        let entry = self.snapshot.as_mut()?.instance_mut(id, index)?;
        let backend = self.backends.get(usize::from(entry.backend.0))?;
        backend
            .validate_entry(entry, world, cursor)
            .then_some(entry.cell)
    }

    fn validate_current<W: World + CursorControl>(&mut self, world: &W) -> Option<(ItemId, usize)> {
        let cursor = world.cursor_cell();
        loop {
            let (id, index) = self.current_ref()?;
            if self.validate_one(world, cursor, id, index).is_some() {
                return Some((id, index));
            }
            warn!(target: "sonar::nav", item = ?self.item().map(Item::name), "nav.stale_entry");
            self.remove_current();
        }
    }

    /// Remove the selected instance and repair the cursor by name.
    fn remove_current(&mut self) {
        let Some((id, index)) = self.current_ref() else {
            return;
        };
        let category = self.category().map(|c| c.name().to_string());
        let subcategory = self.subcategory().map(|s| s.name().to_string());
        if let Some(snapshot) = self.snapshot.as_mut() {
            snapshot.remove_instance(id, index);
        }
        self.repair(category.as_deref(), subcategory.as_deref());
    }

    /// Re-locate category and subcategory by name, falling back to the
    /// nearest surviving index, then clamp item and instance.
    fn repair(&mut self, category: Option<&str>, subcategory: Option<&str>) {
        let pos = &mut self.position;
        let Some(snapshot) = self.snapshot.as_ref() else {
            *pos = Position::default();
            return;
        };
        let categories = snapshot.categories();
        if categories.is_empty() {
            *pos = Position::default();
            return;
        }
        pos.category = category
            .and_then(|name| snapshot.category_position(name))
            .unwrap_or(pos.category.min(categories.len() - 1));

        let current = &categories[pos.category];
        let subs = current.subcategories();
        pos.subcategory = subcategory
            .and_then(|name| current.subcategory_position(name))
            .unwrap_or(pos.subcategory.min(subs.len().saturating_sub(1)));

        let items = subs.get(pos.subcategory).map_or(&[][..], Subcategory::items);
        pos.item = pos.item.min(items.len().saturating_sub(1));
        let instances = items
            .get(pos.item)
            .and_then(|&id| snapshot.item(id))
            .map_or(0, Item::len);
        pos.instance = pos.instance.min(instances.saturating_sub(1));
    }

    // ── Lookups ─────────────────────────────────────────────────

    fn category(&self) -> Option<&Category> {
        self.snapshot
            .as_ref()?
            .categories()
            .get(self.position.category)
    }

    fn subcategory(&self) -> Option<&Subcategory> {
        self.category()?
            .subcategories()
            .get(self.position.subcategory)
    }

    fn item(&self) -> Option<&Item> {
        let (id, _) = self.current_item()?;
        self.snapshot.as_ref()?.item(id)
    }

    fn current_item(&self) -> Option<(ItemId, usize)> {
        let id = *self.subcategory()?.items().get(self.position.item)?;
        Some((id, self.position.instance))
    }

    fn current_ref(&self) -> Option<(ItemId, usize)> {
        let (id, index) = self.current_item()?;
        let len = self.snapshot.as_ref()?.item(id)?.len();
        (index < len).then_some((id, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_core::{GridDims, Phase};
    use sonar_test_utils::MockWorld;

    fn navigator() -> Navigator {
        Navigator::with_standard_backends(NavigatorConfig::default()).unwrap()
    }

    fn world() -> MockWorld {
        let mut world = MockWorld::new(GridDims::new(20, 4).unwrap());
        let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
        let water = world.add_element("Water", Phase::Liquid, "Water");
        world.fill_material(0, 2, 0, 4, copper);
        world.fill_material(0, 10, 0, 11, water);
        let swamp = world.add_biome("Swamp");
        world.fill_biome(3, 0, 3, 19, swamp);
        world
    }

    #[test]
    fn direction_wraps_both_ways() {
        assert_eq!(Direction::Next.step(2, 3), 0);
        assert_eq!(Direction::Previous.step(0, 3), 2);
        assert_eq!(Direction::Next.step(0, 1), 0);
    }

    #[test]
    fn first_cycle_refreshes_without_moving() {
        let world = world();
        let mut nav = navigator();
        assert!(nav.snapshot().is_none());
        assert_eq!(nav.cycle_category(&world, Direction::Next), "Solids");
        assert_eq!(nav.position(), Position::default());
        assert_eq!(nav.cycle_category(&world, Direction::Next), "Liquids");
        assert_eq!(nav.cycle_category(&world, Direction::Next), "Biomes");
        assert_eq!(nav.cycle_category(&world, Direction::Next), "Solids");
        assert_eq!(nav.cycle_category(&world, Direction::Previous), "Biomes");
    }

    #[test]
    fn higher_level_change_resets_lower_indices() {
        let world = world();
        let mut nav = navigator();
        nav.refresh(&world);
        nav.cycle_subcategory(&world, Direction::Next);
        assert_eq!(nav.position().subcategory, 1);
        nav.cycle_category(&world, Direction::Next);
        assert_eq!(
            nav.position(),
            Position {
                category: 1,
                ..Position::default()
            }
        );
    }

    #[test]
    fn subcategory_cycle_starts_at_all() {
        let world = world();
        let mut nav = navigator();
        assert_eq!(nav.cycle_subcategory(&world, Direction::Next), "All");
        assert_eq!(nav.cycle_subcategory(&world, Direction::Next), "Ores");
        assert_eq!(nav.cycle_subcategory(&world, Direction::Next), "All");
    }

    #[test]
    fn refresh_keeps_category_by_name() {
        let mut world = world();
        let mut nav = navigator();
        nav.refresh(&world);
        nav.cycle_category(&world, Direction::Next);
        assert_eq!(nav.announce_category(), "Liquids");

        world.fill_material(0, 0, 0, 1, sonar_core::ElementId(0));
        world.set_material(world_cell(&world, 0, 2), None);
        assert_eq!(nav.refresh(&world), "Liquids");
        assert_eq!(nav.position().category, 1);
    }

    fn world_cell(world: &MockWorld, row: u32, col: u32) -> Cell {
        use sonar_core::GridQuery;
        world.dims().cell(row, col).unwrap()
    }

    #[test]
    fn vanished_category_falls_back_to_first() {
        let mut world = world();
        let mut nav = navigator();
        nav.refresh(&world);
        nav.cycle_category(&world, Direction::Next);
        for col in 10..12 {
            world.set_material(world_cell(&world, 0, col), None);
        }
        assert_eq!(nav.refresh(&world), "Solids");
    }

    #[test]
    fn region_switch_forces_refresh() {
        let mut world = world();
        let mut nav = navigator();
        nav.refresh(&world);
        assert!(!nav.check_world_switch(&world));
        let other = world.add_region(sonar_core::Bounds::new(2, 0, 3, 19).unwrap());
        world.set_active_region(other);
        assert_eq!(nav.cycle_category(&world, Direction::Next), "Biomes");
        assert_eq!(nav.region(), Some(other));
    }

    #[test]
    fn item_announcement_has_distance_and_position() {
        let mut world = world();
        world.set_cursor(world_cell(&world, 0, 0));
        let mut nav = navigator();
        assert_eq!(
            nav.cycle_item(&world, Direction::Next),
            "Copper Ore, 3 tiles, 2 right, 1 of 1"
        );
    }

    #[test]
    fn position_suffix_can_be_disabled() {
        let world = world();
        let mut nav = Navigator::with_standard_backends(NavigatorConfig {
            announce_position: false,
            ..NavigatorConfig::default()
        })
        .unwrap();
        assert_eq!(nav.announce_current(&world), "Copper Ore, 3 tiles, 2 right");
    }

    #[test]
    fn teleport_moves_the_host_cursor() {
        let mut world = world();
        let mut nav = navigator();
        let outcome = nav.teleport(&mut world);
        let target = world_cell(&world, 0, 2);
        assert_eq!(
            outcome,
            Teleport::Moved {
                cell: target,
                description: "row 0, column 2".into()
            }
        );
        assert_eq!(world.moves(), &[target]);
    }

    #[test]
    fn empty_world_reports_nothing_found() {
        let mut world = MockWorld::new(GridDims::new(3, 3).unwrap());
        let mut nav = navigator();
        assert_eq!(nav.cycle_category(&world, Direction::Next), NOTHING_FOUND);
        assert_eq!(nav.cycle_item(&world, Direction::Next), NOTHING_FOUND);
        assert_eq!(nav.teleport(&mut world), Teleport::Empty);
        assert_eq!(nav.teleport(&mut world).announcement(), "nothing found");
    }

    #[test]
    fn failed_scan_yields_empty_snapshot() {
        let mut world = world();
        world.fail_entities(true);
        let mut nav = navigator();
        assert_eq!(nav.refresh(&world), NOTHING_FOUND);
        assert!(nav.snapshot().unwrap().is_empty());

        world.fail_entities(false);
        world.set_region_bounds(RegionId(0), sonar_core::Bounds::new(0, 0, 9, 9).unwrap());
        nav.invalidate();
        assert_eq!(nav.cycle_category(&world, Direction::Next), NOTHING_FOUND);
    }

    #[test]
    fn stale_instances_are_skipped_when_announcing() {
        let mut world = world();
        let copper = sonar_core::ElementId(0);
        world.fill_material(1, 15, 1, 15, copper);
        let mut nav = navigator();
        nav.refresh(&world);
        let item = nav.cycle_subcategory(&world, Direction::Next);
        assert_eq!(item, "Ores");
        for col in 2..5 {
            world.set_material(world_cell(&world, 0, col), None);
        }
        assert_eq!(nav.announce_current(&world), "Copper Ore, 1 tile, 1 up, 15 right, 1 of 1");
        assert_eq!(nav.snapshot().unwrap().len(), 3);
    }

    fn in_bounds(nav: &Navigator) -> bool {
        let Some(snapshot) = nav.snapshot() else {
            return true;
        };
        let pos = nav.position();
        if snapshot.is_empty() {
            return pos == Position::default();
        }
        snapshot
            .item_at(pos.category, pos.subcategory, pos.item)
            .and_then(|id| snapshot.instance(id, pos.instance))
            .is_some()
    }

    proptest::proptest! {
        #[test]
        fn cursor_stays_in_bounds(ops in proptest::collection::vec((0u8..6, proptest::bool::ANY), 1..40)) {
            let mut world = world();
            let copper = sonar_core::ElementId(0);
            world.fill_material(1, 6, 1, 7, copper);
            world.add_entity("Hatch", "Creatures", "Wild", world_cell(&world, 2, 9));
            let mut nav = navigator();
            let mut cleared = 0;
            for (op, forward) in ops {
                let direction = if forward { Direction::Next } else { Direction::Previous };
                match op {
                    0 => { nav.cycle_category(&world, direction); }
                    1 => { nav.cycle_subcategory(&world, direction); }
                    2 => { nav.cycle_item(&world, direction); }
                    3 => { nav.cycle_instance(&world, direction); }
                    4 => { nav.teleport(&mut world); }
                    _ => {
                        world.set_material(world_cell(&world, 0, cleared % 20), None);
                        cleared += 1;
                        nav.announce_current(&world);
                    }
                }
                proptest::prop_assert!(in_bounds(&nav));
            }
        }
    }

    #[test]
    fn config_errors() {
        assert!(matches!(
            Navigator::new(NavigatorConfig::default(), Vec::new()),
            Err(ConfigError::NoBackends)
        ));
        let twice: Vec<Box<dyn Backend>> = vec![
            Box::new(backends::TileBackend),
            Box::new(backends::TileBackend),
        ];
        assert_eq!(
            Navigator::new(NavigatorConfig::default(), twice).unwrap_err(),
            ConfigError::DuplicateBackend {
                name: "tiles".into()
            }
        );
    }
}
