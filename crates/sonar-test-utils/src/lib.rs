//! Test utilities and an in-memory host world for Sonar development.
//!
//! [`MockWorld`] implements every host trait ([`GridQuery`],
//! [`EntityQuery`], [`CursorControl`]) over plain vectors and maps, so
//! scanner, catalog and navigator tests can lay out a grid cell by cell.
//! [`init_tracing`] installs a test-friendly `tracing` subscriber.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::{HashMap, HashSet};

use smallvec::SmallVec;
use sonar_core::{
    BiomeId, Bounds, BoxOrderKind, Cell, CursorControl, ElementId, ElementInfo, EntityInfo,
    EntityQuery, GridDims, GridError, GridQuery, IndividualOrderKind, Material, NetworkKind,
    ObjectId, ObjectRef, OrderMark, Phase, PrefabId, RegionId,
};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honours `RUST_LOG`; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One per-cell [`GridQuery`] lookup, for targeted fault injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lookup {
    Material,
    Tile,
    Conduit,
    Bridge,
    BoxOrder,
    OrderTarget,
    BuildOrder,
    IndividualOrders,
    Biome,
}

/// In-memory host world.
///
/// Starts with one region (`RegionId(0)`) covering the whole grid, every
/// cell visible, nothing placed, and the cursor on cell 0.
pub struct MockWorld {
    dims: GridDims,
    active: RegionId,
    regions: HashMap<RegionId, Bounds>,
    cell_region: Vec<RegionId>,
    hidden: HashSet<Cell>,
    faulty: HashSet<Cell>,
    faulty_lookups: HashSet<(Cell, Lookup)>,
    elements: Vec<ElementInfo>,
    materials: Vec<Option<ElementId>>,
    prefabs: Vec<String>,
    tiles: HashMap<Cell, PrefabId>,
    conduits: HashMap<(Cell, NetworkKind), PrefabId>,
    bridges: HashMap<(Cell, NetworkKind), ObjectRef>,
    box_orders: HashMap<Cell, (BoxOrderKind, Option<String>)>,
    build_orders: HashMap<Cell, ObjectRef>,
    individual: HashMap<Cell, Vec<OrderMark>>,
    biomes: Vec<String>,
    cell_biomes: HashMap<Cell, BiomeId>,
    entities: Vec<EntityInfo>,
    entities_fail: bool,
    next_object: u64,
    cursor: Cell,
    moves: Vec<Cell>,
}

impl MockWorld {
    pub fn new(dims: GridDims) -> Self {
        let region = RegionId(0);
        Self {
            dims,
            active: region,
            regions: HashMap::from([(region, Bounds::full(dims))]),
            cell_region: vec![region; dims.cell_count()],
            hidden: HashSet::new(),
            faulty: HashSet::new(),
            faulty_lookups: HashSet::new(),
            elements: Vec::new(),
            materials: vec![None; dims.cell_count()],
            prefabs: Vec::new(),
            tiles: HashMap::new(),
            conduits: HashMap::new(),
            bridges: HashMap::new(),
            box_orders: HashMap::new(),
            build_orders: HashMap::new(),
            individual: HashMap::new(),
            biomes: Vec::new(),
            cell_biomes: HashMap::new(),
            entities: Vec::new(),
            entities_fail: false,
            next_object: 1_000_000,
            cursor: Cell(0),
            moves: Vec::new(),
        }
    }

    fn cells_in(&self, r0: u32, c0: u32, r1: u32, c1: u32) -> Vec<Cell> {
        let mut out = Vec::new();
        for row in r0..=r1 {
            for col in c0..=c1 {
                if let Some(cell) = self.dims.cell(row, col) {
                    out.push(cell);
                }
            }
        }
        out
    }

    fn check(&self, cell: Cell, lookup: Lookup) -> Result<(), GridError> {
        if !self.dims.contains(cell) {
            return Err(GridError::CellOutOfBounds {
                cell,
                cell_count: self.dims.cell_count(),
            });
        }
        if self.faulty.contains(&cell) || self.faulty_lookups.contains(&(cell, lookup)) {
            return Err(GridError::Lookup {
                cell,
                reason: "injected fault".to_string(),
            });
        }
        Ok(())
    }

    // ── Regions and visibility ──────────────────────────────────

    /// Carve a new region out of `bounds`; its cells leave their old region.
    pub fn add_region(&mut self, bounds: Bounds) -> RegionId {
        let region = RegionId(self.regions.len() as u32);
        self.regions.insert(region, bounds);
        for cell in self.cells_in(bounds.min_row, bounds.min_col, bounds.max_row, bounds.max_col) {
            self.cell_region[cell.index()] = region;
        }
        region
    }

    /// Register bounds without assigning any cells (for error paths).
    pub fn set_region_bounds(&mut self, region: RegionId, bounds: Bounds) {
        self.regions.insert(region, bounds);
    }

    pub fn set_active_region(&mut self, region: RegionId) {
        self.active = region;
    }

    pub fn set_visible(&mut self, cell: Cell, visible: bool) {
        if visible {
            self.hidden.remove(&cell);
        } else {
            self.hidden.insert(cell);
        }
    }

    /// Make every lookup at `cell` fail.
    pub fn fail_cell(&mut self, cell: Cell) {
        self.faulty.insert(cell);
    }

    /// Make only `lookup` fail at `cell`; other lookups still answer.
    pub fn fail_lookup(&mut self, cell: Cell, lookup: Lookup) {
        self.faulty_lookups.insert((cell, lookup));
    }

    pub fn heal_cell(&mut self, cell: Cell) {
        self.faulty.remove(&cell);
        self.faulty_lookups.retain(|&(c, _)| c != cell);
    }

    // ── Materials ───────────────────────────────────────────────

    pub fn add_element(&mut self, name: &str, phase: Phase, class: &str) -> ElementId {
        self.elements.push(ElementInfo {
            name: name.to_string(),
            phase,
            class: class.to_string(),
        });
        ElementId((self.elements.len() - 1) as u16)
    }

    pub fn set_material(&mut self, cell: Cell, element: Option<ElementId>) {
        self.materials[cell.index()] = element;
    }

    /// Fill the inclusive rectangle `(r0, c0)..=(r1, c1)` with `element`.
    pub fn fill_material(&mut self, r0: u32, c0: u32, r1: u32, c1: u32, element: ElementId) {
        for cell in self.cells_in(r0, c0, r1, c1) {
            self.materials[cell.index()] = Some(element);
        }
    }

    // ── Buildings and networks ──────────────────────────────────

    pub fn add_prefab(&mut self, name: &str) -> PrefabId {
        self.prefabs.push(name.to_string());
        PrefabId((self.prefabs.len() - 1) as u32)
    }

    pub fn set_tile(&mut self, cell: Cell, prefab: PrefabId) {
        self.tiles.insert(cell, prefab);
    }

    pub fn clear_tile(&mut self, cell: Cell) {
        self.tiles.remove(&cell);
    }

    pub fn set_conduit(&mut self, cell: Cell, network: NetworkKind, prefab: PrefabId) {
        self.conduits.insert((cell, network), prefab);
    }

    pub fn clear_conduit(&mut self, cell: Cell, network: NetworkKind) {
        self.conduits.remove(&(cell, network));
    }

    pub fn set_bridge(&mut self, cell: Cell, network: NetworkKind, object: ObjectId, prefab: PrefabId) {
        self.bridges.insert((cell, network), ObjectRef { object, prefab });
    }

    pub fn clear_bridge(&mut self, cell: Cell, network: NetworkKind) {
        self.bridges.remove(&(cell, network));
    }

    // ── Orders ──────────────────────────────────────────────────

    pub fn set_box_order(&mut self, cell: Cell, kind: BoxOrderKind, target: Option<&str>) {
        self.box_orders
            .insert(cell, (kind, target.map(str::to_string)));
    }

    pub fn clear_box_order(&mut self, cell: Cell) {
        self.box_orders.remove(&cell);
    }

    pub fn set_build_order(&mut self, cell: Cell, object: ObjectId, prefab: PrefabId) {
        self.build_orders.insert(cell, ObjectRef { object, prefab });
    }

    pub fn clear_build_order(&mut self, cell: Cell) {
        self.build_orders.remove(&cell);
    }

    pub fn add_individual_order(
        &mut self,
        cell: Cell,
        object: ObjectId,
        kind: IndividualOrderKind,
        target: &str,
    ) {
        self.individual.entry(cell).or_default().push(OrderMark {
            object,
            kind,
            target: target.to_string(),
        });
    }

    pub fn clear_individual_orders(&mut self, cell: Cell) {
        self.individual.remove(&cell);
    }

    // ── Biomes ──────────────────────────────────────────────────

    pub fn add_biome(&mut self, name: &str) -> BiomeId {
        self.biomes.push(name.to_string());
        BiomeId((self.biomes.len() - 1) as u16)
    }

    pub fn fill_biome(&mut self, r0: u32, c0: u32, r1: u32, c1: u32, biome: BiomeId) {
        for cell in self.cells_in(r0, c0, r1, c1) {
            self.cell_biomes.insert(cell, biome);
        }
    }

    // ── Entities ────────────────────────────────────────────────

    /// Place a live entity; returns its fresh object id.
    pub fn add_entity(&mut self, name: &str, category: &str, subcategory: &str, cell: Cell) -> ObjectId {
        let object = ObjectId(self.next_object);
        self.next_object += 1;
        self.entities.push(EntityInfo {
            object,
            name: name.to_string(),
            category: category.to_string(),
            subcategory: subcategory.to_string(),
            cell,
        });
        object
    }

    pub fn move_entity(&mut self, object: ObjectId, cell: Cell) {
        if let Some(e) = self.entities.iter_mut().find(|e| e.object == object) {
            e.cell = cell;
        }
    }

    pub fn remove_entity(&mut self, object: ObjectId) {
        self.entities.retain(|e| e.object != object);
    }

    /// Make [`EntityQuery::entities`] fail.
    pub fn fail_entities(&mut self, fail: bool) {
        self.entities_fail = fail;
    }

    // ── Cursor ──────────────────────────────────────────────────

    pub fn set_cursor(&mut self, cell: Cell) {
        self.cursor = cell;
    }

    /// Every cell the cursor was moved to through [`CursorControl`].
    pub fn moves(&self) -> &[Cell] {
        &self.moves
    }
}

impl GridQuery for MockWorld {
    fn dims(&self) -> GridDims {
        self.dims
    }

    fn active_region(&self) -> RegionId {
        self.active
    }

    fn region_bounds(&self, region: RegionId) -> Option<Bounds> {
        self.regions.get(&region).copied()
    }

    fn cell_region(&self, cell: Cell) -> Option<RegionId> {
        self.cell_region.get(cell.index()).copied()
    }

    fn is_visible(&self, cell: Cell) -> bool {
        !self.hidden.contains(&cell)
    }

    fn material(&self, cell: Cell) -> Result<Option<Material>, GridError> {
        self.check(cell, Lookup::Material)?;
        Ok(self.materials[cell.index()].map(|element| Material {
            element,
            phase: self.elements[element.0 as usize].phase,
        }))
    }

    fn element_info(&self, element: ElementId) -> Option<ElementInfo> {
        self.elements.get(element.0 as usize).cloned()
    }

    fn tile(&self, cell: Cell) -> Result<Option<PrefabId>, GridError> {
        self.check(cell, Lookup::Tile)?;
        Ok(self.tiles.get(&cell).copied())
    }

    fn conduit(&self, cell: Cell, network: NetworkKind) -> Result<Option<PrefabId>, GridError> {
        self.check(cell, Lookup::Conduit)?;
        Ok(self.conduits.get(&(cell, network)).copied())
    }

    fn bridge(&self, cell: Cell, network: NetworkKind) -> Result<Option<ObjectRef>, GridError> {
        self.check(cell, Lookup::Bridge)?;
        Ok(self.bridges.get(&(cell, network)).copied())
    }

    fn prefab_name(&self, prefab: PrefabId) -> Option<String> {
        self.prefabs.get(prefab.0 as usize).cloned()
    }

    fn box_order(&self, cell: Cell) -> Result<Option<BoxOrderKind>, GridError> {
        self.check(cell, Lookup::BoxOrder)?;
        Ok(self.box_orders.get(&cell).map(|(kind, _)| *kind))
    }

    fn order_target(&self, cell: Cell, kind: BoxOrderKind) -> Result<Option<String>, GridError> {
        self.check(cell, Lookup::OrderTarget)?;
        Ok(self
            .box_orders
            .get(&cell)
            .filter(|(k, _)| *k == kind)
            .and_then(|(_, target)| target.clone()))
    }

    fn build_order(&self, cell: Cell) -> Result<Option<ObjectRef>, GridError> {
        self.check(cell, Lookup::BuildOrder)?;
        Ok(self.build_orders.get(&cell).copied())
    }

    fn individual_orders(&self, cell: Cell) -> Result<SmallVec<[OrderMark; 2]>, GridError> {
        self.check(cell, Lookup::IndividualOrders)?;
        Ok(self
            .individual
            .get(&cell)
            .map(|marks| marks.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn biome(&self, cell: Cell) -> Result<Option<BiomeId>, GridError> {
        self.check(cell, Lookup::Biome)?;
        Ok(self.cell_biomes.get(&cell).copied())
    }

    fn biome_name(&self, biome: BiomeId) -> Option<String> {
        self.biomes.get(biome.0 as usize).cloned()
    }
}

impl EntityQuery for MockWorld {
    fn entities(&self, region: RegionId) -> Result<Vec<EntityInfo>, GridError> {
        if self.entities_fail {
            return Err(GridError::Entities {
                region,
                reason: "injected fault".to_string(),
            });
        }
        Ok(self
            .entities
            .iter()
            .filter(|e| self.cell_region(e.cell) == Some(region))
            .cloned()
            .collect())
    }

    fn entity_cell(&self, object: ObjectId) -> Option<Cell> {
        self.entities
            .iter()
            .find(|e| e.object == object)
            .map(|e| e.cell)
    }
}

impl CursorControl for MockWorld {
    fn cursor_cell(&self) -> Cell {
        self.cursor
    }

    fn move_cursor(&mut self, cell: Cell) -> String {
        self.cursor = cell;
        self.moves.push(cell);
        match self.dims.row_col(cell) {
            Some((row, col)) => format!("row {row}, column {col}"),
            None => "off grid".to_string(),
        }
    }
}
