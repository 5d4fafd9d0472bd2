//! Single-pass, multi-domain connected-component scanner.
//!
//! A scan runs in three passes over the region's bounding rectangle:
//!
//! 1. **Forward pass** (row-major, bottom row first). Each visible cell of
//!    the region is classified into every enabled domain. Where a domain
//!    applies, its key is recorded and the cell is unioned with its left
//!    and below neighbours *iff* they hold an identical key, so touching
//!    regions of different types never merge. Bridges and individual
//!    orders are emitted straight into flat lists, deduplicated by object.
//! 2. **Extraction pass**. Per layer, every keyed cell is mapped to its
//!    component root; the first sighting of a root creates the cluster
//!    (metadata computed once), later cells are appended.
//! 3. **Post-processing**. Box-order clusters resolve a single target
//!    name from their members, or report it as mixed / not applicable.
//!
//! A lookup failure on one cell is logged and that cell is skipped; the
//! classification is built fully before any buffer is written, so a
//! faulted cell leaves nothing behind.

use indexmap::IndexMap;
use smallvec::SmallVec;
use sonar_core::{
    BiomeId, BoxOrderKind, Bounds, Cell, ElementId, GridDims, GridError, GridQuery, NetworkKind,
    ObjectRef, OrderMark, Phase, PrefabId, RegionId,
};
use tracing::{debug, warn};

use crate::arena::{Layer, ScanArena};
use crate::cluster::{
    BiomeMeta, BoxOrderMeta, Bridge, BuildOrderMeta, ElementMeta, IndividualOrder, OrderTarget,
    SegmentMeta, TileMeta,
};
use crate::config::ScannerConfig;
use crate::error::ScanError;
use crate::result::ScanResult;

/// Everything one cell contributes, gathered before anything is committed.
#[derive(Default)]
struct CellClass {
    element: Option<ElementId>,
    tile: Option<PrefabId>,
    conduits: [Option<PrefabId>; NetworkKind::COUNT],
    bridges: SmallVec<[(NetworkKind, ObjectRef); 1]>,
    box_order: Option<BoxOrderKind>,
    build: Option<ObjectRef>,
    individual: SmallVec<[OrderMark; 2]>,
    biome: Option<BiomeId>,
}

/// Scans regions into typed cluster lists.
///
/// Holds the [`ScanArena`] between scans so buffers are reused. Scans
/// run synchronously on the caller's thread and never overlap.
///
/// # Examples
///
/// ```
/// use sonar_core::{GridDims, GridQuery, Phase};
/// use sonar_scan::{GridScanner, ScannerConfig};
/// use sonar_test_utils::MockWorld;
///
/// let mut world = MockWorld::new(GridDims::new(6, 1).unwrap());
/// let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
/// world.fill_material(0, 0, 0, 2, copper);
///
/// let mut scanner = GridScanner::new(ScannerConfig::default()).unwrap();
/// let result = scanner.scan(&world, world.active_region()).unwrap();
/// assert_eq!(result.elements.len(), 1);
/// assert_eq!(result.elements[0].len(), 3);
/// ```
#[derive(Debug)]
pub struct GridScanner {
    config: ScannerConfig,
    arena: ScanArena,
    scans: u64,
}

impl GridScanner {
    /// Create a scanner after validating `config`.
    pub fn new(config: ScannerConfig) -> Result<Self, ScanError> {
        config.validate()?;
        Ok(Self {
            config,
            arena: ScanArena::new(),
            scans: 0,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// The reusable buffers, for inspection.
    pub fn arena(&self) -> &ScanArena {
        &self.arena
    }

    /// Number of completed scans.
    pub fn scans(&self) -> u64 {
        self.scans
    }

    /// Scan every visible cell of `region` once and return its clusters.
    ///
    /// Fails only when the region itself cannot be scanned (unknown, or
    /// bounds outside the grid). Per-cell faults are counted in
    /// [`ScanResult::faulted_cells`].
    pub fn scan<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        region: RegionId,
    ) -> Result<ScanResult, ScanError> {
        let dims = grid.dims();
        let bounds = grid
            .region_bounds(region)
            .ok_or(ScanError::UnknownRegion { region })?;
        if !bounds.fits(dims) {
            return Err(ScanError::RegionOutsideGrid { region, bounds });
        }

        self.arena.reset(bounds.cell_count());
        let mut result = ScanResult::empty(region);
        self.forward_pass(grid, region, &bounds, dims, &mut result);
        self.extract(grid, &bounds, dims, &mut result);
        self.resolve_targets(grid, &mut result);
        self.scans += 1;

        debug!(
            target: "sonar::scan",
            %region,
            cells = bounds.cell_count(),
            elements = result.elements.len(),
            tiles = result.tiles.len(),
            segments = result.segments.values().map(Vec::len).sum::<usize>(),
            bridges = result.bridges.len(),
            box_orders = result.box_orders.len(),
            build_orders = result.build_orders.len(),
            individual_orders = result.individual_orders.len(),
            biomes = result.biomes.len(),
            faulted = result.faulted_cells,
            "scan.complete"
        );
        Ok(result)
    }

    fn forward_pass<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        region: RegionId,
        bounds: &Bounds,
        dims: GridDims,
        result: &mut ScanResult,
    ) {
        let width = bounds.width() as usize;
        for row in bounds.min_row..=bounds.max_row {
            for col in bounds.min_col..=bounds.max_col {
                let Some(cell) = dims.cell(row, col) else {
                    continue;
                };
                if grid.cell_region(cell) != Some(region) || !grid.is_visible(cell) {
                    continue;
                }
                let local = bounds.local_index(row, col);
                let neighbours = [
                    (col > bounds.min_col).then(|| local - 1),
                    (row > bounds.min_row).then(|| local - width),
                ];
                match self.classify(grid, cell) {
                    Ok(class) => self.commit(grid, cell, local, neighbours, class, result),
                    Err(error) => {
                        result.faulted_cells += 1;
                        warn!(target: "sonar::scan", %cell, %error, "scan.cell_fault");
                    }
                }
            }
        }
    }

    fn classify<G: GridQuery + ?Sized>(&self, grid: &G, cell: Cell) -> Result<CellClass, GridError> {
        let mut class = CellClass::default();
        if self.config.elements {
            class.element = grid
                .material(cell)?
                .map(|m| m.element)
                .filter(|&e| !self.config.is_ignored(e));
        }
        if self.config.tiles {
            class.tile = grid.tile(cell)?;
        }
        for &kind in &self.config.networks {
            class.conduits[kind.index()] = grid.conduit(cell, kind)?;
            if let Some(bridge) = grid.bridge(cell, kind)? {
                class.bridges.push((kind, bridge));
            }
        }
        if self.config.orders {
            class.box_order = grid.box_order(cell)?;
            class.build = grid.build_order(cell)?;
            class.individual = grid.individual_orders(cell)?;
        }
        if self.config.biomes {
            class.biome = grid.biome(cell)?;
        }
        Ok(class)
    }

    fn commit<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        cell: Cell,
        local: usize,
        neighbours: [Option<usize>; 2],
        class: CellClass,
        result: &mut ScanResult,
    ) {
        let arena = &mut self.arena;
        if let Some(element) = class.element {
            arena
                .layer_mut(Layer::Element)
                .assign(local, u64::from(element.0) + 1, neighbours);
        }
        if let Some(prefab) = class.tile {
            arena
                .layer_mut(Layer::Tile)
                .assign(local, prefab_key(prefab), neighbours);
        }
        for kind in NetworkKind::ALL {
            if let Some(prefab) = class.conduits[kind.index()] {
                arena
                    .layer_mut(Layer::Network(kind))
                    .assign(local, prefab_key(prefab), neighbours);
            }
        }
        for (network, bridge) in class.bridges {
            if arena.first_bridge(bridge.object) {
                result.bridges.push(Bridge {
                    object: bridge.object,
                    network,
                    prefab: bridge.prefab,
                    name: prefab_label(grid, bridge.prefab),
                    cell,
                });
            }
        }
        if let Some(kind) = class.box_order {
            arena
                .layer_mut(Layer::BoxOrder)
                .assign(local, kind.key(), neighbours);
        }
        if let Some(plan) = class.build {
            let layer = arena.layer_mut(Layer::BuildOrder);
            layer.assign(local, prefab_key(plan.prefab), neighbours);
            layer.set_object(local, plan.object);
        }
        for mark in class.individual {
            if arena.first_order(mark.object, mark.kind) {
                result.individual_orders.push(IndividualOrder {
                    object: mark.object,
                    kind: mark.kind,
                    target: mark.target,
                    cell,
                });
            }
        }
        if let Some(biome) = class.biome {
            arena
                .layer_mut(Layer::Biome)
                .assign(local, u64::from(biome.0) + 1, neighbours);
        }
    }

    fn extract<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        bounds: &Bounds,
        dims: GridDims,
        result: &mut ScanResult,
    ) {
        let arena = &mut self.arena;

        result.elements = arena.extract(
            Layer::Element,
            bounds,
            dims,
            |key, cell| {
                let element = ElementId(u16::try_from(key - 1).ok()?);
                Some(element_meta(grid, element, cell))
            },
            |_, _| {},
        );

        result.tiles = arena.extract(
            Layer::Tile,
            bounds,
            dims,
            |key, _| {
                let prefab = key_prefab(key)?;
                Some(TileMeta {
                    prefab,
                    name: prefab_label(grid, prefab),
                })
            },
            |_, _| {},
        );

        let mut segments = IndexMap::with_capacity(self.config.networks.len());
        for &network in &self.config.networks {
            let clusters = arena.extract(
                Layer::Network(network),
                bounds,
                dims,
                |key, _| {
                    let prefab = key_prefab(key)?;
                    Some(SegmentMeta {
                        network,
                        prefab,
                        name: prefab_label(grid, prefab),
                    })
                },
                |_, _| {},
            );
            segments.insert(network, clusters);
        }
        result.segments = segments;

        result.box_orders = arena.extract(
            Layer::BoxOrder,
            bounds,
            dims,
            |key, _| {
                Some(BoxOrderMeta {
                    kind: BoxOrderKind::from_key(key)?,
                    target: OrderTarget::NotApplicable,
                })
            },
            |_, _| {},
        );

        result.build_orders = arena.extract(
            Layer::BuildOrder,
            bounds,
            dims,
            |key, _| {
                let prefab = key_prefab(key)?;
                Some(BuildOrderMeta {
                    prefab,
                    name: prefab_label(grid, prefab),
                    objects: Default::default(),
                })
            },
            |meta, object| {
                if let Some(object) = object {
                    meta.objects.insert(object);
                }
            },
        );

        result.biomes = arena.extract(
            Layer::Biome,
            bounds,
            dims,
            |key, _| {
                let biome = BiomeId(u16::try_from(key - 1).ok()?);
                Some(BiomeMeta {
                    biome,
                    name: grid
                        .biome_name(biome)
                        .unwrap_or_else(|| format!("Biome {biome}")),
                })
            },
            |_, _| {},
        );
    }

    fn resolve_targets<G: GridQuery + ?Sized>(&self, grid: &G, result: &mut ScanResult) {
        for cluster in &mut result.box_orders {
            let kind = cluster.meta.kind;
            let mut target = OrderTarget::NotApplicable;
            for &cell in &cluster.cells {
                let name = match grid.order_target(cell, kind) {
                    Ok(Some(name)) => name,
                    Ok(None) => continue,
                    Err(error) => {
                        warn!(target: "sonar::scan", %cell, %error, "scan.target_fault");
                        continue;
                    }
                };
                match &target {
                    OrderTarget::NotApplicable => target = OrderTarget::Single(name),
                    OrderTarget::Single(first) if *first != name => {
                        target = OrderTarget::Mixed;
                        break;
                    }
                    _ => {}
                }
            }
            cluster.meta.target = target;
        }
    }
}

fn prefab_key(prefab: PrefabId) -> u64 {
    u64::from(prefab.0) + 1
}

fn key_prefab(key: u64) -> Option<PrefabId> {
    u32::try_from(key.checked_sub(1)?).ok().map(PrefabId)
}

fn prefab_label<G: GridQuery + ?Sized>(grid: &G, prefab: PrefabId) -> String {
    grid.prefab_name(prefab)
        .unwrap_or_else(|| format!("Prefab {prefab}"))
}

fn element_meta<G: GridQuery + ?Sized>(grid: &G, element: ElementId, cell: Cell) -> ElementMeta {
    match grid.element_info(element) {
        Some(info) => ElementMeta {
            element,
            name: info.name,
            phase: info.phase,
            class: info.class,
        },
        None => ElementMeta {
            element,
            name: format!("Element {element}"),
            phase: grid
                .material(cell)
                .ok()
                .flatten()
                .map_or(Phase::Solid, |m| m.phase),
            class: "Other".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_core::{IndividualOrderKind, ObjectId};
    use sonar_test_utils::{Lookup, MockWorld};

    fn scanner() -> GridScanner {
        GridScanner::new(ScannerConfig::default()).unwrap()
    }

    #[test]
    fn adjacent_deposits_with_different_keys_stay_apart() {
        let mut world = MockWorld::new(GridDims::new(8, 1).unwrap());
        let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
        let iron = world.add_element("Iron Ore", Phase::Solid, "Ores");
        world.fill_material(0, 0, 0, 2, copper);
        world.fill_material(0, 3, 0, 4, iron);

        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.elements.len(), 2);
        assert_eq!(result.elements[0].meta.name, "Copper Ore");
        assert_eq!(result.elements[0].len(), 3);
        assert_eq!(result.elements[1].meta.name, "Iron Ore");
        assert_eq!(result.elements[1].len(), 2);
        assert_eq!(result.elements[0].meta.phase.label(), "Solids");
    }

    #[test]
    fn u_shape_merges_through_later_rows() {
        // Two columns joined only by the top row: the union must link
        // components discovered separately in earlier rows.
        let mut world = MockWorld::new(GridDims::new(3, 3).unwrap());
        let sand = world.add_element("Sand", Phase::Solid, "Stone");
        world.fill_material(0, 0, 2, 0, sand);
        world.fill_material(0, 2, 2, 2, sand);
        world.fill_material(2, 1, 2, 1, sand);

        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.elements.len(), 1);
        assert_eq!(result.elements[0].len(), 7);
    }

    #[test]
    fn diagonal_cells_are_not_connected() {
        let mut world = MockWorld::new(GridDims::new(2, 2).unwrap());
        let ice = world.add_element("Ice", Phase::Solid, "Ice");
        world.fill_material(0, 0, 0, 0, ice);
        world.fill_material(1, 1, 1, 1, ice);

        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.elements.len(), 2);
    }

    #[test]
    fn hidden_and_foreign_cells_are_skipped() {
        let mut world = MockWorld::new(GridDims::new(5, 1).unwrap());
        let water = world.add_element("Water", Phase::Liquid, "Water");
        world.fill_material(0, 0, 0, 4, water);
        world.set_visible(world.dims().cell(0, 2).unwrap(), false);
        let other = world.add_region(sonar_core::Bounds::new(0, 4, 0, 4).unwrap());

        let result = scanner().scan(&world, world.active_region()).unwrap();
        let sizes: Vec<usize> = result.elements.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![2, 1]);

        let result = scanner().scan(&world, other).unwrap();
        assert_eq!(result.elements.len(), 1);
        assert_eq!(result.elements[0].len(), 1);
    }

    #[test]
    fn ignored_elements_are_not_clustered() {
        let mut world = MockWorld::new(GridDims::new(3, 1).unwrap());
        let oxygen = world.add_element("Oxygen", Phase::Gas, "Breathable");
        world.fill_material(0, 0, 0, 2, oxygen);
        let mut scanner = GridScanner::new(ScannerConfig {
            ignored_elements: vec![oxygen],
            ..ScannerConfig::default()
        })
        .unwrap();
        let result = scanner.scan(&world, world.active_region()).unwrap();
        assert!(result.elements.is_empty());
    }

    #[test]
    fn faulted_cell_is_skipped_and_scan_continues() {
        let mut world = MockWorld::new(GridDims::new(5, 1).unwrap());
        let gold = world.add_element("Gold", Phase::Solid, "Ores");
        world.fill_material(0, 0, 0, 4, gold);
        world.fail_cell(world.dims().cell(0, 2).unwrap());

        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.faulted_cells, 1);
        let sizes: Vec<usize> = result.elements.iter().map(|c| c.len()).collect();
        assert_eq!(sizes, vec![2, 2]);
    }

    #[test]
    fn late_lookup_fault_leaves_no_partial_keys() {
        let mut world = MockWorld::new(GridDims::new(5, 1).unwrap());
        let gold = world.add_element("Gold", Phase::Solid, "Ores");
        let tile = world.add_prefab("Tile");
        let swamp = world.add_biome("Swamp");
        world.fill_material(0, 0, 0, 4, gold);
        world.fill_biome(0, 0, 0, 4, swamp);
        for col in 0..5 {
            world.set_tile(Cell(col), tile);
        }
        // Material and tile answer before the biome lookup fails.
        world.fail_lookup(Cell(2), Lookup::Biome);

        let mut scanner = scanner();
        let result = scanner.scan(&world, world.active_region()).unwrap();
        assert_eq!(result.faulted_cells, 1);
        assert_eq!(scanner.arena().layer(Layer::Element).key(2), crate::arena::ABSENT);
        assert_eq!(scanner.arena().layer(Layer::Tile).key(2), crate::arena::ABSENT);
        for sizes in [
            result.elements.iter().map(|c| c.len()).collect::<Vec<_>>(),
            result.tiles.iter().map(|c| c.len()).collect(),
            result.biomes.iter().map(|c| c.len()).collect(),
        ] {
            assert_eq!(sizes, vec![2, 2]);
        }
    }

    #[test]
    fn order_target_fault_skips_that_member() {
        let mut world = MockWorld::new(GridDims::new(3, 1).unwrap());
        world.set_box_order(Cell(0), BoxOrderKind::Dig, Some("Copper Ore"));
        world.set_box_order(Cell(1), BoxOrderKind::Dig, Some("Iron Ore"));
        world.set_box_order(Cell(2), BoxOrderKind::Dig, Some("Copper Ore"));
        world.fail_lookup(Cell(1), Lookup::OrderTarget);

        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.faulted_cells, 0);
        assert_eq!(result.box_orders.len(), 1);
        assert_eq!(result.box_orders[0].len(), 3);
        assert_eq!(
            result.box_orders[0].meta.target,
            OrderTarget::Single("Copper Ore".into())
        );
    }

    #[test]
    fn unknown_region_is_an_error() {
        let world = MockWorld::new(GridDims::new(2, 2).unwrap());
        assert_eq!(
            scanner().scan(&world, RegionId(99)).unwrap_err(),
            ScanError::UnknownRegion {
                region: RegionId(99)
            }
        );
    }

    #[test]
    fn networks_cluster_per_layer() {
        let mut world = MockWorld::new(GridDims::new(4, 1).unwrap());
        let wire = world.add_prefab("Wire");
        let pipe = world.add_prefab("Gas Pipe");
        for col in 0..4 {
            let cell = world.dims().cell(0, col).unwrap();
            world.set_conduit(cell, NetworkKind::Power, wire);
            if col != 1 {
                world.set_conduit(cell, NetworkKind::Gas, pipe);
            }
        }
        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.segments[&NetworkKind::Power].len(), 1);
        assert_eq!(result.segments[&NetworkKind::Power][0].len(), 4);
        assert_eq!(result.segments[&NetworkKind::Gas].len(), 2);
        assert!(result.segments[&NetworkKind::Liquid].is_empty());
    }

    #[test]
    fn multi_cell_bridge_is_emitted_once() {
        let mut world = MockWorld::new(GridDims::new(4, 1).unwrap());
        let bridge = world.add_prefab("Wire Bridge");
        let object = ObjectId(500);
        for col in 0..3 {
            let cell = world.dims().cell(0, col).unwrap();
            world.set_bridge(cell, NetworkKind::Power, object, bridge);
        }
        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.bridges.len(), 1);
        assert_eq!(result.bridges[0].cell, Cell(0));
        assert_eq!(result.bridges[0].name, "Wire Bridge");
    }

    #[test]
    fn build_orders_count_each_structure_once() {
        let mut world = MockWorld::new(GridDims::new(6, 2).unwrap());
        let ladder = world.add_prefab("Ladder");
        // Two 2-cell plans stacked next to each other, one cluster.
        for (col, object) in [(0, 1), (1, 2)] {
            for row in 0..2 {
                let cell = world.dims().cell(row, col).unwrap();
                world.set_build_order(cell, ObjectId(object), ladder);
            }
        }
        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.build_orders.len(), 1);
        assert_eq!(result.build_orders[0].len(), 4);
        assert_eq!(result.build_orders[0].meta.objects.len(), 2);
    }

    #[test]
    fn box_order_targets_resolve_single_mixed_and_not_applicable() {
        let mut world = MockWorld::new(GridDims::new(9, 1).unwrap());
        let cell = |c| Cell(c);
        for c in 0..3 {
            world.set_box_order(cell(c), BoxOrderKind::Dig, Some("Copper Ore"));
        }
        world.set_box_order(cell(4), BoxOrderKind::Dig, Some("Copper Ore"));
        world.set_box_order(cell(5), BoxOrderKind::Dig, Some("Iron Ore"));
        world.set_box_order(cell(7), BoxOrderKind::Sweep, None);
        world.set_box_order(cell(8), BoxOrderKind::Sweep, None);

        let result = scanner().scan(&world, world.active_region()).unwrap();
        let targets: Vec<&OrderTarget> = result.box_orders.iter().map(|c| &c.meta.target).collect();
        assert_eq!(
            targets,
            vec![
                &OrderTarget::Single("Copper Ore".into()),
                &OrderTarget::Mixed,
                &OrderTarget::NotApplicable,
            ]
        );
    }

    #[test]
    fn individual_orders_are_flat_and_deduplicated() {
        let mut world = MockWorld::new(GridDims::new(3, 1).unwrap());
        world.add_individual_order(Cell(0), ObjectId(7), IndividualOrderKind::Capture, "Hatch");
        world.add_individual_order(Cell(1), ObjectId(7), IndividualOrderKind::Capture, "Hatch");
        world.add_individual_order(Cell(1), ObjectId(8), IndividualOrderKind::EmptyPipe, "Gas Pipe");
        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.individual_orders.len(), 2);
        assert_eq!(result.individual_orders[0].cell, Cell(0));
    }

    #[test]
    fn order_on_a_bridge_is_kept_alongside_it() {
        let mut world = MockWorld::new(GridDims::new(2, 1).unwrap());
        let bridge = world.add_prefab("Liquid Bridge");
        world.set_bridge(Cell(0), NetworkKind::Liquid, ObjectId(7), bridge);
        world.add_individual_order(Cell(0), ObjectId(7), IndividualOrderKind::EmptyPipe, "Liquid Bridge");

        let result = scanner().scan(&world, world.active_region()).unwrap();
        assert_eq!(result.bridges.len(), 1);
        assert_eq!(result.individual_orders.len(), 1);
        assert_eq!(result.individual_orders[0].kind, IndividualOrderKind::EmptyPipe);
    }

    #[test]
    fn different_orders_on_one_object_are_all_kept() {
        let mut world = MockWorld::new(GridDims::new(2, 1).unwrap());
        world.add_individual_order(Cell(0), ObjectId(9), IndividualOrderKind::Capture, "Hatch");
        world.add_individual_order(Cell(0), ObjectId(9), IndividualOrderKind::Uproot, "Hatch");
        world.add_individual_order(Cell(1), ObjectId(9), IndividualOrderKind::Capture, "Hatch");

        let result = scanner().scan(&world, world.active_region()).unwrap();
        let kinds: Vec<IndividualOrderKind> =
            result.individual_orders.iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![IndividualOrderKind::Capture, IndividualOrderKind::Uproot]
        );
    }

    #[test]
    fn disabled_domains_are_not_queried() {
        let mut world = MockWorld::new(GridDims::new(2, 1).unwrap());
        let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
        world.fill_material(0, 0, 0, 1, copper);
        let mut scanner = GridScanner::new(ScannerConfig {
            elements: false,
            ..ScannerConfig::default()
        })
        .unwrap();
        let result = scanner.scan(&world, world.active_region()).unwrap();
        assert!(result.elements.is_empty());
    }

    #[test]
    fn rescan_reuses_buffers() {
        let mut world = MockWorld::new(GridDims::new(32, 32).unwrap());
        let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
        world.fill_material(3, 3, 10, 10, copper);
        let mut scanner = scanner();
        let first = scanner.scan(&world, world.active_region()).unwrap();
        let bytes = scanner.arena().memory_bytes();
        let second = scanner.scan(&world, world.active_region()).unwrap();
        assert_eq!(scanner.arena().memory_bytes(), bytes);
        assert_eq!(first, second);
        assert_eq!(scanner.scans(), 2);
    }
}
