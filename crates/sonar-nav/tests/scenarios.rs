//! End-to-end navigation over a mock world.

use sonar_catalog::Snapshot;
use sonar_core::{Cell, GridDims, GridQuery, Phase};
use sonar_nav::{Direction, Navigator, NavigatorConfig, Teleport, INVALID};
use sonar_test_utils::{init_tracing, MockWorld};

fn navigator() -> Navigator {
    Navigator::with_standard_backends(NavigatorConfig::default()).unwrap()
}

fn item_names(snapshot: &Snapshot, category: usize, subcategory: usize) -> Vec<String> {
    snapshot
        .subcategory(category, subcategory)
        .unwrap()
        .items()
        .iter()
        .map(|&id| snapshot.item(id).unwrap().name().to_string())
        .collect()
}

#[test]
fn adjacent_deposits_scan_into_two_solids() {
    init_tracing();
    let mut world = MockWorld::new(GridDims::new(10, 3).unwrap());
    let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
    let iron = world.add_element("Iron Ore", Phase::Solid, "Ores");
    world.fill_material(1, 2, 1, 4, copper);
    world.fill_material(1, 5, 1, 6, iron);
    world.set_cursor(world.dims().cell(1, 0).unwrap());

    let mut nav = navigator();
    assert_eq!(nav.refresh(&world), "Solids");
    let snapshot = nav.snapshot().unwrap();
    assert_eq!(snapshot.categories().len(), 1);
    assert_eq!(item_names(snapshot, 0, 1), ["Copper Ore", "Iron Ore"]);

    assert_eq!(
        nav.cycle_item(&world, Direction::Next),
        "Iron Ore, 2 tiles, 5 right, 2 of 2"
    );
    assert_eq!(
        nav.cycle_item(&world, Direction::Next),
        "Copper Ore, 3 tiles, 2 right, 1 of 2"
    );
}

#[test]
fn cycling_instances_reaches_the_farther_generator() {
    init_tracing();
    let mut world = MockWorld::new(GridDims::new(20, 20).unwrap());
    let dims = world.dims();
    let cursor = dims.cell(5, 5).unwrap();
    world.set_cursor(cursor);
    world.add_entity("Generator", "Buildings", "Power", dims.cell(8, 11).unwrap());
    world.add_entity("Generator", "Buildings", "Power", dims.cell(5, 9).unwrap());
    assert_eq!(dims.distance(cursor, dims.cell(5, 9).unwrap()), 4);
    assert_eq!(dims.distance(cursor, dims.cell(8, 11).unwrap()), 9);

    let mut nav = navigator();
    assert_eq!(nav.cycle_category(&world, Direction::Next), "Buildings");
    assert_eq!(nav.announce_current(&world), "Generator, 4 right, 1 of 2");
    assert_eq!(
        nav.cycle_instance(&world, Direction::Next),
        "Generator, 3 up, 6 right, 2 of 2"
    );
    assert_eq!(nav.position().instance, 1);
    assert_eq!(
        nav.cycle_instance(&world, Direction::Next),
        "Generator, 4 right, 1 of 2"
    );
}

#[test]
fn removed_deposit_is_pruned_on_teleport() {
    init_tracing();
    let mut world = MockWorld::new(GridDims::new(12, 2).unwrap());
    let coal = world.add_element("Coal Deposit", Phase::Solid, "Organics");
    let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
    world.fill_material(0, 8, 0, 9, coal);
    world.fill_material(1, 1, 1, 2, copper);

    let mut nav = navigator();
    nav.refresh(&world);
    assert_eq!(nav.cycle_subcategory(&world, Direction::Next), "Ores");
    assert_eq!(nav.cycle_subcategory(&world, Direction::Next), "Organics");
    assert_eq!(nav.current_entry().unwrap().item, "Coal Deposit");

    for col in 8..10 {
        world.set_material(Cell(col), None);
    }
    let outcome = nav.teleport(&mut world);
    assert_eq!(outcome, Teleport::Invalid);
    assert_eq!(outcome.announcement(), INVALID);
    assert!(world.moves().is_empty());

    let snapshot = nav.snapshot().unwrap();
    assert!(snapshot.entries().all(|e| e.item != "Coal Deposit"));
    let subs: Vec<&str> = snapshot.categories()[0]
        .subcategories()
        .iter()
        .map(|s| s.name())
        .collect();
    assert_eq!(subs, ["All", "Ores"]);
    assert_eq!(nav.announce_subcategory(), "Ores");

    let target = world.dims().cell(1, 1).unwrap();
    assert!(matches!(
        nav.teleport(&mut world),
        Teleport::Moved { cell, .. } if cell == target
    ));
}

#[test]
fn everything_vanishing_leaves_a_valid_empty_cursor() {
    init_tracing();
    let mut world = MockWorld::new(GridDims::new(4, 1).unwrap());
    let hatch = world.add_entity("Hatch", "Creatures", "Wild", Cell(3));

    let mut nav = navigator();
    assert_eq!(nav.cycle_category(&world, Direction::Next), "Creatures");
    world.remove_entity(hatch);
    assert_eq!(nav.teleport(&mut world), Teleport::Invalid);
    assert!(nav.snapshot().unwrap().is_empty());
    assert_eq!(nav.position(), Default::default());
    assert_eq!(nav.cycle_item(&world, Direction::Next), "nothing found");
    assert_eq!(nav.teleport(&mut world), Teleport::Empty);
}

#[test]
fn lazy_validation_moves_through_partial_clusters() {
    init_tracing();
    let mut world = MockWorld::new(GridDims::new(10, 1).unwrap());
    let sand = world.add_element("Sand", Phase::Solid, "Minerals");
    world.fill_material(0, 2, 0, 6, sand);

    let mut nav = navigator();
    assert_eq!(nav.announce_current(&world), "Sand, 5 tiles, 2 right, 1 of 1");
    world.set_material(Cell(2), None);
    world.set_material(Cell(3), None);
    assert_eq!(nav.announce_current(&world), "Sand, 3 tiles, 4 right, 1 of 1");
    assert_eq!(nav.current_entry().unwrap().cell, Cell(4));
}
