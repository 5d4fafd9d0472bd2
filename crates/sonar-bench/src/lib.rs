//! Benchmark profiles for the Sonar spatial catalog.
//!
//! Provides pre-built [`MockWorld`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) with every domain populated
//! - [`stress_profile`]: 316x316 grid (~100K cells) for stress testing
//!
//! Layouts are deterministic for a given seed.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sonar_core::{
    BoxOrderKind, GridDims, GridError, IndividualOrderKind, NetworkKind, ObjectId, Phase,
};
use sonar_test_utils::MockWorld;

/// Build a reference profile: 100x100 grid (10K cells).
pub fn reference_profile(seed: u64) -> Result<MockWorld, GridError> {
    populated_world(100, 100, seed)
}

/// Build a stress profile: 316x316 grid (~100K cells).
///
/// Same layout rules as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> Result<MockWorld, GridError> {
    populated_world(316, 316, seed)
}

/// Deterministic pseudo-random value for `(seed, i)`.
fn mix(seed: u64, i: u64) -> u64 {
    (i ^ seed)
        .wrapping_mul(6364136223846793007)
        .wrapping_add(1442695040888963407)
        .rotate_right(29)
}

/// Fill a `width x height` world with blocky deposits, tile runs, wires,
/// dig selections, biome bands and a few entities.
///
/// Deposits are laid in 4x4 blocks of one element each, so the grid
/// produces many mid-sized clusters rather than one giant one or
/// thousands of singletons.
pub fn populated_world(width: u32, height: u32, seed: u64) -> Result<MockWorld, GridError> {
    let dims = GridDims::new(width, height)?;
    let mut world = MockWorld::new(dims);
    let elements = [
        world.add_element("Sandstone", Phase::Solid, "Minerals"),
        world.add_element("Copper Ore", Phase::Solid, "Ores"),
        world.add_element("Water", Phase::Liquid, "Water"),
        world.add_element("Oxygen", Phase::Gas, "Breathable"),
    ];
    let tile = world.add_prefab("Tile");
    let wire = world.add_prefab("Wire");
    let ladder = world.add_prefab("Ladder");
    let biomes = [world.add_biome("Sandstone"), world.add_biome("Swamp")];

    let mut block = 0u64;
    for row in (0..height).step_by(4) {
        for col in (0..width).step_by(4) {
            let e = elements[(mix(seed, block) % elements.len() as u64) as usize];
            world.fill_material(row, col, (row + 3).min(height - 1), (col + 3).min(width - 1), e);
            block += 1;
        }
    }
    for row in 0..height {
        world.fill_biome(row, 0, row, width - 1, biomes[(row / 32) as usize % biomes.len()]);
        let Some(cell) = dims.cell(row, mix(seed, u64::from(row)) as u32 % width) else {
            continue;
        };
        match row % 8 {
            0 => world.set_tile(cell, tile),
            1 => world.set_box_order(cell, BoxOrderKind::Dig, Some("Sandstone")),
            2 => world.set_build_order(cell, ObjectId(u64::from(row)), ladder),
            3 => world.add_individual_order(
                cell,
                ObjectId(1_000 + u64::from(row)),
                IndividualOrderKind::Capture,
                "Hatch",
            ),
            4 => {
                world.add_entity("Hatch", "Creatures", "Wild", cell);
            }
            _ => {}
        }
        if row % 5 == 0 {
            for col in 0..width / 2 {
                if let Some(cell) = dims.cell(row, col) {
                    world.set_conduit(cell, NetworkKind::Power, wire);
                }
            }
        }
    }
    Ok(world)
}
