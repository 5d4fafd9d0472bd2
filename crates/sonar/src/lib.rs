//! Sonar: a spatial catalog and navigator for screen-reader access to
//! grid-based games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sonar sub-crates. Hosts implement the world traits from [`types`]
//! and drive a [`nav::Navigator`] from their key bindings.
//!
//! # Quick start
//!
//! ```rust
//! use sonar::prelude::*;
//! use sonar_test_utils::MockWorld;
//!
//! let mut world = MockWorld::new(GridDims::new(10, 3).unwrap());
//! let copper = world.add_element("Copper Ore", Phase::Solid, "Ores");
//! world.fill_material(1, 2, 1, 4, copper);
//! world.set_cursor(world.dims().cell(1, 0).unwrap());
//!
//! let mut nav = Navigator::with_standard_backends(NavigatorConfig::default()).unwrap();
//! assert_eq!(nav.refresh(&world), "Solids");
//! assert_eq!(
//!     nav.announce_current(&world),
//!     "Copper Ore, 3 tiles, 2 right, 1 of 1"
//! );
//!
//! match nav.teleport(&mut world) {
//!     Teleport::Moved { cell, .. } => assert_eq!(cell, world.dims().cell(1, 2).unwrap()),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sonar-core` | Ids, geometry, domain enums, world traits |
//! | [`scan`] | `sonar-scan` | Union-find, grid scanner, clusters |
//! | [`catalog`] | `sonar-catalog` | Entries, taxonomy, snapshots |
//! | [`nav`] | `sonar-nav` | Backends and the navigator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and ids (`sonar-core`).
///
/// Hosts implement [`types::GridQuery`], [`types::EntityQuery`] and
/// [`types::CursorControl`] to expose their world.
pub use sonar_core as types;

/// Grid scanning and clustering (`sonar-scan`).
///
/// [`scan::GridScanner`] turns one region into per-domain clusters.
pub use sonar_scan as scan;

/// Catalog entries, taxonomy and snapshots (`sonar-catalog`).
pub use sonar_catalog as catalog;

/// Backends and the stateful navigator (`sonar-nav`).
///
/// Implement [`nav::Backend`] to contribute custom entries.
pub use sonar_nav as nav;

/// Common imports for typical Sonar usage.
///
/// ```rust
/// use sonar::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sonar_core::{
        Cell, CursorControl, EntityQuery, GridDims, GridQuery, Phase, RegionId, World,
    };

    // Errors
    pub use sonar_core::GridError;
    pub use sonar_nav::{ConfigError, NavError};

    // Catalog
    pub use sonar_catalog::{Entry, Snapshot, Taxonomy};

    // Navigation
    pub use sonar_nav::{
        Backend, Direction, Navigator, NavigatorConfig, ScanContext, Teleport,
    };
}
