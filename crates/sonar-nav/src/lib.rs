//! Backends and the stateful navigator for the Sonar spatial catalog.
//!
//! A refresh runs one [`GridScanner`](sonar_scan::GridScanner) pass,
//! hands the result to every [`Backend`] in turn, and freezes their
//! entries into a [`Snapshot`](sonar_catalog::Snapshot). The
//! [`Navigator`] then walks that snapshot with four cursor indices,
//! validating instances lazily and pruning stale ones.
//!
//! # Architecture
//!
//! ```text
//! Navigator
//! ├── NavigatorConfig (ScannerConfig, Arc<Taxonomy>, announce_position)
//! ├── GridScanner     (owns the ScanArena)
//! ├── Vec<Box<dyn Backend>>
//! │   └── elements, tiles, networks, orders, biomes, entities
//! └── Option<Snapshot> + Position (category, subcategory, item, instance)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backend;
pub mod backends;
pub mod config;
pub mod error;
pub mod navigator;

pub use backend::{cluster_label, revalidate_members, Backend, Members, ScanContext};
pub use backends::{
    BiomeBackend, ElementBackend, EntityBackend, NetworkBackend, OrderBackend, TileBackend,
};
pub use config::NavigatorConfig;
pub use error::{ConfigError, NavError};
pub use navigator::{Direction, Navigator, Position, Teleport, INVALID, NOTHING_FOUND};
