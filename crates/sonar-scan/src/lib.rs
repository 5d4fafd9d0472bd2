//! Grid scanning and clustering for the Sonar spatial catalog.
//!
//! [`GridScanner`] walks every visible cell of a region once, classifies
//! it into the enabled domains (materials, tiles, network layers, orders,
//! biomes) and groups same-key 4-connected cells into [`Cluster`]s using
//! one [`UnionFind`] per domain.
//!
//! # Architecture
//!
//! ```text
//! GridScanner
//! ├── ScannerConfig (enabled domains, ignored elements)
//! └── ScanArena (reset per scan, reused across scans)
//!     ├── DomainLayer × 10 (key array + UnionFind each)
//!     ├── root → cluster slot map (per extraction)
//!     └── object dedupe set (bridges, individual orders)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod cluster;
pub mod config;
pub mod error;
pub mod result;
pub mod scanner;
pub mod union_find;

pub use arena::{DomainLayer, Layer, ScanArena};
pub use cluster::{
    nearest_cell, BiomeCluster, BiomeMeta, BoxOrderCluster, BoxOrderMeta, Bridge,
    BuildOrderCluster, BuildOrderMeta, Cluster, ElementCluster, ElementMeta, IndividualOrder,
    OrderTarget, SegmentCluster, SegmentMeta, TileCluster, TileMeta,
};
pub use config::ScannerConfig;
pub use error::ScanError;
pub use result::ScanResult;
pub use scanner::GridScanner;
pub use union_find::UnionFind;
