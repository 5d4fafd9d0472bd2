//! Core types and traits for the Sonar spatial catalog.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the scanner, the catalog and the navigator:
//! strongly-typed ids, grid geometry, the per-domain classification
//! enums, and the host traits through which the game world is queried.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod geometry;
pub mod id;
pub mod phrase;
pub mod world;

pub use domain::{BoxOrderKind, IndividualOrderKind, NetworkKind, Phase};
pub use error::GridError;
pub use geometry::{Bounds, GridDims};
pub use id::{BiomeId, Cell, ElementId, ObjectId, PrefabId, RegionId};
pub use phrase::{count_phrase, distance_phrase};
pub use world::{
    CursorControl, ElementInfo, EntityInfo, EntityQuery, GridQuery, Material, ObjectRef,
    OrderMark, World,
};
