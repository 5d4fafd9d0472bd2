//! Catalog types for the Sonar spatial catalog.
//!
//! Backends turn scan output into flat [`Entry`] lists. [`Snapshot::build`]
//! freezes such a list into the four-level hierarchy the navigator walks:
//!
//! ```text
//! Snapshot
//! └── Category           (Taxonomy order, unknown names alphabetical)
//!     ├── "All"          (every item of the category, by ItemId)
//!     └── Subcategory    (Taxonomy order)
//!         └── ItemId ──► Item (arena)
//!                         └── Entry × n   (nearest to the origin first)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod entry;
pub mod error;
pub mod snapshot;
pub mod taxonomy;

pub use entry::{BackendId, Entry};
pub use error::TaxonomyError;
pub use snapshot::{Category, Item, ItemId, Snapshot, Subcategory};
pub use taxonomy::{Taxonomy, TaxonomyBuilder, DEFAULT_ALL_LABEL};
