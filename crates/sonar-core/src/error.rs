//! Error type for host grid queries.

use std::error::Error;
use std::fmt;

use crate::id::{Cell, RegionId};

/// Errors arising from grid construction or a host lookup.
///
/// A `GridError` returned by a per-cell lookup is a per-cell fault: the
/// scanner logs it, skips the cell and carries on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// `width * height` does not fit in a cell index.
    GridTooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A cell index outside the grid was passed to a lookup.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// The host failed to answer a lookup for one cell.
    Lookup {
        /// The cell being classified.
        cell: Cell,
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The host failed to enumerate live objects of a region.
    Entities {
        /// The region being queried.
        region: RegionId,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::GridTooLarge { width, height } => {
                write!(f, "grid {width}x{height} exceeds the cell index range")
            }
            Self::CellOutOfBounds { cell, cell_count } => {
                write!(f, "cell {cell} out of bounds: grid has {cell_count} cells")
            }
            Self::Lookup { cell, reason } => {
                write!(f, "lookup failed at cell {cell}: {reason}")
            }
            Self::Entities { region, reason } => {
                write!(f, "entity query failed in region {region}: {reason}")
            }
        }
    }
}

impl Error for GridError {}
