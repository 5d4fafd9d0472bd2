//! Scan-level error types.

use std::error::Error;
use std::fmt;

use sonar_core::{Bounds, RegionId};

/// Errors that abort a whole scan.
///
/// Per-cell lookup failures never surface here; they are logged and the
/// cell is skipped. A `ScanError` means the scan could not run at all and
/// the caller should treat the result as empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    /// The host reports no bounds for the region.
    UnknownRegion {
        /// The requested region.
        region: RegionId,
    },
    /// The region's bounding box extends past the grid.
    RegionOutsideGrid {
        /// The requested region.
        region: RegionId,
        /// Its reported bounds.
        bounds: Bounds,
    },
    /// A [`ScannerConfig`](crate::ScannerConfig) invariant is violated.
    InvalidConfig {
        /// Which invariant.
        reason: String,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRegion { region } => write!(f, "unknown region {region}"),
            Self::RegionOutsideGrid { region, bounds } => {
                write!(f, "region {region} bounds {bounds:?} exceed the grid")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid scanner config: {reason}"),
        }
    }
}

impl Error for ScanError {}
