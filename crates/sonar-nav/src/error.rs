//! Navigator error types.

use std::error::Error;
use std::fmt;

use sonar_catalog::TaxonomyError;
use sonar_core::GridError;
use sonar_scan::ScanError;

// ── NavError ───────────────────────────────────────────────────────

/// A refresh could not complete.
///
/// Never surfaced to the user as anything but an empty catalog: the
/// navigator logs it and reports "nothing found".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavError {
    /// The grid scan could not run.
    Scan(ScanError),
    /// A live host query failed.
    Grid(GridError),
    /// A backend failed for its own reasons.
    Backend {
        /// [`Backend::name`](crate::Backend::name) of the failing backend.
        name: String,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan(e) => write!(f, "scan: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Backend { name, reason } => write!(f, "backend '{name}': {reason}"),
        }
    }
}

impl Error for NavError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Scan(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Backend { .. } => None,
        }
    }
}

impl From<ScanError> for NavError {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

impl From<GridError> for NavError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while constructing a [`Navigator`](crate::Navigator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Scanner configuration is invalid.
    Scanner(ScanError),
    /// Taxonomy table is invalid.
    Taxonomy(TaxonomyError),
    /// No backends were supplied.
    NoBackends,
    /// More backends than a [`BackendId`](sonar_catalog::BackendId) can address.
    TooManyBackends {
        /// Number supplied.
        count: usize,
    },
    /// Two backends report the same name.
    DuplicateBackend {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scanner(e) => write!(f, "scanner: {e}"),
            Self::Taxonomy(e) => write!(f, "taxonomy: {e}"),
            Self::NoBackends => write!(f, "at least one backend is required"),
            Self::TooManyBackends { count } => {
                write!(f, "{count} backends exceed the backend id range")
            }
            Self::DuplicateBackend { name } => write!(f, "backend '{name}' registered twice"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Scanner(e) => Some(e),
            Self::Taxonomy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ScanError> for ConfigError {
    fn from(e: ScanError) -> Self {
        Self::Scanner(e)
    }
}

impl From<TaxonomyError> for ConfigError {
    fn from(e: TaxonomyError) -> Self {
        Self::Taxonomy(e)
    }
}
