//! Taxonomy validation errors.

use std::error::Error;
use std::fmt;

/// A [`Taxonomy`](crate::Taxonomy) table is malformed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A category, subcategory or the "all" label is empty.
    EmptyName,
    /// A category is listed twice.
    DuplicateCategory {
        /// The repeated name.
        name: String,
    },
    /// A subcategory is listed twice within one category.
    DuplicateSubcategory {
        /// Owning category.
        category: String,
        /// The repeated name.
        name: String,
    },
    /// A named subcategory collides with the synthetic "all" label.
    ReservedSubcategory {
        /// Owning category.
        category: String,
        /// The colliding name.
        name: String,
    },
}

impl fmt::Display for TaxonomyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "taxonomy names must not be empty"),
            Self::DuplicateCategory { name } => write!(f, "category '{name}' listed twice"),
            Self::DuplicateSubcategory { category, name } => {
                write!(f, "subcategory '{name}' listed twice in '{category}'")
            }
            Self::ReservedSubcategory { category, name } => {
                write!(f, "subcategory '{name}' in '{category}' collides with the all label")
            }
        }
    }
}

impl Error for TaxonomyError {}
