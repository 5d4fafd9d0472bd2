//! Curated category and subcategory order.
//!
//! A [`Taxonomy`] is built once, validated, and shared by reference. It
//! never changes while a navigator is running; snapshots only read it to
//! order what they contain.

use std::cmp::Ordering;

use indexmap::{IndexMap, IndexSet};

use crate::error::TaxonomyError;

/// Label of the synthetic subcategory listing every item of a category.
pub const DEFAULT_ALL_LABEL: &str = "All";

const STANDARD: &[(&str, &[&str])] = &[
    (
        "Solids",
        &["Ores", "Metals", "Minerals", "Organics", "Filtration", "Consumables", "Other"],
    ),
    ("Liquids", &["Water", "Fuels", "Metals", "Other"]),
    ("Gases", &["Breathable", "Unbreathable", "Fuels", "Other"]),
    (
        "Buildings",
        &[
            "Tiles", "Base", "Oxygen", "Power", "Food", "Plumbing", "Ventilation",
            "Refinement", "Medicine", "Furniture", "Stations", "Utilities", "Automation",
            "Shipping", "Rocketry",
        ],
    ),
    (
        "Networks",
        &["Power", "Liquid Pipes", "Gas Pipes", "Conveyor Rails", "Automation"],
    ),
    (
        "Orders",
        &[
            "Dig", "Mop", "Sweep", "Harvest", "Disinfect", "Deconstruct", "Build", "Attack",
            "Capture", "Uproot", "Empty Pipe",
        ],
    ),
    ("Duplicants", &["Colony", "Visitors"]),
    ("Creatures", &["Tame", "Wild", "Eggs"]),
    ("Plants", &["Farmed", "Wild", "Seeds"]),
    ("Items", &["Food", "Resources", "Equipment", "Other"]),
    ("Biomes", &["Zones"]),
];

/// Ordered category → subcategory table.
///
/// Categories and subcategories listed here keep the listed order.
/// Anything a backend produces that is not listed sorts after the known
/// names, alphabetically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Taxonomy {
    all_label: String,
    categories: IndexMap<String, IndexSet<String>>,
}

impl Taxonomy {
    /// Start an empty table.
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::default()
    }

    /// The built-in table for the standard backends.
    pub fn standard() -> Self {
        Self {
            all_label: DEFAULT_ALL_LABEL.to_string(),
            categories: STANDARD
                .iter()
                .map(|(name, subs)| {
                    (
                        name.to_string(),
                        subs.iter().map(|s| s.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Label of the synthetic all-items subcategory.
    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    /// Known categories in curated order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Known subcategories of `category` in curated order.
    pub fn subcategories(&self, category: &str) -> impl Iterator<Item = &str> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|subs| subs.iter().map(String::as_str))
    }

    /// Curated position of `category`, `None` if unlisted.
    pub fn category_rank(&self, category: &str) -> Option<usize> {
        self.categories.get_index_of(category)
    }

    /// Curated position of `subcategory` within `category`, `None` if unlisted.
    pub fn subcategory_rank(&self, category: &str, subcategory: &str) -> Option<usize> {
        self.categories.get(category)?.get_index_of(subcategory)
    }

    /// Display order of two categories.
    pub fn cmp_categories(&self, a: &str, b: &str) -> Ordering {
        ranked(self.category_rank(a), self.category_rank(b), a, b)
    }

    /// Display order of two subcategories of `category`.
    pub fn cmp_subcategories(&self, category: &str, a: &str, b: &str) -> Ordering {
        ranked(
            self.subcategory_rank(category, a),
            self.subcategory_rank(category, b),
            a,
            b,
        )
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::standard()
    }
}

fn ranked(ra: Option<usize>, rb: Option<usize>, a: &str, b: &str) -> Ordering {
    match (ra, rb) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Builder for a custom [`Taxonomy`].
///
/// # Examples
///
/// ```
/// use sonar_catalog::Taxonomy;
///
/// let taxonomy = Taxonomy::builder()
///     .category("Solids", ["Ores", "Metals"])
///     .category("Biomes", ["Zones"])
///     .build()
///     .unwrap();
/// assert_eq!(taxonomy.category_rank("Biomes"), Some(1));
/// assert_eq!(taxonomy.all_label(), "All");
/// ```
#[derive(Clone, Debug)]
pub struct TaxonomyBuilder {
    all_label: String,
    categories: Vec<(String, Vec<String>)>,
}

impl Default for TaxonomyBuilder {
    fn default() -> Self {
        Self {
            all_label: DEFAULT_ALL_LABEL.to_string(),
            categories: Vec::new(),
        }
    }
}

impl TaxonomyBuilder {
    /// Override the synthetic subcategory label.
    pub fn all_label(mut self, label: impl Into<String>) -> Self {
        self.all_label = label.into();
        self
    }

    /// Append a category and its subcategories, in display order.
    pub fn category<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        subcategories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories.push((
            name.into(),
            subcategories.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Validate and freeze the table.
    pub fn build(self) -> Result<Taxonomy, TaxonomyError> {
        if self.all_label.is_empty() {
            return Err(TaxonomyError::EmptyName);
        }
        let mut categories = IndexMap::with_capacity(self.categories.len());
        for (name, subs) in self.categories {
            if name.is_empty() {
                return Err(TaxonomyError::EmptyName);
            }
            if categories.contains_key(&name) {
                return Err(TaxonomyError::DuplicateCategory { name });
            }
            let mut set = IndexSet::with_capacity(subs.len());
            for sub in subs {
                if sub.is_empty() {
                    return Err(TaxonomyError::EmptyName);
                }
                if sub == self.all_label {
                    return Err(TaxonomyError::ReservedSubcategory {
                        category: name,
                        name: sub,
                    });
                }
                if !set.insert(sub.clone()) {
                    return Err(TaxonomyError::DuplicateSubcategory {
                        category: name,
                        name: sub,
                    });
                }
            }
            categories.insert(name, set);
        }
        Ok(Taxonomy {
            all_label: self.all_label,
            categories,
        })
    }
}
