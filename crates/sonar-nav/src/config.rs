//! Navigator configuration.

use std::sync::Arc;

use sonar_catalog::{Taxonomy, TaxonomyBuilder};
use sonar_scan::ScannerConfig;

use crate::error::ConfigError;

/// Everything a [`Navigator`](crate::Navigator) is built from, apart from
/// its backends.
#[derive(Clone, Debug)]
pub struct NavigatorConfig {
    /// Which domains the grid scan covers.
    pub scanner: ScannerConfig,
    /// Category and subcategory order. Shared, never mutated.
    pub taxonomy: Arc<Taxonomy>,
    /// Append `"<i> of <n>"` to item and instance announcements.
    /// Default: true.
    pub announce_position: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            scanner: ScannerConfig::default(),
            taxonomy: Arc::new(Taxonomy::standard()),
            announce_position: true,
        }
    }
}

impl NavigatorConfig {
    /// Replace the taxonomy with one built from `builder`.
    pub fn with_taxonomy(mut self, builder: TaxonomyBuilder) -> Result<Self, ConfigError> {
        self.taxonomy = Arc::new(builder.build()?);
        Ok(self)
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scanner.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonar_core::NetworkKind;

    #[test]
    fn default_is_valid() {
        assert!(NavigatorConfig::default().validate().is_ok());
    }

    #[test]
    fn scanner_errors_propagate() {
        let config = NavigatorConfig {
            scanner: ScannerConfig {
                networks: vec![NetworkKind::Gas, NetworkKind::Gas],
                ..ScannerConfig::default()
            },
            ..NavigatorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Scanner(_))));
    }

    #[test]
    fn bad_taxonomy_is_rejected() {
        let result = NavigatorConfig::default()
            .with_taxonomy(Taxonomy::builder().category("A", ["x", "x"]));
        assert!(matches!(result, Err(ConfigError::Taxonomy(_))));
    }
}
