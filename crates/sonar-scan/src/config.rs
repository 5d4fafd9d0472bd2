//! Scanner configuration.

use sonar_core::{ElementId, NetworkKind};

use crate::error::ScanError;

/// Which domains the scanner classifies.
///
/// Disabled domains are never queried, so their host lookups cost nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Cluster natural materials. Default: true.
    pub elements: bool,
    /// Cluster constructed tiles. Default: true.
    pub tiles: bool,
    /// Network layers to cluster, with their bridges. Default: all kinds.
    pub networks: Vec<NetworkKind>,
    /// Collect box, build and individual orders. Default: true.
    pub orders: bool,
    /// Cluster biome zones. Default: true.
    pub biomes: bool,
    /// Elements never catalogued (e.g. vacuum or ambient air). Default: empty.
    pub ignored_elements: Vec<ElementId>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            elements: true,
            tiles: true,
            networks: NetworkKind::ALL.to_vec(),
            orders: true,
            biomes: true,
            ignored_elements: Vec::new(),
        }
    }
}

impl ScannerConfig {
    /// Check structural invariants.
    ///
    /// Rejects a network kind listed twice, which would scan the same
    /// layer twice and duplicate every segment.
    pub fn validate(&self) -> Result<(), ScanError> {
        for (i, kind) in self.networks.iter().enumerate() {
            if self.networks[..i].contains(kind) {
                return Err(ScanError::InvalidConfig {
                    reason: format!("network kind {kind} listed more than once"),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn is_ignored(&self, element: ElementId) -> bool {
        self.ignored_elements.contains(&element)
    }
}
