//! Typed output of one scan.

use indexmap::IndexMap;
use sonar_core::{NetworkKind, RegionId};

use crate::cluster::{
    BiomeCluster, BoxOrderCluster, Bridge, BuildOrderCluster, ElementCluster, IndividualOrder,
    SegmentCluster, TileCluster,
};

/// Every cluster and flat descriptor found in one region.
///
/// Backends take (move out) the lists they consume, so ownership of each
/// cluster passes from the scan to exactly one backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScanResult {
    /// Region that was scanned, `None` for a default-constructed result.
    pub region: Option<RegionId>,
    /// Natural material deposits.
    pub elements: Vec<ElementCluster>,
    /// Constructed tile runs.
    pub tiles: Vec<TileCluster>,
    /// Conduit segments, per enabled network kind in config order.
    pub segments: IndexMap<NetworkKind, Vec<SegmentCluster>>,
    /// Network bridges, one per object.
    pub bridges: Vec<Bridge>,
    /// Box-selected order regions.
    pub box_orders: Vec<BoxOrderCluster>,
    /// Same-prefab construction plan groups.
    pub build_orders: Vec<BuildOrderCluster>,
    /// Orders attached to single objects, one per marker.
    pub individual_orders: Vec<IndividualOrder>,
    /// Biome zones.
    pub biomes: Vec<BiomeCluster>,
    /// Cells skipped because a host lookup failed.
    pub faulted_cells: usize,
}

impl ScanResult {
    /// An empty result for `region`.
    pub fn empty(region: RegionId) -> Self {
        Self {
            region: Some(region),
            ..Self::default()
        }
    }

    /// Total clusters and flat descriptors across every domain.
    pub fn len(&self) -> usize {
        self.elements.len()
            + self.tiles.len()
            + self.segments.values().map(Vec::len).sum::<usize>()
            + self.bridges.len()
            + self.box_orders.len()
            + self.build_orders.len()
            + self.individual_orders.len()
            + self.biomes.len()
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
