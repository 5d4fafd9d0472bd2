//! Per-domain scan buffers, reused across scans.
//!
//! [`ScanArena`] owns one [`DomainLayer`] (key array + union-find) per
//! clustered domain, plus the small maps the extraction pass needs. It is
//! reset at the start of every scan; the backing allocations are kept, so
//! scanning a region of unchanged size does not touch the allocator for
//! the per-cell buffers.

use std::collections::{HashMap, HashSet};

use sonar_core::{Bounds, Cell, GridDims, IndividualOrderKind, NetworkKind, ObjectId};

use crate::cluster::Cluster;
use crate::union_find::UnionFind;

/// Key value meaning "this cell is not in the domain".
pub const ABSENT: u64 = 0;

/// One independently clustered classification axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Natural materials, keyed by element.
    Element,
    /// Constructed tiles, keyed by prefab.
    Tile,
    /// Conduits of one network, keyed by prefab.
    Network(NetworkKind),
    /// Box-selected orders, keyed by order kind.
    BoxOrder,
    /// Construction plans, keyed by prefab.
    BuildOrder,
    /// Biome zones, keyed by biome.
    Biome,
}

impl Layer {
    /// Number of layers.
    pub const COUNT: usize = 5 + NetworkKind::COUNT;

    /// Dense index of this layer.
    pub fn index(self) -> usize {
        match self {
            Self::Element => 0,
            Self::Tile => 1,
            Self::Network(kind) => 2 + kind.index(),
            Self::BoxOrder => 2 + NetworkKind::COUNT,
            Self::BuildOrder => 3 + NetworkKind::COUNT,
            Self::Biome => 4 + NetworkKind::COUNT,
        }
    }

    /// Whether cells of this layer carry an object identity.
    fn tracks_objects(self) -> bool {
        matches!(self, Self::BuildOrder)
    }

    fn all() -> impl Iterator<Item = Layer> {
        [Self::Element, Self::Tile]
            .into_iter()
            .chain(NetworkKind::ALL.into_iter().map(Self::Network))
            .chain([Self::BoxOrder, Self::BuildOrder, Self::Biome])
    }
}

/// Key array and disjoint-set forest for one domain.
///
/// Indices are local to the scanned region's bounding rectangle.
#[derive(Debug, Default)]
pub struct DomainLayer {
    keys: Vec<u64>,
    sets: UnionFind,
    objects: Vec<Option<ObjectId>>,
    tracks_objects: bool,
}

impl DomainLayer {
    fn new(tracks_objects: bool) -> Self {
        Self {
            tracks_objects,
            ..Self::default()
        }
    }

    fn reset(&mut self, size: usize) {
        self.keys.clear();
        self.keys.resize(size, ABSENT);
        self.sets.reset(size);
        if self.tracks_objects {
            self.objects.clear();
            self.objects.resize(size, None);
        }
    }

    /// Key of local cell `local`, [`ABSENT`] if not in the domain.
    pub fn key(&self, local: usize) -> u64 {
        self.keys[local]
    }

    /// Number of cells carrying a key.
    pub fn occupied(&self) -> usize {
        self.keys.iter().filter(|&&k| k != ABSENT).count()
    }

    /// Record `key` for `local` and join it with already-visited
    /// neighbours holding an identical key.
    ///
    /// `key` must not be [`ABSENT`].
    pub(crate) fn assign(&mut self, local: usize, key: u64, neighbours: [Option<usize>; 2]) {
        debug_assert_ne!(key, ABSENT);
        self.keys[local] = key;
        for n in neighbours.into_iter().flatten() {
            if self.keys[n] == key {
                self.sets.union(local, n);
            }
        }
    }

    /// Attach an object identity to `local`. Ignored by layers that do
    /// not track objects.
    pub(crate) fn set_object(&mut self, local: usize, object: ObjectId) {
        if self.tracks_objects {
            self.objects[local] = Some(object);
        }
    }

    fn memory_bytes(&self) -> usize {
        self.keys.capacity() * std::mem::size_of::<u64>()
            + self.sets.capacity() * (std::mem::size_of::<u32>() + 1)
            + self.objects.capacity() * std::mem::size_of::<Option<ObjectId>>()
    }
}

/// Reusable buffers for [`GridScanner`](crate::GridScanner).
///
/// Owned exclusively by the scanner and never aliased outside it.
#[derive(Debug)]
pub struct ScanArena {
    layers: Vec<DomainLayer>,
    roots: HashMap<usize, Option<usize>>,
    bridges_seen: HashSet<ObjectId>,
    orders_seen: HashSet<(ObjectId, IndividualOrderKind)>,
    size: usize,
}

impl ScanArena {
    /// Create an arena with no cells allocated.
    pub fn new() -> Self {
        Self {
            layers: Layer::all()
                .map(|layer| DomainLayer::new(layer.tracks_objects()))
                .collect(),
            roots: HashMap::new(),
            bridges_seen: HashSet::new(),
            orders_seen: HashSet::new(),
            size: 0,
        }
    }

    /// Prepare every layer for a region of `size` cells.
    pub fn reset(&mut self, size: usize) {
        for layer in &mut self.layers {
            layer.reset(size);
        }
        self.roots.clear();
        self.bridges_seen.clear();
        self.orders_seen.clear();
        self.size = size;
    }

    /// Number of cells the layers are currently sized for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Read access to one layer.
    pub fn layer(&self, layer: Layer) -> &DomainLayer {
        &self.layers[layer.index()]
    }

    pub(crate) fn layer_mut(&mut self, layer: Layer) -> &mut DomainLayer {
        &mut self.layers[layer.index()]
    }

    /// Record bridge `object` as seen this scan. Returns `false` if it
    /// already was.
    pub(crate) fn first_bridge(&mut self, object: ObjectId) -> bool {
        self.bridges_seen.insert(object)
    }

    /// Record a `kind` order on `object` as seen this scan. One object may
    /// carry several orders of different kinds.
    pub(crate) fn first_order(&mut self, object: ObjectId, kind: IndividualOrderKind) -> bool {
        self.orders_seen.insert((object, kind))
    }

    /// Memory held by the per-cell buffers, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.layers.iter().map(DomainLayer::memory_bytes).sum()
    }

    /// Materialise each connected component of `layer` into a cluster.
    ///
    /// Walks the layer once in row-major order. `make_meta` runs once per
    /// newly discovered root with the component's key and first cell; a
    /// `None` drops the whole component. `on_member` runs for every member
    /// with its object identity (if the layer tracks objects).
    pub(crate) fn extract<M>(
        &mut self,
        layer: Layer,
        bounds: &Bounds,
        dims: GridDims,
        mut make_meta: impl FnMut(u64, Cell) -> Option<M>,
        mut on_member: impl FnMut(&mut M, Option<ObjectId>),
    ) -> Vec<Cluster<M>> {
        let Self { layers, roots, .. } = self;
        let layer = &mut layers[layer.index()];
        roots.clear();
        let mut clusters: Vec<Cluster<M>> = Vec::new();
        for local in 0..layer.keys.len() {
            let key = layer.keys[local];
            if key == ABSENT {
                continue;
            }
            let (row, col) = bounds.local_row_col(local);
            let Some(cell) = dims.cell(row, col) else {
                continue;
            };
            let root = layer.sets.find(local);
            let slot = *roots.entry(root).or_insert_with(|| {
                make_meta(key, cell).map(|meta| {
                    clusters.push(Cluster::new(meta));
                    clusters.len() - 1
                })
            });
            let Some(slot) = slot else {
                continue;
            };
            let cluster = &mut clusters[slot];
            let object = layer.objects.get(local).copied().flatten();
            on_member(&mut cluster.meta, object);
            cluster.cells.push(cell);
        }
        clusters
    }
}

impl Default for ScanArena {
    fn default() -> Self {
        Self::new()
    }
}
