//! Frozen category → subcategory → item → instance hierarchy.
//!
//! Items live in an arena indexed by [`ItemId`]. Subcategories hold ids,
//! so the synthetic "all" subcategory and a named subcategory refer to
//! the very same item: removing an instance through one is visible
//! through the other, and pruning an emptied item removes its id from
//! both.
//!
//! Invariants, restored after every removal:
//! - no item, subcategory or category reachable by index is empty;
//! - the "all" subcategory is first in its category and lists every item
//!   of the category exactly once;
//! - within an item, instances are in ascending distance from the origin
//!   cell captured at build time (ties in insertion order).

use indexmap::IndexMap;
use sonar_core::{Cell, GridDims};

use crate::entry::Entry;
use crate::taxonomy::Taxonomy;

/// Handle to an item in a [`Snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Every instance sharing one (category, subcategory, item) triple.
#[derive(Clone, Debug)]
pub struct Item {
    name: String,
    category: String,
    subcategory: String,
    instances: Vec<Entry>,
}

impl Item {
    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning category.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Owning named subcategory.
    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }

    /// Instances, nearest first.
    pub fn instances(&self) -> &[Entry] {
        &self.instances
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no instances remain.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// A subcategory: an ordered list of item handles.
#[derive(Clone, Debug)]
pub struct Subcategory {
    name: String,
    items: Vec<ItemId>,
    all: bool,
}

impl Subcategory {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item handles, nearest first.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the subcategory lists no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether this is the synthetic all-items subcategory.
    pub fn is_all(&self) -> bool {
        self.all
    }
}

/// A category and its subcategories, "all" first.
#[derive(Clone, Debug)]
pub struct Category {
    name: String,
    subcategories: Vec<Subcategory>,
}

impl Category {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subcategories in display order.
    pub fn subcategories(&self) -> &[Subcategory] {
        &self.subcategories
    }

    /// Index of the subcategory called `name`.
    pub fn subcategory_position(&self, name: &str) -> Option<usize> {
        self.subcategories.iter().position(|s| s.name == name)
    }
}

/// Immutable-shape catalog built from one refresh.
///
/// Only instance removal mutates it; a refresh replaces it wholesale.
///
/// # Examples
///
/// ```
/// use sonar_catalog::{BackendId, Entry, Snapshot, Taxonomy};
/// use sonar_core::{Cell, GridDims};
///
/// let dims = GridDims::new(10, 1).unwrap();
/// let entries = vec![
///     Entry::new(BackendId(0), Cell(9), "Solids", "Ores", "Iron Ore"),
///     Entry::new(BackendId(0), Cell(2), "Solids", "Ores", "Copper Ore"),
/// ];
/// let snapshot = Snapshot::build(entries, &Taxonomy::standard(), dims, Cell(0));
/// let solids = &snapshot.categories()[0];
/// assert_eq!(solids.subcategories()[0].name(), "All");
/// let nearest = solids.subcategories()[1].items()[0];
/// assert_eq!(snapshot.item(nearest).unwrap().name(), "Copper Ore");
/// ```
#[derive(Clone, Debug)]
pub struct Snapshot {
    categories: Vec<Category>,
    items: Vec<Option<Item>>,
    origin: Cell,
    instances: usize,
}

type Grouped = IndexMap<String, IndexMap<String, IndexMap<String, Vec<Entry>>>>;

impl Snapshot {
    /// A snapshot with nothing in it.
    pub fn empty(origin: Cell) -> Self {
        Self {
            categories: Vec::new(),
            items: Vec::new(),
            origin,
            instances: 0,
        }
    }

    /// Group `entries` by (category, subcategory, item) and order them.
    ///
    /// Categories and subcategories follow `taxonomy`. Items and
    /// instances are ordered by grid distance from `origin`; an item
    /// ranks by its nearest instance. Ties keep input order.
    pub fn build(entries: Vec<Entry>, taxonomy: &Taxonomy, dims: GridDims, origin: Cell) -> Self {
        let mut snapshot = Self::empty(origin);
        snapshot.instances = entries.len();

        let mut grouped: Grouped = IndexMap::new();
        for entry in entries {
            grouped
                .entry(entry.category.clone())
                .or_default()
                .entry(entry.subcategory.clone())
                .or_default()
                .entry(entry.item.clone())
                .or_default()
                .push(entry);
        }

        let mut categories: Vec<_> = grouped.into_iter().collect();
        categories.sort_by(|(a, _), (b, _)| taxonomy.cmp_categories(a, b));

        for (category, subs) in categories {
            let mut subs: Vec<_> = subs.into_iter().collect();
            subs.sort_by(|(a, _), (b, _)| taxonomy.cmp_subcategories(&category, a, b));

            let mut all: Vec<(u64, ItemId)> = Vec::new();
            let mut subcategories = Vec::with_capacity(subs.len() + 1);
            for (subcategory, items) in subs {
                let mut ranked: Vec<(u64, ItemId)> = Vec::with_capacity(items.len());
                for (name, mut instances) in items {
                    instances.sort_by_key(|e| dims.distance(origin, e.cell));
                    let nearest = instances
                        .first()
                        .map_or(u64::MAX, |e| dims.distance(origin, e.cell));
                    let id = ItemId(snapshot.items.len());
                    snapshot.items.push(Some(Item {
                        name,
                        category: category.clone(),
                        subcategory: subcategory.clone(),
                        instances,
                    }));
                    ranked.push((nearest, id));
                }
                ranked.sort_by_key(|&(d, _)| d);
                all.extend_from_slice(&ranked);
                subcategories.push(Subcategory {
                    name: subcategory,
                    items: ranked.into_iter().map(|(_, id)| id).collect(),
                    all: false,
                });
            }
            all.sort_by_key(|&(d, _)| d);
            subcategories.insert(
                0,
                Subcategory {
                    name: taxonomy.all_label().to_string(),
                    items: all.into_iter().map(|(_, id)| id).collect(),
                    all: true,
                },
            );
            snapshot.categories.push(Category {
                name: category,
                subcategories,
            });
        }
        snapshot
    }

    /// Cell the ordering was computed from.
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Index of the category called `name`.
    pub fn category_position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// Subcategory `sub` of category `cat`.
    pub fn subcategory(&self, cat: usize, sub: usize) -> Option<&Subcategory> {
        self.categories.get(cat)?.subcategories.get(sub)
    }

    /// A live item; `None` once it has been pruned.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)?.as_ref()
    }

    /// The item at `item` within subcategory `sub` of category `cat`.
    pub fn item_at(&self, cat: usize, sub: usize, item: usize) -> Option<ItemId> {
        self.subcategory(cat, sub)?.items.get(item).copied()
    }

    /// One instance of a live item.
    pub fn instance(&self, id: ItemId, index: usize) -> Option<&Entry> {
        self.item(id)?.instances.get(index)
    }

    /// Mutable access for validation, which may move the entry's cell.
    ///
    /// Classification strings must not be changed through this handle;
    /// grouping is fixed at build time.
    pub fn instance_mut(&mut self, id: ItemId, index: usize) -> Option<&mut Entry> {
        self.items.get_mut(id.0)?.as_mut()?.instances.get_mut(index)
    }

    /// Remove one instance.
    ///
    /// If the item becomes empty it is pruned from every subcategory
    /// listing it, including "all"; subcategories and categories left
    /// empty are removed. Returns the removed entry, or `None` if the
    /// item or index does not exist.
    pub fn remove_instance(&mut self, id: ItemId, index: usize) -> Option<Entry> {
        let item = self.items.get_mut(id.0)?.as_mut()?;
        if index >= item.instances.len() {
            return None;
        }
        let entry = item.instances.remove(index);
        self.instances -= 1;
        if item.instances.is_empty() {
            self.items[id.0] = None;
            self.prune(id);
        }
        Some(entry)
    }

    fn prune(&mut self, id: ItemId) {
        for category in &mut self.categories {
            for sub in &mut category.subcategories {
                sub.items.retain(|&i| i != id);
            }
            category.subcategories.retain(|s| !s.items.is_empty());
        }
        self.categories.retain(|c| !c.subcategories.is_empty());
    }

    /// Live instances across every item.
    pub fn len(&self) -> usize {
        self.instances
    }

    /// Whether the snapshot holds no instances.
    pub fn is_empty(&self) -> bool {
        self.instances == 0
    }

    /// Live items.
    pub fn item_count(&self) -> usize {
        self.items.iter().flatten().count()
    }

    /// Every live instance, in arena order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.items
            .iter()
            .flatten()
            .flat_map(|item| item.instances.iter())
    }
}
