//! Backend-agnostic navigable instances.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use sonar_core::Cell;

/// Index of a backend in the navigator's backend list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BackendId(pub u16);

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend {}", self.0)
    }
}

impl From<u16> for BackendId {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// One navigable instance.
///
/// Entries sharing `category`, `subcategory` and `item` are instances of
/// the same item and differ only by cell. The payload is opaque to the
/// catalog; only the producing backend downcasts it.
#[derive(Clone)]
pub struct Entry {
    /// Representative cell; validation may move it.
    pub cell: Cell,
    /// Backend that produced the entry and validates it.
    pub backend: BackendId,
    /// Top-level grouping, e.g. "Solids".
    pub category: String,
    /// Second-level grouping, e.g. "Ores".
    pub subcategory: String,
    /// Item name, e.g. "Copper Ore".
    pub item: String,
    payload: Option<Arc<dyn Any + Send + Sync>>,
}

impl Entry {
    /// An entry with no payload.
    pub fn new(
        backend: BackendId,
        cell: Cell,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        Self {
            cell,
            backend,
            category: category.into(),
            subcategory: subcategory.into(),
            item: item.into(),
            payload: None,
        }
    }

    /// Attach backend data.
    pub fn with_payload<T: Any + Send + Sync>(mut self, payload: T) -> Self {
        self.set_payload(payload);
        self
    }

    /// Replace the backend data.
    pub fn set_payload<T: Any + Send + Sync>(&mut self, payload: T) {
        self.payload = Some(Arc::new(payload));
    }

    /// The backend data, if present and of type `T`.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref()
    }

    /// Whether `other` is an instance of the same item.
    pub fn same_item(&self, other: &Entry) -> bool {
        self.category == other.category
            && self.subcategory == other.subcategory
            && self.item == other.item
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("cell", &self.cell)
            .field("backend", &self.backend)
            .field("category", &self.category)
            .field("subcategory", &self.subcategory)
            .field("item", &self.item)
            .field("payload", &self.payload.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_downcasts_to_its_own_type_only() {
        let entry = Entry::new(BackendId(0), Cell(3), "Solids", "Ores", "Copper Ore")
            .with_payload(vec![Cell(3), Cell(4)]);
        assert_eq!(entry.payload::<Vec<Cell>>().map(Vec::len), Some(2));
        assert!(entry.payload::<String>().is_none());
    }

    #[test]
    fn clones_share_the_payload() {
        let a = Entry::new(BackendId(1), Cell(0), "Biomes", "Zones", "Swamp").with_payload(7u32);
        let b = a.clone();
        assert!(a.same_item(&b));
        assert_eq!(b.payload::<u32>(), Some(&7));
    }

    #[test]
    fn missing_payload_is_none() {
        let entry = Entry::new(BackendId(0), Cell(0), "A", "B", "C");
        assert!(entry.payload::<u32>().is_none());
        assert!(format!("{entry:?}").contains("payload: false"));
    }
}
