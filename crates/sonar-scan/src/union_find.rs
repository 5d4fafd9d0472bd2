//! Array-based disjoint-set forest over local cell indices.
//!
//! [`UnionFind`] is the hot primitive of the scanner: it is touched
//! once per cell per domain per scan. Storage is two flat vectors that
//! are reinitialised in place by [`reset`](UnionFind::reset), so a
//! region of stable size never reallocates between scans.

/// Disjoint-set forest with union by rank and path-halving `find`.
///
/// Elements are `0..len()`. Inputs are in range by construction (the
/// scanner only passes indices of its own buffers), so there are no
/// error conditions; an out-of-range index is a bug and panics on the
/// slice access.
#[derive(Clone, Debug, Default)]
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create a forest of `size` singleton sets.
    pub fn new(size: usize) -> Self {
        let mut sets = Self::default();
        sets.reset(size);
        sets
    }

    /// Make every element `0..size` its own singleton root. O(size).
    ///
    /// Reuses the existing allocation; it only grows when `size` exceeds
    /// the capacity reached by an earlier scan.
    pub fn reset(&mut self, size: usize) {
        debug_assert!(size <= u32::MAX as usize);
        self.parent.clear();
        self.parent.extend(0..size as u32);
        self.rank.clear();
        self.rank.resize(size, 0);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether the forest has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Allocated capacity in elements.
    pub fn capacity(&self) -> usize {
        self.parent.capacity()
    }

    /// Canonical root of `x`'s set.
    ///
    /// Path halving: every visited node is re-pointed at its grandparent,
    /// which keeps trees shallow without a second pass or recursion.
    pub fn find(&mut self, x: usize) -> usize {
        let mut x = x as u32;
        loop {
            let parent = self.parent[x as usize];
            if parent == x {
                return x as usize;
            }
            let grandparent = self.parent[parent as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already joined.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (high, low) = if self.rank[ra] >= self.rank[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[low] = high as u32;
        if self.rank[high] == self.rank[low] {
            self.rank[high] = self.rank[high].saturating_add(1);
        }
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
