//! Grid dimensions, cell↔(row, col) conversion and bounding rectangles.

use crate::error::GridError;
use crate::id::Cell;

/// Dimensions of the row-major play-field grid.
///
/// Row 0 is the bottom row and rows grow upward, matching the host's
/// world coordinates. Distance is Manhattan (L1), the geodesic of the
/// 4-connected neighbourhood used for clustering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Create grid dimensions of `width * height` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::GridTooLarge)` if the cell count does not fit in
    /// a [`Cell`] index.
    ///
    /// # Examples
    ///
    /// ```
    /// use sonar_core::{Cell, GridDims};
    ///
    /// let dims = GridDims::new(8, 4).unwrap();
    /// assert_eq!(dims.cell_count(), 32);
    /// assert_eq!(dims.cell(1, 2), Some(Cell(10)));
    /// assert_eq!(dims.row_col(Cell(10)), Some((1, 2)));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let cells = u64::from(width) * u64::from(height);
        if cells > u64::from(u32::MAX) {
            return Err(GridError::GridTooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `cell` addresses a cell of this grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.index() < self.cell_count()
    }

    /// The cell at `(row, col)`, or `None` if outside the grid.
    pub fn cell(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(Cell(row * self.width + col))
    }

    /// The `(row, col)` of `cell`, or `None` if outside the grid.
    pub fn row_col(&self, cell: Cell) -> Option<(u32, u32)> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.0 / self.width, cell.0 % self.width))
    }

    /// Signed `(rows, cols)` offset from `from` to `to`.
    ///
    /// Positive rows point up, positive columns point right.
    pub fn offset(&self, from: Cell, to: Cell) -> (i64, i64) {
        let (fr, fc) = self.split(from);
        let (tr, tc) = self.split(to);
        (tr - fr, tc - fc)
    }

    /// Manhattan distance between two cells.
    pub fn distance(&self, a: Cell, b: Cell) -> u64 {
        let (dr, dc) = self.offset(a, b);
        dr.unsigned_abs() + dc.unsigned_abs()
    }

    fn split(&self, cell: Cell) -> (i64, i64) {
        (
            i64::from(cell.0 / self.width),
            i64::from(cell.0 % self.width),
        )
    }
}

/// Inclusive axis-aligned rectangle of grid rows and columns.
///
/// Used as a region's bounding box. The scanner sizes its buffers to
/// [`cell_count`](Self::cell_count) and addresses them through
/// [`local_index`](Self::local_index), so a small region on a large
/// grid only pays for its own rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Lowest row (inclusive).
    pub min_row: u32,
    /// Lowest column (inclusive).
    pub min_col: u32,
    /// Highest row (inclusive).
    pub max_row: u32,
    /// Highest column (inclusive).
    pub max_col: u32,
}

impl Bounds {
    /// Create a rectangle; returns `None` if `min > max` on either axis.
    pub fn new(min_row: u32, min_col: u32, max_row: u32, max_col: u32) -> Option<Self> {
        if min_row > max_row || min_col > max_col {
            return None;
        }
        Some(Self {
            min_row,
            min_col,
            max_row,
            max_col,
        })
    }

    /// The rectangle covering every cell of `dims`.
    pub fn full(dims: GridDims) -> Self {
        Self {
            min_row: 0,
            min_col: 0,
            max_row: dims.height() - 1,
            max_col: dims.width() - 1,
        }
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Whether `(row, col)` lies inside the rectangle.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row >= self.min_row && row <= self.max_row && col >= self.min_col && col <= self.max_col
    }

    /// Whether the rectangle lies entirely inside `dims`.
    pub fn fits(&self, dims: GridDims) -> bool {
        self.max_row < dims.height() && self.max_col < dims.width()
    }

    /// Row-major index of `(row, col)` relative to the rectangle.
    ///
    /// The caller guarantees `contains(row, col)`.
    pub fn local_index(&self, row: u32, col: u32) -> usize {
        (row - self.min_row) as usize * self.width() as usize + (col - self.min_col) as usize
    }

    /// Inverse of [`local_index`](Self::local_index).
    pub fn local_row_col(&self, local: usize) -> (u32, u32) {
        let w = self.width() as usize;
        (
            self.min_row + (local / w) as u32,
            self.min_col + (local % w) as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_empty_dimensions() {
        assert!(matches!(GridDims::new(0, 4), Err(GridError::EmptyGrid)));
        assert!(matches!(GridDims::new(4, 0), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn new_rejects_overflowing_cell_count() {
        assert!(matches!(
            GridDims::new(u32::MAX, 2),
            Err(GridError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn cell_conversion_is_row_major() {
        let dims = GridDims::new(5, 3).unwrap();
        assert_eq!(dims.cell(0, 0), Some(Cell(0)));
        assert_eq!(dims.cell(0, 4), Some(Cell(4)));
        assert_eq!(dims.cell(1, 0), Some(Cell(5)));
        assert_eq!(dims.cell(2, 4), Some(Cell(14)));
        assert_eq!(dims.cell(3, 0), None);
        assert_eq!(dims.cell(0, 5), None);
        assert_eq!(dims.row_col(Cell(15)), None);
    }

    #[test]
    fn offset_points_up_and_right() {
        let dims = GridDims::new(10, 10).unwrap();
        let from = dims.cell(2, 2).unwrap();
        let to = dims.cell(5, 0).unwrap();
        assert_eq!(dims.offset(from, to), (3, -2));
        assert_eq!(dims.distance(from, to), 5);
    }

    #[test]
    fn bounds_local_index_round_trips_corners() {
        let b = Bounds::new(2, 3, 4, 6).unwrap();
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 3);
        assert_eq!(b.cell_count(), 12);
        assert_eq!(b.local_index(2, 3), 0);
        assert_eq!(b.local_index(4, 6), 11);
        assert_eq!(b.local_row_col(5), (3, 4));
    }

    #[test]
    fn bounds_rejects_inverted_rect() {
        assert!(Bounds::new(5, 0, 2, 3).is_none());
        assert!(Bounds::new(0, 5, 2, 3).is_none());
    }

    #[test]
    fn bounds_fits_grid() {
        let dims = GridDims::new(8, 8).unwrap();
        assert!(Bounds::full(dims).fits(dims));
        assert!(!Bounds::new(0, 0, 8, 7).unwrap().fits(dims));
    }

    proptest! {
        #[test]
        fn distance_is_metric(
            w in 1u32..20, h in 1u32..20,
            a in 0u32..400, b in 0u32..400, c in 0u32..400,
        ) {
            let dims = GridDims::new(w, h).unwrap();
            let n = w * h;
            let (a, b, c) = (Cell(a % n), Cell(b % n), Cell(c % n));
            prop_assert_eq!(dims.distance(a, a), 0);
            prop_assert_eq!(dims.distance(a, b), dims.distance(b, a));
            prop_assert!(dims.distance(a, c) <= dims.distance(a, b) + dims.distance(b, c));
        }

        #[test]
        fn local_index_is_bijective(
            r0 in 0u32..10, c0 in 0u32..10, h in 1u32..10, w in 1u32..10,
        ) {
            let b = Bounds::new(r0, c0, r0 + h - 1, c0 + w - 1).unwrap();
            for local in 0..b.cell_count() {
                let (r, c) = b.local_row_col(local);
                prop_assert!(b.contains(r, c));
                prop_assert_eq!(b.local_index(r, c), local);
            }
        }
    }
}
