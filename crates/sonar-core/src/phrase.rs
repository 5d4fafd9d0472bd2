//! Pure formatters for spoken positions and counts.

use crate::geometry::GridDims;
use crate::id::Cell;

/// Describe where `to` lies relative to `from`, vertical part first.
///
/// # Examples
///
/// ```
/// use sonar_core::{distance_phrase, GridDims};
///
/// let dims = GridDims::new(20, 20).unwrap();
/// let from = dims.cell(5, 10).unwrap();
/// assert_eq!(distance_phrase(dims, from, dims.cell(8, 4).unwrap()), "3 up, 6 left");
/// assert_eq!(distance_phrase(dims, from, dims.cell(1, 10).unwrap()), "4 down");
/// assert_eq!(distance_phrase(dims, from, from), "here");
/// ```
pub fn distance_phrase(dims: GridDims, from: Cell, to: Cell) -> String {
    let (rows, cols) = dims.offset(from, to);
    let vertical = match rows {
        0 => None,
        r if r > 0 => Some(format!("{r} up")),
        r => Some(format!("{} down", r.unsigned_abs())),
    };
    let horizontal = match cols {
        0 => None,
        c if c > 0 => Some(format!("{c} right")),
        c => Some(format!("{} left", c.unsigned_abs())),
    };
    match (vertical, horizontal) {
        (Some(v), Some(h)) => format!("{v}, {h}"),
        (Some(v), None) => v,
        (None, Some(h)) => h,
        (None, None) => "here".to_string(),
    }
}

/// `"1 tile"`, `"3 tiles"`.
pub fn count_phrase(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims() -> GridDims {
        GridDims::new(16, 16).unwrap()
    }

    #[test]
    fn horizontal_only() {
        let d = dims();
        let from = d.cell(4, 4).unwrap();
        assert_eq!(distance_phrase(d, from, d.cell(4, 9).unwrap()), "5 right");
        assert_eq!(distance_phrase(d, from, d.cell(4, 0).unwrap()), "4 left");
    }

    #[test]
    fn combined_puts_vertical_first() {
        let d = dims();
        let from = d.cell(4, 4).unwrap();
        assert_eq!(distance_phrase(d, from, d.cell(0, 5).unwrap()), "4 down, 1 right");
    }

    #[test]
    fn count_phrase_pluralises() {
        assert_eq!(count_phrase(0, "tile"), "0 tiles");
        assert_eq!(count_phrase(1, "tile"), "1 tile");
        assert_eq!(count_phrase(12, "building"), "12 buildings");
    }
}
