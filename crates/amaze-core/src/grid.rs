//! The [`Grid`] type — a fixed-size 2D store of [`Cell`] flags.
//!
//! Reads are total: any position outside the grid, or never written, reads
//! as [`Cell::empty()`]. Writes must stay in bounds.

use crate::cell::Cell;
use crate::error::Error;
use crate::geom::{Direction, Pos, Range};

/// A `rows × columns` grid of [`Cell`] flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be positive.
    pub fn new(rows: i32, columns: i32) -> Result<Self, Error> {
        if rows <= 0 || columns <= 0 {
            return Err(Error::InvalidSize { rows, columns });
        }
        let bounds = Range::with_size(rows, columns);
        Ok(Self {
            cells: vec![Cell::empty(); bounds.len()],
            bounds,
        })
    }

    /// The range `[0, rows) × [0, columns)`.
    #[inline]
    pub fn range(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.bounds.columns()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// Read the cell at `p`. Returns [`Cell::empty()`] outside bounds.
    #[inline]
    pub fn get(&self, p: Pos) -> Cell {
        self.bounds
            .index(p)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Overwrite the cell at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    pub fn set(&mut self, p: Pos, cell: Cell) {
        let i = self.checked_index(p);
        self.cells[i] = cell;
    }

    /// Set `flags` on the cell at `p`, leaving other bits untouched.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    pub fn insert(&mut self, p: Pos, flags: Cell) {
        let i = self.checked_index(p);
        self.cells[i].insert(flags);
    }

    /// Clear `flags` on the cell at `p`, leaving other bits untouched.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside the grid.
    pub fn remove(&mut self, p: Pos, flags: Cell) {
        let i = self.checked_index(p);
        self.cells[i].remove(flags);
    }

    /// Open the passage leading from `from` toward `dir`, together with the
    /// matching passage back from the neighbour.
    ///
    /// # Panics
    ///
    /// Panics if `from` or its neighbour in `dir` is outside the grid.
    pub fn carve(&mut self, from: Pos, dir: Direction) {
        let to = from.step(dir);
        let (fi, ti) = (self.checked_index(from), self.checked_index(to));
        self.cells[fi].insert(Cell::passage(dir));
        self.cells[ti].insert(Cell::passage(dir.opposite()));
    }

    /// Cells reachable from `p` through open passages. Only the passage bits
    /// are consulted.
    pub fn passages(&self, p: Pos) -> impl Iterator<Item = Pos> + '_ {
        let cell = self.get(p);
        cell.open_directions()
            .map(move |d| p.step(d))
            .filter(|n| self.contains(*n))
    }

    /// Number of open passages, counting each connected pair once.
    pub fn passage_count(&self) -> usize {
        // South and east bits cover every pair exactly once.
        self.cells
            .iter()
            .map(|c| c.intersection(Cell::S | Cell::E).bits().count_ones() as usize)
            .sum()
    }

    /// Count how many cells satisfy a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Pos, Cell) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }

    /// Iterate over `(Pos, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Pos, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    fn checked_index(&self, p: Pos) -> usize {
        match self.bounds.index(p) {
            Some(i) => i,
            None => panic!("grid write at {p} outside {}", self.bounds),
        }
    }
}

// Deserialized grids must satisfy the same layout `Grid::new` guarantees,
// otherwise `get` would index past `cells`.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            cells: Vec<Cell>,
            bounds: Range,
        }

        let Raw { cells, bounds } = Raw::deserialize(deserializer)?;
        if bounds.min != Pos::ZERO || bounds.is_empty() || cells.len() != bounds.len() {
            return Err(serde::de::Error::custom(Error::Layout {
                bounds,
                cells: cells.len(),
            }));
        }
        Ok(Self { cells, bounds })
    }
}
