//! The [`Error`] type shared across amaze crates.

use std::fmt;

use crate::geom::{Pos, Range};

/// Errors returned when constructing grids, generators or searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid dimensions must both be positive.
    InvalidSize { rows: i32, columns: i32 },
    /// A position lies outside the grid it is meant to address.
    OutOfBounds { pos: Pos, range: Range },
    /// Maze generation has not finished; `remaining` frontier cells are
    /// still waiting to be carved.
    Incomplete { remaining: usize },
    /// Stored grid data whose cell buffer does not cover `bounds`, or whose
    /// bounds do not start at the origin.
    Layout { bounds: Range, cells: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { rows, columns } => {
                write!(f, "invalid grid size {rows}x{columns}: both dimensions must be positive")
            }
            Self::OutOfBounds { pos, range } => write!(f, "position {pos} is outside {range}"),
            Self::Incomplete { remaining } => {
                write!(f, "maze is incomplete: {remaining} frontier cells remain")
            }
            Self::Layout { bounds, cells } => {
                write!(f, "grid layout {bounds} does not match {cells} cells")
            }
        }
    }
}

impl std::error::Error for Error {}
