//! **amaze-core** — core types shared by the amaze crates.
//!
//! This crate provides geometry primitives addressed by `(row, column)`,
//! the [`Cell`] passage/bookkeeping bitflags, the [`Grid`] that stores them,
//! and the [`Error`] type returned by every fallible constructor in the
//! workspace.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use error::Error;
pub use geom::{Direction, Pos, Range};
pub use grid::Grid;
