//! Maze generation for amaze.
//!
//! [`MazeGenerator`] grows a perfect maze (a spanning tree over the grid) one
//! carved passage at a time, using a randomized variant of Prim's algorithm.
//! Once [`generate_step`](MazeGenerator::generate_step) reports completion,
//! [`finish`](MazeGenerator::finish) hands over the finished [`Grid`] for
//! searching with [`amaze_paths::AstarSearch`].
//!
//! [`Grid`]: amaze_core::Grid

pub mod config;
pub mod prim;

pub use config::{FrontierPick, MazeConfig};
pub use prim::MazeGenerator;
