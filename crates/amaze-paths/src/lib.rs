//! Incremental pathfinding over maze grids.
//!
//! The centrepiece is [`AstarSearch`], an A* search that advances one node
//! expansion per [`search_step`](AstarSearch::search_step) call so a
//! renderer can show the open set, closed set and best path as they evolve.
//! [`AstarSearch::status`] classifies each cell for display.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge cost |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |
//!
//! [`amaze_core::Grid`] implements all three, walking open passages with
//! Euclidean cost and heuristic.

mod astar;
mod distance;
mod grid;
mod status;
mod traits;

pub use astar::AstarSearch;
pub use distance::{euclidean, manhattan};
pub use status::CellStatus;
pub use traits::{AstarPather, Pather, WeightedPather};
