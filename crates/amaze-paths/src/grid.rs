//! Pather implementations for [`Grid`]: edges are open passages only.

use amaze_core::{Grid, Pos};

use crate::distance::euclidean;
use crate::traits::{AstarPather, Pather, WeightedPather};

impl Pather for Grid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(self.passages(p));
    }
}

impl WeightedPather for Grid {
    fn cost(&self, from: Pos, to: Pos) -> f64 {
        euclidean(from, to)
    }
}

impl AstarPather for Grid {
    fn estimate(&self, from: Pos, to: Pos) -> f64 {
        euclidean(from, to)
    }
}
