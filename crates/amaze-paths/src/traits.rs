use amaze_core::Pos;

/// Something a search can walk over.
pub trait Pather {
    /// Push every cell directly reachable from `p` onto `buf`.
    ///
    /// `buf` arrives empty; implementations only append.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// A [`Pather`] whose moves have a price.
pub trait WeightedPather: Pather {
    /// Price of the single move `from -> to`. Always positive.
    fn cost(&self, from: Pos, to: Pos) -> f64;
}

/// A [`WeightedPather`] that can guess the remaining distance to a target.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cheapest route from `from` to `to`.
    ///
    /// A guess above the real cost can make A* return a longer path.
    fn estimate(&self, from: Pos, to: Pos) -> f64;
}
