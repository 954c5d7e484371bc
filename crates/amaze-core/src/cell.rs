//! The [`Cell`] type — passage and bookkeeping bits of one maze cell.

use bitflags::bitflags;

use crate::geom::Direction;

bitflags! {
    /// Flags stored per grid cell.
    ///
    /// The four passage bits record an open passage toward the respective
    /// neighbour. `IN` marks a cell already incorporated into the spanning
    /// tree, `FRONTIER` a cell waiting to be.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Cell: u8 {
        const N = 1 << 0;
        const S = 1 << 1;
        const E = 1 << 2;
        const W = 1 << 3;
        const IN = 1 << 4;
        const FRONTIER = 1 << 5;

        const PASSAGES = Self::N.bits() | Self::S.bits() | Self::E.bits() | Self::W.bits();
    }
}

impl Cell {
    /// Passage bit for `dir`.
    #[inline]
    pub const fn passage(dir: Direction) -> Self {
        match dir {
            Direction::North => Self::N,
            Direction::East => Self::E,
            Direction::South => Self::S,
            Direction::West => Self::W,
        }
    }

    /// Whether there is an open passage toward `dir`.
    #[inline]
    pub const fn is_open(self, dir: Direction) -> bool {
        self.contains(Self::passage(dir))
    }

    /// Directions with an open passage, in [`Direction::ALL`] order.
    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.is_open(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passage_bits_are_distinct() {
        let mut all = Cell::empty();
        for d in Direction::ALL {
            let bit = Cell::passage(d);
            assert!(!all.intersects(bit));
            all |= bit;
        }
        assert_eq!(all, Cell::PASSAGES);
        assert!(!Cell::PASSAGES.intersects(Cell::IN | Cell::FRONTIER));
    }

    #[test]
    fn open_directions_lists_set_bits() {
        let c = Cell::N | Cell::W | Cell::IN;
        let dirs: Vec<_> = c.open_directions().collect();
        assert_eq!(dirs, vec![Direction::North, Direction::West]);
        assert!(c.is_open(Direction::North));
        assert!(!c.is_open(Direction::South));
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Cell::default(), Cell::empty());
    }
}
