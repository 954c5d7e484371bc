//! Randomized Prim's maze generation, one carve per step.

use std::collections::VecDeque;

use amaze_core::{Cell, Direction, Error, Grid, Pos};
use amaze_paths::{AstarPather, Pather, WeightedPather};
use rand::{Rng, RngExt};

use crate::config::{FrontierPick, MazeConfig};

/// Incremental perfect-maze generator.
///
/// Starting from one random cell, each [`generate_step`] takes a cell off
/// the frontier (cells adjacent to the maze but not yet part of it), joins
/// it to a random already-incorporated neighbour and adds its own untouched
/// neighbours to the frontier. Every random choice is drawn from the
/// injected `rng`, so a seeded generator is exactly reproducible.
///
/// [`generate_step`]: MazeGenerator::generate_step
pub struct MazeGenerator<R: Rng> {
    rng: R,
    grid: Grid,
    frontier: VecDeque<Pos>,
    config: MazeConfig,
    carved: usize,
}

impl<R: Rng> MazeGenerator<R> {
    /// Create a generator and incorporate a uniformly random start cell.
    pub fn new(config: MazeConfig, mut rng: R) -> Result<Self, Error> {
        let grid = Grid::new(config.rows, config.columns)?;
        let start = Pos::new(
            rng.random_range(0..config.rows),
            rng.random_range(0..config.columns),
        );
        let mut g = Self {
            rng,
            grid,
            frontier: VecDeque::new(),
            config,
            carved: 0,
        };
        g.mark(start);
        log::debug!(
            "maze {}x{} ({} frontier) starting at {start}",
            g.config.rows,
            g.config.columns,
            g.config.pick
        );
        Ok(g)
    }

    /// Carve one passage. Returns `true` once the maze is complete.
    ///
    /// Calling this after completion does nothing and returns `true`.
    pub fn generate_step(&mut self) -> bool {
        let Some(cell) = self.take_frontier() else {
            return true;
        };

        let mut dirs = [Direction::North; 4];
        let mut n = 0;
        for d in Direction::ALL {
            if self.grid.get(cell.step(d)).contains(Cell::IN) {
                dirs[n] = d;
                n += 1;
            }
        }
        // Frontier cells only ever enter the list next to an incorporated cell.
        assert!(n > 0, "frontier cell {cell} has no incorporated neighbour");
        let dir = dirs[self.rng.random_range(0..n)];

        self.grid.remove(cell, Cell::FRONTIER);
        self.grid.carve(cell, dir);
        self.mark(cell);
        self.carved += 1;
        log::trace!("carve {cell} -> {}", cell.step(dir));

        let done = self.frontier.is_empty();
        if done {
            log::debug!("maze complete after {} carves", self.carved);
        }
        done
    }

    /// Drive generation to completion. Returns the total number of carves.
    pub fn run(&mut self) -> usize {
        while !self.generate_step() {}
        self.carved
    }

    /// Whether every cell has been incorporated.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Cells reachable from `p` through currently open passages.
    pub fn neighbors(&self, p: Pos) -> Vec<Pos> {
        self.grid.passages(p).collect()
    }

    /// The grid being carved.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cells awaiting incorporation.
    pub fn frontier(&self) -> impl ExactSizeIterator<Item = Pos> + '_ {
        self.frontier.iter().copied()
    }

    /// Number of passages carved so far.
    #[inline]
    pub fn carved(&self) -> usize {
        self.carved
    }

    /// Consume the generator and return the completed maze.
    pub fn finish(self) -> Result<Grid, Error> {
        if !self.is_done() {
            return Err(Error::Incomplete {
                remaining: self.frontier.len(),
            });
        }
        Ok(self.grid)
    }

    /// Incorporate `p` and queue its untouched neighbours.
    fn mark(&mut self, p: Pos) {
        self.grid.insert(p, Cell::IN);
        for n in p.neighbors_4() {
            if self.grid.contains(n) && !self.grid.get(n).intersects(Cell::IN | Cell::FRONTIER) {
                self.grid.insert(n, Cell::FRONTIER);
                self.frontier.push_back(n);
            }
        }
    }

    fn take_frontier(&mut self) -> Option<Pos> {
        match self.config.pick {
            FrontierPick::Random => {
                if self.frontier.is_empty() {
                    return None;
                }
                let i = self.rng.random_range(0..self.frontier.len());
                self.frontier.swap_remove_back(i)
            }
            FrontierPick::Newest => self.frontier.pop_back(),
            FrontierPick::Oldest => self.frontier.pop_front(),
        }
    }
}

impl<R: Rng> Pather for MazeGenerator<R> {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        self.grid.neighbors(p, buf);
    }
}

impl<R: Rng> WeightedPather for MazeGenerator<R> {
    fn cost(&self, from: Pos, to: Pos) -> f64 {
        self.grid.cost(from, to)
    }
}

impl<R: Rng> AstarPather for MazeGenerator<R> {
    fn estimate(&self, from: Pos, to: Pos) -> f64 {
        self.grid.estimate(from, to)
    }
}
