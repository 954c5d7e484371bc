//! Step-wise A* search.

use amaze_core::{Error, Grid, Pos, Range};

use crate::status::CellStatus;
use crate::traits::AstarPather;

/// Per-cell search record.
#[derive(Clone, Default)]
struct Node {
    g: f64,
    f: f64,
    parent: Option<usize>,
    seen: bool,
    open: bool,
    closed: bool,
    on_path: bool,
}

/// An A* search that advances one node expansion per
/// [`search_step`](AstarSearch::search_step).
///
/// All intermediate state (open and closed sets, scores, the current node
/// and the path leading to it) can be inspected between steps. Reaching the
/// goal and exhausting the open set are both normal terminal states; use
/// [`found`](AstarSearch::found) to tell them apart.
pub struct AstarSearch<'a, P: AstarPather> {
    pather: &'a P,
    bounds: Range,
    start: Pos,
    goal: Pos,
    nodes: Vec<Node>,
    // Insertion order; lowest-f ties go to the earliest entry.
    open: Vec<usize>,
    closed: Vec<usize>,
    current: Option<Pos>,
    path: Vec<Pos>,
    done: bool,
    expanded: usize,
    nbuf: Vec<Pos>,
}

impl<'a> AstarSearch<'a, Grid> {
    /// Search over the open passages of `grid`.
    pub fn on_grid(grid: &'a Grid, start: Pos, goal: Pos) -> Result<Self, Error> {
        Self::new(grid, grid.range(), start, goal)
    }
}

impl<'a, P: AstarPather> AstarSearch<'a, P> {
    /// Prepare a search from `start` to `goal` within `bounds`.
    ///
    /// Neighbours reported by `pather` outside `bounds` are ignored.
    pub fn new(pather: &'a P, bounds: Range, start: Pos, goal: Pos) -> Result<Self, Error> {
        if !bounds.contains(goal) {
            return Err(Error::OutOfBounds { pos: goal, range: bounds });
        }
        let Some(si) = bounds.index(start) else {
            return Err(Error::OutOfBounds { pos: start, range: bounds });
        };
        let mut nodes = vec![Node::default(); bounds.len()];
        nodes[si] = Node {
            g: 0.0,
            f: pather.estimate(start, goal),
            seen: true,
            open: true,
            ..Node::default()
        };
        log::debug!("A* search {start} -> {goal} over {bounds}");
        Ok(Self {
            pather,
            bounds,
            start,
            goal,
            nodes,
            open: vec![si],
            closed: Vec::new(),
            current: None,
            path: Vec::new(),
            done: false,
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        })
    }

    /// Advance the search by one node expansion.
    ///
    /// Does nothing once the search is done.
    pub fn search_step(&mut self) {
        if self.done {
            return;
        }
        if self.open.is_empty() {
            self.done = true;
            log::debug!("A* open set exhausted; {} unreachable", self.goal);
            return;
        }

        let slot = self.lowest_f_slot();
        let ci = self.open[slot];
        let cp = self.bounds.pos(ci);
        self.current = Some(cp);
        self.expanded += 1;
        self.rebuild_path(ci);
        log::trace!("A* expand {cp} f={:.3}", self.nodes[ci].f);

        if cp == self.goal {
            self.done = true;
            log::debug!(
                "A* reached {} after {} expansions, path length {}",
                self.goal,
                self.expanded,
                self.path.len()
            );
            return;
        }

        self.open.remove(slot);
        self.nodes[ci].open = false;
        self.nodes[ci].closed = true;
        self.closed.push(ci);
        let current_g = self.nodes[ci].g;

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = self.bounds.index(np) else {
                continue;
            };
            if self.nodes[ni].closed {
                continue;
            }
            let tentative_g = current_g + self.pather.cost(cp, np);
            let was_open = self.nodes[ni].open;
            if was_open && tentative_g >= self.nodes[ni].g {
                continue;
            }
            let n = &mut self.nodes[ni];
            n.parent = Some(ci);
            n.g = tentative_g;
            n.f = tentative_g + self.pather.estimate(np, self.goal);
            n.seen = true;
            if !was_open {
                n.open = true;
                self.open.push(ni);
            }
        }

        self.nbuf = nbuf;
    }

    /// Drive the search to completion. Returns the path on success.
    pub fn run(&mut self) -> Option<Vec<Pos>> {
        while !self.done {
            self.search_step();
        }
        self.found().then(|| self.path.clone())
    }

    /// Whether the search has reached a terminal state.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Whether the search finished by reaching the goal.
    #[inline]
    pub fn found(&self) -> bool {
        self.done && self.current == Some(self.goal)
    }

    /// The search origin.
    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    /// The search target.
    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// The node most recently expanded, if any step has run.
    #[inline]
    pub fn current(&self) -> Option<Pos> {
        self.current
    }

    /// Path from the start to the current node (both inclusive).
    ///
    /// Once [`found`](AstarSearch::found) is true this is the final path.
    #[inline]
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// Number of nodes selected for expansion so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Cells queued for evaluation, in insertion order.
    pub fn open_set(&self) -> impl ExactSizeIterator<Item = Pos> + '_ {
        self.open.iter().map(|&i| self.bounds.pos(i))
    }

    /// Cells fully evaluated, in expansion order.
    pub fn closed_set(&self) -> impl ExactSizeIterator<Item = Pos> + '_ {
        self.closed.iter().map(|&i| self.bounds.pos(i))
    }

    /// Whether `p` is in the open set.
    pub fn is_open(&self, p: Pos) -> bool {
        self.node(p).is_some_and(|n| n.open)
    }

    /// Whether `p` is in the closed set.
    pub fn is_closed(&self, p: Pos) -> bool {
        self.node(p).is_some_and(|n| n.closed)
    }

    /// Best known cost from the start to `p`, if `p` has been reached.
    pub fn g_score(&self, p: Pos) -> Option<f64> {
        self.node(p).filter(|n| n.seen).map(|n| n.g)
    }

    /// `g_score` plus the heuristic estimate to the goal, if `p` has been
    /// reached.
    pub fn f_score(&self, p: Pos) -> Option<f64> {
        self.node(p).filter(|n| n.seen).map(|n| n.f)
    }

    /// The predecessor recorded for `p`.
    pub fn came_from(&self, p: Pos) -> Option<Pos> {
        self.node(p)
            .and_then(|n| n.parent)
            .map(|i| self.bounds.pos(i))
    }

    /// Classify `p` for display.
    pub fn status(&self, p: Pos) -> CellStatus {
        if self.current == Some(p) {
            return CellStatus::Current;
        }
        if p == self.start {
            return CellStatus::Start;
        }
        if p == self.goal {
            return CellStatus::Goal;
        }
        match self.node(p) {
            Some(n) if n.on_path => CellStatus::Path,
            Some(n) if n.open => CellStatus::Open,
            Some(n) if n.closed => CellStatus::Closed,
            _ => CellStatus::None,
        }
    }

    fn node(&self, p: Pos) -> Option<&Node> {
        self.bounds.index(p).map(|i| &self.nodes[i])
    }

    fn lowest_f_slot(&self) -> usize {
        let mut best = 0;
        for (slot, &i) in self.open.iter().enumerate().skip(1) {
            if self.nodes[i].f < self.nodes[self.open[best]].f {
                best = slot;
            }
        }
        best
    }

    fn rebuild_path(&mut self, from: usize) {
        for p in self.path.drain(..) {
            if let Some(i) = self.bounds.index(p) {
                self.nodes[i].on_path = false;
            }
        }
        let mut ci = Some(from);
        while let Some(i) = ci {
            self.nodes[i].on_path = true;
            self.path.push(self.bounds.pos(i));
            ci = self.nodes[i].parent;
        }
        self.path.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::manhattan;
    use crate::traits::{Pather, WeightedPather};
    use amaze_core::Direction;
    use proptest::prelude::*;

    /// A perfect maze: row 0 is one long corridor, every column hangs off it.
    fn comb(rows: i32, columns: i32) -> Grid {
        let mut g = Grid::new(rows, columns).unwrap();
        for c in 0..columns - 1 {
            g.carve(Pos::new(0, c), Direction::East);
        }
        for c in 0..columns {
            for r in 0..rows - 1 {
                g.carve(Pos::new(r, c), Direction::South);
            }
        }
        g
    }

    fn comb_distance(a: Pos, b: Pos) -> usize {
        if a.col == b.col {
            (a.row - b.row).unsigned_abs() as usize
        } else {
            (a.row + b.row + (a.col - b.col).abs()) as usize
        }
    }

    fn snapshot<P: AstarPather>(s: &AstarSearch<'_, P>) -> (Vec<Pos>, Vec<Pos>, Vec<Pos>, Option<Pos>) {
        (
            s.open_set().collect(),
            s.closed_set().collect(),
            s.path().to_vec(),
            s.current(),
        )
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let g = comb(2, 2);
        let err = AstarSearch::on_grid(&g, Pos::new(0, 0), Pos::new(2, 0)).err();
        assert_eq!(
            err,
            Some(Error::OutOfBounds {
                pos: Pos::new(2, 0),
                range: g.range()
            })
        );
        assert!(AstarSearch::on_grid(&g, Pos::new(-1, 0), Pos::new(1, 1)).is_err());
    }

    #[test]
    fn initial_state() {
        let g = comb(3, 3);
        let s = AstarSearch::on_grid(&g, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        assert!(!s.is_done());
        assert_eq!(s.current(), None);
        assert_eq!(s.open_set().collect::<Vec<_>>(), vec![Pos::new(0, 0)]);
        assert_eq!(s.closed_set().len(), 0);
        assert_eq!(s.g_score(Pos::new(0, 0)), Some(0.0));
        assert_eq!(s.f_score(Pos::new(0, 0)), Some(8f64.sqrt()));
        assert_eq!(s.g_score(Pos::new(1, 1)), None);
    }

    #[test]
    fn start_equals_goal_is_trivial() {
        let g = comb(3, 3);
        let p = Pos::new(1, 1);
        let mut s = AstarSearch::on_grid(&g, p, p).unwrap();
        s.search_step();
        assert!(s.is_done());
        assert!(s.found());
        assert_eq!(s.path(), &[p]);
        assert_eq!(s.expanded(), 1);
    }

    #[test]
    fn two_by_two_path_has_two_edges() {
        let mut g = Grid::new(2, 2).unwrap();
        g.carve(Pos::new(0, 0), Direction::East);
        g.carve(Pos::new(0, 0), Direction::South);
        g.carve(Pos::new(1, 0), Direction::East);
        let mut s = AstarSearch::on_grid(&g, Pos::new(0, 0), Pos::new(1, 1)).unwrap();
        let path = s.run().unwrap();
        assert_eq!(path, vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]);
        assert_eq!(s.g_score(Pos::new(1, 1)), Some(2.0));
        assert_eq!(s.came_from(Pos::new(1, 1)), Some(Pos::new(1, 0)));
    }

    #[test]
    fn open_and_closed_stay_disjoint() {
        let g = comb(4, 5);
        let mut s = AstarSearch::on_grid(&g, Pos::new(3, 0), Pos::new(3, 4)).unwrap();
        while !s.is_done() {
            s.search_step();
            for p in s.open_set() {
                assert!(!s.is_closed(p));
                assert!(s.g_score(p).is_some());
                assert!(s.f_score(p).is_some());
            }
            for p in s.closed_set() {
                assert!(!s.is_open(p));
            }
        }
        assert!(s.found());
    }

    #[test]
    fn unreachable_goal_is_a_terminal_state() {
        // Everything is connected except (1, 1).
        let mut g = Grid::new(2, 2).unwrap();
        g.carve(Pos::new(0, 0), Direction::East);
        g.carve(Pos::new(0, 0), Direction::South);
        let goal = Pos::new(1, 1);
        let mut s = AstarSearch::on_grid(&g, Pos::new(0, 0), goal).unwrap();
        assert_eq!(s.run(), None);
        assert!(s.is_done());
        assert!(!s.found());
        assert_eq!(s.open_set().len(), 0);
        assert_ne!(s.current(), Some(goal));
        assert_eq!(s.came_from(goal), None);
        assert_eq!(s.closed_set().len(), 3);
    }

    #[test]
    fn stepping_after_done_changes_nothing() {
        let g = comb(3, 4);
        let mut s = AstarSearch::on_grid(&g, Pos::new(2, 0), Pos::new(2, 3)).unwrap();
        s.run();
        let before = snapshot(&s);
        let expanded = s.expanded();
        for _ in 0..5 {
            s.search_step();
        }
        assert_eq!(snapshot(&s), before);
        assert_eq!(s.expanded(), expanded);
    }

    #[test]
    fn status_priorities() {
        let g = comb(3, 3);
        let start = Pos::new(2, 0);
        let goal = Pos::new(2, 2);
        let mut s = AstarSearch::on_grid(&g, start, goal).unwrap();
        assert_eq!(s.status(start), CellStatus::Start);
        assert_eq!(s.status(goal), CellStatus::Goal);
        assert_eq!(s.status(Pos::new(1, 1)), CellStatus::None);

        s.search_step();
        assert_eq!(s.status(start), CellStatus::Current);
        assert_eq!(s.status(Pos::new(1, 0)), CellStatus::Open);

        s.search_step();
        assert_eq!(s.current(), Some(Pos::new(1, 0)));
        assert_eq!(s.status(start), CellStatus::Start);
        assert_eq!(s.status(Pos::new(0, 0)), CellStatus::Open);

        s.run();
        assert_eq!(s.status(goal), CellStatus::Current);
        assert_eq!(s.status(Pos::new(0, 1)), CellStatus::Path);
        // Off the path but cheaper than the goal, so always expanded.
        assert_eq!(s.status(Pos::new(1, 1)), CellStatus::Closed);
    }

    #[test]
    fn path_tracks_current_node() {
        let g = comb(3, 3);
        let mut s = AstarSearch::on_grid(&g, Pos::new(2, 1), Pos::new(2, 2)).unwrap();
        while !s.is_done() {
            s.search_step();
            let path = s.path();
            assert_eq!(path.first(), Some(&s.start()));
            assert_eq!(path.last().copied(), s.current());
            for w in path.windows(2) {
                assert_eq!(manhattan(w[0], w[1]), 1);
            }
        }
    }

    /// Pather over a grid that reports neighbours outside the search range.
    struct Leaky<'a>(&'a Grid);

    impl Pather for Leaky<'_> {
        fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
            buf.extend(p.neighbors_4());
        }
    }

    impl WeightedPather for Leaky<'_> {
        fn cost(&self, _from: Pos, _to: Pos) -> f64 {
            1.0
        }
    }

    impl AstarPather for Leaky<'_> {
        fn estimate(&self, from: Pos, to: Pos) -> f64 {
            f64::from(manhattan(from, to))
        }
    }

    #[test]
    fn neighbours_outside_bounds_are_ignored() {
        let g = Grid::new(3, 3).unwrap();
        let leaky = Leaky(&g);
        let mut s = AstarSearch::new(&leaky, g.range(), Pos::new(0, 0), Pos::new(2, 2)).unwrap();
        let path = s.run().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(s.g_score(Pos::new(2, 2)), Some(4.0));
    }

    proptest! {
        #[test]
        fn finds_the_unique_comb_path(
            rows in 1i32..8,
            columns in 1i32..8,
            a in (0i32..8, 0i32..8),
            b in (0i32..8, 0i32..8),
        ) {
            let g = comb(rows, columns);
            let start = Pos::new(a.0 % rows, a.1 % columns);
            let goal = Pos::new(b.0 % rows, b.1 % columns);
            let mut s = AstarSearch::on_grid(&g, start, goal).unwrap();
            let path = s.run().unwrap();
            let edges = comb_distance(start, goal);
            prop_assert_eq!(path.len(), edges + 1);
            prop_assert_eq!(s.g_score(goal), Some(edges as f64));
            for w in path.windows(2) {
                prop_assert!(g.passages(w[0]).any(|n| n == w[1]));
            }
        }
    }
}
