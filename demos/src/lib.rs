//! Text rendering shared by the amaze demos.
//!
//! A maze of `rows × columns` cells is drawn on a `(2 * rows + 1) ×
//! (2 * columns + 1)` [`Canvas`]: cell `(r, c)` sits at `(2r + 1, 2c + 1)`
//! and the glyph between two cells is a wall unless a passage joins them.

use std::io::{self, Write};

use amaze_core::{Cell, Direction, Grid, Pos, Range};
use amaze_paths::{AstarPather, AstarSearch, CellStatus};
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

// Colours
const COL_WALL: Color = Color::Rgb { r: 60, g: 60, b: 80 };
const COL_FLOOR: Color = Color::Rgb { r: 230, g: 230, b: 225 };
const COL_UNTOUCHED: Color = Color::Rgb { r: 25, g: 25, b: 35 };
const COL_FRONTIER: Color = Color::Rgb { r: 220, g: 120, b: 60 };
const COL_OPEN: Color = Color::Rgb { r: 120, g: 200, b: 120 };
const COL_CLOSED: Color = Color::Rgb { r: 150, g: 170, b: 210 };
const COL_PATH: Color = Color::Rgb { r: 50, g: 140, b: 255 };
const COL_CURRENT: Color = Color::Rgb { r: 255, g: 220, b: 80 };
const COL_START: Color = Color::Rgb { r: 60, g: 200, b: 60 };
const COL_GOAL: Color = Color::Rgb { r: 220, g: 50, b: 50 };

/// One character cell on the terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub bg: Color,
}

impl Glyph {
    const WALL: Self = Self::solid('#', COL_WALL);

    const fn solid(ch: char, bg: Color) -> Self {
        Self { ch, bg }
    }
}

/// A rectangular buffer of [`Glyph`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    bounds: Range,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    /// A canvas sized for `grid`, filled with walls.
    pub fn for_grid(grid: &Grid) -> Self {
        let bounds = Range::with_size(2 * grid.rows() + 1, 2 * grid.columns() + 1);
        Self {
            bounds,
            glyphs: vec![Glyph::WALL; bounds.len()],
        }
    }

    /// Canvas extent.
    pub fn range(&self) -> Range {
        self.bounds
    }

    /// Glyph at `p`; a wall outside the canvas.
    pub fn at(&self, p: Pos) -> Glyph {
        self.bounds
            .index(p)
            .map_or(Glyph::WALL, |i| self.glyphs[i])
    }

    fn put(&mut self, p: Pos, g: Glyph) {
        if let Some(i) = self.bounds.index(p) {
            self.glyphs[i] = g;
        }
    }

    /// Row-per-line text of the canvas, colours dropped.
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(self.glyphs.len() + self.bounds.rows() as usize);
        for row in self.glyphs.chunks(self.bounds.columns() as usize) {
            s.extend(row.iter().map(|g| g.ch));
            s.push('\n');
        }
        s
    }
}

/// Canvas position of maze cell `p`.
#[inline]
fn canvas_pos(p: Pos) -> Pos {
    Pos::new(2 * p.row + 1, 2 * p.col + 1)
}

/// Draw the walls and passages of `grid`, colouring each cell by `fill`.
fn draw_with(grid: &Grid, mut fill: impl FnMut(Pos, Cell) -> Glyph) -> Canvas {
    let mut canvas = Canvas::for_grid(grid);
    for (p, cell) in grid.iter() {
        let cp = canvas_pos(p);
        let g = fill(p, cell);
        canvas.put(cp, g);
        // East and south openings cover every passage once.
        for d in [Direction::East, Direction::South] {
            if cell.is_open(d) {
                let n = fill(p.step(d), grid.get(p.step(d)));
                let between = if g.bg == n.bg { g } else { Glyph::solid(' ', COL_FLOOR) };
                canvas.put(cp.step(d), Glyph { ch: ' ', ..between });
            }
        }
    }
    canvas
}

/// Render a maze during generation: incorporated cells are floor, frontier
/// cells are highlighted.
pub fn draw_maze(grid: &Grid) -> Canvas {
    draw_with(grid, |_, cell| {
        if cell.contains(Cell::IN) {
            Glyph::solid(' ', COL_FLOOR)
        } else if cell.contains(Cell::FRONTIER) {
            Glyph::solid('+', COL_FRONTIER)
        } else {
            Glyph::solid(' ', COL_UNTOUCHED)
        }
    })
}

/// Render a maze with the state of `search` overlaid.
pub fn draw_search<P: AstarPather>(grid: &Grid, search: &AstarSearch<'_, P>) -> Canvas {
    draw_with(grid, |p, _| match search.status(p) {
        CellStatus::Current => Glyph::solid('@', COL_CURRENT),
        CellStatus::Start => Glyph::solid('S', COL_START),
        CellStatus::Goal => Glyph::solid('G', COL_GOAL),
        CellStatus::Path => Glyph::solid('*', COL_PATH),
        CellStatus::Open => Glyph::solid('o', COL_OPEN),
        CellStatus::Closed => Glyph::solid('.', COL_CLOSED),
        CellStatus::None => Glyph::solid(' ', COL_FLOOR),
    })
}

/// Glyphs of `curr` that differ from `prev`. A canvas of another size is
/// treated as entirely changed.
pub fn changes(prev: Option<&Canvas>, curr: &Canvas) -> Vec<(Pos, Glyph)> {
    let prev = prev.filter(|p| p.bounds == curr.bounds);
    curr.bounds
        .iter()
        .filter_map(|p| {
            let g = curr.at(p);
            match prev {
                Some(old) if old.at(p) == g => None,
                _ => Some((p, g)),
            }
        })
        .collect()
}

/// Write changed glyphs at their terminal positions, offset by `origin`.
pub fn flush(out: &mut impl Write, origin: Pos, changed: &[(Pos, Glyph)]) -> io::Result<()> {
    for &(p, g) in changed {
        let at = origin + p;
        queue!(
            out,
            cursor::MoveTo(at.col as u16, at.row as u16),
            SetForegroundColor(Color::Black),
            SetBackgroundColor(g.bg),
            Print(g.ch)
        )?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}
