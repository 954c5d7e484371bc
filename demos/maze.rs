//! Terminal demo: animate maze generation, then an A* search across it.
//!
//! Run: cargo run --bin maze -- --rows 15 --columns 30 --seed 7

use std::io::{self, Write};
use std::time::Duration;

use amaze_core::Pos;
use amaze_demos::{Canvas, changes, draw_maze, draw_search, flush};
use amaze_gen::{FrontierPick, MazeConfig, MazeGenerator};
use amaze_paths::AstarSearch;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Animate randomized Prim's maze generation and an A* search.
#[derive(Parser, Debug)]
#[command(name = "maze", version)]
struct Args {
    /// Maze rows.
    #[arg(long, default_value_t = 12)]
    rows: i32,
    /// Maze columns.
    #[arg(long, default_value_t = 30)]
    columns: i32,
    /// Random seed; drawn from the thread RNG when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Frontier policy: random, newest or oldest.
    #[arg(long, default_value_t = FrontierPick::Random)]
    pick: FrontierPick,
    /// Delay between frames, in milliseconds.
    #[arg(long, default_value_t = 15)]
    delay_ms: u64,
    /// Print the finished maze and path without animating.
    #[arg(long)]
    no_animate: bool,
}

/// Puts the terminal into raw alternate-screen mode and restores it on drop.
struct Screen;

impl Screen {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self)
    }

    /// Wait up to `timeout` for a key. Returns `true` if the user asked to quit.
    fn quit_requested(&self, timeout: Duration) -> io::Result<bool> {
        if !event::poll(timeout)? {
            return Ok(false);
        }
        Ok(matches!(
            event::read()?,
            Event::Key(KeyEvent { code: KeyCode::Char('q') | KeyCode::Esc, .. })
                | Event::Key(KeyEvent {
                    code: KeyCode::Char('c'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                })
        ))
    }

    fn wait_key(&self) -> io::Result<()> {
        loop {
            if let Event::Key(_) = event::read()? {
                return Ok(());
            }
        }
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Keeps the last drawn canvas so each frame only repaints what changed.
#[derive(Default)]
struct Painter {
    last: Option<Canvas>,
}

impl Painter {
    fn paint(&mut self, out: &mut impl Write, canvas: Canvas) -> io::Result<()> {
        let changed = changes(self.last.as_ref(), &canvas);
        flush(out, Pos::ZERO, &changed)?;
        self.last = Some(canvas);
        Ok(())
    }

    fn status(&self, out: &mut impl Write, line: &str) -> io::Result<()> {
        let row = self.last.as_ref().map_or(0, |c| c.range().rows());
        execute!(
            out,
            cursor::MoveTo(0, row as u16),
            terminal::Clear(ClearType::CurrentLine),
            crossterm::style::Print(line)
        )
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::info!("seed {seed}");
    let config = MazeConfig::new(args.rows, args.columns).with_pick(args.pick);
    let mut generator = MazeGenerator::new(config, StdRng::seed_from_u64(seed))?;
    let start = Pos::ZERO;
    let goal = Pos::new(args.rows - 1, args.columns - 1);

    if args.no_animate {
        generator.run();
        let grid = generator.finish()?;
        let mut search = AstarSearch::on_grid(&grid, start, goal)?;
        search.run();
        print!("{}", draw_search(&grid, &search).to_text());
        println!("{}", summary(seed, &search));
        return Ok(());
    }

    let delay = Duration::from_millis(args.delay_ms);
    let screen = Screen::enter()?;
    let mut out = io::stdout();
    let mut painter = Painter::default();

    loop {
        let done = generator.generate_step();
        painter.paint(&mut out, draw_maze(generator.grid()))?;
        painter.status(&mut out, &format!("carving: {} passages", generator.carved()))?;
        if done {
            break;
        }
        if screen.quit_requested(delay)? {
            return Ok(());
        }
    }

    let grid = generator.finish()?;
    let mut search = AstarSearch::on_grid(&grid, start, goal)?;
    while !search.is_done() {
        search.search_step();
        painter.paint(&mut out, draw_search(&grid, &search))?;
        painter.status(&mut out, &format!("searching: {} expanded", search.expanded()))?;
        if screen.quit_requested(delay)? {
            return Ok(());
        }
    }

    painter.status(&mut out, &format!("{} - press any key", summary(seed, &search)))?;
    screen.wait_key()?;
    drop(screen);
    println!("{}", summary(seed, &search));
    Ok(())
}

fn summary(seed: u64, search: &AstarSearch<'_, amaze_core::Grid>) -> String {
    if search.found() {
        format!(
            "seed {seed}: path of {} steps, {} nodes expanded",
            search.path().len().saturating_sub(1),
            search.expanded()
        )
    } else {
        format!("seed {seed}: no path to {}", search.goal())
    }
}
