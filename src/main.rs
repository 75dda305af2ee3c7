use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use crossterm::cursor;
use crossterm::execute;
use crossterm::terminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use termlife::engine;
use termlife::grid::Grid;
use termlife::parse_seed;
use termlife::render::Frame;

/// Milliseconds between generations when no interval argument is given.
const DEFAULT_INTERVAL_MS: u64 = 150;

/// The simulation stops once fewer than this many cells are alive.
const MIN_POPULATION: usize = 5;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: termlife <seed-file> [interval-ms]");
        process::exit(1);
    }

    let path = Path::new(&args[1]);
    let interval = match args.get(2) {
        Some(raw) => raw
            .parse()
            .map(Duration::from_millis)
            .with_context(|| format!("Interval must be a number of milliseconds, got \"{raw}\""))?,
        None => Duration::from_millis(DEFAULT_INTERVAL_MS),
    };

    let data = fs::read(path)
        .with_context(|| format!("Failed to read seed file \"{}\"", path.display()))?;
    let seed = parse_seed::read_seed(&data).context("Failed to parse seed file")?;

    let mut grid = Grid::from_seed(&seed);

    debug!(
        height = grid.height(),
        width = grid.width(),
        population = grid.alive_count(),
        "seed loaded"
    );

    let mut frame = Frame::new(&grid);
    let mut stdout = io::stdout();

    loop {
        // The generation that drops below the threshold is never printed
        if grid.alive_count() < MIN_POPULATION {
            break;
        }

        print!("{}", frame.render(&grid));

        engine::advance(&mut grid);

        thread::sleep(interval);

        execute!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
    }

    Ok(())
}
