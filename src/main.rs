//! Terminal well runner (default binary).
//!
//! Parses the command line, plays games in the terminal until the player
//! quits, and offers to save each final score to the high-score table.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_well::core::ScoreRecord;
use tui_well::engine::play_game;
use tui_well::high_scores::{HighScoreTable, DEFAULT_FILE_NAME};
use tui_well::input::{should_quit, TerminalInput};
use tui_well::term::{Terminal, WellView};
use tui_well::types::MAX_LEVEL;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Starting level, 0 to 9. Each level shortens the gravity interval;
    /// the level still rises with every 3 cleared lines.
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=MAX_LEVEL as i64))]
    level: u32,
    /// Seed for the piece sequence. Games with the same seed get the same
    /// pieces. Defaults to the system clock.
    #[arg(short, long)]
    seed: Option<u32>,
    /// Name saved with a high score.
    #[arg(short, long, default_value = "player")]
    name: String,
    /// High-score file; created on the first save.
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    scores: PathBuf,
}

/// What the player picked on the game-over panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Save,
    Restart,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    install_panic_hook();

    let mut view = WellView::new();
    view.terminal_mut().enter()?;

    let result = run(&args, &mut view);

    // Always try to restore terminal state.
    let _ = view.terminal_mut().exit();

    if let Some(table) = result? {
        print_table(&table);
    }
    Ok(())
}

/// Play until the player quits; returns the table if a score was saved.
fn run(args: &Args, view: &mut WellView) -> Result<Option<HighScoreTable>> {
    let mut input = TerminalInput::new();

    loop {
        let seed = args.seed.unwrap_or_else(clock_seed);
        view.draw_frame();
        view.invalidate();

        let record = play_game(args.level, seed, &mut input, view)?;

        match wait_for_choice()? {
            Choice::Save => return save_score(args, record).map(Some),
            Choice::Restart => continue,
            Choice::Quit => return Ok(None),
        }
    }
}

fn wait_for_choice() -> Result<Choice> {
    loop {
        let Event::Key(key) = event::read().context("read key")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(Choice::Quit);
        }
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(Choice::Save),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => return Ok(Choice::Restart),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => return Ok(Choice::Quit),
            _ => {}
        }
    }
}

fn save_score(args: &Args, record: ScoreRecord) -> Result<HighScoreTable> {
    let mut table = HighScoreTable::load(&args.scores)?;
    table.insert(args.name.as_str(), record);
    table.save(&args.scores)?;
    Ok(table)
}

fn print_table(table: &HighScoreTable) {
    println!("# High Scores #");
    for (rank, entry) in table.entries().iter().enumerate() {
        println!(
            "{:>2}. {:<16} {:>6} points {:>4} lines  level {}",
            rank + 1,
            entry.name,
            entry.record.points,
            entry.record.lines,
            entry.record.level
        );
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Leave raw mode before the panic message is printed, so it stays readable.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = Terminal::stdout().exit();
        default_hook(info);
    }));
}
