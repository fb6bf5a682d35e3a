//! Grid Snake entry point
//!
//! Runs the frame loop: poll keys, feed elapsed milliseconds into the
//! simulation, redraw when the snapshot changes. The simulation itself
//! never reads the clock; this loop is the only place wall time exists.

use std::thread::sleep;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use grid_snake::SimConfig;
use grid_snake::sim::{Direction, GamePhase, GameState, Snapshot, advance};
use grid_snake::term::TermHost;

/// Input poll cadence; much finer than the 50ms tick so turns feel instant.
const FRAME_SLEEP_MS: u64 = 5;

enum Command {
    Turn(Direction),
    Quit,
}

fn main() {
    env_logger::init();

    let mut state = match GameState::new(SimConfig::default()) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    let mut term = TermHost::new();
    term.setup();

    let start = Instant::now();
    let mut last_drawn: Option<Snapshot> = None;

    loop {
        sleep(Duration::from_millis(FRAME_SLEEP_MS));

        let mut quit = false;
        for key in term.drain_keys() {
            match key_command(&key) {
                Some(Command::Turn(direction)) => state.set_direction(direction),
                Some(Command::Quit) => quit = true,
                None => {}
            }
        }
        if quit {
            break;
        }

        advance(&mut state, start.elapsed().as_millis() as u64);

        let snapshot = state.snapshot();
        if last_drawn.as_ref() != Some(&snapshot) {
            term.draw(state.board(), &snapshot);
            last_drawn = Some(snapshot);
        }

        if let GamePhase::GameOver(reason) = state.phase() {
            term.show_game_over(state.board(), reason);
            term.read_key_blocking();
            break;
        }
    }

    term.restore();
}

fn key_command(ev: &KeyEvent) -> Option<Command> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
    } = ev
    {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Direction::North)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Direction::South)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Direction::West)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Direction::East)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
