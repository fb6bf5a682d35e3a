//! Terminal rendering and input
//!
//! Thin crossterm adapter around the simulation: raw-mode alternate screen,
//! non-blocking key polling, and a cell-by-cell redraw of the snapshot.
//! No game logic lives here. TTY failures are unrecoverable for a
//! full-screen game, so this layer panics on them via `expect`.

use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use crossterm::event::{Event, KeyEvent, poll, read};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style};

use crate::sim::{Board, GameOverReason, GamePhase, Position, Snapshot};

const BORDER_CHAR: char = '#';
const HEAD_CHAR: char = '@';
const BODY_CHAR: char = 'o';
const GOOD_OBSTACLE_CHAR: char = '+';
const BAD_OBSTACLE_CHAR: char = 'x';
const DEAD_CHAR: char = 'X';

pub struct TermHost {
    stdout: Stdout,
}

impl TermHost {
    pub fn new() -> Self {
        Self { stdout: stdout() }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("error entering alternate screen");
        terminal::enable_raw_mode().expect("error enabling raw mode");
        execute!(self.stdout, cursor::Hide, terminal::Clear(ClearType::All))
            .expect("error preparing screen");
    }

    pub fn restore(&mut self) {
        execute!(self.stdout, cursor::Show).expect("error restoring cursor");
        terminal::disable_raw_mode().expect("error disabling raw mode");
        execute!(self.stdout, LeaveAlternateScreen).expect("error leaving alternate screen");
    }

    /// All key events queued since the last call, without blocking.
    pub fn drain_keys(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap_or(false) {
            if let Ok(Event::Key(ev)) = read() {
                events.push(ev);
            }
        }

        events
    }

    pub fn read_key_blocking(&self) -> KeyEvent {
        loop {
            if let Ok(Event::Key(ev)) = read() {
                return ev;
            }
        }
    }

    /// Redraw the whole board from a snapshot.
    pub fn draw(&mut self, board: &Board, snapshot: &Snapshot) {
        let dead = matches!(snapshot.phase, GamePhase::GameOver(_));

        for y in 0..board.height() {
            for x in 0..board.width() {
                let pos = Position::new(x, y);
                let ch = self.cell_char(board, snapshot, pos, dead);
                queue!(self.stdout, cursor::MoveTo(x, y), style::Print(ch))
                    .expect("error queueing draw");
            }
        }

        self.stdout.flush().expect("error flushing");
    }

    /// Print the end-of-game banner below the board.
    pub fn show_game_over(&mut self, board: &Board, reason: GameOverReason) {
        let message = format!(
            "Game over: the snake {}. Press any key to quit.",
            reason.describe()
        );
        execute!(
            self.stdout,
            cursor::MoveTo(0, board.height() + 1),
            style::Print(message)
        )
        .expect("error printing game over message");
    }

    fn cell_char(&self, board: &Board, snapshot: &Snapshot, pos: Position, dead: bool) -> char {
        // Draw precedence mirrors collision precedence: body over border,
        // bad obstacles over good ones
        if pos == snapshot.body[0] {
            return if dead { DEAD_CHAR } else { HEAD_CHAR };
        }
        if snapshot.body.contains(&pos) {
            return if dead { DEAD_CHAR } else { BODY_CHAR };
        }
        if board.is_border(pos) {
            return BORDER_CHAR;
        }
        if snapshot.bad_obstacles.contains(&pos) {
            return BAD_OBSTACLE_CHAR;
        }
        if snapshot.good_obstacles.contains(&pos) {
            return GOOD_OBSTACLE_CHAR;
        }
        ' '
    }
}

impl Default for TermHost {
    fn default() -> Self {
        Self::new()
    }
}
