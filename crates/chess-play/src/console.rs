//! The read-eval-print loop.

use crate::command::{Command, HELP};
use crate::render;
use chess_engine::{Action, Event, GameSession};
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Plays one session over a line-based reader and writer.
pub struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    session: GameSession,
    ai_delay: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console around `session`, pausing `ai_delay` before each AI move.
    pub fn new(reader: R, writer: W, session: GameSession, ai_delay: Duration) -> Self {
        Self {
            reader,
            writer,
            session,
            ai_delay,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.show_board()?;
        loop {
            if self.session.is_thinking() {
                self.ai_reply()?;
                continue;
            }

            write!(self.writer, "{}> ", self.session.current_player())?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                writeln!(self.writer)?;
                return Ok(());
            }

            match Command::parse(&line) {
                Command::Quit => return Ok(()),
                Command::Empty => {}
                Command::Help => writeln!(self.writer, "{}", HELP)?,
                Command::Board => self.show_board()?,
                Command::New => {
                    self.session.apply(Action::NewGame);
                    self.show_board()?;
                }
                Command::Move(m) => match self.session.play_move(m) {
                    Ok(_) => self.show_board()?,
                    Err(e) => writeln!(self.writer, "{}", e)?,
                },
                Command::Unknown(text) => {
                    writeln!(self.writer, "Unknown command '{}'. Type 'help'.", text)?
                }
            }
        }
    }

    fn ai_reply(&mut self) -> io::Result<()> {
        writeln!(self.writer, "Thinking...")?;
        self.writer.flush()?;
        if !self.ai_delay.is_zero() {
            std::thread::sleep(self.ai_delay);
        }

        match self.session.apply(Action::AiTurn) {
            Event::Moved { mov, .. } => writeln!(self.writer, "AI plays {}", mov)?,
            Event::GameOver { .. } => {}
            other => tracing::warn!(?other, "unexpected event from AI turn"),
        }
        self.show_board()
    }

    fn show_board(&mut self) -> io::Result<()> {
        writeln!(self.writer, "{}", render::board(&self.session))?;
        writeln!(self.writer, "{}", render::status_line(&self.session))
    }
}
