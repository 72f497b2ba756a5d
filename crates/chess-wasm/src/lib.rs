//! WebAssembly bindings for the chess board.
//!
//! The page owns the timer: when a click returns `"awaiting-ai"` it should
//! repaint, wait a moment and then call `aiTurn()`.
//!
//! # Usage
//!
//! ```javascript
//! import init, { ChessBoard } from 'chess-wasm';
//!
//! await init();
//!
//! const board = new ChessBoard();
//! if (board.click(52) === 'selected' && board.click(36) === 'awaiting-ai') {
//!   setTimeout(() => { board.aiTurn(); render(board.cells()); }, 300);
//! }
//! ```

use chess_core::{Color, Square};
use chess_engine::{Action, Event, GameSession, SessionConfig, SessionConfigError};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Errors in the settings passed from JavaScript.
#[derive(Debug, Error, PartialEq, Eq)]
enum BoardConfigError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error(transparent)]
    InvalidSession(#[from] SessionConfigError),
}

fn session_config(human: &str, depth: u8) -> Result<SessionConfig, BoardConfigError> {
    let human =
        Color::from_name(human).ok_or_else(|| BoardConfigError::InvalidColor(human.to_string()))?;
    let config = SessionConfig {
        human,
        search_depth: depth,
    };
    config.validate()?;
    Ok(config)
}

/// A human-vs-AI game that can be driven from JavaScript.
#[wasm_bindgen]
pub struct ChessBoard {
    session: GameSession,
}

#[wasm_bindgen]
impl ChessBoard {
    /// Creates a game with the human playing White at the default depth.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        ChessBoard {
            session: GameSession::new(SessionConfig::default()),
        }
    }

    /// Creates a game with the human on `human` ("white" or "black").
    ///
    /// `depth` must be between 1 and 6. When the human plays Black the board
    /// starts out thinking.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(human: &str, depth: u8) -> Result<ChessBoard, JsError> {
        let config = session_config(human, depth).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ChessBoard {
            session: GameSession::new(config),
        })
    }

    /// Creates a game from a FEN string.
    #[wasm_bindgen(js_name = fromFen)]
    pub fn from_fen(fen: &str) -> Result<ChessBoard, JsError> {
        let session = GameSession::from_fen(fen, SessionConfig::default())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ChessBoard { session })
    }

    /// Handles a click on cell `index` (0 = a8, 63 = h1).
    ///
    /// Returns the resulting event name.
    pub fn click(&mut self, index: u8) -> String {
        match Square::from_index(index) {
            Some(sq) => self.dispatch(Action::Click(sq)),
            None => event_name(&Event::Ignored).to_string(),
        }
    }

    /// Lets the AI play its move. Does nothing unless the board is thinking.
    #[wasm_bindgen(js_name = aiTurn)]
    pub fn ai_turn(&mut self) -> String {
        self.dispatch(Action::AiTurn)
    }

    /// Starts a new game.
    pub fn reset(&mut self) {
        self.dispatch(Action::NewGame);
    }

    /// Returns the 64 cell descriptors as plain objects:
    /// `{ index, symbol, highlight, dark }`.
    pub fn cells(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.session.cells()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns one of "playing", "check", "checkmate" or "stalemate".
    pub fn status(&self) -> String {
        self.session.status().name().to_string()
    }

    /// Returns the side to move ("white" or "black").
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        self.session.current_player().name().to_string()
    }

    #[wasm_bindgen(js_name = isThinking)]
    pub fn is_thinking(&self) -> bool {
        self.session.is_thinking()
    }

    /// Returns the winner after a checkmate, or null.
    pub fn winner(&self) -> Option<String> {
        self.session.winner().map(|c| c.name().to_string())
    }

    /// Returns the last move in UCI format, or null.
    #[wasm_bindgen(js_name = lastMove)]
    pub fn last_move(&self) -> Option<String> {
        self.session.last_move().map(|m| m.to_uci())
    }

    /// Returns the piece placement as a FEN field.
    #[wasm_bindgen(js_name = toFen)]
    pub fn to_fen(&self) -> String {
        self.session.board().to_fen()
    }
}

impl ChessBoard {
    fn dispatch(&mut self, action: Action) -> String {
        event_name(&self.session.apply(action)).to_string()
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Ignored => "ignored",
        Event::Selected { .. } => "selected",
        Event::Deselected => "deselected",
        Event::Moved { .. } => "moved",
        Event::AwaitingAi { .. } => "awaiting-ai",
        Event::GameOver { .. } => "game-over",
        Event::Reset => "reset",
    }
}
