//! Rules, evaluation, search and game session for a human-vs-AI chess board.
//!
//! This crate provides:
//! - [`Board`] - 64-cell mailbox board
//! - Move generation and the legality filter ([`movegen`])
//! - Check, checkmate and stalemate detection
//! - [`evaluate`] and the alpha-beta [`Searcher`]
//! - [`GameSession`] - the click-driven state machine front ends talk to
//!
//! The rule set is simplified: no castling, no en passant and no promotion.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Move, Square};
//! use chess_engine::{Action, Event, GameSession, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::default());
//! session.apply(Action::Click(Square::from_algebraic("e2").unwrap()));
//! let event = session.apply(Action::Click(Square::from_algebraic("e4").unwrap()));
//! assert!(matches!(event, Event::AwaitingAi { .. }));
//!
//! // The front end later lets the AI reply
//! session.apply(Action::AiTurn);
//! assert_eq!(session.current_player(), Color::White);
//! assert_eq!(session.move_history()[0], Move::from_uci("e2e4").unwrap());
//! ```

mod board;
mod check;
mod eval;
mod game;
pub mod movegen;
mod search;
mod view;

pub use board::{Board, Cell};
pub use check::{is_checkmate, is_king_in_check, is_stalemate};
pub use eval::evaluate;
pub use game::{
    apply_action, Action, Event, GameError, GameSession, SessionConfig, SessionConfigError, Status,
};
pub use movegen::{all_legal_moves, basic_moves, legal_moves, MoveList, SquareList};
pub use search::{SearchResult, Searcher, MATE_SCORE};
pub use view::{CellView, Highlight};
