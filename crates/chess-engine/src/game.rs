//! Game session: one human against the minimax AI.
//!
//! The [`GameSession`] owns the board and turn state and advances only through
//! [`Action`]s. The AI move is never computed inside a click: a human move that
//! hands the turn to the AI sets the `thinking` flag and returns
//! [`Event::AwaitingAi`], and the front end dispatches [`Action::AiTurn`] on its
//! next tick.

use crate::check::{is_checkmate, is_king_in_check};
use crate::movegen::{has_legal_move, legal_moves, SquareList};
use crate::search::Searcher;
use crate::Board;
use chess_core::{Color, FenError, FenParser, Move, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Game state from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    /// Computes the status of `to_move` on `board`.
    pub fn of(board: &Board, to_move: Color) -> Status {
        let in_check = is_king_in_check(board, to_move);
        match (in_check, has_legal_move(board, to_move)) {
            (true, false) => Status::Checkmate,
            (false, false) => Status::Stalemate,
            (true, true) => Status::Check,
            (false, true) => Status::Playing,
        }
    }

    /// Returns true once no further moves may be played.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }

    /// Lowercase name, as serialized.
    pub const fn name(self) -> &'static str {
        match self {
            Status::Playing => "playing",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The human clicked a board cell.
    Click(Square),
    /// The front end's deferred tick asking the AI to move.
    AiTurn,
    /// Start over from the initial layout.
    NewGame,
}

/// What an [`Action`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Nothing changed.
    Ignored,
    /// A piece was selected; its legal destinations are attached.
    Selected { square: Square, targets: Vec<Square> },
    /// The selection was cleared without moving.
    Deselected,
    /// A move was applied and the human is to move next, or the game ended.
    Moved { mov: Move, by: Color, status: Status },
    /// The human's move was applied and the AI should move on the next tick.
    AwaitingAi { mov: Move, status: Status },
    /// The AI had no move; the game ended without one.
    GameOver { status: Status, winner: Option<Color> },
    /// The board was reset.
    Reset,
}

/// Errors from [`GameSession::play_move`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over")]
    GameOver,

    #[error("it is not your turn")]
    NotYourTurn,

    #[error("no piece of yours on {0}")]
    NoPieceAt(Square),

    #[error("illegal move: {0}")]
    IllegalMove(Move),
}

/// Errors from [`SessionConfig::validate`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionConfigError {
    #[error("invalid search depth {0}: expected 1 to {max}", max = Searcher::MAX_DEPTH)]
    InvalidDepth(u8),
}

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Color played by the human; the AI takes the other one.
    pub human: Color,
    /// Plies searched below each AI candidate move.
    pub search_depth: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            human: Color::White,
            search_depth: Searcher::DEFAULT_DEPTH,
        }
    }
}

impl SessionConfig {
    /// Checks that the search depth is within 1 to [`Searcher::MAX_DEPTH`].
    pub fn validate(&self) -> Result<(), SessionConfigError> {
        if (1..=Searcher::MAX_DEPTH).contains(&self.search_depth) {
            Ok(())
        } else {
            Err(SessionConfigError::InvalidDepth(self.search_depth))
        }
    }
}

/// A human-vs-AI game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Color,
    selected: Option<Square>,
    last_move: Option<Move>,
    status: Status,
    winner: Option<Color>,
    thinking: bool,
    history: Vec<Move>,
    config: SessionConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    /// Starts a game from the initial layout with White to move.
    pub fn new(config: SessionConfig) -> Self {
        Self::from_board(Board::initial(), Color::White, config)
    }

    /// Starts a game from a FEN placement and side to move.
    ///
    /// A position that is already decided starts in its terminal state.
    pub fn from_fen(fen: &str, config: SessionConfig) -> Result<Self, FenError> {
        let parsed = FenParser::parse(fen)?;
        let board = Board::from_cells(parsed.cells());
        Ok(Self::from_board(board, parsed.active_color, config))
    }

    fn from_board(board: Board, to_move: Color, config: SessionConfig) -> Self {
        let status = Status::of(&board, to_move);
        let mut session = GameSession {
            board,
            current_player: to_move,
            selected: None,
            last_move: None,
            status,
            winner: None,
            thinking: false,
            history: Vec::new(),
            config,
        };
        if status == Status::Checkmate {
            session.winner = Some(to_move.opposite());
        }
        session.thinking = !status.is_terminal() && to_move == session.ai();
        session
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Returns the square of the selected piece, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Returns the most recent move by either side.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns the status of the side to move.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The winner after a checkmate; `None` while playing and after a stalemate.
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// True between a human move and the AI's reply.
    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    /// Returns true after checkmate or stalemate.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the settings the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the color played by the human.
    pub fn human(&self) -> Color {
        self.config.human
    }

    /// Returns the color played by the AI.
    pub fn ai(&self) -> Color {
        self.config.human.opposite()
    }

    /// Moves played since the last reset, oldest first.
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    /// Legal destinations of the selected piece, empty without a selection.
    pub fn legal_targets(&self) -> SquareList {
        match self.selected {
            Some(from) => legal_moves(&self.board, from),
            None => SquareList::new(),
        }
    }

    /// Applies one action.
    pub fn apply(&mut self, action: Action) -> Event {
        match action {
            Action::Click(sq) => self.click(sq),
            Action::AiTurn => self.ai_turn(),
            Action::NewGame => self.reset(),
        }
    }

    fn accepts_input(&self) -> bool {
        !self.thinking && !self.is_over() && self.current_player == self.human()
    }

    /// Handles a click on `sq`.
    ///
    /// Without a selection, clicking one of the human's pieces selects it.
    /// With a selection, clicking a legal destination plays the move and any
    /// other cell clears the selection.
    pub fn click(&mut self, sq: Square) -> Event {
        if !self.accepts_input() {
            return Event::Ignored;
        }

        match self.selected {
            Some(from) => {
                if legal_moves(&self.board, from).contains(sq) {
                    self.apply_move(Move::new(from, sq))
                } else {
                    self.selected = None;
                    Event::Deselected
                }
            }
            None => {
                if self.board.is_color(sq, self.human()) {
                    self.selected = Some(sq);
                    Event::Selected {
                        square: sq,
                        targets: legal_moves(&self.board, sq).as_slice().to_vec(),
                    }
                } else {
                    Event::Ignored
                }
            }
        }
    }

    /// Plays a typed move for the human, bypassing the click selection.
    pub fn play_move(&mut self, m: Move) -> Result<Event, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.accepts_input() {
            return Err(GameError::NotYourTurn);
        }
        if !self.board.is_color(m.from(), self.human()) {
            return Err(GameError::NoPieceAt(m.from()));
        }
        if !legal_moves(&self.board, m.from()).contains(m.to()) {
            return Err(GameError::IllegalMove(m));
        }
        Ok(self.apply_move(m))
    }

    /// Lets the AI reply. Ignored unless the session is thinking.
    pub fn ai_turn(&mut self) -> Event {
        if !self.thinking {
            return Event::Ignored;
        }
        self.thinking = false;

        let ai = self.ai();
        let result = Searcher::new(self.config.search_depth).best_move(&self.board, ai);
        match result.best_move {
            Some(m) => self.apply_move(m),
            None => {
                // Normally caught when the human moved; covers sessions
                // loaded from a decided position.
                if is_king_in_check(&self.board, ai) {
                    self.status = Status::Checkmate;
                    self.winner = Some(ai.opposite());
                } else {
                    self.status = Status::Stalemate;
                    self.winner = None;
                }
                tracing::info!(status = %self.status, winner = ?self.winner, "game over");
                Event::GameOver {
                    status: self.status,
                    winner: self.winner,
                }
            }
        }
    }

    /// Restores the initial layout with White to move.
    pub fn reset(&mut self) -> Event {
        *self = Self::new(self.config);
        tracing::info!(human = %self.human(), "new game");
        Event::Reset
    }

    fn apply_move(&mut self, m: Move) -> Event {
        let by = self.current_player;
        self.board.make_move(m);
        self.history.push(m);
        self.last_move = Some(m);
        self.selected = None;
        self.current_player = by.opposite();
        self.status = Status::of(&self.board, self.current_player);

        tracing::debug!(mov = %m, by = %by, status = %self.status, "move applied");

        if self.status.is_terminal() {
            self.winner = is_checkmate(&self.board, self.current_player).then_some(by);
            tracing::info!(status = %self.status, winner = ?self.winner, "game over");
        } else if self.current_player == self.ai() {
            self.thinking = true;
            return Event::AwaitingAi {
                mov: m,
                status: self.status,
            };
        }

        Event::Moved {
            mov: m,
            by,
            status: self.status,
        }
    }
}

/// Applies `action` to an owned session and hands both back.
pub fn apply_action(mut session: GameSession, action: Action) -> (GameSession, Event) {
    let event = session.apply(action);
    (session, event)
}
