//! Text rendering of a session, built from its cell descriptors.

use chess_engine::{CellView, GameSession, Highlight, Status};

/// Draws the board with rank and file labels, White at the bottom.
///
/// The squares of the last move are bracketed and a checked king is
/// wrapped in `!`.
pub fn board(session: &GameSession) -> String {
    let cells = session.cells();
    let mut out = String::new();
    for (row, rank) in cells.chunks(8).zip((1..=8).rev()) {
        out.push_str(&format!("{} ", rank));
        for cell in row {
            out.push_str(&cell_text(cell));
        }
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h");
    out
}

fn cell_text(cell: &CellView) -> String {
    let symbol = cell.symbol.unwrap_or(if cell.dark { ':' } else { '.' });
    match cell.highlight {
        Highlight::LastMove => format!("[{}]", symbol),
        Highlight::Check => format!("!{}!", symbol),
        Highlight::Selected => format!("<{}>", symbol),
        Highlight::LegalTarget => format!("*{}*", symbol),
        Highlight::None => format!(" {} ", symbol),
    }
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(session: &GameSession) -> String {
    match session.status() {
        Status::Checkmate => match session.winner() {
            Some(winner) => format!("Checkmate, {} wins. Type 'new' to play again.", winner),
            None => "Checkmate. Type 'new' to play again.".to_string(),
        },
        Status::Stalemate => "Stalemate, the game is a draw. Type 'new' to play again.".to_string(),
        Status::Check => format!("{} to move, in check.", session.current_player()),
        Status::Playing => format!("{} to move.", session.current_player()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Move;
    use chess_engine::SessionConfig;

    #[test]
    fn initial_board() {
        let text = board(&GameSession::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ ");
        assert_eq!(lines[4], "4  .  :  .  :  .  :  .  : ");
        assert_eq!(lines[7], "1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ ");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
    }

    #[test]
    fn last_move_is_bracketed() {
        let mut session = GameSession::new(SessionConfig::default());
        session.play_move(Move::from_uci("e2e4").unwrap()).unwrap();
        let text = board(&session);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[4].contains("[♙]"));
        assert!(lines[6].contains("[.]") || lines[6].contains("[:]"));
    }

    #[test]
    fn status_lines() {
        let session = GameSession::default();
        assert_eq!(status_line(&session), "White to move.");

        let mated = GameSession::from_fen(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w",
            SessionConfig::default(),
        )
        .unwrap();
        assert_eq!(
            status_line(&mated),
            "Checkmate, Black wins. Type 'new' to play again."
        );
    }
}
