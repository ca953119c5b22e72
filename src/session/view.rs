//! Read-only snapshots and move intents exchanged with the presentation layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameVariant};
use crate::error::MoveErrorKind;
use crate::games::chess::{ChessBoard, ChessMove, Square};
use crate::games::tictactoe::TicTacToeBoard;
use crate::rules::{Outcome, Seat};

/// A move as the UI sends it, or as the engine reports it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionMove {
    /// Tic-tac-toe cell index, 0-8 row-major.
    Cell(usize),
    /// Chess move as raw `(row, col)` pairs.
    Chess {
        /// Origin square.
        from: (u8, u8),
        /// Destination square.
        to: (u8, u8),
    },
}

impl SessionMove {
    /// Chess move from raw coordinates.
    pub fn chess(from: (u8, u8), to: (u8, u8)) -> Self {
        SessionMove::Chess { from, to }
    }

    /// Resolve raw chess coordinates, rejecting anything off the board.
    pub(crate) fn to_chess_move(from: (u8, u8), to: (u8, u8)) -> Result<ChessMove, MoveErrorKind> {
        let square = |(row, col): (u8, u8)| {
            Square::new(row, col).ok_or(MoveErrorKind::SquareOutOfRange { row, col })
        };
        Ok(ChessMove::new(square(from)?, square(to)?))
    }
}

impl From<ChessMove> for SessionMove {
    fn from(mv: ChessMove) -> Self {
        SessionMove::Chess {
            from: (mv.from.row(), mv.from.col()),
            to: (mv.to.row(), mv.to.col()),
        }
    }
}

/// Board contents for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardSnapshot {
    /// Nine-cell grid.
    TicTacToe(TicTacToeBoard),
    /// 8x8 board.
    Chess(ChessBoard),
}

/// Everything the presentation layer needs to draw the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    /// Game being played.
    pub variant: GameVariant,
    /// Tic-tac-toe strength setting.
    pub difficulty: Difficulty,
    /// Board contents.
    pub board: BoardSnapshot,
    /// Who moves next.
    pub turn: Seat,
    /// Current outcome.
    pub outcome: Outcome<Seat>,
    /// Accepted moves of this game, oldest first.
    pub history: Vector<(Seat, SessionMove)>,
}

impl BoardView {
    /// Whether the human may move now.
    ///
    /// Stays `false` after a chess reply fails to appear because the engine
    /// has no legal move while both kings stand; only a reset resumes play.
    #[must_use]
    pub fn awaiting_human(&self) -> bool {
        self.turn == Seat::Human && !self.outcome.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chess_move_conversion() {
        let mv = SessionMove::to_chess_move((6, 4), (4, 4)).unwrap();
        assert_eq!(SessionMove::from(mv), SessionMove::chess((6, 4), (4, 4)));

        assert_eq!(
            SessionMove::to_chess_move((6, 4), (9, 4)),
            Err(MoveErrorKind::SquareOutOfRange { row: 9, col: 4 })
        );
    }

    #[test]
    fn test_session_move_serde() {
        let mv = SessionMove::Cell(4);
        let json = serde_json::to_string(&mv).unwrap();
        let back: SessionMove = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
