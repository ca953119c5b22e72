//! Chess board model.
//!
//! Row 0 is Black's back rank and row 7 is White's. White pawns move toward
//! row 0.

use serde::{Deserialize, Serialize};

/// Board edge length.
pub const BOARD_SIZE: u8 = 8;

/// Piece color. White is the human and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Human side, starts on rows 6-7.
    White,
    /// Engine side, starts on rows 0-1.
    Black,
}

impl Color {
    /// Returns the other color.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a pawn move.
    #[must_use]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row pawns start on. Only pawns here may advance two squares.
    #[must_use]
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

/// Piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Losing it ends the game.
    King,
    /// Rook plus bishop movement.
    Queen,
    /// Straight lines.
    Rook,
    /// Diagonals.
    Bishop,
    /// L-shaped jump, ignores blockers.
    Knight,
    /// Forward steps, diagonal captures.
    Pawn,
}

impl PieceKind {
    /// Material value used by the static evaluation.
    #[must_use]
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }

    fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// What the piece is.
    pub kind: PieceKind,
    /// Who owns it.
    pub color: Color,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN-style letter: uppercase for White.
    #[must_use]
    pub fn letter(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

/// A square, `row` and `col` both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, or `None` if off the board.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Row, 0 at Black's side.
    #[must_use]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column, 0 at the a-file.
    #[must_use]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Square offset by `(dr, dc)`, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = u8::try_from(i16::from(self.row) + i16::from(dr)).ok()?;
        let col = u8::try_from(i16::from(self.col) + i16::from(dc)).ok()?;
        Self::new(row, col)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = char::from(b'a' + self.col);
        write!(f, "{}{}", file, BOARD_SIZE - self.row)
    }
}

/// A from/to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessMove {
    /// Origin square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
}

impl ChessMove {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for ChessMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 board of optional pieces, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChessBoard {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessBoard {
    /// Standard starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(*kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(*kind, Color::White));
        }
        board
    }

    /// Board with no pieces. Used to set up positions.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Place `piece` on `square`, replacing whatever was there.
    #[must_use]
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        *self.slot(square) = Some(piece);
        self
    }

    /// Piece on `square`.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[usize::from(square.row)][usize::from(square.col)]
    }

    fn slot(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.squares[usize::from(square.row)][usize::from(square.col)]
    }

    /// Checks if `square` is empty.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    /// Square holding the king of `color`, if it is still on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Move a piece without any legality check. Returns the captured piece.
    pub(crate) fn move_piece(&mut self, mv: ChessMove) -> Option<Piece> {
        let piece = self.slot(mv.from).take();
        std::mem::replace(self.slot(mv.to), piece)
    }
}

impl std::fmt::Display for ChessBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: String = (0..BOARD_SIZE)
                .filter_map(|col| Square::new(row, col))
                .map(|sq| self.get(sq).map_or('.', Piece::letter))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
        assert_eq!(sq(0, 0).offset(-1, 0), None);
        assert_eq!(sq(3, 3).offset(2, -1), Some(sq(5, 2)));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_square_display() {
        assert_eq!(sq(7, 4).to_string(), "e1");
        assert_eq!(sq(0, 0).to_string(), "a8");
        assert_eq!(ChessMove::new(sq(6, 4), sq(4, 4)).to_string(), "e2e4");
    }

    #[test]
    fn test_initial_layout() {
        let board = ChessBoard::new();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.king_square(Color::White), Some(sq(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(sq(0, 4)));
        assert_eq!(board.get(sq(6, 0)), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.get(sq(0, 3)), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert!(board.is_empty(sq(4, 4)));
    }

    #[test]
    fn test_display() {
        let text = ChessBoard::new().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "rnbqkbnr");
        assert_eq!(lines[4], "........");
        assert_eq!(lines[7], "RNBQKBNR");
    }

    #[test]
    fn test_move_piece_returns_capture() {
        let mut board = ChessBoard::empty()
            .with_piece(sq(4, 4), Piece::new(PieceKind::Rook, Color::White))
            .with_piece(sq(0, 4), Piece::new(PieceKind::King, Color::Black));
        let captured = board.move_piece(ChessMove::new(sq(4, 4), sq(0, 4)));
        assert_eq!(captured, Some(Piece::new(PieceKind::King, Color::Black)));
        assert!(board.is_empty(sq(4, 4)));
        assert_eq!(board.king_square(Color::Black), None);
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(PieceKind::Pawn.value(), 1);
        assert_eq!(PieceKind::Knight.value(), 3);
        assert_eq!(PieceKind::Bishop.value(), 3);
        assert_eq!(PieceKind::Rook.value(), 5);
        assert_eq!(PieceKind::Queen.value(), 9);
        assert_eq!(PieceKind::King.value(), 100);
    }
}
