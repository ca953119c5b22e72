//! Chess variant integration tests: movement rules, king capture, search.

use duel_engine::games::chess::{rules, search};
use duel_engine::{
    Chess, ChessBoard, ChessMove, Color, EngineConfig, GameEngine, GameRng, GameSession,
    GameVariant, MoveErrorKind, Outcome, Piece, PieceKind, Seat, SearchStats, Session, SessionMove, Square,
};
use proptest::prelude::*;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

/// Bare kings plus a white rook that can take the black king next move.
fn rook_takes_king() -> ChessBoard {
    ChessBoard::empty()
        .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
        .with_piece(sq(4, 0), Piece::new(PieceKind::Rook, Color::White))
        .with_piece(sq(4, 7), Piece::new(PieceKind::King, Color::Black))
}

// =============================================================================
// King Capture
// =============================================================================

#[test]
fn test_king_capture_ends_game_for_human() {
    let mut game = GameSession::with_board(Chess::default(), rook_takes_king(), Color::White, true);
    let mut rng = GameRng::new(0);

    let outcome = game.apply_human_move(ChessMove::new(sq(4, 0), sq(4, 7)), &mut rng);
    assert_eq!(outcome, Outcome::Win(Color::White));
    // No engine reply once the game is decided.
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.take_result(), Some(Outcome::Win(Seat::Human)));

    // Further moves are ignored.
    let before = game.board().clone();
    game.apply_human_move(ChessMove::new(sq(7, 4), sq(6, 4)), &mut rng);
    assert_eq!(game.board(), &before);
}

#[test]
fn test_engine_takes_king_at_every_depth() {
    // Black rook on the same file as the white king, nothing in between.
    let board = ChessBoard::empty()
        .with_piece(sq(7, 4), Piece::new(PieceKind::King, Color::White))
        .with_piece(sq(2, 4), Piece::new(PieceKind::Rook, Color::Black))
        .with_piece(sq(0, 0), Piece::new(PieceKind::King, Color::Black))
        .with_piece(sq(5, 5), Piece::new(PieceKind::Queen, Color::White));

    for depth in 1..=3 {
        let mut game = GameSession::with_board(Chess::new(depth), board.clone(), Color::Black, false);
        let mut rng = GameRng::new(0);
        let (mv, outcome) = game.engine_move(&mut rng).unwrap();
        assert_eq!(mv, ChessMove::new(sq(2, 4), sq(7, 4)), "depth {depth}");
        assert_eq!(outcome, Outcome::Win(Color::Black));
        assert_eq!(game.take_result(), Some(Outcome::Win(Seat::Engine)));
    }
}

#[test]
fn test_apply_then_terminal() {
    let game = Chess::default();
    let mut board = rook_takes_king();
    assert_eq!(game.terminal(&board), Outcome::InProgress);

    game.apply(&mut board, Color::White, ChessMove::new(sq(4, 0), sq(4, 7)));
    assert_eq!(game.terminal(&board), Outcome::Win(Color::White));
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_engine_replies_from_opening() {
    let mut session = Session::new(EngineConfig::default().with_variant(GameVariant::Chess));

    let outcome = session.apply_human_move(SessionMove::chess((6, 4), (4, 4)));
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(session.turn(), Seat::Human);

    let view = session.current_board();
    assert_eq!(view.history.len(), 2);
    let (seat, reply) = view.history[1];
    assert_eq!(seat, Seat::Engine);
    let SessionMove::Chess { from, .. } = reply else {
        panic!("expected a chess reply, got {reply:?}");
    };
    // Black pieces start on rows 0-1.
    assert!(from.0 <= 1);
    assert!(session.last_stats().nodes > 0);
}

#[test]
fn test_engine_grabs_hanging_queen() {
    let board = ChessBoard::new()
        .with_piece(sq(2, 3), Piece::new(PieceKind::Queen, Color::White));
    let mut stats = SearchStats::new();

    let (mv, score) = search::best_move(&board, Color::Black, 3, &mut stats).unwrap();
    assert_eq!(mv.to, sq(2, 3));
    assert!(score >= 0);
}

#[test]
fn test_search_leaves_board_untouched() {
    let board = ChessBoard::new();
    let mut stats = SearchStats::new();
    search::best_move(&board, Color::Black, 3, &mut stats);
    assert_eq!(board, ChessBoard::new());
}

#[test]
fn test_short_game_alternates_turns() {
    let mut session = Session::new(
        EngineConfig::default()
            .with_variant(GameVariant::Chess)
            .with_chess_depth(2),
    );

    for (from, to) in [((6, 4), (4, 4)), ((7, 6), (5, 5)), ((7, 5), (4, 2))] {
        let before = session.current_board().history.len();
        let outcome = session.apply_human_move(SessionMove::chess(from, to));
        if outcome.is_terminal() {
            break;
        }
        // The scripted move may have been made illegal by the reply; either
        // nothing happened or both sides moved.
        let after = session.current_board().history.len();
        assert!(after == before || after == before + 2);
        assert_eq!(session.turn(), Seat::Human);
    }
}

/// Black king in the corner behind two files of its own blocked pawns.
fn black_walled_in() -> ChessBoard {
    let mut board = ChessBoard::empty()
        .with_piece(sq(0, 0), Piece::new(PieceKind::King, Color::Black))
        .with_piece(sq(7, 7), Piece::new(PieceKind::King, Color::White));
    for row in 0..8u8 {
        if row != 0 {
            board = board.with_piece(sq(row, 0), Piece::new(PieceKind::Pawn, Color::Black));
        }
        board = board.with_piece(sq(row, 1), Piece::new(PieceKind::Pawn, Color::Black));
    }
    board
}

#[test]
fn test_engine_without_reply_holds_the_turn() {
    let mut game = GameSession::with_board(Chess::default(), black_walled_in(), Color::White, true);
    let mut rng = GameRng::new(0);

    let outcome = game.apply_human_move(ChessMove::new(sq(7, 7), sq(6, 7)), &mut rng);
    assert_eq!(outcome, Outcome::InProgress);
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.history().len(), 1);
    assert!(game.engine_move(&mut rng).is_none());

    // No stalemate rule: the game neither ends nor hands the turn back.
    let err = game
        .try_human_move(ChessMove::new(sq(6, 7), sq(5, 7)), &mut rng)
        .unwrap_err();
    assert_eq!(err.kind, MoveErrorKind::NotYourTurn);
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.take_result(), None);

    game.reset();
    assert_eq!(game.turn(), Color::White);
    assert_eq!(game.board(), &ChessBoard::new());
}

// =============================================================================
// Movement Properties
// =============================================================================

const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

fn slider() -> impl Strategy<Value = (PieceKind, (i8, i8))> {
    prop_oneof![
        (0..4usize).prop_map(|i| (PieceKind::Rook, ROOK_DIRS[i])),
        (0..4usize).prop_map(|i| (PieceKind::Bishop, BISHOP_DIRS[i])),
        (0..8usize).prop_map(|i| {
            let dir = if i < 4 { ROOK_DIRS[i] } else { BISHOP_DIRS[i - 4] };
            (PieceKind::Queen, dir)
        }),
    ]
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_slider_blocked_by_any_intermediate(
        (kind, (dr, dc)) in slider(),
        row in 0..8u8,
        col in 0..8u8,
        dist_seed in any::<u8>(),
        block_seed in any::<u8>(),
        blocker_color in color(),
    ) {
        let from = sq(row, col);
        let max_steps = (1..8i8).take_while(|&k| from.offset(dr * k, dc * k).is_some()).count() as i8;
        prop_assume!(max_steps >= 2);

        let distance = 2 + (dist_seed as i8).rem_euclid(max_steps - 1);
        let blocker_at = 1 + (block_seed as i8).rem_euclid(distance - 1);
        let to = from.offset(dr * distance, dc * distance).unwrap();
        let blocker = from.offset(dr * blocker_at, dc * blocker_at).unwrap();

        let open = ChessBoard::empty().with_piece(from, Piece::new(kind, Color::White));
        prop_assert!(rules::is_legal_move(&open, from, to, Color::White));

        let blocked = open.with_piece(blocker, Piece::new(PieceKind::Pawn, blocker_color));
        prop_assert!(!rules::is_legal_move(&blocked, from, to, Color::White));
    }

    #[test]
    fn prop_knight_ignores_blockers(
        row in 0..8u8,
        col in 0..8u8,
        jump in 0..8usize,
        mover in color(),
    ) {
        let from = sq(row, col);
        let (dr, dc) = KNIGHT_JUMPS[jump];
        let to = from.offset(dr, dc);
        prop_assume!(to.is_some());
        let to = to.unwrap();

        // Surround the knight with enemy pawns on every neighbouring square.
        let mut board = ChessBoard::empty().with_piece(from, Piece::new(PieceKind::Knight, mover));
        for ndr in -1..=1i8 {
            for ndc in -1..=1i8 {
                if (ndr, ndc) == (0, 0) {
                    continue;
                }
                if let Some(n) = from.offset(ndr, ndc) {
                    board = board.with_piece(n, Piece::new(PieceKind::Pawn, mover.opponent()));
                }
            }
        }

        prop_assert!(rules::is_legal_move(&board, from, to, mover));
    }

    #[test]
    fn prop_generated_moves_never_land_on_own_piece(
        opening in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        let game = Chess::default();
        let mut board = game.initial_board();
        let mut side = Color::White;

        for choice in opening {
            let moves = game.legal_moves(&board, side);
            prop_assume!(!moves.is_empty());
            let mv = moves[choice % moves.len()];
            prop_assert_ne!(board.get(mv.to).map(|p| p.color), Some(side));
            game.apply(&mut board, side, mv);
            side = side.opponent();
        }
    }
}
