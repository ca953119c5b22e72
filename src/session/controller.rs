//! Turn-order controller written once against `GameEngine`.

use im::Vector;
use tracing::{debug, info, instrument, warn};

use crate::core::{Difficulty, RandomSource};
use crate::error::{MoveError, MoveErrorKind};
use crate::rules::{GameEngine, Outcome, Seat};

/// One game in progress.
///
/// Owns the live board. The human always moves first; after an accepted
/// human move the engine replies immediately when `auto_reply` is set,
/// otherwise the caller triggers the reply with [`GameSession::engine_move`].
#[derive(Clone, Debug)]
pub struct GameSession<G: GameEngine> {
    engine: G,
    board: G::Board,
    turn: G::Side,
    outcome: Outcome<G::Side>,
    history: Vector<(G::Side, G::Move)>,
    auto_reply: bool,
    reported: bool,
}

impl<G: GameEngine> GameSession<G> {
    /// Start a game on the engine's initial board.
    pub fn new(engine: G, auto_reply: bool) -> Self {
        let board = engine.initial_board();
        let turn = engine.human_side();
        Self {
            engine,
            board,
            turn,
            outcome: Outcome::InProgress,
            history: Vector::new(),
            auto_reply,
            reported: false,
        }
    }

    /// Resume from an arbitrary position with `turn` to move.
    ///
    /// The position is trusted as-is; its outcome is computed immediately.
    pub fn with_board(engine: G, board: G::Board, turn: G::Side, auto_reply: bool) -> Self {
        let outcome = engine.terminal(&board);
        Self {
            engine,
            board,
            turn,
            outcome,
            history: Vector::new(),
            auto_reply,
            reported: false,
        }
    }

    /// The rules/search engine.
    pub fn engine(&self) -> &G {
        &self.engine
    }

    /// Live board.
    pub fn board(&self) -> &G::Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> G::Side {
        self.turn
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome<G::Side> {
        self.outcome
    }

    /// Accepted moves of the current game, oldest first.
    pub fn history(&self) -> &Vector<(G::Side, G::Move)> {
        &self.history
    }

    /// Whether the engine replies inside `apply_human_move`.
    pub fn auto_reply(&self) -> bool {
        self.auto_reply
    }

    /// Change opponent strength for the following replies.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
    }

    /// Attempt a human move, reporting why it was rejected.
    ///
    /// The board is untouched on error.
    #[instrument(skip(self, rng))]
    pub fn try_human_move(
        &mut self,
        mv: G::Move,
        rng: &mut dyn RandomSource,
    ) -> Result<Outcome<G::Side>, MoveError> {
        let human = self.engine.human_side();
        if self.outcome.is_terminal() {
            return Err(MoveError::new(MoveErrorKind::GameOver));
        }
        if self.turn != human {
            return Err(MoveError::new(MoveErrorKind::NotYourTurn));
        }
        self.engine
            .check_move(&self.board, human, mv)
            .map_err(MoveError::new)?;

        self.play(human, mv);

        if self.auto_reply && !self.outcome.is_terminal() {
            self.engine_move(rng);
        }
        Ok(self.outcome)
    }

    /// Attempt a human move. Rejected moves leave everything unchanged and
    /// return the current outcome.
    pub fn apply_human_move(&mut self, mv: G::Move, rng: &mut dyn RandomSource) -> Outcome<G::Side> {
        match self.try_human_move(mv, rng) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(%err, "human move ignored");
                self.outcome
            }
        }
    }

    /// Compute and apply the engine's reply.
    ///
    /// Returns `None` when it is not the engine's turn or the game is over.
    ///
    /// Also returns `None` when the engine has no legal move on an undecided
    /// board (possible in chess, which has no stalemate). The turn stays with
    /// the engine and the outcome stays `InProgress`, so further human moves
    /// are rejected until [`GameSession::reset`].
    #[instrument(skip(self, rng))]
    pub fn engine_move(&mut self, rng: &mut dyn RandomSource) -> Option<(G::Move, Outcome<G::Side>)> {
        let side = self.engine.engine_side();
        if self.outcome.is_terminal() || self.turn != side {
            return None;
        }

        let Some(mv) = self.engine.best_move(&self.board, side, rng) else {
            warn!("engine has no legal reply");
            return None;
        };
        self.play(side, mv);
        Some((mv, self.outcome))
    }

    /// Back to the initial board with the human to move.
    pub fn reset(&mut self) {
        self.board = self.engine.initial_board();
        self.turn = self.engine.human_side();
        self.outcome = Outcome::InProgress;
        self.history = Vector::new();
        self.reported = false;
        debug!(variant = ?self.engine.variant(), "game reset");
    }

    /// The terminal outcome, handed out once per game.
    pub fn take_result(&mut self) -> Option<Outcome<Seat>> {
        if self.reported || !self.outcome.is_terminal() {
            return None;
        }
        self.reported = true;
        let engine = &self.engine;
        Some(self.outcome.map(|side| engine.seat_of(side)))
    }

    fn play(&mut self, side: G::Side, mv: G::Move) {
        self.engine.apply(&mut self.board, side, mv);
        self.history.push_back((side, mv));
        self.outcome = self.engine.terminal(&self.board);
        self.turn = self.engine.opponent(side);
        debug!(?side, ?mv, outcome = ?self.outcome, "move applied");

        if self.outcome.is_terminal() {
            info!(outcome = ?self.outcome, moves = self.history.len(), "game over");
        }
    }
}
