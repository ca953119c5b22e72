//! Session owning whichever game is active, its RNG, and the score tally.

use std::time::Duration;

use im::Vector;
use tracing::{debug, instrument};

use super::controller::GameSession;
use super::scoreboard::Scoreboard;
use super::view::{BoardSnapshot, BoardView, SessionMove};
use crate::core::{Difficulty, EngineConfig, GameRng, GameVariant, RandomSource};
use crate::error::{MoveError, MoveErrorKind};
use crate::games::chess::Chess;
use crate::games::tictactoe::TicTacToe;
use crate::rules::{GameEngine, Outcome, Seat};
use crate::search::SearchStats;

#[derive(Clone, Debug)]
enum ActiveGame {
    TicTacToe(GameSession<TicTacToe>),
    Chess(GameSession<Chess>),
}

impl ActiveGame {
    fn build(config: &EngineConfig) -> Self {
        match config.variant {
            GameVariant::TicTacToe => ActiveGame::TicTacToe(GameSession::new(
                TicTacToe::new(config.difficulty, config.easy_random_chance),
                config.auto_reply,
            )),
            GameVariant::Chess => ActiveGame::Chess(GameSession::new(
                Chess::new(config.chess_depth),
                config.auto_reply,
            )),
        }
    }
}

fn seat_outcome<G: GameEngine>(game: &GameSession<G>) -> Outcome<Seat> {
    game.outcome().map(|side| game.engine().seat_of(side))
}

/// The engine as seen by the presentation layer.
///
/// Owns the live game and the random source. Every operation takes the
/// session by reference; there is no global state.
///
/// ```
/// use duel_engine::{Difficulty, EngineConfig, Outcome, Session, SessionMove};
///
/// let mut session = Session::new(EngineConfig::default().with_difficulty(Difficulty::Hard));
/// let outcome = session.apply_human_move(SessionMove::Cell(0));
/// assert_eq!(outcome, Outcome::InProgress);
/// ```
pub struct Session {
    config: EngineConfig,
    game: ActiveGame,
    rng: Box<dyn RandomSource>,
    scoreboard: Scoreboard,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("game", &self.game)
            .field("scoreboard", &self.scoreboard)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Start a session with the configured variant and a seeded `GameRng`.
    pub fn new(config: EngineConfig) -> Self {
        let rng = Box::new(GameRng::new(config.seed));
        Self {
            game: ActiveGame::build(&config),
            config,
            rng,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Replace the random source used by Easy mode.
    pub fn with_random_source<R: RandomSource + 'static>(mut self, source: R) -> Self {
        self.rng = Box::new(source);
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Game being played.
    pub fn variant(&self) -> GameVariant {
        self.config.variant
    }

    /// Tic-tac-toe strength.
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// How long the UI should wait before showing an engine reply.
    pub fn think_delay(&self) -> Duration {
        self.config.think_delay()
    }

    /// Who moves next.
    pub fn turn(&self) -> Seat {
        match &self.game {
            ActiveGame::TicTacToe(g) => g.engine().seat_of(g.turn()),
            ActiveGame::Chess(g) => g.engine().seat_of(g.turn()),
        }
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome<Seat> {
        match &self.game {
            ActiveGame::TicTacToe(g) => seat_outcome(g),
            ActiveGame::Chess(g) => seat_outcome(g),
        }
    }

    /// Finished-game tally.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Statistics from the engine's most recent search.
    pub fn last_stats(&self) -> &SearchStats {
        match &self.game {
            ActiveGame::TicTacToe(g) => g.engine().last_stats(),
            ActiveGame::Chess(g) => g.engine().last_stats(),
        }
    }

    /// Attempt a human move, reporting why it was rejected.
    ///
    /// On success the engine has already replied if `auto_reply` is set.
    #[instrument(skip(self))]
    pub fn try_human_move(&mut self, mv: SessionMove) -> Result<Outcome<Seat>, MoveError> {
        let rng = self.rng.as_mut();
        let outcome = match (&mut self.game, mv) {
            (ActiveGame::TicTacToe(g), SessionMove::Cell(cell)) => {
                g.try_human_move(cell, rng)?;
                seat_outcome(g)
            }
            (ActiveGame::Chess(g), SessionMove::Chess { from, to }) => {
                let mv = SessionMove::to_chess_move(from, to).map_err(MoveError::new)?;
                g.try_human_move(mv, rng)?;
                seat_outcome(g)
            }
            _ => return Err(MoveError::new(MoveErrorKind::VariantMismatch)),
        };
        self.collect_result();
        Ok(outcome)
    }

    /// Attempt a human move. Rejected moves are silent no-ops that return
    /// the unchanged outcome.
    pub fn apply_human_move(&mut self, mv: SessionMove) -> Outcome<Seat> {
        match self.try_human_move(mv) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(%err, "human move ignored");
                self.outcome()
            }
        }
    }

    /// Compute and apply the engine's reply.
    ///
    /// Returns `None` when it is not the engine's turn or the game is over.
    #[instrument(skip(self))]
    pub fn engine_move(&mut self) -> Option<(SessionMove, Outcome<Seat>)> {
        let rng = self.rng.as_mut();
        let reply = match &mut self.game {
            ActiveGame::TicTacToe(g) => g
                .engine_move(rng)
                .map(|(cell, _)| (SessionMove::Cell(cell), seat_outcome(g))),
            ActiveGame::Chess(g) => g
                .engine_move(rng)
                .map(|(mv, _)| (SessionMove::from(mv), seat_outcome(g))),
        };
        self.collect_result();
        reply
    }

    /// Read-only snapshot for rendering.
    pub fn current_board(&self) -> BoardView {
        let (board, history) = match &self.game {
            ActiveGame::TicTacToe(g) => (
                BoardSnapshot::TicTacToe(g.board().clone()),
                g.history()
                    .iter()
                    .map(|(side, cell)| (g.engine().seat_of(*side), SessionMove::Cell(*cell)))
                    .collect::<Vector<_>>(),
            ),
            ActiveGame::Chess(g) => (
                BoardSnapshot::Chess(g.board().clone()),
                g.history()
                    .iter()
                    .map(|(side, mv)| (g.engine().seat_of(*side), SessionMove::from(*mv)))
                    .collect::<Vector<_>>(),
            ),
        };

        BoardView {
            variant: self.config.variant,
            difficulty: self.config.difficulty,
            board,
            turn: self.turn(),
            outcome: self.outcome(),
            history,
        }
    }

    /// Start a fresh game of `variant` at `difficulty`. The tally is kept.
    pub fn reset(&mut self, variant: GameVariant, difficulty: Difficulty) {
        self.config.variant = variant;
        self.config.difficulty = difficulty;
        self.game = ActiveGame::build(&self.config);
        debug!(?variant, ?difficulty, "session reset");
    }

    /// Start a fresh game with the current settings.
    pub fn restart(&mut self) {
        self.reset(self.config.variant, self.config.difficulty);
    }

    /// Change tic-tac-toe strength without touching the board.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        match &mut self.game {
            ActiveGame::TicTacToe(g) => g.set_difficulty(difficulty),
            ActiveGame::Chess(g) => g.set_difficulty(difficulty),
        }
    }

    /// Clear the tally and start a fresh game.
    pub fn reset_score(&mut self) {
        self.scoreboard.reset();
        self.restart();
    }

    fn collect_result(&mut self) {
        let result = match &mut self.game {
            ActiveGame::TicTacToe(g) => g.take_result(),
            ActiveGame::Chess(g) => g.take_result(),
        };
        if let Some(outcome) = result {
            self.scoreboard.record(outcome);
        }
    }
}
