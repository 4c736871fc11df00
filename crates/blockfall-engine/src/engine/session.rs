use crate::{
    HoldError, PieceBlockedError,
    core::{
        board::Board,
        shape::{ActivePiece, PieceKind},
    },
};

use super::{field::Field, piece_source::PieceSource, progress::Progress};

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

/// One run of the game, from the first spawn to game over.
///
/// The session owns the field and the progression and is driven by a front
/// end: one [`tick`](Self::tick) per fixed tick for gravity, input methods
/// for player intents, and read accessors for rendering. Once the state is
/// [`SessionState::GameOver`] every update is a no-op; the board stays
/// visible until [`restart`](Self::restart) replaces the whole session.
#[derive(Debug, Clone)]
pub struct Session {
    field: Field,
    progress: Progress,
    state: SessionState,
    ticks: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::with_field(Field::new())
    }

    /// Creates a session with a deterministic piece sequence.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_field(Field::with_source(PieceSource::with_seed(seed)))
    }

    fn with_field(field: Field) -> Self {
        Self {
            field,
            progress: Progress::new(),
            state: SessionState::Playing,
            ticks: 0,
        }
    }

    #[must_use]
    pub fn session_state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.field.board()
    }

    #[must_use]
    pub fn active_piece(&self) -> &ActivePiece {
        self.field.active_piece()
    }

    /// Where the falling piece would rest on a hard drop; never commits.
    #[must_use]
    pub fn ghost_piece(&self) -> ActivePiece {
        self.field.drop_position()
    }

    #[must_use]
    pub fn next_kind(&self) -> PieceKind {
        self.field.next_kind()
    }

    #[must_use]
    pub fn held_kind(&self) -> Option<PieceKind> {
        self.field.held_kind()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Advances the session by one tick.
    ///
    /// Every `fall_speed` ticks the falling piece descends one row; when the
    /// descent is blocked the piece locks, full rows clear and score, and
    /// the next piece spawns. No-op once the game is over.
    pub fn tick(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        self.ticks += 1;
        if self.ticks % u64::from(self.progress.fall_speed()) == 0
            && self.field.try_move(0, 1).is_err()
        {
            self.lock_active();
        }
    }

    pub fn try_move_left(&mut self) -> Result<(), PieceBlockedError> {
        if self.state.is_game_over() {
            return Err(PieceBlockedError);
        }
        self.field.try_move(-1, 0)
    }

    pub fn try_move_right(&mut self) -> Result<(), PieceBlockedError> {
        if self.state.is_game_over() {
            return Err(PieceBlockedError);
        }
        self.field.try_move(1, 0)
    }

    pub fn try_soft_drop(&mut self) -> Result<(), PieceBlockedError> {
        if self.state.is_game_over() {
            return Err(PieceBlockedError);
        }
        self.field.try_move(0, 1)
    }

    pub fn try_rotate(&mut self) -> Result<(), PieceBlockedError> {
        if self.state.is_game_over() {
            return Err(PieceBlockedError);
        }
        self.field.try_rotate()
    }

    pub fn try_hold(&mut self) -> Result<(), HoldError> {
        if self.state.is_game_over() {
            return Err(HoldError::PieceBlocked(PieceBlockedError));
        }
        self.field.try_hold()
    }

    /// Drops the falling piece to its resting row and locks it immediately,
    /// bypassing the gravity counter.
    pub fn hard_drop(&mut self) {
        if self.state.is_game_over() {
            return;
        }
        self.field.hard_drop();
        self.lock_active();
    }

    /// Replaces the session wholesale with a fresh one. Honored only once
    /// the game is over; a restart request mid-game is ignored.
    pub fn restart(&mut self) {
        if self.state.is_game_over() {
            *self = Self::new();
        }
    }

    fn lock_active(&mut self) {
        let (cleared, spawned) = self.field.lock_and_spawn();
        self.progress.record_lock(cleared);
        if spawned.is_err() {
            self.state = SessionState::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hard-drops pieces until the stack tops out. Center-stacked pieces
    /// never complete a 16-wide row, so this always ends in game over.
    fn play_to_game_over(session: &mut Session) {
        for _ in 0..1000 {
            if session.session_state().is_game_over() {
                return;
            }
            session.hard_drop();
        }
        panic!("session did not top out");
    }

    #[test]
    fn gravity_descends_once_per_fall_speed_ticks() {
        let mut session = Session::with_seed(3);
        for _ in 0..29 {
            session.tick();
        }
        assert_eq!(session.active_piece().y(), 0);
        session.tick();
        assert_eq!(session.active_piece().y(), 1);
    }

    #[test]
    fn inputs_move_the_piece_within_bounds() {
        let mut session = Session::with_seed(3);
        let x = session.active_piece().x();
        assert!(session.try_move_left().is_ok());
        assert!(session.try_move_right().is_ok());
        assert_eq!(session.active_piece().x(), x);
        assert!(session.try_soft_drop().is_ok());
        assert_eq!(session.active_piece().y(), 1);
    }

    #[test]
    fn hard_drop_locks_and_spawns_immediately() {
        let mut session = Session::with_seed(3);
        session.hard_drop();
        assert_eq!(session.progress().completed_pieces(), 1);
        assert_eq!(session.active_piece().y(), 0);
        assert!(session.session_state().is_playing());
    }

    #[test]
    fn gravity_locks_a_grounded_piece() {
        let mut session = Session::with_seed(3);
        // Let gravity carry the first piece all the way down and lock it.
        let mut guard = 0;
        while session.progress().completed_pieces() == 0 {
            session.tick();
            guard += 1;
            assert!(guard < 10_000, "piece never locked under gravity");
        }
        assert!(session.session_state().is_playing());
        assert_eq!(session.active_piece().y(), 0);
    }

    #[test]
    fn ghost_matches_soft_drop_resting_row() {
        let mut session = Session::with_seed(3);
        let ghost = session.ghost_piece();
        assert_eq!(session.active_piece().y(), 0);

        while session.try_soft_drop().is_ok() {}
        assert_eq!(session.active_piece().y(), ghost.y());
        assert_eq!(session.active_piece().x(), ghost.x());
    }

    #[test]
    fn hold_is_gated_until_next_lock() {
        let mut session = Session::with_seed(3);
        assert!(session.try_hold().is_ok());
        assert!(session.try_hold().is_err());
        session.hard_drop();
        assert!(session.try_hold().is_ok());
    }

    #[test]
    fn topping_out_ends_the_session() {
        let mut session = Session::with_seed(3);
        play_to_game_over(&mut session);
        assert!(session.session_state().is_game_over());
    }

    #[test]
    fn ticks_after_game_over_mutate_nothing() {
        let mut session = Session::with_seed(3);
        play_to_game_over(&mut session);

        let board = session.board().clone();
        let score = session.score();
        for _ in 0..200 {
            session.tick();
        }
        assert!(session.try_move_left().is_err());
        assert!(session.try_rotate().is_err());
        session.hard_drop();
        assert_eq!(session.board(), &board);
        assert_eq!(session.score(), score);
        assert!(session.session_state().is_game_over());
    }

    #[test]
    fn restart_is_refused_while_playing() {
        let mut session = Session::with_seed(3);
        session.hard_drop();
        let pieces = session.progress().completed_pieces();
        session.restart();
        assert_eq!(session.progress().completed_pieces(), pieces);
        assert!(session.session_state().is_playing());
    }

    #[test]
    fn restart_after_game_over_is_a_fresh_session() {
        let mut session = Session::with_seed(3);
        play_to_game_over(&mut session);
        session.restart();

        assert!(session.session_state().is_playing());
        assert_eq!(session.score(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.board(), &Board::new());
        assert!(session.held_kind().is_none());
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let mut a = Session::with_seed(11);
        let mut b = Session::with_seed(11);
        for _ in 0..20 {
            assert_eq!(a.active_piece().kind(), b.active_piece().kind());
            assert_eq!(a.next_kind(), b.next_kind());
            a.hard_drop();
            b.hard_drop();
        }
        assert_eq!(a.score(), b.score());
    }
}
