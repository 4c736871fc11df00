use crate::{
    HoldError, PieceBlockedError,
    core::{
        board::Board,
        shape::{ActivePiece, PieceKind},
    },
};

use super::piece_source::PieceSource;

/// Single-turn game state: the board, the falling piece, and the next/held
/// piece slots.
///
/// Every mutation validates the candidate placement against the board before
/// committing; a rejected operation leaves the field untouched. Timing,
/// scoring, and game-over bookkeeping live in [`Session`](super::Session).
#[derive(Debug, Clone)]
pub struct Field {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    held: Option<PieceKind>,
    hold_used: bool,
    source: PieceSource,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Field {
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(PieceSource::new())
    }

    /// Creates a field drawing pieces from `source`. The first draw becomes
    /// the falling piece, the second fills the next slot.
    #[must_use]
    pub fn with_source(mut source: PieceSource) -> Self {
        let active = ActivePiece::spawn(source.draw());
        let next = source.draw();
        Self {
            board: Board::new(),
            active,
            next,
            held: None,
            hold_used: false,
            source,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn active_piece(&self) -> &ActivePiece {
        &self.active
    }

    #[must_use]
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    #[must_use]
    pub fn held_kind(&self) -> Option<PieceKind> {
        self.held
    }

    #[must_use]
    pub fn is_hold_used(&self) -> bool {
        self.hold_used
    }

    /// Attempts to translate the falling piece by `(dx, dy)`.
    ///
    /// Commits and returns `Ok` when the candidate placement is occupiable;
    /// otherwise the piece stays where it is. Used uniformly for left, right,
    /// soft drop, and the gravity step.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> Result<(), PieceBlockedError> {
        let moved = self.active.translated(dx, dy);
        if !self.board.is_occupiable(moved.shape(), moved.x(), moved.y()) {
            return Err(PieceBlockedError);
        }
        self.active = moved;
        Ok(())
    }

    /// Attempts to rotate the falling piece 90 degrees clockwise in place.
    ///
    /// No wall kicks: the anchor stays fixed, and rotation simply fails when
    /// the rotated shape would poke outside the grid or into locked cells.
    pub fn try_rotate(&mut self) -> Result<(), PieceBlockedError> {
        let rotated = self.active.rotated();
        if !self.board.is_occupiable(rotated.shape(), rotated.x(), rotated.y()) {
            return Err(PieceBlockedError);
        }
        self.active = rotated;
        Ok(())
    }

    /// Drops the falling piece straight down to its resting row and returns
    /// that row. The caller decides when to lock.
    pub fn hard_drop(&mut self) -> i32 {
        while self.try_move(0, 1).is_ok() {}
        self.active.y()
    }

    /// Computes where the falling piece would rest on a hard drop, without
    /// committing anything. Used for the ghost piece.
    #[must_use]
    pub fn drop_position(&self) -> ActivePiece {
        let mut dropped = self.active.clone();
        loop {
            let candidate = dropped.translated(0, 1);
            if !self.board.is_occupiable(candidate.shape(), candidate.x(), candidate.y()) {
                return dropped;
            }
            dropped = candidate;
        }
    }

    /// Holds the falling piece, gated to once per lock.
    ///
    /// The first hold stores the falling piece's kind and promotes the next
    /// slot (drawing a fresh next); later holds swap with the stored kind.
    /// The incoming piece respawns at the spawn anchor and is validated
    /// there first: a colliding swap is rejected with no state change.
    pub fn try_hold(&mut self) -> Result<(), HoldError> {
        if self.hold_used {
            return Err(HoldError::HoldUsed);
        }
        let incoming = ActivePiece::spawn(self.held.unwrap_or(self.next));
        if !self.board.is_occupiable(incoming.shape(), incoming.x(), incoming.y()) {
            return Err(HoldError::PieceBlocked(PieceBlockedError));
        }
        let released = self.active.kind();
        if self.held.take().is_none() {
            self.next = self.source.draw();
        }
        self.held = Some(released);
        self.active = incoming;
        self.hold_used = true;
        Ok(())
    }

    /// Locks the falling piece, clears full rows, and spawns the next piece.
    ///
    /// Returns the cleared-row count together with the spawn outcome: `Err`
    /// means the fresh piece collided at its spawn position, which the caller
    /// treats as game over. Hold becomes available again either way.
    pub fn lock_and_spawn(&mut self) -> (usize, Result<(), PieceBlockedError>) {
        self.board.lock(self.active.shape(), self.active.x(), self.active.y());
        let cleared = self.board.clear_full_rows();

        self.active = ActivePiece::spawn(self.next);
        self.next = self.source.draw();
        self.hold_used = false;

        if !self.board.is_occupiable(
            self.active.shape(),
            self.active.x(),
            self.active.y(),
        ) {
            return (cleared, Err(PieceBlockedError));
        }
        (cleared, Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_with(kind: PieceKind) -> Field {
        let mut field = Field::with_source(PieceSource::with_seed(1));
        field.active = ActivePiece::spawn(kind);
        field
    }

    #[test]
    fn moves_commit_only_when_occupiable() {
        let mut field = field_with(PieceKind::O);
        assert_eq!(field.active_piece().x(), 7);

        assert!(field.try_move(-1, 0).is_ok());
        assert_eq!(field.active_piece().x(), 6);

        // Walk into the left wall; the last step is rejected in place.
        for _ in 0..6 {
            assert!(field.try_move(-1, 0).is_ok());
        }
        assert!(field.try_move(-1, 0).is_err());
        assert_eq!(field.active_piece().x(), 0);
    }

    #[test]
    fn soft_drop_stops_at_the_floor() {
        let mut field = field_with(PieceKind::O);
        for _ in 0..38 {
            assert!(field.try_move(0, 1).is_ok());
        }
        assert!(field.try_move(0, 1).is_err());
        assert_eq!(field.active_piece().y(), 38);
    }

    #[test]
    fn hard_drop_returns_resting_row() {
        let mut field = field_with(PieceKind::I);
        // Horizontal I is one row tall and rests on the bottom row.
        assert_eq!(field.hard_drop(), 39);
        assert_eq!(field.active_piece().y(), 39);
    }

    #[test]
    fn drop_position_probes_without_committing() {
        let field = field_with(PieceKind::I);
        let ghost = field.drop_position();
        assert_eq!(ghost.y(), 39);
        assert_eq!(field.active_piece().y(), 0);
        assert_eq!(ghost.x(), field.active_piece().x());
    }

    #[test]
    fn rotation_fails_without_kicks_near_the_wall() {
        let mut field = field_with(PieceKind::I);
        // Vertical I hugging the right wall, near the floor.
        assert!(field.try_rotate().is_ok());
        while field.try_move(1, 0).is_ok() {}
        assert_eq!(field.active_piece().x(), 15);
        field.hard_drop();

        // Rotating back to horizontal would span x=15..19, outside the grid.
        assert!(field.try_rotate().is_err());
        assert_eq!(field.active_piece().shape().width(), 1);
    }

    #[test]
    fn rotation_blocked_by_locked_cells_keeps_shape() {
        // A locked cell at (6, 1) sits under the horizontal I's anchor and
        // blocks the vertical orientation there.
        let mut field = field_with(PieceKind::I);
        field.board = Board::from_ascii(
            "................\n\
             ......#.........",
        );
        assert!(field.try_rotate().is_err());
        assert_eq!(field.active_piece().shape().height(), 1);
    }

    #[test]
    fn first_hold_stores_kind_and_promotes_next() {
        let mut field = Field::with_source(PieceSource::with_seed(9));
        let original = field.active_piece().kind();
        let next = field.next_kind();

        assert!(field.try_hold().is_ok());
        assert_eq!(field.held_kind(), Some(original));
        assert_eq!(field.active_piece().kind(), next);
        assert_eq!(field.active_piece().y(), 0);
        assert!(field.is_hold_used());
    }

    #[test]
    fn second_hold_without_lock_is_rejected() {
        let mut field = Field::with_source(PieceSource::with_seed(9));
        assert!(field.try_hold().is_ok());
        assert!(matches!(field.try_hold(), Err(HoldError::HoldUsed)));
    }

    #[test]
    fn hold_swaps_after_a_lock() {
        let mut field = Field::with_source(PieceSource::with_seed(9));
        let first = field.active_piece().kind();
        assert!(field.try_hold().is_ok());

        field.hard_drop();
        let (_, spawned) = field.lock_and_spawn();
        assert!(spawned.is_ok());
        assert!(!field.is_hold_used());

        let falling = field.active_piece().kind();
        assert!(field.try_hold().is_ok());
        assert_eq!(field.held_kind(), Some(falling));
        assert_eq!(field.active_piece().kind(), first);
    }

    #[test]
    fn blocked_hold_swap_changes_nothing() {
        let mut field = Field::with_source(PieceSource::with_seed(9));
        assert!(field.try_hold().is_ok());
        field.hard_drop();
        let (_, spawned) = field.lock_and_spawn();
        assert!(spawned.is_ok());

        // Fill the whole spawn region so any swapped-in piece collides.
        field.board = Board::from_ascii(&format!(
            "{row}\n{row}",
            row = "#".repeat(Board::WIDTH),
        ));
        let before_active = field.active_piece().clone();
        let before_held = field.held_kind();
        assert!(matches!(
            field.try_hold(),
            Err(HoldError::PieceBlocked(_)),
        ));
        assert_eq!(field.active_piece(), &before_active);
        assert_eq!(field.held_kind(), before_held);
        assert!(!field.is_hold_used());
    }

    #[test]
    fn lock_and_spawn_clears_completed_rows() {
        // Four bottom rows complete except column 0; a vertical I dropped
        // down the gap clears all four at once.
        let empty_row = format!("{}\n", ".".repeat(Board::WIDTH));
        let gap_row = format!(".{}\n", "#".repeat(Board::WIDTH - 1));
        let board_art = empty_row.repeat(36) + &gap_row.repeat(4);

        let mut field = field_with(PieceKind::I);
        field.board = Board::from_ascii(&board_art);
        assert!(field.try_rotate().is_ok());
        while field.try_move(-1, 0).is_ok() {}
        assert_eq!(field.active_piece().x(), 0);
        assert_eq!(field.hard_drop(), 36);

        let (cleared, spawned) = field.lock_and_spawn();
        assert_eq!(cleared, 4);
        assert!(spawned.is_ok());
        assert_eq!(field.board(), &Board::new());
    }

    #[test]
    fn spawn_collision_reports_game_over() {
        // Row 0 columns 6..=9 cover the spawn cells of every kind.
        let art: String = (0..Board::WIDTH)
            .map(|x| if (6..=9).contains(&x) { '#' } else { '.' })
            .collect();
        let mut field = field_with(PieceKind::O);
        field.board = Board::from_ascii(&art);

        // Park the falling piece in the far-left corner so the lock itself
        // is clean; only the respawn afterwards collides.
        field.active = ActivePiece::spawn(PieceKind::O).translated(-7, 0);
        field.hard_drop();
        let (cleared, spawned) = field.lock_and_spawn();
        assert_eq!(cleared, 0);
        assert!(spawned.is_err());
    }
}
