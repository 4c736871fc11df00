//! Falling-block puzzle game core.
//!
//! The engine owns the whole game state machine: a fixed 16x40 board of
//! locked cells, the falling piece, the next/held piece slots, gravity,
//! line clearing, and score/level progression. It performs no I/O; a front
//! end drives [`Session::tick`] at a fixed rate, forwards input intents, and
//! reads the render-facing accessors each frame.
//!
//! ```
//! use blockfall_engine::Session;
//!
//! let mut session = Session::with_seed(42);
//! let _ = session.try_move_left();
//! session.tick();
//! assert!(session.session_state().is_playing());
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A move, rotation, or spawn was rejected because the candidate placement
/// overlaps a wall or a locked cell. The piece is left unchanged.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("piece blocked by wall or locked cells")]
pub struct PieceBlockedError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum HoldError {
    #[display("piece blocked when activating held piece")]
    PieceBlocked(PieceBlockedError),
    #[display("hold already used since last lock")]
    HoldUsed,
}
