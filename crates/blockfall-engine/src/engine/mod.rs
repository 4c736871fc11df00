//! Game logic orchestrating the core data structures.
//!
//! - [`PieceSource`] - uniform random piece generation, seedable
//! - [`Field`] - single-turn state: board, falling piece, next/held slots
//! - [`Progress`] - score, level, and fall-speed progression
//! - [`Session`] - tick-driven state machine tying it all together
//!
//! A front end drives [`Session::tick`] once per fixed tick, forwards input
//! intents (move, rotate, soft/hard drop, hold, restart), and reads the
//! render-facing accessors each frame.

pub use self::{field::*, piece_source::*, progress::*, session::*};

mod field;
mod piece_source;
mod progress;
mod session;
