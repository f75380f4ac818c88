//! Block Catch game library
//!
//! Blocks fall, a paddle catches them, a missed block ends the round.  The
//! engine does the heavy lifting: Bevy runs the frame loop, states, timers and
//! input; Rapier moves the bodies and reports overlaps.

pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod host;
pub mod playfield;
pub mod round;
pub mod screen;
