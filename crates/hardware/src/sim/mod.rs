//! Single-lane issue loop.
//!
//! Ties the decoder, scoreboard and functional units together over an owned
//! register file so hazards, tags and ALU results can be checked end to end.

/// The issue loop and its owned architectural state.
pub mod model;

pub use self::model::VectorModel;
