//! Core model components.
//!
//! This module contains the issue-side bookkeeping (hazard masks and the
//! completion-tag scoreboard) and the functional units that compute results.

/// Register read/write activity masks.
pub mod hazard;

/// Parity-based completion-tag scoreboard.
pub mod scoreboard;

/// Functional units (SIMD ALU and convolution engine).
pub mod units;

pub use self::scoreboard::TagScoreboard;
