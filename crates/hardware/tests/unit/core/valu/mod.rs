//! # VALU Tests
//!
//! Decoded operations evaluated through the public `Valu` port contract.

/// ALU families: arithmetic, compares, shifts, multiplies, widening, permutes.
pub mod alu;

/// Convolution engine and accumulator bank.
pub mod conv;
