//! Execution units and functional components.
//!
//! The vector model has a single execution unit: the SIMD ALU, which also
//! owns the convolution engine's datapath.

/// SIMD vector ALU and convolution engine.
pub mod valu;
