//! Vector/matrix ISA reference model.
//!
//! This crate implements the golden model that hardware output for a 64-register
//! vector/matrix extension is checked against:
//! 1. **ISA:** The ordered opcode table, format handlers and the bit-exact decoder.
//! 2. **Hazards:** Read/write activity masks over the 64-entry register file.
//! 3. **Scoreboard:** Parity-based completion tags for in-flight writes.
//! 4. **VALU:** The SIMD functional model, including the convolution engine.
//! 5. **Simulation:** A single-lane issue loop tying the stages together, plus statistics.

/// Common types and constants (register file, limits, errors).
pub mod common;
/// Model configuration (vector width, accumulator bank placement, tracing).
pub mod config;
/// Hazard model, completion-tag scoreboard and functional units.
pub mod core;
/// Instruction set (encoding, opcode table, handlers, decoder, disassembler).
pub mod isa;
/// Single-lane issue loop over an owned register file.
pub mod sim;
/// Model statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// SIMD functional unit; construct with `Valu::new`.
pub use crate::core::units::valu::Valu;
/// Table-scanning decoder; construct with `Decoder::new`.
pub use crate::isa::decode::Decoder;
/// Decoded operation descriptor.
pub use crate::isa::operation::Operation;
/// End-to-end model instance; construct with `VectorModel::new`.
pub use crate::sim::VectorModel;
