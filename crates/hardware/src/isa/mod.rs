//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the vector instruction encoding, the ordered opcode table, the
//! format handlers that bind operands, and the decoder that ties them together.
//!
//! # Families
//!
//! * Format0-6: SIMD ALU operations in `.vv` and `.vx` forms.
//! * Load/store: `vld`, `vst`, `vstq` and `vdup` (`.vx` form only).
//! * Convolution: `vdwconv` and the accumulator-bank operations (`.vxv` form).

/// Convolution control-word bit fields.
pub mod ctrl;

/// Table-driven instruction decoder.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// func2 function codes per format family.
pub mod func2;

/// Format handlers that populate an [`operation::Operation`].
pub mod handlers;

/// Instruction field extraction.
pub mod instruction;

/// Opcode identifiers and dispatch queues.
pub mod op;

/// Addressing forms and func1 format selectors.
pub mod opcodes;

/// Decoded operation descriptor.
pub mod operation;

/// Ordered opcode table.
pub mod table;
