//! Common utilities and types used throughout the reference model.
//!
//! This module provides the building blocks shared by the decoder, hazard model and
//! functional units:
//! 1. **Constants:** Register-file geometry, lane limits and the accumulator bank base.
//! 2. **Error Handling:** The configuration error type.
//! 3. **Register Storage:** A lane-addressed vector register file.

/// Common constants used throughout the model.
pub mod constants;

/// Error types.
pub mod error;

/// Vector register file implementation.
pub mod reg;

pub use constants::{NUM_VREGS, VREG_ADDR_MASK};
pub use error::ConfigError;
pub use reg::VRegFile;
