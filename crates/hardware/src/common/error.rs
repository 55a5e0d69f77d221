//! Error definitions.
//!
//! The model core has no recoverable errors: a non-matching decode is a normal
//! outcome and contract violations panic. The only fallible boundary is loading
//! and validating a [`Config`](crate::config::Config).

use thiserror::Error;

/// Errors raised while loading or validating a model configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The vector width is not one of the supported widths.
    #[error("unsupported vector width {0} bits (expected 128, 256 or 512)")]
    UnsupportedVectorWidth(u32),

    /// The accumulator bank does not fit in the register file.
    #[error("accumulator bank at v{base} with {rows} rows exceeds the 64-entry register file")]
    AccumulatorOverflow {
        /// First register of the bank.
        base: u8,
        /// Rows in the bank (one per lane).
        rows: usize,
    },

    /// The accumulator bank does not start on a stripmine-group boundary.
    #[error("accumulator base v{0} is not aligned to a 4-register group")]
    MisalignedAccumulator(u8),
}
