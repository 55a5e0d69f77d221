//! Configuration system for the reference model.
//!
//! This module defines the configuration structures used to parameterize the model.
//! It provides:
//! 1. **Defaults:** Baseline geometry constants (vector width, accumulator placement).
//! 2. **Structures:** Hierarchical config for the vector unit and general options.
//! 3. **Loading:** JSON text and file loaders with validation.
//!
//! Configuration is supplied as JSON by the host harness, or use `Config::default()`.

use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{
    ACCUMULATOR_BASE, LANE_BITS, NUM_VREGS, STRIPMINE_GROUP, VREG_ADDR_MASK,
};
use crate::common::error::ConfigError;

/// Default configuration constants for the model.
mod defaults {
    /// Default vector register width in bits (8 lanes).
    pub const VECTOR_BITS: u32 = 256;

    /// Default first register of the convolution accumulator bank.
    pub const ACCUMULATOR_BASE: u8 = super::ACCUMULATOR_BASE;
}

/// Vector widths the model supports.
const SUPPORTED_VECTOR_BITS: [u32; 3] = [128, 256, 512];

/// Root configuration structure containing all model settings.
///
/// # Examples
///
/// ```
/// use vref_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.vector.vector_bits, 256);
/// assert_eq!(config.lanes(), 8);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use vref_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_decode": true },
///     "vector": { "vector_bits": 512 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_decode);
/// assert_eq!(config.lanes(), 16);
/// assert_eq!(config.vector.accumulator_base, 48);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General model settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Vector unit geometry
    #[serde(default)]
    pub vector: VectorConfig,
}

impl Config {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or a validation error
    /// from [`Config::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks the geometry constraints.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::UnsupportedVectorWidth`] if the width is not 128, 256 or 512.
    /// * [`ConfigError::MisalignedAccumulator`] if the bank base is not 4-aligned.
    /// * [`ConfigError::AccumulatorOverflow`] if the bank runs past v63.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bits = self.vector.vector_bits;
        if !SUPPORTED_VECTOR_BITS.contains(&bits) {
            return Err(ConfigError::UnsupportedVectorWidth(bits));
        }
        let base = self.vector.accumulator_base;
        if base > VREG_ADDR_MASK || base % STRIPMINE_GROUP != 0 {
            return Err(ConfigError::MisalignedAccumulator(base));
        }
        let rows = self.lanes();
        if usize::from(base) + rows > NUM_VREGS {
            return Err(ConfigError::AccumulatorOverflow { base, rows });
        }
        Ok(())
    }

    /// Number of 32-bit lanes per vector register.
    pub fn lanes(&self) -> usize {
        (self.vector.vector_bits / LANE_BITS) as usize
    }
}

/// General model settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event for every decoded instruction
    #[serde(default)]
    pub trace_decode: bool,
}

/// Vector unit geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorConfig {
    /// Vector register width in bits (128, 256 or 512)
    #[serde(default = "VectorConfig::default_vector_bits")]
    pub vector_bits: u32,

    /// First register of the convolution accumulator bank
    #[serde(default = "VectorConfig::default_accumulator_base")]
    pub accumulator_base: u8,
}

impl VectorConfig {
    /// Returns the default vector width in bits.
    fn default_vector_bits() -> u32 {
        defaults::VECTOR_BITS
    }

    /// Returns the default accumulator bank base register.
    fn default_accumulator_base() -> u8 {
        defaults::ACCUMULATOR_BASE
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            vector_bits: defaults::VECTOR_BITS,
            accumulator_base: defaults::ACCUMULATOR_BASE,
        }
    }
}
