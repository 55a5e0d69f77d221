//! Global Model Constants.
//!
//! This module defines constants shared across the model. It includes:
//! 1. **Register File:** Register count and address masks.
//! 2. **Lane Geometry:** Lane width and the supported lane-count range.
//! 3. **Operand Ports:** Source and destination port counts of the ALU.
//! 4. **Accumulator Bank:** Default placement of the convolution accumulator.

/// Number of architectural vector registers.
pub const NUM_VREGS: usize = 64;

/// Mask applied to every 6-bit vector register address.
pub const VREG_ADDR_MASK: u8 = 0x3F;

/// Width of one lane in bits.
pub const LANE_BITS: u32 = 32;

/// Smallest supported lane count (128-bit vectors).
pub const MIN_LANES: usize = 4;

/// Largest supported lane count (512-bit vectors).
pub const MAX_LANES: usize = 16;

/// Registers in one stripmine group.
pub const STRIPMINE_GROUP: u8 = 4;

/// Mask that clears the member bits of a register address, leaving the group base.
pub const GROUP_BASE_MASK: u8 = !(STRIPMINE_GROUP - 1);

/// Number of vector source ports (vs, vt, vu, vx, vy, vz).
pub const SRC_PORTS: usize = 6;

/// Number of vector destination ports (vd, ve, vf, vg).
pub const DST_PORTS: usize = 4;

/// First register of the convolution accumulator bank.
pub const ACCUMULATOR_BASE: u8 = 48;

/// Number of accumulator rows driven by the depthwise convolution engine.
pub const DWCONV_ROWS: usize = 4;

/// Number of taps in the depthwise convolution window.
pub const DWCONV_TAPS: usize = 3;
