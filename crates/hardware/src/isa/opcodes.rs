//! Vector Addressing Forms and Format Selectors.
//!
//! Defines the form field (bits 1-0) and the func1 selector (bits 4-2) that
//! together pick an opcode family.

/// Register-register form: the second operand is vector register `vt`.
pub const FORM_VV: u32 = 0b00;

/// Three-vector-plus-scalar form used by the convolution engine.
pub const FORM_VXV: u32 = 0b01;

/// Register-scalar form: the second operand is scalar register `xt`.
pub const FORM_VX: u32 = 0b10;

/// Arithmetic, compare and min/max family.
pub const FUNC1_FORMAT0: u32 = 0;

/// Logic, bit-manipulation and move family.
pub const FUNC1_FORMAT1: u32 = 1;

/// Shift family.
pub const FUNC1_FORMAT2: u32 = 2;

/// Multiply family.
pub const FUNC1_FORMAT3: u32 = 3;

/// Widening, pairwise and halving arithmetic family.
pub const FUNC1_FORMAT4: u32 = 4;

/// Saturating arithmetic and narrowing shift family.
pub const FUNC1_FORMAT5: u32 = 5;

/// Slide, select and permute family.
pub const FUNC1_FORMAT6: u32 = 6;

/// Load, store and scalar-duplicate family (`.vx` form only).
pub const FUNC1_LDST: u32 = 7;

/// Depthwise convolution (`.vxv` form).
pub const FUNC1_VDWCONV: u32 = 0;

/// Outer-product accumulate into the accumulator bank (`.vxv` form).
pub const FUNC1_ACONV: u32 = 1;

/// Accumulator row set (`.vxv` form).
pub const FUNC1_ACSET: u32 = 2;

/// Accumulator column (transpose) set (`.vxv` form).
pub const FUNC1_ACTR: u32 = 3;

/// Accumulator row clear (`.vxv` form).
pub const FUNC1_ACLR: u32 = 4;
