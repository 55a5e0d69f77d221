//! Vector Function Codes (func2, bits 31-26).
//!
//! Each format family selects its opcode from the func2 field. Variants that
//! differ only in the sub-format bits share one base code; the table marks
//! those bits as don't-care.

/// Sub-format bit selecting unsigned operands.
pub const F2_UNSIGNED: u8 = 0b001;

/// Sub-format bit selecting round-to-nearest.
pub const F2_ROUND: u8 = 0b010;

/// Load/store sub-format bit: the scalar `data` operand supplies a length.
pub const F2_LENGTH: u8 = 0b001;

/// Load/store sub-format bit: the scalar `data` operand supplies a stride.
pub const F2_STRIDE: u8 = 0b010;

/// Load/store sub-format bit: the address register is post-incremented.
pub const F2_POST_INC: u8 = 0b100;

/// Match every bit of func2.
pub const EXACT: u32 = 0b111111;

/// Bit 0 (unsigned) is don't-care.
pub const DC_U: u32 = 0b111110;

/// Bit 1 (round) is don't-care.
pub const DC_R: u32 = 0b111101;

/// Bits 1-0 (round, unsigned) are don't-care.
pub const DC_RU: u32 = 0b111100;

/// Bits 2-0 are don't-care.
pub const DC_LOW3: u32 = 0b111000;

/// Format0: arithmetic, compares and min/max.
pub mod format0 {
    /// Wrapping add.
    pub const VADD: u32 = 0;
    /// Wrapping subtract.
    pub const VSUB: u32 = 1;
    /// Reverse subtract.
    pub const VRSUB: u32 = 2;
    /// Equal.
    pub const VEQ: u32 = 6;
    /// Not equal.
    pub const VNE: u32 = 7;
    /// Less than (bit 0 unsigned).
    pub const VLT: u32 = 8;
    /// Less or equal.
    pub const VLE: u32 = 10;
    /// Greater than.
    pub const VGT: u32 = 12;
    /// Greater or equal.
    pub const VGE: u32 = 14;
    /// Absolute difference.
    pub const VABSD: u32 = 16;
    /// Maximum.
    pub const VMAX: u32 = 18;
    /// Minimum.
    pub const VMIN: u32 = 20;
    /// Three-input add, accumulating into the destination.
    pub const VADD3: u32 = 24;
}

/// Format1: logic, bit manipulation and moves.
pub mod format1 {
    /// Bitwise AND.
    pub const VAND: u32 = 0;
    /// Bitwise OR.
    pub const VOR: u32 = 1;
    /// Bitwise XOR.
    pub const VXOR: u32 = 2;
    /// Bitwise NOT (unary).
    pub const VNOT: u32 = 3;
    /// Generalized bit reverse.
    pub const VREV: u32 = 4;
    /// Rotate right.
    pub const VROR: u32 = 5;
    /// Count leading sign bits (unary).
    pub const VCLB: u32 = 8;
    /// Count leading zeros (unary).
    pub const VCLZ: u32 = 9;
    /// Population count (unary).
    pub const VCPOP: u32 = 10;
    /// Move (unary).
    pub const VMV: u32 = 12;
    /// Paired move over four registers.
    pub const VMVP: u32 = 13;
}

/// Format2: shifts.
pub mod format2 {
    /// Shift left logical.
    pub const VSLL: u32 = 1;
    /// Shift right arithmetic.
    pub const VSRA: u32 = 2;
    /// Shift right logical.
    pub const VSRL: u32 = 3;
    /// Bidirectional arithmetic shift (bit 1 round).
    pub const VSHA: u32 = 8;
    /// Bidirectional logical shift (bit 1 round).
    pub const VSHL: u32 = 9;
    /// Paired bidirectional arithmetic shift.
    pub const VSHAP: u32 = 12;
}

/// Format3: multiplies.
pub mod format3 {
    /// Wrapping multiply.
    pub const VMUL: u32 = 0;
    /// Paired wrapping multiply.
    pub const VMULP: u32 = 1;
    /// Saturating multiply (bit 0 unsigned).
    pub const VMULS: u32 = 2;
    /// Widening multiply.
    pub const VMULW: u32 = 4;
    /// Multiply high (bit 1 round, bit 0 unsigned).
    pub const VMULH: u32 = 8;
    /// Paired multiply high.
    pub const VMULHP: u32 = 12;
    /// Saturating doubling multiply high (bit 1 round).
    pub const VDMULH: u32 = 16;
    /// Multiply-accumulate.
    pub const VMACC: u32 = 20;
    /// Multiply-add.
    pub const VMADD: u32 = 21;
}

/// Format4: widening, pairwise and halving arithmetic.
pub mod format4 {
    /// Widening add.
    pub const VADDW: u32 = 0;
    /// Widening subtract.
    pub const VSUBW: u32 = 2;
    /// Widening accumulate.
    pub const VACC: u32 = 4;
    /// Pairwise widening add (unary).
    pub const VPADD: u32 = 8;
    /// Pairwise widening subtract (unary).
    pub const VPSUB: u32 = 10;
    /// Halving add (bit 1 round, bit 0 unsigned).
    pub const VHADD: u32 = 16;
    /// Halving subtract.
    pub const VHSUB: u32 = 20;
}

/// Format5: saturating arithmetic and narrowing shifts.
pub mod format5 {
    /// Saturating add (bit 0 unsigned).
    pub const VSADD: u32 = 0;
    /// Saturating subtract.
    pub const VSSUB: u32 = 2;
    /// Saturating narrowing shift to half width.
    pub const VSRANS: u32 = 8;
    /// Saturating narrowing shift to quarter width.
    pub const VSRAQS: u32 = 12;
}

/// Format6: slides, select and permutes.
pub mod format6 {
    /// Vertical slide to next (bits 1-0 give the count minus one).
    pub const VSLIDEVN: u32 = 0;
    /// Vertical slide to previous.
    pub const VSLIDEVP: u32 = 4;
    /// Horizontal slide to next.
    pub const VSLIDEHN: u32 = 8;
    /// Horizontal slide to previous.
    pub const VSLIDEHP: u32 = 12;
    /// Per-element select.
    pub const VSEL: u32 = 16;
    /// Even elements of the concatenated pair.
    pub const VEVN: u32 = 24;
    /// Odd elements of the concatenated pair.
    pub const VODD: u32 = 25;
    /// Even and odd elements into a register pair.
    pub const VEVNODD: u32 = 26;
    /// Interleave into a register pair.
    pub const VZIP: u32 = 28;
}

/// Load/store family (func1 7, bits 5-3 of func2 select the kind).
pub mod ldst {
    /// Vector load.
    pub const VLD: u32 = 0b000_000;
    /// Vector store.
    pub const VST: u32 = 0b001_000;
    /// Scalar duplicate into every element.
    pub const VDUP: u32 = 0b010_000;
    /// Quad store of four quarter-register transfers.
    pub const VSTQ: u32 = 0b011_000;
}
