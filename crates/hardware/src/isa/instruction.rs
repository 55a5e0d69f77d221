//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction functions for the 32-bit vector instruction word:
//!
//! ```text
//!  31      26 25     20 19     14 13 12 11      6  5  4    2 1  0
//! +----------+---------+---------+-----+---------+---+-------+----+
//! |  func2   |   vt    |   vs    | sz  |   vd    | m | func1 |form|
//! +----------+---------+---------+-----+---------+---+-------+----+
//! ```
//!
//! In the `.vx` form bits 24:20 name a scalar register (`xt`). In the `.vxv` form
//! bits 31:26 name a third vector register (`vu`) in place of `func2`.

/// Bit mask for the addressing-form field (bits 0-1).
pub const FORM_MASK: u32 = 0x3;
/// Bit shift for the func1 field.
pub const FUNC1_SHIFT: u32 = 2;
/// Bit mask for the func1 field (3 bits).
pub const FUNC1_MASK: u32 = 0x7;
/// Bit shift for the multi (stripmine) flag.
pub const M_SHIFT: u32 = 5;
/// Bit shift for the destination register field.
pub const VD_SHIFT: u32 = 6;
/// Bit shift for the element-size field.
pub const SZ_SHIFT: u32 = 12;
/// Bit mask for the element-size field (2 bits).
pub const SZ_MASK: u32 = 0x3;
/// Bit shift for the first source register field.
pub const VS_SHIFT: u32 = 14;
/// Bit shift for the second source register field.
pub const VT_SHIFT: u32 = 20;
/// Bit shift for the func2 field (also the `vu` field in `.vxv`).
pub const FUNC2_SHIFT: u32 = 26;
/// Bit mask for the func2 field (6 bits).
pub const FUNC2_MASK: u32 = 0x3F;
/// Bit mask for a 6-bit vector register field.
pub const VREG_MASK: u32 = 0x3F;
/// Bit mask for a 5-bit scalar register field.
pub const XREG_MASK: u32 = 0x1F;
/// Bit mask selecting the sub-format bits of func2.
pub const F2_MASK: u32 = 0x7;

/// Element-size field value reserved for future use; vetoes every table entry.
pub const SZ_RESERVED: u32 = 3;

/// Trait for extracting fields from an encoded vector instruction.
pub trait VectorBits {
    /// Extracts the addressing form (bits 0-1).
    fn form(&self) -> u32;

    /// Extracts the func1 format selector (bits 2-4).
    fn func1(&self) -> u32;

    /// Extracts the multi/stripmine flag (bit 5).
    fn multi(&self) -> bool;

    /// Extracts the destination register field (bits 6-11).
    fn vd(&self) -> u8;

    /// Extracts the raw element-size field (bits 12-13).
    fn sz(&self) -> u32;

    /// Extracts the first source register field (bits 14-19).
    fn vs(&self) -> u8;

    /// Extracts the scalar address register used by loads and stores (bits 14-18).
    fn xs1(&self) -> u8;

    /// Extracts the second vector source register field (bits 20-25).
    fn vt(&self) -> u8;

    /// Extracts the scalar operand register of the `.vx`/`.vxv` forms (bits 20-24).
    fn xt(&self) -> u8;

    /// Extracts the func2 opcode-family selector (bits 26-31).
    fn func2(&self) -> u32;

    /// Extracts the third vector register of the `.vxv` form (bits 26-31).
    fn vu(&self) -> u8;

    /// Extracts the 3-bit sub-format selector (the low bits of func2).
    fn f2(&self) -> u8;
}

impl VectorBits for u32 {
    #[inline(always)]
    fn form(&self) -> u32 {
        self & FORM_MASK
    }

    #[inline(always)]
    fn func1(&self) -> u32 {
        (self >> FUNC1_SHIFT) & FUNC1_MASK
    }

    #[inline(always)]
    fn multi(&self) -> bool {
        (self >> M_SHIFT) & 1 != 0
    }

    #[inline(always)]
    fn vd(&self) -> u8 {
        ((self >> VD_SHIFT) & VREG_MASK) as u8
    }

    #[inline(always)]
    fn sz(&self) -> u32 {
        (self >> SZ_SHIFT) & SZ_MASK
    }

    #[inline(always)]
    fn vs(&self) -> u8 {
        ((self >> VS_SHIFT) & VREG_MASK) as u8
    }

    #[inline(always)]
    fn xs1(&self) -> u8 {
        ((self >> VS_SHIFT) & XREG_MASK) as u8
    }

    #[inline(always)]
    fn vt(&self) -> u8 {
        ((self >> VT_SHIFT) & VREG_MASK) as u8
    }

    #[inline(always)]
    fn xt(&self) -> u8 {
        ((self >> VT_SHIFT) & XREG_MASK) as u8
    }

    #[inline(always)]
    fn func2(&self) -> u32 {
        (self >> FUNC2_SHIFT) & FUNC2_MASK
    }

    #[inline(always)]
    fn vu(&self) -> u8 {
        ((self >> FUNC2_SHIFT) & VREG_MASK) as u8
    }

    #[inline(always)]
    fn f2(&self) -> u8 {
        (self.func2() & F2_MASK) as u8
    }
}

/// Converts the element-size field to a byte count.
///
/// Returns `None` for the reserved encoding.
pub const fn element_bytes(sz: u32) -> Option<u8> {
    match sz {
        0 => Some(1),
        1 => Some(2),
        2 => Some(4),
        _ => None,
    }
}
