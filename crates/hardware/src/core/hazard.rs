//! Register Activity Masks.
//!
//! This module computes the 64-bit read/write activity masks that the issue
//! stage compares to detect hazards. Bit `i` of a mask means register `i` is
//! touched. It provides:
//! 1. **Single/Group Masks:** One register, or its whole 4-register stripmine group.
//! 2. **Offset Masks:** The second, third and fourth register of a widening or
//!    paired operand, at a distance of one group (stripmined) or one register.
//! 3. **Accumulator Mask:** The rows of the convolution accumulator bank.
//!
//! # Examples
//!
//! ```
//! use vref_core::core::hazard::{activity, activity2};
//!
//! assert_eq!(activity(5, false), 1 << 5);
//! assert_eq!(activity(5, true), 0xF << 4);
//! assert_eq!(activity2(5, true), 0xF << 8);
//! ```

use crate::common::constants::{GROUP_BASE_MASK, STRIPMINE_GROUP, VREG_ADDR_MASK};

/// Register distance between consecutive members of a multi-register operand.
pub const fn group_stride(multi: bool) -> u32 {
    if multi { STRIPMINE_GROUP as u32 } else { 1 }
}

/// Activity of the register (or stripmine group) at `base`.
///
/// With `multi`, the four registers of the group containing `base` are active.
pub const fn activity(base: u8, multi: bool) -> u64 {
    let b = base & VREG_ADDR_MASK;
    if multi {
        0xF << (b & GROUP_BASE_MASK)
    } else {
        1 << b
    }
}

const fn shifted(mask: u64, by: u32) -> u64 {
    if by < u64::BITS { mask << by } else { 0 }
}

/// Activity of the operand one stride past `base`.
///
/// Registers pushed beyond v63 drop out of the mask.
pub const fn activity2(base: u8, multi: bool) -> u64 {
    shifted(activity(base, multi), group_stride(multi))
}

/// Activity of the operand two strides past `base`.
///
/// Registers pushed beyond v63 drop out of the mask.
pub const fn activity3(base: u8, multi: bool) -> u64 {
    shifted(activity(base, multi), 2 * group_stride(multi))
}

/// Activity of the operand three strides past `base`.
///
/// Registers pushed beyond v63 drop out of the mask.
pub const fn activity4(base: u8, multi: bool) -> u64 {
    shifted(activity(base, multi), 3 * group_stride(multi))
}

/// Activity of the `rows`-row accumulator bank starting at `base`.
pub const fn accumulator_mask(base: u8, rows: usize) -> u64 {
    let span = if rows >= 64 { u64::MAX } else { (1 << rows) - 1 };
    span << (base & VREG_ADDR_MASK)
}
