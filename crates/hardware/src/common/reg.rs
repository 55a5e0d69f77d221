//! Vector Register File.
//!
//! This module provides `VRegFile`, the 64-entry register file owned by the
//! in-crate issue loop. It provides:
//! 1. **Storage:** `NUM_VREGS` registers of `lanes` 32-bit words each.
//! 2. **Access:** Lane-slice reads and whole-register writes, addressed modulo 64.

use crate::common::constants::{NUM_VREGS, VREG_ADDR_MASK};

/// Lane-addressed vector register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VRegFile {
    lanes: usize,
    regs: Vec<Vec<u32>>,
}

impl VRegFile {
    /// Creates a register file with every lane of every register cleared.
    ///
    /// # Arguments
    ///
    /// * `lanes` - Number of 32-bit lanes per register.
    pub fn new(lanes: usize) -> Self {
        Self {
            lanes,
            regs: vec![vec![0; lanes]; NUM_VREGS],
        }
    }

    /// Number of 32-bit lanes per register.
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Returns the lanes of register `idx` (taken modulo 64).
    pub fn read(&self, idx: u8) -> &[u32] {
        &self.regs[usize::from(idx & VREG_ADDR_MASK)]
    }

    /// Overwrites register `idx` (taken modulo 64).
    ///
    /// Lanes beyond `value.len()` are left untouched; extra input lanes are ignored.
    pub fn write(&mut self, idx: u8, value: &[u32]) {
        let reg = &mut self.regs[usize::from(idx & VREG_ADDR_MASK)];
        for (dst, src) in reg.iter_mut().zip(value) {
            *dst = *src;
        }
    }

    /// Fills every lane of register `idx` with `word`.
    pub fn splat(&mut self, idx: u8, word: u32) {
        self.regs[usize::from(idx & VREG_ADDR_MASK)].fill(word);
    }
}
