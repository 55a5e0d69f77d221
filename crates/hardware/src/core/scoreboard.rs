//! Parity-based completion-tag scoreboard.
//!
//! Keeps one parity bit per vector register. Every issued write flips the
//! parity of the registers it touches, so the 4-bit slice covering a source's
//! stripmine group identifies which outstanding write a read depends on. A
//! consumer waits until the completion tag reported by writeback equals the
//! tag captured at issue.

use crate::common::constants::{GROUP_BASE_MASK, VREG_ADDR_MASK};
use crate::isa::operation::Operation;

/// Returns the 4-bit tag of the stripmine group containing `addr`.
pub const fn group_tag(parity: u64, addr: u8) -> u8 {
    ((parity >> (addr & VREG_ADDR_MASK & GROUP_BASE_MASK)) & 0xF) as u8
}

/// Tags every valid source of `op` from `parity`, then flips the parity of
/// every register `op` writes.
///
/// Sources are tagged before the flip, so an operation that reads and writes
/// the same register sees the tag of the previous writer.
pub fn update_tags(op: &mut Operation, parity: &mut u64) {
    for src in op.src.iter_mut().filter(|s| s.valid) {
        src.tag = group_tag(*parity, src.addr);
    }
    *parity ^= op.write_active;
}

/// Completion-tag scoreboard owning the parity vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagScoreboard {
    parity: u64,
}

impl TagScoreboard {
    /// Create a scoreboard with every parity bit clear.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current parity vector.
    pub fn parity(&self) -> u64 {
        self.parity
    }

    /// Tag the sources of `op` and record its writes.
    pub fn update(&mut self, op: &mut Operation) {
        update_tags(op, &mut self.parity);
        if op.write_active != 0 {
            tracing::trace!(
                op = op.op.mnemonic(),
                write = format_args!("{:#018x}", op.write_active),
                parity = format_args!("{:#018x}", self.parity),
                "parity update"
            );
        }
    }

    /// Tag a read of `addr` would capture right now.
    pub fn tag_of(&self, addr: u8) -> u8 {
        group_tag(self.parity, addr)
    }

    /// Clear all parity bits.
    pub fn reset(&mut self) {
        self.parity = 0;
    }
}
