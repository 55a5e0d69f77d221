//! Decoded operation descriptor.
//!
//! An [`Operation`] is what the decoder hands to the issue stage: the opcode id,
//! element size and sub-format bits, up to four destination and six source
//! register operands, one scalar operand, the dispatch queue and the read/write
//! activity masks used for hazard detection.

use crate::common::constants::{DST_PORTS, GROUP_BASE_MASK, SRC_PORTS, VREG_ADDR_MASK};
use crate::isa::func2::{F2_ROUND, F2_UNSIGNED};
use crate::isa::op::{CmdQueue, VOp};

/// Destination operand slot, in port order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DstSlot {
    /// Primary destination.
    Vd = 0,
    /// Second destination (widening high half, pair member).
    Ve = 1,
    /// Third destination.
    Vf = 2,
    /// Fourth destination.
    Vg = 3,
}

impl DstSlot {
    /// All destination slots in port order.
    pub const ALL: [Self; DST_PORTS] = [Self::Vd, Self::Ve, Self::Vf, Self::Vg];

    /// Port index of the slot.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Source operand slot, in port order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SrcSlot {
    /// First source.
    Vs = 0,
    /// Second source.
    Vt = 1,
    /// Third source (accumulator input, pair member).
    Vu = 2,
    /// Fourth source.
    Vx = 3,
    /// Fifth source.
    Vy = 4,
    /// Sixth source.
    Vz = 5,
}

impl SrcSlot {
    /// All source slots in port order.
    pub const ALL: [Self; SRC_PORTS] = [Self::Vs, Self::Vt, Self::Vu, Self::Vx, Self::Vy, Self::Vz];

    /// Port index of the slot.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A vector register written by an operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DstOperand {
    /// The slot is in use.
    pub valid: bool,
    /// Register address (0..64).
    pub addr: u8,
}

/// A vector register read by an operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SrcOperand {
    /// The slot is in use.
    pub valid: bool,
    /// Register address (0..64).
    pub addr: u8,
    /// 4-bit completion tag of the register's stripmine group, filled at issue.
    pub tag: u8,
}

/// The scalar operand of the `.vx`, `.vxv` and load/store forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScalarOperand {
    /// The scalar operand is in use.
    pub valid: bool,
    /// Scalar address-register contents supplied by the host.
    pub addr: u32,
    /// Scalar data-register contents supplied by the host.
    pub data: u32,
}

/// Decoded vector operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operation {
    /// Opcode identifier (`Undef` if no table entry matched).
    pub op: VOp,
    /// Element size in bytes (1, 2 or 4).
    pub sz: u8,
    /// Stripmine flag: operands name 4-register groups.
    pub m: bool,
    /// Sub-format bits (func2 bits 2-0).
    pub f2: u8,
    /// Command-sync flag (post-incrementing load/store).
    pub cmdsync: bool,
    /// Destination operands vd, ve, vf, vg.
    pub dst: [DstOperand; DST_PORTS],
    /// Source operands vs, vt, vu, vx, vy, vz.
    pub src: [SrcOperand; SRC_PORTS],
    /// Scalar operand.
    pub sv: ScalarOperand,
    /// Dispatch queue.
    pub cmdq: CmdQueue,
    /// Registers this operation reads.
    pub read_active: u64,
    /// Registers this operation writes.
    pub write_active: u64,
    /// The encoded instruction word.
    pub raw: u32,
}

impl Operation {
    /// Creates an `Undef` operation carrying only the instruction word.
    pub fn undefined(raw: u32) -> Self {
        Self {
            raw,
            ..Self::default()
        }
    }

    /// Returns true if a table entry matched.
    pub fn is_defined(&self) -> bool {
        self.op != VOp::Undef
    }

    /// Element width in bits.
    pub fn element_bits(&self) -> u32 {
        u32::from(self.sz) * 8
    }

    /// Sub-format selects unsigned operands.
    pub fn is_unsigned(&self) -> bool {
        self.f2 & F2_UNSIGNED != 0
    }

    /// Sub-format selects rounding.
    pub fn rounds(&self) -> bool {
        self.f2 & F2_ROUND != 0
    }

    /// Returns the destination operand in `slot`.
    pub fn dst(&self, slot: DstSlot) -> DstOperand {
        self.dst[slot.index()]
    }

    /// Returns the source operand in `slot`.
    pub fn src(&self, slot: SrcSlot) -> SrcOperand {
        self.src[slot.index()]
    }

    /// Marks `slot` as written at `addr` (taken modulo 64).
    pub fn bind_dst(&mut self, slot: DstSlot, addr: u8) {
        self.dst[slot.index()] = DstOperand {
            valid: true,
            addr: addr & VREG_ADDR_MASK,
        };
    }

    /// Marks `slot` as read from `addr` (taken modulo 64).
    pub fn bind_src(&mut self, slot: SrcSlot, addr: u8) {
        self.src[slot.index()] = SrcOperand {
            valid: true,
            addr: addr & VREG_ADDR_MASK,
            tag: 0,
        };
    }

    /// Primary destination.
    pub fn vd(&self) -> DstOperand {
        self.dst(DstSlot::Vd)
    }

    /// Second destination.
    pub fn ve(&self) -> DstOperand {
        self.dst(DstSlot::Ve)
    }

    /// Third destination.
    pub fn vf(&self) -> DstOperand {
        self.dst(DstSlot::Vf)
    }

    /// Fourth destination.
    pub fn vg(&self) -> DstOperand {
        self.dst(DstSlot::Vg)
    }

    /// First source.
    pub fn vs(&self) -> SrcOperand {
        self.src(SrcSlot::Vs)
    }

    /// Second source.
    pub fn vt(&self) -> SrcOperand {
        self.src(SrcSlot::Vt)
    }

    /// Third source.
    pub fn vu(&self) -> SrcOperand {
        self.src(SrcSlot::Vu)
    }

    /// Fourth source.
    pub fn vx(&self) -> SrcOperand {
        self.src(SrcSlot::Vx)
    }

    /// Fifth source.
    pub fn vy(&self) -> SrcOperand {
        self.src(SrcSlot::Vy)
    }

    /// Sixth source.
    pub fn vz(&self) -> SrcOperand {
        self.src(SrcSlot::Vz)
    }

    /// Returns member `k` of a stripmined operation as a single-register operation.
    ///
    /// Every valid operand is moved to register `k` of its 4-register group.
    pub fn stripmine_member(&self, k: u8) -> Self {
        let mut member = *self;
        member.m = false;
        for dst in member.dst.iter_mut().filter(|d| d.valid) {
            dst.addr = (dst.addr & GROUP_BASE_MASK) + k;
        }
        for src in member.src.iter_mut().filter(|s| s.valid) {
            src.addr = (src.addr & GROUP_BASE_MASK) + k;
        }
        member
    }
}
