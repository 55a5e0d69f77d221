//! Format handlers.
//!
//! A handler turns a word already matched against an opcode-table entry into a
//! fully populated [`Operation`]: it selects the opcode id from the family's
//! func2 sub-field, binds the register operands and computes the activity masks.
//!
//! Handlers are grouped by family:
//! - [`format`]: Format0 through Format6 (ALU operations)
//! - [`ldst`]:   Loads, stores and scalar duplicate
//! - [`conv`]:   Convolution engine and accumulator bank

/// Convolution engine handler.
pub mod conv;

/// ALU format handlers (Format0-6).
pub mod format;

/// Load/store and duplicate handlers.
pub mod ldst;

use crate::core::hazard::{activity, activity2, group_stride};
use crate::isa::instruction::{VectorBits, element_bytes};
use crate::isa::op::{CmdQueue, VOp};
use crate::isa::opcodes::FORM_VV;
use crate::isa::operation::{DstSlot, Operation, ScalarOperand, SrcSlot};

/// Per-issue inputs a handler may need beyond the instruction word.
#[derive(Clone, Copy, Debug)]
pub struct DecodeContext {
    /// Scalar address-register contents.
    pub addr: u32,
    /// Scalar data-register contents.
    pub data: u32,
    /// Lanes per vector register.
    pub lanes: usize,
    /// Write activity of the accumulator bank.
    pub acc_mask: u64,
}

/// Handler signature stored in the opcode table.
pub type DecodeFn = fn(&DecodeContext, u32) -> Operation;

/// Operations that occupy four consecutive registers without stripmining.
///
/// The flag says whether the operation takes a second operand, bound to `vy`
/// in the `.vv` form and to the scalar operand in the `.vx` form.
pub const DUAL_ISSUE: [(VOp, bool); 4] = [
    (VOp::Vmvp, false),
    (VOp::Vmulp, true),
    (VOp::Vmulhp, true),
    (VOp::Vshap, true),
];

/// Looks up `op` in [`DUAL_ISSUE`], returning its second-operand flag.
pub fn dual_issue(op: VOp) -> Option<bool> {
    DUAL_ISSUE
        .iter()
        .find(|(candidate, _)| *candidate == op)
        .map(|(_, second)| *second)
}

/// Decoder for table slot zero; never consulted by a scan.
pub fn decode_undef(_ctx: &DecodeContext, word: u32) -> Operation {
    Operation::undefined(word)
}

/// Creates the operation shell shared by every handler.
fn begin(word: u32, op: VOp, cmdq: CmdQueue) -> Operation {
    Operation {
        op,
        sz: element_bytes(word.sz()).unwrap_or(0),
        m: word.multi(),
        f2: word.f2(),
        cmdq,
        raw: word,
        ..Operation::default()
    }
}

/// Register distance between consecutive members of a multi-register operand.
fn stride(op: &Operation) -> u8 {
    group_stride(op.m) as u8
}

fn bind_scalar(op: &mut Operation, ctx: &DecodeContext) {
    op.sv = ScalarOperand {
        valid: true,
        addr: ctx.addr,
        data: ctx.data,
    };
}

fn write(op: &mut Operation, slot: DstSlot, addr: u8, mask: u64) {
    op.bind_dst(slot, addr);
    op.write_active |= mask;
}

fn read(op: &mut Operation, slot: SrcSlot, addr: u8, mask: u64) {
    op.bind_src(slot, addr);
    op.read_active |= mask;
}

/// `vd <- vs`.
fn unary(op: &mut Operation, word: u32) {
    let m = op.m;
    write(op, DstSlot::Vd, word.vd(), activity(word.vd(), m));
    read(op, SrcSlot::Vs, word.vs(), activity(word.vs(), m));
}

/// `vd <- vs op (vt | xt)`.
fn binary(op: &mut Operation, word: u32, ctx: &DecodeContext) {
    unary(op, word);
    if word.form() == FORM_VV {
        let m = op.m;
        read(op, SrcSlot::Vt, word.vt(), activity(word.vt(), m));
    } else {
        bind_scalar(op, ctx);
    }
}

/// Adds the destination as a third input in `vu`.
fn accumulate(op: &mut Operation, word: u32) {
    let m = op.m;
    read(op, SrcSlot::Vu, word.vd(), activity(word.vd(), m));
}

/// Adds the destination's successor as a second output in `ve`.
fn pair_dst(op: &mut Operation, word: u32) {
    let (m, s) = (op.m, stride(op));
    write(op, DstSlot::Ve, word.vd().wrapping_add(s), activity2(word.vd(), m));
}

/// Binds the four-register form of a [`DUAL_ISSUE`] operation.
///
/// Destinations `vd..vg` and sources `vs..vx` name four consecutive registers
/// from their bases; the stripmine flag is cleared.
fn paired(op: &mut Operation, word: u32, ctx: &DecodeContext, second: bool) {
    op.m = false;
    for (k, (d, s)) in DstSlot::ALL.iter().zip(&SrcSlot::ALL[..4]).enumerate() {
        let k = k as u8;
        let vd = word.vd().wrapping_add(k);
        let vs = word.vs().wrapping_add(k);
        write(op, *d, vd, activity(vd, false));
        read(op, *s, vs, activity(vs, false));
    }
    if second {
        if word.form() == FORM_VV {
            read(op, SrcSlot::Vy, word.vt(), activity(word.vt(), false));
        } else {
            bind_scalar(op, ctx);
        }
    }
}
