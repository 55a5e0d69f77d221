//! Load, store and scalar-duplicate handlers.
//!
//! Memory operations are routed to the load/store queue and never execute in
//! the ALU. A store names its data register in the `vd` field but reads it, so
//! the register is bound as source `vs`.

use super::{DecodeContext, begin, bind_scalar, read, write};
use crate::core::hazard::activity;
use crate::isa::func2::{DC_LOW3, F2_POST_INC, ldst};
use crate::isa::instruction::VectorBits;
use crate::isa::op::{CmdQueue, VOp};
use crate::isa::operation::{DstSlot, Operation, SrcSlot};

/// Decodes `vld`, `vst` and `vstq`.
pub fn decode_ldst(ctx: &DecodeContext, word: u32) -> Operation {
    let (vop, cmdq) = match word.func2() & DC_LOW3 {
        ldst::VLD => (VOp::Vld, CmdQueue::LdSt { ld: true, st: false }),
        ldst::VST => (VOp::Vst, CmdQueue::LdSt { ld: false, st: true }),
        ldst::VSTQ => (VOp::Vstq, CmdQueue::LdSt { ld: false, st: true }),
        _ => return Operation::undefined(word),
    };
    let mut op = begin(word, vop, cmdq);
    op.cmdsync = op.f2 & F2_POST_INC != 0;
    bind_scalar(&mut op, ctx);

    let (vd, m) = (word.vd(), op.m);
    if vop == VOp::Vld {
        write(&mut op, DstSlot::Vd, vd, activity(vd, m));
    } else {
        read(&mut op, SrcSlot::Vs, vd, activity(vd, m));
    }
    op
}

/// Decodes `vdup`, which splats the scalar data operand into `vd`.
pub fn decode_dup(ctx: &DecodeContext, word: u32) -> Operation {
    let mut op = begin(word, VOp::Vdup, CmdQueue::Alu);
    bind_scalar(&mut op, ctx);
    let (vd, m) = (word.vd(), op.m);
    write(&mut op, DstSlot::Vd, vd, activity(vd, m));
    op
}
