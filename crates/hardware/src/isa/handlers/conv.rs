//! Convolution engine handler.
//!
//! The `.vxv` form carries three vector registers (`vd`, `vs`, `vu`) and a
//! scalar control word. Every convolution operation writes the whole
//! accumulator bank as far as hazards are concerned; `aconv` and accumulating
//! `vdwconv` read it as well.

use super::{DecodeContext, begin, bind_scalar, read};
use crate::core::hazard::activity;
use crate::common::constants::DWCONV_TAPS;
use crate::isa::ctrl::{ConvCtrl, DwconvCtrl};
use crate::isa::instruction::VectorBits;
use crate::isa::op::{CmdQueue, VOp};
use crate::isa::opcodes::{FUNC1_ACLR, FUNC1_ACONV, FUNC1_ACSET, FUNC1_ACTR, FUNC1_VDWCONV};
use crate::isa::operation::{Operation, SrcSlot};

const TAP_SLOTS: [SrcSlot; DWCONV_TAPS] = [SrcSlot::Vs, SrcSlot::Vt, SrcSlot::Vu];
const WEIGHT_SLOTS: [SrcSlot; DWCONV_TAPS] = [SrcSlot::Vx, SrcSlot::Vy, SrcSlot::Vz];

/// Decodes `vdwconv`, `aconv`, `acset`, `actr` and `aclr`.
pub fn decode_conv(ctx: &DecodeContext, word: u32) -> Operation {
    let vop = match word.func1() {
        FUNC1_VDWCONV => VOp::Vdwconv,
        FUNC1_ACONV => VOp::Aconv,
        FUNC1_ACSET => VOp::Acset,
        FUNC1_ACTR => VOp::Actr,
        FUNC1_ACLR => VOp::Aclr,
        _ => return Operation::undefined(word),
    };
    let mut op = begin(word, vop, CmdQueue::Conv);
    // func2 holds vu in this form.
    op.f2 = 0;
    bind_scalar(&mut op, ctx);
    op.write_active = ctx.acc_mask;

    let (vs, vu, m) = (word.vs(), word.vu(), op.m);
    match vop {
        VOp::Vdwconv => {
            let ctrl = DwconvCtrl(ctx.data);
            debug_assert_eq!(ctrl.reserved(), 0, "vdwconv control reserved bits set");
            if ctrl.accumulate() {
                op.read_active |= ctx.acc_mask;
            }
            let taps = vs.wrapping_add(ctrl.regbase());
            for (k, (tap, weight)) in TAP_SLOTS.iter().zip(&WEIGHT_SLOTS).enumerate() {
                let k = k as u8;
                read(&mut op, *tap, taps.wrapping_add(k), activity(taps.wrapping_add(k), false));
                read(&mut op, *weight, vu.wrapping_add(k), activity(vu.wrapping_add(k), false));
            }
        }
        _ => {
            let ctrl = ConvCtrl(ctx.data);
            debug_assert_eq!(ctrl.reserved(), 0, "accumulator control reserved bits set");
            debug_assert!(
                (ctrl.width() as usize) < ctx.lanes,
                "accumulator range wider than a register"
            );
            if vop != VOp::Aclr {
                read(&mut op, SrcSlot::Vs, vs, activity(vs, m));
            }
            if vop == VOp::Aconv {
                read(&mut op, SrcSlot::Vu, vu, activity(vu, m));
                op.read_active |= ctx.acc_mask;
            }
        }
    }
    op
}
