//! ALU format handlers (Format0 through Format6).
//!
//! Each handler picks its opcode from func2, with the sub-format bits masked
//! where the family treats them as modifiers, then binds operands in one of a
//! few shapes: unary, binary, accumulating, widening or paired.

use super::{
    DecodeContext, accumulate, begin, binary, dual_issue, pair_dst, paired, read, stride, unary,
};
use crate::core::hazard::{activity2, activity3, activity4};
use crate::isa::func2::{
    DC_R, DC_RU, DC_U, format0, format1, format2, format3, format4, format5, format6,
};
use crate::isa::instruction::VectorBits;
use crate::isa::op::{CmdQueue, VOp};
use crate::isa::operation::{Operation, SrcSlot};

/// Builds an ALU operation, or `Undef` if `select` finds nothing.
fn build(
    ctx: &DecodeContext,
    word: u32,
    select: Option<VOp>,
    bind: fn(&mut Operation, u32, &DecodeContext),
) -> Operation {
    let Some(vop) = select else {
        return Operation::undefined(word);
    };
    let mut op = begin(word, vop, CmdQueue::Alu);
    if let Some(second) = dual_issue(vop) {
        paired(&mut op, word, ctx, second);
    } else {
        bind(&mut op, word, ctx);
    }
    op
}

/// Arithmetic, compares and min/max.
pub fn decode_format0(ctx: &DecodeContext, word: u32) -> Operation {
    let f = word.func2();
    let select = match f {
        format0::VADD => Some(VOp::Vadd),
        format0::VSUB => Some(VOp::Vsub),
        format0::VRSUB => Some(VOp::Vrsub),
        format0::VEQ => Some(VOp::Veq),
        format0::VNE => Some(VOp::Vne),
        format0::VADD3 => Some(VOp::Vadd3),
        _ => match f & DC_U {
            format0::VLT => Some(VOp::Vlt),
            format0::VLE => Some(VOp::Vle),
            format0::VGT => Some(VOp::Vgt),
            format0::VGE => Some(VOp::Vge),
            format0::VABSD => Some(VOp::Vabsd),
            format0::VMAX => Some(VOp::Vmax),
            format0::VMIN => Some(VOp::Vmin),
            _ => None,
        },
    };
    build(ctx, word, select, |op, word, ctx| {
        binary(op, word, ctx);
        if op.op == VOp::Vadd3 {
            accumulate(op, word);
        }
    })
}

/// Logic, bit manipulation and moves.
pub fn decode_format1(ctx: &DecodeContext, word: u32) -> Operation {
    let select = match word.func2() {
        format1::VAND => Some(VOp::Vand),
        format1::VOR => Some(VOp::Vor),
        format1::VXOR => Some(VOp::Vxor),
        format1::VNOT => Some(VOp::Vnot),
        format1::VREV => Some(VOp::Vrev),
        format1::VROR => Some(VOp::Vror),
        format1::VCLB => Some(VOp::Vclb),
        format1::VCLZ => Some(VOp::Vclz),
        format1::VCPOP => Some(VOp::Vcpop),
        format1::VMV => Some(VOp::Vmv),
        format1::VMVP => Some(VOp::Vmvp),
        _ => None,
    };
    build(ctx, word, select, |op, word, ctx| match op.op {
        VOp::Vnot | VOp::Vclb | VOp::Vclz | VOp::Vcpop | VOp::Vmv => unary(op, word),
        _ => binary(op, word, ctx),
    })
}

/// Shifts.
pub fn decode_format2(ctx: &DecodeContext, word: u32) -> Operation {
    let f = word.func2();
    let select = match f {
        format2::VSLL => Some(VOp::Vsll),
        format2::VSRA => Some(VOp::Vsra),
        format2::VSRL => Some(VOp::Vsrl),
        _ => match f & DC_R {
            format2::VSHA => Some(VOp::Vsha),
            format2::VSHL => Some(VOp::Vshl),
            format2::VSHAP => Some(VOp::Vshap),
            _ => None,
        },
    };
    build(ctx, word, select, binary)
}

/// Multiplies.
pub fn decode_format3(ctx: &DecodeContext, word: u32) -> Operation {
    let f = word.func2();
    let select = match f {
        format3::VMUL => Some(VOp::Vmul),
        format3::VMULP => Some(VOp::Vmulp),
        format3::VMACC => Some(VOp::Vmacc),
        format3::VMADD => Some(VOp::Vmadd),
        _ if f & DC_U == format3::VMULS => Some(VOp::Vmuls),
        _ if f & DC_U == format3::VMULW => Some(VOp::Vmulw),
        _ if f & DC_R == format3::VDMULH => Some(VOp::Vdmulh),
        _ => match f & DC_RU {
            format3::VMULH => Some(VOp::Vmulh),
            format3::VMULHP => Some(VOp::Vmulhp),
            _ => None,
        },
    };
    build(ctx, word, select, |op, word, ctx| {
        binary(op, word, ctx);
        match op.op {
            VOp::Vmacc | VOp::Vmadd => accumulate(op, word),
            VOp::Vmulw => pair_dst(op, word),
            _ => {}
        }
    })
}

/// Widening, pairwise and halving arithmetic.
pub fn decode_format4(ctx: &DecodeContext, word: u32) -> Operation {
    let f = word.func2();
    let select = match f & DC_U {
        format4::VADDW => Some(VOp::Vaddw),
        format4::VSUBW => Some(VOp::Vsubw),
        format4::VACC => Some(VOp::Vacc),
        format4::VPADD => Some(VOp::Vpadd),
        format4::VPSUB => Some(VOp::Vpsub),
        _ => match f & DC_RU {
            format4::VHADD => Some(VOp::Vhadd),
            format4::VHSUB => Some(VOp::Vhsub),
            _ => None,
        },
    };
    build(ctx, word, select, |op, word, ctx| match op.op {
        VOp::Vpadd | VOp::Vpsub => unary(op, word),
        VOp::Vaddw | VOp::Vsubw => {
            binary(op, word, ctx);
            pair_dst(op, word);
        }
        VOp::Vacc => {
            binary(op, word, ctx);
            pair_dst(op, word);
            let (m, s) = (op.m, stride(op));
            read(op, SrcSlot::Vu, word.vs().wrapping_add(s), activity2(word.vs(), m));
        }
        _ => binary(op, word, ctx),
    })
}

/// Saturating arithmetic and narrowing shifts.
pub fn decode_format5(ctx: &DecodeContext, word: u32) -> Operation {
    let f = word.func2();
    let select = match f & DC_U {
        format5::VSADD => Some(VOp::Vsadd),
        format5::VSSUB => Some(VOp::Vssub),
        _ => match f & DC_RU {
            format5::VSRANS => Some(VOp::Vsrans),
            format5::VSRAQS => Some(VOp::Vsraqs),
            _ => None,
        },
    };
    build(ctx, word, select, |op, word, ctx| {
        binary(op, word, ctx);
        let (m, s, vs) = (op.m, stride(op), word.vs());
        match op.op {
            VOp::Vsrans => read(op, SrcSlot::Vu, vs.wrapping_add(s), activity2(vs, m)),
            VOp::Vsraqs => {
                read(op, SrcSlot::Vu, vs.wrapping_add(s), activity2(vs, m));
                read(op, SrcSlot::Vx, vs.wrapping_add(2 * s), activity3(vs, m));
                read(op, SrcSlot::Vy, vs.wrapping_add(3 * s), activity4(vs, m));
            }
            _ => {}
        }
    })
}

/// Slides, select and permutes.
pub fn decode_format6(ctx: &DecodeContext, word: u32) -> Operation {
    let f = word.func2();
    let select = match f {
        format6::VSEL => Some(VOp::Vsel),
        format6::VEVN => Some(VOp::Vevn),
        format6::VODD => Some(VOp::Vodd),
        format6::VEVNODD => Some(VOp::Vevnodd),
        format6::VZIP => Some(VOp::Vzip),
        _ => match f & DC_RU {
            format6::VSLIDEVN => Some(VOp::Vslidevn),
            format6::VSLIDEVP => Some(VOp::Vslidevp),
            format6::VSLIDEHN => Some(VOp::Vslidehn),
            format6::VSLIDEHP => Some(VOp::Vslidehp),
            _ => None,
        },
    };
    build(ctx, word, select, |op, word, ctx| match op.op {
        VOp::Vslidevn | VOp::Vslidevp => {
            unary(op, word);
            let (m, s, vs) = (op.m, stride(op), word.vs());
            read(op, SrcSlot::Vt, vs.wrapping_add(s), activity2(vs, m));
        }
        VOp::Vsel => {
            binary(op, word, ctx);
            accumulate(op, word);
        }
        VOp::Vevnodd | VOp::Vzip => {
            binary(op, word, ctx);
            pair_dst(op, word);
        }
        _ => binary(op, word, ctx),
    })
}
