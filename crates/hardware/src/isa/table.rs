//! Ordered opcode table.
//!
//! Every architectural instruction form has one entry: its assembler name, the
//! opcode id it decodes to, a `(matches, mask)` pair over the instruction word,
//! the format handler and an optional randomizer used by fuzz harnesses to turn
//! random bits into a legal encoding. Entry zero is a placeholder for "no
//! match" and is never consulted by a scan.
//!
//! Masks never cover the element-size field (except for the convolution
//! entries, which require byte elements); the reserved size is vetoed by the
//! decoder before the table is consulted.

use crate::isa::func2::{
    DC_LOW3, DC_R, DC_RU, DC_U, EXACT, format0, format1, format2, format3, format4, format5,
    format6, ldst,
};
use crate::isa::handlers::conv::decode_conv;
use crate::isa::handlers::format::{
    decode_format0, decode_format1, decode_format2, decode_format3, decode_format4,
    decode_format5, decode_format6,
};
use crate::isa::handlers::ldst::{decode_dup, decode_ldst};
use crate::isa::handlers::{DecodeFn, decode_undef};
use crate::isa::instruction::{
    FORM_MASK, FUNC1_MASK, FUNC1_SHIFT, FUNC2_SHIFT, SZ_MASK, SZ_RESERVED, SZ_SHIFT, VectorBits,
};
use crate::isa::op::VOp;
use crate::isa::opcodes::{
    FORM_VV, FORM_VX, FORM_VXV, FUNC1_ACLR, FUNC1_ACONV, FUNC1_ACSET, FUNC1_ACTR, FUNC1_FORMAT0,
    FUNC1_FORMAT1, FUNC1_FORMAT2, FUNC1_FORMAT3, FUNC1_FORMAT4, FUNC1_FORMAT5, FUNC1_FORMAT6,
    FUNC1_LDST, FUNC1_VDWCONV,
};

/// Fuzz-harness hook that legalizes the don't-care bits of a matched word.
pub type RandomizeFn = fn(u32) -> u32;

/// One row of the opcode table.
#[derive(Clone, Copy, Debug)]
pub struct OpcodeEntry {
    /// Assembler name including the form suffix.
    pub name: &'static str,
    /// Opcode id the entry decodes to.
    pub op: VOp,
    /// Required values of the masked bits.
    pub matches: u32,
    /// Bits that must equal `matches`.
    pub mask: u32,
    /// Format handler.
    pub decode: DecodeFn,
    /// Optional legalizer for randomly generated words.
    pub randomize: Option<RandomizeFn>,
}

impl OpcodeEntry {
    /// Returns true if `word` has this entry's fixed bits.
    pub const fn matches_word(&self, word: u32) -> bool {
        word & self.mask == self.matches & self.mask
    }

    /// Turns random bits into a word this entry decodes.
    ///
    /// The fixed bits are forced, the reserved element size is replaced by
    /// words, then the entry's randomizer (if any) runs.
    pub fn legalize(&self, random: u32) -> u32 {
        let mut word = (random & !self.mask) | (self.matches & self.mask);
        if word.sz() == SZ_RESERVED {
            word &= !(1 << SZ_SHIFT);
        }
        match self.randomize {
            Some(randomize) => randomize(word),
            None => word,
        }
    }
}

const fn with_sz(word: u32, sz: u32) -> u32 {
    (word & !(SZ_MASK << SZ_SHIFT)) | (sz << SZ_SHIFT)
}

/// Widening operations produce double-width elements: bytes or halfwords only.
pub fn randomize_widening(word: u32) -> u32 {
    with_sz(word, word.sz() & 1)
}

/// Half-width narrowing needs halfword or word sources.
pub fn randomize_narrowing(word: u32) -> u32 {
    with_sz(word, 1 + (word.sz() & 1))
}

/// Quarter-width narrowing needs word sources.
pub fn randomize_quarter(word: u32) -> u32 {
    with_sz(word, 2)
}

const fn arith_match(form: u32, func1: u32, func2: u32) -> u32 {
    (func2 << FUNC2_SHIFT) | (func1 << FUNC1_SHIFT) | form
}

const fn arith_mask(func2_mask: u32) -> u32 {
    (func2_mask << FUNC2_SHIFT) | (FUNC1_MASK << FUNC1_SHIFT) | FORM_MASK
}

/// Convolution entries fix the form, func1 and a byte element size.
const CONV_MASK: u32 = (SZ_MASK << SZ_SHIFT) | (FUNC1_MASK << FUNC1_SHIFT) | FORM_MASK;

macro_rules! entry {
    ($name:literal, $op:ident, $form:expr, $func1:expr, $func2:expr, $dc:expr, $decode:path) => {
        entry!($name, $op, $form, $func1, $func2, $dc, $decode, None)
    };
    ($name:literal, $op:ident, $form:expr, $func1:expr, $func2:expr, $dc:expr, $decode:path, $rand:expr) => {
        OpcodeEntry {
            name: $name,
            op: VOp::$op,
            matches: arith_match($form, $func1, $func2),
            mask: arith_mask($dc),
            decode: $decode,
            randomize: $rand,
        }
    };
}

macro_rules! conv {
    ($name:literal, $op:ident, $func1:expr) => {
        OpcodeEntry {
            name: $name,
            op: VOp::$op,
            matches: ($func1 << FUNC1_SHIFT) | FORM_VXV,
            mask: CONV_MASK,
            decode: decode_conv,
            randomize: None,
        }
    };
}

const W: Option<RandomizeFn> = Some(randomize_widening);
const N: Option<RandomizeFn> = Some(randomize_narrowing);
const Q: Option<RandomizeFn> = Some(randomize_quarter);

const F0: u32 = FUNC1_FORMAT0;
const F1: u32 = FUNC1_FORMAT1;
const F2: u32 = FUNC1_FORMAT2;
const F3: u32 = FUNC1_FORMAT3;
const F4: u32 = FUNC1_FORMAT4;
const F5: u32 = FUNC1_FORMAT5;
const F6: u32 = FUNC1_FORMAT6;

/// The ordered opcode table. Index zero is the "no match" placeholder.
pub static OPCODE_TABLE: &[OpcodeEntry] = &[
    OpcodeEntry {
        name: "undef",
        op: VOp::Undef,
        matches: 0,
        mask: 0,
        decode: decode_undef,
        randomize: None,
    },
    // Format0
    entry!("vadd.vv", Vadd, FORM_VV, F0, format0::VADD, EXACT, decode_format0),
    entry!("vadd.vx", Vadd, FORM_VX, F0, format0::VADD, EXACT, decode_format0),
    entry!("vsub.vv", Vsub, FORM_VV, F0, format0::VSUB, EXACT, decode_format0),
    entry!("vsub.vx", Vsub, FORM_VX, F0, format0::VSUB, EXACT, decode_format0),
    entry!("vrsub.vv", Vrsub, FORM_VV, F0, format0::VRSUB, EXACT, decode_format0),
    entry!("vrsub.vx", Vrsub, FORM_VX, F0, format0::VRSUB, EXACT, decode_format0),
    entry!("veq.vv", Veq, FORM_VV, F0, format0::VEQ, EXACT, decode_format0),
    entry!("veq.vx", Veq, FORM_VX, F0, format0::VEQ, EXACT, decode_format0),
    entry!("vne.vv", Vne, FORM_VV, F0, format0::VNE, EXACT, decode_format0),
    entry!("vne.vx", Vne, FORM_VX, F0, format0::VNE, EXACT, decode_format0),
    entry!("vlt.vv", Vlt, FORM_VV, F0, format0::VLT, DC_U, decode_format0),
    entry!("vlt.vx", Vlt, FORM_VX, F0, format0::VLT, DC_U, decode_format0),
    entry!("vle.vv", Vle, FORM_VV, F0, format0::VLE, DC_U, decode_format0),
    entry!("vle.vx", Vle, FORM_VX, F0, format0::VLE, DC_U, decode_format0),
    entry!("vgt.vv", Vgt, FORM_VV, F0, format0::VGT, DC_U, decode_format0),
    entry!("vgt.vx", Vgt, FORM_VX, F0, format0::VGT, DC_U, decode_format0),
    entry!("vge.vv", Vge, FORM_VV, F0, format0::VGE, DC_U, decode_format0),
    entry!("vge.vx", Vge, FORM_VX, F0, format0::VGE, DC_U, decode_format0),
    entry!("vabsd.vv", Vabsd, FORM_VV, F0, format0::VABSD, DC_U, decode_format0),
    entry!("vabsd.vx", Vabsd, FORM_VX, F0, format0::VABSD, DC_U, decode_format0),
    entry!("vmax.vv", Vmax, FORM_VV, F0, format0::VMAX, DC_U, decode_format0),
    entry!("vmax.vx", Vmax, FORM_VX, F0, format0::VMAX, DC_U, decode_format0),
    entry!("vmin.vv", Vmin, FORM_VV, F0, format0::VMIN, DC_U, decode_format0),
    entry!("vmin.vx", Vmin, FORM_VX, F0, format0::VMIN, DC_U, decode_format0),
    entry!("vadd3.vv", Vadd3, FORM_VV, F0, format0::VADD3, EXACT, decode_format0),
    entry!("vadd3.vx", Vadd3, FORM_VX, F0, format0::VADD3, EXACT, decode_format0),
    // Format1
    entry!("vand.vv", Vand, FORM_VV, F1, format1::VAND, EXACT, decode_format1),
    entry!("vand.vx", Vand, FORM_VX, F1, format1::VAND, EXACT, decode_format1),
    entry!("vor.vv", Vor, FORM_VV, F1, format1::VOR, EXACT, decode_format1),
    entry!("vor.vx", Vor, FORM_VX, F1, format1::VOR, EXACT, decode_format1),
    entry!("vxor.vv", Vxor, FORM_VV, F1, format1::VXOR, EXACT, decode_format1),
    entry!("vxor.vx", Vxor, FORM_VX, F1, format1::VXOR, EXACT, decode_format1),
    entry!("vnot.v", Vnot, FORM_VV, F1, format1::VNOT, EXACT, decode_format1),
    entry!("vrev.vv", Vrev, FORM_VV, F1, format1::VREV, EXACT, decode_format1),
    entry!("vrev.vx", Vrev, FORM_VX, F1, format1::VREV, EXACT, decode_format1),
    entry!("vror.vv", Vror, FORM_VV, F1, format1::VROR, EXACT, decode_format1),
    entry!("vror.vx", Vror, FORM_VX, F1, format1::VROR, EXACT, decode_format1),
    entry!("vclb.v", Vclb, FORM_VV, F1, format1::VCLB, EXACT, decode_format1),
    entry!("vclz.v", Vclz, FORM_VV, F1, format1::VCLZ, EXACT, decode_format1),
    entry!("vcpop.v", Vcpop, FORM_VV, F1, format1::VCPOP, EXACT, decode_format1),
    entry!("vmv.v", Vmv, FORM_VV, F1, format1::VMV, EXACT, decode_format1),
    entry!("vmvp.v", Vmvp, FORM_VV, F1, format1::VMVP, EXACT, decode_format1),
    // Format2
    entry!("vsll.vv", Vsll, FORM_VV, F2, format2::VSLL, EXACT, decode_format2),
    entry!("vsll.vx", Vsll, FORM_VX, F2, format2::VSLL, EXACT, decode_format2),
    entry!("vsra.vv", Vsra, FORM_VV, F2, format2::VSRA, EXACT, decode_format2),
    entry!("vsra.vx", Vsra, FORM_VX, F2, format2::VSRA, EXACT, decode_format2),
    entry!("vsrl.vv", Vsrl, FORM_VV, F2, format2::VSRL, EXACT, decode_format2),
    entry!("vsrl.vx", Vsrl, FORM_VX, F2, format2::VSRL, EXACT, decode_format2),
    entry!("vsha.vv", Vsha, FORM_VV, F2, format2::VSHA, DC_R, decode_format2),
    entry!("vsha.vx", Vsha, FORM_VX, F2, format2::VSHA, DC_R, decode_format2),
    entry!("vshl.vv", Vshl, FORM_VV, F2, format2::VSHL, DC_R, decode_format2),
    entry!("vshl.vx", Vshl, FORM_VX, F2, format2::VSHL, DC_R, decode_format2),
    entry!("vshap.vv", Vshap, FORM_VV, F2, format2::VSHAP, DC_R, decode_format2),
    entry!("vshap.vx", Vshap, FORM_VX, F2, format2::VSHAP, DC_R, decode_format2),
    // Format3
    entry!("vmul.vv", Vmul, FORM_VV, F3, format3::VMUL, EXACT, decode_format3),
    entry!("vmul.vx", Vmul, FORM_VX, F3, format3::VMUL, EXACT, decode_format3),
    entry!("vmulp.vv", Vmulp, FORM_VV, F3, format3::VMULP, EXACT, decode_format3),
    entry!("vmulp.vx", Vmulp, FORM_VX, F3, format3::VMULP, EXACT, decode_format3),
    entry!("vmuls.vv", Vmuls, FORM_VV, F3, format3::VMULS, DC_U, decode_format3),
    entry!("vmuls.vx", Vmuls, FORM_VX, F3, format3::VMULS, DC_U, decode_format3),
    entry!("vmulw.vv", Vmulw, FORM_VV, F3, format3::VMULW, DC_U, decode_format3, W),
    entry!("vmulw.vx", Vmulw, FORM_VX, F3, format3::VMULW, DC_U, decode_format3, W),
    entry!("vmulh.vv", Vmulh, FORM_VV, F3, format3::VMULH, DC_RU, decode_format3),
    entry!("vmulh.vx", Vmulh, FORM_VX, F3, format3::VMULH, DC_RU, decode_format3),
    entry!("vmulhp.vv", Vmulhp, FORM_VV, F3, format3::VMULHP, DC_RU, decode_format3),
    entry!("vmulhp.vx", Vmulhp, FORM_VX, F3, format3::VMULHP, DC_RU, decode_format3),
    entry!("vdmulh.vv", Vdmulh, FORM_VV, F3, format3::VDMULH, DC_R, decode_format3),
    entry!("vdmulh.vx", Vdmulh, FORM_VX, F3, format3::VDMULH, DC_R, decode_format3),
    entry!("vmacc.vv", Vmacc, FORM_VV, F3, format3::VMACC, EXACT, decode_format3),
    entry!("vmacc.vx", Vmacc, FORM_VX, F3, format3::VMACC, EXACT, decode_format3),
    entry!("vmadd.vv", Vmadd, FORM_VV, F3, format3::VMADD, EXACT, decode_format3),
    entry!("vmadd.vx", Vmadd, FORM_VX, F3, format3::VMADD, EXACT, decode_format3),
    // Format4
    entry!("vaddw.vv", Vaddw, FORM_VV, F4, format4::VADDW, DC_U, decode_format4, W),
    entry!("vaddw.vx", Vaddw, FORM_VX, F4, format4::VADDW, DC_U, decode_format4, W),
    entry!("vsubw.vv", Vsubw, FORM_VV, F4, format4::VSUBW, DC_U, decode_format4, W),
    entry!("vsubw.vx", Vsubw, FORM_VX, F4, format4::VSUBW, DC_U, decode_format4, W),
    entry!("vacc.vv", Vacc, FORM_VV, F4, format4::VACC, DC_U, decode_format4, W),
    entry!("vacc.vx", Vacc, FORM_VX, F4, format4::VACC, DC_U, decode_format4, W),
    entry!("vpadd.v", Vpadd, FORM_VV, F4, format4::VPADD, DC_U, decode_format4, W),
    entry!("vpsub.v", Vpsub, FORM_VV, F4, format4::VPSUB, DC_U, decode_format4, W),
    entry!("vhadd.vv", Vhadd, FORM_VV, F4, format4::VHADD, DC_RU, decode_format4),
    entry!("vhadd.vx", Vhadd, FORM_VX, F4, format4::VHADD, DC_RU, decode_format4),
    entry!("vhsub.vv", Vhsub, FORM_VV, F4, format4::VHSUB, DC_RU, decode_format4),
    entry!("vhsub.vx", Vhsub, FORM_VX, F4, format4::VHSUB, DC_RU, decode_format4),
    // Format5
    entry!("vsadd.vv", Vsadd, FORM_VV, F5, format5::VSADD, DC_U, decode_format5),
    entry!("vsadd.vx", Vsadd, FORM_VX, F5, format5::VSADD, DC_U, decode_format5),
    entry!("vssub.vv", Vssub, FORM_VV, F5, format5::VSSUB, DC_U, decode_format5),
    entry!("vssub.vx", Vssub, FORM_VX, F5, format5::VSSUB, DC_U, decode_format5),
    entry!("vsrans.vv", Vsrans, FORM_VV, F5, format5::VSRANS, DC_RU, decode_format5, N),
    entry!("vsrans.vx", Vsrans, FORM_VX, F5, format5::VSRANS, DC_RU, decode_format5, N),
    entry!("vsraqs.vv", Vsraqs, FORM_VV, F5, format5::VSRAQS, DC_RU, decode_format5, Q),
    entry!("vsraqs.vx", Vsraqs, FORM_VX, F5, format5::VSRAQS, DC_RU, decode_format5, Q),
    // Format6
    entry!("vslidevn.v", Vslidevn, FORM_VV, F6, format6::VSLIDEVN, DC_RU, decode_format6),
    entry!("vslidevp.v", Vslidevp, FORM_VV, F6, format6::VSLIDEVP, DC_RU, decode_format6),
    entry!("vslidehn.vv", Vslidehn, FORM_VV, F6, format6::VSLIDEHN, DC_RU, decode_format6),
    entry!("vslidehp.vv", Vslidehp, FORM_VV, F6, format6::VSLIDEHP, DC_RU, decode_format6),
    entry!("vsel.vv", Vsel, FORM_VV, F6, format6::VSEL, EXACT, decode_format6),
    entry!("vsel.vx", Vsel, FORM_VX, F6, format6::VSEL, EXACT, decode_format6),
    entry!("vevn.vv", Vevn, FORM_VV, F6, format6::VEVN, EXACT, decode_format6),
    entry!("vevn.vx", Vevn, FORM_VX, F6, format6::VEVN, EXACT, decode_format6),
    entry!("vodd.vv", Vodd, FORM_VV, F6, format6::VODD, EXACT, decode_format6),
    entry!("vodd.vx", Vodd, FORM_VX, F6, format6::VODD, EXACT, decode_format6),
    entry!("vevnodd.vv", Vevnodd, FORM_VV, F6, format6::VEVNODD, EXACT, decode_format6),
    entry!("vevnodd.vx", Vevnodd, FORM_VX, F6, format6::VEVNODD, EXACT, decode_format6),
    entry!("vzip.vv", Vzip, FORM_VV, F6, format6::VZIP, EXACT, decode_format6),
    entry!("vzip.vx", Vzip, FORM_VX, F6, format6::VZIP, EXACT, decode_format6),
    // Load / store / duplicate
    entry!("vld", Vld, FORM_VX, FUNC1_LDST, ldst::VLD, DC_LOW3, decode_ldst),
    entry!("vst", Vst, FORM_VX, FUNC1_LDST, ldst::VST, DC_LOW3, decode_ldst),
    entry!("vdup.x", Vdup, FORM_VX, FUNC1_LDST, ldst::VDUP, EXACT, decode_dup),
    entry!("vstq", Vstq, FORM_VX, FUNC1_LDST, ldst::VSTQ, DC_LOW3, decode_ldst),
    // Convolution engine
    conv!("vdwconv.vxv", Vdwconv, FUNC1_VDWCONV),
    conv!("aconv.vxv", Aconv, FUNC1_ACONV),
    conv!("acset.v", Acset, FUNC1_ACSET),
    conv!("actr.v", Actr, FUNC1_ACTR),
    conv!("aclr", Aclr, FUNC1_ACLR),
];
