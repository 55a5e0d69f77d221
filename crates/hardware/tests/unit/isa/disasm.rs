//! Disassembler Tests.
//!
//! Verifies the text form of each instruction family, including the size,
//! modifier, load/store and stripmine suffixes.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vref_core::isa::disasm::disassemble;
use vref_core::isa::func2::{F2_LENGTH, F2_POST_INC, F2_STRIDE, format0, format1, format2, format3, format6, ldst};
use vref_core::isa::opcodes::{
    FUNC1_ACLR, FUNC1_ACSET, FUNC1_FORMAT0, FUNC1_FORMAT1, FUNC1_FORMAT2, FUNC1_FORMAT3,
    FUNC1_FORMAT6, FUNC1_VDWCONV,
};
use vref_core::isa::table::OPCODE_TABLE;

use crate::common::builder::instruction::{InstructionBuilder as I, SZ_B, SZ_H, SZ_W};

#[rstest]
#[case(I::vv(FUNC1_FORMAT0, format0::VADD, 3, 5, 9).sz(SZ_W), "vadd.w.vv v3, v5, v9")]
#[case(I::vx(FUNC1_FORMAT0, format0::VSUB, 1, 2, 7).sz(SZ_B), "vsub.b.vx v1, v2, x7")]
#[case(I::vv(FUNC1_FORMAT0, format0::VLT | 1, 1, 2, 3).sz(SZ_H), "vlt.h.u.vv v1, v2, v3")]
#[case(I::vv(FUNC1_FORMAT3, format3::VMULH | 3, 1, 2, 3).sz(SZ_H), "vmulh.h.u.r.vv v1, v2, v3")]
#[case(I::vx(FUNC1_FORMAT2, format2::VSHA | 2, 1, 2, 3).sz(SZ_H), "vsha.h.r.vx v1, v2, x3")]
#[case(I::vv(FUNC1_FORMAT1, format1::VNOT, 1, 2, 0), "vnot.w.v v1, v2")]
#[case(I::vv(FUNC1_FORMAT0, format0::VADD, 0, 4, 8).multi(true), "vadd.w.vv.m v0, v4, v8")]
fn test_alu_forms(#[case] builder: I, #[case] expected: &str) {
    assert_eq!(disassemble(builder.build()), expected);
}

#[test]
fn test_exact_entries_show_no_modifier() {
    // func2 bit 0 is part of vadd's encoding space, never a modifier.
    let word = I::vv(FUNC1_FORMAT0, format0::VSUB, 1, 2, 3).build();
    assert_eq!(disassemble(word), "vsub.w.vv v1, v2, v3");
}

#[rstest]
#[case(ldst::VLD, "vld.w v9, x3")]
#[case(ldst::VLD | u32::from(F2_POST_INC), "vld.w.p v9, x3")]
#[case(ldst::VST | u32::from(F2_LENGTH | F2_STRIDE), "vst.w.l.s v9, x3")]
#[case(ldst::VSTQ, "vstq.w v9, x3")]
fn test_load_store(#[case] func2: u32, #[case] expected: &str) {
    assert_eq!(disassemble(I::ldst(func2, 9, 3).build()), expected);
}

#[test]
fn test_dup() {
    let word = I::vx(7, ldst::VDUP, 2, 0, 5).sz(SZ_B).build();
    assert_eq!(disassemble(word), "vdup.b.x v2, x5");
}

#[test]
fn test_slides_show_count() {
    let vertical = I::vv(FUNC1_FORMAT6, format6::VSLIDEVN | 2, 1, 4, 0).build();
    assert_eq!(disassemble(vertical), "vslidevn.w.v v1, v4, 3");
    let horizontal = I::vv(FUNC1_FORMAT6, format6::VSLIDEHP, 1, 2, 3).sz(SZ_B).build();
    assert_eq!(disassemble(horizontal), "vslidehp.b.vv v1, v2, v3, 1");
}

#[test]
fn test_conv_forms() {
    assert_eq!(
        disassemble(I::conv(FUNC1_VDWCONV, 0, 10, 1, 20).build()),
        "vdwconv.vxv v0, v10, x1, v20"
    );
    assert_eq!(
        disassemble(I::conv(FUNC1_ACSET, 0, 4, 2, 0).build()),
        "acset.v v0, v4, x2"
    );
    assert_eq!(disassemble(I::conv(FUNC1_ACLR, 0, 0, 3, 0).build()), "aclr x3");
}

#[test]
fn test_undefined_words() {
    assert_eq!(disassemble(0xFFFF_FFFF), "undef 0xffffffff");
    assert_eq!(
        disassemble(I::vv(FUNC1_FORMAT0, format0::VADD, 1, 2, 3).sz(3).build()),
        "undef 0x0030b040"
    );
}

#[test]
fn test_every_entry_disassembles_to_its_name() {
    for entry in &OPCODE_TABLE[1..] {
        let text = disassemble(entry.legalize(0));
        let base = entry.name.split('.').next().unwrap_or(entry.name);
        assert!(text.starts_with(base), "{}: {text}", entry.name);
        assert!(!text.starts_with("undef"), "{}", entry.name);
    }
}
