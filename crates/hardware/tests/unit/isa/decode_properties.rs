//! Instruction Decode Properties.
//!
//! Verifies the decoder against the opcode table: every entry decodes the words
//! it legalizes, no word matches two entries, the reserved element size is a
//! global veto, and the activity masks agree with the bound operands.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use vref_core::core::hazard::activity;
use vref_core::isa::decode::Decoder;
use vref_core::isa::func2::{F2_POST_INC, format0, format1, format3, format4, format5, ldst};
use vref_core::isa::op::{CmdQueue, VOp};
use vref_core::isa::opcodes::{
    FUNC1_ACLR, FUNC1_ACONV, FUNC1_ACSET, FUNC1_ACTR, FUNC1_FORMAT0, FUNC1_FORMAT1, FUNC1_FORMAT3,
    FUNC1_FORMAT4, FUNC1_FORMAT5, FUNC1_VDWCONV,
};
use vref_core::isa::operation::{DstSlot, Operation, SrcSlot};
use vref_core::isa::table::OPCODE_TABLE;
use vref_core::{Config, isa::instruction::VectorBits};

use crate::common::builder::instruction::{InstructionBuilder as I, SZ_B, SZ_H, SZ_W};

fn decoder() -> Decoder {
    Decoder::new(&Config::default())
}

/// OR of the single-register or group activity of every valid source.
fn source_activity(op: &Operation) -> u64 {
    SrcSlot::ALL
        .iter()
        .map(|s| op.src(*s))
        .filter(|s| s.valid)
        .fold(0, |acc, s| acc | activity(s.addr, op.m))
}

fn dest_activity(op: &Operation) -> u64 {
    DstSlot::ALL
        .iter()
        .map(|d| op.dst(*d))
        .filter(|d| d.valid)
        .fold(0, |acc, d| acc | activity(d.addr, op.m))
}

// ──────────────────────────────────────────────────────────
// Table structure
// ──────────────────────────────────────────────────────────

#[test]
fn test_table_entries_are_disjoint() {
    let entries = &OPCODE_TABLE[1..];
    for (i, a) in entries.iter().enumerate() {
        for b in &entries[i + 1..] {
            let differ = (a.matches ^ b.matches) & a.mask & b.mask;
            assert_ne!(differ, 0, "{} and {} both match some word", a.name, b.name);
        }
    }
}

#[test]
fn test_match_constants_round_trip() {
    let decoder = decoder();
    for entry in &OPCODE_TABLE[1..] {
        let op = decoder.decode_word(entry.matches, 0, 0);
        assert_eq!(op.op, entry.op, "{}", entry.name);
    }
}

#[test]
fn test_every_entry_decodes_its_own_words() {
    let decoder = decoder();
    let mut seed = 0x9E37_79B9_u32;
    for entry in &OPCODE_TABLE[1..] {
        for _ in 0..64 {
            // xorshift32
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let word = entry.legalize(seed);
            let op = decoder.decode_word(word, 0, 0);
            assert_eq!(op.op, entry.op, "{} from {word:#010x}", entry.name);
            assert_eq!(op.raw, word);
        }
    }
}

#[test]
fn test_indexed_decode_matches_scan() {
    let decoder = decoder();
    let word = I::vv(FUNC1_FORMAT3, format3::VMACC, 1, 2, 3).build();
    let hits: Vec<usize> = (1..OPCODE_TABLE.len())
        .filter(|&i| decoder.decode(i, word, 0, 0).is_some())
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(OPCODE_TABLE[hits[0]].name, "vmacc.vv");
    assert_eq!(decoder.decode(hits[0], word, 0, 0), Some(decoder.decode_word(word, 0, 0)));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_index_past_end_panics() {
    let _ = decoder().decode(OPCODE_TABLE.len(), 0, 0, 0);
}

// ──────────────────────────────────────────────────────────
// Global veto and undefined words
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(I::vv(FUNC1_FORMAT0, format0::VADD, 3, 5, 9))]
#[case(I::ldst(ldst::VLD, 3, 1))]
#[case(I::conv(FUNC1_ACLR, 0, 0, 0, 0))]
fn test_reserved_size_is_vetoed(#[case] builder: I) {
    let decoder = decoder();
    let word = builder.sz(3).build();
    assert_eq!(word.sz(), 3);
    for i in 1..OPCODE_TABLE.len() {
        assert_eq!(decoder.decode(i, word, 0, 0), None, "{}", OPCODE_TABLE[i].name);
    }
    let op = decoder.decode_word(word, 0, 0);
    assert_eq!(op.op, VOp::Undef);
    assert_eq!(op.read_active, 0);
    assert_eq!(op.write_active, 0);
}

#[test]
fn test_unassigned_form_is_undefined() {
    let op = decoder().decode_word(0b11, 0, 0);
    assert!(!op.is_defined());
    assert_eq!(op.raw, 0b11);
}

#[test]
fn test_unary_has_no_vx_form() {
    let word = I::vx(FUNC1_FORMAT1, format1::VNOT, 1, 2, 3).build();
    assert_eq!(decoder().decode_word(word, 0, 0).op, VOp::Undef);
}

// ──────────────────────────────────────────────────────────
// Operand binding scenarios
// ──────────────────────────────────────────────────────────

#[test]
fn test_vadd_word_scenario() {
    let op = decoder().decode_word(I::vv(FUNC1_FORMAT0, format0::VADD, 3, 5, 9).sz(SZ_W).build(), 0, 0);
    assert_eq!(op.op, VOp::Vadd);
    assert_eq!(op.sz, 4);
    assert_eq!(op.cmdq, CmdQueue::Alu);
    assert_eq!(op.read_active, (1 << 5) | (1 << 9));
    assert_eq!(op.write_active, 1 << 3);
    assert!(op.vd().valid && op.vd().addr == 3);
    assert!(!op.ve().valid);
    assert!(!op.sv.valid);
}

#[test]
fn test_vx_binds_scalar() {
    let op = decoder().decode_word(I::vx(FUNC1_FORMAT0, format0::VSUB, 3, 5, 7).build(), 0x100, 42);
    assert!(!op.vt().valid);
    assert!(op.sv.valid);
    assert_eq!(op.sv.data, 42);
    assert_eq!(op.sv.addr, 0x100);
    assert_eq!(op.read_active, 1 << 5);
}

#[rstest]
#[case(false)]
#[case(true)]
fn test_dual_issue_quad_expansion(#[case] m: bool) {
    let word = I::vx(FUNC1_FORMAT3, format3::VMULHP, 4, 8, 1).multi(m).build();
    let op = decoder().decode_word(word, 0, 7);
    assert_eq!(op.op, VOp::Vmulhp);
    assert!(!op.m);
    assert_eq!(op.write_active, 0xF << 4);
    assert_eq!(op.read_active, 0xF << 8);
    assert_eq!(
        [op.vd().addr, op.ve().addr, op.vf().addr, op.vg().addr],
        [4, 5, 6, 7]
    );
    assert_eq!(
        [op.vs().addr, op.vt().addr, op.vu().addr, op.vx().addr],
        [8, 9, 10, 11]
    );
    assert!(!op.vy().valid);
    assert!(op.sv.valid);
}

#[test]
fn test_dual_issue_vv_reads_vy() {
    let word = I::vv(FUNC1_FORMAT3, format3::VMULP, 4, 8, 20).build();
    let op = decoder().decode_word(word, 0, 0);
    assert_eq!(op.read_active, (0xF << 8) | (1 << 20));
    assert!(op.vy().valid && op.vy().addr == 20);
    assert!(!op.sv.valid);
}

#[test]
fn test_stripmined_binary_reads_groups() {
    let word = I::vv(FUNC1_FORMAT0, format0::VADD, 1, 6, 9).multi(true).build();
    let op = decoder().decode_word(word, 0, 0);
    assert!(op.m);
    assert_eq!(op.write_active, 0xF);
    assert_eq!(op.read_active, (0xF << 4) | (0xF << 8));
}

#[test]
fn test_accumulate_reads_destination() {
    let word = I::vv(FUNC1_FORMAT3, format3::VMACC, 12, 1, 2).build();
    let op = decoder().decode_word(word, 0, 0);
    assert!(op.vu().valid && op.vu().addr == 12);
    assert_eq!(op.read_active, (1 << 12) | (1 << 1) | (1 << 2));
}

#[rstest]
#[case(false, 0b11 << 10)]
#[case(true, 0xFF << 8)]
fn test_widening_writes_pair(#[case] m: bool, #[case] write: u64) {
    let word = I::vv(FUNC1_FORMAT4, format4::VADDW, 10, 0, 1).sz(SZ_H).multi(m).build();
    let op = decoder().decode_word(word, 0, 0);
    assert_eq!(op.op, VOp::Vaddw);
    assert_eq!(op.write_active, write);
    assert!(op.ve().valid);
}

#[test]
fn test_widening_pair_past_v63_leaves_mask() {
    let word = I::vv(FUNC1_FORMAT4, format4::VSUBW, 63, 0, 1).sz(SZ_B).build();
    let op = decoder().decode_word(word, 0, 0);
    assert_eq!(op.ve().addr, 0);
    assert_eq!(op.write_active, 1 << 63);

    let grouped = I::vv(FUNC1_FORMAT4, format4::VSUBW, 61, 0, 1).sz(SZ_B).multi(true).build();
    assert_eq!(decoder().decode_word(grouped, 0, 0).write_active, 0xF << 60);
}

#[test]
fn test_quarter_narrowing_reads_four_sources() {
    let word = I::vx(FUNC1_FORMAT5, format5::VSRAQS, 0, 8, 2).multi(true).build();
    let op = decoder().decode_word(word, 0, 0);
    assert_eq!(op.op, VOp::Vsraqs);
    assert_eq!(op.read_active, 0xFFFF << 8);
    assert_eq!(op.write_active, 0xF);
}

#[test]
fn test_load_store_binding() {
    let decoder = decoder();
    let load = decoder.decode_word(I::ldst(ldst::VLD | u32::from(F2_POST_INC), 9, 3).build(), 0x2000, 16);
    assert_eq!(load.op, VOp::Vld);
    assert_eq!(load.cmdq, CmdQueue::LdSt { ld: true, st: false });
    assert!(load.cmdsync);
    assert_eq!(load.write_active, 1 << 9);
    assert_eq!(load.read_active, 0);
    assert_eq!(load.sv.addr, 0x2000);

    let store = decoder.decode_word(I::ldst(ldst::VST, 9, 3).build(), 0x2000, 16);
    assert_eq!(store.op, VOp::Vst);
    assert_eq!(store.cmdq, CmdQueue::LdSt { ld: false, st: true });
    assert!(!store.cmdsync);
    assert_eq!(store.read_active, 1 << 9);
    assert_eq!(store.write_active, 0);
    assert!(store.vs().valid && store.vs().addr == 9);
}

#[test]
fn test_conv_writes_accumulator_bank() {
    let decoder = decoder();
    let op = decoder.decode_word(I::conv(FUNC1_ACONV, 0, 4, 1, 8).build(), 0, 0);
    assert_eq!(op.op, VOp::Aconv);
    assert_eq!(op.cmdq, CmdQueue::Conv);
    assert_eq!(op.write_active, 0xFF << 48);
    assert_eq!(op.write_active, decoder.accumulator_mask());
    assert_eq!(op.read_active, (1 << 4) | (1 << 8) | decoder.accumulator_mask());
    assert_eq!(op.f2, 0);
}

#[rstest]
#[case::acset(FUNC1_ACSET, 0, 1 << 4)]
#[case::actr(FUNC1_ACTR, 0, 1 << 4)]
#[case::aclr(FUNC1_ACLR, 0, 0)]
#[case::dwconv_overwrite(FUNC1_VDWCONV, 0, (0b111 << 4) | (0b111 << 8))]
#[case::dwconv_accumulate(FUNC1_VDWCONV, 1, (0b111 << 4) | (0b111 << 8) | (0xFF << 48))]
fn test_conv_reads_bank_only_when_accumulating(
    #[case] func1: u32,
    #[case] data: u32,
    #[case] read: u64,
) {
    let op = decoder().decode_word(I::conv(func1, 0, 4, 1, 8).build(), 0, data);
    assert_eq!(op.read_active, read);
    assert_eq!(op.write_active, 0xFF << 48);
}

#[test]
fn test_dwconv_binds_taps_and_weights() {
    // regbase = 2
    let op = decoder().decode_word(I::conv(FUNC1_VDWCONV, 0, 10, 1, 20).build(), 0, 2 << 4);
    assert_eq!(
        [op.vs().addr, op.vt().addr, op.vu().addr],
        [12, 13, 14]
    );
    assert_eq!(
        [op.vx().addr, op.vy().addr, op.vz().addr],
        [20, 21, 22]
    );
    assert_eq!(op.read_active, (0b111 << 12) | (0b111 << 20));
}

#[rstest]
#[case::byte(SZ_B, 1)]
#[case::half(SZ_H, 2)]
#[case::word(SZ_W, 4)]
fn test_size_field_decodes_to_bytes(#[case] sz: u32, #[case] bytes: u8) {
    let word = I::vv(FUNC1_FORMAT0, format0::VADD, 1, 2, 3).sz(sz).build();
    assert_eq!(decoder().decode_word(word, 0, 0).sz, bytes);
}

#[test]
fn test_conv_requires_byte_size() {
    let word = I::conv(FUNC1_ACLR, 0, 0, 0, 0).sz(SZ_H).build();
    assert_eq!(decoder().decode_word(word, 0, 0).op, VOp::Undef);
}

// ──────────────────────────────────────────────────────────
// Properties
// ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_activity_matches_operands(word in any::<u32>()) {
        let op = decoder().decode_word(word, 0, 0);
        prop_assume!(op.is_defined() && !op.op.is_conv());
        prop_assert_eq!(op.read_active & !source_activity(&op), 0);
        prop_assert_eq!(op.write_active & !dest_activity(&op), 0);
        // Offset operands only fall off the top of the file from v48 upwards.
        if word.vd() < 48 && word.vs() < 48 {
            prop_assert_eq!(op.read_active, source_activity(&op));
            prop_assert_eq!(op.write_active, dest_activity(&op));
        }
    }

    #[test]
    fn prop_decode_is_pure(word in any::<u32>(), addr in any::<u32>()) {
        let decoder = decoder();
        prop_assert_eq!(decoder.decode_word(word, addr, 0), decoder.decode_word(word, addr, 0));
    }

    #[test]
    fn prop_reserved_size_never_decodes(word in any::<u32>()) {
        let op = decoder().decode_word(word | (3 << 12), 0, 0);
        prop_assert_eq!(op.op, VOp::Undef);
    }
}
