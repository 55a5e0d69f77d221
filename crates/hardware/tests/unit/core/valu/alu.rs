//! VALU Port Contract Tests.
//!
//! Each case decodes a real instruction word, fills the ports it reads and
//! checks the lanes it produces.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vref_core::core::units::valu::{ConvState, LaneInputs, LaneOutputs, Valu};
use vref_core::isa::decode::Decoder;
use vref_core::isa::func2::{format0, format1, format2, format3, format4, format6, ldst};
use vref_core::isa::opcodes::{
    FUNC1_FORMAT0, FUNC1_FORMAT1, FUNC1_FORMAT2, FUNC1_FORMAT3, FUNC1_FORMAT4, FUNC1_FORMAT6,
};
use vref_core::isa::operation::{DstSlot, Operation, SrcSlot};
use vref_core::Config;

use crate::common::builder::instruction::{InstructionBuilder as I, SZ_B, SZ_H, SZ_W};

const LANES: usize = 4;

fn config() -> Config {
    Config::from_json(r#"{ "vector": { "vector_bits": 128 } }"#).unwrap()
}

fn decode(builder: I, data: u32) -> Operation {
    Decoder::new(&config()).decode_word(builder.build(), 0, data)
}

fn run(op: &Operation, ports: &[(SrcSlot, [u32; LANES])]) -> LaneOutputs {
    let inputs = ports
        .iter()
        .fold(LaneInputs::new(LANES), |acc, (slot, value)| acc.with(*slot, value));
    Valu::new(LANES).evaluate(op, &inputs, &mut ConvState::new(LANES))
}

fn vd(out: &LaneOutputs) -> Vec<u32> {
    out.port(DstSlot::Vd).map(<[u32]>::to_vec).unwrap_or_default()
}

#[test]
fn test_add_word() {
    let op = decode(I::vv(FUNC1_FORMAT0, format0::VADD, 0, 1, 2).sz(SZ_W), 0);
    let out = run(
        &op,
        &[(SrcSlot::Vs, [1, 2, 3, u32::MAX]), (SrcSlot::Vt, [10, 20, 30, 1])],
    );
    assert_eq!(out.len(), 1);
    assert_eq!(vd(&out), vec![11, 22, 33, 0]);
}

#[rstest]
#[case(SZ_B, 0x05, 0x0505_0505)]
#[case(SZ_H, 0x1234_0005, 0x0005_0005)]
#[case(SZ_W, 0x1234_0005, 0x1234_0005)]
fn test_scalar_operand_is_splat(#[case] sz: u32, #[case] data: u32, #[case] lane: u32) {
    let op = decode(I::vx(FUNC1_FORMAT1, format1::VOR, 0, 1, 7).sz(sz), data);
    let out = run(&op, &[(SrcSlot::Vs, [0; LANES])]);
    assert_eq!(vd(&out), vec![lane; LANES]);
}

#[test]
fn test_signed_byte_compare() {
    // vgt.b: 0x7F > 0x01 is true, 0x80 (-128) > 0x01 is false.
    let op = decode(I::vv(FUNC1_FORMAT0, format0::VGT, 0, 1, 2).sz(SZ_B), 0);
    let out = run(
        &op,
        &[(SrcSlot::Vs, [0x0000_807F; LANES]), (SrcSlot::Vt, [0x0101_0101; LANES])],
    );
    assert_eq!(vd(&out), vec![0x0000_00FF; LANES]);
}

#[test]
fn test_unsigned_byte_compare() {
    let op = decode(I::vv(FUNC1_FORMAT0, format0::VGT | 1, 0, 1, 2).sz(SZ_B), 0);
    let out = run(
        &op,
        &[(SrcSlot::Vs, [0x0000_807F; LANES]), (SrcSlot::Vt, [0x0101_0101; LANES])],
    );
    assert_eq!(vd(&out), vec![0x0000_FFFF; LANES]);
}

#[test]
fn test_macc_reads_destination_port() {
    let op = decode(I::vv(FUNC1_FORMAT3, format3::VMACC, 5, 1, 2).sz(SZ_W), 0);
    let out = run(
        &op,
        &[
            (SrcSlot::Vs, [2; LANES]),
            (SrcSlot::Vt, [3; LANES]),
            (SrcSlot::Vu, [100; LANES]),
        ],
    );
    assert_eq!(vd(&out), vec![106; LANES]);
}

#[test]
fn test_shift_amount_modulo_width() {
    let op = decode(I::vx(FUNC1_FORMAT2, format2::VSLL, 0, 1, 3).sz(SZ_H), 17);
    let out = run(&op, &[(SrcSlot::Vs, [0x0001_0001; LANES])]);
    assert_eq!(vd(&out), vec![0x0002_0002; LANES]);
}

#[test]
fn test_rounding_shift_right() {
    // vsha.r with amount -1: 3 >> 1 rounds to 2.
    let op = decode(I::vx(FUNC1_FORMAT2, format2::VSHA | 2, 0, 1, 3).sz(SZ_W), u32::MAX);
    let out = run(&op, &[(SrcSlot::Vs, [3; LANES])]);
    assert_eq!(vd(&out), vec![2; LANES]);
}

#[test]
fn test_paired_multiply_drives_four_ports() {
    let op = decode(I::vx(FUNC1_FORMAT3, format3::VMULP, 8, 16, 1).sz(SZ_W), 3);
    let out = run(
        &op,
        &[
            (SrcSlot::Vs, [1; LANES]),
            (SrcSlot::Vt, [2; LANES]),
            (SrcSlot::Vu, [3; LANES]),
            (SrcSlot::Vx, [4; LANES]),
        ],
    );
    let ports: Vec<(DstSlot, Vec<u32>)> = out.iter().map(|(s, v)| (s, v.to_vec())).collect();
    assert_eq!(
        ports,
        vec![
            (DstSlot::Vd, vec![3; LANES]),
            (DstSlot::Ve, vec![6; LANES]),
            (DstSlot::Vf, vec![9; LANES]),
            (DstSlot::Vg, vec![12; LANES]),
        ]
    );
}

#[test]
fn test_widening_add_drives_pair() {
    let op = decode(I::vv(FUNC1_FORMAT4, format4::VADDW | 1, 0, 1, 2).sz(SZ_B), 0);
    let out = run(
        &op,
        &[(SrcSlot::Vs, [0xFF02_FF01; LANES]), (SrcSlot::Vt, [0x0101_0101; LANES])],
    );
    assert_eq!(out.port(DstSlot::Vd), Some(&[0x0003_0002; LANES][..]));
    assert_eq!(out.port(DstSlot::Ve), Some(&[0x0100_0100; LANES][..]));
}

#[test]
fn test_vertical_slide_uses_next_register() {
    let op = decode(I::vv(FUNC1_FORMAT6, format6::VSLIDEVN, 0, 4, 0).sz(SZ_W), 0);
    assert_eq!(op.vt().addr, 5);
    let out = run(
        &op,
        &[(SrcSlot::Vs, [0, 1, 2, 3]), (SrcSlot::Vt, [4, 5, 6, 7])],
    );
    assert_eq!(vd(&out), vec![1, 2, 3, 4]);
}

#[test]
fn test_select_uses_destination_as_fallback() {
    let op = decode(I::vv(FUNC1_FORMAT6, format6::VSEL, 3, 1, 2).sz(SZ_W), 0);
    let out = run(
        &op,
        &[
            (SrcSlot::Vs, [1, 0, 1, 0]),
            (SrcSlot::Vt, [10, 20, 30, 40]),
            (SrcSlot::Vu, [7, 8, 9, 6]),
        ],
    );
    assert_eq!(vd(&out), vec![10, 8, 30, 6]);
}

#[test]
fn test_dup_splats_scalar() {
    let op = decode(I::vx(7, ldst::VDUP, 2, 0, 5).sz(SZ_H), 0xABCD_1234);
    let out = run(&op, &[]);
    assert_eq!(vd(&out), vec![0x1234_1234; LANES]);
}

#[test]
fn test_load_store_drive_nothing() {
    let op = decode(I::ldst(ldst::VST, 1, 2), 0);
    assert!(run(&op, &[(SrcSlot::Vs, [1; LANES])]).is_empty());
}

#[test]
#[should_panic(expected = "lane count")]
fn test_mismatched_port_width_panics() {
    let _ = LaneInputs::new(LANES).with(SrcSlot::Vs, &[1, 2]);
}

#[test]
#[should_panic(expected = "unsupported lane count")]
fn test_unsupported_lane_count_panics() {
    let _ = Valu::new(2);
}
