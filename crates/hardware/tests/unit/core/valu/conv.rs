//! Convolution Engine Tests.
//!
//! Depthwise convolution and accumulator bank operations driven through
//! decoded `.vxv` words.

use pretty_assertions::assert_eq;
use rstest::rstest;
use vref_core::Config;
use vref_core::core::units::valu::{ConvState, LaneInputs, Valu};
use vref_core::isa::decode::Decoder;
use vref_core::isa::op::VOp;
use vref_core::isa::opcodes::{FUNC1_ACLR, FUNC1_ACONV, FUNC1_ACSET, FUNC1_ACTR, FUNC1_VDWCONV};
use vref_core::isa::operation::{Operation, SrcSlot};

use crate::common::builder::instruction::InstructionBuilder as I;

const LANES: usize = 4;

struct Bench {
    decoder: Decoder,
    alu: Valu,
    state: ConvState,
}

impl Bench {
    fn new() -> Self {
        let config = Config::from_json(r#"{ "vector": { "vector_bits": 128 } }"#).unwrap();
        Self {
            decoder: Decoder::new(&config),
            alu: Valu::new(LANES),
            state: ConvState::new(LANES),
        }
    }

    fn op(&self, func1: u32, ctrl: u32) -> Operation {
        self.decoder.decode_word(I::conv(func1, 0, 8, 1, 16).build(), 0, ctrl)
    }

    fn run(&mut self, func1: u32, ctrl: u32, inputs: &LaneInputs) -> Vec<Vec<u32>> {
        let op = self.op(func1, ctrl);
        self.alu
            .evaluate(&op, inputs, &mut self.state)
            .iter()
            .map(|(_, lanes)| lanes.to_vec())
            .collect()
    }
}

fn taps_and_weights(tap: u32, weight: u32) -> LaneInputs {
    [SrcSlot::Vs, SrcSlot::Vt, SrcSlot::Vu]
        .iter()
        .fold(LaneInputs::new(LANES), |acc, slot| acc.with(*slot, &[tap; LANES]))
        .with(SrcSlot::Vx, &[weight; LANES])
        .with(SrcSlot::Vy, &[weight; LANES])
        .with(SrcSlot::Vz, &[weight; LANES])
}

#[test]
fn test_decoded_control_routes_to_engine() {
    let bench = Bench::new();
    assert_eq!(bench.op(FUNC1_VDWCONV, 0).op, VOp::Vdwconv);
    assert_eq!(bench.op(FUNC1_ACLR, 0).op, VOp::Aclr);
    assert_eq!(bench.op(FUNC1_ACLR, 0).read_active, 0);
}

#[test]
fn test_dwconv_accumulate_from_cleared_bank() {
    let mut bench = Bench::new();
    let inputs = taps_and_weights(0x0101_0101, 0x0202_0202);
    // mode 1 accumulates; the bank starts cleared.
    let rows = bench.run(FUNC1_VDWCONV, 1, &inputs);
    assert_eq!(rows, vec![vec![6; LANES]; 4]);
    let rows = bench.run(FUNC1_VDWCONV, 1, &inputs);
    assert_eq!(rows, vec![vec![12; LANES]; 4]);
    let rows = bench.run(FUNC1_VDWCONV, 0, &inputs);
    assert_eq!(rows, vec![vec![6; LANES]; 4]);
}

/// Distinct taps per slot and weights 1, 10, 100, so a row sum names its window.
fn window_inputs(taps: [u32; 3]) -> LaneInputs {
    [SrcSlot::Vs, SrcSlot::Vt, SrcSlot::Vu]
        .iter()
        .zip(taps)
        .fold(LaneInputs::new(LANES), |acc, (slot, tap)| {
            acc.with(*slot, &[tap * 0x0101_0101; LANES])
        })
        .with(SrcSlot::Vx, &[0x0101_0101; LANES])
        .with(SrcSlot::Vy, &[10 * 0x0101_0101; LANES])
        .with(SrcSlot::Vz, &[100 * 0x0101_0101; LANES])
}

#[rstest]
#[case::current(0, 4 + 50 + 600)]
#[case::one_back(1, 3 + 40 + 500)]
#[case::two_back(2, 2 + 30 + 400)]
#[case::reserved_as_current(3, 4 + 50 + 600)]
fn test_dwconv_sparsity_windows(#[case] sparsity: u32, #[case] sum: u32) {
    let mut bench = Bench::new();
    let _ = bench.run(FUNC1_VDWCONV, 0, &window_inputs([1, 2, 3]));
    let rows = bench.run(FUNC1_VDWCONV, sparsity << 2, &window_inputs([4, 5, 6]));
    assert_eq!(rows, vec![vec![sum; LANES]; 4]);
}

#[test]
fn test_dwconv_history_follows_accumulate() {
    let mut bench = Bench::new();
    let _ = bench.run(FUNC1_VDWCONV, 1, &window_inputs([1, 2, 3]));
    assert_eq!(bench.state.history()[1], vec![2 * 0x0101_0101; LANES]);
    assert_eq!(bench.state.history()[2], vec![3 * 0x0101_0101; LANES]);

    // Accumulating with window [prev1, prev2, cur0] on top of 1 + 20 + 300.
    let rows = bench.run(FUNC1_VDWCONV, 1 | (2 << 2), &window_inputs([7, 8, 9]));
    assert_eq!(rows, vec![vec![321 + 2 + 30 + 700; LANES]; 4]);
    assert_eq!(bench.state.history()[0], vec![7 * 0x0101_0101; LANES]);

    // The previous call accumulated, and its taps still feed the next window.
    let rows = bench.run(FUNC1_VDWCONV, 1 << 2, &window_inputs([0, 0, 0]));
    assert_eq!(rows, vec![vec![9; LANES]; 4]);
}

#[test]
fn test_bank_readers_see_accumulator() {
    let bench = Bench::new();
    let bank = bench.decoder.accumulator_mask();
    assert_eq!(bank, 0xF << 48);
    assert_eq!(bench.op(FUNC1_ACONV, 0).read_active & bank, bank);
    assert_eq!(bench.op(FUNC1_VDWCONV, 1).read_active & bank, bank);
    assert_eq!(bench.op(FUNC1_VDWCONV, 0).read_active & bank, 0);
    assert_eq!(bench.op(FUNC1_ACSET, 0).read_active & bank, 0);
}

#[test]
fn test_dwconv_weight_bias() {
    let mut bench = Bench::new();
    // bbias = -2 cancels the 0x02 weights.
    let ctrl = (0x1FE_u32) << 18;
    let rows = bench.run(FUNC1_VDWCONV, ctrl, &taps_and_weights(0x0101_0101, 0x0202_0202));
    assert_eq!(rows, vec![vec![0; LANES]; 4]);
}

#[test]
fn test_dwconv_signed_taps() {
    let mut bench = Bench::new();
    // asign: 0xFF taps are -1, so each byte row sums to 3 * (-1 * 2).
    let rows = bench.run(FUNC1_VDWCONV, 1 << 17, &taps_and_weights(0xFFFF_FFFF, 0x0202_0202));
    assert_eq!(rows, vec![vec![(-6_i32) as u32; LANES]; 4]);
}

#[test]
fn test_aconv_with_bias() {
    let mut bench = Bench::new();
    let inputs = LaneInputs::new(LANES)
        .with(SrcSlot::Vs, &[0, 0, 0, 0])
        .with(SrcSlot::Vu, &[1, 1, 1, 1]);
    // Rows 0..=0, sbias1 = 1: each byte of A becomes 1, so row 0 gets the
    // byte sum of every column of B.
    let rows = bench.run(FUNC1_ACONV, 1 << 10, &inputs);
    assert!(rows.is_empty());
    assert_eq!(bench.state.row(0), &[1; LANES]);
    assert_eq!(bench.state.row(1), &[0; LANES]);
}

#[test]
fn test_acset_wraps_rows() {
    let mut bench = Bench::new();
    let inputs = LaneInputs::new(LANES).with(SrcSlot::Vs, &[5, 6, 7, 8]);
    // start 3, stop 4: rows 3 and 0.
    let _ = bench.run(FUNC1_ACSET, (4 << 5) | 3, &inputs);
    assert_eq!(bench.state.row(3), &[5, 6, 7, 8]);
    assert_eq!(bench.state.row(0), &[5, 6, 7, 8]);
    assert_eq!(bench.state.row(1), &[0; LANES]);
}

#[test]
fn test_actr_writes_columns() {
    let mut bench = Bench::new();
    let inputs = LaneInputs::new(LANES).with(SrcSlot::Vs, &[5, 6, 7, 8]);
    let _ = bench.run(FUNC1_ACTR, (1 << 5) | 1, &inputs);
    let column: Vec<u32> = bench.state.rows().iter().map(|row| row[1]).collect();
    assert_eq!(column, vec![5, 6, 7, 8]);
    assert_eq!(bench.state.row(0), &[0, 5, 0, 0]);
}

#[test]
fn test_aclr_range() {
    let mut bench = Bench::new();
    let inputs = LaneInputs::new(LANES).with(SrcSlot::Vs, &[9; LANES]);
    let _ = bench.run(FUNC1_ACSET, 3 << 5, &inputs);
    let _ = bench.run(FUNC1_ACLR, (2 << 5) | 1, &inputs);
    assert_eq!(bench.state.row(0), &[9; LANES]);
    assert_eq!(bench.state.row(1), &[0; LANES]);
    assert_eq!(bench.state.row(2), &[0; LANES]);
    assert_eq!(bench.state.row(3), &[9; LANES]);
}

#[test]
#[should_panic(expected = "reserved")]
fn test_reserved_control_bits_panic() {
    let mut bench = Bench::new();
    let _ = bench.run(FUNC1_ACLR, 1 << 31, &LaneInputs::new(LANES));
}

#[test]
#[should_panic(expected = "wider")]
fn test_range_as_wide_as_bank_panics() {
    let mut bench = Bench::new();
    let _ = bench.run(FUNC1_ACLR, (LANES as u32) << 5, &LaneInputs::new(LANES));
}
