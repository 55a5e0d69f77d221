//! Convolution engine and accumulator bank.
//!
//! The bank is a `lanes x lanes` matrix of 32-bit accumulators; row `r`
//! shadows vector register `accumulator_base + r`. It provides:
//! 1. **Depthwise convolution:** A 3-tap multiply-accumulate per byte position
//!    into rows 0..4, with a sparsity pattern reusing the previous call's taps.
//! 2. **Outer product:** Byte-wise dot products of one register's lanes against
//!    another's, accumulated into a range of rows.
//! 3. **Bank access:** Row set, column (transpose) set and row clear.

use super::LaneInputs;
use super::lanes::sext;
use crate::common::constants::{DWCONV_ROWS, DWCONV_TAPS};
use crate::isa::ctrl::{ConvCtrl, DwconvCtrl};
use crate::isa::op::VOp;
use crate::isa::operation::{Operation, SrcSlot};

const TAPS: [SrcSlot; DWCONV_TAPS] = [SrcSlot::Vs, SrcSlot::Vt, SrcSlot::Vu];
const WEIGHTS: [SrcSlot; DWCONV_TAPS] = [SrcSlot::Vx, SrcSlot::Vy, SrcSlot::Vz];

/// Accumulator bank and depthwise tap history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvState {
    lanes: usize,
    acc: Vec<Vec<u32>>,
    history: [Vec<u32>; DWCONV_TAPS],
}

impl ConvState {
    /// Creates a cleared bank of `lanes` rows by `lanes` columns.
    pub fn new(lanes: usize) -> Self {
        Self {
            lanes,
            acc: vec![vec![0; lanes]; lanes],
            history: std::array::from_fn(|_| vec![0; lanes]),
        }
    }

    /// Rows (and columns) in the bank.
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Accumulator row `r`.
    pub fn row(&self, r: usize) -> &[u32] {
        &self.acc[r]
    }

    /// All accumulator rows.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.acc
    }

    /// Taps of the most recent depthwise convolution.
    pub fn history(&self) -> &[Vec<u32>; DWCONV_TAPS] {
        &self.history
    }

    /// Clears the bank and the tap history.
    pub fn clear(&mut self) {
        self.acc.iter_mut().for_each(|row| row.fill(0));
        self.history.iter_mut().for_each(|tap| tap.fill(0));
    }
}

/// Byte `j` of `word`, sign- or zero-extended.
fn byte(word: u32, j: usize, signed: bool) -> i32 {
    let v = (word >> (8 * j)) & 0xFF;
    if signed { sext(v, 8) as i32 } else { v as i32 }
}

/// Executes a convolution-engine operation, returning the rows it exposes.
///
/// # Panics
///
/// Panics if the control word has reserved bits set, or if an accumulator
/// range is not narrower than the bank.
pub fn execute(op: &Operation, inputs: &LaneInputs, state: &mut ConvState) -> Vec<Vec<u32>> {
    match op.op {
        VOp::Vdwconv => dwconv(DwconvCtrl(op.sv.data), inputs, state),
        VOp::Aconv | VOp::Acset | VOp::Actr | VOp::Aclr => {
            let ctrl = ConvCtrl(op.sv.data);
            assert_eq!(ctrl.reserved(), 0, "accumulator control reserved bits set");
            assert!(
                (ctrl.width() as usize) < state.lanes,
                "accumulator range {}..={} wider than {} lanes",
                ctrl.start(),
                ctrl.stop(),
                state.lanes
            );
            bank(op.op, ctrl, inputs, state);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn dwconv(ctrl: DwconvCtrl, inputs: &LaneInputs, state: &mut ConvState) -> Vec<Vec<u32>> {
    assert_eq!(ctrl.reserved(), 0, "vdwconv control reserved bits set");
    let current: [Vec<u32>; DWCONV_TAPS] = TAPS.map(|slot| inputs.port(slot).to_vec());
    let [_, prev1, prev2] = &state.history;
    let window: [&[u32]; DWCONV_TAPS] = match ctrl.sparsity() {
        1 => [prev2, &current[0], &current[1]],
        2 => [prev1, prev2, &current[0]],
        _ => [&current[0], &current[1], &current[2]],
    };
    let weights = WEIGHTS.map(|slot| inputs.port(slot));

    let mut rows = vec![vec![0_u32; state.lanes]; DWCONV_ROWS];
    for (j, row) in rows.iter_mut().enumerate() {
        for (i, out) in row.iter_mut().enumerate() {
            let sum = window.iter().zip(&weights).fold(0_i32, |acc, (a, w)| {
                let x = byte(a[i], j, ctrl.asign()) + ctrl.abias();
                let y = byte(w[i], j, ctrl.bsign()) + ctrl.bbias();
                acc.wrapping_add(x.wrapping_mul(y))
            });
            *out = sum as u32;
        }
    }

    for (acc_row, sum_row) in state.acc.iter_mut().zip(&rows) {
        for (acc, sum) in acc_row.iter_mut().zip(sum_row) {
            *acc = if ctrl.accumulate() { acc.wrapping_add(*sum) } else { *sum };
        }
    }
    state.history = current;
    state.acc[..DWCONV_ROWS].to_vec()
}

fn bank(vop: VOp, ctrl: ConvCtrl, inputs: &LaneInputs, state: &mut ConvState) {
    let lanes = state.lanes;
    let range: Vec<usize> = (0..=ctrl.width() as usize)
        .map(|k| (ctrl.start() as usize + k) % lanes)
        .collect();
    let a = inputs.port(SrcSlot::Vs);

    match vop {
        VOp::Aconv => {
            let b = inputs.port(SrcSlot::Vu);
            for &r in &range {
                for c in 0..lanes {
                    let dot = (0..4).fold(0_i32, |acc, j| {
                        let x = byte(a[r], j, ctrl.sdata1()) + ctrl.sbias1();
                        let y = byte(b[c], j, ctrl.sdata2()) + ctrl.sbias2();
                        acc.wrapping_add(x.wrapping_mul(y))
                    });
                    state.acc[r][c] = state.acc[r][c].wrapping_add(dot as u32);
                }
            }
        }
        VOp::Acset => {
            for &r in &range {
                state.acc[r].copy_from_slice(a);
            }
        }
        VOp::Actr => {
            for &c in &range {
                for (row, word) in state.acc.iter_mut().zip(a) {
                    row[c] = *word;
                }
            }
        }
        _ => {
            for &r in &range {
                state.acc[r].fill(0);
            }
        }
    }
}
