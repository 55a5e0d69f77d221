//! VALU widening, pairwise and narrowing operations.
//!
//! Widening operations read `bits`-wide elements and write `2 * bits`-wide
//! results. Even-indexed source elements go to the first destination and
//! odd-indexed ones to the second, so a register pair holds the full result.
//! Word-sized sources have no wider element type; those produce zeros.
//!
//! Narrowing shifts read two (`vsrans`) or four (`vsraqs`) source registers
//! and interleave their saturated results into one destination register.

use super::LaneInputs;
use super::lanes::{count, ext, get, put, saturate};
use crate::isa::op::VOp;
use crate::isa::operation::{Operation, SrcSlot};

/// Executes a widening, pairwise or narrowing operation.
///
/// `b` is the second operand: the narrow addend for `vacc` and the shift
/// amounts for the narrowing shifts.
pub fn execute(op: &Operation, inputs: &LaneInputs, b: &[u32]) -> Vec<Vec<u32>> {
    let bits = op.element_bits();
    let u = op.is_unsigned();
    let a = inputs.port(SrcSlot::Vs);

    match op.op {
        VOp::Vaddw => widen(a, b, bits, u, |p, q| p + q),
        VOp::Vsubw => widen(a, b, bits, u, |p, q| p - q),
        VOp::Vmulw => widen(a, b, bits, u, |p, q| p * q),
        VOp::Vacc => accumulate(a, inputs.port(SrcSlot::Vu), b, bits, u),
        VOp::Vpadd => vec![pairwise(a, bits, u, |p, q| p + q)],
        VOp::Vpsub => vec![pairwise(a, bits, u, |p, q| p - q)],
        VOp::Vsrans => {
            let srcs = [a, inputs.port(SrcSlot::Vu)];
            vec![narrow(&srcs, b, bits, u, op.rounds())]
        }
        VOp::Vsraqs => {
            let srcs = [
                a,
                inputs.port(SrcSlot::Vu),
                inputs.port(SrcSlot::Vx),
                inputs.port(SrcSlot::Vy),
            ];
            vec![narrow(&srcs, b, bits, u, op.rounds())]
        }
        _ => Vec::new(),
    }
}

/// Even results into the first register, odd results into the second.
fn widen(a: &[u32], b: &[u32], bits: u32, u: bool, f: impl Fn(i64, i64) -> i64) -> Vec<Vec<u32>> {
    let lanes = a.len();
    let mut out = vec![vec![0; lanes]; 2];
    if bits >= 32 {
        return out;
    }
    let wide = 2 * bits;
    for j in 0..count(lanes, wide) {
        for (half, reg) in out.iter_mut().enumerate() {
            let i = 2 * j + half;
            let r = f(ext(get(a, bits, i), bits, u), ext(get(b, bits, i), bits, u));
            put(reg, wide, j, r as u32);
        }
    }
    out
}

/// Adds narrow elements of `b` to the wide accumulator pair `lo`/`hi`.
fn accumulate(lo: &[u32], hi: &[u32], b: &[u32], bits: u32, u: bool) -> Vec<Vec<u32>> {
    let lanes = lo.len();
    let mut out = vec![vec![0; lanes]; 2];
    if bits >= 32 {
        return out;
    }
    let wide = 2 * bits;
    for j in 0..count(lanes, wide) {
        for (half, (acc, reg)) in [lo, hi].iter().zip(out.iter_mut()).enumerate() {
            let addend = ext(get(b, bits, 2 * j + half), bits, u);
            put(reg, wide, j, (i64::from(get(acc, wide, j)) + addend) as u32);
        }
    }
    out
}

/// Combines adjacent element pairs of `a` into double-width results.
fn pairwise(a: &[u32], bits: u32, u: bool, f: impl Fn(i64, i64) -> i64) -> Vec<u32> {
    let lanes = a.len();
    let mut out = vec![0; lanes];
    if bits >= 32 {
        return out;
    }
    let wide = 2 * bits;
    for j in 0..count(lanes, wide) {
        let p = ext(get(a, bits, 2 * j), bits, u);
        let q = ext(get(a, bits, 2 * j + 1), bits, u);
        put(&mut out, wide, j, f(p, q) as u32);
    }
    out
}

/// Shifts each source right, saturates to `bits / srcs.len()` and interleaves.
///
/// Result element `k + n * j` comes from element `j` of source `k`.
fn narrow(srcs: &[&[u32]], b: &[u32], bits: u32, u: bool, round: bool) -> Vec<u32> {
    let lanes = b.len();
    let n = srcs.len();
    let narrow_bits = bits / n as u32;
    let mut out = vec![0; lanes];
    for j in 0..count(lanes, bits) {
        let shift = get(b, bits, j) & (bits - 1);
        let bias = if round && shift > 0 { 1_i64 << (shift - 1) } else { 0 };
        for (k, src) in srcs.iter().enumerate() {
            let v = (ext(get(src, bits, j), bits, u) + bias) >> shift;
            put(&mut out, narrow_bits, n * j + k, saturate(i128::from(v), narrow_bits, u));
        }
    }
    out
}
