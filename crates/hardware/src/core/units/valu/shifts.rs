//! VALU shift operations.
//!
//! Fixed-direction shifts (`vsll`, `vsra`, `vsrl`) take the amount modulo the
//! element width. The bidirectional shifts (`vsha`, `vshl`, `vshap`) take a
//! signed amount: positive shifts left, negative shifts right, with optional
//! round-to-nearest on right shifts. Amounts at or past the width shift every
//! bit out.

use super::lanes::{map2, sext, zext};
use crate::isa::op::VOp;
use crate::isa::operation::Operation;

/// Executes a shift operation. `b` supplies the per-element shift amounts.
pub fn execute(op: &Operation, a: &[u32], b: &[u32]) -> Vec<u32> {
    let bits = op.element_bits();
    let amount = |q: u32| q & (bits - 1);

    match op.op {
        VOp::Vsll => map2(a, b, bits, |p, q| p << amount(q)),
        VOp::Vsra => map2(a, b, bits, |p, q| (sext(p, bits) >> amount(q)) as u32),
        VOp::Vsrl => map2(a, b, bits, |p, q| p >> amount(q)),
        VOp::Vsha => sha(a, b, bits, op.rounds()),
        VOp::Vshl => shl(a, b, bits, op.rounds()),
        _ => vec![0; a.len()],
    }
}

/// Bidirectional arithmetic shift.
pub fn sha(a: &[u32], b: &[u32], bits: u32, round: bool) -> Vec<u32> {
    map2(a, b, bits, |p, q| bidirectional(sext(p, bits), sext(q, bits), bits, round))
}

/// Bidirectional logical shift.
pub fn shl(a: &[u32], b: &[u32], bits: u32, round: bool) -> Vec<u32> {
    map2(a, b, bits, |p, q| bidirectional(zext(p, bits), sext(q, bits), bits, round))
}

fn bidirectional(value: i64, amount: i64, bits: u32, round: bool) -> u32 {
    let width = i64::from(bits);
    if amount >= width {
        0
    } else if amount >= 0 {
        (value << amount) as u32
    } else {
        let n = (-amount).min(width);
        let bias = if round { 1 << (n - 1) } else { 0 };
        ((value + bias) >> n) as u32
    }
}
