//! VALU slide and permute operations.
//!
//! Every operation here views its two operands as one concatenated sequence
//! `A ++ B` of `2E` elements, where `E` is the per-register element count.
//! The slide count `n` is the low two sub-format bits plus one.

use super::lanes::{count, get, put};
use crate::isa::op::VOp;
use crate::isa::operation::Operation;

/// Executes a slide or permute.
///
/// * Slide to next: `out[i] = (A ++ B)[i + n]`
/// * Slide to previous: the last `n` elements of `A`, then the first `E - n` of `B`
/// * `vevn` / `vodd`: even / odd elements of `A ++ B`; `vevnodd` writes both
/// * `vzip`: interleave of the low halves, then of the high halves
pub fn execute(op: &Operation, a: &[u32], b: &[u32]) -> Vec<Vec<u32>> {
    let bits = op.element_bits();
    let lanes = a.len();
    let e = count(lanes, bits);
    let n = usize::from(op.f2 & 0x3) + 1;
    let cat = |i: usize| {
        if i < e {
            get(a, bits, i)
        } else {
            get(b, bits, i - e)
        }
    };
    let zip = |i: usize| {
        if i % 2 == 0 {
            get(a, bits, i / 2)
        } else {
            get(b, bits, i / 2)
        }
    };
    let gather = |f: &dyn Fn(usize) -> u32| {
        let mut out = vec![0; lanes];
        for i in 0..e {
            put(&mut out, bits, i, f(i));
        }
        out
    };

    match op.op {
        VOp::Vslidevn | VOp::Vslidehn => vec![gather(&|i| cat(i + n))],
        VOp::Vslidevp | VOp::Vslidehp => vec![gather(&|i| cat(i + e - n))],
        VOp::Vevn => vec![gather(&|i| cat(2 * i))],
        VOp::Vodd => vec![gather(&|i| cat(2 * i + 1))],
        VOp::Vevnodd => vec![gather(&|i| cat(2 * i)), gather(&|i| cat(2 * i + 1))],
        VOp::Vzip => vec![gather(&zip), gather(&|i| zip(i + e))],
        _ => Vec::new(),
    }
}
