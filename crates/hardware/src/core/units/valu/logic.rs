//! VALU logical, bit-count and comparison operations.
//!
//! Implements bitwise AND/OR/XOR/NOT, generalized bit reverse, rotate,
//! leading-sign/leading-zero/population counts, move, per-element select and
//! the six comparisons. Comparisons produce all-ones for true and zero for
//! false in the element width.

use super::lanes::{elem_mask, ext, map1, map2, map3};
use crate::isa::op::VOp;
use crate::isa::operation::Operation;

/// Executes a logical, bit-count or comparison operation.
///
/// `c` is only read by `vsel`, where it supplies the unselected value.
pub fn execute(op: &Operation, a: &[u32], b: &[u32], c: &[u32]) -> Vec<u32> {
    let bits = op.element_bits();
    let u = op.is_unsigned();
    let x = |v| ext(v, bits, u);

    match op.op {
        VOp::Vand => map2(a, b, bits, |p, q| p & q),
        VOp::Vor => map2(a, b, bits, |p, q| p | q),
        VOp::Vxor => map2(a, b, bits, |p, q| p ^ q),
        VOp::Vnot => map1(a, bits, |p| !p),
        VOp::Vrev => map2(a, b, bits, |p, q| grev(p, q, bits)),
        VOp::Vror => map2(a, b, bits, |p, q| ror(p, q, bits)),
        VOp::Vclb => map1(a, bits, |p| clb(p, bits)),
        VOp::Vclz => map1(a, bits, |p| clz(p, bits)),
        VOp::Vcpop => map1(a, bits, u32::count_ones),
        VOp::Vmv => a.to_vec(),
        VOp::Vsel => map3(a, b, c, bits, |p, q, s| if p & 1 != 0 { q } else { s }),
        VOp::Veq => map2(a, b, bits, |p, q| flag(p == q)),
        VOp::Vne => map2(a, b, bits, |p, q| flag(p != q)),
        VOp::Vlt => map2(a, b, bits, |p, q| flag(x(p) < x(q))),
        VOp::Vle => map2(a, b, bits, |p, q| flag(x(p) <= x(q))),
        VOp::Vgt => map2(a, b, bits, |p, q| flag(x(p) > x(q))),
        VOp::Vge => map2(a, b, bits, |p, q| flag(x(p) >= x(q))),
        _ => vec![0; a.len()],
    }
}

const fn flag(cond: bool) -> u32 {
    if cond { u32::MAX } else { 0 }
}

/// Generalized reverse: bit `i` moves to bit `i ^ (ctrl mod bits)`.
pub fn grev(value: u32, ctrl: u32, bits: u32) -> u32 {
    let k = ctrl & (bits - 1);
    (0..bits)
        .filter(|i| (value >> i) & 1 != 0)
        .fold(0, |acc, i| acc | (1 << (i ^ k)))
}

/// Rotate right by `amount mod bits` within a `bits`-wide element.
pub fn ror(value: u32, amount: u32, bits: u32) -> u32 {
    let s = amount & (bits - 1);
    if s == 0 {
        value
    } else {
        ((value >> s) | (value << (bits - s))) & elem_mask(bits)
    }
}

/// Leading zeros of a `bits`-wide element.
pub fn clz(value: u32, bits: u32) -> u32 {
    (value << (32 - bits)).leading_zeros().min(bits)
}

/// Leading bits equal to the sign bit, counting the sign bit itself.
pub fn clb(value: u32, bits: u32) -> u32 {
    let sign = (value >> (bits - 1)) & 1;
    if sign == 0 {
        clz(value, bits)
    } else {
        clz(!value & elem_mask(bits), bits)
    }
}
