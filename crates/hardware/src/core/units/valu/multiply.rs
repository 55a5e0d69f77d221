//! VALU multiply operations.
//!
//! Products are formed at 128-bit precision so the unsigned 32x32 case and the
//! rounding bias never overflow.

use super::lanes::{elem_mask, ext, map2, map3, saturate, sext};
use crate::isa::op::VOp;
use crate::isa::operation::Operation;

/// Executes a multiply operation.
///
/// * `vmacc`: `c + a * b`
/// * `vmadd`: `c * b + a`
pub fn execute(op: &Operation, a: &[u32], b: &[u32], c: &[u32]) -> Vec<u32> {
    let bits = op.element_bits();
    let u = op.is_unsigned();

    match op.op {
        VOp::Vmul => mul(a, b, bits),
        VOp::Vmuls => map2(a, b, bits, |p, q| {
            saturate(i128::from(ext(p, bits, u)) * i128::from(ext(q, bits, u)), bits, u)
        }),
        VOp::Vmulh => mulh(a, b, bits, u, op.rounds()),
        VOp::Vdmulh => map2(a, b, bits, |p, q| dmulh(p, q, bits, op.rounds())),
        VOp::Vmacc => map3(a, b, c, bits, |p, q, s| s.wrapping_add(p.wrapping_mul(q))),
        VOp::Vmadd => map3(a, b, c, bits, |p, q, s| s.wrapping_mul(q).wrapping_add(p)),
        _ => vec![0; a.len()],
    }
}

/// Low half of the product.
pub fn mul(a: &[u32], b: &[u32], bits: u32) -> Vec<u32> {
    map2(a, b, bits, u32::wrapping_mul)
}

/// High half of the product, optionally rounded.
pub fn mulh(a: &[u32], b: &[u32], bits: u32, unsigned: bool, round: bool) -> Vec<u32> {
    let bias = if round { 1_i128 << (bits - 1) } else { 0 };
    map2(a, b, bits, |p, q| {
        let product = i128::from(ext(p, bits, unsigned)) * i128::from(ext(q, bits, unsigned));
        ((product + bias) >> bits) as u32
    })
}

/// Saturating doubling multiply high; only `MIN * MIN` saturates.
fn dmulh(p: u32, q: u32, bits: u32, round: bool) -> u32 {
    let (sp, sq) = (sext(p, bits), sext(q, bits));
    let min = -(1_i64 << (bits - 1));
    if sp == min && sq == min {
        return elem_mask(bits) >> 1;
    }
    let bias = if round { 1_i128 << (bits - 1) } else { 0 };
    ((2 * i128::from(sp) * i128::from(sq) + bias) >> bits) as u32
}
