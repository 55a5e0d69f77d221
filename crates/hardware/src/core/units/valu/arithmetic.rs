//! VALU arithmetic operations.
//!
//! Implements wrapping add/subtract (including reverse subtract and the
//! three-input add), absolute difference, min/max, halving add/subtract with
//! optional rounding and saturating add/subtract.
//!
//! Signed variants interpret elements as two's complement; the `u` sub-format
//! bit selects unsigned interpretation.

use super::lanes::{ext, map2, map3, saturate};
use crate::isa::op::VOp;
use crate::isa::operation::Operation;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The decoded operation (must be an arithmetic variant).
/// * `a`  - First operand (`vs`).
/// * `b`  - Second operand (`vt` or the replicated scalar).
/// * `c`  - Third operand (`vu`, only read by `vadd3`).
///
/// # Returns
///
/// The destination register. Returns zeros for non-arithmetic opcodes.
pub fn execute(op: &Operation, a: &[u32], b: &[u32], c: &[u32]) -> Vec<u32> {
    let bits = op.element_bits();
    let u = op.is_unsigned();
    let r = i64::from(op.rounds());
    let x = |v| ext(v, bits, u);

    match op.op {
        VOp::Vadd => map2(a, b, bits, u32::wrapping_add),
        VOp::Vsub => map2(a, b, bits, u32::wrapping_sub),
        VOp::Vrsub => map2(a, b, bits, |p, q| q.wrapping_sub(p)),
        VOp::Vadd3 => map3(a, b, c, bits, |p, q, s| p.wrapping_add(q).wrapping_add(s)),
        VOp::Vabsd => map2(a, b, bits, |p, q| (x(p) - x(q)).unsigned_abs() as u32),
        VOp::Vmax => map2(a, b, bits, |p, q| if x(p) >= x(q) { p } else { q }),
        VOp::Vmin => map2(a, b, bits, |p, q| if x(p) <= x(q) { p } else { q }),
        VOp::Vhadd => map2(a, b, bits, |p, q| ((x(p) + x(q) + r) >> 1) as u32),
        VOp::Vhsub => map2(a, b, bits, |p, q| ((x(p) - x(q) + r) >> 1) as u32),
        VOp::Vsadd => map2(a, b, bits, |p, q| saturate(i128::from(x(p) + x(q)), bits, u)),
        VOp::Vssub => map2(a, b, bits, |p, q| saturate(i128::from(x(p) - x(q)), bits, u)),
        _ => vec![0; a.len()],
    }
}
