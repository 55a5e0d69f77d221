//! Sub-lane element access.
//!
//! A register is a slice of 32-bit lanes. Elements of `bits` width (2, 4, 8,
//! 16 or 32) are packed little-endian inside each lane, so element `i` lives in
//! lane `i / (32 / bits)` at bit offset `(i % (32 / bits)) * bits`.

/// Mask of the low `bits` bits.
pub const fn elem_mask(bits: u32) -> u32 {
    if bits >= 32 { u32::MAX } else { (1 << bits) - 1 }
}

/// Number of `bits`-wide elements in a register of `lanes` lanes.
pub const fn count(lanes: usize, bits: u32) -> usize {
    lanes * (32 / bits as usize)
}

/// Reads element `idx`.
pub fn get(reg: &[u32], bits: u32, idx: usize) -> u32 {
    let per = (32 / bits) as usize;
    let shift = (idx % per) as u32 * bits;
    (reg[idx / per] >> shift) & elem_mask(bits)
}

/// Writes element `idx`, truncating `value` to `bits`.
pub fn put(reg: &mut [u32], bits: u32, idx: usize, value: u32) {
    let per = (32 / bits) as usize;
    let shift = (idx % per) as u32 * bits;
    let mask = elem_mask(bits) << shift;
    let lane = &mut reg[idx / per];
    *lane = (*lane & !mask) | ((value << shift) & mask);
}

/// Sign-extends the low `bits` bits of `v`.
pub const fn sext(v: u32, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((v as u64) << shift) as i64 >> shift
}

/// Zero-extends the low `bits` bits of `v`.
pub const fn zext(v: u32, bits: u32) -> i64 {
    (v & elem_mask(bits)) as i64
}

/// Extends the low `bits` bits of `v`, signed unless `unsigned`.
pub const fn ext(v: u32, bits: u32, unsigned: bool) -> i64 {
    if unsigned { zext(v, bits) } else { sext(v, bits) }
}

/// Clamps `v` to the range of a `bits`-wide element and truncates.
pub fn saturate(v: i128, bits: u32, unsigned: bool) -> u32 {
    let (lo, hi) = if unsigned {
        (0, (1_i128 << bits) - 1)
    } else {
        (-(1_i128 << (bits - 1)), (1_i128 << (bits - 1)) - 1)
    };
    (v.clamp(lo, hi) as u32) & elem_mask(bits)
}

/// Replicates the low `bytes` bytes of `data` across a 32-bit lane.
pub const fn splat_lane(data: u32, bytes: u8) -> u32 {
    match bytes {
        1 => (data & 0xFF) * 0x0101_0101,
        2 => (data & 0xFFFF) * 0x0001_0001,
        _ => data,
    }
}

/// Applies `f` to every element of `a`.
pub fn map1(a: &[u32], bits: u32, f: impl Fn(u32) -> u32) -> Vec<u32> {
    let mut out = vec![0; a.len()];
    for i in 0..count(a.len(), bits) {
        put(&mut out, bits, i, f(get(a, bits, i)));
    }
    out
}

/// Applies `f` to every pair of elements of `a` and `b`.
pub fn map2(a: &[u32], b: &[u32], bits: u32, f: impl Fn(u32, u32) -> u32) -> Vec<u32> {
    let mut out = vec![0; a.len()];
    for i in 0..count(a.len(), bits) {
        put(&mut out, bits, i, f(get(a, bits, i), get(b, bits, i)));
    }
    out
}

/// Applies `f` to every triple of elements of `a`, `b` and `c`.
pub fn map3(a: &[u32], b: &[u32], c: &[u32], bits: u32, f: impl Fn(u32, u32, u32) -> u32) -> Vec<u32> {
    let mut out = vec![0; a.len()];
    for i in 0..count(a.len(), bits) {
        put(&mut out, bits, i, f(get(a, bits, i), get(b, bits, i), get(c, bits, i)));
    }
    out
}
