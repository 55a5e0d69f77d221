//! SIMD Vector ALU (VALU).
//!
//! This module implements the functional model of the vector ALU. Given a
//! decoded [`Operation`] and the contents of its source registers (one slice of
//! 32-bit lanes per source port), it returns the contents of each destination
//! register in port order.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, sub, absd, min/max, halving and saturating arithmetic
//! - [`logic`]:      Bitwise, bit-count, move, select and compares
//! - [`shifts`]:     Fixed and bidirectional shifts
//! - [`multiply`]:   Wrapping, saturating, high-half and accumulating multiplies
//! - [`widen`]:      Widening, pairwise and narrowing operations
//! - [`permute`]:    Slides, even/odd extraction and interleave
//! - [`conv`]:       Depthwise convolution and the accumulator bank

/// Add, subtract and related arithmetic.
pub mod arithmetic;

/// Convolution engine and accumulator bank.
pub mod conv;

/// Sub-lane element access helpers.
pub mod lanes;

/// Bitwise, bit-count and comparison operations.
pub mod logic;

/// Multiply operations.
pub mod multiply;

/// Slides and permutes.
pub mod permute;

/// Shift operations.
pub mod shifts;

/// Widening, pairwise and narrowing operations.
pub mod widen;

pub use self::conv::ConvState;

use crate::common::constants::{MAX_LANES, MIN_LANES, SRC_PORTS};
use crate::isa::handlers::dual_issue;
use crate::isa::op::{CmdQueue, VOp};
use crate::isa::operation::{DstSlot, Operation, SrcSlot};

use self::lanes::splat_lane;

/// Source-register contents, one slice of lanes per source port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaneInputs {
    lanes: usize,
    ports: [Vec<u32>; SRC_PORTS],
}

impl LaneInputs {
    /// Creates inputs with every port cleared.
    pub fn new(lanes: usize) -> Self {
        Self {
            lanes,
            ports: std::array::from_fn(|_| vec![0; lanes]),
        }
    }

    /// Lanes per port.
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Sets the contents of `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `value` does not have exactly one word per lane.
    pub fn set(&mut self, slot: SrcSlot, value: &[u32]) {
        assert_eq!(value.len(), self.lanes, "port {slot:?} lane count mismatch");
        self.ports[slot.index()].copy_from_slice(value);
    }

    /// Builder form of [`LaneInputs::set`].
    pub fn with(mut self, slot: SrcSlot, value: &[u32]) -> Self {
        self.set(slot, value);
        self
    }

    /// Contents of `slot`.
    pub fn port(&self, slot: SrcSlot) -> &[u32] {
        &self.ports[slot.index()]
    }
}

/// Destination-register contents in port order (`vd`, `ve`, `vf`, `vg`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LaneOutputs {
    ports: Vec<Vec<u32>>,
}

impl LaneOutputs {
    /// Contents produced for `slot`, if the operation drives it.
    pub fn port(&self, slot: DstSlot) -> Option<&[u32]> {
        self.ports.get(slot.index()).map(Vec::as_slice)
    }

    /// Number of ports driven.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Returns true if no port is driven.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }

    /// Driven ports paired with their destination slots.
    pub fn iter(&self) -> impl Iterator<Item = (DstSlot, &[u32])> {
        DstSlot::ALL.into_iter().zip(self.ports.iter().map(Vec::as_slice))
    }
}

impl From<Vec<Vec<u32>>> for LaneOutputs {
    fn from(ports: Vec<Vec<u32>>) -> Self {
        Self { ports }
    }
}

/// SIMD vector ALU.
///
/// Stateless apart from its lane count; the accumulator bank lives in a
/// [`ConvState`] supplied by the caller.
///
/// # Examples
///
/// ```
/// use vref_core::core::units::valu::{ConvState, LaneInputs, Valu};
/// use vref_core::isa::op::VOp;
/// use vref_core::isa::operation::{DstSlot, Operation, SrcSlot};
///
/// let alu = Valu::new(4);
/// let mut op = Operation { op: VOp::Vadd, sz: 4, ..Operation::default() };
/// op.bind_dst(DstSlot::Vd, 0);
/// op.bind_src(SrcSlot::Vs, 1);
/// op.bind_src(SrcSlot::Vt, 2);
///
/// let inputs = LaneInputs::new(4)
///     .with(SrcSlot::Vs, &[1, 2, 3, u32::MAX])
///     .with(SrcSlot::Vt, &[10, 20, 30, 1]);
/// let out = alu.evaluate(&op, &inputs, &mut ConvState::new(4));
/// assert_eq!(out.port(DstSlot::Vd), Some(&[11, 22, 33, 0][..]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Valu {
    lanes: usize,
}

impl Valu {
    /// Creates an ALU for registers of `lanes` 32-bit lanes.
    ///
    /// # Panics
    ///
    /// Panics if `lanes` is outside 4..=16.
    pub fn new(lanes: usize) -> Self {
        assert!(
            (MIN_LANES..=MAX_LANES).contains(&lanes),
            "unsupported lane count {lanes}"
        );
        Self { lanes }
    }

    /// Lanes per register.
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Evaluates `op` over `inputs`.
    ///
    /// Load/store and undefined operations drive no ports. Convolution
    /// operations update `conv` and return the rows they expose.
    ///
    /// # Panics
    ///
    /// Panics if `inputs` or `conv` were built for a different lane count, or on
    /// a convolution control word with reserved bits set or an over-wide range.
    pub fn evaluate(&self, op: &Operation, inputs: &LaneInputs, conv: &mut ConvState) -> LaneOutputs {
        assert_eq!(inputs.lanes(), self.lanes, "input lane count mismatch");
        match op.cmdq {
            CmdQueue::LdSt { .. } => LaneOutputs::default(),
            CmdQueue::Conv => {
                assert_eq!(conv.lanes(), self.lanes, "accumulator lane count mismatch");
                conv::execute(op, inputs, conv).into()
            }
            CmdQueue::Alu => self.alu(op, inputs).into(),
        }
    }

    fn alu(&self, op: &Operation, inputs: &LaneInputs) -> Vec<Vec<u32>> {
        let a = inputs.port(SrcSlot::Vs);
        let b = self.second_operand(op, inputs);
        let c = inputs.port(SrcSlot::Vu);

        if dual_issue(op.op).is_some() {
            return Self::paired(op, inputs, &b);
        }

        match op.op {
            // Arithmetic: add, sub, absd, min/max, halving, saturating
            VOp::Vadd
            | VOp::Vsub
            | VOp::Vrsub
            | VOp::Vadd3
            | VOp::Vabsd
            | VOp::Vmax
            | VOp::Vmin
            | VOp::Vhadd
            | VOp::Vhsub
            | VOp::Vsadd
            | VOp::Vssub => vec![arithmetic::execute(op, a, &b, c)],

            // Logic, bit counts, moves, select and compares
            VOp::Vand
            | VOp::Vor
            | VOp::Vxor
            | VOp::Vnot
            | VOp::Vrev
            | VOp::Vror
            | VOp::Vclb
            | VOp::Vclz
            | VOp::Vcpop
            | VOp::Vmv
            | VOp::Vsel
            | VOp::Veq
            | VOp::Vne
            | VOp::Vlt
            | VOp::Vle
            | VOp::Vgt
            | VOp::Vge => vec![logic::execute(op, a, &b, c)],

            // Shifts
            VOp::Vsll | VOp::Vsra | VOp::Vsrl | VOp::Vsha | VOp::Vshl => {
                vec![shifts::execute(op, a, &b)]
            }

            // Multiplies
            VOp::Vmul | VOp::Vmuls | VOp::Vmulh | VOp::Vdmulh | VOp::Vmacc | VOp::Vmadd => {
                vec![multiply::execute(op, a, &b, c)]
            }

            // Widening, pairwise and narrowing
            VOp::Vmulw
            | VOp::Vaddw
            | VOp::Vsubw
            | VOp::Vacc
            | VOp::Vpadd
            | VOp::Vpsub
            | VOp::Vsrans
            | VOp::Vsraqs => widen::execute(op, inputs, &b),

            // Slides and permutes
            VOp::Vslidevn
            | VOp::Vslidevp
            | VOp::Vslidehn
            | VOp::Vslidehp
            | VOp::Vevn
            | VOp::Vodd
            | VOp::Vevnodd
            | VOp::Vzip => permute::execute(op, a, &b),

            VOp::Vdup => vec![b],

            // Undefined, memory and convolution operations drive nothing here.
            _ => Vec::new(),
        }
    }

    /// The second operand: a vector port, or the scalar replicated per element.
    fn second_operand(&self, op: &Operation, inputs: &LaneInputs) -> Vec<u32> {
        let slot = if dual_issue(op.op).is_some() {
            SrcSlot::Vy
        } else {
            SrcSlot::Vt
        };
        if op.src(slot).valid {
            inputs.port(slot).to_vec()
        } else if op.sv.valid {
            vec![splat_lane(op.sv.data, op.sz); self.lanes]
        } else {
            vec![0; self.lanes]
        }
    }

    /// Four-register operations: port `k` of the result is computed from source port `k`.
    fn paired(op: &Operation, inputs: &LaneInputs, b: &[u32]) -> Vec<Vec<u32>> {
        let bits = op.element_bits();
        SrcSlot::ALL[..DstSlot::ALL.len()]
            .iter()
            .map(|slot| {
                let a = inputs.port(*slot);
                match op.op {
                    VOp::Vmulp => multiply::mul(a, b, bits),
                    VOp::Vmulhp => multiply::mulh(a, b, bits, op.is_unsigned(), op.rounds()),
                    VOp::Vshap => shifts::sha(a, b, bits, op.rounds()),
                    _ => a.to_vec(),
                }
            })
            .collect()
    }
}
