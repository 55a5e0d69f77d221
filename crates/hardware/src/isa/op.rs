//! Opcode identifiers and command-queue routing.
//!
//! This module defines the signals the decoder attaches to every operation:
//! 1. **Opcode Identity:** One `VOp` per architectural operation, `Undef` for none.
//! 2. **Routing:** The `CmdQueue` an operation is dispatched to.

/// Architectural vector operation identifier.
///
/// The discriminants are stable small integers; `Undef` is always zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VOp {
    /// No operation matched.
    #[default]
    Undef = 0,

    // Load / store / duplicate
    /// Vector load.
    Vld,
    /// Vector store.
    Vst,
    /// Quad store.
    Vstq,
    /// Scalar duplicate.
    Vdup,

    // Format0
    /// Wrapping add.
    Vadd,
    /// Wrapping subtract.
    Vsub,
    /// Reverse subtract.
    Vrsub,
    /// Equal.
    Veq,
    /// Not equal.
    Vne,
    /// Less than.
    Vlt,
    /// Less or equal.
    Vle,
    /// Greater than.
    Vgt,
    /// Greater or equal.
    Vge,
    /// Absolute difference.
    Vabsd,
    /// Maximum.
    Vmax,
    /// Minimum.
    Vmin,
    /// Three-input add.
    Vadd3,

    // Format1
    /// Bitwise AND.
    Vand,
    /// Bitwise OR.
    Vor,
    /// Bitwise XOR.
    Vxor,
    /// Bitwise NOT.
    Vnot,
    /// Generalized bit reverse.
    Vrev,
    /// Rotate right.
    Vror,
    /// Count leading sign bits.
    Vclb,
    /// Count leading zeros.
    Vclz,
    /// Population count.
    Vcpop,
    /// Move.
    Vmv,
    /// Paired move.
    Vmvp,

    // Format2
    /// Shift left logical.
    Vsll,
    /// Shift right arithmetic.
    Vsra,
    /// Shift right logical.
    Vsrl,
    /// Bidirectional arithmetic shift.
    Vsha,
    /// Bidirectional logical shift.
    Vshl,
    /// Paired bidirectional arithmetic shift.
    Vshap,

    // Format3
    /// Wrapping multiply.
    Vmul,
    /// Paired wrapping multiply.
    Vmulp,
    /// Saturating multiply.
    Vmuls,
    /// Widening multiply.
    Vmulw,
    /// Multiply high.
    Vmulh,
    /// Paired multiply high.
    Vmulhp,
    /// Saturating doubling multiply high.
    Vdmulh,
    /// Multiply-accumulate.
    Vmacc,
    /// Multiply-add.
    Vmadd,

    // Format4
    /// Widening add.
    Vaddw,
    /// Widening subtract.
    Vsubw,
    /// Widening accumulate.
    Vacc,
    /// Pairwise widening add.
    Vpadd,
    /// Pairwise widening subtract.
    Vpsub,
    /// Halving add.
    Vhadd,
    /// Halving subtract.
    Vhsub,

    // Format5
    /// Saturating add.
    Vsadd,
    /// Saturating subtract.
    Vssub,
    /// Saturating narrowing shift (half width).
    Vsrans,
    /// Saturating narrowing shift (quarter width).
    Vsraqs,

    // Format6
    /// Vertical slide to next.
    Vslidevn,
    /// Vertical slide to previous.
    Vslidevp,
    /// Horizontal slide to next.
    Vslidehn,
    /// Horizontal slide to previous.
    Vslidehp,
    /// Per-element select.
    Vsel,
    /// Even elements.
    Vevn,
    /// Odd elements.
    Vodd,
    /// Even and odd elements.
    Vevnodd,
    /// Interleave.
    Vzip,

    // Convolution engine
    /// Depthwise convolution.
    Vdwconv,
    /// Outer-product accumulate.
    Aconv,
    /// Accumulator row set.
    Acset,
    /// Accumulator column set.
    Actr,
    /// Accumulator row clear.
    Aclr,
}

impl VOp {
    /// Returns the base assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Undef => "undef",
            Self::Vld => "vld",
            Self::Vst => "vst",
            Self::Vstq => "vstq",
            Self::Vdup => "vdup",
            Self::Vadd => "vadd",
            Self::Vsub => "vsub",
            Self::Vrsub => "vrsub",
            Self::Veq => "veq",
            Self::Vne => "vne",
            Self::Vlt => "vlt",
            Self::Vle => "vle",
            Self::Vgt => "vgt",
            Self::Vge => "vge",
            Self::Vabsd => "vabsd",
            Self::Vmax => "vmax",
            Self::Vmin => "vmin",
            Self::Vadd3 => "vadd3",
            Self::Vand => "vand",
            Self::Vor => "vor",
            Self::Vxor => "vxor",
            Self::Vnot => "vnot",
            Self::Vrev => "vrev",
            Self::Vror => "vror",
            Self::Vclb => "vclb",
            Self::Vclz => "vclz",
            Self::Vcpop => "vcpop",
            Self::Vmv => "vmv",
            Self::Vmvp => "vmvp",
            Self::Vsll => "vsll",
            Self::Vsra => "vsra",
            Self::Vsrl => "vsrl",
            Self::Vsha => "vsha",
            Self::Vshl => "vshl",
            Self::Vshap => "vshap",
            Self::Vmul => "vmul",
            Self::Vmulp => "vmulp",
            Self::Vmuls => "vmuls",
            Self::Vmulw => "vmulw",
            Self::Vmulh => "vmulh",
            Self::Vmulhp => "vmulhp",
            Self::Vdmulh => "vdmulh",
            Self::Vmacc => "vmacc",
            Self::Vmadd => "vmadd",
            Self::Vaddw => "vaddw",
            Self::Vsubw => "vsubw",
            Self::Vacc => "vacc",
            Self::Vpadd => "vpadd",
            Self::Vpsub => "vpsub",
            Self::Vhadd => "vhadd",
            Self::Vhsub => "vhsub",
            Self::Vsadd => "vsadd",
            Self::Vssub => "vssub",
            Self::Vsrans => "vsrans",
            Self::Vsraqs => "vsraqs",
            Self::Vslidevn => "vslidevn",
            Self::Vslidevp => "vslidevp",
            Self::Vslidehn => "vslidehn",
            Self::Vslidehp => "vslidehp",
            Self::Vsel => "vsel",
            Self::Vevn => "vevn",
            Self::Vodd => "vodd",
            Self::Vevnodd => "vevnodd",
            Self::Vzip => "vzip",
            Self::Vdwconv => "vdwconv",
            Self::Aconv => "aconv",
            Self::Acset => "acset",
            Self::Actr => "actr",
            Self::Aclr => "aclr",
        }
    }

    /// Returns the small integer identifier of this opcode.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Returns true for opcodes executed by the convolution engine.
    pub const fn is_conv(self) -> bool {
        matches!(
            self,
            Self::Vdwconv | Self::Aconv | Self::Acset | Self::Actr | Self::Aclr
        )
    }
}

/// Functional-unit queue an operation is dispatched to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CmdQueue {
    /// The SIMD ALU. Also used for undefined operations.
    #[default]
    Alu,
    /// The convolution engine and accumulator bank.
    Conv,
    /// The load/store unit.
    LdSt {
        /// Operation reads memory.
        ld: bool,
        /// Operation writes memory.
        st: bool,
    },
}
