//! Convolution control words.
//!
//! The convolution instructions take their configuration from the scalar
//! `data` operand. These newtypes name its bit fields.
//!
//! ```text
//! DwconvCtrl:  31  28 27  26     18 17  16      8 7    4 3  2 1  0
//!             +------+---+---------+---+---------+------+----+----+
//!             | rsvd |bs | bbias   |as | abias   |regbas|spar|mode|
//!             +------+---+---------+---+---------+------+----+----+
//!
//! ConvCtrl:    31 30 29  28     20 19  18     10 9    5 4    0
//!             +-----+---+---------+---+---------+------+------+
//!             |rsvd |sd2| sbias2  |sd1| sbias1  | stop | start|
//!             +-----+---+---------+---+---------+------+------+
//! ```

/// Sign-extends a 9-bit bias field.
const fn sext9(v: u32) -> i32 {
    ((v << 23) as i32) >> 23
}

/// Depthwise convolution control word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DwconvCtrl(pub u32);

impl DwconvCtrl {
    /// Accumulate into the bank rather than overwrite.
    pub const fn accumulate(self) -> bool {
        self.0 & 1 != 0
    }

    /// Raw 2-bit mode field.
    pub const fn mode(self) -> u32 {
        self.0 & 0x3
    }

    /// Sparsity pattern selecting the 3-tap input window.
    pub const fn sparsity(self) -> u32 {
        (self.0 >> 2) & 0x3
    }

    /// Offset added to the base registers to find the taps.
    pub const fn regbase(self) -> u8 {
        ((self.0 >> 4) & 0xF) as u8
    }

    /// Signed bias added to each input element.
    pub const fn abias(self) -> i32 {
        sext9((self.0 >> 8) & 0x1FF)
    }

    /// Input elements are signed.
    pub const fn asign(self) -> bool {
        (self.0 >> 17) & 1 != 0
    }

    /// Signed bias added to each weight element.
    pub const fn bbias(self) -> i32 {
        sext9((self.0 >> 18) & 0x1FF)
    }

    /// Weight elements are signed.
    pub const fn bsign(self) -> bool {
        (self.0 >> 27) & 1 != 0
    }

    /// Reserved bits 31-28; must be zero.
    pub const fn reserved(self) -> u32 {
        self.0 >> 28
    }
}

/// Accumulator-bank control word for `aconv`, `acset`, `actr` and `aclr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvCtrl(pub u32);

impl ConvCtrl {
    /// First accumulator row (or column) of the range.
    pub const fn start(self) -> u32 {
        self.0 & 0x1F
    }

    /// Last accumulator row (or column) of the range, inclusive.
    pub const fn stop(self) -> u32 {
        (self.0 >> 5) & 0x1F
    }

    /// Signed bias added to the first operand's bytes.
    pub const fn sbias1(self) -> i32 {
        sext9((self.0 >> 10) & 0x1FF)
    }

    /// First operand's bytes are signed.
    pub const fn sdata1(self) -> bool {
        (self.0 >> 19) & 1 != 0
    }

    /// Signed bias added to the second operand's bytes.
    pub const fn sbias2(self) -> i32 {
        sext9((self.0 >> 20) & 0x1FF)
    }

    /// Second operand's bytes are signed.
    pub const fn sdata2(self) -> bool {
        (self.0 >> 29) & 1 != 0
    }

    /// Reserved bits 31-30; must be zero.
    pub const fn reserved(self) -> u32 {
        self.0 >> 30
    }

    /// Range width `stop - start`, wrapping modulo 32.
    pub const fn width(self) -> u32 {
        self.stop().wrapping_sub(self.start()) & 0x1F
    }
}
