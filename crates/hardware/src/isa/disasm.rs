//! Instruction Disassembler.
//!
//! Converts a 32-bit vector instruction word into a human-readable mnemonic
//! string for debug tracing, logging and test diagnostics. The opcode table
//! supplies the base name and form; modifiers are spelled as suffixes:
//!
//! - element size: `.b`, `.h`, `.w`
//! - sub-format: `.u` (unsigned), `.r` (rounding)
//! - load/store: `.l` (length), `.s` (stride), `.p` (post-increment)
//! - stripmine: `.m`
//!
//! # Usage
//!
//! ```
//! use vref_core::isa::disasm::disassemble;
//! let word = (9 << 20) | (5 << 14) | (2 << 12) | (3 << 6); // vadd.w.vv v3, v5, v9
//! assert_eq!(disassemble(word), "vadd.w.vv v3, v5, v9");
//! ```

use crate::isa::func2::{F2_LENGTH, F2_POST_INC, F2_ROUND, F2_STRIDE, F2_UNSIGNED};
use crate::isa::instruction::{FUNC2_SHIFT, SZ_RESERVED, VectorBits};
use crate::isa::op::VOp;
use crate::isa::opcodes::FUNC1_LDST;
use crate::isa::table::{OPCODE_TABLE, OpcodeEntry};

fn size_suffix(word: u32) -> &'static str {
    match word.sz() {
        0 => ".b",
        1 => ".h",
        _ => ".w",
    }
}

/// Returns true if func2 bit `bit` is a don't-care modifier of `entry`.
fn is_modifier(entry: &OpcodeEntry, bit: u8) -> bool {
    (entry.mask >> FUNC2_SHIFT) & u32::from(bit) == 0
}

fn modifiers(entry: &OpcodeEntry, word: u32) -> String {
    let f2 = word.f2();
    let mut out = String::new();
    if word.func1() == FUNC1_LDST && word.form() != 0b01 {
        for (bit, suffix) in [(F2_LENGTH, ".l"), (F2_STRIDE, ".s"), (F2_POST_INC, ".p")] {
            if is_modifier(entry, bit) && f2 & bit != 0 {
                out.push_str(suffix);
            }
        }
        return out;
    }
    if is_modifier(entry, F2_UNSIGNED) && f2 & F2_UNSIGNED != 0 {
        out.push_str(".u");
    }
    if is_modifier(entry, F2_ROUND) && f2 & F2_ROUND != 0 {
        out.push_str(".r");
    }
    out
}

/// Disassembles a 32-bit vector instruction into a human-readable string.
///
/// Returns `"undef 0x........"` for words no table entry matches.
pub fn disassemble(word: u32) -> String {
    let entry = if word.sz() == SZ_RESERVED {
        None
    } else {
        OPCODE_TABLE[1..].iter().find(|e| e.matches_word(word))
    };
    let Some(entry) = entry else {
        return format!("undef {word:#010x}");
    };

    let (base, form) = entry.name.split_once('.').unwrap_or((entry.name, ""));
    let m = if word.multi() { ".m" } else { "" };
    let (vd, vs, vt, xt, vu) = (word.vd(), word.vs(), word.vt(), word.xt(), word.vu());

    match entry.op {
        VOp::Vld | VOp::Vst | VOp::Vstq => {
            let mods = modifiers(entry, word);
            format!("{base}{}{mods}{m} v{vd}, x{}", size_suffix(word), word.xs1())
        }
        VOp::Vdup => format!("{base}{}.{form}{m} v{vd}, x{xt}", size_suffix(word)),
        VOp::Vdwconv | VOp::Aconv => format!("{base}.{form}{m} v{vd}, v{vs}, x{xt}, v{vu}"),
        VOp::Acset | VOp::Actr => format!("{base}.{form}{m} v{vd}, v{vs}, x{xt}"),
        VOp::Aclr => format!("{base} x{xt}"),
        VOp::Vslidevn | VOp::Vslidevp | VOp::Vslidehn | VOp::Vslidehp => {
            let count = (word.f2() & 0x3) + 1;
            let sz = size_suffix(word);
            match form {
                "v" => format!("{base}{sz}.{form}{m} v{vd}, v{vs}, {count}"),
                _ => format!("{base}{sz}.{form}{m} v{vd}, v{vs}, v{vt}, {count}"),
            }
        }
        _ => {
            let head = format!("{base}{}{}.{form}{m}", size_suffix(word), modifiers(entry, word));
            match form {
                "v" => format!("{head} v{vd}, v{vs}"),
                "vx" => format!("{head} v{vd}, v{vs}, x{xt}"),
                _ => format!("{head} v{vd}, v{vs}, v{vt}"),
            }
        }
    }
}
