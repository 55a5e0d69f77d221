//! Vector Instruction Decoder.
//!
//! This module matches 32-bit instruction words against the ordered opcode
//! table and runs the matching entry's format handler. It performs:
//! 1. **Size Veto:** The reserved element size rejects a word before any entry is consulted.
//! 2. **Entry Matching:** Each entry's `(matches, mask)` pair is tested against the word.
//! 3. **Operand Binding:** The entry's handler produces the full [`Operation`].
//!
//! The scan keeps table order and returns the first matching entry. No two
//! entries match the same word; `test_table_entries_are_disjoint` checks that.

use tracing::{debug, trace};

use crate::config::Config;
use crate::core::hazard::accumulator_mask;
use crate::isa::handlers::DecodeContext;
use crate::isa::instruction::{SZ_RESERVED, VectorBits};
use crate::isa::operation::Operation;
use crate::isa::table::{OPCODE_TABLE, OpcodeEntry};

/// Table-driven instruction decoder.
///
/// # Examples
///
/// ```
/// use vref_core::config::Config;
/// use vref_core::isa::decode::Decoder;
/// use vref_core::isa::op::VOp;
///
/// let decoder = Decoder::new(&Config::default());
/// // vadd.w.vv v3, v5, v9
/// let word = (9 << 20) | (5 << 14) | (2 << 12) | (3 << 6);
/// let op = decoder.decode_word(word, 0, 0);
/// assert_eq!(op.op, VOp::Vadd);
/// assert_eq!(op.read_active, (1 << 5) | (1 << 9));
/// assert_eq!(op.write_active, 1 << 3);
/// ```
#[derive(Clone, Debug)]
pub struct Decoder {
    lanes: usize,
    acc_mask: u64,
    trace: bool,
}

impl Decoder {
    /// Creates a decoder for the configured vector geometry.
    pub fn new(config: &Config) -> Self {
        let lanes = config.lanes();
        Self {
            lanes,
            acc_mask: accumulator_mask(config.vector.accumulator_base, lanes),
            trace: config.general.trace_decode,
        }
    }

    /// Write activity of the accumulator bank.
    pub fn accumulator_mask(&self) -> u64 {
        self.acc_mask
    }

    /// Decodes `word` against the single entry at `table_index`.
    ///
    /// Returns `None` if the element size is reserved or the entry does not
    /// match. `addr` and `data` are the host-supplied scalar register contents.
    ///
    /// # Panics
    ///
    /// Panics if `table_index` is zero or past the end of the table.
    pub fn decode(&self, table_index: usize, word: u32, addr: u32, data: u32) -> Option<Operation> {
        assert!(
            table_index != 0 && table_index < OPCODE_TABLE.len(),
            "opcode table index {table_index} out of range"
        );
        if word.sz() == SZ_RESERVED {
            return None;
        }
        self.decode_entry(&OPCODE_TABLE[table_index], word, addr, data)
    }

    /// Scans the whole table and returns the first match, or `Undef`.
    pub fn decode_word(&self, word: u32, addr: u32, data: u32) -> Operation {
        if word.sz() != SZ_RESERVED {
            for entry in &OPCODE_TABLE[1..] {
                if let Some(op) = self.decode_entry(entry, word, addr, data) {
                    if self.trace {
                        trace!(
                            word = format_args!("{word:#010x}"),
                            name = entry.name,
                            read = format_args!("{:#018x}", op.read_active),
                            write = format_args!("{:#018x}", op.write_active),
                            "decoded"
                        );
                    }
                    return op;
                }
            }
        }
        debug!(word = format_args!("{word:#010x}"), "undefined instruction");
        Operation::undefined(word)
    }

    fn decode_entry(&self, entry: &OpcodeEntry, word: u32, addr: u32, data: u32) -> Option<Operation> {
        if !entry.matches_word(word) {
            return None;
        }
        let ctx = DecodeContext {
            addr,
            data,
            lanes: self.lanes,
            acc_mask: self.acc_mask,
        };
        Some((entry.decode)(&ctx, word))
    }
}
