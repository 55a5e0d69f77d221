//! Vector model: owns the architectural state and issues one word at a time.
//!
//! Each call to [`VectorModel::issue`] performs, in order:
//! 1. **Decode:** A linear scan of the opcode table.
//! 2. **Tag:** Source tags are captured and write parity flipped.
//! 3. **Fetch:** Every valid source port is read from the register file.
//! 4. **Evaluate:** The ALU or convolution engine computes the result.
//! 5. **Write-back:** Every valid destination port is written.

use crate::common::reg::VRegFile;
use crate::config::Config;
use crate::core::TagScoreboard;
use crate::core::units::valu::{ConvState, LaneInputs, Valu};
use crate::isa::decode::Decoder;
use crate::isa::op::CmdQueue;
use crate::isa::operation::{Operation, SrcSlot};
use crate::stats::ModelStats;

/// Stripmine group size as a member count.
const GROUP_MEMBERS: u8 = crate::common::constants::STRIPMINE_GROUP;

/// End-to-end reference model instance.
///
/// Instances share nothing; the opcode table is the only global and it is
/// immutable.
///
/// # Examples
///
/// ```
/// use vref_core::{Config, VectorModel};
///
/// let mut model = VectorModel::new(&Config::default());
/// model.regs_mut().splat(5, 2);
/// model.regs_mut().splat(9, 40);
///
/// // vadd.w.vv v3, v5, v9
/// let word = (9 << 20) | (5 << 14) | (2 << 12) | (3 << 6);
/// let op = model.issue(word, 0, 0);
/// assert!(op.is_defined());
/// assert_eq!(model.regs().read(3), &[42; 8]);
/// assert_eq!(model.scoreboard().tag_of(3), 0b1000);
/// ```
#[derive(Clone, Debug)]
pub struct VectorModel {
    decoder: Decoder,
    alu: Valu,
    scoreboard: TagScoreboard,
    conv: ConvState,
    regs: VRegFile,
    stats: ModelStats,
    accumulator_base: u8,
}

impl VectorModel {
    /// Creates a model with a cleared register file, bank and scoreboard.
    ///
    /// # Panics
    ///
    /// Panics if the configured lane count is unsupported; run
    /// [`Config::validate`] on untrusted configurations first.
    pub fn new(config: &Config) -> Self {
        let lanes = config.lanes();
        Self {
            decoder: Decoder::new(config),
            alu: Valu::new(lanes),
            scoreboard: TagScoreboard::new(),
            conv: ConvState::new(lanes),
            regs: VRegFile::new(lanes),
            stats: ModelStats::default(),
            accumulator_base: config.vector.accumulator_base,
        }
    }

    /// Decodes, tags, evaluates and retires one instruction word.
    ///
    /// `addr` and `data` are the contents of the scalar registers the word
    /// names. Returns the tagged operation; undefined words are counted and
    /// otherwise ignored. Load/store operations are tagged but move no data.
    pub fn issue(&mut self, word: u32, addr: u32, data: u32) -> Operation {
        let mut op = self.decoder.decode_word(word, addr, data);
        self.scoreboard.update(&mut op);
        self.stats.record(&op);
        if op.is_defined() {
            self.execute(&op);
        }
        op
    }

    fn execute(&mut self, op: &Operation) {
        match op.cmdq {
            CmdQueue::LdSt { .. } => {}
            CmdQueue::Conv => {
                self.evaluate(op);
                self.mirror_bank();
            }
            CmdQueue::Alu if op.m => {
                for k in 0..GROUP_MEMBERS {
                    let member = op.stripmine_member(k);
                    tracing::trace!(op = op.op.mnemonic(), member = k, "stripmine issue");
                    self.evaluate(&member);
                }
            }
            CmdQueue::Alu => self.evaluate(op),
        }
    }

    /// Reads every source, evaluates, then writes every driven destination.
    fn evaluate(&mut self, op: &Operation) {
        let mut inputs = LaneInputs::new(self.alu.lanes());
        for slot in SrcSlot::ALL {
            let src = op.src(slot);
            if src.valid {
                inputs.set(slot, self.regs.read(src.addr));
            }
        }
        let outputs = self.alu.evaluate(op, &inputs, &mut self.conv);
        if op.cmdq == CmdQueue::Conv {
            return;
        }
        for (slot, value) in outputs.iter() {
            let dst = op.dst(slot);
            if dst.valid {
                self.regs.write(dst.addr, value);
            }
        }
    }

    /// Copies accumulator row `r` into register `accumulator_base + r`.
    fn mirror_bank(&mut self) {
        for (r, row) in self.conv.rows().iter().enumerate() {
            let idx = self.accumulator_base.wrapping_add(r as u8);
            self.regs.write(idx, row);
        }
    }

    /// The register file.
    pub fn regs(&self) -> &VRegFile {
        &self.regs
    }

    /// Mutable register file, for seeding operands.
    pub fn regs_mut(&mut self) -> &mut VRegFile {
        &mut self.regs
    }

    /// The accumulator bank.
    pub fn conv(&self) -> &ConvState {
        &self.conv
    }

    /// The completion-tag scoreboard.
    pub fn scoreboard(&self) -> &TagScoreboard {
        &self.scoreboard
    }

    /// Counters collected so far.
    pub fn stats(&self) -> &ModelStats {
        &self.stats
    }

    /// Returns the model to its initial state.
    pub fn reset(&mut self) {
        self.regs = VRegFile::new(self.alu.lanes());
        self.conv.clear();
        self.scoreboard.reset();
        self.stats = ModelStats::default();
    }
}
