//! Model statistics collection and reporting.
//!
//! This module tracks what the issue loop has seen. It provides:
//! 1. **Decode outcome:** Decoded and undefined instruction counts.
//! 2. **Instruction mix:** Counts by dispatch queue (ALU, convolution, load, store).
//! 3. **Issue shape:** Paired four-register and stripmined operations.
//! 4. **Scoreboard:** Total parity-bit flips.

use std::fmt::{self, Write as _};

use crate::isa::handlers::dual_issue;
use crate::isa::op::CmdQueue;
use crate::isa::operation::Operation;

/// Report sections accepted by [`ModelStats::report`].
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "issue"];

/// Counters collected by the issue loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelStats {
    /// Instruction words presented to the decoder.
    pub issued: u64,
    /// Words that matched an opcode-table entry.
    pub decoded: u64,
    /// Words that matched no entry.
    pub undefined: u64,

    /// Operations dispatched to the ALU.
    pub alu: u64,
    /// Operations dispatched to the convolution engine.
    pub conv: u64,
    /// Loads dispatched to the load/store unit.
    pub loads: u64,
    /// Stores dispatched to the load/store unit.
    pub stores: u64,

    /// Paired four-register operations.
    pub dual_issue: u64,
    /// Operations with the stripmine flag set.
    pub stripmined: u64,

    /// Parity bits flipped by register writes.
    pub parity_flips: u64,
}

impl ModelStats {
    /// Records one decoded (or undefined) operation.
    pub fn record(&mut self, op: &Operation) {
        self.issued += 1;
        if !op.is_defined() {
            self.undefined += 1;
            return;
        }
        self.decoded += 1;
        match op.cmdq {
            CmdQueue::Alu => self.alu += 1,
            CmdQueue::Conv => self.conv += 1,
            CmdQueue::LdSt { ld, st } => {
                self.loads += u64::from(ld);
                self.stores += u64::from(st);
            }
        }
        if dual_issue(op.op).is_some() {
            self.dual_issue += 1;
        }
        if op.m {
            self.stripmined += 1;
        }
        self.parity_flips += u64::from(op.write_active.count_ones());
    }

    /// Renders the requested sections; an empty list selects all of them.
    pub fn report(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let issued = self.issued.max(1) as f64;
        let pct = |n: u64| (n as f64 / issued) * 100.0;
        let mut out = String::new();

        if want("summary") {
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "VECTOR MODEL STATISTICS");
            let _ = writeln!(out, "==========================================================");
            let _ = writeln!(out, "insts.issued             {}", self.issued);
            let _ = writeln!(out, "insts.decoded            {} ({:.2}%)", self.decoded, pct(self.decoded));
            let _ = writeln!(out, "insts.undefined          {} ({:.2}%)", self.undefined, pct(self.undefined));
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("instruction_mix") {
            let _ = writeln!(out, "INSTRUCTION MIX");
            let _ = writeln!(out, "  op.alu                 {} ({:.2}%)", self.alu, pct(self.alu));
            let _ = writeln!(out, "  op.conv                {} ({:.2}%)", self.conv, pct(self.conv));
            let _ = writeln!(out, "  op.load                {} ({:.2}%)", self.loads, pct(self.loads));
            let _ = writeln!(out, "  op.store               {} ({:.2}%)", self.stores, pct(self.stores));
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("issue") {
            let _ = writeln!(out, "ISSUE");
            let _ = writeln!(out, "  issue.paired           {}", self.dual_issue);
            let _ = writeln!(out, "  issue.stripmined       {}", self.stripmined);
            let _ = writeln!(out, "  scoreboard.flips       {}", self.parity_flips);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        out
    }
}

impl fmt::Display for ModelStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report(&[]))
    }
}
