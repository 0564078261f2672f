//! The stimulus record driving one step of the branch-predictor testbench.

use serde::{Deserialize, Serialize};

/// One test input for a single step of the gshare predictor under test.
///
/// Field names mirror the DUT port names, so a fixture file reads like the
/// waveform it produces. The four `*_i` flags are 0/1 integers rather than
/// booleans because that is what the RTL ports carry and what the producing
/// scripts emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StimulusRecord {
    /// Virtual program counter, as binary or hex text (LSB is always 0).
    pub vpc_i: String,
    /// BHT update strobe.
    pub bht_update_i_valid: u8,
    /// Resolved direction accompanying the update strobe.
    pub bht_update_i_taken: u8,
    /// Predictor flush request.
    pub flush_bp_i: u8,
    /// Debug-mode override.
    pub debug_mode_i: u8,
    /// Configured BHT depth (power of two in practice).
    pub nr_entries: u32,
    /// Fetch-bundle width the DUT was elaborated with.
    pub instr_per_fetch: u32,
}

impl StimulusRecord {
    /// Returns the resolved branch direction when this record carries a BHT
    /// update, or `None` when the update strobe is low (in which case
    /// `bht_update_i_taken` is a don't-care).
    pub fn bht_update(&self) -> Option<bool> {
        if self.bht_update_i_valid != 0 {
            Some(self.bht_update_i_taken != 0)
        } else {
            None
        }
    }
}
