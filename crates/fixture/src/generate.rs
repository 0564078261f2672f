//! Exhaustive stimulus generation.
//!
//! Sweeps every legal input combination for one elaboration of the gshare
//! predictor: all virtual PCs of the configured width crossed with all BHT
//! update strobe/direction pairs. Flush and debug stay deasserted so a batch
//! exercises steady-state prediction only.

use crate::stimulus::StimulusRecord;
use thiserror::Error;

/// Upper bound on `vlen`; past this the sweep size (2^(vlen-1) * 4 records)
/// stops being a fixture and starts being a disk-filler.
pub const MAX_VLEN: u32 = 24;

/// Elaboration parameters of the predictor the batch is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Width of `vpc_i` in bits.
    pub vlen: u32,
    /// BHT depth; must be a power of two.
    pub nr_entries: u32,
    /// Instructions per fetch bundle; must be a power of two.
    pub instr_per_fetch: u32,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            vlen: 4,
            nr_entries: 8,
            instr_per_fetch: 2,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{name} must be a power of two, got {value}")]
    NotPowerOfTwo { name: &'static str, value: u32 },

    #[error("vlen must be between 1 and {MAX_VLEN}, got {value}")]
    VlenOutOfRange { value: u32 },
}

/// Generates the full input sweep for one predictor configuration.
///
/// Ordering is deterministic: vpc-major, then the four
/// `(bht_update_i_valid, bht_update_i_taken)` combinations in ascending
/// order. The batch length is exactly `2^(vlen-1) * 4`.
pub fn generate(config: &GenerateConfig) -> Result<Vec<StimulusRecord>, GenerateError> {
    if !config.nr_entries.is_power_of_two() {
        return Err(GenerateError::NotPowerOfTwo {
            name: "nr_entries",
            value: config.nr_entries,
        });
    }
    if !config.instr_per_fetch.is_power_of_two() {
        return Err(GenerateError::NotPowerOfTwo {
            name: "instr_per_fetch",
            value: config.instr_per_fetch,
        });
    }
    if config.vlen < 1 || config.vlen > MAX_VLEN {
        return Err(GenerateError::VlenOutOfRange { value: config.vlen });
    }

    // The LSB of vpc_i is forced to 0 (instruction alignment), so only the
    // upper vlen-1 bits are swept.
    let vpc_bits = (config.vlen - 1) as usize;
    let vpc_count: u64 = 1 << vpc_bits;

    let mut records = Vec::with_capacity((vpc_count as usize) * 4);
    for vpc in 0..vpc_count {
        let vpc_i = format!("{vpc:0vpc_bits$b}0");
        for valid in 0..=1u8 {
            for taken in 0..=1u8 {
                records.push(StimulusRecord {
                    vpc_i: vpc_i.clone(),
                    bht_update_i_valid: valid,
                    bht_update_i_taken: taken,
                    flush_bp_i: 0,
                    debug_mode_i: 0,
                    nr_entries: config.nr_entries,
                    instr_per_fetch: config.instr_per_fetch,
                });
            }
        }
    }

    Ok(records)
}
