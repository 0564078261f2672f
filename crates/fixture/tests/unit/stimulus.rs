//! Tests for the stimulus record type.

use gbpstim::stimulus::StimulusRecord;

fn record() -> StimulusRecord {
    StimulusRecord {
        vpc_i: "0110".to_string(),
        bht_update_i_valid: 0,
        bht_update_i_taken: 0,
        flush_bp_i: 0,
        debug_mode_i: 0,
        nr_entries: 8,
        instr_per_fetch: 2,
    }
}

#[test]
fn test_bht_update_none_when_strobe_low() {
    let mut r = record();
    r.bht_update_i_taken = 1; // don't-care when valid is low
    assert_eq!(r.bht_update(), None);
}

#[test]
fn test_bht_update_carries_direction_when_strobe_high() {
    let mut r = record();
    r.bht_update_i_valid = 1;
    assert_eq!(r.bht_update(), Some(false));

    r.bht_update_i_taken = 1;
    assert_eq!(r.bht_update(), Some(true));
}

#[test]
fn test_records_compare_field_for_field() {
    assert_eq!(record(), record());

    let mut other = record();
    other.nr_entries = 16;
    assert_ne!(record(), other);
}
