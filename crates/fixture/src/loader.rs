//! Fixture file loading and writing.
//!
//! A fixture file is a single JSON array of objects, one object per
//! [`StimulusRecord`]. Loading is all-or-nothing: the whole file is parsed
//! into a tree first, then every element is validated in order, so a
//! malformed trailing record never yields a partial batch. Unrecognized keys
//! on a record are ignored, which lets newer producers add fields without
//! breaking older consumers.

use crate::stimulus::StimulusRecord;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Broad category of a [`FixtureError`], for callers that branch on what
/// went wrong rather than on the exact variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureErrorKind {
    /// The file could not be opened or read.
    FileAccess,
    /// The file contents are not well-formed JSON.
    Parse,
    /// The JSON shape is wrong: root not an array, or an element not an
    /// object.
    Schema,
    /// A specific field of a specific record is missing or invalid.
    Field,
}

/// Why a [`load`] call failed. Every variant is terminal: the loader never
/// substitutes defaults or skips a bad record, because the simulation step
/// order downstream requires exact, complete stimulus.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Malformed JSON syntax. The wrapped error carries line and column.
    #[error("malformed JSON in fixture file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fixture root must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("record {index} must be a JSON object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    #[error("record {index}: missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field '{field}' expected {expected}, found {found}")]
    FieldType {
        index: usize,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("record {index}: field '{field}' {reason}")]
    InvalidField {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

impl FixtureError {
    pub fn kind(&self) -> FixtureErrorKind {
        match self {
            Self::FileAccess { .. } => FixtureErrorKind::FileAccess,
            Self::Parse(_) => FixtureErrorKind::Parse,
            Self::NotAnArray { .. } | Self::NotAnObject { .. } => FixtureErrorKind::Schema,
            Self::MissingField { .. } | Self::FieldType { .. } | Self::InvalidField { .. } => {
                FixtureErrorKind::Field
            }
        }
    }
}

/// Loads a fixture file and returns its records in source-array order.
///
/// The returned batch is complete or the call fails; see [`FixtureError`]
/// for the failure taxonomy.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<StimulusRecord>, FixtureError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| FixtureError::FileAccess {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}

/// Validates fixture text that is already in memory.
pub fn parse(text: &str) -> Result<Vec<StimulusRecord>, FixtureError> {
    let root: Value = serde_json::from_str(text)?;
    let Value::Array(entries) = root else {
        return Err(FixtureError::NotAnArray {
            found: json_type_name(&root),
        });
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        records.push(record_at(index, entry)?);
    }
    Ok(records)
}

/// Writes a batch of records as a pretty-printed fixture file.
///
/// The output is accepted verbatim by [`load`], field for field and in the
/// same order.
pub fn save(path: impl AsRef<Path>, records: &[StimulusRecord]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

fn record_at(index: usize, entry: &Value) -> Result<StimulusRecord, FixtureError> {
    let Value::Object(fields) = entry else {
        return Err(FixtureError::NotAnObject {
            index,
            found: json_type_name(entry),
        });
    };

    Ok(StimulusRecord {
        vpc_i: text_field(fields, index, "vpc_i")?,
        bht_update_i_valid: flag_field(fields, index, "bht_update_i_valid")?,
        bht_update_i_taken: flag_field(fields, index, "bht_update_i_taken")?,
        flush_bp_i: flag_field(fields, index, "flush_bp_i")?,
        debug_mode_i: flag_field(fields, index, "debug_mode_i")?,
        nr_entries: count_field(fields, index, "nr_entries")?,
        instr_per_fetch: count_field(fields, index, "instr_per_fetch")?,
    })
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<&'a Value, FixtureError> {
    fields
        .get(field)
        .ok_or(FixtureError::MissingField { index, field })
}

fn text_field(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, FixtureError> {
    let value = required(fields, index, field)?;
    let Value::String(text) = value else {
        return Err(FixtureError::FieldType {
            index,
            field,
            expected: "string",
            found: json_type_name(value),
        });
    };
    if text.is_empty() {
        return Err(FixtureError::InvalidField {
            index,
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(text.clone())
}

fn int_field(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<i64, FixtureError> {
    let value = required(fields, index, field)?;
    value.as_i64().ok_or_else(|| FixtureError::FieldType {
        index,
        field,
        expected: "integer",
        found: if value.is_number() {
            "non-integral number"
        } else {
            json_type_name(value)
        },
    })
}

/// A 0/1 port-level flag. JSON booleans are rejected on purpose: the
/// producing scripts emit integers, and a `true` in a fixture usually means
/// a hand-edit went wrong.
fn flag_field(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<u8, FixtureError> {
    match int_field(fields, index, field)? {
        n @ (0 | 1) => Ok(n as u8),
        n => Err(FixtureError::InvalidField {
            index,
            field,
            reason: format!("must be 0 or 1, got {n}"),
        }),
    }
}

fn count_field(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<u32, FixtureError> {
    let n = int_field(fields, index, field)?;
    if n <= 0 {
        return Err(FixtureError::InvalidField {
            index,
            field,
            reason: format!("must be positive, got {n}"),
        });
    }
    u32::try_from(n).map_err(|_| FixtureError::InvalidField {
        index,
        field,
        reason: format!("must fit in 32 bits, got {n}"),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
