//! Canonical serialization of training entries
//!
//! Entries are written back as comma-delimited text with the canonical
//! header `date,exercise,weight,reps,sets`. The canonical form is a fixed
//! point of the parser: re-parsing serialized output yields field-wise
//! equal entries.

use crate::app::models::TrainingEntry;
use crate::constants::CANONICAL_COLUMNS;
use crate::{Error, Result};

/// Serialize entries into canonical delimited text.
///
/// Quoting is applied by the writer where a field requires it (an exercise
/// label containing a comma survives the round trip).
pub fn write_canonical(entries: &[TrainingEntry]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(CANONICAL_COLUMNS)
        .map_err(|e| Error::io_error(format!("Failed to write log header: {}", e)))?;

    for entry in entries {
        let weight = entry.weight.to_string();
        let reps = entry.reps.to_string();
        let sets = entry.sets.to_string();
        writer
            .write_record([
                entry.date.as_str(),
                entry.exercise.as_str(),
                weight.as_str(),
                reps.as_str(),
                sets.as_str(),
            ])
            .map_err(|e| Error::io_error(format!("Failed to write log record: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::io_error(format!("Failed to flush log writer: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::io_error(format!("Serialized log was not UTF-8: {}", e)))
}
