//! Individual record validation for training logs
//!
//! One raw record either yields a canonical entry or is skipped. The only
//! skip cause is a missing date: every other defect degrades to a default
//! so that a numeric typo does not erase a workout.

use csv::StringRecord;

use super::column_map::{ColumnMap, LogField};
use super::field_parsers::{float_field, int_field, text_field};
use crate::app::models::TrainingEntry;
use crate::{Error, Result};

/// Validate a single log record into a training entry.
///
/// Resolves the five canonical fields through the column map, normalizes
/// the numeric cells, and trims the text cells. Fails only when the
/// resolved date is empty after trimming; the caller skips the record and
/// keeps parsing.
pub fn parse_log_record(record: &StringRecord, columns: &ColumnMap) -> Result<TrainingEntry> {
    let date = text_field(record, columns, LogField::Date);
    if date.is_empty() {
        return Err(Error::data_validation("empty date field"));
    }

    Ok(TrainingEntry {
        date,
        exercise: text_field(record, columns, LogField::Exercise),
        weight: float_field(record, columns, LogField::Weight),
        reps: int_field(record, columns, LogField::Reps),
        sets: int_field(record, columns, LogField::Sets),
    })
}
