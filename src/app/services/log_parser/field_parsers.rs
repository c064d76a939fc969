//! Field extraction and numeric normalization for log records
//!
//! Numeric cells in real logs carry locale decimal commas, stray
//! whitespace, or plain garbage. Normalization is total: a cell that cannot
//! be read becomes zero, because one corrupt number must not erase an
//! otherwise valid historical record.

use csv::StringRecord;

use super::column_map::{ColumnMap, LogField};

/// Get a field's raw value from a record, trimmed.
///
/// Returns `None` when the column is unmapped or the record is too short.
pub fn get_field<'a>(
    record: &'a StringRecord,
    columns: &ColumnMap,
    field: LogField,
) -> Option<&'a str> {
    columns
        .resolve(field)
        .and_then(|index| record.get(index))
        .map(str::trim)
}

/// Get a text field, defaulting to the empty string
pub fn text_field(record: &StringRecord, columns: &ColumnMap, field: LogField) -> String {
    get_field(record, columns, field).unwrap_or("").to_string()
}

/// Normalize a raw numeric token into a float.
///
/// Trims whitespace and substitutes a decimal comma with a dot before
/// parsing. Absent, empty or unparsable tokens become `0.0`; negative
/// values are floored to zero (every numeric log field is non-negative).
pub fn normalize_float(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value.max(0.0),
        _ => 0.0,
    }
}

/// Normalize a raw numeric token into an integer.
///
/// Goes through the float path first so that `"12,0"` and `"12.7"` both
/// resolve, then truncates.
pub fn normalize_int(raw: Option<&str>) -> u32 {
    normalize_float(raw).trunc() as u32
}

/// Normalize a float field of a record
pub fn float_field(record: &StringRecord, columns: &ColumnMap, field: LogField) -> f64 {
    normalize_float(get_field(record, columns, field))
}

/// Normalize an integer field of a record
pub fn int_field(record: &StringRecord, columns: &ColumnMap, field: LogField) -> u32 {
    normalize_int(get_field(record, columns, field))
}
