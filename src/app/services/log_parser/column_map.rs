//! Header resolution for the canonical log schema
//!
//! Producers write German or English column headers in any casing. This
//! module analyzes a header row and maps the recognized spellings onto the
//! five canonical fields; unknown columns are carried in the index but
//! otherwise ignored.

use std::collections::HashMap;

use csv::StringRecord;

use crate::constants::aliases;

/// Canonical fields of a training log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogField {
    Date,
    Exercise,
    Weight,
    Reps,
    Sets,
}

impl LogField {
    /// Canonical column name of this field
    pub fn canonical_name(&self) -> &'static str {
        match self {
            LogField::Date => "date",
            LogField::Exercise => "exercise",
            LogField::Weight => "weight",
            LogField::Reps => "reps",
            LogField::Sets => "sets",
        }
    }

    /// Recognized header spellings for this field, lowercase
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            LogField::Date => aliases::DATE,
            LogField::Exercise => aliases::EXERCISE,
            LogField::Weight => aliases::WEIGHT,
            LogField::Reps => aliases::REPS,
            LogField::Sets => aliases::SETS,
        }
    }
}

/// Column mapping for one log file's header row
#[derive(Debug, Clone)]
pub struct ColumnMap {
    /// Trimmed header name to index mapping, in file order
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMap {
    /// Analyze a header row into a column map
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_string();
            // First occurrence wins for duplicated headers
            name_to_index.entry(column_name).or_insert(index);
        }

        ColumnMap { name_to_index }
    }

    /// Resolve a canonical field to its column index.
    ///
    /// Lookup order: exact match on the canonical name first, then a
    /// case-insensitive scan over the field's alias set. Returns `None`
    /// when no recognized spelling is present; the record parser applies
    /// the field's default in that case.
    pub fn resolve(&self, field: LogField) -> Option<usize> {
        if let Some(&index) = self.name_to_index.get(field.canonical_name()) {
            return Some(index);
        }

        self.name_to_index
            .iter()
            .filter(|(name, _)| {
                let lowered = name.to_lowercase();
                field.aliases().iter().any(|alias| lowered == *alias)
            })
            .map(|(_, &index)| index)
            .min()
    }

    /// Check whether any recognized spelling of a field is present
    pub fn has_field(&self, field: LogField) -> bool {
        self.resolve(field).is_some()
    }

    /// Number of columns in the header row
    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}
