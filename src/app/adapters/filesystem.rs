//! Filesystem access for training logs and profiles
//!
//! The parsing/metrics core is read-only with respect to the log file; all
//! writes live here. Log mutations rewrite the file in canonical form, so a
//! legacy file (semicolon delimiter, German headers, stray columns) becomes
//! canonical on its first mutation.

use std::path::Path;

use tracing::{debug, info};

use crate::app::models::{Profile, TrainingEntry};
use crate::app::services::log_parser::{LogParser, ParseResult, write_canonical};
use crate::{Error, Result};

/// Read a training log file.
///
/// A missing or unreadable file yields an empty result.
pub fn read_log(path: &Path) -> ParseResult {
    LogParser::new().parse_file(path)
}

/// Append one entry to a log file.
///
/// The existing file is parsed, the entry appended, and the whole log
/// rewritten canonically. A missing file is created with the canonical
/// header.
pub fn append_entry(path: &Path, entry: TrainingEntry) -> Result<()> {
    let mut entries = read_log(path).entries;
    entries.push(entry);
    write_log(path, &entries)
}

/// Remove the most recent entry from a log file.
///
/// Returns the removed entry, or `None` when the log held no entries.
pub fn remove_last_entry(path: &Path) -> Result<Option<TrainingEntry>> {
    let mut entries = read_log(path).entries;
    let removed = entries.pop();
    if removed.is_some() {
        write_log(path, &entries)?;
    }
    Ok(removed)
}

/// Rewrite a log file with the given entries in canonical form
pub fn write_log(path: &Path, entries: &[TrainingEntry]) -> Result<()> {
    ensure_parent_dir(path)?;

    let text = write_canonical(entries)?;
    std::fs::write(path, text)
        .map_err(|e| Error::io(format!("Failed to write log {}", path.display()), e))?;

    info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Load a profile file.
///
/// Profile intake is strict: a missing file or a file whose fields are not
/// individually parseable is an error, never a defaulted profile.
pub fn load_profile(path: &Path) -> Result<Profile> {
    if !path.exists() {
        return Err(Error::profile_not_found(path.display().to_string()));
    }

    let text = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read profile {}", path.display()), e))?;

    let profile: Profile = serde_json::from_str(&text)
        .map_err(|e| Error::profile_format(path.display().to_string(), e.to_string()))?;

    debug!("Loaded profile from {}", path.display());
    Ok(profile)
}

/// Save a profile file as pretty-printed JSON
pub fn save_profile(path: &Path, profile: &Profile) -> Result<()> {
    ensure_parent_dir(path)?;

    let json = serde_json::to_string_pretty(profile)
        .map_err(|e| Error::io_error(format!("Failed to serialize profile: {}", e)))?;

    std::fs::write(path, json)
        .map_err(|e| Error::io(format!("Failed to write profile {}", path.display()), e))?;

    info!("Saved profile to {}", path.display());
    Ok(())
}

/// Create the parent directory of a data file when it does not exist yet
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::io(format!("Failed to create {}", parent.display()), e))?;
        }
    }
    Ok(())
}
