//! Snapshot ingestion from the remote entity store.
//!
//! The store hands the UI loosely-typed JSON lists. This module is the
//! boundary where those lists become typed records: a snapshot that is not
//! a list at all is an error the caller must see, while individual records
//! that cannot be read are skipped with a warning so the rest of the board
//! still renders.

use planforge_models::{parse_date, DrawingSet, Rfi};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, TriageError};

/// Optional date fields that deserialize leniently. A malformed value in
/// one of these nulls the field rather than dropping the record; we log it
/// here because the lenient deserializer itself is silent.
const LENIENT_DATE_FIELDS: &[&str] = &["due_date", "ifa_date", "bfa_date", "bfs_date"];

/// Parses a drawing set snapshot.
///
/// # Errors
///
/// `TriageError::InvalidInput` when the value is not a JSON array.
pub fn drawing_sets_from_json(value: &Value) -> Result<Vec<DrawingSet>> {
    let elements = as_array(value, "drawing set snapshot")?;

    let mut sets = Vec::with_capacity(elements.len());
    for element in elements {
        warn_on_malformed_dates(element, "drawing set");

        let set: DrawingSet = match serde_json::from_value(element.clone()) {
            Ok(set) => set,
            Err(err) => {
                warn!(%err, "skipping unreadable drawing set record");
                continue;
            }
        };
        if set.id.is_empty() {
            warn!(title = %set.title, "skipping drawing set with no id");
            continue;
        }
        sets.push(set);
    }

    debug!(count = sets.len(), "parsed drawing set snapshot");
    Ok(sets)
}

/// Parses an RFI snapshot.
///
/// # Errors
///
/// `TriageError::InvalidInput` when the value is not a JSON array.
pub fn rfis_from_json(value: &Value) -> Result<Vec<Rfi>> {
    let elements = as_array(value, "RFI snapshot")?;

    let mut rfis = Vec::with_capacity(elements.len());
    for element in elements {
        let rfi: Rfi = match serde_json::from_value(element.clone()) {
            Ok(rfi) => rfi,
            Err(err) => {
                warn!(%err, "skipping unreadable RFI record");
                continue;
            }
        };
        if rfi.id.is_empty() {
            warn!(subject = %rfi.subject, "skipping RFI with no id");
            continue;
        }
        rfis.push(rfi);
    }

    debug!(count = rfis.len(), "parsed RFI snapshot");
    Ok(rfis)
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| TriageError::InvalidInput(format!("{what} is not a list")))
}

fn warn_on_malformed_dates(element: &Value, kind: &str) {
    for field in LENIENT_DATE_FIELDS.iter().copied() {
        if let Some(Value::String(raw)) = element.get(field) {
            if !raw.trim().is_empty() && parse_date(raw).is_none() {
                warn!(field, value = %raw, "dropping malformed {kind} date");
            }
        }
    }
}
