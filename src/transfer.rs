use crate::dates::iso;
use crate::errors::AppError;
use crate::models::{new_entry_id, Entry};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct MergeOutcome {
    /// Merged history, newest date first.
    pub entries: Vec<Entry>,
    pub accepted: usize,
    pub skipped: usize,
}

pub fn export_all(entries: &[Entry]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn export_filename(today: NaiveDate) -> String {
    format!("mood-tracker-{}.json", iso(today))
}

/// Folds an uploaded batch into `existing`, keyed by date. An incoming record
/// always replaces the stored one for its date. Records missing a date, mood
/// or score are skipped; only a payload that is not an array is rejected.
pub fn merge_import(existing: &[Entry], incoming: &Value) -> Result<MergeOutcome, AppError> {
    let Some(batch) = incoming.as_array() else {
        return Err(AppError::invalid_import());
    };

    let mut by_date: BTreeMap<String, Entry> = existing
        .iter()
        .map(|entry| (entry.date.clone(), entry.clone()))
        .collect();

    let mut accepted = 0;
    let mut skipped = 0;
    for (index, candidate) in batch.iter().enumerate() {
        match candidate.as_object().and_then(accept_record) {
            Some(entry) => {
                by_date.insert(entry.date.clone(), entry);
                accepted += 1;
            }
            None => {
                debug!(index, "skipping import record without date, moodKey or score");
                skipped += 1;
            }
        }
    }

    Ok(MergeOutcome {
        entries: by_date.into_values().rev().collect(),
        accepted,
        skipped,
    })
}

fn accept_record(record: &Map<String, Value>) -> Option<Entry> {
    let date = non_empty_str(record.get("date"))?;
    let mood_key = non_empty_str(record.get("moodKey"))?;
    let score = record
        .get("score")
        .and_then(Value::as_u64)
        .filter(|score| *score != 0)
        .and_then(|score| u8::try_from(score).ok())?;

    let id = non_empty_str(record.get("id"))
        .map(str::to_string)
        .unwrap_or_else(new_entry_id);
    let note = record
        .get("note")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(Entry {
        id,
        date: date.to_string(),
        mood_key: mood_key.to_string(),
        score,
        note,
    })
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}
