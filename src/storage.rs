use crate::errors::AppError;
use crate::models::Entry;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

/// Slot name for the entry snapshot. Bump the suffix for a new format
/// instead of migrating old files in place.
pub const ENTRIES_SLOT: &str = "mood-tracker-entries.v1.json";

pub fn resolve_data_dir() -> PathBuf {
    match env::var("MOOD_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from("data"),
    }
}

pub fn slot_path(data_dir: &Path) -> PathBuf {
    data_dir.join(ENTRIES_SLOT)
}

/// Reads the snapshot. A missing or unreadable slot is an empty history.
pub async fn load_entries(path: &Path) -> Vec<Entry> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse entries snapshot {}: {err}", path.display());
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read entries snapshot {}: {err}", path.display());
            Vec::new()
        }
    }
}

/// Overwrites the snapshot with exactly `entries`.
pub async fn persist_entries<'a, I>(path: &Path, entries: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let entries: Vec<&Entry> = entries.into_iter().collect();
    let payload = serde_json::to_vec_pretty(&entries)?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, payload).await?;
    fs::rename(&temp_path, path).await?;
    Ok(())
}
