use serde::{Deserialize, Serialize};

/// One day's mood log. Serialized with the snapshot field names
/// `id, date, moodKey, score, note`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub date: String,
    pub mood_key: String,
    pub score: u8,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveEntryRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct ClearRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveResponse {
    pub removed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub cleared: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub accepted: usize,
    pub skipped: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: String,
    pub score: Option<u8>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: usize,
    pub average_7: Option<f64>,
    pub streak: u32,
    pub trend: Vec<SeriesPoint>,
}

pub fn new_entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
