use crate::dates::{iso, parse_iso, today, today_iso};
use crate::errors::AppError;
use crate::filter::{filtered, EntryFilter};
use crate::models::{
    ClearRequest, ClearResponse, Entry, ImportSummary, RemoveResponse, SaveEntryRequest,
    StatsResponse,
};
use crate::mood::{MoodLevel, MOODS};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::transfer::{export_all, export_filename};
use crate::ui::render_index;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};

pub async fn index() -> Html<String> {
    Html(render_index(&today_iso()))
}

pub async fn list_moods() -> Json<&'static [MoodLevel]> {
    Json(&MOODS[..])
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(filter): Query<EntryFilter>,
) -> Result<Json<Vec<Entry>>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(filtered(&store.entries(), &filter)))
}

pub async fn save_entry(
    State(state): State<AppState>,
    Json(payload): Json<SaveEntryRequest>,
) -> Result<Json<Entry>, AppError> {
    if payload.date.trim().is_empty() {
        return Err(AppError::bad_request("Please select a date."));
    }
    let date = parse_iso(&payload.date)
        .map(iso)
        .ok_or_else(|| AppError::bad_request("date must be YYYY-MM-DD"))?;
    if payload.mood.trim().is_empty() {
        return Err(AppError::bad_request("Please select a mood."));
    }
    let mood = MoodLevel::from_key(payload.mood.trim())
        .ok_or_else(|| AppError::bad_request(format!("unknown mood '{}'", payload.mood.trim())))?;

    let mut store = state.store.lock().await;
    let entry = store.upsert(&date, mood, &payload.note).await?;
    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveResponse>, AppError> {
    let mut store = state.store.lock().await;
    let removed = store.remove(&id).await?;
    Ok(Json(RemoveResponse { removed }))
}

pub async fn clear_entries(
    State(state): State<AppState>,
    Query(request): Query<ClearRequest>,
) -> Result<Json<ClearResponse>, AppError> {
    if !request.confirm {
        return Err(AppError::bad_request("clearing all entries requires confirm=true"));
    }

    let mut store = state.store.lock().await;
    let cleared = store.clear().await?;
    Ok(Json(ClearResponse { cleared }))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(build_stats(&store.entries())))
}

pub async fn export_entries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let store = state.store.lock().await;
    let body = export_all(&store.entries())?;
    let disposition = format!("attachment; filename=\"{}\"", export_filename(today()));

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

pub async fn import_entries(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ImportSummary>, AppError> {
    // An empty upload reads as an empty list.
    let incoming: serde_json::Value = if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::Value::Array(Vec::new())
    } else {
        serde_json::from_slice(&body).map_err(|_| AppError::invalid_import())?
    };

    let mut store = state.store.lock().await;
    let summary = store.merge_import(&incoming).await?;
    Ok(Json(summary))
}
