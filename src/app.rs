use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/moods", get(handlers::list_moods))
        .route(
            "/api/entries",
            get(handlers::list_entries)
                .post(handlers::save_entry)
                .delete(handlers::clear_entries),
        )
        .route("/api/entries/:id", delete(handlers::delete_entry))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/export", get(handlers::export_entries))
        .route("/api/import", post(handlers::import_entries))
        .with_state(state)
}
