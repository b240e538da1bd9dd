pub mod app;
pub mod dates;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod models;
pub mod mood;
pub mod state;
pub mod stats;
pub mod storage;
pub mod store;
pub mod transfer;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_dir, slot_path};
pub use store::EntryStore;
