pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod plan;
pub mod report;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_progress, resolve_data_path};
