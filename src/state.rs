use crate::models::Progress;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Owns the completed-set for the lifetime of the process. Handlers and the
/// auto-save task share it through cloned handles; the mutex is the only
/// writer coordination in the system.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub progress: Arc<Mutex<Progress>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, progress: Progress) -> Self {
        Self {
            data_path,
            progress: Arc::new(Mutex::new(progress)),
        }
    }
}
