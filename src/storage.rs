use crate::errors::AppError;
use crate::models::Progress;
use std::{
    env, io,
    path::{Path, PathBuf},
};
use tokio::fs;

pub fn resolve_data_path() -> PathBuf {
    match env::var("ROADMAP_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("data/roadmap-progress.json"),
    }
}

/// Restores the completed-set from disk. A missing file means a fresh start;
/// a file that exists but does not parse is an error the caller must handle.
pub async fn load_progress(path: &Path) -> io::Result<Progress> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("malformed progress file {}: {err}", path.display()),
            )
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Progress::default()),
        Err(err) => Err(err),
    }
}

pub async fn persist_progress(path: &Path, progress: &Progress) -> Result<(), AppError> {
    let payload = serde_json::to_vec(progress).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

pub async fn delete_progress(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(AppError::internal(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "roadmap_storage_{tag}_{}_{nanos}.json",
            std::process::id()
        ));
        path
    }

    #[tokio::test]
    async fn persist_then_load_round_trips_the_set() {
        let path = scratch_path("round_trip");
        let progress = Progress {
            days: [9, 1, 2, 5].into_iter().collect(),
        };

        persist_progress(&path, &progress).await.unwrap();
        let restored = load_progress(&path).await.unwrap();
        assert_eq!(restored.days, progress.days);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_record_is_a_flat_sorted_array() {
        let path = scratch_path("format");
        let progress = Progress {
            days: [9, 1, 5].into_iter().collect(),
        };

        persist_progress(&path, &progress).await.unwrap();
        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(raw, "[1,5,9]");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn load_missing_file_starts_empty() {
        let path = scratch_path("missing");
        let progress = load_progress(&path).await.unwrap();
        assert!(progress.days.is_empty());
    }

    #[tokio::test]
    async fn load_malformed_file_is_an_error() {
        let path = scratch_path("malformed");
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = load_progress(&path).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let path = scratch_path("delete");
        persist_progress(&path, &Progress::default()).await.unwrap();

        delete_progress(&path).await.unwrap();
        delete_progress(&path).await.unwrap();
        assert!(load_progress(&path).await.unwrap().days.is_empty());
    }
}
