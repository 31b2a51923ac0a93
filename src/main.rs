use roadmap_tracker::storage::persist_progress;
use roadmap_tracker::{load_progress, resolve_data_path, router, AppState};
use std::{env, net::SocketAddr, time::Duration};
use tokio::fs;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path();
    if let Some(parent) = data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let progress = load_progress(&data_path).await?;
    info!("restored {} completed days", progress.completed_count());

    let state = AppState::new(data_path, progress);
    spawn_autosave(state.clone());

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Writes the completed-set back to disk every 30 seconds while it is
/// non-empty, independent of the write-through that runs on each toggle.
fn spawn_autosave(state: AppState) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(30));
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let progress = state.progress.lock().await;
            if progress.days.is_empty() {
                continue;
            }
            match persist_progress(&state.data_path, &progress).await {
                Ok(()) => info!("progress auto-saved"),
                Err(err) => error!("auto-save failed: {}", err.message),
            }
        }
    });
}
