use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct StatsResponse {
    completed_count: u32,
    remaining_count: u32,
    percentage: f64,
    streak: u32,
}

#[derive(Debug, Deserialize)]
struct DayStatusResponse {
    day: u32,
    completed: bool,
}

#[derive(Debug, Deserialize)]
struct ProgressResponse {
    completed_days: Vec<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExportRecord {
    completed_days: Vec<u32>,
    total_days: u32,
    completed_count: u32,
    remaining_count: u32,
    percentage: String,
    streak: u32,
    export_date: String,
}

struct TestServer {
    base_url: String,
    data_path: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "roadmap_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/stats")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_roadmap_tracker"))
        .env("PORT", port.to_string())
        .env("ROADMAP_DATA_PATH", &data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_path,
        child,
    }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn reset(client: &Client, base_url: &str) {
    let response = client
        .post(format!("{base_url}/api/reset"))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

async fn toggle(client: &Client, base_url: &str, day: u32) -> DayStatusResponse {
    client
        .post(format!("{base_url}/api/toggle"))
        .json(&serde_json::json!({ "day": day }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn stats(client: &Client, base_url: &str) -> StatsResponse {
    client
        .get(format!("{base_url}/api/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_toggle_marks_day_complete() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    reset(&client, &server.base_url).await;

    let status = toggle(&client, &server.base_url, 5).await;
    assert_eq!(status.day, 5);
    assert!(status.completed);

    let progress: ProgressResponse = client
        .get(format!("{}/api/progress", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(progress.completed_days, vec![5]);

    let stats = stats(&client, &server.base_url).await;
    assert_eq!(stats.completed_count, 1);
    assert_eq!(stats.remaining_count, 149);
    assert_eq!(stats.streak, 1);
}

#[tokio::test]
async fn http_toggle_twice_restores_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    reset(&client, &server.base_url).await;

    let first = toggle(&client, &server.base_url, 9).await;
    assert!(first.completed);
    let second = toggle(&client, &server.base_url, 9).await;
    assert!(!second.completed);

    let stats = stats(&client, &server.base_url).await;
    assert_eq!(stats.completed_count, 0);
    assert_eq!(stats.streak, 0);
}

#[tokio::test]
async fn http_consecutive_days_build_streak() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    reset(&client, &server.base_url).await;

    for day in [1, 2, 3] {
        toggle(&client, &server.base_url, day).await;
    }

    let stats = stats(&client, &server.base_url).await;
    assert_eq!(stats.completed_count, 3);
    assert_eq!(stats.streak, 3);
    assert!((stats.percentage - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn http_toggle_rejects_out_of_range_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for day in [0, 151] {
        let response = client
            .post(format!("{}/api/toggle", server.base_url))
            .json(&serde_json::json!({ "day": day }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn http_toggle_writes_through_to_data_file() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    reset(&client, &server.base_url).await;

    toggle(&client, &server.base_url, 3).await;
    toggle(&client, &server.base_url, 1).await;

    let raw = std::fs::read_to_string(&server.data_path).unwrap();
    assert_eq!(raw, "[1,3]");
}

#[tokio::test]
async fn http_reset_clears_progress_and_data_file() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    toggle(&client, &server.base_url, 42).await;
    reset(&client, &server.base_url).await;

    let stats = stats(&client, &server.base_url).await;
    assert_eq!(stats.completed_count, 0);
    assert_eq!(stats.remaining_count, 150);
    assert_eq!(stats.streak, 0);
    assert!(!server.data_path.exists());
}

#[tokio::test]
async fn http_export_json_snapshot_matches_state() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    reset(&client, &server.base_url).await;

    for day in [1, 2, 5] {
        toggle(&client, &server.base_url, day).await;
    }

    let response = client
        .get(format!("{}/api/export", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let disposition = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("roadmap-progress-"));

    let record: ExportRecord = response.json().await.unwrap();
    assert_eq!(record.completed_days, vec![1, 2, 5]);
    assert_eq!(record.total_days, 150);
    assert_eq!(record.completed_count, 3);
    assert_eq!(record.remaining_count, 147);
    assert_eq!(record.percentage, "2.00%");
    assert_eq!(record.streak, 2);
    assert!(!record.export_date.is_empty());
}

#[tokio::test]
async fn http_export_pdf_returns_document() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    reset(&client, &server.base_url).await;
    toggle(&client, &server.base_url, 7).await;

    let response = client
        .get(format!("{}/api/export/pdf", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(content_type, "application/pdf");

    let disposition = response
        .headers()
        .get(reqwest::header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("Class12-Roadmap-Report-"));

    let body = response.bytes().await.unwrap();
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn http_index_serves_the_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client.get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());
    let body = response.text().await.unwrap();
    assert!(body.contains("Class 12th Study Roadmap"));
    assert!(body.contains("Mark Complete"));
}
