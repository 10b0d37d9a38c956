use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize, PartialEq)]
struct ChecklistRow {
    name: String,
    checked: bool,
}

#[derive(Debug, Deserialize, PartialEq)]
struct RatingRow {
    name: String,
    value: u8,
}

#[derive(Debug, Deserialize)]
struct DayView {
    date: String,
    entry: String,
    checklist: Vec<ChecklistRow>,
    ratings: Vec<RatingRow>,
}

struct TestServer {
    base_url: String,
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

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("day_journal_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/checklist")).send().await {
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
    let child = Command::new(env!("CARGO_BIN_EXE_day_journal"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
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

async fn get_day(client: &Client, server: &TestServer, date: &str) -> DayView {
    client
        .get(format!("{}/api/days/{date}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_checklist_toggle_is_per_date() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let added: Option<ChecklistRow> = client
        .post(format!("{}/api/checklist", server.base_url))
        .json(&json!({ "name": "  Meditate " }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(added, Some(ChecklistRow { name: "Meditate".into(), checked: false }));

    let items: Vec<String> = client
        .get(format!("{}/api/checklist", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.last().map(String::as_str), Some("Meditate"));

    let day = get_day(&client, &server, "2024-01-01").await;
    assert_eq!(day.date, "2024-01-01");
    let row = day.checklist.iter().find(|row| row.name == "Meditate").unwrap();
    assert!(!row.checked);

    let response = client
        .put(format!("{}/api/days/2024-01-01/checked", server.base_url))
        .json(&json!({ "name": "Meditate", "checked": true }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let day = get_day(&client, &server, "2024-01-01").await;
    assert!(day.checklist.iter().any(|row| row.name == "Meditate" && row.checked));

    let other = get_day(&client, &server, "2024-01-02").await;
    assert!(other.checklist.iter().any(|row| row.name == "Meditate" && !row.checked));
}

#[tokio::test]
async fn http_rating_defaults_and_restores() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let added: Option<RatingRow> = client
        .post(format!("{}/api/rating-categories", server.base_url))
        .json(&json!({ "name": "Energy" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(added, Some(RatingRow { name: "Energy".into(), value: 5 }));

    let fresh = get_day(&client, &server, "2025-05-05").await;
    assert!(fresh.ratings.iter().all(|row| row.value == 5));

    let response = client
        .put(format!("{}/api/days/2025-05-06/ratings", server.base_url))
        .json(&json!({ "name": "Energy", "value": 8 }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let day = get_day(&client, &server, "2025-05-06").await;
    assert!(day.ratings.iter().any(|row| row.name == "Energy" && row.value == 8));
}

#[tokio::test]
async fn http_journal_entry_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    assert_eq!(get_day(&client, &server, "2023-07-04").await.entry, "");

    let response = client
        .put(format!("{}/api/days/2023-07-04/entry", server.base_url))
        .json(&json!({ "text": "Fireworks by the river." }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let day = get_day(&client, &server, "2023-07-04").await;
    assert_eq!(day.entry, "Fireworks by the river.");
}

#[tokio::test]
async fn http_rejects_bad_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/days/not-a-date", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    for value in [11, 300, -1] {
        let response = client
            .put(format!("{}/api/days/2024-01-01/ratings", server.base_url))
            .json(&json!({ "name": "Energy", "value": value }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "value {value}");
    }

    let blank: Option<ChecklistRow> = client
        .post(format!("{}/api/checklist", server.base_url))
        .json(&json!({ "name": "   " }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(blank, None);
}

#[tokio::test]
async fn http_index_serves_page() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let body = Client::new()
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("id=\"journalDate\""));
    assert!(body.contains("id=\"ratingList\""));
}
