#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::Router;
use classwork_api::config::AppConfig;
use classwork_api::server::{algorithms_app, tasks_app};
use reqwest::StatusCode;
use serde_json::{json, Value};

static ALGORITHMS: OnceLock<TestServer> = OnceLock::new();
static TASKS: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
}

impl TestServer {
    /// Serve `app` on a free port from a dedicated thread and runtime, so the
    /// server outlives the per-test runtimes that `#[tokio::test]` creates.
    fn spawn(app: Router) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        std::thread::Builder::new()
            .name(format!("test-server-{port}"))
            .spawn(move || {
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                    .expect("failed to build server runtime");
                runtime.block_on(async move {
                    let listener = tokio::net::TcpListener::bind(addr)
                        .await
                        .expect("failed to bind test server");
                    axum::serve(listener, app).await.expect("test server failed");
                });
            })
            .context("failed to spawn server thread")?;

        Ok(Self { port, base_url })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn ensure_algorithms_server() -> Result<&'static TestServer> {
    let server = ALGORITHMS.get_or_init(|| {
        let app = algorithms_app(&AppConfig::development()).expect("development config has a secret");
        TestServer::spawn(app).expect("failed to spawn algorithms server")
    });
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

pub async fn ensure_tasks_server() -> Result<&'static TestServer> {
    let server = TASKS.get_or_init(|| {
        TestServer::spawn(tasks_app(&AppConfig::development())).expect("failed to spawn tasks server")
    });
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Register `username` (ignoring "already exists") and log in, returning the access token.
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> Result<String> {
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/register"))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::OK || res.status() == StatusCode::BAD_REQUEST,
        "unexpected register status: {}",
        res.status()
    );

    let res = client
        .post(server.url("/login"))
        .form(&[("username", username), ("password", password)])
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

    let body = res.json::<Value>().await?;
    body["access_token"]
        .as_str()
        .map(str::to_string)
        .context("login response is missing access_token")
}
