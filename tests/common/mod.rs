use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use serde_json::Value;

use gumshoe::model::{RemoteConfig, Show, ShowId};
use gumshoe::remote::RemoteClient;

/// In-process stand-in for gumshoed's HTTP API.
#[derive(Default)]
pub struct DaemonState {
    pub settings: Value,
    pub config_updates: Vec<Value>,
    pub shows: Vec<Show>,
    pub next_id: i64,
    /// Answer `GET /api/shows` as `{"Shows": [...]}` instead of a bare array.
    pub envelope: bool,
    /// Answer `GET /api/shows` with this body instead of the show list.
    pub list_body: Option<Value>,
    /// Answer every mutating request with 500.
    pub fail_writes: bool,
    /// Sleep this long before answering any request.
    pub delay: Option<Duration>,
}

type Shared = Arc<Mutex<DaemonState>>;

pub struct StubDaemon {
    pub base_url: String,
    pub state: Shared,
    server: tokio::task::JoinHandle<()>,
}

impl Drop for StubDaemon {
    fn drop(&mut self) {
        self.server.abort();
    }
}

impl StubDaemon {
    #[allow(dead_code)]
    pub fn client(&self) -> Result<RemoteClient> {
        RemoteClient::new(RemoteConfig::new(&self.base_url))
    }

    #[allow(dead_code)]
    pub fn client_with_timeout(&self, timeout_secs: u64) -> Result<RemoteClient> {
        let mut remote = RemoteConfig::new(&self.base_url);
        remote.timeout_secs = timeout_secs;
        RemoteClient::new(remote)
    }

    #[allow(dead_code)]
    pub fn with_state<T>(&self, f: impl FnOnce(&mut DaemonState) -> T) -> T {
        let mut st = self.state.lock().expect("daemon state lock");
        f(&mut st)
    }
}

pub fn sample_settings() -> Value {
    serde_json::json!({
        "dir_options": {
            "gumshoe_dir": "/usr/local/gumshoe",
            "user_dir": "/home/ana/.gumshoe",
            "data_dir": "/home/ana/.gumshoe/data",
            "download_dir": "download",
            "fetch_dir": "fetch",
            "log_dir": "/var/log/gumshoe"
        },
        "download_params": { "tracker": "example", "queue_size": 4 },
        "irc_channel": { "nick": "gumshoe", "server": "irc.example.net", "port": 6697 },
        "last_modified": 1400000000,
        "operations": {
            "enable_web": true,
            "http_port": "8080",
            "watch_methods": { "irc": true, "rss": false }
        }
    })
}

#[allow(dead_code)]
pub fn sample_shows() -> Vec<Show> {
    ["Alpha", "Bravo", "Charlie"]
        .iter()
        .enumerate()
        .map(|(i, title)| Show {
            id: Some(ShowId(i as i64 + 1)),
            tvdbid: 0,
            title: title.to_string(),
            quality: "720p".to_string(),
            episodal: i % 2 == 0,
            last_update: 1_500_000_000_000_000_000,
        })
        .collect()
}

pub async fn spawn_daemon() -> Result<StubDaemon> {
    let shows = sample_shows();
    let state = Arc::new(Mutex::new(DaemonState {
        settings: sample_settings(),
        next_id: shows.len() as i64 + 1,
        shows,
        ..DaemonState::default()
    }));

    let app = Router::new()
        .route("/status", get(status))
        .route("/settings", get(get_settings))
        .route("/api/config/update", post(update_config))
        .route("/api/shows", get(list_shows))
        .route("/api/show/new", post(create_show))
        .route("/api/show/update/:id", post(update_show))
        .route("/api/show/delete/:id", delete(delete_show))
        .route("/api/show/:id", get(get_show))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .context("bind stub daemon")?;
    let addr = listener.local_addr().context("stub daemon addr")?;
    let server = tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(StubDaemon {
        base_url: format!("http://{}", addr),
        state,
        server,
    })
}

async fn pause(st: &Shared) -> bool {
    let (delay, fail) = {
        let st = st.lock().expect("daemon state lock");
        (st.delay, st.fail_writes)
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    fail
}

async fn status(State(st): State<Shared>) -> &'static str {
    pause(&st).await;
    "OK"
}

async fn get_settings(State(st): State<Shared>) -> Json<Value> {
    pause(&st).await;
    Json(st.lock().expect("daemon state lock").settings.clone())
}

async fn update_config(
    State(st): State<Shared>,
    Json(body): Json<Value>,
) -> Result<&'static str, StatusCode> {
    if pause(&st).await {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut st = st.lock().expect("daemon state lock");
    merge(&mut st.settings, &body);
    st.config_updates.push(body);
    Ok("Configuration Updated Successfully")
}

async fn list_shows(State(st): State<Shared>) -> Json<Value> {
    pause(&st).await;
    let st = st.lock().expect("daemon state lock");
    if let Some(body) = &st.list_body {
        return Json(body.clone());
    }
    let shows = serde_json::to_value(&st.shows).expect("serialize shows");
    if st.envelope {
        Json(serde_json::json!({ "Shows": shows }))
    } else {
        Json(shows)
    }
}

async fn get_show(
    State(st): State<Shared>,
    Path(id): Path<i64>,
) -> Result<Json<Show>, StatusCode> {
    pause(&st).await;
    let st = st.lock().expect("daemon state lock");
    st.shows
        .iter()
        .find(|s| s.id == Some(ShowId(id)))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn create_show(
    State(st): State<Shared>,
    Json(mut show): Json<Show>,
) -> Result<Json<Show>, StatusCode> {
    if pause(&st).await {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut st = st.lock().expect("daemon state lock");
    show.id = Some(ShowId(st.next_id));
    show.last_update = 1_600_000_000_000_000_000;
    st.next_id += 1;
    st.shows.push(show.clone());
    Ok(Json(show))
}

async fn update_show(
    State(st): State<Shared>,
    Path(id): Path<i64>,
    Json(mut show): Json<Show>,
) -> Result<&'static str, StatusCode> {
    if pause(&st).await {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut st = st.lock().expect("daemon state lock");
    let slot = st
        .shows
        .iter_mut()
        .find(|s| s.id == Some(ShowId(id)))
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    show.id = Some(ShowId(id));
    *slot = show;
    Ok("null")
}

async fn delete_show(
    State(st): State<Shared>,
    Path(id): Path<i64>,
) -> Result<&'static str, StatusCode> {
    if pause(&st).await {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let mut st = st.lock().expect("daemon state lock");
    let before = st.shows.len();
    st.shows.retain(|s| s.id != Some(ShowId(id)));
    if st.shows.len() == before {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok("null")
}

/// Object-wise merge, the way the daemon folds a partial update into its config.
fn merge(into: &mut Value, patch: &Value) {
    match (into, patch) {
        (Value::Object(into), Value::Object(patch)) => {
            for (k, v) in patch {
                merge(into.entry(k.clone()).or_insert(Value::Null), v);
            }
        }
        (into, patch) => *into = patch.clone(),
    }
}
