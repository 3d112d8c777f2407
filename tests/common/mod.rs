#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use seasoncli::{
    sonarr::EpisodeSource,
    types::{Episode, Series},
};

pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn days_from_now(days: i64) -> NaiveDateTime {
    now() + Duration::days(days)
}

/// Formats like Sonarr does: UTC with a trailing `Z`.
pub fn sonarr_ts(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn series(id: u64, title: &str, next_airing: Option<NaiveDateTime>) -> Series {
    Series {
        id,
        title: title.to_string(),
        monitored: true,
        next_airing: next_airing.map(sonarr_ts),
        tmdb_id: Some(1000 + id),
        network: Some("HBO".to_string()),
        status: Some("continuing".to_string()),
    }
}

pub fn episode(
    series_id: u64,
    season: u32,
    number: u32,
    air: Option<NaiveDateTime>,
    has_file: bool,
) -> Episode {
    Episode {
        series_id,
        season_number: season,
        episode_number: number,
        air_date_utc: air.map(sonarr_ts),
        has_file,
    }
}

/// A request error without any network traffic.
pub fn request_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err()
}

/// In-memory episode feed that remembers which series were asked for.
#[derive(Default)]
pub struct FakeEpisodes {
    pub episodes: HashMap<u64, Vec<Episode>>,
    pub failing: HashSet<u64>,
    pub calls: RefCell<Vec<u64>>,
}

impl FakeEpisodes {
    pub fn with(mut self, series_id: u64, episodes: Vec<Episode>) -> Self {
        self.episodes.insert(series_id, episodes);
        self
    }

    pub fn failing(mut self, series_id: u64) -> Self {
        self.failing.insert(series_id);
        self
    }
}

impl EpisodeSource for FakeEpisodes {
    async fn episodes(&self, series_id: u64) -> Result<Vec<Episode>, reqwest::Error> {
        self.calls.borrow_mut().push(series_id);
        if self.failing.contains(&series_id) {
            return Err(request_error());
        }
        Ok(self.episodes.get(&series_id).cloned().unwrap_or_default())
    }
}

pub mod fake_http {
    use std::{
        collections::HashMap,
        path::PathBuf,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use axum::{
        Json, Router,
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        routing::{get, post},
    };
    use seasoncli::{
        config::{Settings, WebhookFormat},
        types::{Episode, Series},
    };
    use serde_json::Value;

    pub const API_KEY: &str = "test-key";

    #[derive(Clone, Default)]
    pub struct SonarrState {
        pub series: Arc<Mutex<Vec<Series>>>,
        pub episodes: Arc<Mutex<HashMap<u64, Vec<Episode>>>>,
        pub broken_series: Arc<Mutex<Vec<u64>>>,
    }

    #[derive(Clone, Default)]
    pub struct WebhookState {
        pub received: Arc<Mutex<Vec<Value>>>,
        /// Messages containing this text are answered with 500.
        pub reject_containing: Arc<Mutex<Option<String>>>,
    }

    impl WebhookState {
        pub fn received(&self) -> Vec<Value> {
            self.received.lock().unwrap().clone()
        }

        pub fn reject(&self, needle: Option<&str>) {
            *self.reject_containing.lock().unwrap() = needle.map(str::to_string);
        }
    }

    fn authorized(headers: &HeaderMap) -> bool {
        headers
            .get("X-Api-Key")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == API_KEY)
    }

    async fn list_series(
        State(state): State<SonarrState>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<Series>>, StatusCode> {
        if !authorized(&headers) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(Json(state.series.lock().unwrap().clone()))
    }

    async fn list_episodes(
        State(state): State<SonarrState>,
        headers: HeaderMap,
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Json<Vec<Episode>>, StatusCode> {
        if !authorized(&headers) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        let series_id: u64 = params
            .get("seriesId")
            .and_then(|id| id.parse().ok())
            .ok_or(StatusCode::BAD_REQUEST)?;
        if state.broken_series.lock().unwrap().contains(&series_id) {
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Ok(Json(
            state
                .episodes
                .lock()
                .unwrap()
                .get(&series_id)
                .cloned()
                .unwrap_or_default(),
        ))
    }

    async fn receive_hook(State(state): State<WebhookState>, Json(body): Json<Value>) -> StatusCode {
        let text = body.to_string();
        if let Some(needle) = state.reject_containing.lock().unwrap().as_deref() {
            if text.contains(needle) {
                return StatusCode::INTERNAL_SERVER_ERROR;
            }
        }
        state.received.lock().unwrap().push(body);
        StatusCode::NO_CONTENT
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    pub async fn spawn_sonarr(state: SonarrState) -> String {
        let router = Router::new()
            .route("/api/v3/series", get(list_series))
            .route("/api/v3/episode", get(list_episodes))
            .with_state(state);
        serve(router).await
    }

    pub async fn spawn_webhook(state: WebhookState) -> String {
        let router = Router::new()
            .route("/hook", post(receive_hook))
            .with_state(state);
        format!("{}/hook", serve(router).await)
    }

    pub fn settings(sonarr_url: &str, webhook_url: &str, alert_log_file: PathBuf) -> Settings {
        Settings {
            sonarr_url: sonarr_url.to_string(),
            sonarr_api_key: API_KEY.to_string(),
            webhook_url: Some(webhook_url.to_string()),
            webhook_username: "Coming Soon".to_string(),
            webhook_format: WebhookFormat::Discord,
            days_ahead: 30,
            request_timeout: Duration::from_secs(5),
            alert_log_file,
        }
    }
}
