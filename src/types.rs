use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A series record as returned by `GET /api/v3/series`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub monitored: bool,
    /// ISO-8601 timestamp of the next airing episode, usually UTC with `Z`.
    #[serde(default)]
    pub next_airing: Option<String>,
    #[serde(default)]
    pub tmdb_id: Option<u64>,
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// An episode record as returned by `GET /api/v3/episode?seriesId=<id>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub series_id: u64,
    #[serde(default)]
    pub season_number: u32,
    #[serde(default)]
    pub episode_number: u32,
    #[serde(default)]
    pub air_date_utc: Option<String>,
    #[serde(default)]
    pub has_file: bool,
}

/// An upcoming, not yet announced season premiere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiereEvent {
    pub title: String,
    pub season: u32,
    /// Next airing of the series, normalised to naive UTC.
    pub airing: NaiveDateTime,
    pub days_until: i64,
    pub network: String,
    pub status: String,
    /// TMDB id used for the deep link.
    pub external_ref: Option<u64>,
    /// `title|S<season>`, unique per show and season.
    pub dedup_key: String,
}

#[derive(Tabled)]
pub struct PremiereTableRow {
    pub title: String,
    pub season: u32,
    pub airing: String,
    pub days: String,
    pub network: String,
    pub status: String,
    pub announced: String,
}

#[derive(Tabled)]
pub struct AlertTableRow {
    pub show: String,
    pub season: String,
}

/// Body for Discord webhooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordPayload {
    pub content: String,
    pub username: String,
}

/// Body for Slack incoming webhooks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackPayload {
    pub text: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WebhookPayload {
    Discord(DiscordPayload),
    Slack(SlackPayload),
}
