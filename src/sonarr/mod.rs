//! # Sonarr Integration Module
//!
//! Thin client for the two Sonarr v3 endpoints the premiere check needs:
//!
//! - `GET /api/v3/series` - the full series catalog
//! - `GET /api/v3/episode?seriesId=<id>` - all episodes of one series
//!
//! Every request carries the `X-Api-Key` header and is bounded by the
//! configured request timeout. Requests are attempted exactly once; a
//! timeout, a connection failure or a non-2xx status is returned to the
//! caller as a [`reqwest::Error`].
//!
//! The episode lookup is exposed through the [`EpisodeSource`] trait so the
//! detector can be driven by something other than a live Sonarr instance.

use reqwest::Client;

use crate::{
    config::Settings,
    types::{Episode, Series},
};

const API_KEY_HEADER: &str = "X-Api-Key";

/// Anything that can list the episodes of a series.
#[allow(async_fn_in_trait)]
pub trait EpisodeSource {
    async fn episodes(&self, series_id: u64) -> Result<Vec<Episode>, reqwest::Error>;
}

#[derive(Debug, Clone)]
pub struct SonarrClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SonarrClient {
    /// Builds a client with the request timeout from `settings`.
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.sonarr_url.clone(),
            api_key: settings.sonarr_api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches every series known to Sonarr.
    pub async fn get_series(&self) -> Result<Vec<Series>, reqwest::Error> {
        let api_url = format!("{uri}/api/v3/series", uri = self.base_url);

        self.client
            .get(&api_url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Series>>()
            .await
    }

    /// Fetches all episodes of one series, in the order Sonarr returns them.
    pub async fn get_episodes(&self, series_id: u64) -> Result<Vec<Episode>, reqwest::Error> {
        let api_url = format!("{uri}/api/v3/episode", uri = self.base_url);

        self.client
            .get(&api_url)
            .query(&[("seriesId", series_id)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Episode>>()
            .await
    }
}

impl EpisodeSource for SonarrClient {
    async fn episodes(&self, series_id: u64) -> Result<Vec<Episode>, reqwest::Error> {
        self.get_episodes(series_id).await
    }
}

/// Describes a catalog failure in words an operator can act on.
pub fn describe_error(err: &reqwest::Error, base_url: &str, timeout_secs: u64) -> String {
    if err.is_timeout() {
        format!(
            "Request timed out after {} seconds. Try increasing REQUEST_TIMEOUT or check if Sonarr is responding slowly.",
            timeout_secs
        )
    } else if err.is_connect() {
        format!(
            "Cannot connect to Sonarr at {}. Check that Sonarr is running and the URL is correct.",
            base_url
        )
    } else if let Some(status) = err.status() {
        format!("Sonarr answered with status {}: {}", status, err)
    } else {
        format!("Error fetching series from Sonarr: {}", err)
    }
}
