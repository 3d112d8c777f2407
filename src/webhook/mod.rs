//! # Webhook Notifier
//!
//! Formats one message per premiere and posts it to the configured webhook.
//! Discord and Slack incoming webhooks are supported; they differ only in
//! the name of the field that carries the text.
//!
//! Delivery is a single POST per premiere. There is no batching and no
//! retry: a 2xx answer counts as delivered, anything else (including a
//! timeout) is returned as an error and the premiere stays unrecorded, so
//! the next scheduled run detects it again.

use reqwest::Client;

use crate::{
    config::{Settings, WebhookFormat},
    types::{DiscordPayload, PremiereEvent, SlackPayload, WebhookPayload},
    utils,
};

const TMDB_TV_URL: &str = "https://www.themoviedb.org/tv";

/// Builds the message text for one premiere.
///
/// ```text
/// **Alpha**
/// Season 4 Starts on Thursday 22 October
/// https://www.themoviedb.org/tv/1234/season/4
/// ```
///
/// The link line is left out when the series has no TMDB id.
pub fn build_message(event: &PremiereEvent) -> String {
    let mut message = format!(
        "**{title}**\nSeason {season} Starts on {date}",
        title = event.title,
        season = event.season,
        date = utils::format_airing(event.airing),
    );

    if let Some(link) = season_link(event) {
        message.push('\n');
        message.push_str(&link);
    }

    message
}

pub fn season_link(event: &PremiereEvent) -> Option<String> {
    event.external_ref.map(|tmdb_id| {
        format!(
            "{base}/{id}/season/{season}",
            base = TMDB_TV_URL,
            id = tmdb_id,
            season = event.season
        )
    })
}

/// Builds the request body for the given webhook flavour.
pub fn build_payload(format: WebhookFormat, message: String, username: &str) -> WebhookPayload {
    let username = username.to_string();
    match format {
        WebhookFormat::Discord => WebhookPayload::Discord(DiscordPayload {
            content: message,
            username,
        }),
        WebhookFormat::Slack => WebhookPayload::Slack(SlackPayload {
            text: message,
            username,
        }),
    }
}

#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: String,
    username: String,
    format: WebhookFormat,
}

impl WebhookNotifier {
    /// Builds a notifier posting to `url` with the timeout and payload
    /// settings from `settings`.
    pub fn new(settings: &Settings, url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(settings.request_timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            username: settings.webhook_username.clone(),
            format: settings.webhook_format,
        })
    }

    /// Sends exactly one message for `event`.
    ///
    /// Returns `Ok(())` only when the webhook accepted the request.
    pub async fn notify(&self, event: &PremiereEvent) -> Result<(), reqwest::Error> {
        let payload = build_payload(self.format, build_message(event), &self.username);

        self.client
            .post(&self.url)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
