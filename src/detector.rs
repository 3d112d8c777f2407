//! Season premiere detection.
//!
//! Decides, for every series in the catalog, whether a new season that has
//! not been announced yet starts within the lookahead window:
//!
//! 1. the series is monitored and has a next airing timestamp,
//! 2. that timestamp lies in `[now, now + days_ahead]`,
//! 3. the first episode in feed order that has an air date at or after
//!    `now` and no file yet is episode 1 of its season,
//! 4. the `title|S<season>` key is not among the known keys.
//!
//! Per-series failures (unparsable dates, episode lookups that fail) are
//! collected in [`Detection::skipped`] and never abort the detection.

use std::{collections::HashSet, fmt};

use chrono::{Duration, NaiveDateTime, ParseError};

use crate::{
    sonarr::EpisodeSource,
    types::{Episode, PremiereEvent, Series},
    utils,
};

const UNKNOWN: &str = "Unknown";

#[derive(Debug)]
pub enum SkipReason {
    DateParse(ParseError),
    EpisodeFetch(reqwest::Error),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::DateParse(e) => write!(f, "cannot parse date: {}", e),
            SkipReason::EpisodeFetch(e) => write!(f, "cannot fetch episodes: {}", e),
        }
    }
}

#[derive(Debug)]
pub struct SkippedSeries {
    pub title: String,
    pub reason: SkipReason,
}

#[derive(Debug, Default)]
pub struct Detection {
    /// Premieres sorted soonest first.
    pub events: Vec<PremiereEvent>,
    pub skipped: Vec<SkippedSeries>,
}

pub fn is_candidate(series: &Series) -> bool {
    series.monitored && series.next_airing.is_some()
}

/// Closed interval check: both `now` and `now + days_ahead` are inside.
///
/// A cutoff past the representable date range leaves the window open-ended.
pub fn within_window(airing: NaiveDateTime, now: NaiveDateTime, days_ahead: u32) -> bool {
    let cutoff = Duration::try_days(i64::from(days_ahead))
        .and_then(|window| now.checked_add_signed(window));

    airing >= now && cutoff.is_none_or(|cutoff| airing <= cutoff)
}

/// Returns the first episode, in feed order, that airs at or after `now`
/// and has not been acquired yet.
///
/// Episodes without an air date are passed over. An air date that cannot
/// be parsed fails the whole lookup.
pub fn next_unaired_episode(
    episodes: &[Episode],
    now: NaiveDateTime,
) -> Result<Option<&Episode>, ParseError> {
    for episode in episodes {
        let Some(raw) = episode.air_date_utc.as_deref() else {
            continue;
        };

        let aired = utils::parse_timestamp(raw)?;
        if aired >= now && !episode.has_file {
            return Ok(Some(episode));
        }
    }

    Ok(None)
}

/// Stable sort, soonest first.
pub fn sort_events(events: &mut [PremiereEvent]) {
    events.sort_by_key(|event| event.days_until);
}

/// Finds every upcoming, unannounced season premiere in `catalog`.
///
/// Episodes are only requested for series whose next airing already falls
/// inside the window.
pub async fn detect<S: EpisodeSource>(
    catalog: &[Series],
    known_keys: &HashSet<String>,
    now: NaiveDateTime,
    days_ahead: u32,
    source: &S,
) -> Detection {
    let mut detection = Detection::default();

    for series in catalog.iter().filter(|s| is_candidate(s)) {
        let skip = |reason| SkippedSeries {
            title: series.title.clone(),
            reason,
        };

        let Some(raw_airing) = series.next_airing.as_deref() else {
            continue;
        };

        let airing = match utils::parse_timestamp(raw_airing) {
            Ok(airing) => airing,
            Err(e) => {
                detection.skipped.push(skip(SkipReason::DateParse(e)));
                continue;
            }
        };

        if !within_window(airing, now, days_ahead) {
            continue;
        }

        let episodes = match source.episodes(series.id).await {
            Ok(episodes) => episodes,
            Err(e) => {
                detection.skipped.push(skip(SkipReason::EpisodeFetch(e)));
                continue;
            }
        };

        let next_episode = match next_unaired_episode(&episodes, now) {
            Ok(Some(episode)) => episode,
            Ok(None) => continue,
            Err(e) => {
                detection.skipped.push(skip(SkipReason::DateParse(e)));
                continue;
            }
        };

        // mid-season episodes and specials are not premieres
        if next_episode.episode_number != 1 || next_episode.season_number == 0 {
            continue;
        }

        let season = next_episode.season_number;
        let dedup_key = utils::dedup_key(&series.title, season);
        if known_keys.contains(&dedup_key) {
            continue;
        }

        detection.events.push(PremiereEvent {
            title: series.title.clone(),
            season,
            airing,
            days_until: (airing - now).num_days(),
            network: series.network.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            status: series.status.clone().unwrap_or_else(|| UNKNOWN.to_string()),
            external_ref: series.tmdb_id,
            dedup_key,
        });
    }

    sort_events(&mut detection.events);
    detection
}
