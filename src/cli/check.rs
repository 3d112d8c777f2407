use chrono::NaiveDateTime;

use crate::{
    cli::{load_alert_log, spinner},
    config::Settings,
    detector, error, info,
    management::AlertLogManager,
    sonarr::{self, SonarrClient},
    success, utils, warning,
    webhook::WebhookNotifier,
};

/// Outcome of one check run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub catalog_size: usize,
    /// Dedup keys of the premieres found, soonest first.
    pub detected: Vec<String>,
    pub sent: usize,
    pub failed: usize,
    /// Delivered, but the alert log could not be updated.
    pub unrecorded: usize,
    pub skipped: usize,
}

/// Runs the `check` command and prints a summary.
///
/// Terminates the process when the catalog cannot be fetched, or when alerts
/// should be sent but no webhook is configured.
pub async fn check(settings: &Settings, dry_run: bool) {
    if !dry_run {
        if let Err(e) = settings.require_webhook_url() {
            error!("{}. Use --dry-run to only list premieres.", e);
        }
    }

    info!(
        "Checking Sonarr for NEW SEASONS starting within {} days...",
        settings.days_ahead
    );

    let mut alert_log = load_alert_log(settings.alert_log_file.clone()).await;
    info!("Previously announced seasons: {}", alert_log.len());

    let report = match run_check(settings, &mut alert_log, utils::now(), dry_run).await {
        Ok(report) => report,
        Err(e) => error!(
            "{}",
            sonarr::describe_error(
                &e,
                &settings.sonarr_url,
                settings.request_timeout.as_secs()
            )
        ),
    };

    if dry_run {
        info!(
            "Dry run: {} new season(s) would be announced.",
            report.detected.len()
        );
        return;
    }

    if report.failed == 0 && report.unrecorded == 0 {
        success!(
            "Done. Sent {sent}, skipped {skipped} series.",
            sent = report.sent,
            skipped = report.skipped
        );
    } else {
        warning!(
            "Done with problems. Sent {sent}, failed {failed}, unrecorded {unrecorded}, skipped {skipped} series.",
            sent = report.sent,
            failed = report.failed,
            unrecorded = report.unrecorded,
            skipped = report.skipped
        );
    }
}

/// One full pass: fetch the catalog, detect premieres, announce each and
/// record it right after its delivery is confirmed.
///
/// Only the catalog fetch (and building the HTTP clients) can fail the run;
/// everything else is counted in the returned report. With `dry_run` the
/// premieres are listed but neither sent nor recorded. Without a webhook URL
/// every premiere counts as failed and stays unrecorded.
pub async fn run_check(
    settings: &Settings,
    alert_log: &mut AlertLogManager,
    now: NaiveDateTime,
    dry_run: bool,
) -> Result<CheckReport, reqwest::Error> {
    let sonarr = SonarrClient::new(settings)?;
    let notifier = match (dry_run, settings.webhook_url.as_deref()) {
        (false, Some(url)) => Some(WebhookNotifier::new(settings, url)?),
        _ => None,
    };
    let mut report = CheckReport::default();

    let pb = spinner("Fetching series from Sonarr...");
    let catalog = match sonarr.get_series().await {
        Ok(catalog) => catalog,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    report.catalog_size = catalog.len();

    if catalog.is_empty() {
        pb.finish_and_clear();
        info!("No series data retrieved from Sonarr.");
        return Ok(report);
    }

    pb.set_message(format!(
        "Found {} series, looking for season premieres...",
        catalog.len()
    ));
    let detection = detector::detect(
        &catalog,
        alert_log.keys(),
        now,
        settings.days_ahead,
        &sonarr,
    )
    .await;
    pb.finish_and_clear();

    info!("Found {} total series in Sonarr", catalog.len());

    for skipped in &detection.skipped {
        warning!("Skipping {}: {}", skipped.title, skipped.reason);
    }
    report.skipped = detection.skipped.len();
    report.detected = detection
        .events
        .iter()
        .map(|event| event.dedup_key.clone())
        .collect();

    if detection.events.is_empty() {
        info!("No new seasons starting within the specified timeframe (or all already announced).");
        return Ok(report);
    }

    info!("Found {} new season(s) to announce:", detection.events.len());

    for event in &detection.events {
        info!(
            "  - {} Season {} {}",
            event.title,
            event.season,
            utils::days_label(event.days_until)
        );

        if dry_run {
            continue;
        }

        let Some(notifier) = &notifier else {
            warning!(
                "Cannot send alert for {} Season {}: WEBHOOK_URL is not set",
                event.title,
                event.season
            );
            report.failed += 1;
            continue;
        };

        if let Err(e) = notifier.notify(event).await {
            warning!(
                "Failed to send alert for {} Season {}: {}",
                event.title,
                event.season,
                e
            );
            report.failed += 1;
            continue;
        }

        success!("Alert sent for: {} Season {}", event.title, event.season);
        report.sent += 1;

        if let Err(e) = alert_log.record(&event.dedup_key).await {
            warning!(
                "Error saving {} to alert log {}: {}",
                event.dedup_key,
                alert_log.path().display(),
                e
            );
            report.unrecorded += 1;
        }
    }

    Ok(report)
}
