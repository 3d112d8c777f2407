use tabled::Table;

use crate::{
    cli::{load_alert_log, spinner},
    config::Settings,
    detector, error, info,
    sonarr::{self, SonarrClient},
    types::PremiereTableRow,
    utils, warning,
};

/// Lists every season premiere inside the window, announced or not.
///
/// Nothing is sent and the alert log is only read.
pub async fn upcoming(settings: &Settings) {
    let sonarr = match SonarrClient::new(settings) {
        Ok(client) => client,
        Err(e) => error!("Cannot create HTTP client: {}", e),
    };
    let alert_log = load_alert_log(settings.alert_log_file.clone()).await;

    let pb = spinner("Fetching series from Sonarr...");
    let catalog = match sonarr.get_series().await {
        Ok(catalog) => catalog,
        Err(e) => {
            pb.finish_and_clear();
            error!(
                "{}",
                sonarr::describe_error(
                    &e,
                    &settings.sonarr_url,
                    settings.request_timeout.as_secs()
                )
            );
        }
    };

    pb.set_message("Looking for season premieres...");
    let detection = detector::detect(
        &catalog,
        &Default::default(),
        utils::now(),
        settings.days_ahead,
        &sonarr,
    )
    .await;
    pb.finish_and_clear();

    for skipped in &detection.skipped {
        warning!("Skipping {}: {}", skipped.title, skipped.reason);
    }

    if detection.events.is_empty() {
        info!(
            "No season premieres within the next {} days.",
            settings.days_ahead
        );
        return;
    }

    let rows: Vec<PremiereTableRow> = detection
        .events
        .into_iter()
        .map(|event| PremiereTableRow {
            announced: if alert_log.has(&event.dedup_key) {
                "yes".to_string()
            } else {
                "no".to_string()
            },
            airing: utils::format_airing(event.airing),
            days: utils::days_label(event.days_until),
            title: event.title,
            season: event.season,
            network: event.network,
            status: event.status,
        })
        .collect();

    println!(
        "Season premieres within {days} days:\n{table}\n",
        days = settings.days_ahead,
        table = Table::new(rows)
    );
}
