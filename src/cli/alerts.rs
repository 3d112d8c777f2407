use std::path::PathBuf;

use tabled::Table;

use crate::{
    info,
    management::AlertLogManager,
    types::AlertTableRow,
    utils, warning,
};

/// Loads the alert log, falling back to an empty one when it cannot be read.
///
/// Announcing a season twice is preferred over not running at all.
pub async fn load_alert_log(path: PathBuf) -> AlertLogManager {
    match AlertLogManager::new(path.clone()).load().await {
        Ok(alert_log) => alert_log,
        Err(e) => {
            warning!(
                "Error loading alert log {}: {}. Continuing without previous alerts.",
                path.display(),
                e
            );
            AlertLogManager::new(path)
        }
    }
}

/// Lists the announced seasons stored at `path`.
///
/// Needs no Sonarr or webhook configuration.
pub async fn alerts(path: PathBuf) {
    let alert_log = load_alert_log(path).await;
    info!("Alert log: {}", alert_log.path().display());

    if alert_log.is_empty() {
        info!("No seasons have been announced yet.");
        return;
    }

    let mut keys: Vec<&String> = alert_log.keys().iter().collect();
    keys.sort();

    let rows: Vec<AlertTableRow> = keys
        .into_iter()
        .map(|key| {
            let (show, season) = utils::split_dedup_key(key);
            AlertTableRow { show, season }
        })
        .collect();

    println!("{}", Table::new(rows));
    info!("{} season(s) announced so far.", alert_log.len());
}
