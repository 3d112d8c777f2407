//! # CLI Module
//!
//! User-facing commands of seasoncli. Each command loads what it needs
//! (settings, the alert log, the Sonarr catalog), delegates the decisions to
//! [`crate::detector`], [`crate::webhook`] and [`crate::management`], and
//! reports progress with the console macros.
//!
//! ## Commands
//!
//! - [`check`] - Detects upcoming premieres and announces each one once
//! - [`upcoming`] - Lists every premiere inside the window without sending
//! - [`alerts`] - Lists the seasons that were already announced
//!
//! ## Usage Patterns
//!
//! ```bash
//! seasoncli check                  # Typical cron entry
//! seasoncli check --dry-run        # See what would be sent
//! seasoncli upcoming --days-ahead 60
//! seasoncli alerts
//! ```
//!
//! ## Error Handling
//!
//! Only a failing catalog fetch or invalid configuration ends a run early.
//! Everything that concerns a single series or a single message is reported
//! as a warning and skipped.

mod alerts;
mod check;
mod upcoming;

pub use alerts::alerts;
pub use alerts::load_alert_log;
pub use check::CheckReport;
pub use check::check;
pub use check::run_check;
pub use upcoming::upcoming;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
