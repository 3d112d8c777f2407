//! Season Premiere Alert CLI Library
//!
//! This library watches a Sonarr instance for monitored series whose next
//! season starts within a configurable number of days and announces each
//! premiere once to a webhook (Discord or Slack). Announced premieres are
//! remembered in an append-only alert log so scheduled runs never repeat them.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations and the check run
//! - `config` - Configuration management and environment variables
//! - `detector` - Season premiere detection
//! - `management` - Alert log persistence
//! - `sonarr` - Sonarr v3 API client
//! - `types` - Data structures and type definitions
//! - `utils` - Timestamp and formatting helpers
//! - `webhook` - Outbound webhook notifications
//!
//! # Example
//!
//! ```
//! use seasoncli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> seasoncli::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     cli::check(&settings, false).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod detector;
pub mod management;
pub mod sonarr;
pub mod types;
pub mod utils;
pub mod webhook;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so it
/// can cross await points.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Checking Sonarr for new seasons...");
/// info!("Found {} series", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for failures that end the run, such as a missing configuration
/// value or an unreachable Sonarr instance. Code after this macro does not
/// execute.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for per-item failures that are reported and skipped while the run
/// continues: an episode list that cannot be fetched, an unparsable air date,
/// a webhook that rejected a message, an alert key that could not be saved.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
