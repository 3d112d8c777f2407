mod alerts;

pub use alerts::ALERT_LOG_FILE_NAME;
pub use alerts::AlertLogError;
pub use alerts::AlertLogManager;
