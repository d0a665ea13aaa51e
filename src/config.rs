use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "MealTrace";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Symmetric window around each time a flagged food was eaten.
pub const CORRELATION_WINDOW_HOURS: i64 = 24;

/// Look-back window before a symptom in symptom-driven analysis.
pub const LOOKBACK_WINDOW_HOURS: i64 = 24;

/// Severity used for averaging when a symptom entry carries none.
pub const DEFAULT_SEVERITY: f64 = 5.0;

/// Number of correlations listed in the text summary.
pub const SUMMARY_TOP_CORRELATIONS: usize = 5;

/// Maximum alternatives offered per flagged food in a recommendation.
pub const MAX_ALTERNATIVES: usize = 5;

/// Get the application data directory
/// ~/MealTrace/ on all platforms, or ./MealTrace when no home is known.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("MealTrace")
}

/// Path of the diary database file.
pub fn database_path() -> PathBuf {
    app_data_dir().join("diary.db")
}

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "mealtrace=info"
}
