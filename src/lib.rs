pub mod config;
pub mod models;
pub mod db;
pub mod risk; // Allergy risk scorer
pub mod report; // Date-ranged report + flagged-food correlations
pub mod analysis; // Symptom-driven allergen suggestions
pub mod allergens; // Allergen tags, ingredient scan, alternatives
pub mod calendar;
pub mod diary;

pub use diary::{DiaryError, DiaryService};

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber. The filter comes from `RUST_LOG`,
/// falling back to `config::default_log_filter()`. A second call is a no-op.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
