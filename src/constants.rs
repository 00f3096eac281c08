//! Application constants and configuration

pub const APP_NAME: &str = "Deck Catalog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_PREFIX: &str = "deck-catalog.log";
pub const SETTINGS_FILE: &str = "settings.json";

/// Rating slider granularity
pub const RATING_STEP: f64 = 0.1;
/// Upper bound offered by the minimum downloads input
pub const MAX_DOWNLOADS_INPUT: u64 = 1_000_000;
