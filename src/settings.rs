//! User settings stored as settings.json in the app data directory

use crate::constants::SETTINGS_FILE;
use crate::types::{Page, ResultsLayout};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // View
    pub last_page: Page,
    pub results_layout: ResultsLayout,
    pub large_cards: bool,
    pub show_filters: bool,

    // Paths
    pub thumbnail_dir: Option<String>,
    pub catalog_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            last_page: Page::Home,
            results_layout: ResultsLayout::Grid,
            large_cards: true,
            show_filters: true,
            thumbnail_dir: None,
            catalog_path: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn thumbnail_dir_or_default(&self, data_dir: &Path) -> PathBuf {
        self.thumbnail_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("thumbnails"))
    }

    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog_path.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(720.0),
            last_page: Page::Catalog,
            results_layout: ResultsLayout::List,
            large_cards: false,
            thumbnail_dir: Some("/srv/thumbs".into()),
            ..Default::default()
        };
        settings.save(dir.path());
        assert_eq!(Settings::load(dir.path()), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "last_page": "About" }"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path());
        assert_eq!(settings.last_page, Page::About);
        assert!(settings.large_cards);
        assert_eq!(
            settings.thumbnail_dir_or_default(dir.path()),
            dir.path().join("thumbnails")
        );
        assert_eq!(settings.catalog_path(), None);
    }
}
