//! App module - contains the main application state and logic

mod filters;
mod modals;
mod pages;
mod thumbnails;
mod views;

use crate::catalog::{Catalog, CatalogState, EntryId};
use crate::content::FeaturedId;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) catalog: Catalog,
    // Catalog page: filter/sort state and the memoized result
    pub(crate) catalog_state: CatalogState,
    pub(crate) visible_ids: Vec<EntryId>,
    // Navigation
    pub(crate) page: Page,
    pub(crate) home_search: String,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // View mode
    pub(crate) results_layout: ResultsLayout,
    pub(crate) large_cards: bool,
    pub(crate) show_filters: bool,
    // Thumbnail cache
    pub(crate) thumbnail_dir: PathBuf,
    pub(crate) thumbnail_cache: HashMap<String, Option<egui::TextureHandle>>,
    // Details windows
    pub(crate) details_entry: Option<EntryId>,
    pub(crate) featured_details: Option<FeaturedId>,
    // Settings
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    pub(crate) catalog_path: Option<String>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: Catalog,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_catalog(catalog, settings, data_dir)
    }

    /// State setup shared by `new`; kept free of egui context so it can be
    /// built in tests.
    pub(crate) fn with_catalog(catalog: Catalog, settings: Settings, data_dir: PathBuf) -> Self {
        let thumbnail_dir = settings.thumbnail_dir_or_default(&data_dir);
        debug!(
            entries = catalog.len(),
            thumbnails = %thumbnail_dir.display(),
            "Initializing app state"
        );

        let mut app = Self {
            catalog,
            catalog_state: CatalogState::default(),
            visible_ids: Vec::new(),
            page: settings.last_page,
            home_search: String::new(),
            logo_texture: None,
            results_layout: settings.results_layout,
            large_cards: settings.large_cards,
            show_filters: settings.show_filters,
            thumbnail_dir,
            thumbnail_cache: HashMap::new(),
            details_entry: None,
            featured_details: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            catalog_path: settings.catalog_path,
        };
        app.recompute_visible();
        app
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            last_page: self.page,
            results_layout: self.results_layout,
            large_cards: self.large_cards,
            show_filters: self.show_filters,
            thumbnail_dir: Some(self.thumbnail_dir.to_string_lossy().to_string()),
            catalog_path: self.catalog_path.clone(),
        };
        settings.save(&self.data_dir);
    }

    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            debug!(from = ?self.page, to = ?page, "Navigate");
            self.page = page;
        }
    }
}
