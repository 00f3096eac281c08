#![windows_subsystem = "windows"]
//! Deck Catalog - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod app;
mod catalog;
mod constants;
mod content;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use catalog::Catalog;
use constants::*;
use eframe::egui;
use settings::Settings;
use std::path::Path;
use tracing::{error, info, warn};
use types::Page;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,deck_catalog=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

/// Configured catalog file, else the embedded one, else an empty catalog.
fn load_catalog(settings: &Settings) -> Catalog {
    if let Some(path) = settings.catalog_path() {
        match Catalog::from_json_file(&path) {
            Ok(catalog) => {
                if catalog.is_empty() {
                    warn!(path = %path.display(), "Catalog file has no entries");
                } else {
                    info!(path = %path.display(), entries = catalog.len(), "Catalog loaded");
                }
                return catalog;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load catalog file, using built-in");
            }
        }
    }

    match Catalog::builtin() {
        Ok(catalog) => {
            info!(entries = catalog.len(), "Built-in catalog loaded");
            catalog
        }
        Err(e) => {
            error!(error = %e, "Built-in catalog is invalid");
            Catalog::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "{} starting", APP_NAME);

    let settings = Settings::load(&data_dir);
    let catalog = load_catalog(&settings);

    // Restore saved window position/size
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1280.0, 800.0)))
        .with_min_inner_size([960.0, 640.0])
        .with_title(APP_NAME);

    // Window/taskbar icon from the logo SVG
    if let Some((rgba, width, height)) = utils::rasterize_logo_square(64) {
        let icon = egui::IconData { rgba, width, height };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, catalog, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        self.render_nav_bar(ctx);

        // Filter sidebar (must be added BEFORE CentralPanel)
        if self.page == Page::Catalog && self.show_filters {
            self.render_filter_sidebar(ctx);
        }

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::symmetric(24, 0)),
            )
            .show(ctx, |ui| match self.page {
                Page::Home => self.render_home_page(ui),
                Page::Catalog => self.render_catalog_page(ui, ctx),
                Page::About => self.render_about_page(ui),
            });

        self.render_details_window(ctx);
        self.render_featured_details(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_builtin_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            catalog_path: Some(dir.path().join("missing.json").to_string_lossy().to_string()),
            ..Default::default()
        };
        assert_eq!(load_catalog(&settings).len(), 5);

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "[]").unwrap();
        let settings = Settings {
            catalog_path: Some(bad.to_string_lossy().to_string()),
            ..Default::default()
        };
        assert_eq!(load_catalog(&settings).len(), 5);
    }

    #[test]
    fn empty_catalog_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, r#"{"entries":[]}"#).unwrap();
        let settings = Settings {
            catalog_path: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        };
        assert!(load_catalog(&settings).is_empty());
    }

    #[test]
    fn prefers_configured_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"entries":[{"id":7,"title":"Quarterly Review","price":12.5,
            "thumbnail":"q.png","category":"Business","downloads":40,"rating":3.9}]}"#,
        )
        .unwrap();
        let settings = Settings {
            catalog_path: Some(path.to_string_lossy().to_string()),
            ..Default::default()
        };
        let catalog = load_catalog(&settings);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).map(|e| e.title.as_str()), Some("Quarterly Review"));
    }
}
