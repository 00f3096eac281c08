//! Details windows for a selected catalog entry or featured presentation

use super::App;
use crate::catalog::EntryId;
use crate::content::FEATURED;
use crate::theme;
use crate::types::EntrySelectionHandler;
use crate::ui::components::{category_badge, format_rating, render_stars};
use crate::utils::{format_count, format_price};
use eframe::egui;
use tracing::{info, warn};

impl EntrySelectionHandler for App {
    fn entry_selected(&mut self, id: EntryId) {
        match self.catalog.get(id) {
            Some(entry) => {
                info!(id, title = %entry.title, "View details");
                self.details_entry = Some(id);
            }
            None => warn!(id, "Selected entry is not in the catalog"),
        }
    }
}

impl App {
    pub(crate) fn render_details_window(&mut self, ctx: &egui::Context) {
        let Some(id) = self.details_entry else {
            return;
        };
        let Some(entry) = self.catalog.get(id).cloned() else {
            self.details_entry = None;
            return;
        };

        let mut open = true;
        let mut close_clicked = false;
        egui::Window::new(entry.title.as_str())
            .id(egui::Id::new(("entry_details", id)))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(340.0);
                let texture = self.load_thumbnail(ctx, &entry.thumbnail);
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(340.0, 190.0), egui::Sense::hover());
                self.paint_thumbnail(ui, rect, texture.as_ref(), entry.category);

                ui.add_space(theme::SPACING_LG);
                category_badge(ui, entry.category);
                ui.add_space(theme::SPACING_MD);

                egui::Grid::new(("entry_details_grid", id))
                    .num_columns(2)
                    .spacing([theme::SPACING_XL, theme::SPACING_SM])
                    .show(ui, |ui| {
                        let row = |ui: &mut egui::Ui, label: &str, value: String| {
                            ui.label(egui::RichText::new(label).color(theme::TEXT_DIM));
                            ui.label(egui::RichText::new(value).color(theme::TEXT_SECONDARY));
                            ui.end_row();
                        };
                        row(ui, "Price", format_price(entry.price));
                        row(ui, "Downloads", format_count(entry.downloads));
                        row(
                            ui,
                            "Rating",
                            format!("{}  {}", render_stars(entry.rating), format_rating(entry.rating)),
                        );
                    });

                ui.add_space(theme::SPACING_LG);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme::button("Close")).clicked() {
                        close_clicked = true;
                    }
                });
            });

        if !open || close_clicked {
            self.details_entry = None;
        }
    }

    pub(crate) fn render_featured_details(&mut self, ctx: &egui::Context) {
        let Some(id) = self.featured_details else {
            return;
        };
        let Some(item) = FEATURED.iter().find(|p| p.id == id) else {
            self.featured_details = None;
            return;
        };

        let mut open = true;
        let mut browse = false;
        egui::Window::new(item.title)
            .id(egui::Id::new(("featured_details", id)))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(320.0);
                ui.label(
                    egui::RichText::new(item.category)
                        .size(theme::FONT_SMALL)
                        .color(theme::ACCENT_LIGHT),
                );
                ui.add_space(theme::SPACING_SM);
                ui.add(egui::Label::new(
                    egui::RichText::new(item.description).color(theme::TEXT_SECONDARY),
                ).wrap());
                ui.add_space(theme::SPACING_MD);
                ui.label(
                    egui::RichText::new(format_price(item.price))
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.add_space(theme::SPACING_LG);
                if ui
                    .add(theme::button_accent(format!(
                        "{}  Explore Templates",
                        egui_phosphor::regular::ARROW_RIGHT
                    )))
                    .clicked()
                {
                    browse = true;
                }
            });

        if browse {
            self.featured_details = None;
            self.navigate(crate::types::Page::Catalog);
        } else if !open {
            self.featured_details = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::settings::Settings;

    #[test]
    fn selecting_an_entry_opens_its_details() {
        let mut app = App::with_catalog(
            Catalog::builtin().unwrap(),
            Settings::default(),
            std::env::temp_dir(),
        );
        app.entry_selected(3);
        assert_eq!(app.details_entry, Some(3));

        app.entry_selected(99);
        assert_eq!(app.details_entry, Some(3));
    }
}
