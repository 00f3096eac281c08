//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::catalog::Category;
use crate::theme;
use eframe::egui;

/// Five-star strip for a rating in 0..=5, rounded to the nearest star
pub fn render_stars(rating: f64) -> String {
    let filled = rating.clamp(0.0, 5.0).round() as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// Rating with one decimal, e.g. "4.7"
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// Small rounded badge with the category colour
pub fn category_badge(ui: &mut egui::Ui, category: Category) -> egui::Response {
    let (bg, fg) = theme::category_colors(category);
    egui::Frame::new()
        .fill(bg)
        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, fg.gamma_multiply(0.4)))
        .corner_radius(theme::RADIUS_LARGE)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(category.label())
                        .size(theme::FONT_SMALL)
                        .color(fg),
                )
                .selectable(false),
            );
        })
        .response
}

/// Round icon bubble followed by a title and description, used by the
/// highlight rows on the home and about pages
pub fn highlight_card(
    ui: &mut egui::Ui,
    icon: &str,
    icon_color: egui::Color32,
    title: &str,
    description: &str,
) {
    theme::card_frame().show(ui, |ui| {
        ui.set_min_height(150.0);
        ui.vertical_centered(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(56.0, 56.0), egui::Sense::hover());
            ui.painter()
                .circle_filled(rect.center(), 28.0, icon_color.gamma_multiply(0.15));
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                icon,
                egui::FontId::proportional(28.0),
                icon_color,
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(title)
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(description)
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .wrap(),
            );
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_round_to_nearest() {
        assert_eq!(render_stars(4.7), "★★★★★");
        assert_eq!(render_stars(4.4), "★★★★☆");
        assert_eq!(render_stars(0.0), "☆☆☆☆☆");
        assert_eq!(render_stars(9.0), "★★★★★");
    }

    #[test]
    fn rating_has_one_decimal() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(4.76), "4.8");
    }
}
