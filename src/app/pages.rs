//! Navigation bar and the static home / about pages

use super::App;
use crate::content::{self, FeaturedId, Highlight};
use crate::theme;
use crate::types::Page;
use crate::ui::components::highlight_card;
use crate::utils::{self, format_price};
use eframe::egui;

impl App {
    pub(crate) fn render_nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar")
            .exact_height(theme::NAV_HEIGHT)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(16, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    let texture = self.logo_texture.get_or_insert_with(|| {
                        let (pixels, w, h) =
                            utils::rasterize_logo(96).unwrap_or((vec![0; 4], 1, 1));
                        ctx.load_texture(
                            "logo",
                            egui::ColorImage::from_rgba_unmultiplied(
                                [w as usize, h as usize],
                                &pixels,
                            ),
                            egui::TextureOptions::LINEAR,
                        )
                    });
                    let aspect = texture.size()[1] as f32 / texture.size()[0] as f32;
                    let logo_w = 36.0;
                    ui.image(egui::load::SizedTexture::new(
                        texture.id(),
                        egui::vec2(logo_w, logo_w * aspect),
                    ));
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("DECK CATALOG")
                                .size(theme::FONT_LABEL)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // right_to_left lays out in reverse
                        for page in Page::ALL.iter().rev() {
                            let selected = self.page == *page;
                            let text = format!("{}  {}", page.icon(), page.label());
                            if theme::toggle_chip(ui, &text, selected).clicked() {
                                self.navigate(*page);
                            }
                        }
                    });
                });
            });
    }

    fn page_header(ui: &mut egui::Ui, title: &str, subtitle: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_SECTION);
            ui.label(
                egui::RichText::new(title)
                    .size(theme::FONT_HERO)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(theme::SPACING_MD);
            ui.label(
                egui::RichText::new(subtitle)
                    .size(theme::FONT_HEADING)
                    .color(theme::ACCENT_LIGHT),
            );
            ui.add_space(theme::SPACING_SECTION);
        });
    }

    fn section_title(ui: &mut egui::Ui, title: &str) {
        ui.add_space(theme::SPACING_SECTION);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(theme::FONT_TITLE)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
        });
        ui.add_space(theme::SPACING_XL);
    }

    fn highlight_row(ui: &mut egui::Ui, items: &[Highlight]) {
        ui.columns(items.len(), |cols| {
            for (col, item) in cols.iter_mut().zip(items) {
                let (icon, color) = theme::feature_icon(item.icon);
                highlight_card(col, icon, color, item.title, item.description);
            }
        });
    }

    /// Centered, width-capped column for page content
    fn content_column(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
        let width = ui.available_width().min(theme::CONTENT_MAX_WIDTH);
        let margin = ((ui.available_width() - width) / 2.0).max(0.0);
        ui.horizontal(|ui| {
            ui.add_space(margin);
            ui.vertical(|ui| {
                ui.set_width(width);
                add_contents(ui);
            });
        });
    }

    pub(crate) fn render_home_page(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("home_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::content_column(ui, |ui| {
                    Self::page_header(ui, content::HERO_TITLE, content::HERO_SUBTITLE);

                    // Featured search
                    ui.vertical_centered(|ui| {
                        egui::Frame::new()
                            .fill(theme::BG_INPUT)
                            .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT))
                            .corner_radius(theme::RADIUS_LARGE)
                            .inner_margin(egui::Margin::symmetric(12, 8))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        egui::RichText::new(
                                            egui_phosphor::regular::MAGNIFYING_GLASS,
                                        )
                                        .color(theme::ACCENT_LIGHT),
                                    );
                                    ui.add(
                                        egui::TextEdit::singleline(&mut self.home_search)
                                            .hint_text("Search by title or category")
                                            .frame(false)
                                            .desired_width(420.0),
                                    );
                                });
                            });
                    });

                    Self::section_title(ui, "Why Professionals Choose Us");
                    Self::highlight_row(ui, content::HOME_FEATURES);

                    Self::section_title(ui, "Featured Presentations");
                    self.render_featured(ui);

                    Self::section_title(ui, "Why Choose Our Templates?");
                    Self::highlight_row(ui, content::SELLING_POINTS);

                    Self::section_title(ui, "What Our Clients Say");
                    ui.columns(content::TESTIMONIALS.len(), |cols| {
                        for (col, t) in cols.iter_mut().zip(content::TESTIMONIALS) {
                            theme::card_frame().show(col, |ui| {
                                ui.set_min_height(140.0);
                                ui.label(
                                    egui::RichText::new(egui_phosphor::regular::QUOTES)
                                        .size(22.0)
                                        .color(theme::ACCENT),
                                );
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(t.quote)
                                            .italics()
                                            .color(theme::TEXT_SECONDARY),
                                    )
                                    .wrap(),
                                );
                                ui.add_space(theme::SPACING_MD);
                                ui.label(egui::RichText::new(t.name).strong());
                                ui.label(
                                    egui::RichText::new(t.role)
                                        .size(theme::FONT_SMALL)
                                        .color(theme::TEXT_MUTED),
                                );
                            });
                        }
                    });

                    Self::section_title(ui, "Resources & Support");
                    Self::highlight_row(ui, content::RESOURCES);

                    // Call to action
                    ui.add_space(theme::SPACING_SECTION);
                    egui::Frame::new()
                        .fill(theme::ACCENT_DARK)
                        .corner_radius(theme::RADIUS_XL)
                        .inner_margin(egui::Margin::same(32))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new(content::CTA_TITLE)
                                        .size(theme::FONT_TITLE)
                                        .strong()
                                        .color(theme::TEXT_PRIMARY),
                                );
                                ui.add_space(theme::SPACING_MD);
                                ui.label(
                                    egui::RichText::new(content::CTA_BODY)
                                        .color(theme::TEXT_SECONDARY),
                                );
                                ui.add_space(theme::SPACING_LG);
                                if ui
                                    .add(theme::button_accent(format!(
                                        "{}  Explore Templates",
                                        egui_phosphor::regular::ARROW_RIGHT
                                    )))
                                    .clicked()
                                {
                                    self.navigate(Page::Catalog);
                                }
                            });
                        });
                    ui.add_space(theme::SPACING_SECTION);
                });
            });
    }

    fn render_featured(&mut self, ui: &mut egui::Ui) {
        let featured = content::filter_featured(content::FEATURED, &self.home_search);
        if featured.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("No presentations found matching your search")
                        .size(theme::FONT_HEADING)
                        .color(theme::TEXT_MUTED),
                );
            });
            return;
        }

        let mut quick_view: Option<FeaturedId> = None;
        ui.columns(featured.len(), |cols| {
            for (col, item) in cols.iter_mut().zip(&featured) {
                theme::card_frame().show(col, |ui| {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), 140.0),
                        egui::Sense::click(),
                    );
                    let texture = self.load_thumbnail(ui.ctx(), item.thumbnail);
                    match texture {
                        Some(tex) => {
                            ui.painter().image(
                                tex.id(),
                                rect,
                                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                                egui::Color32::WHITE,
                            );
                        }
                        None => {
                            ui.painter().rect_filled(rect, theme::RADIUS_LARGE, theme::BG_SURFACE);
                            ui.painter().text(
                                rect.center(),
                                egui::Align2::CENTER_CENTER,
                                egui_phosphor::regular::PRESENTATION,
                                egui::FontId::proportional(40.0),
                                theme::TEXT_DIM,
                            );
                        }
                    }
                    if response.hovered() {
                        ui.painter().rect_filled(
                            rect,
                            theme::RADIUS_LARGE,
                            egui::Color32::from_black_alpha(140),
                        );
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            format!("{}  Quick View", egui_phosphor::regular::EYE),
                            egui::FontId::proportional(theme::FONT_BODY),
                            theme::TEXT_PRIMARY,
                        );
                    }
                    if response.clicked() {
                        quick_view = Some(item.id);
                    }

                    ui.add_space(theme::SPACING_MD);
                    ui.label(
                        egui::RichText::new(item.title)
                            .size(theme::FONT_HEADING)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(item.category)
                            .size(theme::FONT_SMALL)
                            .color(theme::ACCENT_LIGHT),
                    );
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(item.description).color(theme::TEXT_MUTED),
                        )
                        .wrap(),
                    );
                    ui.label(
                        egui::RichText::new(format_price(item.price))
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                });
            }
        });

        if quick_view.is_some() {
            self.featured_details = quick_view;
        }
    }

    pub(crate) fn render_about_page(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("about_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::content_column(ui, |ui| {
                    Self::page_header(ui, content::ABOUT_TITLE, content::ABOUT_SUBTITLE);

                    ui.columns(content::ABOUT_SECTIONS.len(), |cols| {
                        for (col, section) in cols.iter_mut().zip(content::ABOUT_SECTIONS) {
                            let (icon, color) = theme::feature_icon(section.icon);
                            theme::card_frame().show(col, |ui| {
                                ui.set_min_height(170.0);
                                ui.horizontal(|ui| {
                                    ui.label(egui::RichText::new(icon).size(40.0).color(color));
                                    ui.label(
                                        egui::RichText::new(section.title)
                                            .size(theme::FONT_TITLE)
                                            .strong()
                                            .color(theme::TEXT_PRIMARY),
                                    );
                                });
                                ui.add_space(theme::SPACING_MD);
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(section.description)
                                            .size(theme::FONT_BODY)
                                            .color(theme::TEXT_SECONDARY),
                                    )
                                    .wrap(),
                                );
                            });
                        }
                    });

                    Self::section_title(ui, "Why Choose Us?");
                    Self::highlight_row(ui, content::WHY_CHOOSE_US);
                    ui.add_space(theme::SPACING_SECTION);
                });
            });
    }
}
