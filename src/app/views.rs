//! Catalog page rendering (filter sidebar, result grid and list)

use super::App;
use crate::catalog::{CatalogAction, Category, EntryId, SortDirection, SortKey, PRICE_CEILING, RATING_CEILING};
use crate::constants::{MAX_DOWNLOADS_INPUT, RATING_STEP};
use crate::content;
use crate::theme;
use crate::types::{EntrySelectionHandler, ResultsLayout};
use crate::ui::components::{category_badge, format_rating, render_stars};
use crate::utils::{format_count, format_price};
use eframe::egui;

impl App {
    /// Left sidebar with every filter control. Must be shown before the
    /// central panel.
    pub(crate) fn render_filter_sidebar(&mut self, ctx: &egui::Context) {
        let mut actions: Vec<CatalogAction> = Vec::new();
        let criteria = self.catalog_state.criteria.clone();
        let sort = self.catalog_state.sort;

        egui::SidePanel::left("filter_panel")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin { left: 16, right: 8, top: 16, bottom: 16 }),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("filter_scroll")
                    .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{}  Filters",
                                    egui_phosphor::regular::FUNNEL
                                ))
                                .size(theme::FONT_TITLE)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                            );
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui
                                    .add(egui::Button::new(egui_phosphor::regular::X).frame(false))
                                    .on_hover_text("Hide filters")
                                    .clicked()
                                {
                                    self.show_filters = false;
                                }
                            });
                        });
                        ui.add_space(theme::SPACING_LG);

                        // CATEGORY section
                        Self::filter_section(ui, "CATEGORIES", |ui| {
                            ui.horizontal_wrapped(|ui| {
                                if theme::toggle_chip(ui, "All", criteria.category.is_none()).clicked() {
                                    actions.push(CatalogAction::SelectCategory(None));
                                }
                                for category in Category::ALL {
                                    let selected = criteria.category == Some(category);
                                    if theme::toggle_chip(ui, category.label(), selected).clicked() {
                                        actions.push(CatalogAction::SelectCategory(Some(category)));
                                    }
                                }
                            });
                        });

                        // PRICE section
                        Self::filter_section(ui, "PRICE RANGE", |ui| {
                            let mut max_price = criteria.price_range.1;
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new("$0").color(theme::TEXT_MUTED));
                                let response = ui.add(
                                    egui::Slider::new(&mut max_price, 0.0..=PRICE_CEILING)
                                        .step_by(1.0)
                                        .show_value(false),
                                );
                                ui.label(
                                    egui::RichText::new(format_price(max_price))
                                        .color(theme::TEXT_PRIMARY),
                                );
                                if response.changed() {
                                    actions.push(CatalogAction::SetMaxPrice(max_price));
                                }
                            });
                        });

                        // DOWNLOADS section
                        Self::filter_section(ui, "MINIMUM DOWNLOADS", |ui| {
                            let mut min_downloads = criteria.min_downloads;
                            let response = ui.add(
                                egui::DragValue::new(&mut min_downloads)
                                    .range(0..=MAX_DOWNLOADS_INPUT)
                                    .speed(10.0),
                            );
                            if response.changed() {
                                actions.push(CatalogAction::SetMinDownloads(min_downloads));
                            }
                        });

                        // RATING section
                        Self::filter_section(ui, "MINIMUM RATING", |ui| {
                            let mut min_rating = criteria.min_rating;
                            ui.horizontal(|ui| {
                                let response = ui.add(
                                    egui::Slider::new(&mut min_rating, 0.0..=RATING_CEILING)
                                        .step_by(RATING_STEP)
                                        .max_decimals(1)
                                        .show_value(false),
                                );
                                ui.label(
                                    egui::RichText::new(format_rating(min_rating))
                                        .color(theme::TEXT_PRIMARY),
                                );
                                if response.changed() {
                                    actions.push(CatalogAction::SetMinRating(min_rating));
                                }
                            });
                        });

                        // SORT section
                        Self::filter_section(ui, "SORT BY", |ui| {
                            let mut key = sort.key;
                            egui::ComboBox::from_id_salt("sort_key")
                                .selected_text(key.label())
                                .width(ui.available_width())
                                .show_ui(ui, |ui| {
                                    for option in SortKey::ALL {
                                        ui.selectable_value(&mut key, option, option.label());
                                    }
                                });
                            if key != sort.key {
                                actions.push(CatalogAction::SetSortKey(key));
                            }

                            ui.add_space(theme::SPACING_SM);
                            let label = match sort.direction {
                                SortDirection::Descending => "Descending ▼",
                                SortDirection::Ascending => "Ascending ▲",
                            };
                            if ui
                                .add_sized([ui.available_width(), 26.0], theme::button(label))
                                .clicked()
                            {
                                actions.push(CatalogAction::ToggleSortDirection);
                            }
                        });

                        ui.add_space(theme::SPACING_MD);
                        let reset = ui.add_enabled(
                            !self.catalog_state.is_default(),
                            theme::button_danger(format!(
                                "{}  Reset All Filters",
                                egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                            ))
                            .min_size(egui::vec2(ui.available_width(), 32.0)),
                        );
                        if reset.clicked() {
                            actions.push(CatalogAction::Reset);
                        }
                    });
            });

        for action in actions {
            self.dispatch(action);
        }
    }

    fn filter_section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
        theme::section_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.add(
                egui::Label::new(
                    egui::RichText::new(title)
                        .color(theme::TEXT_DIM)
                        .size(theme::FONT_SMALL),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_MD);
            add_contents(ui);
        });
        ui.add_space(theme::SPACING_MD);
    }

    pub(crate) fn render_catalog_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.add_space(theme::SPACING_XL);
            ui.label(
                egui::RichText::new(content::CATALOG_TITLE)
                    .size(theme::FONT_HERO)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(content::CATALOG_SUBTITLE)
                    .size(theme::FONT_BODY)
                    .color(theme::ACCENT_LIGHT),
            );
            ui.add_space(theme::SPACING_XL);
        });

        // Search box
        let mut search = self.catalog_state.criteria.search_term.clone();
        egui::Frame::new()
            .fill(theme::BG_INPUT)
            .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_DEFAULT))
            .corner_radius(theme::RADIUS_LARGE)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::MAGNIFYING_GLASS)
                            .size(theme::FONT_HEADING)
                            .color(theme::ACCENT_LIGHT),
                    );
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut search)
                            .hint_text("Search presentations...")
                            .frame(false)
                            .desired_width(ui.available_width() - 24.0),
                    );
                    if !search.is_empty()
                        && ui
                            .add(egui::Button::new(egui_phosphor::regular::X).frame(false))
                            .clicked()
                    {
                        search.clear();
                        self.dispatch(CatalogAction::SetSearchTerm(String::new()));
                    } else if response.changed() {
                        self.dispatch(CatalogAction::SetSearchTerm(search.clone()));
                    }
                });
            });
        ui.add_space(theme::SPACING_LG);

        // Toolbar: result count and layout toggles
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("{} presentations found", self.visible_ids.len()))
                    .size(theme::FONT_LABEL)
                    .color(theme::ACCENT_LIGHT),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut grid = self.results_layout == ResultsLayout::Grid;
                if theme::segmented_toggle(ui, "Grid", "List", &mut grid) {
                    self.results_layout = if grid {
                        ResultsLayout::Grid
                    } else {
                        ResultsLayout::List
                    };
                }
                if grid {
                    let icon = if self.large_cards {
                        egui_phosphor::regular::SQUARES_FOUR
                    } else {
                        egui_phosphor::regular::DOTS_NINE
                    };
                    if ui
                        .add(theme::button(icon))
                        .on_hover_text("Card size")
                        .clicked()
                    {
                        self.large_cards = !self.large_cards;
                    }
                }
                if !self.show_filters
                    && ui
                        .add(theme::button(format!(
                            "{}  Filters",
                            egui_phosphor::regular::SLIDERS_HORIZONTAL
                        )))
                        .clicked()
                {
                    self.show_filters = true;
                }
            });
        });
        ui.add_space(theme::SPACING_MD);

        if self.visible_ids.is_empty() {
            theme::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.add_space(theme::SPACING_XL);
                    ui.label(
                        egui::RichText::new("No presentations found")
                            .size(theme::FONT_TITLE)
                            .color(theme::TEXT_MUTED),
                    );
                    ui.add_space(theme::SPACING_XL);
                });
            });
            return;
        }

        match self.results_layout {
            ResultsLayout::Grid => self.render_grid_view(ui, ctx),
            ResultsLayout::List => self.render_list_view(ui),
        }
    }

    /// Thumbnail clipped to rounded corners, or a category-coloured placeholder
    pub(crate) fn paint_thumbnail(
        &self,
        ui: &egui::Ui,
        rect: egui::Rect,
        texture: Option<&egui::TextureHandle>,
        category: Category,
    ) {
        let painter = ui.painter();
        match texture {
            Some(tex) => {
                let brush = egui::epaint::Brush {
                    fill_texture_id: tex.id(),
                    uv: egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                };
                let mut shape = egui::epaint::RectShape::filled(
                    rect,
                    egui::CornerRadius::same(theme::RADIUS_LARGE as u8),
                    egui::Color32::WHITE,
                );
                shape.brush = Some(std::sync::Arc::new(brush));
                painter.add(shape);
            }
            None => {
                let (bg, fg) = theme::category_colors(category);
                painter.rect_filled(rect, theme::RADIUS_LARGE, bg);
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    egui_phosphor::regular::PRESENTATION,
                    egui::FontId::proportional(rect.height() * 0.35),
                    fg,
                );
            }
        }
    }

    fn render_grid_view(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let spacing = theme::SPACING_XL;
        let (base_w, base_h) = if self.large_cards {
            theme::CARD_LARGE
        } else {
            theme::CARD_SMALL
        };
        let available = ui.available_width();
        let num_cols = ((available + spacing) / (base_w + spacing)).floor().max(1.0);
        let card_w = ((available - spacing * (num_cols - 1.0)) / num_cols).floor();
        let card_h = (base_h * (card_w / base_w)).floor().max(base_h);
        let thumb_h = (card_h * 0.55).floor();

        let mut selected: Option<EntryId> = None;

        egui::ScrollArea::vertical()
            .id_salt("grid_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(spacing, spacing);
                    let ids = self.visible_ids.clone();
                    for id in ids {
                        let Some(entry) = self.catalog.get(id).cloned() else {
                            continue;
                        };

                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(card_w, card_h), egui::Sense::click());

                        if ui.is_rect_visible(rect) {
                            let texture = self.load_thumbnail(ctx, &entry.thumbnail);
                            let painter = ui.painter();

                            painter.rect_filled(rect, theme::RADIUS_XL, theme::BG_ELEVATED);

                            let inner = rect.shrink(theme::SPACING_MD);
                            let thumb_rect =
                                egui::Rect::from_min_size(inner.min, egui::vec2(inner.width(), thumb_h));
                            self.paint_thumbnail(ui, thumb_rect, texture.as_ref(), entry.category);

                            let painter = ui.painter();
                            if response.hovered() {
                                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                                painter.rect_filled(
                                    thumb_rect,
                                    theme::RADIUS_LARGE,
                                    egui::Color32::from_black_alpha(120),
                                );
                                painter.text(
                                    thumb_rect.center(),
                                    egui::Align2::CENTER_CENTER,
                                    format!("{}  View details", egui_phosphor::regular::EYE),
                                    egui::FontId::proportional(theme::FONT_LABEL),
                                    theme::TEXT_PRIMARY,
                                );
                            }

                            let border = if response.hovered() {
                                egui::Stroke::new(theme::STROKE_MEDIUM, theme::ACCENT)
                            } else {
                                egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE)
                            };
                            painter.rect_stroke(
                                rect,
                                theme::RADIUS_XL,
                                border,
                                egui::StrokeKind::Inside,
                            );

                            // Title + category
                            let mut y = thumb_rect.max.y + theme::SPACING_MD;
                            painter.text(
                                egui::pos2(inner.min.x, y),
                                egui::Align2::LEFT_TOP,
                                &entry.title,
                                egui::FontId::proportional(theme::FONT_BODY),
                                theme::TEXT_PRIMARY,
                            );
                            y += 20.0;
                            let (_, cat_color) = theme::category_colors(entry.category);
                            painter.text(
                                egui::pos2(inner.min.x, y),
                                egui::Align2::LEFT_TOP,
                                entry.category.label(),
                                egui::FontId::proportional(theme::FONT_SMALL),
                                cat_color,
                            );

                            // Rating + downloads (bottom left), price (bottom right)
                            painter.text(
                                inner.left_bottom(),
                                egui::Align2::LEFT_BOTTOM,
                                format!(
                                    "{} {}   {} {}",
                                    render_stars(entry.rating),
                                    format_rating(entry.rating),
                                    egui_phosphor::regular::DOWNLOAD_SIMPLE,
                                    format_count(entry.downloads)
                                ),
                                egui::FontId::proportional(theme::FONT_SMALL),
                                theme::STAR_FILLED,
                            );
                            painter.text(
                                inner.right_bottom(),
                                egui::Align2::RIGHT_BOTTOM,
                                format_price(entry.price),
                                egui::FontId::proportional(theme::FONT_HEADING),
                                theme::ACCENT_LIGHT,
                            );
                        }

                        if response.clicked() {
                            selected = Some(entry.id);
                        }
                    }
                });
            });

        if let Some(id) = selected {
            self.entry_selected(id);
        }
    }

    fn render_list_view(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let mut selected: Option<EntryId> = None;
        let rows: Vec<_> = self.visible_entries().cloned().collect();

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(220.0))
            .column(Column::exact(120.0))
            .column(Column::exact(80.0))
            .column(Column::exact(100.0))
            .column(Column::exact(140.0))
            .header(32.0, |mut header| {
                for title in ["TITLE", "CATEGORY", "PRICE", "DOWNLOADS", "RATING"] {
                    header.col(|ui| {
                        ui.label(
                            egui::RichText::new(title)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        );
                    });
                }
            })
            .body(|body| {
                body.rows(34.0, rows.len(), |mut row| {
                    let entry = &rows[row.index()];
                    row.col(|ui| {
                        if ui
                            .link(egui::RichText::new(&entry.title).color(theme::TEXT_PRIMARY))
                            .clicked()
                        {
                            selected = Some(entry.id);
                        }
                    });
                    row.col(|ui| {
                        category_badge(ui, entry.category);
                    });
                    row.col(|ui| {
                        ui.label(format_price(entry.price));
                    });
                    row.col(|ui| {
                        ui.label(format_count(entry.downloads));
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                render_stars(entry.rating),
                                format_rating(entry.rating)
                            ))
                            .color(theme::STAR_FILLED),
                        );
                    });
                });
            });

        if let Some(id) = selected {
            self.entry_selected(id);
        }
    }
}
