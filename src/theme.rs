//! Centralized theme constants for Deck Catalog
//! All colors, sizes, and styling should reference these constants

use crate::catalog::Category;
use crate::content::FeatureIcon;
use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0b, 0x12, 0x20); // navy-950
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x11, 0x1a, 0x2e); // navy-900
pub const BG_INPUT: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // input field background
pub const BG_SURFACE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BG_HOVER: Color32 = Color32::from_rgb(0x17, 0x25, 0x54); // subtle blue hover

// =============================================================================
// COLORS - Accent (Blue)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6); // blue-500
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0x93, 0xc5, 0xfd); // blue-300
pub const ACCENT_DARK: Color32 = Color32::from_rgb(0x1e, 0x3a, 0x8a); // blue-900

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700

// =============================================================================
// COLORS - Stars
// =============================================================================
pub const STAR_FILLED: Color32 = Color32::from_rgb(0xfb, 0xbf, 0x24); // amber-400

// =============================================================================
// COLORS - Filter/Toggle Selection
// =============================================================================
pub const TOGGLE_SELECTED: Color32 = Color32::from_rgb(0x1d, 0x4e, 0xd8); // blue-700
pub const TOGGLE_UNSELECTED: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xeb); // blue-600
pub const BTN_DANGER: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26); // red-600

// =============================================================================
// COLORS - Categories
// =============================================================================
/// Returns (bg_color ~6% alpha, text_color)
pub fn category_colors(category: Category) -> (Color32, Color32) {
    let (r, g, b) = match category {
        Category::Marketing => (0x60, 0xa5, 0xfa),
        Category::Business => (0x34, 0xd3, 0x99),
        Category::Technology => (0xa7, 0x8b, 0xfa),
        Category::Education => (0xfb, 0x92, 0x3c),
    };
    (
        Color32::from_rgba_unmultiplied(r, g, b, 16),
        Color32::from_rgb(r, g, b),
    )
}

// =============================================================================
// ICONS - Highlight cards
// =============================================================================
pub fn feature_icon(icon: FeatureIcon) -> (&'static str, Color32) {
    use egui_phosphor::regular as ph;
    match icon {
        FeatureIcon::Star => (ph::STAR, Color32::from_rgb(0x60, 0xa5, 0xfa)),
        FeatureIcon::Check => (ph::CHECK, Color32::from_rgb(0x4a, 0xde, 0x80)),
        FeatureIcon::Lightbulb => (ph::LIGHTBULB, Color32::from_rgb(0xc0, 0x84, 0xfc)),
        FeatureIcon::Grid => (ph::SQUARES_FOUR, ACCENT_LIGHT),
        FeatureIcon::Lightning => (ph::LIGHTNING, ACCENT_LIGHT),
        FeatureIcon::Code => (ph::CODE, ACCENT_LIGHT),
        FeatureIcon::BookOpen => (ph::BOOK_OPEN, ACCENT_LIGHT),
        FeatureIcon::Users => (ph::USERS, ACCENT_LIGHT),
        FeatureIcon::Award => (ph::MEDAL, ACCENT_LIGHT),
        FeatureIcon::Target => (ph::TARGET, ACCENT),
        FeatureIcon::Rocket => (ph::ROCKET, ACCENT),
        FeatureIcon::CheckCircle => (ph::CHECK_CIRCLE, ACCENT_LIGHT),
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HERO: f32 = 34.0;
pub const FONT_TITLE: f32 = 22.0;
pub const FONT_HEADING: f32 = 16.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const NAV_HEIGHT: f32 = 52.0;
pub const CARD_SMALL: (f32, f32) = (200.0, 150.0);
pub const CARD_LARGE: (f32, f32) = (280.0, 210.0);
pub const CONTENT_MAX_WIDTH: f32 = 1100.0;

// =============================================================================
// CORNER RADIUS / STROKES / SPACING
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_LARGE: f32 = 8.0;
pub const RADIUS_XL: f32 = 14.0;

pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;
pub const SPACING_SECTION: f32 = 40.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    let widget = |bg_fill: Color32,
                  weak_bg_fill: Color32,
                  bg_stroke: egui::Stroke,
                  fg: Color32,
                  expansion: f32| {
        egui::style::WidgetVisuals {
            bg_fill,
            weak_bg_fill,
            bg_stroke,
            fg_stroke: egui::Stroke::new(STROKE_DEFAULT, fg),
            corner_radius: RADIUS_DEFAULT.into(),
            expansion,
        }
    };
    let subtle = egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE);

    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_INPUT,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT_LIGHT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_DARK,
            stroke: egui::Stroke::new(STROKE_DEFAULT, ACCENT_LIGHT),
        },
        widgets: egui::style::Widgets {
            noninteractive: widget(BG_ELEVATED, BG_SURFACE, subtle, TEXT_PRIMARY, 0.0),
            inactive: widget(BG_SURFACE, BG_SURFACE, subtle, TEXT_SECONDARY, 0.0),
            hovered: widget(BG_HOVER, BG_HOVER, egui::Stroke::NONE, TEXT_PRIMARY, 0.0),
            active: widget(TOGGLE_SELECTED, TOGGLE_SELECTED, egui::Stroke::NONE, TEXT_PRIMARY, -1.0),
            open: widget(BG_SURFACE, BG_ELEVATED, subtle, TEXT_PRIMARY, 0.0),
        },
        striped: false,
        slider_trailing_fill: true,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
        window_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        menu_corner_radius: egui::CornerRadius::same(RADIUS_LARGE as u8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.slider_width = 170.0;
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_XL)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Section panel frame used by the filter sidebar
pub fn section_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_INPUT)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::same(12))
}

pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_ELEVATED)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT))
        .corner_radius(RADIUS_LARGE)
        .inner_margin(SPACING_XL)
}

// =============================================================================
// HELPER - Button styles
// =============================================================================

/// Default gray button
pub fn button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(text.into())
        .fill(BTN_DEFAULT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Accent blue button (primary actions)
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Danger red button (Reset All Filters)
pub fn button_danger(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(TEXT_PRIMARY))
        .fill(BTN_DANGER)
        .corner_radius(RADIUS_DEFAULT)
}

/// Pill button for a filter choice; filled when selected
pub fn toggle_chip(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let fill = if selected { TOGGLE_SELECTED } else { TOGGLE_UNSELECTED };
    let color = if selected { TEXT_PRIMARY } else { TEXT_MUTED };
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(FONT_LABEL).color(color))
            .fill(fill)
            .corner_radius(RADIUS_LARGE),
    )
}

// =============================================================================
// HELPER - Segmented toggle (pill-style)
// =============================================================================

/// Two-option segmented toggle. Returns true if selection changed.
/// `left_active` indicates if the left option is currently selected.
pub fn segmented_toggle(
    ui: &mut egui::Ui,
    left_label: &str,
    right_label: &str,
    left_active: &mut bool,
) -> bool {
    let height = 26.0;
    let segment_width = 64.0;
    let rounding = 5.0;

    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(segment_width * 2.0, height), egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, rounding, TOGGLE_UNSELECTED);

    let left_rect =
        egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + segment_width, rect.max.y));
    let right_rect =
        egui::Rect::from_min_max(egui::pos2(rect.min.x + segment_width, rect.min.y), rect.max);
    let active_rect = if *left_active { left_rect } else { right_rect };
    painter.rect_filled(active_rect.shrink(2.0), rounding - 1.0, TOGGLE_SELECTED);

    let (left_color, right_color) = if *left_active {
        (TEXT_PRIMARY, TEXT_MUTED)
    } else {
        (TEXT_MUTED, TEXT_PRIMARY)
    };
    for (r, label, color) in [
        (left_rect, left_label, left_color),
        (right_rect, right_label, right_color),
    ] {
        painter.text(
            r.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(FONT_SMALL),
            color,
        );
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let clicked_left = pos.x < rect.min.x + segment_width;
            if clicked_left != *left_active {
                *left_active = clicked_left;
                return true;
            }
        }
    }
    false
}
