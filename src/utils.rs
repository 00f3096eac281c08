//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Slide on an easel, used for the header logo
pub const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 240 200"><defs><style>.b{fill:#fff;stroke:#0b1220;stroke-width:2px}.a{fill:#3b82f6;stroke:#0b1220;stroke-width:2px}.l{fill:none;stroke:#fff;stroke-width:10px;stroke-linecap:round}</style></defs><rect class="b" x="10" y="10" width="220" height="130" rx="14"/><rect class="a" x="40" y="80" width="30" height="40" rx="4"/><rect class="a" x="90" y="55" width="30" height="65" rx="4"/><rect class="a" x="140" y="35" width="30" height="85" rx="4"/><path class="l" d="M120 140v30M120 170l-40 22M120 170l40 22"/></svg>"#;

// Square viewBox, no stroke, for window/taskbar icons
pub const ICON_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 240 240"><defs><style>.b{fill:#fff}.a{fill:#3b82f6}.l{fill:none;stroke:#fff;stroke-width:10px;stroke-linecap:round}</style></defs><g transform="translate(0,20)"><rect class="b" x="10" y="10" width="220" height="130" rx="14"/><rect class="a" x="40" y="80" width="30" height="40" rx="4"/><rect class="a" x="90" y="55" width="30" height="65" rx="4"/><rect class="a" x="140" y="35" width="30" height="85" rx="4"/><path class="l" d="M120 140v30M120 170l-40 22M120 170l40 22"/></g></svg>"#;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), width, height))
}

/// Rasterize the icon SVG to a square image (for window/taskbar icons).
pub fn rasterize_logo_square(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Format a count with thousands separators (1240 -> "1,240")
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a price, dropping the cents when there are none
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${:.0}", price)
    } else {
        format!("${:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(650), "650");
        assert_eq!(format_count(1240), "1,240");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }

    #[test]
    fn prices_drop_empty_cents() {
        assert_eq!(format_price(20.0), "$20");
        assert_eq!(format_price(12.5), "$12.50");
    }

    #[test]
    fn logo_rasterizes_at_requested_width() {
        let (pixels, w, h) = rasterize_logo(120).unwrap();
        assert_eq!(w, 120);
        assert_eq!(h, 100);
        assert_eq!(pixels.len(), (w * h * 4) as usize);

        let (pixels, w, h) = rasterize_logo_square(64).unwrap();
        assert_eq!((w, h), (64, 64));
        assert_eq!(pixels.len(), 64 * 64 * 4);
    }
}
