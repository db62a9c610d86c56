//! Swatch painting and conversions between kurbo and egui geometry.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};
use munsell_core::{Rgb, SwatchPlacement, hex_to_fraction, highlight_for};

use crate::sizing;

/// Convert fractional RGB to an opaque Color32.
pub fn rgb_to_color32(rgb: Rgb) -> Color32 {
    let [r, g, b] = rgb.to_rgb8();
    Color32::from_rgb(r, g, b)
}

/// Parse a `#RRGGBB` table entry. Invalid entries paint as mid gray.
pub fn hex_to_color32(hex: &str) -> Color32 {
    match hex_to_fraction(hex) {
        Ok(rgb) => rgb_to_color32(rgb),
        Err(e) => {
            log::warn!("{}", e);
            Color32::from_gray(128)
        }
    }
}

/// A kurbo rect in widget-local coordinates, moved to `origin` in screen space.
pub fn to_egui_rect(rect: kurbo::Rect, origin: Pos2) -> Rect {
    Rect::from_min_max(
        origin + Vec2::new(rect.x0 as f32, rect.y0 as f32),
        origin + Vec2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

/// A screen position relative to `origin`, as a kurbo point.
pub fn to_kurbo_point(pos: Pos2, origin: Pos2) -> kurbo::Point {
    let local = pos - origin;
    kurbo::Point::new(local.x as f64, local.y as f64)
}

/// Paint one swatch, with an outline when hovered.
pub fn paint_swatch(painter: &Painter, rect: Rect, hex: &str, hovered: bool) {
    let rgb = hex_to_fraction(hex).unwrap_or(Rgb::new(0.5, 0.5, 0.5));
    painter.rect_filled(rect, CornerRadius::ZERO, rgb_to_color32(rgb));

    if hovered {
        painter.rect_stroke(
            rect,
            CornerRadius::ZERO,
            Stroke::new(sizing::HIGHLIGHT_WIDTH, rgb_to_color32(highlight_for(rgb))),
            StrokeKind::Inside,
        );
    }
}

/// Paint every placement, highlighting `hovered`.
pub(crate) fn paint_placements(
    painter: &Painter,
    origin: Pos2,
    placements: &[SwatchPlacement],
    hovered: Option<usize>,
) {
    for placement in placements {
        let rect = to_egui_rect(placement.rect(), origin);
        paint_swatch(painter, rect, placement.hex, hovered == Some(placement.index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#A0FFA0"), Color32::from_rgb(0xA0, 0xFF, 0xA0));
        assert_eq!(hex_to_color32("nope"), Color32::from_gray(128));
    }

    #[test]
    fn test_rect_conversion() {
        let rect = kurbo::Rect::new(10.0, 20.0, 30.0, 40.0);
        let egui_rect = to_egui_rect(rect, Pos2::new(100.0, 200.0));
        assert_eq!(egui_rect.min, Pos2::new(110.0, 220.0));
        assert_eq!(egui_rect.max, Pos2::new(130.0, 240.0));
    }

    #[test]
    fn test_point_conversion() {
        let point = to_kurbo_point(Pos2::new(105.0, 207.5), Pos2::new(100.0, 200.0));
        assert_eq!(point, kurbo::Point::new(5.0, 7.5));
    }
}
