//! The outer hue wheel.

use egui::{CursorIcon, Sense, Ui, vec2};
use kurbo::Size;
use munsell_core::{MunsellPicker, hit_test};

use crate::sizing;
use crate::swatch::{paint_placements, to_kurbo_point};

/// One swatch per hue palette, laid out on a circle that fills the space.
pub struct ColorWheel<'a> {
    picker: &'a MunsellPicker,
    min_size: f32,
    side: Option<f32>,
}

impl<'a> ColorWheel<'a> {
    pub fn new(picker: &'a MunsellPicker) -> Self {
        Self {
            picker,
            min_size: sizing::WHEEL_MIN,
            side: None,
        }
    }

    /// Set the minimum side length.
    pub fn min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Use a fixed side length instead of filling the available space.
    pub fn side(mut self, side: f32) -> Self {
        self.side = Some(side);
        self
    }

    /// Show the wheel and return the wheel index that was clicked, if any.
    pub fn show(self, ui: &mut Ui) -> Option<usize> {
        let side = self
            .side
            .unwrap_or_else(|| ui.available_size().min_elem())
            .max(self.min_size);
        let side = if side.is_finite() { side } else { self.min_size };
        let (rect, response) = ui.allocate_exact_size(vec2(side, side), Sense::click());

        // Recomputed every frame from the allocated size.
        let placements = match self
            .picker
            .wheel_placements(Size::new(rect.width() as f64, rect.height() as f64))
        {
            Ok(placements) => placements,
            Err(e) => {
                log::error!("Wheel layout failed: {}", e);
                return None;
            }
        };

        let hovered = response
            .hover_pos()
            .and_then(|pos| hit_test(&placements, to_kurbo_point(pos, rect.min)));

        if ui.is_rect_visible(rect) {
            paint_placements(ui.painter(), rect.min, &placements, hovered);
        }

        let clicked = response.clicked();
        if let Some(index) = hovered {
            let entries = self.picker.palette_index().wheel_entries();
            if let Some(entry) = entries.get(index) {
                response
                    .on_hover_cursor(CursorIcon::PointingHand)
                    .on_hover_text(format!("{} ({})", entry.label, entry.description));
            }
        }

        if clicked { hovered } else { None }
    }
}
