//! The value/chroma grid of the active palette.

use egui::{CursorIcon, Sense, Ui, vec2};
use munsell_core::{MunsellPicker, hit_test};

use crate::sizing;
use crate::swatch::{paint_placements, to_kurbo_point};

/// Fixed-size cells, row-major; rows run from light to dark.
pub struct HueGrid<'a> {
    picker: &'a MunsellPicker,
    cell_size: f32,
}

impl<'a> HueGrid<'a> {
    pub fn new(picker: &'a MunsellPicker) -> Self {
        Self {
            picker,
            cell_size: sizing::GRID_CELL,
        }
    }

    /// Set the cell side length.
    pub fn cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Show the grid and return the palette-local index that was clicked, if any.
    pub fn show(self, ui: &mut Ui) -> Option<usize> {
        let placements = match self.picker.grid_placements(self.cell_size as f64) {
            Ok(placements) => placements,
            Err(e) => {
                log::error!("Grid layout failed: {}", e);
                return None;
            }
        };

        let columns = self.picker.columns().max(1);
        let rows = placements.len().div_ceil(columns);
        let size = vec2(
            columns as f32 * self.cell_size,
            rows as f32 * self.cell_size,
        );
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        let hovered = response
            .hover_pos()
            .and_then(|pos| hit_test(&placements, to_kurbo_point(pos, rect.min)));

        if ui.is_rect_visible(rect) {
            paint_placements(ui.painter(), rect.min, &placements, hovered);
        }

        let clicked = response.clicked();
        if let Some(placement) = hovered.and_then(|index| placements.iter().find(|p| p.index == index)) {
            response
                .on_hover_cursor(CursorIcon::PointingHand)
                .on_hover_text(placement.hex);
        }

        if clicked { hovered } else { None }
    }
}
