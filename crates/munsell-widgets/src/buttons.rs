//! Button components: toolbar text buttons and dialog buttons.

use egui::{Color32, CornerRadius, CursorIcon, Pos2, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::{sizing, theme};

/// A toolbar text button with an optional leading color chip.
pub struct TextButton<'a> {
    label: &'a str,
    chip: Option<Color32>,
    tooltip: Option<&'a str>,
}

impl<'a> TextButton<'a> {
    /// Create a new text button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            chip: None,
            tooltip: None,
        }
    }

    /// Show a small color chip before the label.
    pub fn chip(mut self, color: Color32) -> Self {
        self.chip = Some(color);
        self
    }

    pub fn tooltip(mut self, tooltip: &'a str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let font = egui::FontId::proportional(12.0);
        let text_width = ui
            .painter()
            .layout_no_wrap(self.label.to_string(), font.clone(), theme::TEXT)
            .size()
            .x;
        let chip_width = if self.chip.is_some() { 18.0 } else { 0.0 };
        let size = vec2(text_width + chip_width + 16.0, 24.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };
            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);

            let mut text_left = rect.left() + 8.0;
            if let Some(chip) = self.chip {
                let chip_rect = egui::Rect::from_center_size(
                    Pos2::new(rect.left() + 14.0, rect.center().y),
                    vec2(12.0, 12.0),
                );
                ui.painter().rect_filled(chip_rect, CornerRadius::same(2), chip);
                ui.painter().rect_stroke(
                    chip_rect,
                    CornerRadius::same(2),
                    Stroke::new(1.0, theme::BORDER),
                    StrokeKind::Outside,
                );
                text_left += chip_width;
            }

            ui.painter().text(
                Pos2::new(text_left, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.label,
                font,
                theme::TEXT,
            );
        }

        let clicked = response.clicked();
        let response = response.on_hover_cursor(CursorIcon::PointingHand);
        if let Some(tooltip) = self.tooltip {
            response.on_hover_text(tooltip);
        }
        clicked
    }
}

/// A dialog button. Primary buttons are filled with the accent color.
pub fn dialog_button(ui: &mut Ui, label: &str, primary: bool) -> bool {
    let (fill, text) = if primary {
        (theme::ACCENT, Color32::WHITE)
    } else {
        (Color32::WHITE, theme::TEXT)
    };
    let button = egui::Button::new(egui::RichText::new(label).size(13.0).color(text))
        .fill(fill)
        .stroke(Stroke::new(1.0, if primary { theme::ACCENT } else { theme::BORDER }))
        .corner_radius(CornerRadius::same(sizing::CORNER_RADIUS))
        .min_size(vec2(72.0, 28.0));
    ui.add(button).on_hover_cursor(CursorIcon::PointingHand).clicked()
}
