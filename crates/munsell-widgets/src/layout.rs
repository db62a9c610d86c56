//! Layout helpers for labelling picker sections.

use egui::{Color32, CornerRadius, Pos2, Sense, Stroke, StrokeKind, Ui, vec2};

use crate::theme;

/// Thin vertical rule between toolbar groups, `height` points tall.
pub fn vertical_separator(ui: &mut Ui, height: f32) {
    let (rect, _) = ui.allocate_exact_size(vec2(5.0, height), Sense::hover());
    let x = rect.center().x;
    ui.painter().line_segment(
        [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
        Stroke::new(1.0, theme::BORDER),
    );
}

/// Small muted caption.
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(11.0).color(theme::TEXT_MUTED));
}

/// Caption for a picker, followed by a chip of its current color and the hex.
pub fn picker_header(ui: &mut Ui, text: &str, hex: &str, color: Color32) {
    ui.horizontal(|ui| {
        section_label(ui, text);
        let (chip, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
        ui.painter().rect_filled(chip, CornerRadius::same(3), color);
        ui.painter().rect_stroke(
            chip,
            CornerRadius::same(3),
            Stroke::new(1.0, theme::BORDER),
            StrokeKind::Inside,
        );
        ui.label(egui::RichText::new(hex).size(11.0).monospace().color(theme::TEXT));
    });
}
