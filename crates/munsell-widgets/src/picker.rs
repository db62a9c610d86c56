//! Wheel and grid side by side.

use egui::Ui;
use munsell_core::{HexColor, MunsellPicker};

use crate::grid::HueGrid;
use crate::sizing;
use crate::wheel::ColorWheel;

/// Drives a [`MunsellPicker`] from pointer input.
///
/// Clicking the wheel loads that hue's palette into the grid; clicking the
/// grid completes a selection, which also reaches the picker's handlers.
pub struct PickerView<'a> {
    picker: &'a mut MunsellPicker,
    wheel_min: f32,
    cell_size: f32,
}

impl<'a> PickerView<'a> {
    pub fn new(picker: &'a mut MunsellPicker) -> Self {
        Self {
            picker,
            wheel_min: sizing::WHEEL_MIN,
            cell_size: sizing::GRID_CELL,
        }
    }

    /// Set the minimum wheel side length.
    pub fn wheel_min(mut self, wheel_min: f32) -> Self {
        self.wheel_min = wheel_min;
        self
    }

    /// Set the grid cell side length.
    pub fn cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Show the picker and return the color chosen this frame, if any.
    pub fn show(self, ui: &mut Ui) -> Option<HexColor> {
        let mut chosen = None;

        // Measured before entering the row, whose height starts at one line.
        // The wheel gets what the grid leaves over.
        let available = ui.available_size();
        let grid_width = self.picker.columns() as f32 * self.cell_size + sizing::COLUMN_SPACING;
        let side = (available.x - grid_width).min(available.y);

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = sizing::COLUMN_SPACING;

            let wheel_click = ColorWheel::new(self.picker)
                .min_size(self.wheel_min)
                .side(side)
                .show(ui);
            if let Some(index) = wheel_click {
                if let Err(e) = self.picker.select_hue(index) {
                    log::error!("{}", e);
                }
            }

            let grid_click = HueGrid::new(self.picker)
                .cell_size(self.cell_size)
                .show(ui);
            if let Some(index) = grid_click {
                match self.picker.select_swatch(index) {
                    Ok(color) => chosen = Some(color),
                    Err(e) => log::error!("{}", e),
                }
            }
        });

        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, Pos2, Rect, Vec2};
    use munsell_core::{PaletteIndex, SelectionState};

    /// Area handed to the picker: the wheel gets 600 x 600, the grid starts at x = 605.
    const AREA: Vec2 = Vec2::new(1000.0, 600.0);
    /// Wheel item 0 (twelve o'clock) with a 600 px wheel.
    const WHEEL_TOP: Pos2 = Pos2::new(300.0, 15.0);
    /// Wheel item 10 (three o'clock) with a 600 px wheel.
    const WHEEL_RIGHT: Pos2 = Pos2::new(585.0, 300.0);
    /// First grid cell.
    const GRID_FIRST: Pos2 = Pos2::new(615.0, 10.0);

    struct FrameResult {
        chosen: Option<HexColor>,
        rect: Rect,
        outlines: usize,
    }

    fn run_frame(ctx: &egui::Context, picker: &mut MunsellPicker, events: Vec<Event>) -> FrameResult {
        let mut chosen = None;
        let mut rect = Rect::NOTHING;
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::new())
                .show(ctx, |ui| {
                    let inner = ui.allocate_ui(AREA, |ui| PickerView::new(&mut *picker).show(ui));
                    chosen = inner.inner;
                    rect = inner.response.rect;
                });
        });

        let outlines = output
            .shapes
            .iter()
            .filter(|clipped| match &clipped.shape {
                egui::Shape::Rect(shape) => shape.stroke.width == sizing::HIGHLIGHT_WIDTH,
                _ => false,
            })
            .count();
        FrameResult {
            chosen,
            rect,
            outlines,
        }
    }

    fn hover(ctx: &egui::Context, picker: &mut MunsellPicker, pos: Pos2) -> FrameResult {
        run_frame(ctx, picker, vec![Event::PointerMoved(pos)])
    }

    fn click(
        ctx: &egui::Context,
        picker: &mut MunsellPicker,
        pos: Pos2,
        button: PointerButton,
    ) -> Option<HexColor> {
        hover(ctx, picker, pos);
        let press = |pressed| Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: Modifiers::NONE,
        };
        run_frame(ctx, picker, vec![press(true)]);
        run_frame(ctx, picker, vec![press(false)]).chosen
    }

    fn setup() -> (egui::Context, MunsellPicker) {
        let ctx = egui::Context::default();
        let mut picker = MunsellPicker::default();
        // Lay everything out once so the pointer has something to hit.
        run_frame(&ctx, &mut picker, Vec::new());
        (ctx, picker)
    }

    #[test]
    fn test_idle_frame_leaves_picker_alone() {
        let (ctx, mut picker) = setup();
        let frame = run_frame(&ctx, &mut picker, Vec::new());

        assert_eq!(frame.chosen, None);
        assert_eq!(frame.outlines, 0);
        assert_eq!(picker.state(), &SelectionState::WheelFocused);
    }

    #[test]
    fn test_wheel_fills_available_height() {
        let (ctx, mut picker) = setup();
        let frame = run_frame(&ctx, &mut picker, Vec::new());

        // 600 px wheel + 5 px gap + 15 columns of 20 px
        assert!((frame.rect.height() - 600.0).abs() < 0.5, "{:?}", frame.rect);
        assert!((frame.rect.width() - 905.0).abs() < 0.5, "{:?}", frame.rect);
    }

    #[test]
    fn test_hover_outlines_without_selecting() {
        let (ctx, mut picker) = setup();

        let frame = hover(&ctx, &mut picker, WHEEL_RIGHT);
        assert_eq!(frame.outlines, 1);
        assert_eq!(frame.chosen, None);
        assert_eq!(picker.state(), &SelectionState::WheelFocused);

        let frame = hover(&ctx, &mut picker, Pos2::new(980.0, 590.0));
        assert_eq!(frame.outlines, 0);
    }

    #[test]
    fn test_wheel_click_focuses_palette() {
        let (ctx, mut picker) = setup();

        assert_eq!(click(&ctx, &mut picker, WHEEL_RIGHT, PointerButton::Primary), None);
        assert_eq!(picker.state(), &SelectionState::PaletteFocused { palette: 10 });

        // Outside a 200 px wheel, so only reachable when the wheel grew.
        click(&ctx, &mut picker, WHEEL_TOP, PointerButton::Primary);
        assert_eq!(picker.state(), &SelectionState::PaletteFocused { palette: 0 });
    }

    #[test]
    fn test_secondary_click_is_ignored() {
        let (ctx, mut picker) = setup();

        click(&ctx, &mut picker, WHEEL_RIGHT, PointerButton::Secondary);
        assert_eq!(picker.state(), &SelectionState::WheelFocused);

        click(&ctx, &mut picker, WHEEL_RIGHT, PointerButton::Primary);
        let chosen = click(&ctx, &mut picker, GRID_FIRST, PointerButton::Secondary);
        assert_eq!(chosen, None);
        assert_eq!(picker.state(), &SelectionState::PaletteFocused { palette: 10 });
    }

    #[test]
    fn test_grid_click_chooses_color() {
        let (ctx, mut picker) = setup();

        click(&ctx, &mut picker, WHEEL_RIGHT, PointerButton::Primary);
        let chosen = click(&ctx, &mut picker, GRID_FIRST, PointerButton::Primary).unwrap();

        let expected = PaletteIndex::munsell().swatch(10, 0).unwrap();
        assert_eq!(chosen.as_str(), expected);
        assert!(matches!(
            picker.state(),
            SelectionState::ColorChosen { palette: 10, swatch: 0, .. }
        ));
    }

    #[test]
    fn test_grid_follows_picker_columns() {
        let ctx = egui::Context::default();
        let mut picker = MunsellPicker::default().with_columns(11);
        let frame = run_frame(&ctx, &mut picker, Vec::new());

        // 11 x 15 cells: 220 px wide, 300 px tall, beside a 600 px wheel
        assert!((frame.rect.width() - 825.0).abs() < 0.5, "{:?}", frame.rect);
        assert!((frame.rect.height() - 600.0).abs() < 0.5, "{:?}", frame.rect);
    }
}
