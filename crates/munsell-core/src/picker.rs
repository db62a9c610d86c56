//! Selection state machine for a single Munsell picker.
//!
//! A picker starts with the hue wheel focused. Picking a hue loads that
//! palette into the value/chroma grid; picking a swatch from the grid
//! completes a selection and notifies every registered handler.

use kurbo::Size;

use crate::color::{ColorResult, HexColor};
use crate::layout::{LayoutError, LayoutResult, SwatchPlacement, place_grid, place_wheel};
use crate::palette::{GRID_COLUMNS, PaletteIndex};

/// Where the picker is in its selection protocol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Waiting for a hue to be picked from the wheel.
    #[default]
    WheelFocused,
    /// A palette is loaded into the grid.
    PaletteFocused { palette: usize },
    /// A swatch was picked. The grid keeps showing the same palette.
    ColorChosen {
        palette: usize,
        swatch: usize,
        color: HexColor,
    },
}

/// Identifies a registered selection handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type SelectedHandler = Box<dyn FnMut(&HexColor)>;

/// Hue wheel plus value/chroma grid over one [`PaletteIndex`].
pub struct MunsellPicker {
    index: PaletteIndex,
    state: SelectionState,
    /// Palette shown in the grid, kept when the wheel is refocused.
    shown_palette: usize,
    columns: usize,
    handlers: Vec<(HandlerId, SelectedHandler)>,
    next_handler: u64,
}

impl std::fmt::Debug for MunsellPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MunsellPicker")
            .field("state", &self.state)
            .field("shown_palette", &self.shown_palette)
            .field("columns", &self.columns)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl Default for MunsellPicker {
    fn default() -> Self {
        Self::new(PaletteIndex::munsell())
    }
}

impl MunsellPicker {
    /// Create a picker with the wheel focused and palette 0 in the grid.
    pub fn new(index: PaletteIndex) -> Self {
        Self {
            index,
            state: SelectionState::WheelFocused,
            shown_palette: 0,
            columns: GRID_COLUMNS,
            handlers: Vec::new(),
            next_handler: 0,
        }
    }

    /// Use a different grid width (for tables with another palette shape).
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Grid width in cells.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn palette_index(&self) -> &PaletteIndex {
        &self.index
    }

    /// Palette currently shown in the grid.
    pub fn active_palette(&self) -> usize {
        match self.state {
            SelectionState::WheelFocused => self.shown_palette,
            SelectionState::PaletteFocused { palette }
            | SelectionState::ColorChosen { palette, .. } => palette,
        }
    }

    /// The most recently chosen color, if any.
    pub fn chosen(&self) -> Option<&HexColor> {
        match &self.state {
            SelectionState::ColorChosen { color, .. } => Some(color),
            _ => None,
        }
    }

    /// Register a handler for completed selections.
    pub fn on_selected(&mut self, handler: impl FnMut(&HexColor) + 'static) -> HandlerId {
        let id = HandlerId(self.next_handler);
        self.next_handler += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Unregister a handler. Returns false if it was not registered.
    pub fn remove_handler(&mut self, id: HandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(handler_id, _)| *handler_id != id);
        self.handlers.len() != before
    }

    /// Pick a hue from the wheel and load its palette into the grid.
    pub fn select_hue(&mut self, wheel_index: usize) -> ColorResult<()> {
        self.index.palette_slice(wheel_index)?;
        log::debug!(
            "Hue selected: {} ({})",
            wheel_index,
            self.index.wheel_entries()[wheel_index].label
        );
        self.shown_palette = wheel_index;
        self.state = SelectionState::PaletteFocused {
            palette: wheel_index,
        };
        Ok(())
    }

    /// Pick a swatch from the grid and notify all handlers.
    pub fn select_swatch(&mut self, palette_local_index: usize) -> ColorResult<HexColor> {
        let palette = self.active_palette();
        let color: HexColor = self.index.swatch(palette, palette_local_index)?.parse()?;
        log::debug!(
            "Swatch selected: palette {} index {} -> {}",
            palette,
            palette_local_index,
            color
        );

        self.state = SelectionState::ColorChosen {
            palette,
            swatch: palette_local_index,
            color: color.clone(),
        };
        for (_, handler) in self.handlers.iter_mut() {
            handler(&color);
        }
        Ok(color)
    }

    /// Return to the wheel, keeping the current palette on screen.
    pub fn focus_wheel(&mut self) {
        self.state = SelectionState::WheelFocused;
    }

    /// Wheel swatches laid out inside `bounds`.
    pub fn wheel_placements(&self, bounds: Size) -> LayoutResult<Vec<SwatchPlacement>> {
        let colors: Vec<&'static str> =
            self.index.wheel_entries().iter().map(|entry| entry.hex).collect();
        place_wheel(&colors, bounds)
    }

    /// Grid swatches for the active palette, `cell_size` apart.
    pub fn grid_placements(&self, cell_size: f64) -> LayoutResult<Vec<SwatchPlacement>> {
        let colors = self
            .index
            .palette_slice(self.active_palette())
            .map_err(|e| LayoutError::InvalidArgument(e.to_string()))?;
        place_grid(colors, self.columns, cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorError;
    use crate::palette::{PALETTE_SIZE, WHEEL_SIZE};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_initial_state() {
        let picker = MunsellPicker::default();
        assert_eq!(picker.state(), &SelectionState::WheelFocused);
        assert_eq!(picker.active_palette(), 0);
        assert!(picker.chosen().is_none());
    }

    #[test]
    fn test_wheel_then_swatch_matches_table() {
        let mut picker = MunsellPicker::default();
        picker.select_hue(0).unwrap();
        let color = picker.select_swatch(0).unwrap();

        let expected = PaletteIndex::munsell().palette_slice(0).unwrap()[0];
        assert_eq!(color.as_str(), expected);
    }

    #[test]
    fn test_select_hue_changes_grid() {
        let mut picker = MunsellPicker::default();
        picker.select_hue(17).unwrap();
        assert_eq!(picker.state(), &SelectionState::PaletteFocused { palette: 17 });

        let grid = picker.grid_placements(20.0).unwrap();
        let slice = PaletteIndex::munsell().palette_slice(17).unwrap();
        assert_eq!(grid.len(), PALETTE_SIZE);
        assert!(grid.iter().zip(slice).all(|(p, hex)| p.hex == *hex));
    }

    #[test]
    fn test_select_hue_out_of_range() {
        let mut picker = MunsellPicker::default();
        picker.select_hue(5).unwrap();
        assert!(matches!(
            picker.select_hue(WHEEL_SIZE),
            Err(ColorError::IndexOutOfRange { .. })
        ));
        // Failed transitions leave the state alone.
        assert_eq!(picker.state(), &SelectionState::PaletteFocused { palette: 5 });
    }

    #[test]
    fn test_select_swatch_out_of_range() {
        let mut picker = MunsellPicker::default();
        picker.select_hue(2).unwrap();
        assert!(picker.select_swatch(PALETTE_SIZE).is_err());
        assert_eq!(picker.state(), &SelectionState::PaletteFocused { palette: 2 });
    }

    #[test]
    fn test_chosen_keeps_palette_visible() {
        let mut picker = MunsellPicker::default();
        picker.select_hue(9).unwrap();
        let color = picker.select_swatch(40).unwrap();
        assert_eq!(picker.active_palette(), 9);
        assert_eq!(picker.chosen(), Some(&color));

        picker.focus_wheel();
        assert_eq!(picker.state(), &SelectionState::WheelFocused);
        assert_eq!(picker.active_palette(), 9);
    }

    #[test]
    fn test_handlers_called_in_order() {
        let mut picker = MunsellPicker::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log_a = seen.clone();
        picker.on_selected(move |c| log_a.borrow_mut().push(format!("a:{c}")));
        let log_b = seen.clone();
        picker.on_selected(move |c| log_b.borrow_mut().push(format!("b:{c}")));

        picker.select_hue(0).unwrap();
        assert!(seen.borrow().is_empty());

        let color = picker.select_swatch(3).unwrap();
        assert_eq!(
            *seen.borrow(),
            vec![format!("a:{color}"), format!("b:{color}")]
        );
    }

    #[test]
    fn test_remove_handler() {
        let mut picker = MunsellPicker::default();
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        let id = picker.on_selected(move |_| *counter.borrow_mut() += 1);

        picker.select_swatch(0).unwrap();
        assert!(picker.remove_handler(id));
        assert!(!picker.remove_handler(id));
        picker.select_swatch(1).unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_wheel_placements() {
        let picker = MunsellPicker::default();
        let wheel = picker.wheel_placements(Size::new(200.0, 200.0)).unwrap();
        assert_eq!(wheel.len(), WHEEL_SIZE);
        assert_eq!(wheel[0].hex, PaletteIndex::munsell().wheel_entries()[0].hex);
        assert!(picker.wheel_placements(Size::new(f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn test_custom_columns() {
        let picker = MunsellPicker::default().with_columns(11);
        assert_eq!(picker.columns(), 11);

        let grid = picker.grid_placements(10.0).unwrap();
        assert_eq!(grid.len(), PALETTE_SIZE);
        assert_eq!(grid[11].origin, kurbo::Point::new(0.0, 10.0));
        assert_eq!(MunsellPicker::default().columns(), GRID_COLUMNS);
    }
}
