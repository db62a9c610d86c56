//! Munsell Core Library
//!
//! Toolkit-agnostic data model for the Munsell color picker: the static swatch
//! tables, wheel and grid layout, the selection state machine, and the host
//! activity that pairs two pickers and persists the chosen colors.

pub mod activity;
pub mod color;
mod data;
pub mod icon;
pub mod layout;
pub mod palette;
pub mod picker;
pub mod settings;

pub use activity::{ActivityError, ColorPair, MunsellActivity, PendingAlert, Response, DEFAULT_COLORS};
pub use color::{ColorError, HexColor, Rgb, fraction_to_hex, hex_to_fraction, highlight_for};
pub use icon::{IconError, IconTemplate};
pub use layout::{
    LayoutError, Slot, SwatchPlacement, attach_colors, compute_grid_positions,
    compute_wheel_positions, hit_test, place_grid, place_wheel,
};
pub use palette::{GRID_COLUMNS, GRID_ROWS, PALETTE_SIZE, PaletteIndex, WHEEL_SIZE, WheelEntry};
pub use picker::{HandlerId, MunsellPicker, SelectionState};
pub use settings::{COLOR_KEY, FileSettings, MemorySettings, SettingsError, SettingsStore};
