//! egui widgets for the Munsell color picker.
//!
//! - **Swatch**: painting a single swatch with its hover outline
//! - **Wheel**: the 40-hue outer wheel
//! - **Grid**: the 15 x 11 value/chroma grid of the active palette
//! - **Picker**: wheel and grid side by side, driving a `MunsellPicker`
//! - **Buttons / Menu / Layout**: toolbar buttons, panel frames, labels

pub mod buttons;
pub mod grid;
pub mod layout;
pub mod menu;
pub mod picker;
pub mod swatch;
pub mod wheel;

pub use buttons::{TextButton, dialog_button};
pub use grid::HueGrid;
pub use layout::{picker_header, section_label, vertical_separator};
pub use menu::{panel_frame, toolbar_frame};
pub use picker::PickerView;
pub use swatch::{hex_to_color32, paint_swatch, rgb_to_color32, to_egui_rect, to_kurbo_point};
pub use wheel::ColorWheel;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Minimum side of the hue wheel
    pub const WHEEL_MIN: f32 = 200.0;
    /// Side of one grid cell
    pub const GRID_CELL: f32 = 20.0;
    /// Gap between wheel and grid
    pub const COLUMN_SPACING: f32 = 5.0;
    /// Hover outline width
    pub const HIGHLIGHT_WIDTH: f32 = 4.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
