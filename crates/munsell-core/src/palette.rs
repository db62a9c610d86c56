//! Range lookups over the static Munsell tables.

use crate::color::{ColorError, ColorResult};
use crate::data::{COLORS40, MUNSELL};

/// Swatches per hue palette.
pub const PALETTE_SIZE: usize = 165;
/// Columns of the hue-value/chroma grid (chroma steps).
pub const GRID_COLUMNS: usize = 15;
/// Rows of the hue-value/chroma grid (value steps).
pub const GRID_ROWS: usize = PALETTE_SIZE / GRID_COLUMNS;
/// Entries on the outer hue wheel.
pub const WHEEL_SIZE: usize = 40;

/// One representative swatch on the hue wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelEntry {
    /// Munsell hue notation (e.g. "5R")
    pub label: &'static str,
    /// Hue family name (e.g. "Red")
    pub description: &'static str,
    /// `#RRGGBB` swatch color
    pub hex: &'static str,
}

impl WheelEntry {
    pub const fn new(label: &'static str, description: &'static str, hex: &'static str) -> Self {
        Self {
            label,
            description,
            hex,
        }
    }
}

/// Read-only index over a swatch table and its hue wheel.
///
/// The table is a flat sequence of `wheel.len()` palettes, each
/// `palette_size` entries long. Palette `i` corresponds to wheel entry `i`.
#[derive(Debug, Clone, Copy)]
pub struct PaletteIndex {
    table: &'static [&'static str],
    wheel: &'static [WheelEntry],
    palette_size: usize,
}

impl Default for PaletteIndex {
    fn default() -> Self {
        Self::munsell()
    }
}

impl PaletteIndex {
    /// Index over the bundled Munsell tables (40 palettes of 165 swatches).
    pub fn munsell() -> Self {
        Self {
            table: &MUNSELL,
            wheel: &COLORS40,
            palette_size: PALETTE_SIZE,
        }
    }

    /// Index over caller-supplied tables.
    ///
    /// Fails unless the table holds exactly one palette per wheel entry.
    pub fn new(
        table: &'static [&'static str],
        wheel: &'static [WheelEntry],
        palette_size: usize,
    ) -> ColorResult<Self> {
        if palette_size == 0 || wheel.len().checked_mul(palette_size) != Some(table.len()) {
            return Err(ColorError::TableShape {
                table: table.len(),
                wheel: wheel.len(),
                palette_size,
            });
        }
        Ok(Self {
            table,
            wheel,
            palette_size,
        })
    }

    /// Wheel entries in wheel order.
    pub fn wheel_entries(&self) -> &'static [WheelEntry] {
        self.wheel
    }

    /// Number of palettes (equal to the number of wheel entries).
    pub fn palette_count(&self) -> usize {
        self.wheel.len()
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// The contiguous slice of swatches for one palette.
    pub fn palette_slice(&self, palette_index: usize) -> ColorResult<&'static [&'static str]> {
        if palette_index >= self.palette_count() {
            return Err(ColorError::IndexOutOfRange {
                what: "palette",
                index: palette_index,
                len: self.palette_count(),
            });
        }
        let start = palette_index * self.palette_size;
        Ok(&self.table[start..start + self.palette_size])
    }

    /// A single swatch, addressed by palette and position within the palette.
    pub fn swatch(&self, palette_index: usize, local_index: usize) -> ColorResult<&'static str> {
        let slice = self.palette_slice(palette_index)?;
        slice.get(local_index).copied().ok_or(ColorError::IndexOutOfRange {
            what: "swatch",
            index: local_index,
            len: slice.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex_to_fraction;

    #[test]
    fn test_bundled_table_shape() {
        let index = PaletteIndex::munsell();
        assert_eq!(index.wheel_entries().len(), WHEEL_SIZE);
        assert_eq!(MUNSELL.len(), WHEEL_SIZE * PALETTE_SIZE);
        assert_eq!(GRID_ROWS * GRID_COLUMNS, PALETTE_SIZE);
        assert_eq!(GRID_ROWS, 11);
    }

    #[test]
    fn test_every_palette_has_165_swatches() {
        let index = PaletteIndex::munsell();
        for i in 0..WHEEL_SIZE {
            assert_eq!(index.palette_slice(i).unwrap().len(), PALETTE_SIZE);
        }
    }

    #[test]
    fn test_palette_out_of_range() {
        let index = PaletteIndex::munsell();
        assert_eq!(
            index.palette_slice(WHEEL_SIZE),
            Err(ColorError::IndexOutOfRange {
                what: "palette",
                index: 40,
                len: 40
            })
        );
        assert!(index.palette_slice(usize::MAX).is_err());
    }

    #[test]
    fn test_slices_are_contiguous() {
        let index = PaletteIndex::munsell();
        assert_eq!(index.palette_slice(0).unwrap()[0], MUNSELL[0]);
        assert_eq!(index.palette_slice(1).unwrap()[0], MUNSELL[PALETTE_SIZE]);
        assert_eq!(index.palette_slice(39).unwrap()[164], MUNSELL[MUNSELL.len() - 1]);
    }

    #[test]
    fn test_swatch_lookup() {
        let index = PaletteIndex::munsell();
        assert_eq!(index.swatch(3, 17).unwrap(), index.palette_slice(3).unwrap()[17]);
        assert!(matches!(
            index.swatch(3, PALETTE_SIZE),
            Err(ColorError::IndexOutOfRange { what: "swatch", .. })
        ));
        assert!(matches!(
            index.swatch(40, 0),
            Err(ColorError::IndexOutOfRange { what: "palette", .. })
        ));
    }

    #[test]
    fn test_all_table_entries_parse() {
        for hex in MUNSELL.iter() {
            assert!(hex_to_fraction(hex).is_ok(), "{hex}");
        }
        for entry in COLORS40.iter() {
            assert!(hex_to_fraction(entry.hex).is_ok(), "{}", entry.label);
        }
    }

    #[test]
    fn test_value_rows_run_light_to_dark() {
        let index = PaletteIndex::munsell();
        let slice = index.palette_slice(0).unwrap();
        // Chroma 0 column is neutral gray: white on top, black at the bottom.
        assert_eq!(slice[0], "#FFFFFF");
        assert_eq!(slice[PALETTE_SIZE - GRID_COLUMNS], "#000000");
    }

    #[test]
    fn test_custom_table_shape_checked() {
        static TABLE: [&str; 4] = ["#000000", "#111111", "#222222", "#333333"];
        static WHEEL: [WheelEntry; 2] = [
            WheelEntry::new("A", "First", "#000000"),
            WheelEntry::new("B", "Second", "#222222"),
        ];

        let index = PaletteIndex::new(&TABLE, &WHEEL, 2).unwrap();
        assert_eq!(index.palette_slice(1).unwrap(), &["#222222", "#333333"]);

        assert!(matches!(
            PaletteIndex::new(&TABLE, &WHEEL, 3),
            Err(ColorError::TableShape { table: 4, wheel: 2, palette_size: 3 })
        ));
        assert!(PaletteIndex::new(&TABLE, &WHEEL, 0).is_err());
    }
}
