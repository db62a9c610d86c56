//! Swatch placement for the hue wheel and the value/chroma grid.
//!
//! The wheel is responsive: swatch size and radius are derived from the
//! bounding box on every call. The grid uses a fixed cell size chosen by the
//! caller so that swatches stay tightly packed.

use kurbo::{Point, Rect, Size};
use std::f64::consts::{FRAC_PI_2, TAU};
use thiserror::Error;

/// Layout errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid layout argument: {0}")]
    InvalidArgument(String),
    #[error("Cannot attach {colors} colors to {slots} slots")]
    ColorCount { slots: usize, colors: usize },
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Wheel swatches are this fraction of the shorter bounding side.
const WHEEL_SWATCH_DIVISOR: f64 = 20.0;

/// A square slot produced by a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub index: usize,
    /// Top-left corner.
    pub origin: Point,
    /// Side length.
    pub size: f64,
}

impl Slot {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, Size::new(self.size, self.size))
    }
}

/// A colored swatch at its computed position.
///
/// Recomputed whenever the palette or the bounding box changes; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchPlacement {
    pub index: usize,
    pub hex: &'static str,
    pub origin: Point,
    pub size: f64,
}

impl SwatchPlacement {
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, Size::new(self.size, self.size))
    }

    pub fn center(&self) -> Point {
        self.rect().center()
    }
}

fn check_extent(name: &str, value: f64) -> LayoutResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidArgument(format!(
            "{} must be finite and non-negative, got {}",
            name, value
        )))
    }
}

/// Place `item_count` swatches evenly on a circle inside `bounds`.
///
/// Item 0 sits at twelve o'clock and the rest follow clockwise (screen
/// coordinates, y down). The slots carry geometry only; [`place_wheel`]
/// returns colored placements in one call.
pub fn compute_wheel_positions(item_count: usize, bounds: Size) -> LayoutResult<Vec<Slot>> {
    if item_count == 0 {
        return Err(LayoutError::InvalidArgument(
            "wheel needs at least one item".to_string(),
        ));
    }
    check_extent("bounding width", bounds.width)?;
    check_extent("bounding height", bounds.height)?;

    let side = bounds.width.min(bounds.height);
    let size = side / WHEEL_SWATCH_DIVISOR;
    let radius = side / 2.0 - size / 2.0;
    let step = TAU / item_count as f64;

    Ok((0..item_count)
        .map(|index| {
            let angle = index as f64 * step - FRAC_PI_2;
            Slot {
                index,
                origin: Point::new(
                    radius * angle.cos() + bounds.width / 2.0 - size / 2.0,
                    radius * angle.sin() + bounds.height / 2.0 - size / 2.0,
                ),
                size,
            }
        })
        .collect())
}

/// Fill `columns`-wide rows of fixed-size cells, left to right, top to bottom.
///
/// Geometry only, like [`compute_wheel_positions`]; see [`place_grid`].
pub fn compute_grid_positions(
    item_count: usize,
    columns: usize,
    cell_size: f64,
) -> LayoutResult<Vec<Slot>> {
    if columns == 0 {
        return Err(LayoutError::InvalidArgument(
            "grid needs at least one column".to_string(),
        ));
    }
    check_extent("cell size", cell_size)?;

    Ok((0..item_count)
        .map(|index| Slot {
            index,
            origin: Point::new(
                (index % columns) as f64 * cell_size,
                (index / columns) as f64 * cell_size,
            ),
            size: cell_size,
        })
        .collect())
}

/// Pair layout slots with their colors.
pub fn attach_colors(slots: &[Slot], colors: &[&'static str]) -> LayoutResult<Vec<SwatchPlacement>> {
    if slots.len() != colors.len() {
        return Err(LayoutError::ColorCount {
            slots: slots.len(),
            colors: colors.len(),
        });
    }
    Ok(slots
        .iter()
        .zip(colors)
        .map(|(slot, &hex)| SwatchPlacement {
            index: slot.index,
            hex,
            origin: slot.origin,
            size: slot.size,
        })
        .collect())
}

/// Wheel placements for `colors`, one per color, inside `bounds`.
pub fn place_wheel(colors: &[&'static str], bounds: Size) -> LayoutResult<Vec<SwatchPlacement>> {
    attach_colors(&compute_wheel_positions(colors.len(), bounds)?, colors)
}

/// Grid placements for `colors`, `columns` wide with `cell_size` cells.
pub fn place_grid(
    colors: &[&'static str],
    columns: usize,
    cell_size: f64,
) -> LayoutResult<Vec<SwatchPlacement>> {
    attach_colors(&compute_grid_positions(colors.len(), columns, cell_size)?, colors)
}

/// Index of the swatch under `point`, if any.
///
/// Later placements are painted on top, so they win on overlap.
pub fn hit_test(placements: &[SwatchPlacement], point: Point) -> Option<usize> {
    placements
        .iter()
        .rev()
        .find(|p| p.rect().contains(point))
        .map(|p| p.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn center_angle(slot: &Slot, bounds: Size) -> f64 {
        let c = slot.rect().center();
        (c.y - bounds.height / 2.0).atan2(c.x - bounds.width / 2.0)
    }

    #[test]
    fn test_wheel_count_and_size() {
        let bounds = Size::new(400.0, 300.0);
        let slots = compute_wheel_positions(40, bounds).unwrap();
        assert_eq!(slots.len(), 40);
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.index, i);
            assert!((slot.size - 15.0).abs() < EPS);
        }
    }

    #[test]
    fn test_wheel_first_item_at_twelve_oclock() {
        let bounds = Size::new(200.0, 200.0);
        let slots = compute_wheel_positions(40, bounds).unwrap();
        let first = slots[0].rect().center();
        assert!((first.x - 100.0).abs() < EPS);
        assert!(first.y < 100.0);
        // swatch 10, radius 95
        assert!((first.y - 5.0).abs() < EPS);
    }

    #[test]
    fn test_wheel_is_clockwise_and_evenly_spaced() {
        let bounds = Size::new(320.0, 480.0);
        let n = 12;
        let slots = compute_wheel_positions(n, bounds).unwrap();
        let step = TAU / n as f64;
        for pair in slots.windows(2) {
            let mut delta = center_angle(&pair[1], bounds) - center_angle(&pair[0], bounds);
            if delta < 0.0 {
                delta += TAU;
            }
            assert!((delta - step).abs() < 1e-9);
        }
        // Quarter turn later the item is at three o'clock.
        let third = slots[3].rect().center();
        assert!(third.x > 160.0);
        assert!((third.y - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_wheel_stays_inside_bounds() {
        for bounds in [Size::new(200.0, 200.0), Size::new(640.0, 120.0), Size::new(33.0, 901.0)] {
            for slot in compute_wheel_positions(40, bounds).unwrap() {
                let rect = slot.rect();
                assert!(rect.x0 >= -EPS && rect.y0 >= -EPS, "{rect:?} in {bounds:?}");
                assert!(rect.x1 <= bounds.width + EPS && rect.y1 <= bounds.height + EPS);
            }
        }
    }

    #[test]
    fn test_wheel_single_item() {
        let slots = compute_wheel_positions(1, Size::new(100.0, 100.0)).unwrap();
        assert_eq!(slots.len(), 1);
        assert!((slots[0].rect().center().x - 50.0).abs() < EPS);
    }

    #[test]
    fn test_wheel_rejects_zero_items() {
        assert!(matches!(
            compute_wheel_positions(0, Size::new(200.0, 200.0)),
            Err(LayoutError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_wheel_rejects_non_finite_bounds() {
        assert!(compute_wheel_positions(40, Size::new(f64::NAN, 200.0)).is_err());
        assert!(compute_wheel_positions(40, Size::new(200.0, f64::INFINITY)).is_err());
        assert!(compute_wheel_positions(40, Size::new(-1.0, 200.0)).is_err());
    }

    #[test]
    fn test_wheel_zero_bounds_collapse_to_center() {
        let slots = compute_wheel_positions(4, Size::ZERO).unwrap();
        for slot in slots {
            assert_eq!(slot.size, 0.0);
            assert!(slot.origin.x.abs() < EPS && slot.origin.y.abs() < EPS);
        }
    }

    #[test]
    fn test_grid_rows() {
        let slots = compute_grid_positions(165, 15, 20.0).unwrap();
        assert_eq!(slots.len(), 165);

        let rows: Vec<f64> = slots.iter().step_by(15).map(|s| s.origin.y).collect();
        assert_eq!(rows.len(), 11);
        for pair in rows.windows(2) {
            assert!(pair[1] > pair[0]);
        }

        let last = slots.last().unwrap();
        assert_eq!(last.origin, Point::new(14.0 * 20.0, 10.0 * 20.0));
        assert_eq!(slots[15].origin, Point::new(0.0, 20.0));
    }

    #[test]
    fn test_grid_rows_are_left_to_right() {
        let slots = compute_grid_positions(165, 15, 20.0).unwrap();
        for row in slots.chunks(15) {
            assert!(row.iter().all(|s| s.origin.y == row[0].origin.y));
            for pair in row.windows(2) {
                assert!((pair[1].origin.x - pair[0].origin.x - 20.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_grid_partial_last_row() {
        let slots = compute_grid_positions(17, 15, 10.0).unwrap();
        assert_eq!(slots[16].origin, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_grid_invalid_arguments() {
        assert!(compute_grid_positions(165, 0, 20.0).is_err());
        assert!(compute_grid_positions(165, 15, f64::NAN).is_err());
        assert!(compute_grid_positions(165, 15, -4.0).is_err());
        assert!(compute_grid_positions(0, 15, 20.0).unwrap().is_empty());
    }

    #[test]
    fn test_attach_and_hit_test() {
        let slots = compute_grid_positions(4, 2, 10.0).unwrap();
        let colors = ["#000000", "#111111", "#222222", "#333333"];
        let placements = attach_colors(&slots, &colors).unwrap();
        assert_eq!(placements[3].hex, "#333333");
        assert_eq!(placements[3].center(), Point::new(15.0, 15.0));

        assert_eq!(hit_test(&placements, Point::new(5.0, 5.0)), Some(0));
        assert_eq!(hit_test(&placements, Point::new(15.0, 5.0)), Some(1));
        assert_eq!(hit_test(&placements, Point::new(12.0, 18.0)), Some(3));
        assert_eq!(hit_test(&placements, Point::new(25.0, 5.0)), None);

        assert_eq!(
            attach_colors(&slots, &colors[..3]),
            Err(LayoutError::ColorCount { slots: 4, colors: 3 })
        );
    }

    #[test]
    fn test_place_wheel_matches_slots() {
        let colors = ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF"];
        let bounds = Size::new(200.0, 100.0);
        let placements = place_wheel(&colors, bounds).unwrap();
        let slots = compute_wheel_positions(colors.len(), bounds).unwrap();

        assert_eq!(placements.len(), 4);
        for ((placement, slot), hex) in placements.iter().zip(&slots).zip(colors) {
            assert_eq!(placement.index, slot.index);
            assert_eq!(placement.origin, slot.origin);
            assert_eq!(placement.size, slot.size);
            assert_eq!(placement.hex, hex);
        }
        assert!(place_wheel(&[], bounds).is_err());
    }

    #[test]
    fn test_place_grid() {
        let colors = ["#000000", "#111111", "#222222"];
        let placements = place_grid(&colors, 2, 10.0).unwrap();
        assert_eq!(placements[2].origin, Point::new(0.0, 10.0));
        assert_eq!(placements[2].hex, "#222222");
        assert!(place_grid(&colors, 0, 10.0).is_err());
    }
}
