use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

pub const DEFAULT_COLUMN_UNITS: f32 = 8.0;
pub const DEFAULT_ROW_UNITS: f32 = 16.0;

/// Conversion from terminal cells to gesture distance units.
///
/// Terminal cells are roughly twice as tall as they are wide, so rows count
/// for more distance than columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerScale {
    column_units: f32,
    row_units: f32,
}

impl PointerScale {
    /// Non-positive or non-finite factors fall back to the defaults.
    #[must_use]
    pub fn new(column_units: f32, row_units: f32) -> Self {
        let sane = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            column_units: sane(column_units, DEFAULT_COLUMN_UNITS),
            row_units: sane(row_units, DEFAULT_ROW_UNITS),
        }
    }

    #[must_use]
    pub fn to_point(self, column: u16, row: u16) -> Point {
        Point::new(
            f32::from(column) * self.column_units,
            f32::from(row) * self.row_units,
        )
    }

    /// Distance units back to whole columns, rounded toward zero.
    #[must_use]
    pub fn columns(self, units: f32) -> i32 {
        (units / self.column_units) as i32
    }

    #[must_use]
    pub fn rows(self, units: f32) -> i32 {
        (units / self.row_units) as i32
    }
}

impl Default for PointerScale {
    fn default() -> Self {
        Self {
            column_units: DEFAULT_COLUMN_UNITS,
            row_units: DEFAULT_ROW_UNITS,
        }
    }
}
