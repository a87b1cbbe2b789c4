//! Pointer positions and card offsets in distance units.

use std::ops::Sub;

/// Absolute pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Displacement of a card from its resting position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `target`; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

impl Sub for Point {
    type Output = Offset;

    fn sub(self, origin: Point) -> Offset {
        Offset {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Offset, Point};

    #[test]
    fn point_difference_is_offset() {
        let offset = Point::new(130.0, 40.0) - Point::new(10.0, 50.0);
        assert_eq!(offset, Offset::new(120.0, -10.0));
    }

    #[test]
    fn lerp_clamps_progress() {
        let start = Offset::new(0.0, 8.0);
        let end = Offset::new(1000.0, 8.0);
        assert_eq!(start.lerp(end, 0.5), Offset::new(500.0, 8.0));
        assert_eq!(start.lerp(end, 3.0), end);
        assert_eq!(start.lerp(end, -1.0), start);
    }
}
