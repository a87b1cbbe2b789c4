//! Screen regions the renderer publishes for pointer hit testing.

/// Rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    TopCard,
    BeneathCard,
    LikeButton,
    DislikeButton,
    RestartButton,
}

/// Regions in paint order; the last region containing a cell wins.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    regions: Vec<(HitTarget, CellRect)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, target: HitTarget, rect: CellRect) {
        if rect.width > 0 && rect.height > 0 {
            self.regions.push((target, rect));
        }
    }

    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(column, row))
            .map(|(target, _)| *target)
    }

    /// Topmost rectangle published for `target`.
    #[must_use]
    pub fn rect_of(&self, target: HitTarget) -> Option<CellRect> {
        self.regions
            .iter()
            .rev()
            .find(|(t, _)| *t == target)
            .map(|(_, rect)| *rect)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
