//! Axis-aligned bounding box that contains every live cell.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::cell::Position;

/// Inclusive rectangle `[min_x, max_x] × [min_y, max_y]`.
///
/// `min_* <= max_*` always holds. A box only grows through [`Bounds::include`];
/// shrinking happens solely by replacing it with [`Bounds::centered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// Box of `width × height` cells centered on the origin.
    ///
    /// Odd sizes are symmetric (`3` gives `-1..=1`), even sizes lean
    /// negative (`6` gives `-3..=2`). Both dimensions must be positive.
    #[must_use]
    pub fn centered(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        let min_x = -(width / 2);
        let min_y = -(height / 2);
        Self {
            min_x,
            min_y,
            max_x: min_x + (width - 1),
            max_y: min_y + (height - 1),
        }
    }

    /// Width in cells. Widened so the full `i32` span fits.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u64 {
        (i64::from(self.max_x) - i64::from(self.min_x) + 1) as u64
    }

    /// Height in cells.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u64 {
        (i64::from(self.max_y) - i64::from(self.min_y) + 1) as u64
    }

    /// Number of cells covered, saturating at `u64::MAX`.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.x_range().contains(&pos.x) && self.y_range().contains(&pos.y)
    }

    /// Grows the box to cover `pos`. Returns whether it grew.
    pub fn include(&mut self, pos: Position) -> bool {
        let before = *self;
        self.min_x = self.min_x.min(pos.x);
        self.max_x = self.max_x.max(pos.x);
        self.min_y = self.min_y.min(pos.y);
        self.max_y = self.max_y.max(pos.y);
        *self != before
    }

    /// The box grown by one cell on every side, clamped to the integer plane.
    #[must_use]
    pub fn expanded(&self) -> Self {
        Self {
            min_x: self.min_x.saturating_sub(1),
            min_y: self.min_y.saturating_sub(1),
            max_x: self.max_x.saturating_add(1),
            max_y: self.max_y.saturating_add(1),
        }
    }

    #[inline]
    #[must_use]
    pub fn x_range(&self) -> RangeInclusive<i32> {
        self.min_x..=self.max_x
    }

    #[inline]
    #[must_use]
    pub fn y_range(&self) -> RangeInclusive<i32> {
        self.min_y..=self.max_y
    }

    /// The 3×3 block around `pos`, intersected with this box.
    ///
    /// Returns `None` when the block lies entirely outside.
    #[must_use]
    pub fn neighborhood(
        &self,
        pos: Position,
    ) -> Option<(RangeInclusive<i32>, RangeInclusive<i32>)> {
        let lo_x = pos.x.saturating_sub(1).max(self.min_x);
        let hi_x = pos.x.saturating_add(1).min(self.max_x);
        let lo_y = pos.y.saturating_sub(1).max(self.min_y);
        let hi_y = pos.y.saturating_add(1).min(self.max_y);
        if lo_x > hi_x || lo_y > hi_y {
            return None;
        }
        Some((lo_x..=hi_x, lo_y..=hi_y))
    }
}
