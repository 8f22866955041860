//! Row-major traversal of a bounding box.

use std::collections::HashSet;
use std::iter::FusedIterator;

use crate::bounds::Bounds;
use crate::cell::{CellState, Position};

/// Every position of a box, `y` outer and `x` inner.
#[derive(Debug, Clone)]
pub struct Scan {
    bounds: Bounds,
    cursor: Option<Position>,
    remaining: u64,
}

impl Scan {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cursor: Some(Position::new(bounds.min_x, bounds.min_y)),
            remaining: bounds.area(),
        }
    }
}

impl Iterator for Scan {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let current = self.cursor?;
        self.cursor = if current.x < self.bounds.max_x {
            Some(Position::new(current.x + 1, current.y))
        } else if current.y < self.bounds.max_y {
            Some(Position::new(self.bounds.min_x, current.y + 1))
        } else {
            None
        };
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Scan {}

/// State of every cell in a universe's bounding box, row-major.
///
/// Created by [`Universe::cells`](crate::Universe::cells). The box is
/// captured when the iterator is created; call `cells()` again after a
/// mutation to observe the new state.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    live: &'a HashSet<Position>,
    scan: Scan,
}

impl<'a> Cells<'a> {
    pub(crate) fn new(live: &'a HashSet<Position>, bounds: Bounds) -> Self {
        Self {
            live,
            scan: Scan::new(bounds),
        }
    }
}

impl Iterator for Cells<'_> {
    type Item = CellState;

    fn next(&mut self) -> Option<CellState> {
        self.scan
            .next()
            .map(|pos| CellState::from(self.live.contains(&pos)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.scan.size_hint()
    }
}

impl FusedIterator for Cells<'_> {}
