//! Cell state and grid coordinates.

use serde::{Deserialize, Serialize};

/// State of a single cell. Any coordinate that is not recorded is `Dead`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    #[inline]
    #[must_use]
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Applies the B3/S23 rule to a cell with `neighbors` live neighbors.
    #[must_use]
    pub fn next(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            // Survival
            (CellState::Alive, 2 | 3) => CellState::Alive,
            // Under- and overpopulation
            (CellState::Alive, _) => CellState::Dead,
            // Birth
            (CellState::Dead, 3) => CellState::Alive,
            (CellState::Dead, _) => CellState::Dead,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// A coordinate on the unbounded grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translates by an offset. Returns `None` past the edge of the
    /// integer plane.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
