#[macro_use]
pub mod macros;

use lifegrid_core::{CellState, Universe};

/// Row-major 0/1 image of the universe's current bounding box.
#[allow(dead_code)]
pub fn snapshot(universe: &Universe) -> Vec<u8> {
    universe.cells().map(|c| u8::from(c.is_alive())).collect()
}

#[allow(dead_code)]
pub struct UniverseBuilder {
    width: i32,
    height: i32,
    seed: Option<u64>,
    grid: Option<Vec<u8>>,
    cells: Vec<(i32, i32)>,
}

#[allow(dead_code)]
impl UniverseBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            seed: None,
            grid: None,
            cells: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fills the initial box from a row-major 0/1 grid of
    /// `width × height` entries. Index 0 is the box's top-left corner.
    pub fn with_grid(mut self, grid: &[u8]) -> Self {
        assert_eq!(
            grid.len(),
            (self.width * self.height) as usize,
            "grid does not match a {}x{} box",
            self.width,
            self.height
        );
        self.grid = Some(grid.to_vec());
        self
    }

    pub fn with_cell(mut self, x: i32, y: i32) -> Self {
        self.cells.push((x, y));
        self
    }

    pub fn build(self) -> Universe {
        let mut universe = match self.seed {
            Some(seed) => Universe::with_seed(self.width, self.height, seed),
            None => Universe::new(self.width, self.height),
        }
        .expect("Failed to create universe in test builder");

        if let Some(grid) = self.grid {
            let (min_x, min_y) = (universe.min_x(), universe.min_y());
            for (i, &value) in grid.iter().enumerate() {
                let x = min_x + (i as i32 % self.width);
                let y = min_y + (i as i32 / self.width);
                universe.set(x, y, CellState::from(value != 0));
            }
        }

        for (x, y) in self.cells {
            universe.set(x, y, CellState::Alive);
        }

        universe
    }
}
