/// Asserts that the universe's bounding box holds exactly the given
/// row-major 0/1 grid.
#[macro_export]
macro_rules! assert_cells {
    ($universe:expr, $expected:expr) => {{
        let expected: &[u8] = &$expected;
        assert_eq!(
            $universe.size() as usize,
            expected.len(),
            "Box is {}x{}, fixture has {} cells",
            $universe.width(),
            $universe.height(),
            expected.len()
        );
        assert_eq!(
            $crate::common::snapshot(&$universe),
            expected,
            "Cell state mismatch"
        );
    }};
}

/// Asserts the top-left corner and dimensions of the bounding box.
#[macro_export]
macro_rules! assert_bounds {
    ($universe:expr, ($min_x:expr, $min_y:expr), $width:expr, $height:expr) => {
        assert_eq!(
            (
                $universe.min_x(),
                $universe.min_y(),
                $universe.width(),
                $universe.height()
            ),
            ($min_x, $min_y, $width, $height),
            "Bounds mismatch (min_x, min_y, width, height)"
        );
    };
}

/// Asserts that every cell in the bounding box is dead.
#[macro_export]
macro_rules! assert_all_dead {
    ($universe:expr) => {
        assert!(
            $universe
                .cells()
                .all(|c| c == lifegrid_core::CellState::Dead),
            "Expected an all-dead universe, {} alive",
            $universe.alive_cells()
        );
    };
}
