//! The Life universe: sparse live-cell storage on an unbounded plane.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use crate::bounds::Bounds;
use crate::cell::{CellState, Position};
use crate::error::{Result, UniverseError};
use crate::events::{CellsChanged, ChangeCause, ChangeNotifier, SubscriptionId};
use crate::iter::{Cells, Scan};
use crate::patterns::Pattern;

static ALIVE: CellState = CellState::Alive;
static DEAD: CellState = CellState::Dead;

/// A Game of Life board without fixed edges.
///
/// Only live cells are stored. The bounding box starts as an
/// `initial_width × initial_height` rectangle centered on the origin and
/// grows whenever a cell comes alive outside it. It never shrinks when
/// cells die; only [`Universe::reset`] restores the initial box.
///
/// Mutations that change what a renderer would draw notify subscribers
/// registered with [`Universe::subscribe`].
pub struct Universe {
    initial_width: i32,
    initial_height: i32,
    bounds: Bounds,
    cells: HashSet<Position>,
    // Next generation is built here, then swapped with `cells`.
    scratch: HashSet<Position>,
    rng: ChaCha8Rng,
    notifier: ChangeNotifier,
}

impl Universe {
    /// Creates an empty universe with an entropy-seeded random source.
    ///
    /// # Errors
    /// Returns [`UniverseError::InvalidArgument`] if either dimension is not
    /// strictly positive.
    pub fn new(initial_width: i32, initial_height: i32) -> Result<Self> {
        Self::with_rng(initial_width, initial_height, ChaCha8Rng::from_entropy())
    }

    /// Creates an empty universe whose [`Universe::randomize`] sweeps are
    /// reproducible for a given `seed`.
    ///
    /// # Errors
    /// Same as [`Universe::new`].
    pub fn with_seed(initial_width: i32, initial_height: i32, seed: u64) -> Result<Self> {
        Self::with_rng(
            initial_width,
            initial_height,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    fn with_rng(initial_width: i32, initial_height: i32, rng: ChaCha8Rng) -> Result<Self> {
        if initial_width <= 0 {
            return Err(UniverseError::invalid_argument("width", initial_width));
        }
        if initial_height <= 0 {
            return Err(UniverseError::invalid_argument("height", initial_height));
        }

        Ok(Self {
            initial_width,
            initial_height,
            bounds: Bounds::centered(initial_width, initial_height),
            cells: HashSet::new(),
            scratch: HashSet::new(),
            rng,
            notifier: ChangeNotifier::new(),
        })
    }

    pub fn initial_width(&self) -> i32 {
        self.initial_width
    }

    pub fn initial_height(&self) -> i32 {
        self.initial_height
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn min_x(&self) -> i32 {
        self.bounds.min_x
    }

    pub fn min_y(&self) -> i32 {
        self.bounds.min_y
    }

    pub fn max_x(&self) -> i32 {
        self.bounds.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.bounds.max_y
    }

    pub fn width(&self) -> u64 {
        self.bounds.width()
    }

    pub fn height(&self) -> u64 {
        self.bounds.height()
    }

    /// Number of cells in the bounding box.
    pub fn size(&self) -> u64 {
        self.bounds.area()
    }

    pub fn alive_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// State at `(x, y)`. Any coordinate is valid; unrecorded cells are dead.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> CellState {
        self.state_at(Position::new(x, y))
    }

    #[inline]
    fn state_at(&self, pos: Position) -> CellState {
        CellState::from(self.cells.contains(&pos))
    }

    /// Writes one cell. Returns `true` and notifies observers only when the
    /// state actually changed.
    ///
    /// A cell brought alive outside the box grows the box; killing a cell
    /// leaves the box as it is.
    pub fn set(&mut self, x: i32, y: i32, state: CellState) -> bool {
        if !self.write(Position::new(x, y), state) {
            return false;
        }
        self.notify(ChangeCause::Set);
        true
    }

    fn write(&mut self, pos: Position, state: CellState) -> bool {
        match state {
            CellState::Alive => {
                if !self.cells.insert(pos) {
                    return false;
                }
                self.bounds.include(pos);
                true
            }
            CellState::Dead => self.cells.remove(&pos),
        }
    }

    /// Live cells among the eight neighbors of `(x, y)`.
    ///
    /// The scan is clamped to the bounding box, which holds every live cell.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        let Some((xs, ys)) = self.bounds.neighborhood(Position::new(x, y)) else {
            return 0;
        };

        let mut count = 0;
        for ny in ys {
            for nx in xs.clone() {
                if (nx, ny) == (x, y) {
                    continue;
                }
                if self.cells.contains(&Position::new(nx, ny)) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances one generation. Returns whether any cell changed.
    ///
    /// Births can happen one cell outside the current frontier, so the scan
    /// covers the box plus a one-cell margin. The margin is fixed before the
    /// scan starts; the box itself grows as births land outside it.
    pub fn tick(&mut self) -> bool {
        let region = self.bounds.expanded();
        self.scratch.clear();

        let mut changed = false;
        for pos in Scan::new(region) {
            let current = self.state_at(pos);
            let next = current.next(self.count_neighbors(pos.x, pos.y));
            if next.is_alive() {
                self.scratch.insert(pos);
                self.bounds.include(pos);
            }
            changed |= next != current;
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);

        tracing::trace!(
            changed,
            alive = self.cells.len(),
            width = self.bounds.width(),
            height = self.bounds.height(),
            "Universe tick"
        );

        if changed {
            self.notify(ChangeCause::Tick);
        }
        changed
    }

    /// Kills every cell. The bounding box is kept.
    pub fn clear(&mut self) {
        self.cells.clear();
        tracing::debug!("Universe cleared");
        self.notify(ChangeCause::Clear);
    }

    /// Kills every cell and restores the initial bounding box.
    pub fn reset(&mut self) {
        self.cells.clear();
        self.bounds = Bounds::centered(self.initial_width, self.initial_height);
        tracing::debug!(
            width = self.initial_width,
            height = self.initial_height,
            "Universe reset"
        );
        self.notify(ChangeCause::Reset);
    }

    /// Gives every cell in the bounding box an independent fair coin flip,
    /// drawn from the universe's own random source.
    pub fn randomize(&mut self) {
        Self::sweep(&mut self.cells, self.bounds, &mut self.rng);
        tracing::debug!(alive = self.cells.len(), "Universe randomized");
        self.notify(ChangeCause::Randomize);
    }

    /// Like [`Universe::randomize`], with a caller-supplied random source.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        Self::sweep(&mut self.cells, self.bounds, rng);
        tracing::debug!(alive = self.cells.len(), "Universe randomized");
        self.notify(ChangeCause::Randomize);
    }

    fn sweep<R: Rng + ?Sized>(cells: &mut HashSet<Position>, bounds: Bounds, rng: &mut R) {
        // Every live cell is inside the box, so clearing first is the same
        // as drawing a new state for each of them.
        cells.clear();
        for pos in Scan::new(bounds) {
            if rng.gen::<bool>() {
                cells.insert(pos);
            }
        }
    }

    /// Brings a pattern alive with its top-left corner at `origin`.
    ///
    /// Offsets that would land past the edge of the integer plane are
    /// skipped. Returns how many cells changed; observers are notified once
    /// if that is non-zero.
    pub fn stamp(&mut self, pattern: &Pattern, origin: Position) -> usize {
        let mut changed = 0;
        for &(dx, dy) in pattern.cells {
            let Some(pos) = origin.offset(dx, dy) else {
                continue;
            };
            if self.write(pos, CellState::Alive) {
                changed += 1;
            }
        }

        tracing::debug!(pattern = pattern.name, changed, "Pattern stamped");
        if changed > 0 {
            self.notify(ChangeCause::Stamp);
        }
        changed
    }

    /// Every cell of the bounding box, row-major (`y` outer, `x` inner).
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(&self.cells, self.bounds)
    }

    /// Every position of the bounding box with its state, in the same order
    /// as [`Universe::cells`].
    pub fn positions(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        Scan::new(self.bounds).map(move |pos| (pos, self.state_at(pos)))
    }

    /// Positions of all live cells, in no particular order.
    pub fn live_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// Registers an observer, run after every qualifying mutation.
    ///
    /// Observers run in subscription order on the caller's stack.
    /// Mutating this universe from inside an observer is undefined
    /// behavior of the simulation and is not guarded against.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CellsChanged) + Send + 'static,
    {
        self.notifier.subscribe(observer)
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn notify(&mut self, cause: ChangeCause) {
        let event = CellsChanged {
            cause,
            alive_cells: self.cells.len(),
        };
        self.notifier.notify(&event);
    }
}

impl Index<(i32, i32)> for Universe {
    type Output = CellState;

    fn index(&self, (x, y): (i32, i32)) -> &CellState {
        if self.cells.contains(&Position::new(x, y)) {
            &ALIVE
        } else {
            &DEAD
        }
    }
}

impl<'a> IntoIterator for &'a Universe {
    type Item = CellState;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Cells<'a> {
        self.cells()
    }
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("initial_width", &self.initial_width)
            .field("initial_height", &self.initial_height)
            .field("bounds", &self.bounds)
            .field("alive_cells", &self.cells.len())
            .field("observers", &self.notifier.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting(universe: &mut Universe) -> Arc<AtomicUsize> {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        universe.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        hits
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(
            Universe::new(0, 5).unwrap_err(),
            UniverseError::invalid_argument("width", 0)
        );
        assert_eq!(
            Universe::new(5, -1).unwrap_err(),
            UniverseError::invalid_argument("height", -1)
        );
    }

    #[test]
    fn test_new_is_empty() {
        let universe = Universe::new(4, 7).unwrap();
        assert_eq!(universe.width(), 4);
        assert_eq!(universe.height(), 7);
        assert_eq!(universe.size(), 28);
        assert_eq!(universe.alive_cells(), 0);
        assert!(universe.cells().all(|c| c == CellState::Dead));
    }

    #[test]
    fn test_set_dead_keeps_bounds() {
        let mut universe = Universe::new(3, 3).unwrap();
        universe.set(5, 5, CellState::Alive);
        universe.set(5, 5, CellState::Dead);
        assert_eq!(universe.max_x(), 5);
        assert_eq!(universe.max_y(), 5);
        assert_eq!(universe.alive_cells(), 0);
    }

    #[test]
    fn test_index_matches_get() {
        let mut universe = Universe::new(3, 3).unwrap();
        universe.set(-40, 12, CellState::Alive);
        assert_eq!(universe[(-40, 12)], CellState::Alive);
        assert_eq!(universe[(12, -40)], CellState::Dead);
        assert_eq!(universe.get(-40, 12), universe[(-40, 12)]);
    }

    #[test]
    fn test_count_neighbors_outside_box_is_zero() {
        let mut universe = Universe::new(3, 3).unwrap();
        universe.set(1, 1, CellState::Alive);
        assert_eq!(universe.count_neighbors(100, 100), 0);
        assert_eq!(universe.count_neighbors(2, 2), 1);
    }

    #[test]
    fn test_tick_swaps_buffers() {
        let mut universe = Universe::new(5, 5).unwrap();
        for y in -1..=1 {
            universe.set(0, y, CellState::Alive);
        }
        assert!(universe.tick());
        assert_eq!(universe.alive_cells(), 3);
        assert!(universe.tick());
        let mut live: Vec<_> = universe.live_cells().collect();
        live.sort();
        assert_eq!(
            live,
            vec![Position::new(0, -1), Position::new(0, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn test_neighbors_at_integer_edge() {
        let mut universe = Universe::new(1, 1).unwrap();
        universe.set(i32::MAX, 0, CellState::Alive);
        universe.set(i32::MAX - 1, 1, CellState::Alive);
        assert_eq!(universe.max_x(), i32::MAX);
        assert_eq!(universe.count_neighbors(i32::MAX, 0), 1);
        assert_eq!(universe.count_neighbors(i32::MAX, 1), 1);
        assert_eq!(universe.count_neighbors(i32::MAX - 1, 0), 2);
    }

    #[test]
    fn test_seeded_randomize_is_reproducible() {
        let mut a = Universe::with_seed(16, 16, 7).unwrap();
        let mut b = Universe::with_seed(16, 16, 7).unwrap();
        a.randomize();
        b.randomize();
        assert_eq!(a.cells().collect::<Vec<_>>(), b.cells().collect::<Vec<_>>());
    }

    #[test]
    fn test_randomize_with_external_rng() {
        let mut universe = Universe::new(20, 20).unwrap();
        let hits = counting(&mut universe);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        universe.randomize_with(&mut rng);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(universe.alive_cells() > 0);
        assert!(universe.alive_cells() < 400);
    }

    #[test]
    fn test_reset_restores_initial_box() {
        let mut universe = Universe::new(6, 5).unwrap();
        universe.set(30, -30, CellState::Alive);
        universe.reset();
        assert_eq!(universe.bounds(), Bounds::centered(6, 5));
        assert!(universe.is_empty());
    }

    #[test]
    fn test_stamp_notifies_once() {
        let mut universe = Universe::new(3, 3).unwrap();
        let hits = counting(&mut universe);
        let glider = Pattern::by_name("glider").unwrap();

        assert_eq!(universe.stamp(glider, Position::new(-1, -1)), 5);
        assert_eq!(universe.stamp(glider, Position::new(-1, -1)), 0);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(universe.bounds(), Bounds::centered(3, 3));
    }

    #[test]
    fn test_stamp_at_integer_edge_skips_overflow() {
        let mut universe = Universe::new(3, 3).unwrap();
        let glider = Pattern::by_name("glider").unwrap();

        // Offsets (2, 1) and (2, 2) fall past i32::MAX.
        assert_eq!(universe.stamp(glider, Position::new(i32::MAX - 1, 0)), 3);

        assert_eq!(universe.alive_cells(), 3);
        assert_eq!(universe.get(i32::MAX, 0), CellState::Alive);
        assert_eq!(universe.get(i32::MAX, 1), CellState::Dead);
        assert_eq!(universe.get(i32::MAX - 1, 2), CellState::Alive);
        assert_eq!(universe.get(i32::MAX, 2), CellState::Alive);
        assert_eq!(universe.max_x(), i32::MAX);
    }

    #[test]
    fn test_debug_reports_counts() {
        let mut universe = Universe::new(2, 2).unwrap();
        universe.subscribe(|_| {});
        let text = format!("{universe:?}");
        assert!(text.contains("alive_cells: 0"));
        assert!(text.contains("observers: 1"));
    }
}
