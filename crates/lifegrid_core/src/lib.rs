//! # Lifegrid Core
//!
//! Conway's Game of Life on an unbounded plane.
//!
//! This crate contains the simulation engine:
//! - Sparse live-cell storage keyed by signed coordinates
//! - A growth-only bounding box that always holds every live cell
//! - Double-buffered generation stepping (B3/S23)
//! - Synchronous change notification for renderers and other observers
//! - Built-in seed patterns, run metrics and logging setup
//!
//! ## Example
//!
//! ```
//! use lifegrid_core::{CellState, Universe};
//!
//! let mut universe = Universe::new(5, 5).unwrap();
//! for y in -1..=1 {
//!     universe.set(0, y, CellState::Alive);
//! }
//!
//! // A vertical blinker turns horizontal.
//! assert!(universe.tick());
//! assert_eq!(universe.get(-1, 0), CellState::Alive);
//! assert_eq!(universe.get(0, -1), CellState::Dead);
//! ```

/// Axis-aligned bounding box arithmetic
pub mod bounds;
/// Cell state and coordinates
pub mod cell;
/// Error types
pub mod error;
/// Observer registration and change events
pub mod events;
/// Row-major iteration over a box
pub mod iter;
/// Run counters and tracing setup
pub mod metrics;
/// Built-in seed patterns
pub mod patterns;
/// The universe itself
pub mod universe;

pub use bounds::Bounds;
pub use cell::{CellState, Position};
pub use error::{Result, UniverseError};
pub use events::{CellsChanged, ChangeCause, SubscriptionId};
pub use metrics::{init_logging, Metrics};
pub use patterns::{Pattern, PATTERNS};
pub use universe::Universe;
