//! Change notification for universe observers.
//!
//! Observers are plain closures run synchronously on the mutating call's
//! stack, in subscription order. An observer must not reach back into the
//! universe that notified it; doing so is unsupported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation that produced a change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeCause {
    Set,
    Tick,
    Clear,
    Reset,
    Randomize,
    Stamp,
}

/// Payload delivered to every observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellsChanged {
    pub cause: ChangeCause,
    /// Live cell count after the change.
    pub alive_cells: usize,
}

/// Handle returned by [`ChangeNotifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&CellsChanged) + Send>;

/// Ordered list of observers.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CellsChanged) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, event: &CellsChanged) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}
