//! Optional instrumentation hooks for timing matrix operations
//!
//! An [`Observer`] installed with [`set_observer`] is called at the entry
//! and exit of the heavier operations (transpose, reshape, determinant,
//! inverse, solve). With no observer installed the per-operation guard is
//! a no-op. Observation never affects the result of an operation.

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Callback invoked around timed operations
pub trait Observer: Send + Sync {
    /// Called when a timed operation begins
    fn enter(&self, op: &'static str);

    /// Called when the operation completes, with the measured wall time
    fn exit(&self, op: &'static str, elapsed: Duration);
}

static OBSERVER: RwLock<Option<Arc<dyn Observer>>> = RwLock::new(None);

/// Install the global observer, or clear it with `None`
pub fn set_observer(observer: Option<Arc<dyn Observer>>) {
    *OBSERVER.write() = observer;
}

/// Guard tying an operation's lifetime to its enter/exit callbacks
pub(crate) struct Scope {
    op: &'static str,
    start: Instant,
    observer: Option<Arc<dyn Observer>>,
}

/// Open a timing scope for `op`; exit fires when the guard drops
pub(crate) fn scope(op: &'static str) -> Scope {
    let observer = OBSERVER.read().clone();
    if let Some(obs) = &observer {
        obs.enter(op);
    }
    Scope {
        op,
        start: Instant::now(),
        observer,
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        if let Some(obs) = &self.observer {
            obs.exit(self.op, self.start.elapsed());
        }
    }
}
