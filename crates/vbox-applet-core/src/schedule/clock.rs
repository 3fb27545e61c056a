use std::{
    cell::Cell,
    rc::Rc,
    time::{Duration, Instant},
};

/// Time source for the task queue.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for deterministic scheduling.
///
/// Clones share the same time.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    now: Rc<Cell<Instant>>,
}

impl VirtualClock {
    /// Start at the current wall-clock instant.
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    /// Move time forward. An advance past the representable range is ignored.
    pub fn advance(&self, by: Duration) {
        if let Some(next) = self.now.get().checked_add(by) {
            self.now.set(next);
        }
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}
