//! Deferred and repeating tasks for a single-threaded event loop.
//!
//! Tasks are plain values handed back by [`TaskQueue::take_due`]; the owner
//! decides what running them means. The event loop sleeps until
//! [`TaskQueue::next_deadline`].

use crate::Clock;

use std::time::{Duration, Instant};

use tracing::trace;

/// Minimum period of a repeating task.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Stand-in for a deadline too far away to represent (about thirty years).
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Cancel token for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    deadline: Instant,
    interval: Option<Duration>,
    task: T,
}

/// Queue of pending tasks ordered by deadline.
#[derive(Debug)]
pub struct TaskQueue<T, C: Clock> {
    clock: C,
    next_id: u64,
    entries: Vec<Scheduled<T>>,
}

impl<T: Clone, C: Clock> TaskQueue<T, C> {
    /// Create an empty queue driven by `clock`.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Run `task` once after `delay`.
    pub fn schedule_once(&mut self, delay: Duration, task: T) -> TaskHandle {
        self.push(delay, None, task)
    }

    /// Run `task` every `interval`, first after one interval.
    pub fn schedule_repeating(&mut self, interval: Duration, task: T) -> TaskHandle {
        let interval = interval.max(MIN_INTERVAL);
        self.push(interval, Some(interval), task)
    }

    /// Schedule into a slot, cancelling whatever the slot held.
    pub fn schedule_in_slot(&mut self, slot: &mut Option<TaskHandle>, delay: Duration, task: T) {
        if let Some(previous) = slot.take() {
            self.cancel(previous);
        }
        *slot = Some(self.schedule_once(delay, task));
    }

    /// Cancel a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        before != self.entries.len()
    }

    /// Drop every pending task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Remove and return every task whose deadline has passed, earliest first.
    ///
    /// Repeating tasks are re-armed rather than removed.
    pub fn take_due(&mut self) -> Vec<(TaskHandle, T)> {
        let now = self.clock.now();

        let mut due: Vec<(Instant, TaskHandle, T)> = self
            .entries
            .iter()
            .filter(|entry| entry.deadline <= now)
            .map(|entry| (entry.deadline, entry.handle, entry.task.clone()))
            .collect();
        due.sort_by_key(|(deadline, handle, _)| (*deadline, handle.0));

        self.entries.retain(|entry| entry.deadline > now || entry.interval.is_some());
        for entry in &mut self.entries {
            if let Some(interval) = entry.interval
                && entry.deadline <= now
            {
                let next = deadline_after(entry.deadline, interval);
                entry.deadline = if next > now {
                    next
                } else {
                    deadline_after(now, interval)
                };
            }
        }

        if !due.is_empty() {
            trace!(count = due.len(), "Tasks due");
        }

        due.into_iter()
            .map(|(_, handle, task)| (handle, task))
            .collect()
    }

    /// Number of pending tasks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clock driving this queue.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn push(&mut self, delay: Duration, interval: Option<Duration>, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Scheduled {
            handle,
            deadline: deadline_after(self.clock.now(), delay),
            interval,
            task,
        });
        handle
    }
}

/// `from + delay`, saturating at a far-future deadline instead of overflowing.
fn deadline_after(from: Instant, delay: Duration) -> Instant {
    from.checked_add(delay)
        .or_else(|| from.checked_add(FAR_FUTURE))
        .unwrap_or(from)
}
