use crate::{Clock, TaskQueue, VirtualClock};

use std::time::Duration;

/// WHAT: One-shot tasks run once their deadline passes, earliest first
/// WHY: The event loop relies on deadline ordering
#[test]
fn given_two_tasks_when_clock_advances_then_due_in_deadline_order() {
    // Given: Two tasks at 20ms and 10ms
    let clock = VirtualClock::new();
    let mut queue = TaskQueue::new(clock.clone());
    queue.schedule_once(Duration::from_millis(20), "late");
    queue.schedule_once(Duration::from_millis(10), "early");

    // When: Nothing has elapsed
    assert!(queue.take_due().is_empty());

    // When: 25ms elapse
    clock.advance(Duration::from_millis(25));
    let due: Vec<&str> = queue.take_due().into_iter().map(|(_, t)| t).collect();

    // Then: Both ran, earliest first, queue drained
    assert_eq!(due, vec!["early", "late"]);
    assert!(queue.is_empty());
}

/// WHAT: Cancelled tasks never run
/// WHY: Cancel tokens guard against callbacks on torn-down state
#[test]
fn given_cancelled_task_when_clock_advances_then_not_due() {
    // Given: A scheduled then cancelled task
    let clock = VirtualClock::new();
    let mut queue = TaskQueue::new(clock.clone());
    let handle = queue.schedule_once(Duration::from_millis(10), 1);

    // When: Cancelling and advancing
    assert!(queue.cancel(handle));
    clock.advance(Duration::from_secs(1));

    // Then: Nothing due, second cancel reports absent
    assert!(queue.take_due().is_empty());
    assert!(!queue.cancel(handle));
}

/// WHAT: Scheduling into an occupied slot replaces the previous task
/// WHY: At most one outstanding task per logical slot
#[test]
fn given_occupied_slot_when_rescheduling_then_previous_cancelled() {
    // Given: A slot holding a task
    let clock = VirtualClock::new();
    let mut queue = TaskQueue::new(clock.clone());
    let mut slot = None;
    queue.schedule_in_slot(&mut slot, Duration::from_millis(10), "first");

    // When: Scheduling again into the same slot
    queue.schedule_in_slot(&mut slot, Duration::from_millis(10), "second");
    clock.advance(Duration::from_millis(10));

    // Then: Only the second runs
    let due: Vec<&str> = queue.take_due().into_iter().map(|(_, t)| t).collect();
    assert_eq!(due, vec!["second"]);
}

/// WHAT: Repeating tasks re-arm after running
/// WHY: Periodic refresh keeps going until cancelled
#[test]
fn given_repeating_task_when_periods_elapse_then_runs_each_period() {
    // Given: A 1s repeating task
    let clock = VirtualClock::new();
    let mut queue = TaskQueue::new(clock.clone());
    let handle = queue.schedule_repeating(Duration::from_secs(1), "tick");

    // When/Then: Due once per elapsed period and still pending
    clock.advance(Duration::from_secs(1));
    assert_eq!(queue.take_due().len(), 1);
    clock.advance(Duration::from_millis(500));
    assert!(queue.take_due().is_empty());
    clock.advance(Duration::from_millis(500));
    assert_eq!(queue.take_due().len(), 1);
    assert_eq!(queue.len(), 1);

    // When/Then: Cancelling stops it
    queue.cancel(handle);
    clock.advance(Duration::from_secs(5));
    assert!(queue.take_due().is_empty());
}

/// WHAT: Delays beyond the representable range saturate instead of overflowing
/// WHY: Delays come from the user's config file and may be arbitrarily large
#[test]
fn given_enormous_delays_when_scheduling_then_far_future_deadline() {
    // Given: A queue and delays of the maximum duration
    let clock = VirtualClock::new();
    let mut queue = TaskQueue::new(clock.clone());
    let start = clock.now();

    // When: Scheduling a one-shot and a repeating task with them
    queue.schedule_once(Duration::MAX, "once");
    queue.schedule_repeating(Duration::from_secs(u64::MAX), "repeating");

    // Then: Both are pending with a deadline in the future
    assert_eq!(queue.len(), 2);
    assert!(queue.next_deadline().is_some_and(|deadline| deadline > start));

    // When: A day passes
    clock.advance(Duration::from_secs(86_400));

    // Then: Nothing is due yet
    assert!(queue.take_due().is_empty());
    assert_eq!(queue.len(), 2);
}
