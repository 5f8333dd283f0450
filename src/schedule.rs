//! Virtual-clock timer queue for deferred continuations.

use alloc::vec::Vec;
use core::time::Duration;

#[derive(Debug, Clone)]
struct Timer<T> {
    seq: u64,
    due: Duration,
    task: T,
}

/// Queue of tasks due at points on a virtual clock.
///
/// The clock only moves when the host advances it. Tasks due at the same
/// instant run in scheduling order.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use chestrs::schedule::TimerQueue;
///
/// let mut queue = TimerQueue::new();
/// queue.schedule(Duration::from_secs(2), "late");
/// queue.schedule(Duration::from_secs(1), "early");
///
/// let until = Duration::from_secs(3);
/// assert_eq!(queue.pop_due(until), Some("early"));
/// assert_eq!(queue.pop_due(until), Some("late"));
/// assert_eq!(queue.pop_due(until), None);
/// ```
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: Vec<Timer<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether no task is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedules `task` to run `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Timer {
            seq,
            due: self.now.saturating_add(delay),
            task,
        });
    }

    /// Removes the earliest task due at or before `until`.
    ///
    /// The clock moves forward to the task's due time, so tasks scheduled
    /// while running it are timed from that instant.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (position, due) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(position, timer)| (position, timer.due))?;

        self.now = self.now.max(due);
        Some(self.pending.remove(position).task)
    }

    /// Moves the clock to `until` without running anything.
    ///
    /// The clock never moves backwards.
    pub fn settle_at(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drops every task for which `keep` returns `false`.
    ///
    /// Returns how many tasks were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|timer| keep(&timer.task));
        before - self.pending.len()
    }
}
