//! Deterministic virtual-time scheduling.
//!
//! Every delayed behaviour on the site (notification auto-dismiss, the
//! post-submit redirect, filter fade transitions, the newsletter round-trip)
//! is a fire-once task registered with a [`Timers`] owned by the controller
//! that needs it. Nothing reads a wall clock: the host calls
//! [`Timers::advance`] and receives the tasks that came due, so tests can step
//! through a transition to the millisecond.

use std::time::Duration;

/// Handle to a scheduled task, usable with [`Timers::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    due: Duration,
    task: T,
}

/// A queue of fire-once tasks keyed by virtual deadline.
#[derive(Debug)]
pub struct Timers<T> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Virtual time elapsed since this queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: self.now + delay,
            task,
        });
        id
    }

    /// Remove a pending task. Returns it if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let pos = self.pending.iter().position(|p| p.id == id)?;
        Some(self.pending.remove(pos).task)
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Number of tasks still waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move time forward by `by` and return every task now due.
    ///
    /// Tasks come back in deadline order; tasks sharing a deadline come back
    /// in the order they were scheduled.
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        self.now += by;
        let now = self.now;
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due, p.id));
        due.into_iter().map(|p| p.task).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut timers = Timers::new();
        timers.schedule(ms(100), "a");
        assert!(timers.advance(ms(99)).is_empty());
        assert_eq!(timers.advance(ms(1)), vec!["a"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn fires_in_deadline_then_schedule_order() {
        let mut timers = Timers::new();
        timers.schedule(ms(300), "late");
        timers.schedule(ms(100), "first");
        timers.schedule(ms(100), "second");
        assert_eq!(timers.advance(ms(500)), vec!["first", "second", "late"]);
    }

    #[test]
    fn deadlines_are_relative_to_schedule_time() {
        let mut timers = Timers::new();
        timers.advance(ms(1000));
        timers.schedule(ms(50), 1);
        assert_eq!(timers.now(), ms(1000));
        assert!(timers.advance(ms(49)).is_empty());
        assert_eq!(timers.advance(ms(1)), vec![1]);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut timers = Timers::new();
        let id = timers.schedule(ms(10), "gone");
        timers.schedule(ms(10), "kept");
        assert_eq!(timers.cancel(id), Some("gone"));
        assert!(!timers.is_pending(id));
        assert_eq!(timers.advance(ms(10)), vec!["kept"]);
    }

    #[test]
    fn cancel_after_fire_is_none() {
        let mut timers = Timers::new();
        let id = timers.schedule(ms(1), ());
        timers.advance(ms(1));
        assert_eq!(timers.cancel(id), None);
    }
}
