//! Delayed task queue on a logical clock.
//!
//! Each widget owns a [`Timeline`] for its staggered animations and
//! auto-dismissals. Tasks are independent: nothing joins them back to the
//! operation that scheduled them and nothing cancels them. The event loop
//! feeds real elapsed time in through the widgets' `advance` methods, tests
//! feed whatever durations they like.

use std::time::Duration;

#[derive(Debug)]
struct Pending<T> {
    due: Duration,
    seq: u64,
    task: T,
}

#[derive(Debug)]
pub struct Timeline<T> {
    now: Duration,
    seq: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            pending: Vec::new(),
        }
    }

    /// Current position of the clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to run `delay` after the current clock position.
    pub fn after(&mut self, delay: Duration, task: T) {
        let seq = self.seq;
        self.seq += 1;
        self.pending.push(Pending {
            due: self.now + delay,
            seq,
            task,
        });
    }

    /// Take the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's due time, so anything the task schedules
    /// is measured from when it ran rather than from `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let pending = self.pending.swap_remove(idx);
        self.now = self.now.max(pending.due);
        Some(pending.task)
    }

    /// Move the clock forward. Never moves it backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_pops_in_due_order() {
        let mut tl = Timeline::new();
        tl.after(ms(300), "c");
        tl.after(ms(100), "a");
        tl.after(ms(200), "b");

        assert_eq!(tl.pop_due(ms(1000)), Some("a"));
        assert_eq!(tl.now(), ms(100));
        assert_eq!(tl.pop_due(ms(1000)), Some("b"));
        assert_eq!(tl.pop_due(ms(1000)), Some("c"));
        assert_eq!(tl.pop_due(ms(1000)), None);
        assert!(tl.is_idle());
    }

    #[test]
    fn test_ties_run_in_scheduling_order() {
        let mut tl = Timeline::new();
        tl.after(ms(50), 1);
        tl.after(ms(50), 2);
        tl.after(ms(50), 3);
        let order: Vec<_> = std::iter::from_fn(|| tl.pop_due(ms(50))).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_nothing_due_before_its_time() {
        let mut tl = Timeline::new();
        tl.after(ms(500), ());
        assert_eq!(tl.pop_due(ms(499)), None);
        tl.advance_to(ms(499));
        assert_eq!(tl.now(), ms(499));
        assert_eq!(tl.len(), 1);
        assert_eq!(tl.pop_due(ms(500)), Some(()));
    }

    #[test]
    fn test_chained_tasks_are_relative_to_when_they_ran() {
        let mut tl = Timeline::new();
        tl.after(ms(100), "first");
        assert_eq!(tl.pop_due(ms(1000)), Some("first"));
        // scheduled from inside "first", so due at 100 + 300
        tl.after(ms(300), "second");
        assert_eq!(tl.pop_due(ms(399)), None);
        assert_eq!(tl.pop_due(ms(400)), Some("second"));
    }

    #[test]
    fn test_clock_never_goes_back() {
        let mut tl: Timeline<()> = Timeline::new();
        tl.advance_to(ms(200));
        tl.advance_to(ms(100));
        assert_eq!(tl.now(), ms(200));
    }
}
