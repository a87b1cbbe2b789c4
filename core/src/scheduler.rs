//! Cancellable delayed callbacks driven by explicit time advance.
//!
//! Every entry is bound to the epoch current when it was scheduled.
//! `invalidate` drops all pending entries and starts a new epoch, so a
//! callback from a superseded session can never fire.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    epoch: u64,
    id: u64,
}

impl TimerToken {
    #[must_use]
    pub fn epoch(self) -> u64 {
        self.epoch
    }
}

#[derive(Debug)]
struct Entry<T> {
    token: TimerToken,
    due: Duration,
    payload: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    epoch: u64,
    next_id: u64,
    now: Duration,
    pending: Vec<Entry<T>>,
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: 0,
            next_id: 0,
            now: Duration::ZERO,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, delay: Duration, payload: T) -> TimerToken {
        let token = TimerToken {
            epoch: self.epoch,
            id: self.next_id,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(Entry {
            token,
            due: self.now.saturating_add(delay),
            payload,
        });
        token
    }

    /// Returns `false` if the token already fired or was invalidated.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.token != token);
        self.pending.len() != before
    }

    /// Drop everything pending and move to a new epoch.
    ///
    /// Returns how many entries were discarded.
    pub fn invalidate(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        self.epoch = self.epoch.wrapping_add(1);
        dropped
    }

    /// Move time forward and return the payloads that came due, earliest
    /// first; entries with equal deadlines keep scheduling order.
    pub fn advance(&mut self, delta: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(delta);
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|entry| entry.due <= now);
        self.pending = pending;

        due.sort_by_key(|entry| (entry.due, entry.token.id));
        due.into_iter()
            .filter(|entry| entry.token.epoch == self.epoch)
            .map(|entry| entry.payload)
            .collect()
    }

    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|entry| entry.token == token)
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Scheduler;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn fires_only_when_due() {
        let mut scheduler = Scheduler::new();
        let token = scheduler.schedule(ms(300), "summary");

        assert!(scheduler.advance(ms(299)).is_empty());
        assert!(scheduler.is_pending(token));
        assert_eq!(scheduler.advance(ms(1)), vec!["summary"]);
        assert!(!scheduler.is_pending(token));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(ms(500), 'b');
        scheduler.schedule(ms(100), 'a');
        scheduler.schedule(ms(500), 'c');
        assert_eq!(scheduler.advance(ms(1000)), vec!['a', 'b', 'c']);
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::ZERO, 1);
        assert_eq!(scheduler.advance(Duration::ZERO), vec![1]);
    }

    #[test]
    fn cancel_removes_entry() {
        let mut scheduler = Scheduler::new();
        let token = scheduler.schedule(ms(10), ());
        assert!(scheduler.cancel(token));
        assert!(!scheduler.cancel(token));
        assert!(scheduler.advance(ms(20)).is_empty());
    }

    #[test]
    fn invalidate_drops_stale_entries_and_bumps_epoch() {
        let mut scheduler = Scheduler::new();
        let stale = scheduler.schedule(ms(500), "stale");
        scheduler.advance(ms(200));

        assert_eq!(scheduler.invalidate(), 1);
        let fresh = scheduler.schedule(ms(500), "fresh");

        assert_ne!(stale.epoch(), fresh.epoch());
        assert!(scheduler.advance(ms(300)).is_empty());
        assert_eq!(scheduler.advance(ms(200)), vec!["fresh"]);
    }
}
