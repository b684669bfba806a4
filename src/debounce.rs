//! Trailing debounce for the weight and reps inputs.
//!
//! Each field is tracked on its own timer: a change arms (or re-arms) that
//! field's deadline, and the value is committed only once the field has been
//! quiet for the whole window. Last value wins.

use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Debounce state of a single field.
#[derive(Debug, Clone, PartialEq)]
enum FieldState<T> {
    Idle,
    Pending { value: T, deadline: Instant },
}

/// Debouncer for one field, driven by explicit timestamps.
#[derive(Debug)]
pub struct DebouncedField<T> {
    window: Duration,
    state: FieldState<T>,
}

impl<T> DebouncedField<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: FieldState::Idle,
        }
    }

    /// Records a raw change, replacing any pending value and restarting the window.
    pub fn push(&mut self, value: T, now: Instant) {
        self.state = FieldState::Pending {
            value,
            deadline: now + self.window,
        };
    }

    /// Returns when the pending value will commit, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            FieldState::Idle => None,
            FieldState::Pending { deadline, .. } => Some(deadline),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, FieldState::Pending { .. })
    }

    /// Takes the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if deadline <= now => {
                match std::mem::replace(&mut self.state, FieldState::Idle) {
                    FieldState::Pending { value, .. } => Some(value),
                    FieldState::Idle => None,
                }
            }
            _ => None,
        }
    }

    /// Drops any pending value without committing it.
    ///
    /// Returns true if something was pending.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = FieldState::Idle;
        was_pending
    }
}

/// A settled input value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Commit {
    Weight(f64),
    Reps(u32),
}

/// Debouncer for the calculator's numeric inputs.
#[derive(Debug)]
pub struct InputDebouncer {
    weight: DebouncedField<f64>,
    reps: DebouncedField<u32>,
}

impl InputDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            weight: DebouncedField::new(window),
            reps: DebouncedField::new(window),
        }
    }

    pub fn push_weight(&mut self, weight_kg: f64) {
        self.weight.push(weight_kg, Instant::now());
    }

    pub fn push_reps(&mut self, reps: u32) {
        self.reps.push(reps, Instant::now());
    }

    /// Returns the earliest pending deadline across both fields.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.weight.deadline(), self.reps.deadline()) {
            (Some(w), Some(r)) => Some(w.min(r)),
            (w, r) => w.or(r),
        }
    }

    /// Commits whatever has settled by `now`, weight first.
    fn poll(&mut self, now: Instant) -> Option<Commit> {
        if let Some(weight) = self.weight.poll(now) {
            return Some(Commit::Weight(weight));
        }
        self.reps.poll(now).map(Commit::Reps)
    }

    /// Waits for the next field to settle.
    ///
    /// Never resolves while both fields are idle. Cancel-safe: dropping the
    /// future leaves pending values untouched.
    pub async fn settled(&mut self) -> Commit {
        loop {
            match self.next_deadline() {
                Some(deadline) => {
                    sleep_until(deadline).await;
                    if let Some(commit) = self.poll(Instant::now()) {
                        log::debug!("Debounce committed {:?}", commit);
                        return commit;
                    }
                }
                None => std::future::pending::<()>().await,
            }
        }
    }

    /// Cancels all pending commits. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let canceled = usize::from(self.weight.cancel()) + usize::from(self.reps.cancel());
        if canceled > 0 {
            log::debug!("Canceled {} pending input commit(s)", canceled);
        }
        canceled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(220);

    #[test]
    fn test_field_starts_idle() {
        let field: DebouncedField<f64> = DebouncedField::new(WINDOW);
        assert!(!field.is_pending());
        assert_eq!(field.deadline(), None);
    }

    #[test]
    fn test_field_commits_after_window() {
        let start = Instant::now();
        let mut field = DebouncedField::new(WINDOW);
        field.push(110.0, start);

        assert!(field.is_pending());
        assert_eq!(field.poll(start + Duration::from_millis(219)), None);
        assert_eq!(field.poll(start + WINDOW), Some(110.0));
        assert!(!field.is_pending());
        assert_eq!(field.poll(start + WINDOW * 2), None);
    }

    #[test]
    fn test_field_push_restarts_window_last_value_wins() {
        let start = Instant::now();
        let mut field = DebouncedField::new(WINDOW);
        field.push(105.0, start);
        field.push(110.0, start + Duration::from_millis(200));

        // The first deadline has passed but was superseded
        assert_eq!(field.poll(start + WINDOW), None);
        assert_eq!(field.deadline(), Some(start + Duration::from_millis(420)));
        assert_eq!(field.poll(start + Duration::from_millis(420)), Some(110.0));
    }

    #[test]
    fn test_field_cancel_discards_value() {
        let start = Instant::now();
        let mut field = DebouncedField::new(WINDOW);
        field.push(7u32, start);

        assert!(field.cancel());
        assert!(!field.cancel());
        assert_eq!(field.poll(start + WINDOW), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_weight_changes_commit_once() {
        let mut debouncer = InputDebouncer::new(WINDOW);
        for weight in [101.0, 102.5, 104.0, 120.0] {
            debouncer.push_weight(weight);
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        assert_eq!(debouncer.settled().await, Commit::Weight(120.0));
        assert_eq!(debouncer.next_deadline(), None);

        let extra = tokio::time::timeout(Duration::from_secs(5), debouncer.settled()).await;
        assert!(extra.is_err(), "no further commits expected");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fields_debounce_independently() {
        let start = Instant::now();
        let mut debouncer = InputDebouncer::new(WINDOW);
        debouncer.push_weight(90.0);

        tokio::time::sleep(Duration::from_millis(150)).await;
        debouncer.push_reps(8);

        // The reps change must not delay the weight commit
        assert_eq!(debouncer.settled().await, Commit::Weight(90.0));
        let weight_elapsed = Instant::now() - start;
        assert!(weight_elapsed >= WINDOW);
        assert!(weight_elapsed < Duration::from_millis(150) + WINDOW);

        assert_eq!(debouncer.settled().await, Commit::Reps(8));
        assert!(Instant::now() - start >= Duration::from_millis(150) + WINDOW);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_prevents_commit() {
        let mut debouncer = InputDebouncer::new(WINDOW);
        debouncer.push_weight(80.0);
        debouncer.push_reps(3);

        assert_eq!(debouncer.cancel_all(), 2);
        assert_eq!(debouncer.cancel_all(), 0);

        let result = tokio::time::timeout(WINDOW * 4, debouncer.settled()).await;
        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_is_cancel_safe() {
        let mut debouncer = InputDebouncer::new(WINDOW);
        debouncer.push_reps(12);

        let early = tokio::time::timeout(Duration::from_millis(100), debouncer.settled()).await;
        assert!(early.is_err());

        assert_eq!(debouncer.settled().await, Commit::Reps(12));
    }
}
