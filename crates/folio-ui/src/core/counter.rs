//! Click-counter game state.

/// Every positive multiple of this value shows a milestone banner.
pub const MILESTONE_EVERY: u32 = 10;

/// Counter value and the best value reached so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count.
    pub value: u32,
    /// Highest count reached since load.
    pub best: u32,
}

impl CounterState {
    /// Add one and update the best score.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        self.best = self.best.max(self.value);
    }

    /// Subtract one; the count never goes below zero.
    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    /// Start over. The best score survives.
    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Whether the current value sits on a milestone.
    #[must_use]
    pub const fn at_milestone(&self) -> bool {
        self.value > 0 && self.value % MILESTONE_EVERY == 0
    }

    /// Banner text for the current value, if it is a milestone.
    #[must_use]
    pub fn milestone_text(&self) -> Option<String> {
        self.at_milestone()
            .then(|| format!("Nice! You reached {}.", self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_floors_at_zero() {
        let mut counter = CounterState::default();
        counter.decrement();
        assert_eq!(counter.value, 0);
        counter.increment();
        counter.decrement();
        counter.decrement();
        assert_eq!(counter.value, 0);
    }

    #[test]
    fn best_survives_reset() {
        let mut counter = CounterState::default();
        for _ in 0..3 {
            counter.increment();
        }
        counter.decrement();
        assert_eq!(counter.value, 2);
        assert_eq!(counter.best, 3);
        counter.reset();
        assert_eq!(counter, CounterState { value: 0, best: 3 });
    }

    #[test]
    fn milestones_fire_on_multiples() {
        let mut counter = CounterState::default();
        assert!(!counter.at_milestone());
        for _ in 0..MILESTONE_EVERY {
            counter.increment();
        }
        assert_eq!(counter.milestone_text().as_deref(), Some("Nice! You reached 10."));
        counter.increment();
        assert_eq!(counter.milestone_text(), None);
    }
}
