//! Deferred cosmetic effects.
//!
//! Effects are scheduled after a state change has already been committed
//! and only ever touch the view. The event loop drains due effects on
//! every tick.

use std::time::{Duration, Instant};
use tracing::{instrument, trace};

/// A presentation change applied after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Show the status line at full intensity.
    FadeInStatus,
    /// Make the strike-through line visible.
    RevealStrike,
}

/// Queue of effects waiting for their due time.
#[derive(Debug, Clone, Default)]
pub struct Effects {
    pending: Vec<(Instant, Effect)>,
}

impl Effects {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `effect` at `now + delay`, replacing any pending instance
    /// of the same effect.
    #[instrument(skip(self, now))]
    pub fn schedule(&mut self, now: Instant, delay: Duration, effect: Effect) {
        self.cancel(effect);
        self.pending.push((now + delay, effect));
    }

    /// Drops any pending instance of `effect`.
    pub fn cancel(&mut self, effect: Effect) {
        self.pending.retain(|(_, e)| *e != effect);
    }

    /// Drops everything.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Removes and returns effects due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Effect> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|(at, _)| *at <= now);
        self.pending = waiting;
        due.sort_by_key(|(at, _)| *at);
        if !due.is_empty() {
            trace!(count = due.len(), "Applying due effects");
        }
        due.into_iter().map(|(_, effect)| effect).collect()
    }

    /// Whether `effect` is waiting.
    pub fn is_pending(&self, effect: Effect) -> bool {
        self.pending.iter().any(|(_, e)| *e == effect)
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_fires_only_when_due() {
        let start = Instant::now();
        let mut effects = Effects::new();
        effects.schedule(start, Duration::from_millis(300), Effect::FadeInStatus);

        assert!(effects.take_due(start + Duration::from_millis(299)).is_empty());
        assert_eq!(
            effects.take_due(start + Duration::from_millis(300)),
            vec![Effect::FadeInStatus]
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let start = Instant::now();
        let mut effects = Effects::new();
        effects.schedule(start, Duration::from_millis(10), Effect::FadeInStatus);
        effects.schedule(start, Duration::from_millis(500), Effect::FadeInStatus);

        assert!(effects.take_due(start + Duration::from_millis(100)).is_empty());
        assert!(effects.is_pending(Effect::FadeInStatus));
    }

    #[test]
    fn test_due_effects_in_time_order() {
        let start = Instant::now();
        let mut effects = Effects::new();
        effects.schedule(start, Duration::from_millis(300), Effect::FadeInStatus);
        effects.schedule(start, Duration::from_millis(50), Effect::RevealStrike);

        assert_eq!(
            effects.take_due(start + Duration::from_secs(1)),
            vec![Effect::RevealStrike, Effect::FadeInStatus]
        );
    }
}
