use std::time::Duration;

use tokio::time::Instant;

/// Debounce followed by distinct-until-changed, as an explicit state machine.
///
/// The caller owns the clock: it feeds inputs with [`on_input`](Self::on_input),
/// sleeps until [`deadline`](Self::deadline) and then calls
/// [`on_timer`](Self::on_timer). Nothing here sleeps or spawns.
#[derive(Debug)]
pub struct SearchPipeline<T> {
    window: Duration,
    pending: Option<Pending<T>>,
    last_emitted: Option<T>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T: PartialEq + Clone> SearchPipeline<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            last_emitted: None,
        }
    }

    /// A newer value replaces the pending one and restarts the quiet period.
    pub fn on_input(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            deadline: now + self.window,
        });
    }

    /// When the pending value becomes eligible, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Emits the pending value once its quiet period has elapsed,
    /// unless it equals the previously emitted value.
    pub fn on_timer(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => {}
            _ => return None,
        }
        let pending = self.pending.take()?;
        self.admit(pending.value)
    }

    /// Input ended: release the pending value without waiting.
    pub fn flush(&mut self) -> Option<T> {
        let pending = self.pending.take()?;
        self.admit(pending.value)
    }

    fn admit(&mut self, value: T) -> Option<T> {
        if self.last_emitted.as_ref() == Some(&value) {
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }
}
