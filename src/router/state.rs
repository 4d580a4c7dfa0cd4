//! Process-wide on/off switch.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global active flag, flipped only by the owner's toggle commands.
///
/// Events are dispatched on concurrent tasks, so a toggle can race with a
/// reply that already passed the gate. That window is accepted; the flag is
/// never persisted and starts active on every launch.
#[derive(Debug)]
pub struct BotState {
    active: AtomicBool,
}

impl BotState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: AtomicBool::new(true),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub fn set_active(&self, active: bool) {
        self.active.store(active, Ordering::Relaxed);
    }
}

impl Default for BotState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_active() {
        assert!(BotState::new().is_active());
        assert!(BotState::default().is_active());
    }

    #[test]
    fn toggles_both_ways() {
        let state = BotState::new();
        state.set_active(false);
        assert!(!state.is_active());
        state.set_active(false);
        assert!(!state.is_active());
        state.set_active(true);
        assert!(state.is_active());
    }
}
