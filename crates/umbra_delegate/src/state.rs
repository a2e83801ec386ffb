//! Per-window appearance state

use serde::{Deserialize, Serialize};
use umbra_core::NightMode;

/// Suggested storage key for persisting [`SavedAppearanceState`] across
/// window recreation. The persistence mechanism itself belongs to the caller.
pub const SAVED_STATE_KEY: &str = "umbra:local_night_mode";

/// Restorable snapshot of the per-window appearance state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAppearanceState {
    /// The window-local night mode override in effect when the snapshot was
    /// taken.
    pub local_night_mode: NightMode,
}

/// Appearance state owned by a single window's delegate.
///
/// Never shared across windows. `has_applied_once` transitions false→true
/// exactly once and is never reset for the lifetime of the window instance.
#[derive(Clone, Copy, Debug)]
pub struct AppearanceState {
    requested_mode: NightMode,
    local_night_mode: NightMode,
    has_applied_once: bool,
}

impl Default for AppearanceState {
    fn default() -> Self {
        Self {
            requested_mode: NightMode::Auto,
            local_night_mode: NightMode::Unspecified,
            has_applied_once: false,
        }
    }
}

impl AppearanceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mode the caller last requested.
    pub fn requested_mode(&self) -> NightMode {
        self.requested_mode
    }

    pub fn set_requested_mode(&mut self, mode: NightMode) {
        self.requested_mode = mode;
    }

    /// The window-local override, `Unspecified` when none is set.
    pub fn local_night_mode(&self) -> NightMode {
        self.local_night_mode
    }

    pub fn set_local_night_mode(&mut self, mode: NightMode) {
        self.local_night_mode = mode;
    }

    /// The mode an apply should resolve: the local override when one is set,
    /// the requested mode otherwise.
    pub fn effective_mode(&self) -> NightMode {
        if self.local_night_mode.is_specified() {
            self.local_night_mode
        } else {
            self.requested_mode
        }
    }

    pub fn has_applied_once(&self) -> bool {
        self.has_applied_once
    }

    /// Record that an apply completed. Monotonic: once set, stays set.
    pub fn mark_applied(&mut self) {
        self.has_applied_once = true;
    }

    /// Snapshot for persistence across window recreation.
    pub fn save(&self) -> SavedAppearanceState {
        SavedAppearanceState {
            local_night_mode: self.local_night_mode,
        }
    }

    /// Restore a persisted snapshot. Leaves `has_applied_once` untouched: the
    /// new window instance has not applied anything yet.
    pub fn restore(&mut self, saved: SavedAppearanceState) {
        self.local_night_mode = saved.local_night_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_override_wins_over_requested_mode() {
        let mut state = AppearanceState::new();
        assert_eq!(state.effective_mode(), NightMode::Auto);

        state.set_requested_mode(NightMode::No);
        state.set_local_night_mode(NightMode::Yes);
        assert_eq!(state.effective_mode(), NightMode::Yes);

        state.set_local_night_mode(NightMode::Unspecified);
        assert_eq!(state.effective_mode(), NightMode::No);
    }

    #[test]
    fn mark_applied_is_monotonic() {
        let mut state = AppearanceState::new();
        assert!(!state.has_applied_once());

        state.mark_applied();
        state.restore(SavedAppearanceState::default());
        assert!(state.has_applied_once());
    }

    #[test]
    fn save_and_restore_round_trip_the_local_override() {
        let mut state = AppearanceState::new();
        state.set_local_night_mode(NightMode::Blackout);

        let saved = state.save();
        let mut fresh = AppearanceState::new();
        fresh.restore(saved);

        assert_eq!(fresh.local_night_mode(), NightMode::Blackout);
        assert!(!fresh.has_applied_once());
    }
}
