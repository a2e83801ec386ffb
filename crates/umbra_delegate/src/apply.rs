//! Configuration application
//!
//! Maps a resolved night mode onto the window's live display configuration as
//! a read-modify-write transaction over value snapshots; no live alias to
//! platform state is ever retained across calls.

use umbra_core::{Appearance, NightMode};
use umbra_platform::WindowHost;

/// Perturb the font scale during an in-place appearance change to force
/// configuration-keyed resource caches to drop their entries. Workaround for
/// platform generations without a direct cache-invalidation call; the
/// perturbation must never be externally observable.
const FLUSH_RESOURCE_CACHES_ON_APPEARANCE_CHANGE: bool = true;

/// What an apply call did to the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The configuration already carried the target appearance.
    Unchanged,
    /// The configuration was refreshed in place.
    Updated,
    /// The window was destroyed and recreated.
    Recreated,
}

impl ApplyOutcome {
    /// Whether the window's appearance actually changed.
    pub fn changed(self) -> bool {
        !matches!(self, ApplyOutcome::Unchanged)
    }
}

/// Concrete appearance value for a resolved night mode. Unmapped values fall
/// back to `Undefined` rather than failing.
pub fn appearance_for_mode(mode: NightMode) -> Appearance {
    match mode {
        NightMode::No => Appearance::Day,
        NightMode::Yes => Appearance::Night,
        NightMode::Blackout => Appearance::Blackout,
        NightMode::Unspecified | NightMode::Auto => Appearance::Undefined,
    }
}

/// Applies a resolved mode to one window's display configuration.
pub struct ConfigurationApplier<'a> {
    window: &'a dyn WindowHost,
}

impl<'a> ConfigurationApplier<'a> {
    pub fn new(window: &'a dyn WindowHost) -> Self {
        Self { window }
    }

    /// Apply `mode` to the window.
    ///
    /// A no-op when the configuration already carries the target appearance.
    /// `should_recreate` is consulted only when a change is actually needed;
    /// recreation replaces the in-place update entirely. The in-place path
    /// pushes exactly two synchronous updates (the new appearance with a
    /// doubled font scale, then the original font scale restored) and both
    /// must land, in order, for the cache flush to work. Every field other
    /// than the appearance survives unchanged.
    pub fn apply(&self, mode: NightMode, should_recreate: impl FnOnce() -> bool) -> ApplyOutcome {
        let current = self.window.configuration();
        let target = appearance_for_mode(mode);

        if current.appearance == target {
            tracing::trace!("Appearance already {:?}, skipping update", target);
            return ApplyOutcome::Unchanged;
        }

        if should_recreate() {
            tracing::debug!(
                "Appearance changed from {:?} to {:?}, recreating window",
                current.appearance,
                target
            );
            self.window.recreate();
            return ApplyOutcome::Recreated;
        }

        tracing::debug!(
            "Appearance changed from {:?} to {:?}, updating configuration in place",
            current.appearance,
            target
        );
        let original_font_scale = current.font_scale;
        let mut config = current.with_appearance(target);
        if FLUSH_RESOURCE_CACHES_ON_APPEARANCE_CHANGE {
            config.font_scale = original_font_scale * 2.0;
        }
        self.window.update_configuration(config);

        if FLUSH_RESOURCE_CACHES_ON_APPEARANCE_CHANGE {
            config.font_scale = original_font_scale;
            self.window.update_configuration(config);
        }

        ApplyOutcome::Updated
    }
}
