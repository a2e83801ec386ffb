//! The appearance delegate

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use umbra_core::{ApiLevel, NightMode};
use umbra_platform::{
    CapabilityRegistry, CompatActionHost, TwilightOracle, UiModeService, WindowCallback, WindowHost,
};

use crate::apply::ConfigurationApplier;
use crate::authority::SystemAuthority;
use crate::features::DelegateFeatures;
use crate::intercept::InterceptingWindowCallback;
use crate::recreate::RecreationPolicy;
use crate::state::{AppearanceState, SavedAppearanceState};

/// Platform collaborators a delegate consumes.
#[derive(Clone)]
pub struct PlatformServices {
    /// System ui-mode service.
    pub ui_mode: Arc<dyn UiModeService>,
    /// Capability declaration lookup.
    pub capabilities: Arc<dyn CapabilityRegistry>,
    /// Compatibility action-session implementation.
    pub action_host: Arc<dyn CompatActionHost>,
    /// Twilight oracle for automatic mode resolution, when available.
    pub twilight: Option<Arc<dyn TwilightOracle>>,
    /// Platform generation, resolved once at startup.
    pub api_level: ApiLevel,
}

/// Day/night appearance delegate for one window.
///
/// Owns the window's appearance state, decides whether the platform or the
/// delegate drives night mode, and applies mode changes to the window's live
/// display configuration. All methods are bounded synchronous calls on the
/// thread that owns the window; they are not reentrant per window, and
/// concurrent use must be serialized by the caller.
pub struct AppearanceDelegate {
    window: Arc<dyn WindowHost>,
    services: PlatformServices,
    authority: SystemAuthority,
    features: DelegateFeatures,
    state: AppearanceState,
    handle_native_action_modes: Arc<AtomicBool>,
}

impl AppearanceDelegate {
    /// Create a delegate for `window`, resolving its feature set from the
    /// platform generation in `services`.
    pub fn new(window: Arc<dyn WindowHost>, services: PlatformServices) -> Self {
        let authority = SystemAuthority::new(Arc::clone(&services.ui_mode), services.api_level);
        let features = DelegateFeatures::from_api_level(services.api_level);
        tracing::debug!(
            "Resolved delegate features for api level {}: {:?}",
            services.api_level,
            features
        );
        Self {
            window,
            authority,
            features,
            services,
            state: AppearanceState::new(),
            handle_native_action_modes: Arc::new(AtomicBool::new(true)),
        }
    }

    /// The feature set resolved at construction.
    pub fn features(&self) -> DelegateFeatures {
        self.features
    }

    /// Store the requested night mode. Pure mutation; takes effect on the
    /// next [`apply_day_night`](Self::apply_day_night).
    pub fn set_night_mode(&mut self, mode: NightMode) {
        self.state.set_requested_mode(mode);
    }

    /// The requested night mode.
    pub fn night_mode(&self) -> NightMode {
        self.state.requested_mode()
    }

    /// Store a window-local override that wins over the requested mode until
    /// cleared with [`NightMode::Unspecified`].
    pub fn set_local_night_mode(&mut self, mode: NightMode) {
        self.state.set_local_night_mode(mode);
    }

    /// The window-local override.
    pub fn local_night_mode(&self) -> NightMode {
        self.state.local_night_mode()
    }

    /// Snapshot the restorable state for persistence across recreation.
    pub fn save_state(&self) -> SavedAppearanceState {
        self.state.save()
    }

    /// Restore a snapshot taken by [`save_state`](Self::save_state).
    pub fn restore_state(&mut self, saved: SavedAppearanceState) {
        self.state.restore(saved);
    }

    /// Apply the current day/night decision to the window.
    ///
    /// Does nothing when the platform generation predates manual night mode
    /// or the system itself controls the switch. Otherwise determines the
    /// effective mode, resolving `Auto` through the twilight oracle, and
    /// hands it to the configuration applier. Returns true when the window's
    /// appearance actually changed, in place or via recreation.
    pub fn apply_day_night(&mut self) -> bool {
        if !self.features.manual_night_mode {
            tracing::trace!("Night mode predates this platform generation, skipping");
            return false;
        }
        if self.authority.system_controls_night_mode() {
            tracing::debug!("System controls night mode, skipping manual apply");
            return false;
        }

        let resolved = match self.state.effective_mode() {
            NightMode::Auto => self.resolve_using_twilight(),
            mode => mode,
        };

        let outcome = {
            let applier = ConfigurationApplier::new(self.window.as_ref());
            let policy = RecreationPolicy::new(self.services.capabilities.as_ref());
            let window = self.window.as_ref();
            let has_applied_once = self.state.has_applied_once();
            applier.apply(resolved, || policy.should_recreate(window, has_applied_once))
        };

        self.state.mark_applied();
        outcome.changed()
    }

    /// Resolve `Auto` through the twilight oracle.
    fn resolve_using_twilight(&self) -> NightMode {
        match &self.services.twilight {
            Some(oracle) if oracle.is_night() => NightMode::Yes,
            Some(_) => NightMode::No,
            None => {
                tracing::warn!(
                    "Automatic night mode requested without a twilight oracle, assuming day"
                );
                NightMode::No
            }
        }
    }

    /// Enable or disable action-session interception. Consulted at call time
    /// by the installed interceptor.
    pub fn set_handle_native_action_modes_enabled(&self, enabled: bool) {
        self.handle_native_action_modes
            .store(enabled, Ordering::Relaxed);
    }

    /// Whether native action sessions are rerouted through the compatibility
    /// implementation.
    pub fn is_handle_native_action_modes_enabled(&self) -> bool {
        self.handle_native_action_modes.load(Ordering::Relaxed)
    }

    /// Wrap the window's event callback; the host window calls this once
    /// during initialization.
    ///
    /// On platform generations with action-session interception this installs
    /// the intercepting decorator; otherwise the callback is returned
    /// unwrapped.
    pub fn wrap_window_callback(
        &self,
        callback: Box<dyn WindowCallback>,
    ) -> Box<dyn WindowCallback> {
        if !self.features.intercept_action_sessions {
            return callback;
        }

        Box::new(InterceptingWindowCallback::new(
            callback,
            Arc::clone(&self.services.action_host),
            Arc::clone(&self.handle_native_action_modes),
        ))
    }
}
