//! Delegate capabilities resolved from platform version facts

use umbra_core::ApiLevel;

/// First platform generation where the compatibility layer drives night mode
/// and presents intercepted action sessions itself.
const COMPAT_APPEARANCE_BASELINE: ApiLevel = ApiLevel::new(14);

/// What this delegate does on the current platform generation.
///
/// Resolved once at construction from [`ApiLevel`] facts; the delegate never
/// re-queries the platform version afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelegateFeatures {
    /// The delegate drives night mode manually when the system does not.
    pub manual_night_mode: bool,
    /// Native action-session starts are rerouted through the compatibility
    /// implementation.
    pub intercept_action_sessions: bool,
}

impl DelegateFeatures {
    /// Resolve the feature set for a platform generation.
    pub fn from_api_level(level: ApiLevel) -> Self {
        let compat_appearance = level >= COMPAT_APPEARANCE_BASELINE;
        Self {
            manual_night_mode: compat_appearance,
            intercept_action_sessions: compat_appearance,
        }
    }
}
