//! System night-mode authority

use std::sync::Arc;

use umbra_core::{ApiLevel, UiModeType};
use umbra_platform::{NightModeSetting, UiModeService};

/// First platform generation where the system night-mode setting applies
/// outside car mode. Below it, the setting only has platform-level effect
/// while the device is in car mode.
const AUTHORITY_OUTSIDE_CAR_MODE: ApiLevel = ApiLevel::new(23);

/// Decides whether the platform itself owns night-mode switching for a
/// window, bypassing the delegate's manual logic.
pub struct SystemAuthority {
    ui_mode: Arc<dyn UiModeService>,
    api_level: ApiLevel,
}

impl SystemAuthority {
    pub fn new(ui_mode: Arc<dyn UiModeService>, api_level: ApiLevel) -> Self {
        Self { ui_mode, api_level }
    }

    /// True when the system owns the night-mode decision and the delegate
    /// must not drive it manually.
    ///
    /// Fixed policy rule of the platform generations involved: below
    /// [`AUTHORITY_OUTSIDE_CAR_MODE`] the setting only takes platform-level
    /// effect in car mode, so off that path the delegate drives night mode
    /// itself regardless of what the service reports. From that generation
    /// on, or in car mode, any setting other than `Off` is system-controlled.
    pub fn system_controls_night_mode(&self) -> bool {
        if self.api_level < AUTHORITY_OUTSIDE_CAR_MODE
            && self.ui_mode.current_mode_type() != UiModeType::Car
        {
            return false;
        }

        self.ui_mode.night_mode_setting() != NightModeSetting::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_test_suite::FakeUiModeService;

    #[test]
    fn below_threshold_outside_car_mode_system_never_controls() {
        let service = Arc::new(FakeUiModeService::new(
            UiModeType::Normal,
            NightModeSetting::On,
        ));
        let authority = SystemAuthority::new(service.clone(), ApiLevel::new(21));
        assert!(!authority.system_controls_night_mode());

        service.set_current_mode_type(UiModeType::Car);
        assert!(authority.system_controls_night_mode());
    }

    #[test]
    fn below_threshold_in_car_mode_follows_the_setting() {
        let service = Arc::new(FakeUiModeService::new(
            UiModeType::Car,
            NightModeSetting::Automatic,
        ));
        let authority = SystemAuthority::new(service.clone(), ApiLevel::new(21));
        assert!(authority.system_controls_night_mode());

        service.set_night_mode_setting(NightModeSetting::Off);
        assert!(!authority.system_controls_night_mode());
    }

    #[test]
    fn from_threshold_on_any_setting_other_than_off_controls() {
        let service = Arc::new(FakeUiModeService::new(
            UiModeType::Normal,
            NightModeSetting::Automatic,
        ));
        let authority = SystemAuthority::new(service.clone(), ApiLevel::new(23));
        assert!(authority.system_controls_night_mode());

        service.set_night_mode_setting(NightModeSetting::Off);
        assert!(!authority.system_controls_night_mode());
    }
}
