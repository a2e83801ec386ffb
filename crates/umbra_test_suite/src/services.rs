//! Fake system services

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use umbra_core::UiModeType;
use umbra_platform::{NightModeSetting, TwilightOracle, UiModeService};

/// Ui-mode service with scripted answers.
pub struct FakeUiModeService {
    mode_type: Mutex<UiModeType>,
    setting: Mutex<NightModeSetting>,
}

impl FakeUiModeService {
    pub fn new(mode_type: UiModeType, setting: NightModeSetting) -> Self {
        Self {
            mode_type: Mutex::new(mode_type),
            setting: Mutex::new(setting),
        }
    }

    pub fn set_current_mode_type(&self, mode_type: UiModeType) {
        *self.mode_type.lock().unwrap() = mode_type;
    }

    pub fn set_night_mode_setting(&self, setting: NightModeSetting) {
        *self.setting.lock().unwrap() = setting;
    }
}

impl UiModeService for FakeUiModeService {
    fn current_mode_type(&self) -> UiModeType {
        *self.mode_type.lock().unwrap()
    }

    fn night_mode_setting(&self) -> NightModeSetting {
        *self.setting.lock().unwrap()
    }
}

/// Twilight oracle with a scripted answer.
pub struct FakeTwilightOracle {
    night: AtomicBool,
}

impl FakeTwilightOracle {
    pub fn new(night: bool) -> Self {
        Self {
            night: AtomicBool::new(night),
        }
    }

    pub fn set_night(&self, night: bool) {
        self.night.store(night, Ordering::Relaxed);
    }
}

impl TwilightOracle for FakeTwilightOracle {
    fn is_night(&self) -> bool {
        self.night.load(Ordering::Relaxed)
    }
}
