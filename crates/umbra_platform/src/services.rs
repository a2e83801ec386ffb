//! System service contracts

use umbra_core::UiModeType;

/// System-level night mode setting reported by the ui-mode service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NightModeSetting {
    /// The system never forces the night theme.
    #[default]
    Off,
    /// The system forces the night theme.
    On,
    /// The system toggles the night theme from its own twilight schedule.
    Automatic,
}

/// The platform's system-level ui-mode service.
pub trait UiModeService {
    /// Current display mode type of the device.
    fn current_mode_type(&self) -> UiModeType;

    /// Current system night mode setting.
    fn night_mode_setting(&self) -> NightModeSetting;
}

/// Answers "is it currently night" for automatic mode resolution.
///
/// The twilight computation itself (sun position, last known location) is an
/// external concern; the delegate only consumes the predicate.
pub trait TwilightOracle {
    /// Whether local time is currently between sunset and sunrise.
    fn is_night(&self) -> bool;
}
