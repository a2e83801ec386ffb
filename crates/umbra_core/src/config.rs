//! Display configuration snapshots

use serde::{Deserialize, Serialize};

/// Concrete appearance value carried in a window's display configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    /// No appearance has been written; the platform default applies.
    #[default]
    Undefined,
    /// Day theme.
    Day,
    /// Night theme.
    Night,
    /// Blackout variant of the night theme.
    Blackout,
}

/// Display mode type reported by the platform's ui-mode service and carried
/// in the configuration snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiModeType {
    #[default]
    Normal,
    Desk,
    Car,
    Television,
    Watch,
}

/// Value snapshot of a window's live display configuration.
///
/// The platform owns the live configuration; window hosts hand out copies and
/// accept whole-value updates. The appearance field is the only one this
/// workspace rewrites; every other field must survive an update untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Display mode type the window currently runs under.
    pub mode_type: UiModeType,
    /// Current appearance value.
    pub appearance: Appearance,
    /// User font scale multiplier. 1.0 is the unscaled default.
    pub font_scale: f32,
    /// Device pixel ratio of the output the window sits on.
    pub scale_factor: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode_type: UiModeType::Normal,
            appearance: Appearance::Undefined,
            font_scale: 1.0,
            scale_factor: 1.0,
        }
    }
}

impl DisplayConfig {
    /// Copy of this snapshot with a different appearance, everything else
    /// preserved.
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }
}
