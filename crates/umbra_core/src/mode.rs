//! Night mode requests

use serde::{Deserialize, Serialize};

/// A requested day/night theme mode for a window.
///
/// `Auto` is resolved at apply time through a twilight oracle; it is never
/// itself written into a live display configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NightMode {
    /// No request recorded; the window keeps whatever it already shows.
    #[default]
    Unspecified,
    /// Force the day theme.
    No,
    /// Force the night theme.
    Yes,
    /// Follow local time of day: night between sunset and sunrise.
    Auto,
    /// Force the blackout variant of the night theme. Manual-only; automatic
    /// resolution never produces this value.
    Blackout,
}

impl NightMode {
    /// Whether a concrete request has been recorded.
    pub const fn is_specified(self) -> bool {
        !matches!(self, NightMode::Unspecified)
    }
}
