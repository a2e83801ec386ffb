//! Platform version facts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform API generation.
///
/// Resolved once at startup and treated as a fact for the lifetime of the
/// process; delegate capabilities and authority thresholds are derived from
/// it at construction, never re-queried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiLevel(u32);

impl ApiLevel {
    /// Create an API level from the platform's reported generation number.
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// The raw generation number.
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
