//! Umbra Core Values
//!
//! Foundational value types shared across the Umbra workspace:
//!
//! - **Night mode requests**: what a caller asked a window to look like
//!   ([`NightMode`])
//! - **Display configuration**: the platform-owned snapshot a window renders
//!   under ([`DisplayConfig`], [`Appearance`], [`UiModeType`])
//! - **Platform version facts**: the API generation that delegate capabilities
//!   are resolved from ([`ApiLevel`])
//!
//! Everything here is plain data with invariants. Platform calls live behind
//! the traits in `umbra_platform`; control logic lives in `umbra_delegate`.

pub mod config;
pub mod mode;
pub mod version;

pub use config::{Appearance, DisplayConfig, UiModeType};
pub use mode::NightMode;
pub use version::ApiLevel;
