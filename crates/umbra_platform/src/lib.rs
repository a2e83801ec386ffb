//! Umbra Platform Abstraction
//!
//! Contracts between the Umbra delegate and the host platform:
//!
//! - **Services**: the system ui-mode service and the twilight oracle
//! - **Windows**: the window host a delegate drives, and its event callback
//! - **Capabilities**: declared configuration-change handling, looked up per
//!   window identity
//! - **Action sessions**: the native and compatibility contextual-action
//!   protocols the delegate adapts between
//!
//! Every contract is an object-safe trait over bounded synchronous calls on
//! the thread that owns the window. Concrete platform integrations implement
//! these traits; `umbra_test_suite` provides in-memory doubles for tests.

pub mod action_mode;
pub mod capability;
pub mod error;
pub mod services;
pub mod window;

pub use action_mode::{
    ActionId, ActionSession, CompatActionHost, NativeActionSession, NativeSessionCallback,
    SessionCallback, WindowCallback,
};
pub use capability::{CapabilityRegistry, CapabilityTable, DeclaredCapabilities, WindowIdentity};
pub use error::{PlatformError, Result};
pub use services::{NightModeSetting, TwilightOracle, UiModeService};
pub use window::{WindowHost, WindowKind};
