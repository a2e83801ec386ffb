//! Umbra Test Suite
//!
//! In-memory doubles for every platform contract: fakes that return scripted
//! answers, and recorders that capture what the code under test did to them.
//! Used by the delegate's tests and runnable examples; never a dependency of
//! production code.

pub mod action_mode;
pub mod services;
pub mod window;

pub use action_mode::{
    RecordingActionSession, RecordingCompatActionHost, RecordingNativeCallback,
    RecordingWindowCallback, SessionLog,
};
pub use services::{FakeTwilightOracle, FakeUiModeService};
pub use window::FakeWindowHost;
