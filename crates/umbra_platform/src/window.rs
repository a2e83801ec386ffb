//! Window host contract

use umbra_core::DisplayConfig;

use crate::capability::WindowIdentity;

/// What kind of host a window is, for recreation policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowKind {
    /// A top-level window the platform can destroy and rebuild.
    TopLevel,
    /// A window embedded in a host that owns its lifecycle; never recreated
    /// by the delegate.
    Embedded,
}

/// The live window a delegate drives.
///
/// The platform owns the display configuration; [`configuration`] returns a
/// value snapshot and [`update_configuration`] pushes a whole new value. Both
/// are bounded synchronous calls on the thread that owns the window; the
/// delegate never retains a live alias to platform state across calls.
///
/// [`configuration`]: WindowHost::configuration
/// [`update_configuration`]: WindowHost::update_configuration
pub trait WindowHost {
    /// Identity of the hosting component, for capability lookups.
    fn identity(&self) -> WindowIdentity;

    /// Host kind, for recreation policy.
    fn kind(&self) -> WindowKind;

    /// Value snapshot of the current display configuration.
    fn configuration(&self) -> DisplayConfig;

    /// Push a new display configuration. Resources keyed by the configuration
    /// are re-resolved before the call returns.
    fn update_configuration(&self, config: DisplayConfig);

    /// Destroy and rebuild the window. A normal control transfer, not a
    /// failure: the new window re-applies its appearance during
    /// initialization.
    fn recreate(&self);
}
