//! Contextual action session protocols
//!
//! Two mirrored contracts: the native protocol spoken by the platform window,
//! and the compatibility protocol spoken by the library's own action-session
//! implementation. The delegate installs an adapter between them so a session
//! started by the window is rendered by the compatibility implementation while
//! the window's own callback keeps driving it.

use std::sync::Arc;

/// Identifier for an action invoked inside a session.
pub type ActionId = u32;

/// Native-protocol contextual action session.
pub trait NativeActionSession {
    /// Set the session title.
    fn set_title(&mut self, title: &str);

    /// Ask the session to refresh its presented actions.
    fn invalidate(&mut self);

    /// End the session.
    fn finish(&mut self);
}

/// Native-protocol callback driving a session's lifecycle.
pub trait NativeSessionCallback {
    /// Session created. Return false to abort it.
    fn on_create(&self, session: &mut dyn NativeActionSession) -> bool;

    /// Session about to be presented again. Return true if anything changed.
    fn on_prepare(&self, session: &mut dyn NativeActionSession) -> bool;

    /// An action was invoked. Return true when handled.
    fn on_action(&self, session: &mut dyn NativeActionSession, action: ActionId) -> bool;

    /// Session ended.
    fn on_destroy(&self, session: &mut dyn NativeActionSession);
}

/// Compatibility-protocol contextual action session.
pub trait ActionSession {
    /// Set the session title.
    fn set_title(&mut self, title: &str);

    /// Ask the session to refresh its presented actions.
    fn invalidate(&mut self);

    /// End the session.
    fn finish(&mut self);
}

/// Compatibility-protocol callback driving a session's lifecycle.
pub trait SessionCallback {
    /// Session created. Return false to abort it.
    fn on_create(&self, session: &mut dyn ActionSession) -> bool;

    /// Session about to be presented again. Return true if anything changed.
    fn on_prepare(&self, session: &mut dyn ActionSession) -> bool;

    /// An action was invoked. Return true when handled.
    fn on_action(&self, session: &mut dyn ActionSession, action: ActionId) -> bool;

    /// Session ended.
    fn on_destroy(&self, session: &mut dyn ActionSession);
}

/// The compatibility library's action-session implementation.
pub trait CompatActionHost {
    /// Start a session driven by `callback`.
    ///
    /// Returns `None` when the host declines to present one; the caller is
    /// responsible for falling back to the native path in that case.
    fn start_session(&self, callback: Box<dyn SessionCallback>) -> Option<Box<dyn ActionSession>>;
}

/// The window's event callback.
///
/// Hosts implement the events they care about; every method carries a
/// do-nothing default so implementations stay minimal. Decorators wrap a
/// callback and forward each event to it.
pub trait WindowCallback {
    /// The window gained or lost focus.
    fn window_focus_changed(&mut self, focused: bool) {
        let _ = focused;
    }

    /// The window's content view was replaced.
    fn content_changed(&mut self) {}

    /// The window is starting a native contextual action session.
    ///
    /// Returning `None` lets the window present its own session UI.
    fn action_session_starting(
        &mut self,
        callback: Arc<dyn NativeSessionCallback>,
    ) -> Option<Box<dyn NativeActionSession>> {
        let _ = callback;
        None
    }
}
