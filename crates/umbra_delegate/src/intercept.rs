//! Window callback interception
//!
//! Decorator over a window's event callback that reroutes native contextual
//! action sessions through the compatibility implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use umbra_platform::{
    ActionId, ActionSession, CompatActionHost, NativeActionSession, NativeSessionCallback,
    SessionCallback, WindowCallback,
};

/// Decorator over the window's original callback.
///
/// Every event is forwarded to the wrapped callback; the one overridden
/// behavior is the action-session start, gated at call time by the shared
/// interception flag.
pub struct InterceptingWindowCallback {
    wrapped: Box<dyn WindowCallback>,
    action_host: Arc<dyn CompatActionHost>,
    handle_native_action_modes: Arc<AtomicBool>,
}

impl InterceptingWindowCallback {
    pub fn new(
        wrapped: Box<dyn WindowCallback>,
        action_host: Arc<dyn CompatActionHost>,
        handle_native_action_modes: Arc<AtomicBool>,
    ) -> Self {
        Self {
            wrapped,
            action_host,
            handle_native_action_modes,
        }
    }

    /// Start the session through the compatibility host.
    ///
    /// Returns `None` when the host declines, so the caller can fall back to
    /// the wrapped callback instead of dropping the event.
    fn start_as_compat_session(
        &self,
        callback: &Arc<dyn NativeSessionCallback>,
    ) -> Option<Box<dyn NativeActionSession>> {
        let adapter = NativeCallbackAdapter::new(Arc::clone(callback));
        let session = self.action_host.start_session(Box::new(adapter))?;
        Some(Box::new(CompatSessionBridge::new(session)))
    }
}

impl WindowCallback for InterceptingWindowCallback {
    fn window_focus_changed(&mut self, focused: bool) {
        self.wrapped.window_focus_changed(focused);
    }

    fn content_changed(&mut self) {
        self.wrapped.content_changed();
    }

    fn action_session_starting(
        &mut self,
        callback: Arc<dyn NativeSessionCallback>,
    ) -> Option<Box<dyn NativeActionSession>> {
        if !self.handle_native_action_modes.load(Ordering::Relaxed) {
            return self.wrapped.action_session_starting(callback);
        }

        match self.start_as_compat_session(&callback) {
            Some(session) => Some(session),
            // The host declined; let the event fall through to the wrapped
            // callback rather than dropping it.
            None => self.wrapped.action_session_starting(callback),
        }
    }
}

/// Presents a native session callback to the compatibility host.
///
/// Each lifecycle call wraps the compatibility session in a borrowed
/// native-protocol view, so session operations issued by the native callback
/// land on the compatibility session underneath.
pub struct NativeCallbackAdapter {
    native: Arc<dyn NativeSessionCallback>,
}

impl NativeCallbackAdapter {
    pub fn new(native: Arc<dyn NativeSessionCallback>) -> Self {
        Self { native }
    }
}

impl SessionCallback for NativeCallbackAdapter {
    fn on_create(&self, session: &mut dyn ActionSession) -> bool {
        self.native.on_create(&mut NativeSessionView { inner: session })
    }

    fn on_prepare(&self, session: &mut dyn ActionSession) -> bool {
        self.native.on_prepare(&mut NativeSessionView { inner: session })
    }

    fn on_action(&self, session: &mut dyn ActionSession, action: ActionId) -> bool {
        self.native
            .on_action(&mut NativeSessionView { inner: session }, action)
    }

    fn on_destroy(&self, session: &mut dyn ActionSession) {
        self.native.on_destroy(&mut NativeSessionView { inner: session });
    }
}

/// Borrowed native-protocol view of a compatibility session, built per call.
struct NativeSessionView<'a> {
    inner: &'a mut dyn ActionSession,
}

impl NativeActionSession for NativeSessionView<'_> {
    fn set_title(&mut self, title: &str) {
        self.inner.set_title(title);
    }

    fn invalidate(&mut self) {
        self.inner.invalidate();
    }

    fn finish(&mut self) {
        self.inner.finish();
    }
}

/// Owned native-protocol wrapper around a running compatibility session.
///
/// What the window gets back from an intercepted start: it speaks the native
/// protocol while the compatibility session underneath does the work.
pub struct CompatSessionBridge {
    inner: Box<dyn ActionSession>,
}

impl CompatSessionBridge {
    pub fn new(inner: Box<dyn ActionSession>) -> Self {
        Self { inner }
    }
}

impl NativeActionSession for CompatSessionBridge {
    fn set_title(&mut self, title: &str) {
        self.inner.set_title(title);
    }

    fn invalidate(&mut self) {
        self.inner.invalidate();
    }

    fn finish(&mut self) {
        self.inner.finish();
    }
}
