//! Recording action-session doubles

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use umbra_platform::{
    ActionId, ActionSession, CompatActionHost, NativeActionSession, NativeSessionCallback,
    SessionCallback, WindowCallback,
};

/// Shared log of recorded operations, in call order.
pub type SessionLog = Arc<Mutex<Vec<String>>>;

/// Compatibility host that can be scripted to accept or decline sessions.
///
/// Accepted sessions record their operations into the host's shared log, and
/// every callback handed to `start_session` is captured so tests can drive
/// the compatibility side of the protocol themselves.
pub struct RecordingCompatActionHost {
    accept: AtomicBool,
    started: AtomicUsize,
    log: SessionLog,
    callbacks: Mutex<Vec<Box<dyn SessionCallback>>>,
}

impl RecordingCompatActionHost {
    pub fn new(accept: bool) -> Self {
        Self {
            accept: AtomicBool::new(accept),
            started: AtomicUsize::new(0),
            log: Arc::new(Mutex::new(Vec::new())),
            callbacks: Mutex::new(Vec::new()),
        }
    }

    pub fn set_accept(&self, accept: bool) {
        self.accept.store(accept, Ordering::Relaxed);
    }

    /// Number of sessions this host was asked to start.
    pub fn start_count(&self) -> usize {
        self.started.load(Ordering::Relaxed)
    }

    /// Operations recorded by sessions this host handed out.
    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Take the most recently captured session callback.
    pub fn last_callback(&self) -> Option<Box<dyn SessionCallback>> {
        self.callbacks.lock().unwrap().pop()
    }
}

impl CompatActionHost for RecordingCompatActionHost {
    fn start_session(&self, callback: Box<dyn SessionCallback>) -> Option<Box<dyn ActionSession>> {
        self.started.fetch_add(1, Ordering::Relaxed);
        self.callbacks.lock().unwrap().push(callback);

        if !self.accept.load(Ordering::Relaxed) {
            return None;
        }
        Some(Box::new(RecordingActionSession::new(Arc::clone(&self.log))))
    }
}

/// Compatibility session that records its operations into a shared log.
pub struct RecordingActionSession {
    log: SessionLog,
}

impl RecordingActionSession {
    pub fn new(log: SessionLog) -> Self {
        Self { log }
    }
}

impl ActionSession for RecordingActionSession {
    fn set_title(&mut self, title: &str) {
        self.log.lock().unwrap().push(format!("set_title:{title}"));
    }

    fn invalidate(&mut self) {
        self.log.lock().unwrap().push("invalidate".to_string());
    }

    fn finish(&mut self) {
        self.log.lock().unwrap().push("finish".to_string());
    }
}

/// Native session callback that records its lifecycle calls.
pub struct RecordingNativeCallback {
    log: SessionLog,
}

impl RecordingNativeCallback {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Calls recorded so far.
    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    /// Shared handle to the log, usable after the callback is handed off.
    pub fn log_handle(&self) -> SessionLog {
        Arc::clone(&self.log)
    }
}

impl Default for RecordingNativeCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeSessionCallback for RecordingNativeCallback {
    fn on_create(&self, _session: &mut dyn NativeActionSession) -> bool {
        self.log.lock().unwrap().push("on_create".to_string());
        true
    }

    fn on_prepare(&self, _session: &mut dyn NativeActionSession) -> bool {
        self.log.lock().unwrap().push("on_prepare".to_string());
        true
    }

    fn on_action(&self, _session: &mut dyn NativeActionSession, action: ActionId) -> bool {
        self.log.lock().unwrap().push(format!("on_action:{action}"));
        true
    }

    fn on_destroy(&self, _session: &mut dyn NativeActionSession) {
        self.log.lock().unwrap().push("on_destroy".to_string());
    }
}

/// Window callback that records every event forwarded to it.
pub struct RecordingWindowCallback {
    events: SessionLog,
}

impl RecordingWindowCallback {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Events recorded so far.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    /// Shared handle to the events, usable after the callback is boxed and
    /// handed to a decorator.
    pub fn events_handle(&self) -> SessionLog {
        Arc::clone(&self.events)
    }
}

impl Default for RecordingWindowCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowCallback for RecordingWindowCallback {
    fn window_focus_changed(&mut self, focused: bool) {
        self.events.lock().unwrap().push(format!("focus:{focused}"));
    }

    fn content_changed(&mut self) {
        self.events.lock().unwrap().push("content_changed".to_string());
    }

    fn action_session_starting(
        &mut self,
        _callback: Arc<dyn NativeSessionCallback>,
    ) -> Option<Box<dyn NativeActionSession>> {
        self.events
            .lock()
            .unwrap()
            .push("action_session_starting".to_string());
        None
    }
}
