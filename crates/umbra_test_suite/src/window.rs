//! Fake window host

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use umbra_core::DisplayConfig;
use umbra_platform::{WindowHost, WindowIdentity, WindowKind};

/// Window host that records every configuration push and recreation.
///
/// The live configuration reflects the most recent push, like the platform's
/// real configuration object.
pub struct FakeWindowHost {
    identity: WindowIdentity,
    kind: WindowKind,
    config: Mutex<DisplayConfig>,
    updates: Mutex<Vec<DisplayConfig>>,
    recreations: AtomicUsize,
}

impl FakeWindowHost {
    pub fn new(identity: WindowIdentity, kind: WindowKind, config: DisplayConfig) -> Self {
        Self {
            identity,
            kind,
            config: Mutex::new(config),
            updates: Mutex::new(Vec::new()),
            recreations: AtomicUsize::new(0),
        }
    }

    /// Every configuration pushed so far, in order.
    pub fn updates(&self) -> Vec<DisplayConfig> {
        self.updates.lock().unwrap().clone()
    }

    /// Number of configuration pushes so far.
    pub fn update_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    /// Number of recreations so far.
    pub fn recreation_count(&self) -> usize {
        self.recreations.load(Ordering::Relaxed)
    }
}

impl WindowHost for FakeWindowHost {
    fn identity(&self) -> WindowIdentity {
        self.identity.clone()
    }

    fn kind(&self) -> WindowKind {
        self.kind
    }

    fn configuration(&self) -> DisplayConfig {
        *self.config.lock().unwrap()
    }

    fn update_configuration(&self, config: DisplayConfig) {
        *self.config.lock().unwrap() = config;
        self.updates.lock().unwrap().push(config);
    }

    fn recreate(&self) {
        self.recreations.fetch_add(1, Ordering::Relaxed);
    }
}
