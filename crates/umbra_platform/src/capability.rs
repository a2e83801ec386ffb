//! Window capability declarations

use std::fmt;

use rustc_hash::FxHashMap;

use crate::error::{PlatformError, Result};

/// Stable identity of a window's hosting component, used to look up the
/// capabilities it declared.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WindowIdentity(String);

impl WindowIdentity {
    /// Create an identity from the hosting component's registered name.
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    /// The registered name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Configuration-change handling a hosting component declared up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeclaredCapabilities {
    /// The component applies appearance changes itself; the delegate may
    /// refresh the configuration in place instead of recreating the window.
    pub handles_appearance_change: bool,
}

/// Lookup service for capability declarations.
pub trait CapabilityRegistry {
    /// Declared capabilities for a window identity.
    ///
    /// Fails with [`PlatformError::CapabilityNotFound`] when the identity has
    /// no registered declaration.
    fn declared_capabilities(&self, identity: &WindowIdentity) -> Result<DeclaredCapabilities>;
}

/// In-memory capability registry for hosts that register declarations up
/// front.
#[derive(Clone, Debug, Default)]
pub struct CapabilityTable {
    declarations: FxHashMap<WindowIdentity, DeclaredCapabilities>,
}

impl CapabilityTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration for a window identity.
    pub fn declare(
        mut self,
        identity: WindowIdentity,
        capabilities: DeclaredCapabilities,
    ) -> Self {
        self.declarations.insert(identity, capabilities);
        self
    }
}

impl CapabilityRegistry for CapabilityTable {
    fn declared_capabilities(&self, identity: &WindowIdentity) -> Result<DeclaredCapabilities> {
        self.declarations
            .get(identity)
            .copied()
            .ok_or_else(|| PlatformError::CapabilityNotFound(identity.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_of_registered_identity_returns_declaration() {
        let identity = WindowIdentity::new("app/main");
        let table = CapabilityTable::new().declare(
            identity.clone(),
            DeclaredCapabilities {
                handles_appearance_change: true,
            },
        );

        let caps = table.declared_capabilities(&identity).unwrap();
        assert!(caps.handles_appearance_change);
    }

    #[test]
    fn lookup_of_unknown_identity_fails_with_not_found() {
        let table = CapabilityTable::new();
        let err = table
            .declared_capabilities(&WindowIdentity::new("app/unknown"))
            .unwrap_err();

        assert!(matches!(err, PlatformError::CapabilityNotFound(_)));
    }
}
