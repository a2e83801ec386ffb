//! Recreation policy

use umbra_platform::{CapabilityRegistry, WindowHost, WindowKind};

/// Decides whether applying a new appearance requires destroying and
/// recreating the host window.
pub struct RecreationPolicy<'a> {
    capabilities: &'a dyn CapabilityRegistry,
}

impl<'a> RecreationPolicy<'a> {
    pub fn new(capabilities: &'a dyn CapabilityRegistry) -> Self {
        Self { capabilities }
    }

    /// True when the window must be recreated for a new appearance to take
    /// effect.
    ///
    /// Never true before the first apply, and never for windows that cannot
    /// be recreated. Otherwise the hosting component's declaration decides.
    /// A failed lookup is logged and resolves to the fail-safe default:
    /// recreate. It is never propagated.
    pub fn should_recreate(&self, window: &dyn WindowHost, has_applied_once: bool) -> bool {
        if !has_applied_once || window.kind() != WindowKind::TopLevel {
            return false;
        }

        match self.capabilities.declared_capabilities(&window.identity()) {
            Ok(caps) => !caps.handles_appearance_change,
            Err(err) => {
                tracing::debug!(
                    "Capability lookup failed for {}: {}, recreating",
                    window.identity(),
                    err
                );
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::DisplayConfig;
    use umbra_platform::{CapabilityTable, DeclaredCapabilities, WindowIdentity};
    use umbra_test_suite::FakeWindowHost;

    fn window(kind: WindowKind) -> FakeWindowHost {
        FakeWindowHost::new(
            WindowIdentity::new("app/main"),
            kind,
            DisplayConfig::default(),
        )
    }

    #[test]
    fn never_recreates_before_first_apply() {
        let table = CapabilityTable::new();
        let policy = RecreationPolicy::new(&table);

        assert!(!policy.should_recreate(&window(WindowKind::TopLevel), false));
    }

    #[test]
    fn never_recreates_embedded_windows() {
        let table = CapabilityTable::new();
        let policy = RecreationPolicy::new(&table);

        assert!(!policy.should_recreate(&window(WindowKind::Embedded), true));
    }

    #[test]
    fn declared_handler_applies_in_place() {
        let table = CapabilityTable::new().declare(
            WindowIdentity::new("app/main"),
            DeclaredCapabilities {
                handles_appearance_change: true,
            },
        );
        let policy = RecreationPolicy::new(&table);

        assert!(!policy.should_recreate(&window(WindowKind::TopLevel), true));
    }

    #[test]
    fn undeclared_handler_recreates() {
        let table = CapabilityTable::new().declare(
            WindowIdentity::new("app/main"),
            DeclaredCapabilities {
                handles_appearance_change: false,
            },
        );
        let policy = RecreationPolicy::new(&table);

        assert!(policy.should_recreate(&window(WindowKind::TopLevel), true));
    }

    #[test]
    fn failed_lookup_fails_safe_to_recreation() {
        let table = CapabilityTable::new();
        let policy = RecreationPolicy::new(&table);

        assert!(policy.should_recreate(&window(WindowKind::TopLevel), true));
    }
}
