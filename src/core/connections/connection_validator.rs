use crate::core::components::registry::ComponentRegistry;
use crate::core::config::ConnectionPolicy;
use crate::core::errors::{PeError, PeResult};
use crate::core::types::Connection;

/// Centralized connection validation logic
pub struct ConnectionValidator;

impl ConnectionValidator {
    /// Validate a requested connection against the given policy.
    ///
    /// `Permissive` accepts anything. `Strict` requires both endpoints to be
    /// placed, distinct and not already connected in the same direction.
    pub fn validate(
        policy: ConnectionPolicy,
        registry: &ComponentRegistry,
        existing: &[Connection],
        from: &str,
        to: &str,
    ) -> PeResult<()> {
        match policy {
            ConnectionPolicy::Permissive => Ok(()),
            ConnectionPolicy::Strict => {
                Self::check_endpoint(registry, from)?;
                Self::check_endpoint(registry, to)?;
                Self::check_self_loop(from, to)?;
                Self::check_duplicate(existing, from, to)
            }
        }
    }

    /// Check that an endpoint refers to a placed component
    pub fn check_endpoint(registry: &ComponentRegistry, id: &str) -> PeResult<()> {
        if registry.has_component(id) {
            Ok(())
        } else {
            Err(PeError::ConnectionEndpointMissing(id.to_string()))
        }
    }

    pub fn check_self_loop(from: &str, to: &str) -> PeResult<()> {
        if from == to {
            return Err(PeError::SelfLoop(from.to_string()));
        }
        Ok(())
    }

    /// Check that the same directed pair is not connected twice
    pub fn check_duplicate(existing: &[Connection], from: &str, to: &str) -> PeResult<()> {
        if existing.iter().any(|c| c.from() == from && c.to() == to) {
            return Err(PeError::DuplicateConnection {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::category::ComponentCategory;
    use crate::core::types::Position;

    fn registry_with_two() -> ComponentRegistry {
        let mut registry = ComponentRegistry::new();
        registry.register(ComponentCategory::Input, Position::default());
        registry.register(ComponentCategory::Register, Position::default());
        registry
    }

    #[test]
    fn test_permissive_accepts_anything() {
        let registry = ComponentRegistry::new();
        let existing = vec![Connection::new("a", "a")];
        let result = ConnectionValidator::validate(ConnectionPolicy::Permissive, &registry, &existing, "a", "a");
        assert!(result.is_ok());
    }

    #[test]
    fn test_strict_rejects_missing_endpoint() {
        let registry = registry_with_two();
        let result = ConnectionValidator::validate(ConnectionPolicy::Strict, &registry, &[], "in0", "out7");
        assert!(matches!(result, Err(PeError::ConnectionEndpointMissing(ref id)) if id == "out7"));
    }

    #[test]
    fn test_strict_rejects_self_loop() {
        let registry = registry_with_two();
        let result = ConnectionValidator::validate(ConnectionPolicy::Strict, &registry, &[], "r0", "r0");
        assert!(matches!(result, Err(PeError::SelfLoop(_))));
    }

    #[test]
    fn test_strict_rejects_duplicate_but_not_reverse() {
        let registry = registry_with_two();
        let existing = vec![Connection::new("in0", "r0")];

        let duplicate = ConnectionValidator::validate(ConnectionPolicy::Strict, &registry, &existing, "in0", "r0");
        assert!(matches!(duplicate, Err(PeError::DuplicateConnection { .. })));

        let reverse = ConnectionValidator::validate(ConnectionPolicy::Strict, &registry, &existing, "r0", "in0");
        assert!(reverse.is_ok());
    }
}
