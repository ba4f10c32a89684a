use crate::core::components::{ComponentCategory, ComponentRegistry, PlacedComponent};
use crate::core::config::ConnectionPolicy;
use crate::core::connections::{ConnectionManager, ConnectionValidator};
use crate::core::errors::PeResult;
use crate::core::types::{ComponentId, Connection, Position};
use crate::export::document::{ConnectionSpec, FunctionalUnitSpec, PeBody, PeDocument};
use log::{debug, info};

/// The PE being edited: placed components plus their connections
///
/// A circuit lives for one editing session. It is only written out through
/// [`Circuit::to_document`].
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    registry: ComponentRegistry,
    connections: ConnectionManager,
    policy: ConnectionPolicy,
}

impl Circuit {
    /// Create an empty circuit that accepts every connection request
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty circuit with the given connection policy
    pub fn with_policy(policy: ConnectionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> ConnectionPolicy {
        self.policy
    }

    /// Place a component and return its generated ID
    pub fn place(&mut self, category: ComponentCategory, position: Position) -> ComponentId {
        let id = self.registry.register(category, position);
        info!("Placed {} '{}' at ({}, {})", category, id, position.x, position.y);
        id
    }

    /// Place a component by palette name (`input`, `Register`, `MUX`, ...)
    pub fn place_named(&mut self, name: &str, position: Position) -> PeResult<ComponentId> {
        let category: ComponentCategory = name.parse()?;
        Ok(self.place(category, position))
    }

    /// Connect `from` to `to`, subject to the circuit's policy
    pub fn connect(&mut self, from: &str, to: &str) -> PeResult<Connection> {
        ConnectionValidator::validate(
            self.policy,
            &self.registry,
            self.connections.connections(),
            from,
            to,
        )?;
        let connection = self.connections.add_connection(from, to);
        info!("Connection created from {} to {}", from, to);
        Ok(connection)
    }

    /// Components of one category, in placement order
    pub fn components(&self, category: ComponentCategory) -> &[PlacedComponent] {
        self.registry.components_by_category(category)
    }

    pub fn component(&self, id: &str) -> Option<&PlacedComponent> {
        self.registry.get_component(id)
    }

    /// Connections in creation order
    pub fn connections(&self) -> &[Connection] {
        self.connections.connections()
    }

    pub fn component_count(&self) -> usize {
        self.registry.len()
    }

    /// Build the canonical document for this circuit under `name`
    pub fn to_document(&self, name: &str) -> PeDocument {
        let fus = self
            .registry
            .ids_by_category(ComponentCategory::FunctionalUnit)
            .into_iter()
            .map(FunctionalUnitSpec::with_default_ops)
            .collect();

        let connections = self
            .connections
            .connections()
            .iter()
            .map(|c| ConnectionSpec {
                from: c.from().to_string(),
                to: c.to().to_string(),
            })
            .collect();

        debug!(
            "Building document '{}' with {} components and {} connections",
            name,
            self.registry.len(),
            self.connections.connections().len()
        );

        PeDocument {
            pe: PeBody {
                name: name.to_string(),
                inputs: self.registry.ids_by_category(ComponentCategory::Input),
                outputs: self.registry.ids_by_category(ComponentCategory::Output),
                registers: self.registry.ids_by_category(ComponentCategory::Register),
                muxes: self.registry.ids_by_category(ComponentCategory::Mux),
                fus,
                connections,
            },
        }
    }

    /// Canonical pretty-printed JSON for this circuit under `name`
    pub fn to_json(&self, name: &str) -> PeResult<String> {
        self.to_document(name).to_json_pretty()
    }
}
