use crate::core::components::category::ComponentCategory;
use crate::core::types::{ComponentId, Position};

/// A component placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedComponent {
    pub id: ComponentId,
    pub position: Position,
}

impl PlacedComponent {
    /// Geometric center of the component's footprint
    pub fn center(&self) -> Position {
        let (w, h) = self.id.category().footprint();
        Position::new(self.position.x + w / 2.0, self.position.y + h / 2.0)
    }
}

/// Per-category storage with one list per component kind
#[derive(Debug, Clone, Default)]
struct CategoryLists<T> {
    inputs: T,
    outputs: T,
    registers: T,
    muxes: T,
    fus: T,
}

impl<T> CategoryLists<T> {
    fn get(&self, category: ComponentCategory) -> &T {
        match category {
            ComponentCategory::Input => &self.inputs,
            ComponentCategory::Output => &self.outputs,
            ComponentCategory::Register => &self.registers,
            ComponentCategory::Mux => &self.muxes,
            ComponentCategory::FunctionalUnit => &self.fus,
        }
    }

    fn get_mut(&mut self, category: ComponentCategory) -> &mut T {
        match category {
            ComponentCategory::Input => &mut self.inputs,
            ComponentCategory::Output => &mut self.outputs,
            ComponentCategory::Register => &mut self.registers,
            ComponentCategory::Mux => &mut self.muxes,
            ComponentCategory::FunctionalUnit => &mut self.fus,
        }
    }
}

/// Registers placed components and hands out per-category ordinals
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    /// Placed components, in placement order within each category
    components: CategoryLists<Vec<PlacedComponent>>,
    /// Next ordinal per category; only ever grows
    next_ordinal: CategoryLists<usize>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new component of `category` and return its generated ID
    pub fn register(&mut self, category: ComponentCategory, position: Position) -> ComponentId {
        let counter = self.next_ordinal.get_mut(category);
        let id = ComponentId::for_ordinal(category, *counter);
        *counter += 1;

        self.components.get_mut(category).push(PlacedComponent {
            id: id.clone(),
            position,
        });
        id
    }

    /// Components of one category, in placement order
    pub fn components_by_category(&self, category: ComponentCategory) -> &[PlacedComponent] {
        self.components.get(category)
    }

    /// IDs of one category, in placement order
    pub fn ids_by_category(&self, category: ComponentCategory) -> Vec<String> {
        self.components
            .get(category)
            .iter()
            .map(|c| c.id.id().to_string())
            .collect()
    }

    /// Look up a component by its raw ID string
    pub fn get_component(&self, id: &str) -> Option<&PlacedComponent> {
        ComponentCategory::ALL
            .iter()
            .flat_map(|category| self.components.get(*category).iter())
            .find(|c| c.id.id() == id)
    }

    /// Check if a component exists
    pub fn has_component(&self, id: &str) -> bool {
        self.get_component(id).is_some()
    }

    /// Total number of placed components
    pub fn len(&self) -> usize {
        ComponentCategory::ALL
            .iter()
            .map(|category| self.components.get(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_are_per_category() {
        let mut registry = ComponentRegistry::new();
        let a = registry.register(ComponentCategory::Input, Position::default());
        let b = registry.register(ComponentCategory::Register, Position::default());
        let c = registry.register(ComponentCategory::Input, Position::default());

        assert_eq!(a.id(), "in0");
        assert_eq!(b.id(), "r0");
        assert_eq!(c.id(), "in1");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut registry = ComponentRegistry::new();
        registry.register(ComponentCategory::Mux, Position::new(10.0, 20.0));

        let found = registry.get_component("m0").unwrap();
        assert_eq!(found.position, Position::new(10.0, 20.0));
        assert!(!registry.has_component("m1"));
    }

    #[test]
    fn test_center_uses_footprint() {
        let mut registry = ComponentRegistry::new();
        registry.register(ComponentCategory::FunctionalUnit, Position::new(100.0, 100.0));

        let fu = registry.get_component("fu0").unwrap();
        assert_eq!(fu.center(), Position::new(150.0, 125.0));
    }

    #[test]
    fn test_empty_categories() {
        let registry = ComponentRegistry::new();
        assert!(registry.is_empty());
        for category in ComponentCategory::ALL {
            assert!(registry.ids_by_category(category).is_empty());
        }
    }
}
