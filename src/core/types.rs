use crate::core::components::category::ComponentCategory;

/// Component identifier carrying the category it was placed as
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId {
    pub(crate) id: String,
    pub(crate) category: ComponentCategory,
}

impl ComponentId {
    /// Create a new component ID
    pub fn new(id: String, category: ComponentCategory) -> Self {
        Self { id, category }
    }

    /// Build the ID for the `ordinal`-th component of a category, e.g. `m2`
    pub fn for_ordinal(category: ComponentCategory, ordinal: usize) -> Self {
        Self::new(format!("{}{}", category.prefix(), ordinal), category)
    }

    /// Get the raw ID string
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the category
    pub fn category(&self) -> ComponentCategory {
        self.category
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Canvas coordinates in scene units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Directed edge between two placed components
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    pub(crate) from: String,
    pub(crate) to: String,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_for_ordinal() {
        let id = ComponentId::for_ordinal(ComponentCategory::FunctionalUnit, 3);
        assert_eq!(id.id(), "fu3");
        assert_eq!(id.category(), ComponentCategory::FunctionalUnit);
        assert_eq!(id.to_string(), "fu3");
    }

    #[test]
    fn test_connection_display() {
        let conn = Connection::new("in0", "r0");
        assert_eq!(conn.from(), "in0");
        assert_eq!(conn.to(), "r0");
        assert_eq!(conn.to_string(), "in0 -> r0");
    }
}
