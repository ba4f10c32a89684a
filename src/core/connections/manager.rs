use crate::core::types::Connection;

/// Ordered store of the circuit's directed connections
///
/// Connections are kept in creation order, which is also the order they are
/// exported in.
#[derive(Debug, Clone, Default)]
pub struct ConnectionManager {
    connections: Vec<Connection>,
}

impl ConnectionManager {
    /// Create a new connection manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a connection
    pub fn add_connection(&mut self, from: &str, to: &str) -> Connection {
        let connection = Connection::new(from, to);
        self.connections.push(connection.clone());
        connection
    }

    /// Get all connections in creation order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_creation_order() {
        let mut manager = ConnectionManager::new();
        manager.add_connection("in0", "m0");
        manager.add_connection("in1", "m0");
        manager.add_connection("m0", "out0");

        let pairs: Vec<(&str, &str)> = manager.connections().iter().map(|c| (c.from(), c.to())).collect();
        assert_eq!(pairs, vec![("in0", "m0"), ("in1", "m0"), ("m0", "out0")]);
    }

    #[test]
    fn test_add_returns_stored_connection() {
        let mut manager = ConnectionManager::new();
        let connection = manager.add_connection("r0", "r0");
        assert_eq!(connection, Connection::new("r0", "r0"));
        assert_eq!(manager.connections(), &[connection]);
    }
}
