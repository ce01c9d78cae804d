use serde::{Deserialize, Serialize};

/// One configured remote logship endpoint.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConnectionInfo {
    /// Endpoint text as the user gave it, e.g. `logs.example.com:9000`.
    /// Kept opaque; nothing in this client parses it yet.
    pub endpoint: String,
}

impl ConnectionInfo {
    pub fn new(endpoint: &str) -> Self {
        Self { endpoint: endpoint.to_owned() }
    }
}

/// The full persisted state of this client, one value per user.
///
/// Connections keep their insertion order; that order is what listings show.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Configuration {
    #[serde(default)]
    pub connections: Vec<ConnectionInfo>,
}

impl Configuration {
    /// Records `endpoint`, returning `true` if it was newly added.
    ///
    /// Endpoints are deduplicated by exact string match: an already known
    /// endpoint keeps its position, a new one is appended.
    pub fn upsert(&mut self, endpoint: &str) -> bool {
        if self.contains(endpoint) {
            return false;
        }
        self.connections.push(ConnectionInfo::new(endpoint));
        true
    }

    /// Drops `endpoint`, returning `true` if anything was removed.
    pub fn remove(&mut self, endpoint: &str) -> bool {
        let count = self.connections.len();
        self.connections.retain(|c| c.endpoint != endpoint);
        self.connections.len() < count
    }

    pub fn contains(&self, endpoint: &str) -> bool {
        self.connections.iter().any(|c| c.endpoint == endpoint)
    }
}
