use std::fmt;

/// One agent record (endpoint or service), passed through uninterpreted.
pub type Record = serde_json::Value;

/// The two collections exposed by the inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Endpoints,
    Services,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Endpoints, ResourceKind::Services];

    /// Route served by the facade.
    pub fn route(&self) -> &'static str {
        match self {
            ResourceKind::Endpoints => "/endpoints",
            ResourceKind::Services => "/services",
        }
    }

    /// Path on the cilium agent REST API.
    pub fn agent_path(&self) -> &'static str {
        match self {
            ResourceKind::Endpoints => "/v1/endpoint",
            ResourceKind::Services => "/v1/service",
        }
    }

    pub fn snapshot_file(&self) -> &'static str {
        match self {
            ResourceKind::Endpoints => "endpoints.yaml",
            ResourceKind::Services => "services.yaml",
        }
    }

    pub fn raw_file(&self) -> &'static str {
        match self {
            ResourceKind::Endpoints => "endpoints.json",
            ResourceKind::Services => "services.json",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Endpoints => write!(f, "endpoints"),
            ResourceKind::Services => write!(f, "services"),
        }
    }
}
