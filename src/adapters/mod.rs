// Adapters layer: concrete implementations for external systems (agent socket, storage, remote inspectors).

pub mod agent;
pub mod inspector;
pub mod storage;

pub use agent::AgentClient;
pub use inspector::InspectorClient;
pub use storage::LocalStorage;
