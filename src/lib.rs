pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{AgentClient, InspectorClient, LocalStorage};
pub use app::{Collector, Inspector};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use domain::model::{Record, ResourceKind};
pub use domain::ports::{AgentApi, Storage};
pub use utils::error::{InspectorError, Result};
