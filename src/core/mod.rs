pub mod policy;
pub mod query;
pub mod snapshot;
pub mod transcode;

pub use crate::domain::model::{Record, ResourceKind};
pub use crate::domain::ports::{AgentApi, Storage};
pub use crate::utils::error::Result;
