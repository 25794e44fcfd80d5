pub mod collector;
pub mod inspector;

pub use collector::{CollectReport, Collector};
pub use inspector::Inspector;
