//! JSON to YAML transcoding.
//!
//! Both directions go through generic values whose mappings keep insertion
//! order, so field order and nesting survive the conversion.

use crate::utils::error::Result;

pub fn json_to_yaml(json: &[u8]) -> Result<String> {
    let value: serde_yaml::Value = serde_json::from_slice(json)?;
    Ok(serde_yaml::to_string(&value)?)
}

pub fn yaml_to_json(yaml: &str) -> Result<serde_json::Value> {
    Ok(serde_yaml::from_str(yaml)?)
}
