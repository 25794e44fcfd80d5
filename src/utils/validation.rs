use crate::utils::error::{InspectorError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> InspectorError {
    InspectorError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Inspector host as it appears in `[cluster] hosts`.
///
/// The host is reused as a directory name under the collector output, so it
/// must be a single path segment and resolve to an http(s) URL on `port`.
pub fn validate_inspector_host(field_name: &str, host: &str, port: u16) -> Result<()> {
    validate_non_empty_string(field_name, host)?;

    if host == "." || host == ".." || host.contains(['/', '\\', '\0']) {
        return Err(invalid(
            field_name,
            host,
            "host must be a plain hostname or IP, it names the output directory",
        ));
    }

    let url = format!("http://{}:{}", host, port);
    match Url::parse(&url) {
        Ok(parsed) if parsed.host_str().is_some() => Ok(()),
        Ok(_) => Err(invalid(field_name, host, "inspector URL has no host")),
        Err(e) => Err(invalid(
            field_name,
            host,
            format!("cannot build inspector URL {}: {}", url, e),
        )),
    }
}

/// Socket or directory path: must be set and representable as a C string.
pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "path is not set"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "path contains a NUL byte"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "value is blank"));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("expected {}..={}", min, max),
        ));
    }
    Ok(())
}
