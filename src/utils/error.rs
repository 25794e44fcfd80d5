use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("Cannot reach cilium agent at {socket}: {message}")]
    AgentConnectError { socket: String, message: String },

    #[error("Agent request failed: {0}")]
    AgentHttpError(#[from] hyper::Error),

    #[error("Agent request could not be built: {0}")]
    RequestBuildError(#[from] hyper::http::Error),

    #[error("Agent returned {status} for {path}: {body}")]
    AgentStatusError {
        path: String,
        status: u16,
        body: String,
    },

    #[error("Inspector request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Inspector at {url} returned status {status}")]
    InspectorStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl InspectorError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            InspectorError::ConfigError { .. }
                | InspectorError::ConfigValidationError { .. }
                | InspectorError::InvalidConfigValueError { .. }
        )
    }

    /// 給使用者看的錯誤描述
    pub fn user_friendly_message(&self) -> String {
        match self {
            InspectorError::AgentConnectError { socket, .. } => {
                format!("Cilium agent socket {} is not available", socket)
            }
            InspectorError::AgentHttpError(_) | InspectorError::AgentStatusError { .. } => {
                format!("Reading state from the cilium agent failed: {}", self)
            }
            InspectorError::ApiError(_) | InspectorError::InspectorStatusError { .. } => {
                format!("Querying the inspector failed: {}", self)
            }
            InspectorError::IoError(e) => format!("File operation failed: {}", e),
            _ if self.is_config_error() => format!("Invalid configuration: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InspectorError::AgentConnectError { .. } => {
                "Check that cilium-agent is running and the socket path (--socket or CILIUM_SOCK) is correct"
            }
            InspectorError::AgentHttpError(_) | InspectorError::AgentStatusError { .. } => {
                "Check the cilium agent health with `cilium status`"
            }
            InspectorError::ApiError(_) | InspectorError::InspectorStatusError { .. } => {
                "Make sure cilium-inspector is running on the target host and the port is reachable"
            }
            InspectorError::IoError(_) => "Check permissions and free space of the output directory",
            InspectorError::SerializationError(_) | InspectorError::YamlError(_) => {
                "The agent returned data that could not be re-encoded; report the payload"
            }
            InspectorError::RequestBuildError(_) => "Check the configured agent API paths",
            _ => "Fix the configuration file or command line flags and retry",
        }
    }

    /// 設定錯誤回傳 2，其餘皆為 1
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectorError>;
