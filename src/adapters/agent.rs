//! Cilium agent client.
//!
//! Talks to the agent REST API over its UNIX control socket. Every call opens
//! its own HTTP/1.1 connection, so a single [`AgentClient`] can be shared by
//! any number of concurrent requests.

use crate::domain::model::{Record, ResourceKind};
use crate::domain::ports::AgentApi;
use crate::utils::error::{InspectorError, Result};
use async_trait::async_trait;
use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::{header, Method, Request};
use hyper_util::rt::TokioIo;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};
use tokio::net::UnixStream;

/// Default socket path of the cilium agent.
pub const DEFAULT_SOCKET_PATH: &str = "/var/run/cilium/cilium.sock";

/// Environment variable the cilium tooling reads to override the socket path.
pub const SOCKET_PATH_ENV: &str = "CILIUM_SOCK";

pub fn default_socket_path() -> String {
    std::env::var(SOCKET_PATH_ENV).unwrap_or_else(|_| DEFAULT_SOCKET_PATH.to_string())
}

#[derive(Debug, Clone)]
pub struct AgentClient {
    socket_path: PathBuf,
}

impl AgentClient {
    /// Creates a client for the socket at `path`.
    ///
    /// Fails when the path does not exist or is not a UNIX socket.
    pub fn connect(path: impl AsRef<Path>) -> Result<Self> {
        let socket_path = path.as_ref().to_path_buf();

        let metadata = std::fs::metadata(&socket_path)
            .map_err(|e| connect_error(&socket_path, e.to_string()))?;
        if !metadata.file_type().is_socket() {
            return Err(connect_error(&socket_path, "not a unix socket".to_string()));
        }

        Ok(Self { socket_path })
    }

    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    async fn get(&self, path: &str) -> Result<Bytes> {
        let stream = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| connect_error(&self.socket_path, e.to_string()))?;

        let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream)).await?;

        tokio::spawn(async move {
            if let Err(e) = conn.await {
                tracing::debug!("Agent connection closed: {}", e);
            }
        });

        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .header(header::HOST, "localhost")
            .header(header::ACCEPT, "application/json")
            .body(Empty::<Bytes>::new())?;

        tracing::debug!("GET {} via {}", path, self.socket_path.display());
        let response = sender.send_request(request).await?;
        let status = response.status();
        let body = response.into_body().collect().await?.to_bytes();

        if !status.is_success() {
            return Err(InspectorError::AgentStatusError {
                path: path.to_string(),
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).trim().to_string(),
            });
        }

        Ok(body)
    }

    async fn get_collection(&self, path: &str) -> Result<Vec<Record>> {
        let body = self.get(path).await?;
        // 空集合時 agent 可能回傳 null
        let records: Option<Vec<Record>> = serde_json::from_slice(&body)?;
        Ok(records.unwrap_or_default())
    }
}

#[async_trait]
impl AgentApi for AgentClient {
    async fn list_endpoints(&self) -> Result<Vec<Record>> {
        self.get_collection(ResourceKind::Endpoints.agent_path()).await
    }

    async fn list_services(&self) -> Result<Vec<Record>> {
        self.get_collection(ResourceKind::Services.agent_path()).await
    }
}

fn connect_error(socket_path: &Path, message: String) -> InspectorError {
    InspectorError::AgentConnectError {
        socket: socket_path.display().to_string(),
        message,
    }
}
