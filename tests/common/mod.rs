#![allow(dead_code)]

use async_trait::async_trait;
use cilium_inspector::{AgentApi, InspectorError, Record, Result};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use serde_json::json;
use std::collections::HashMap;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UnixListener;

/// In-memory agent that counts calls per collection.
pub struct FakeAgent {
    endpoints: std::result::Result<Vec<Record>, String>,
    services: std::result::Result<Vec<Record>, String>,
    pub endpoint_calls: AtomicUsize,
    pub service_calls: AtomicUsize,
}

impl FakeAgent {
    pub fn new(endpoints: Vec<Record>, services: Vec<Record>) -> Self {
        Self {
            endpoints: Ok(endpoints),
            services: Ok(services),
            endpoint_calls: AtomicUsize::new(0),
            service_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_endpoints(mut self, message: &str) -> Self {
        self.endpoints = Err(message.to_string());
        self
    }

    pub fn failing_services(mut self, message: &str) -> Self {
        self.services = Err(message.to_string());
        self
    }

    pub fn endpoint_calls(&self) -> usize {
        self.endpoint_calls.load(Ordering::SeqCst)
    }

    pub fn service_calls(&self) -> usize {
        self.service_calls.load(Ordering::SeqCst)
    }
}

fn answer(result: &std::result::Result<Vec<Record>, String>, path: &str) -> Result<Vec<Record>> {
    match result {
        Ok(records) => Ok(records.clone()),
        Err(message) => Err(InspectorError::AgentStatusError {
            path: path.to_string(),
            status: 500,
            body: message.clone(),
        }),
    }
}

#[async_trait]
impl AgentApi for FakeAgent {
    async fn list_endpoints(&self) -> Result<Vec<Record>> {
        self.endpoint_calls.fetch_add(1, Ordering::SeqCst);
        answer(&self.endpoints, "/v1/endpoint")
    }

    async fn list_services(&self) -> Result<Vec<Record>> {
        self.service_calls.fetch_add(1, Ordering::SeqCst);
        answer(&self.services, "/v1/service")
    }
}

pub fn sample_endpoints() -> Vec<Record> {
    vec![
        json!({
            "id": 1093,
            "spec": { "label-configuration": { "user": [] } },
            "status": {
                "identity": {
                    "id": 24987,
                    "labels": ["k8s:app=reviews", "k8s:version=v1", "k8s:io.kubernetes.pod.namespace=bookinfo"]
                },
                "external-identifiers": {
                    "k8s-namespace": "bookinfo",
                    "k8s-pod-name": "reviews-v1-5b8d9c7f6-xk2lp"
                },
                "networking": { "addressing": [{ "ipv4": "10.0.1.23" }] },
                "state": "ready"
            }
        }),
        json!({
            "id": 217,
            "status": {
                "identity": { "id": 1, "labels": ["reserved:host"] },
                "external-identifiers": {},
                "state": "ready"
            }
        }),
    ]
}

pub fn sample_services() -> Vec<Record> {
    vec![json!({
        "spec": {
            "id": 5,
            "frontend-address": { "ip": "10.96.0.10", "port": 53, "protocol": "UDP" },
            "backend-addresses": [
                { "ip": "10.0.0.41", "port": 53, "weight": 1 },
                { "ip": "10.0.1.17", "port": 53, "weight": 1 }
            ],
            "flags": { "type": "ClusterIP", "name": "kube-dns", "namespace": "kube-system" }
        },
        "status": { "realized": { "id": 5 } }
    })]
}

/// Serves canned `(status, body)` answers per path on a UNIX socket inside `dir`.
pub fn spawn_socket_agent(dir: &Path, routes: Vec<(&str, u16, String)>) -> PathBuf {
    let path = dir.join("cilium.sock");
    let listener = UnixListener::bind(&path).unwrap();
    let routes: Arc<HashMap<String, (u16, String)>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, status, body)| (p.to_string(), (status, body)))
            .collect(),
    );

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let svc = hyper::service::service_fn(move |req: Request<Incoming>| {
                    let routes = routes.clone();
                    async move {
                        let (status, body) = routes
                            .get(req.uri().path())
                            .cloned()
                            .unwrap_or((404, "404 page not found".to_string()));
                        Ok::<_, Infallible>(
                            Response::builder()
                                .status(status)
                                .header("Content-Type", "application/json")
                                .body(Full::new(Bytes::from(body)))
                                .unwrap(),
                        )
                    }
                });
                let _ = hyper::server::conn::http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), svc)
                    .await;
            });
        }
    });

    path
}
