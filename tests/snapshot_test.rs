mod common;

use cilium_inspector::core::query::fetch_json;
use cilium_inspector::core::snapshot::SnapshotWriter;
use cilium_inspector::core::transcode::yaml_to_json;
use cilium_inspector::{Inspector, InspectorError, LocalStorage, ResourceKind, TomlConfig};
use common::{sample_endpoints, sample_services, FakeAgent};
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_snapshot_round_trips_to_json_response() {
    let dir = TempDir::new().unwrap();
    let agent = FakeAgent::new(sample_endpoints(), sample_services());
    let writer = SnapshotWriter::new(LocalStorage::new(dir.path()));

    let written = writer.write_all(&agent).await.unwrap();
    assert_eq!(written, vec!["endpoints.yaml", "services.yaml"]);

    for kind in ResourceKind::ALL {
        let yaml = std::fs::read_to_string(dir.path().join(kind.snapshot_file())).unwrap();
        let response = fetch_json(&agent, kind).await.unwrap();
        let expected: serde_json::Value = serde_json::from_slice(&response).unwrap();

        assert_eq!(yaml_to_json(&yaml).unwrap(), expected, "{} snapshot differs", kind);
    }
}

#[tokio::test]
async fn test_snapshot_preserves_field_order() {
    let dir = TempDir::new().unwrap();
    let agent = FakeAgent::new(sample_endpoints(), sample_services());
    SnapshotWriter::new(LocalStorage::new(dir.path()))
        .write(&agent, ResourceKind::Services)
        .await
        .unwrap();

    let yaml = std::fs::read_to_string(dir.path().join("services.yaml")).unwrap();
    let frontend = yaml.find("frontend-address").unwrap();
    let backends = yaml.find("backend-addresses").unwrap();
    let flags = yaml.find("flags").unwrap();
    assert!(frontend < backends && backends < flags);
}

#[tokio::test]
async fn test_snapshot_overwrites_existing_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("endpoints.yaml"), "stale: true\n").unwrap();

    let agent = FakeAgent::new(vec![], sample_services());
    SnapshotWriter::new(LocalStorage::new(dir.path()))
        .write_all(&agent)
        .await
        .unwrap();

    let yaml = std::fs::read_to_string(dir.path().join("endpoints.yaml")).unwrap();
    assert!(!yaml.contains("stale"));
    assert_eq!(yaml_to_json(&yaml).unwrap(), serde_json::json!([]));
}

#[tokio::test]
async fn test_snapshot_read_failure_is_fatal() {
    let dir = TempDir::new().unwrap();
    let agent = FakeAgent::new(sample_endpoints(), vec![]).failing_services("service cache unavailable");

    let result = SnapshotWriter::new(LocalStorage::new(dir.path()))
        .write_all(&agent)
        .await;

    assert!(result.is_err());
    assert!(!dir.path().join("services.yaml").exists());
}

#[tokio::test]
async fn test_inspector_bootstrap_takes_snapshot_once() {
    let dir = TempDir::new().unwrap();
    let mut config = TomlConfig::default();
    config.snapshot.directory = dir.path().to_str().unwrap().to_string();

    let agent = Arc::new(FakeAgent::new(sample_endpoints(), sample_services()));
    Inspector::with_agent(config, agent.clone()).await.unwrap();

    assert_eq!(agent.endpoint_calls(), 1);
    assert_eq!(agent.service_calls(), 1);
    assert!(dir.path().join("endpoints.yaml").exists());
    assert!(dir.path().join("services.yaml").exists());
}

#[tokio::test]
async fn test_inspector_bootstrap_fails_on_snapshot_error() {
    let dir = TempDir::new().unwrap();
    let mut config = TomlConfig::default();
    config.snapshot.directory = dir.path().to_str().unwrap().to_string();

    let agent = Arc::new(FakeAgent::new(vec![], vec![]).failing_endpoints("agent restarting"));
    let result = Inspector::with_agent(config, agent).await;

    assert!(result.is_err());
    assert!(!dir.path().join("endpoints.yaml").exists());
}

#[tokio::test]
async fn test_inspector_bootstrap_fails_on_snapshot_write_error() {
    let dir = TempDir::new().unwrap();
    // 快照目錄其實是一般檔案
    let not_a_dir = dir.path().join("snapshots");
    std::fs::write(&not_a_dir, "occupied").unwrap();

    let mut config = TomlConfig::default();
    config.snapshot.directory = not_a_dir.to_str().unwrap().to_string();

    let agent = Arc::new(FakeAgent::new(sample_endpoints(), sample_services()));
    let result = Inspector::with_agent(config, agent.clone()).await;

    assert!(matches!(result, Err(InspectorError::IoError(_))));
    assert_eq!(std::fs::read_to_string(&not_a_dir).unwrap(), "occupied");
    assert_eq!(agent.service_calls(), 0);
}
