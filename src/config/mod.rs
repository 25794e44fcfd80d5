pub mod toml_config;

use crate::utils::error::Result;
use clap::Parser;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "cilium-inspector")]
#[command(about = "Read-only HTTP facade over the cilium agent endpoint and service state")]
#[command(version)]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Bind address
    #[arg(long)]
    pub bind: Option<String>,

    /// HTTP server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Cilium agent socket path
    #[arg(long)]
    pub socket: Option<String>,

    /// Directory receiving endpoints.yaml and services.yaml
    #[arg(long)]
    pub snapshot_dir: Option<String>,

    /// Skip the startup snapshot
    #[arg(long)]
    pub no_snapshot: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入設定檔並套用命令列覆蓋設定
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(bind) = &self.bind {
            config.server.bind = bind.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(socket) = &self.socket {
            config.agent.socket_path = socket.clone();
        }
        if let Some(dir) = &self.snapshot_dir {
            config.snapshot.directory = dir.clone();
        }
        if self.no_snapshot {
            config.snapshot.enabled = false;
        }
        if self.log_json {
            config.logging.json = true;
        }
    }
}
