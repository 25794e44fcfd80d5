use cilium_inspector::config::toml_config::TomlConfig;
use cilium_inspector::utils::{logger, validation::Validate};
use cilium_inspector::{Collector, InspectorClient, LocalStorage};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cilium-collect")]
#[command(about = "Collect endpoint and service state from cilium-inspector instances")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "inspector.toml")]
    config: String,

    /// Output directory
    #[arg(short, long, default_value = "./output")]
    output: String,

    /// Query a single host instead of [cluster] hosts
    #[arg(long)]
    host: Option<String>,

    /// Generate L3/L4 policy skeletons from the collected endpoints
    #[arg(long)]
    policies: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose, None);
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    if let Some(host) = &args.host {
        config.cluster.hosts = vec![host.clone()];
        tracing::info!("🔧 Hosts overridden to: {}", host);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let client = InspectorClient::new(config.cluster.port, config.cluster_timeout())?;
    let collector =
        Collector::new(client, LocalStorage::new(&args.output)).with_policies(args.policies);

    match collector.collect_all(&config.cluster.hosts).await {
        Ok(reports) => {
            for report in &reports {
                for file in &report.files {
                    println!("📁 {}/{}", args.output, file);
                }
            }
            println!("✅ Collected state from {} host(s)", reports.len());
        }
        Err(e) => {
            tracing::error!("❌ Collection failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
