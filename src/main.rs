use cilium_inspector::utils::{logger, validation::Validate};
use cilium_inspector::{CliConfig, Inspector, InspectorError};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    let level = config.logging.level.as_deref();
    if config.logging.json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting cilium-inspector v{}", env!("CARGO_PKG_VERSION"));
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        fail(e);
    }

    // 連線或快照失敗時不綁定任何埠
    let inspector = match Inspector::bootstrap(config).await {
        Ok(inspector) => inspector,
        Err(e) => fail(e),
    };

    if let Err(e) = inspector.serve().await {
        fail(e);
    }
}

fn fail(e: InspectorError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code())
}
