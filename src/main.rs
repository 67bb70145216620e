use clap::Parser;
use small_roster::utils::logger;
use small_roster::{CliConfig, InMemoryRoster, MenuSession};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-roster CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 Session monitoring enabled");
    }

    // 創建存儲和選單會話
    let store = InMemoryRoster::new();
    let stdin = io::stdin();
    let mut session =
        MenuSession::new_with_monitoring(store, stdin.lock(), io::stdout(), monitor_enabled);

    match session.run() {
        Ok(summary) => {
            tracing::info!(
                "✅ Session finished: {} commands, {} students added, {} removed",
                summary.commands_processed,
                summary.students_added,
                summary.students_removed
            );
        }
        Err(e) => {
            tracing::error!("❌ Menu session failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
