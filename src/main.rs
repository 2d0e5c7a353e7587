use clap::Parser;
use menu_migrate::core::ConfigProvider;
use menu_migrate::utils::{logger, validation::Validate};
use menu_migrate::{CliConfig, LocalStorage, MigrationRunner};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("🚀 Starting menu-migrate");

    match config.load_toml() {
        Ok(Some(name)) => tracing::info!("📁 Loaded migration '{}'", name),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("❌ Failed to load config: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if config.dry_run() {
        tracing::info!("🔍 DRY RUN MODE - files will not be written");
    }

    let storage =
        LocalStorage::new(config.root().to_string()).with_atomic_writes(config.atomic_writes());
    let runner = MigrationRunner::new(storage)?.with_dry_run(config.dry_run());

    // 個別檔案失敗不影響結束碼
    let stdout = std::io::stdout();
    runner.run(config.targets(), &mut stdout.lock());

    Ok(())
}
