use clap::Parser;
use feishu_notify::core::render::render;
use feishu_notify::utils::error::ErrorSeverity;
use feishu_notify::utils::{logger, validation::Validate};
use feishu_notify::{
    CliConfig, ConfigProvider, Notifier, NotifyConfig, NotifyError, ReqwestTransport,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match NotifyConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose, config.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, config.log_level.as_deref());
    }

    tracing::info!("Starting feishu-notify");
    if config.verbose {
        tracing::debug!(
            "Resolved config: timeout={}s, dry_run={}, title={:?}",
            config.timeout_seconds,
            config.dry_run,
            config.message.title
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    if !config.message.has_content() {
        tracing::warn!("⚠️ Message has no content entries, the card shows only title and note");
    }

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - card is printed, nothing is sent");
        let card = render(&config.message);
        println!("{}", serde_json::to_string_pretty(&card)?);
        return Ok(());
    }

    let webhook = match config.require_webhook() {
        Ok(webhook) => webhook,
        Err(e) => exit_with(&e),
    };

    let transport = match ReqwestTransport::from_config(&config) {
        Ok(transport) => transport,
        Err(e) => exit_with(&e),
    };
    let notifier = Notifier::new(transport);
    let mut message = config.message.clone();

    match notifier.deliver(webhook, &mut message).await {
        Ok(body) => {
            tracing::info!("✅ Card '{}' delivered", message.title);
            println!("{}", body);
        }
        Err(e) => {
            tracing::error!(
                "❌ Delivery failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            if e.severity() > ErrorSeverity::Low {
                exit_with(&e);
            }
            eprintln!("⚠️ {}", e.user_friendly_message());
        }
    }

    Ok(())
}

fn exit_with(e: &NotifyError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 可重試
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
