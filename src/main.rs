use clap::Parser;
use portfolio_site::config::LogFormat;
use portfolio_site::utils::{logger, validation::validate_socket_addr, validation::Validate};
use portfolio_site::{
    serve, AppState, CliConfig, ContactRelay, MailRelay, RelayConfig, ResendClient, SiteConfig,
    UnconfiguredRelay,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }

    tracing::info!("Starting portfolio-site");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證命令列參數
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let site = match &config.config {
        Some(path) => {
            tracing::info!("📄 Loading site config from {}", path.display());
            let site = SiteConfig::from_file(path)?;
            site.validate()?;
            site
        }
        None => SiteConfig::default(),
    };

    // 環境變數優先，站台設定檔補位
    let relay_config = RelayConfig::from_lookup(|key| {
        std::env::var(key)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| site.mail_value(key))
    })
    .map(|relay_config| match &config.api_base_url {
        Some(url) => relay_config.with_api_base_url(url.as_str()),
        None => relay_config,
    })
    .and_then(|relay_config| relay_config.validate().map(|_| relay_config));

    // 設定不完整時頁面仍可瀏覽，但每次送出表單都回傳設定錯誤
    let relay: Arc<dyn ContactRelay> = match relay_config {
        Ok(relay_config) => {
            tracing::info!("✉️ Contact messages will be relayed to {}", relay_config.to_email);
            let provider = ResendClient::from_config(&relay_config)?;
            Arc::new(MailRelay::new(provider, relay_config))
        }
        Err(e) => {
            tracing::warn!("⚠️ Contact form disabled: {} (Severity: {:?})", e, e.severity());
            tracing::warn!("💡 Suggestion: {}", e.recovery_suggestion());
            Arc::new(UnconfiguredRelay::new(e))
        }
    };

    let addr = validate_socket_addr("bind", config.resolve_bind(site.bind()))?;
    let state = AppState::new(relay, site.profile());

    if let Err(e) = serve(addr, state).await {
        tracing::error!(
            "❌ Server stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    Ok(())
}
