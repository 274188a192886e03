use clap::Parser;
use golf_saju::config::toml_config::TomlConfig;
use golf_saju::core::fallback::OUTER_FALLBACK_REPORT;
use golf_saju::core::ConfigProvider;
use golf_saju::utils::{logger, validation::Validate};
use golf_saju::{CliConfig, FortuneService, LocalStorage};
use tokio::io::AsyncReadExt;

async fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path).await,
        None => {
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            Ok(raw)
        }
    }
}

/// 設定錯誤時 stdout 仍輸出完整的 fallback 結果
fn exit_with_fallback() -> ! {
    if let Ok(json) = serde_json::to_string(&OUTER_FALLBACK_REPORT.to_report()) {
        println!("{}", json);
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置 (選用)
    let file_config = match &config.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                exit_with_fallback();
            }
        },
        None => None,
    };

    if let Some(file_config) = &file_config {
        config.merge_file(file_config);
    }

    logger::init_cli_logger(
        config.verbose,
        file_config.as_ref().and_then(|c| c.log_level()),
    );

    tracing::info!("Starting golf-saju CLI");
    tracing::debug!("CLI config: {:?}", config);

    let validation = match &file_config {
        Some(file_config) => file_config.validate().and_then(|_| config.validate()),
        None => config.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        exit_with_fallback();
    }

    let storage = LocalStorage::new(config.output_dir().to_string());
    let input_path = config.input.clone();
    let service = FortuneService::new(storage, config);

    // 讀取失敗也要輸出完整的 fallback 結果
    let raw = match read_input(input_path.as_deref()).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("❌ Failed to read request: {}", e);
            String::new()
        }
    };

    let response = service.handle_json(&raw).await;
    println!("{}", service.render(&response.profile)?);

    Ok(())
}
