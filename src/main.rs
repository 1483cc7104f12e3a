use anyhow::Context;
use clap::Parser;
use derm_ai::{analyzer, batch, cli, config, logging, scanner};
use derm_ai_common::{advice, catalog};
use derm_ai_common::{AnalysisPayload, ApiResponse};
use cli::{Cli, Commands};
use config::Config;
use serde::Serialize;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Analyze { image, data_url, recommend, output } => {
            let config = Config::load()?;
            let limits = config.decode_limits();
            let result = if data_url {
                let content = std::fs::read_to_string(&image)
                    .with_context(|| format!("read {}", image.display()))?;
                analyzer::analyze_with_timeout(content.trim().to_string(), limits, config.timeout()).await
            } else {
                let bytes = std::fs::read(&image)
                    .with_context(|| format!("read {}", image.display()))?;
                analyzer::analyze_bytes_with_timeout(bytes, limits, config.timeout()).await
            };

            match result {
                Ok(report) => {
                    let response = ApiResponse::ok(AnalysisPayload::new(report, recommend));
                    write_json(&response, output.as_deref())?;
                }
                Err(e) => {
                    let response: ApiResponse<AnalysisPayload> = ApiResponse::err(e.to_string());
                    write_json(&response, output.as_deref())?;
                    std::process::exit(1);
                }
            }
        }

        Commands::Batch { folder, recommend, output } => {
            let config = Config::load()?;
            let images = scanner::scan_folder(&folder)?;
            if images.is_empty() {
                return Err(derm_ai::DermAiError::NoImagesFound(folder.display().to_string()).into());
            }
            tracing::info!("{}枚の画像を検出", images.len());

            let entries = batch::analyze_images(&images, &config, recommend, output.is_some())?;
            let failed = entries.iter().filter(|e| !e.is_success()).count();
            write_json(&entries, output.as_deref())?;

            tracing::info!("解析完了: 成功 {} / 失敗 {}", entries.len() - failed, failed);
        }

        Commands::Products { skin_type } => {
            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct ProductsResponse<'a> {
                success: bool,
                skin_type: &'a str,
                products: &'static [catalog::Product],
            }

            let response = ProductsResponse {
                success: true,
                skin_type: &skin_type,
                products: catalog::products_for(&skin_type),
            };
            write_json(&response, None)?;
        }

        Commands::Lipsticks { skin_tone } => {
            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct LipsticksResponse<'a> {
                success: bool,
                skin_tone: &'a str,
                lipsticks: &'static [catalog::Lipstick],
            }

            let response = LipsticksResponse {
                success: true,
                skin_tone: &skin_tone,
                lipsticks: catalog::lipsticks_for(&skin_tone),
            };
            write_json(&response, None)?;
        }

        Commands::Style { skin_tone } => {
            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct StyleResponse<'a> {
                success: bool,
                skin_tone: &'a str,
                style_recommendations: &'static catalog::StyleGuide,
            }

            let response = StyleResponse {
                success: true,
                skin_tone: &skin_tone,
                style_recommendations: catalog::style_for(&skin_tone),
            };
            write_json(&response, None)?;
        }

        Commands::Tips { skin_type } => {
            #[derive(Serialize)]
            #[serde(rename_all = "camelCase")]
            struct TipsResponse<'a> {
                success: bool,
                skin_type: &'a str,
                tips: Vec<String>,
            }

            let response = TipsResponse {
                success: true,
                skin_type: &skin_type,
                tips: advice::tips_for_name(&skin_type),
            };
            write_json(&response, None)?;
        }

        Commands::Config { show, set_timeout, set_max_pixels } => {
            // 壊れた設定ファイルも上書きで修復できるように既定値へフォールバック
            let mut config = Config::load_or_default(&Config::config_path()?);

            if set_timeout.is_some() || set_max_pixels.is_some() {
                if let Some(seconds) = set_timeout {
                    config.timeout_seconds = seconds;
                }
                if let Some(pixels) = set_max_pixels {
                    config.max_pixels = pixels;
                }
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show {
                println!("設定:");
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  最大画素数: {}px", config.max_pixels);
                println!("  最大ペイロード: {} bytes", config.max_payload_bytes);
                println!(
                    "  バッチスレッド数: {}",
                    if config.batch_threads == 0 { "自動".to_string() } else { config.batch_threads.to_string() }
                );
            }
        }

        Commands::Health => {
            let health = serde_json::json!({
                "status": "healthy",
                "message": "DermAI is running",
                "version": env!("CARGO_PKG_VERSION"),
            });
            write_json(&health, None)?;
        }
    }

    Ok(())
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            eprintln!("✔ 結果を保存: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
