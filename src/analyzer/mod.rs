//! 肌解析パイプライン
//!
//! デコード → トーン推定 → 肌タイプ判定 → 指標算出 → 懸念事項 → Tips → レポート組み立て。
//! どこかのステージが失敗した場合は全体を失敗とし、部分的なレポートは返さない。

pub mod decoder;
pub mod imaging;
pub mod metrics;
pub mod skin_type;
pub mod tone;

pub use decoder::DecodeLimits;

use crate::error::{AnalysisError, DermAiError, Result};
use derm_ai_common::{detect_concerns, generate_tips, AnalysisReport};
use image::RgbImage;
use std::time::Duration;
use tracing::info;

/// Data URL 形式の画像を解析（既定の入力上限）
pub fn analyze(data_url: &str) -> Result<AnalysisReport> {
    analyze_with_limits(data_url, &DecodeLimits::default())
}

pub fn analyze_with_limits(data_url: &str, limits: &DecodeLimits) -> Result<AnalysisReport> {
    let image = decoder::decode_data_url(data_url, limits)?;
    Ok(analyze_image(&image)?)
}

/// エンコード済み画像ファイルの中身を解析
pub fn analyze_bytes(bytes: &[u8], limits: &DecodeLimits) -> Result<AnalysisReport> {
    let image = decoder::decode_bytes(bytes, limits)?;
    Ok(analyze_image(&image)?)
}

/// デコード済みRGB画像を解析
pub fn analyze_image(image: &RgbImage) -> std::result::Result<AnalysisReport, AnalysisError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AnalysisError::new("empty pixel buffer"));
    }

    let tone = tone::estimate_tone(image)?;
    let skin_type = skin_type::classify_skin_type(image)?;
    let metrics = metrics::estimate_metrics(image)?;

    let concerns = detect_concerns(skin_type.category, &metrics);
    let tips = generate_tips(skin_type.category);

    info!(
        width,
        height,
        skin_type = %skin_type.category,
        skin_tone = %tone.category,
        hydration = metrics.hydration,
        barrier_score = metrics.barrier_score,
        photo_clarity = metrics.photo_clarity,
        "解析完了"
    );

    Ok(AnalysisReport::assemble(tone, &skin_type, metrics, concerns, tips))
}

/// タイムアウト付きで Data URL を解析
pub async fn analyze_with_timeout(
    data_url: String,
    limits: DecodeLimits,
    timeout: Duration,
) -> Result<AnalysisReport> {
    run_with_timeout(timeout, move || analyze_with_limits(&data_url, &limits)).await
}

/// タイムアウト付きで画像バイト列を解析
pub async fn analyze_bytes_with_timeout(
    bytes: Vec<u8>,
    limits: DecodeLimits,
    timeout: Duration,
) -> Result<AnalysisReport> {
    run_with_timeout(timeout, move || analyze_bytes(&bytes, &limits)).await
}

/// CPU処理をブロッキングプールで実行し、時間切れなら結果を捨てる
async fn run_with_timeout<F>(timeout: Duration, job: F) -> Result<AnalysisReport>
where
    F: FnOnce() -> Result<AnalysisReport> + Send + 'static,
{
    let task = tokio::task::spawn_blocking(job);

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(AnalysisError::new(join_error.to_string()).into()),
        Err(_) => Err(DermAiError::Timeout { limit: timeout }),
    }
}
