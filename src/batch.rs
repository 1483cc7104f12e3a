//! フォルダ一括解析
//!
//! 各画像は独立に解析される（共有状態なし）ため rayon で並列実行する。
//! 1枚の失敗はその画像のエントリにエラーとして記録し、他の画像は続行する。

use crate::analyzer::{self, DecodeLimits};
use crate::config::Config;
use crate::error::{DermAiError, Result};
use crate::scanner::ImageInfo;
use derm_ai_common::{AnalysisPayload, ApiResponse};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

/// 1画像分の結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub file_name: String,

    #[serde(flatten)]
    pub response: ApiResponse<AnalysisPayload>,
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        self.response.success
    }
}

pub fn analyze_images(
    images: &[ImageInfo],
    config: &Config,
    recommend: bool,
    show_progress: bool,
) -> Result<Vec<BatchEntry>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.batch_threads)
        .build()
        .map_err(|e| DermAiError::Config(format!("スレッドプール作成エラー: {}", e)))?;

    let progress = if show_progress {
        let pb = ProgressBar::new(images.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let limits = config.decode_limits();
    let entries = pool.install(|| {
        images
            .par_iter()
            .map(|image| {
                let entry = analyze_one(image, &limits, recommend);
                progress.inc(1);
                entry
            })
            .collect::<Vec<_>>()
    });

    progress.finish_with_message("完了");
    Ok(entries)
}

fn analyze_one(image: &ImageInfo, limits: &DecodeLimits, recommend: bool) -> BatchEntry {
    let result = std::fs::read(&image.path)
        .map_err(DermAiError::from)
        .and_then(|bytes| analyzer::analyze_bytes(&bytes, limits));

    let response = match result {
        Ok(report) => ApiResponse::ok(AnalysisPayload::new(report, recommend)),
        Err(e) => {
            warn!(file = %image.file_name, error = %e, "解析失敗");
            ApiResponse::err(e.to_string())
        }
    };

    BatchEntry {
        file_name: image.file_name.clone(),
        response,
    }
}
