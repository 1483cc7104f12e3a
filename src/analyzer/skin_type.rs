//! 肌タイプ判定
//!
//! 400x400グレースケールのテクスチャ統計量を、上から順に評価する
//! しきい値ルールで分類する。ルールの範囲は重なっており、順序が優先度。

use super::imaging::{box_blur, diff_std, laplacian_variance, mean_std, resize_gray, std_dev_u8, to_gray};
use crate::error::AnalysisError;
use derm_ai_common::{SkinType, TypeResult};
use image::{GrayImage, RgbImage};
use tracing::debug;

pub const TYPE_WORKING_SIZE: u32 = 400;

/// テクスチャ統計量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureStats {
    /// ラプラシアン応答の分散
    pub texture_variance: f64,
    /// 輝度の標準偏差
    pub brightness_std: f64,
    /// 5x5平均ぼかしとの差分の標準偏差（診断用）
    pub local_contrast: f64,
}

struct Rule {
    matches: fn(&TextureStats) -> bool,
    skin_type: SkinType,
    confidence: f64,
}

const RULES: [Rule; 4] = [
    Rule {
        matches: |s| s.texture_variance > 500.0 && s.brightness_std > 40.0,
        skin_type: SkinType::Oily,
        confidence: 0.85,
    },
    Rule {
        matches: |s| s.texture_variance < 200.0 && s.brightness_std < 30.0,
        skin_type: SkinType::Dry,
        confidence: 0.82,
    },
    Rule {
        matches: |s| s.brightness_std > 45.0,
        skin_type: SkinType::Combination,
        confidence: 0.78,
    },
    Rule {
        matches: |s| s.texture_variance < 250.0,
        skin_type: SkinType::Sensitive,
        confidence: 0.75,
    },
];

const FALLBACK: (SkinType, f64) = (SkinType::Normal, 0.80);

pub fn texture_stats(gray: &GrayImage) -> TextureStats {
    let texture_variance = laplacian_variance(gray);
    let brightness_std = std_dev_u8(gray.as_raw());
    let local_contrast = diff_std(gray, &box_blur(gray, 5));

    TextureStats {
        texture_variance,
        brightness_std,
        local_contrast,
    }
}

/// 最初に一致したルールの (肌タイプ, 信頼度)
pub fn classify(stats: &TextureStats) -> (SkinType, f64) {
    RULES
        .iter()
        .find(|rule| (rule.matches)(stats))
        .map(|rule| (rule.skin_type, rule.confidence))
        .unwrap_or(FALLBACK)
}

pub fn classify_skin_type(image: &RgbImage) -> Result<TypeResult, AnalysisError> {
    let gray = resize_gray(&to_gray(image), TYPE_WORKING_SIZE, TYPE_WORKING_SIZE);
    let stats = texture_stats(&gray);

    if !stats.texture_variance.is_finite() || !stats.brightness_std.is_finite() {
        return Err(AnalysisError::new(format!(
            "non-finite texture statistics (variance={}, std={})",
            stats.texture_variance, stats.brightness_std
        )));
    }

    let (category, confidence) = classify(&stats);
    debug!(
        texture_variance = stats.texture_variance,
        brightness_std = stats.brightness_std,
        local_contrast = stats.local_contrast,
        mean = mean_std(gray.as_raw().iter().map(|&v| f64::from(v))).0,
        %category,
        "肌タイプ判定完了"
    );

    Ok(TypeResult {
        category,
        confidence,
        texture_variance: stats.texture_variance,
        brightness_std: stats.brightness_std,
        local_contrast: stats.local_contrast,
    })
}
