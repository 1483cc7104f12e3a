//! 解析結果の型定義
//!
//! 解析パイプラインと呼び出し側で共有される型:
//! - SkinTone / SkinType: 出力カテゴリ（推薦テーブルのキー）
//! - ToneResult / TypeResult / Metrics: 各ステージの出力
//! - AnalysisReport: 最終出力（シリアライズ形式は外部互換）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 肌トーン（明るさ区分）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinTone {
    Fair,
    Light,
    Medium,
    Tan,
    Deep,
}

impl SkinTone {
    pub const ALL: [SkinTone; 5] = [
        SkinTone::Fair,
        SkinTone::Light,
        SkinTone::Medium,
        SkinTone::Tan,
        SkinTone::Deep,
    ];

    /// 代表色の明るさからトーン区分を決定
    ///
    /// 暗い側から順に `<` で判定するため、境界値はひとつ暗い区分に入る
    /// （例: 140.0 → Tan）。
    pub fn from_brightness(brightness: f64) -> Self {
        if brightness < 140.0 {
            SkinTone::Deep
        } else if brightness < 170.0 {
            SkinTone::Tan
        } else if brightness < 195.0 {
            SkinTone::Medium
        } else if brightness < 220.0 {
            SkinTone::Light
        } else {
            SkinTone::Fair
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinTone::Fair => "Fair",
            SkinTone::Light => "Light",
            SkinTone::Medium => "Medium",
            SkinTone::Tan => "Tan",
            SkinTone::Deep => "Deep",
        }
    }
}

impl SkinTone {
    /// テーブルのキーとして完全一致で引く（大文字小文字も区別）
    pub fn from_key(key: &str) -> Option<Self> {
        SkinTone::ALL.into_iter().find(|tone| tone.as_str() == key)
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinTone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SkinTone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSkinTone(s.to_string()))
    }
}

/// 肌タイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkinType {
    Normal,
    Dry,
    Oily,
    Combination,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Normal,
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Normal => "Normal",
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Combination => "Combination",
            SkinType::Sensitive => "Sensitive",
        }
    }
}

impl SkinType {
    /// テーブルのキーとして完全一致で引く（大文字小文字も区別）
    pub fn from_key(key: &str) -> Option<Self> {
        SkinType::ALL.into_iter().find(|t| t.as_str() == key)
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SkinType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSkinType(s.to_string()))
    }
}

/// トーン推定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneResult {
    #[serde(rename = "name")]
    pub category: SkinTone,

    /// "#rrggbb"（小文字）
    #[serde(rename = "hex")]
    pub hex_color: String,

    pub rgb: [u8; 3],

    pub brightness: f64,
}

impl ToneResult {
    /// 代表色からトーン結果を組み立てる（hex/rgb/明るさは常に同じ値から導出）
    pub fn from_dominant(rgb: [u8; 3]) -> Self {
        let brightness = rgb.iter().map(|&c| f64::from(c)).sum::<f64>() / 3.0;
        Self {
            category: SkinTone::from_brightness(brightness),
            hex_color: format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]),
            rgb,
            brightness,
        }
    }
}

/// 肌タイプ判定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeResult {
    pub category: SkinType,
    pub confidence: f64,
    pub texture_variance: f64,
    pub brightness_std: f64,

    /// 診断用（判定には使わない）
    #[serde(default)]
    pub local_contrast: f64,
}

/// ウェルネス指標（範囲はクランプで保証）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// 60..=95
    pub hydration: u8,
    /// 70..=95
    pub barrier_score: u8,
    /// 75..=98
    pub photo_clarity: u8,
}

/// 診断用の生統計値
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalMetrics {
    pub texture_variance: f64,
    pub brightness_std: f64,
    pub tone_brightness: f64,
}

/// 解析レポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub skin_type: SkinType,
    pub skin_type_confidence: f64,
    pub skin_tone: ToneResult,
    pub hydration: u8,
    pub barrier_score: u8,
    pub photo_clarity: u8,
    pub concerns: Vec<String>,
    pub tips: Vec<String>,
    pub technical_metrics: TechnicalMetrics,
}

impl AnalysisReport {
    /// 各ステージの結果からレポートを組み立てる
    pub fn assemble(
        tone: ToneResult,
        skin_type: &TypeResult,
        metrics: Metrics,
        concerns: Vec<String>,
        tips: Vec<String>,
    ) -> Self {
        let technical_metrics = TechnicalMetrics {
            texture_variance: skin_type.texture_variance,
            brightness_std: skin_type.brightness_std,
            tone_brightness: tone.brightness,
        };

        Self {
            skin_type: skin_type.category,
            skin_type_confidence: skin_type.confidence,
            skin_tone: tone,
            hydration: metrics.hydration,
            barrier_score: metrics.barrier_score,
            photo_clarity: metrics.photo_clarity,
            concerns,
            tips,
            technical_metrics,
        }
    }
}
