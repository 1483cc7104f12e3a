//! ウェルネス指標（保湿・バリア・写真の鮮明度）
//!
//! いずれも正規化済み画像だけから計算し、四捨五入後に範囲へクランプする。

use super::imaging::{bilateral_filter, diff_std, laplacian_variance, mean_std, resize_gray, std_dev_u8, to_gray};
use crate::error::AnalysisError;
use derm_ai_common::Metrics;
use image::RgbImage;
use std::ops::RangeInclusive;
use tracing::debug;

pub const HYDRATION_RANGE: RangeInclusive<u8> = 60..=95;
pub const BARRIER_RANGE: RangeInclusive<u8> = 70..=95;
pub const CLARITY_RANGE: RangeInclusive<u8> = 75..=98;

const HYDRATION_SIZE: u32 = 400;
const BILATERAL_DIAMETER: u32 = 9;
const BILATERAL_SIGMA: f64 = 75.0;

fn to_score(value: f64, range: &RangeInclusive<u8>, name: &str) -> Result<u8, AnalysisError> {
    if !value.is_finite() {
        return Err(AnalysisError::new(format!("{} is not finite ({})", name, value)));
    }
    let (min, max) = (f64::from(*range.start()), f64::from(*range.end()));
    Ok(value.round().clamp(min, max) as u8)
}

/// 保湿度: バイラテラル平滑化との差分が小さいほど滑らか
pub fn hydration(image: &RgbImage) -> Result<u8, AnalysisError> {
    let gray = resize_gray(&to_gray(image), HYDRATION_SIZE, HYDRATION_SIZE);
    let smoothed = bilateral_filter(&gray, BILATERAL_DIAMETER, BILATERAL_SIGMA, BILATERAL_SIGMA);
    let smoothness = 1.0 - diff_std(&gray, &smoothed) / 255.0;
    debug!(smoothness, "保湿度");
    to_score(60.0 + smoothness * 35.0, &HYDRATION_RANGE, "hydration")
}

/// バリア: 赤み (R-G) が強いほど、色のばらつきが大きいほど低い
pub fn barrier_score(image: &RgbImage) -> Result<u8, AnalysisError> {
    let channel_mean = |c: usize| mean_std(image.pixels().map(|p| f64::from(p.0[c]))).0;
    let redness = channel_mean(0) - channel_mean(1);
    let uniformity = 1.0 - std_dev_u8(image.as_raw()) / 255.0;
    debug!(redness, uniformity, "バリアスコア");
    to_score(70.0 + uniformity * 20.0 - redness / 10.0, &BARRIER_RANGE, "barrier score")
}

/// 写真の鮮明度: 原寸グレースケールのラプラシアン分散と輝度の均一さ
pub fn photo_clarity(image: &RgbImage) -> Result<u8, AnalysisError> {
    let gray = to_gray(image);
    let sharpness = laplacian_variance(&gray);
    let brightness_uniformity = 1.0 - std_dev_u8(gray.as_raw()) / 255.0;
    debug!(sharpness, brightness_uniformity, "写真鮮明度");
    to_score(
        75.0 + (sharpness / 1000.0) * 15.0 + brightness_uniformity * 8.0,
        &CLARITY_RANGE,
        "photo clarity",
    )
}

pub fn estimate_metrics(image: &RgbImage) -> Result<Metrics, AnalysisError> {
    Ok(Metrics {
        hydration: hydration(image)?,
        barrier_score: barrier_score(image)?,
        photo_clarity: photo_clarity(image)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn assert_in_ranges(m: &Metrics) {
        assert!(HYDRATION_RANGE.contains(&m.hydration), "hydration={}", m.hydration);
        assert!(BARRIER_RANGE.contains(&m.barrier_score), "barrier={}", m.barrier_score);
        assert!(CLARITY_RANGE.contains(&m.photo_clarity), "clarity={}", m.photo_clarity);
    }

    #[test]
    fn test_uniform_gray() {
        let img = RgbImage::from_pixel(40, 40, Rgb([128, 128, 128]));
        let m = estimate_metrics(&img).unwrap();
        // 差分0 → 60 + 35
        assert_eq!(m.hydration, 95);
        // redness 0, uniformity 1 → 90
        assert_eq!(m.barrier_score, 90);
        // sharpness 0, uniformity 1 → 83
        assert_eq!(m.photo_clarity, 83);
    }

    #[test]
    fn test_strong_redness_clamped_to_minimum() {
        let img = RgbImage::from_pixel(30, 30, Rgb([255, 0, 0]));
        // 70 + 20 - 25.5 = 64.5 → 70
        assert_eq!(barrier_score(&img).unwrap(), 70);
    }

    #[test]
    fn test_green_cast_clamped_to_maximum() {
        let img = RgbImage::from_pixel(30, 30, Rgb([0, 255, 0]));
        // 70 + 20 + 25.5 → 95
        assert_eq!(barrier_score(&img).unwrap(), 95);
    }

    #[test]
    fn test_sharp_checkerboard_clamped() {
        let img = RgbImage::from_fn(64, 64, |x, y| {
            if (x + y) % 2 == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
        });
        let m = estimate_metrics(&img).unwrap();
        assert_eq!(m.photo_clarity, 98);
        assert_in_ranges(&m);
    }

    #[test]
    fn test_ranges_hold_for_noise() {
        let mut seed = 12345u32;
        let img = RgbImage::from_fn(80, 60, |_, _| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let v = (seed >> 16) as u8;
            Rgb([v, v.wrapping_mul(3), v.wrapping_add(90)])
        });
        assert_in_ranges(&estimate_metrics(&img).unwrap());
    }

    #[test]
    fn test_to_score_rejects_nan() {
        assert!(to_score(f64::NAN, &HYDRATION_RANGE, "hydration").is_err());
        assert_eq!(to_score(94.5, &HYDRATION_RANGE, "hydration").unwrap(), 95);
        assert_eq!(to_score(1000.0, &HYDRATION_RANGE, "hydration").unwrap(), 95);
    }
}
