//! 解析パイプラインの結合テスト
//!
//! メモリ上で合成した画像をPNGのData URLにして解析する

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use derm_ai::{analyze, analyze_image, analyze_with_timeout, DecodeLimits, DermAiError};
use derm_ai_common::advice::{base_concerns, LOW_HYDRATION_CONCERN, WEAK_BARRIER_CONCERN};
use derm_ai_common::{SkinTone, SkinType};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::time::Duration;

fn data_url(image: RgbImage) -> String {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(image)
        .write_to(&mut buf, ImageFormat::Png)
        .expect("PNGエンコード失敗");
    format!("data:image/png;base64,{}", STANDARD.encode(buf.into_inner()))
}

/// 白一色 → Fair / #ffffff
#[test]
fn test_uniform_white() {
    let report = analyze(&data_url(RgbImage::from_pixel(300, 300, Rgb([255, 255, 255]))))
        .expect("解析失敗");

    assert_eq!(report.skin_tone.brightness, 255.0);
    assert_eq!(report.skin_tone.category, SkinTone::Fair);
    assert_eq!(report.skin_tone.hex_color, "#ffffff");
    assert_eq!(report.skin_tone.rgb, [255, 255, 255]);
}

/// 黒一色 → 肌マスク空 → 中央領域フォールバック → Deep
#[test]
fn test_uniform_black() {
    let report = analyze(&data_url(RgbImage::from_pixel(300, 300, Rgb([0, 0, 0]))))
        .expect("解析失敗");

    assert_eq!(report.skin_tone.rgb, [0, 0, 0]);
    assert_eq!(report.skin_tone.brightness, 0.0);
    assert_eq!(report.skin_tone.category, SkinTone::Deep);
    assert_eq!(report.skin_tone.hex_color, "#000000");
}

/// 一様な画像はテクスチャがなく Dry、指標は上限付近
#[test]
fn test_uniform_image_report() {
    let report = analyze(&data_url(RgbImage::from_pixel(120, 90, Rgb([224, 172, 140]))))
        .expect("解析失敗");

    assert_eq!(report.skin_type, SkinType::Dry);
    assert_eq!(report.skin_type_confidence, 0.82);
    assert_eq!(report.skin_tone.category, SkinTone::Medium);
    assert_eq!(report.hydration, 95);
    assert_eq!(report.tips.len(), 7);

    // Dryの基本4件 + しきい値による追記
    let base = base_concerns(SkinType::Dry);
    assert_eq!(&report.concerns[..base.len()], base);
    assert!(!report.concerns.iter().any(|c| c == LOW_HYDRATION_CONCERN));

    assert_eq!(report.technical_metrics.texture_variance, 0.0);
    assert_eq!(report.technical_metrics.brightness_std, 0.0);
    assert_eq!(report.technical_metrics.tone_brightness, report.skin_tone.brightness);
}

/// 赤みの強い画像はバリア懸念が付く
#[test]
fn test_red_image_adds_barrier_concern() {
    let report = analyze(&data_url(RgbImage::from_pixel(64, 64, Rgb([250, 60, 60]))))
        .expect("解析失敗");

    assert_eq!(report.barrier_score, 70);
    assert_eq!(report.concerns.last().map(String::as_str), Some(WEAK_BARRIER_CONCERN));
}

/// 指標は常に範囲内の整数
#[test]
fn test_metric_ranges_for_varied_images() {
    let images = vec![
        RgbImage::from_fn(200, 150, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8])),
        RgbImage::from_fn(50, 50, |x, y| if (x + y) % 2 == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }),
        RgbImage::from_pixel(10, 10, Rgb([255, 0, 0])),
        RgbImage::from_pixel(1, 1, Rgb([0, 255, 0])),
    ];

    for image in images {
        let report = analyze_image(&image).expect("解析失敗");
        assert!((60..=95).contains(&report.hydration), "hydration={}", report.hydration);
        assert!((70..=95).contains(&report.barrier_score), "barrier={}", report.barrier_score);
        assert!((75..=98).contains(&report.photo_clarity), "clarity={}", report.photo_clarity);
    }
}

/// 同じ入力なら同じ結果
#[test]
fn test_deterministic() {
    let image = RgbImage::from_fn(180, 140, |x, y| Rgb([(200 + x % 40) as u8, (150 + y % 30) as u8, 120]));
    let url = data_url(image);

    let first = analyze(&url).expect("解析失敗");
    let second = analyze(&url).expect("解析失敗");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first.skin_tone).unwrap(),
        serde_json::to_string(&second.skin_tone).unwrap()
    );
}

/// 空の画素バッファは解析エラー
#[test]
fn test_empty_buffer_is_analysis_error() {
    let err = analyze_image(&RgbImage::new(0, 0)).unwrap_err();
    assert_eq!(err.to_string(), "Analysis failed: empty pixel buffer");
}

#[tokio::test]
async fn test_analyze_with_timeout_success() {
    let url = data_url(RgbImage::from_pixel(60, 60, Rgb([255, 255, 255])));
    let report = analyze_with_timeout(url, DecodeLimits::default(), Duration::from_secs(30))
        .await
        .expect("解析失敗");
    assert_eq!(report.skin_tone.category, SkinTone::Fair);
}

#[tokio::test]
async fn test_analyze_with_timeout_propagates_decode_error() {
    let result = analyze_with_timeout(
        "data:image/png;base64,!!!".to_string(),
        DecodeLimits::default(),
        Duration::from_secs(30),
    )
    .await;
    assert!(matches!(result, Err(DermAiError::Decode(_))));
}

#[tokio::test]
async fn test_analyze_with_zero_timeout() {
    let url = data_url(RgbImage::from_pixel(1500, 1500, Rgb([200, 150, 120])));
    let result = analyze_with_timeout(url, DecodeLimits::default(), Duration::ZERO).await;
    assert!(matches!(result, Err(DermAiError::Timeout { limit }) if limit == Duration::ZERO));
}
