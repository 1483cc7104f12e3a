//! Data URL → RGB画素バッファ
//!
//! "data:image/jpeg;base64,/9j/..." のヘッダを除去してBase64デコードし、
//! 画像として読み込んで3チャンネルに正規化する。

use crate::error::DecodeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageError, ImageReader, RgbImage};
use std::io::Cursor;
use tracing::debug;

/// 入力サイズの上限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    pub max_payload_bytes: usize,
    pub max_pixels: u64,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_payload_bytes: 20 * 1024 * 1024,
            max_pixels: 40_000_000,
        }
    }
}

/// Data URLからBase64データ部分を抽出
pub fn extract_payload(data_url: &str) -> Result<&str, DecodeError> {
    data_url
        .split(',')
        .nth(1)
        .filter(|payload| !payload.trim().is_empty())
        .ok_or(DecodeError::MissingPayload)
}

pub fn decode_data_url(data_url: &str, limits: &DecodeLimits) -> Result<RgbImage, DecodeError> {
    let payload = extract_payload(data_url)?;

    // 改行などの空白は無視する
    let cleaned: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();

    let estimated = cleaned.len() / 4 * 3;
    if estimated > limits.max_payload_bytes + 2 {
        return Err(DecodeError::PayloadTooLarge {
            bytes: estimated,
            limit: limits.max_payload_bytes,
        });
    }

    let bytes = STANDARD.decode(cleaned.as_bytes())?;
    decode_bytes(&bytes, limits)
}

/// エンコード済み画像バイト列をデコード
pub fn decode_bytes(bytes: &[u8], limits: &DecodeLimits) -> Result<RgbImage, DecodeError> {
    if bytes.len() > limits.max_payload_bytes {
        return Err(DecodeError::PayloadTooLarge {
            bytes: bytes.len(),
            limit: limits.max_payload_bytes,
        });
    }

    // 画素を展開する前にヘッダの解像度を確認
    let (width, height) = reader(bytes)?.into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage);
    }
    if u64::from(width) * u64::from(height) > limits.max_pixels {
        return Err(DecodeError::ResolutionTooLarge {
            width,
            height,
            limit: limits.max_pixels,
        });
    }

    let decoded = reader(bytes)?.decode()?;
    debug!(width, height, color = ?decoded.color(), "画像デコード完了");

    Ok(normalize_channels(decoded))
}

fn reader(bytes: &[u8]) -> Result<ImageReader<Cursor<&[u8]>>, DecodeError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::UnsupportedFormat(ImageError::IoError(e)))
}

/// 3チャンネルRGBに正規化
///
/// グレースケールは3チャンネルに複製、アルファは合成せずに捨てる。
pub fn normalize_channels(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}
