//! 肌トーン推定
//!
//! 300x300に引き伸ばした画像からYCrCbの固定帯域で肌画素を抽出し、
//! その平均色（1クラスタの重心と同値）を代表色とする。
//! 肌画素が1つもなければ中央1/3領域の平均色を使う。

use super::imaging::{resize_rgb, to_ycrcb};
use crate::error::AnalysisError;
use derm_ai_common::ToneResult;
use image::RgbImage;
use tracing::{debug, warn};

pub const TONE_WORKING_SIZE: u32 = 300;

// (Y, Cr, Cb) の下限・上限（両端含む）
const SKIN_LOWER: [u8; 3] = [0, 133, 77];
const SKIN_UPPER: [u8; 3] = [255, 173, 127];

pub fn is_skin_pixel(rgb: [u8; 3]) -> bool {
    let ycrcb = to_ycrcb(rgb);
    (0..3).all(|i| SKIN_LOWER[i] <= ycrcb[i] && ycrcb[i] <= SKIN_UPPER[i])
}

pub fn estimate_tone(image: &RgbImage) -> Result<ToneResult, AnalysisError> {
    let working = resize_rgb(image, TONE_WORKING_SIZE, TONE_WORKING_SIZE);

    let dominant = match skin_mean(&working) {
        Some((rgb, count)) => {
            debug!(skin_pixels = count, "肌マスク抽出");
            rgb
        }
        None => {
            warn!("肌画素が見つからないため中央領域の平均色を使用");
            center_mean(&working)
                .ok_or_else(|| AnalysisError::new("center region is empty"))?
        }
    };

    let tone = ToneResult::from_dominant(dominant);
    debug!(hex = %tone.hex_color, brightness = tone.brightness, category = %tone.category, "トーン推定完了");
    Ok(tone)
}

fn skin_mean(working: &RgbImage) -> Option<([u8; 3], u64)> {
    mean_rgb(working.pixels().map(|p| p.0).filter(|&rgb| is_skin_pixel(rgb)))
}

fn center_mean(working: &RgbImage) -> Option<[u8; 3]> {
    let (w, h) = working.dimensions();
    let (x0, x1) = (w / 3, 2 * w / 3);
    let (y0, y1) = (h / 3, 2 * h / 3);

    let region = (y0..y1).flat_map(|y| (x0..x1).map(move |x| (x, y)));
    mean_rgb(region.map(|(x, y)| working.get_pixel(x, y).0)).map(|(rgb, _)| rgb)
}

/// チャンネルごとの平均（小数点以下切り捨て）
fn mean_rgb(pixels: impl Iterator<Item = [u8; 3]>) -> Option<([u8; 3], u64)> {
    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for rgb in pixels {
        for (sum, &c) in sums.iter_mut().zip(&rgb) {
            *sum += u64::from(c);
        }
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some((sums.map(|s| (s / count) as u8), count))
}
