//! 画像処理の基本演算
//!
//! グレースケール化・色空間変換・リサイズ・畳み込みフィルタ・統計量。
//! 境界は reflect-101（`gfedcb|abcdefgh|gfedcba`）で扱う。

use image::{GrayImage, ImageBuffer, Luma, Pixel, RgbImage};

/// BT.601 輝度
pub fn luma(rgb: [u8; 3]) -> u8 {
    let y = 0.299 * f64::from(rgb[0]) + 0.587 * f64::from(rgb[1]) + 0.114 * f64::from(rgb[2]);
    y.round().clamp(0.0, 255.0) as u8
}

/// RGB → (Y, Cr, Cb)
pub fn to_ycrcb(rgb: [u8; 3]) -> [u8; 3] {
    let r = f64::from(rgb[0]);
    let g = f64::from(rgb[1]);
    let b = f64::from(rgb[2]);
    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cr = (r - y) * 0.713 + 128.0;
    let cb = (b - y) * 0.564 + 128.0;
    [saturate(y), saturate(cr), saturate(cb)]
}

fn saturate(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

pub fn to_gray(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(image.get_pixel(x, y).0)])
    })
}

/// 出力1画素ぶんのバイリニア参照（下側インデックスと上側の重み）
#[derive(Debug, Clone, Copy, PartialEq)]
struct LinearTap {
    lo: u32,
    hi: u32,
    weight: f64,
}

/// 画素中心合わせの2タップ: `src = (dst + 0.5) * scale - 0.5` を端でクランプ。
/// 縮小時も窓を広げないので、元画像の細かいテクスチャがそのまま残る。
fn linear_taps(src_len: u32, dst_len: u32) -> Vec<LinearTap> {
    let scale = f64::from(src_len) / f64::from(dst_len);
    let last = src_len.saturating_sub(1);
    (0..dst_len)
        .map(|d| {
            let pos = (f64::from(d) + 0.5) * scale - 0.5;
            let floor = pos.floor();
            if floor < 0.0 {
                return LinearTap { lo: 0, hi: 0, weight: 0.0 };
            }
            let lo = floor as u32;
            if lo >= last {
                return LinearTap { lo: last, hi: last, weight: 0.0 };
            }
            LinearTap { lo, hi: lo + 1, weight: pos - floor }
        })
        .collect()
}

fn resize_linear<P>(image: &ImageBuffer<P, Vec<u8>>, width: u32, height: u32) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8>,
{
    let xs = linear_taps(image.width(), width);
    let ys = linear_taps(image.height(), height);

    ImageBuffer::from_fn(width, height, |x, y| {
        let tx = xs[x as usize];
        let ty = ys[y as usize];
        let p00 = image.get_pixel(tx.lo, ty.lo).channels();
        let p01 = image.get_pixel(tx.hi, ty.lo).channels();
        let p10 = image.get_pixel(tx.lo, ty.hi).channels();
        let p11 = image.get_pixel(tx.hi, ty.hi).channels();

        let mut out = *image.get_pixel(tx.lo, ty.lo);
        for (c, value) in out.channels_mut().iter_mut().enumerate() {
            let top = f64::from(p00[c]) * (1.0 - tx.weight) + f64::from(p01[c]) * tx.weight;
            let bottom = f64::from(p10[c]) * (1.0 - tx.weight) + f64::from(p11[c]) * tx.weight;
            *value = saturate(top * (1.0 - ty.weight) + bottom * ty.weight);
        }
        out
    })
}

/// アスペクト比を無視して指定サイズに引き伸ばす（同サイズならコピーのみ）
pub fn resize_rgb(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    resize_linear(image, width, height)
}

pub fn resize_gray(image: &GrayImage, width: u32, height: u32) -> GrayImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    resize_linear(image, width, height)
}

fn reflect101(index: i64, len: i64) -> usize {
    if len == 1 {
        return 0;
    }
    let mut i = index;
    while i < 0 || i >= len {
        i = if i < 0 { -i } else { 2 * len - 2 - i };
    }
    i as usize
}

fn sample(image: &GrayImage, x: i64, y: i64) -> f64 {
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));
    let idx = reflect101(y, h) * w as usize + reflect101(x, w);
    f64::from(image.as_raw()[idx])
}

/// 3x3 ラプラシアン `[0,1,0; 1,-4,1; 0,1,0]` の応答（行優先で逐次生成）
pub fn laplacian(image: &GrayImage) -> impl Iterator<Item = f64> + '_ {
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));
    (0..h).flat_map(move |y| {
        (0..w).map(move |x| {
            let center = sample(image, x, y);
            let sum = sample(image, x, y - 1)
                + sample(image, x, y + 1)
                + sample(image, x - 1, y)
                + sample(image, x + 1, y);
            sum - 4.0 * center
        })
    })
}

/// ラプラシアン応答の母分散（応答バッファは確保しない）
pub fn laplacian_variance(image: &GrayImage) -> f64 {
    let (_, std) = mean_std(laplacian(image));
    std * std
}

/// 正方形窓の平均ぼかし（8bitに丸める）
pub fn box_blur(image: &GrayImage, size: u32) -> GrayImage {
    let radius = i64::from(size / 2);
    let area = f64::from(size * size);
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let (cx, cy) = (i64::from(x), i64::from(y));
        let mut sum = 0.0;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                sum += sample(image, cx + dx, cy + dy);
            }
        }
        Luma([saturate(sum / area)])
    })
}

/// バイラテラルフィルタ（円形窓、8bitに丸める）
pub fn bilateral_filter(image: &GrayImage, diameter: u32, sigma_color: f64, sigma_space: f64) -> GrayImage {
    let radius = i64::from(diameter / 2);
    let color_coeff = -0.5 / (sigma_color * sigma_color);
    let space_coeff = -0.5 / (sigma_space * sigma_space);

    let color_weights: Vec<f64> = (0..256)
        .map(|d| (f64::from(d) * f64::from(d) * color_coeff).exp())
        .collect();

    let mut offsets = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let r2 = (dx * dx + dy * dy) as f64;
            if r2.sqrt() > radius as f64 {
                continue;
            }
            offsets.push((dx, dy, (r2 * space_coeff).exp()));
        }
    }

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let (cx, cy) = (i64::from(x), i64::from(y));
        let center = sample(image, cx, cy);
        let mut sum = 0.0;
        let mut weight_sum = 0.0;
        for &(dx, dy, space_weight) in &offsets {
            let value = sample(image, cx + dx, cy + dy);
            let weight = space_weight * color_weights[(value - center).abs() as usize];
            sum += value * weight;
            weight_sum += weight;
        }
        Luma([saturate(sum / weight_sum)])
    })
}

/// 母平均と母標準偏差
pub fn mean_std(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let mut count = 0u64;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for v in values {
        count += 1;
        sum += v;
        sum_sq += v * v;
    }
    if count == 0 {
        return (0.0, 0.0);
    }
    let n = count as f64;
    let mean = sum / n;
    let variance = (sum_sq / n - mean * mean).max(0.0);
    (mean, variance.sqrt())
}

pub fn std_dev_u8(samples: &[u8]) -> f64 {
    mean_std(samples.iter().map(|&v| f64::from(v))).1
}

/// 2画像の符号付き差分の標準偏差
pub fn diff_std(a: &GrayImage, b: &GrayImage) -> f64 {
    mean_std(
        a.as_raw()
            .iter()
            .zip(b.as_raw())
            .map(|(&p, &q)| f64::from(p) - f64::from(q)),
    )
    .1
}
