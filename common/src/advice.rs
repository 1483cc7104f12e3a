//! 懸念事項・スキンケアTipsの静的テーブル
//!
//! テーブルはプロセス全体で読み取り専用。計算は行わず、
//! 懸念事項のみ指標しきい値による追記がある。

use crate::types::{Metrics, SkinType};

pub const LOW_HYDRATION_CONCERN: &str = "Low hydration detected";
pub const WEAK_BARRIER_CONCERN: &str = "Barrier function needs support";

const LOW_HYDRATION_THRESHOLD: u8 = 70;
const WEAK_BARRIER_THRESHOLD: u8 = 75;

/// 肌タイプごとの基本懸念事項
pub fn base_concerns(skin_type: SkinType) -> &'static [&'static str] {
    match skin_type {
        SkinType::Dry => &["Dehydration lines", "Rough texture", "Flakiness", "Tightness"],
        SkinType::Oily => &[
            "Excess sebum production",
            "Enlarged pores",
            "Shine in T-zone",
            "Potential blackheads",
        ],
        SkinType::Combination => &[
            "T-zone oiliness",
            "Dry cheeks",
            "Uneven texture",
            "Mixed concerns",
        ],
        SkinType::Sensitive => &[
            "Redness",
            "Potential irritation",
            "Reactive skin",
            "Barrier compromise",
        ],
        SkinType::Normal => &[
            "Minimal concerns",
            "Preventive care recommended",
            "Maintain current routine",
        ],
    }
}

/// 懸念事項を導出
///
/// 基本リストの後に、保湿→バリアの順で追記する。
pub fn detect_concerns(skin_type: SkinType, metrics: &Metrics) -> Vec<String> {
    let mut concerns: Vec<String> = base_concerns(skin_type)
        .iter()
        .map(|s| s.to_string())
        .collect();

    if metrics.hydration < LOW_HYDRATION_THRESHOLD {
        concerns.push(LOW_HYDRATION_CONCERN.to_string());
    }

    if metrics.barrier_score < WEAK_BARRIER_THRESHOLD {
        concerns.push(WEAK_BARRIER_CONCERN.to_string());
    }

    concerns
}

/// 肌タイプごとのスキンケアTips（各7件）
pub fn tips_for(skin_type: SkinType) -> &'static [&'static str; 7] {
    match skin_type {
        SkinType::Dry => &[
            "Use a rich, creamy moisturizer with ceramides and hyaluronic acid twice daily",
            "Incorporate facial oils (rosehip, argan) to lock in moisture",
            "Avoid harsh, foaming cleansers - use gentle, milk-based cleansers",
            "Use a humidifier at night to prevent moisture loss",
            "Drink 8-10 glasses of water daily and eat omega-3 rich foods",
            "Apply moisturizer on damp skin for better absorption",
            "Use overnight sleeping masks 2-3 times per week",
        ],
        SkinType::Oily => &[
            "Use oil-free, non-comedogenic, gel-based products",
            "Cleanse twice daily with salicylic acid (BHA) cleanser",
            "Apply lightweight, water-based moisturizers",
            "Incorporate niacinamide serum to regulate sebum production",
            "Use clay or charcoal masks 2-3 times per week",
            "Avoid over-cleansing which can trigger more oil production",
            "Use blotting papers instead of washing face multiple times",
        ],
        SkinType::Combination => &[
            "Multi-masking: use different masks on different zones",
            "Apply lightweight gel moisturizer on T-zone, richer cream on cheeks",
            "Use gentle, pH-balanced cleansers",
            "Incorporate niacinamide to balance oil production",
            "Exfoliate with AHAs/BHAs 2-3 times per week",
            "Don't skip moisturizer even on oily areas",
            "Use mattifying primer on oily zones if wearing makeup",
        ],
        SkinType::Sensitive => &[
            "Patch test all new products on inner arm for 24-48 hours",
            "Use fragrance-free, hypoallergenic products only",
            "Avoid alcohol, essential oils, and harsh exfoliants",
            "Choose mineral-based sunscreens (zinc oxide, titanium dioxide)",
            "Keep skincare routine simple: cleanser, moisturizer, SPF",
            "Use lukewarm water, never hot",
            "Look for soothing ingredients: centella, oat, calendula",
        ],
        SkinType::Normal => &[
            "Maintain consistent routine: cleanse, tone, moisturize, SPF",
            "Use broad-spectrum SPF 30+ daily, even indoors",
            "Incorporate antioxidant serums (Vitamin C) in morning",
            "Exfoliate 1-2 times per week with gentle AHAs",
            "Stay hydrated and eat antioxidant-rich fruits/vegetables",
            "Remove makeup thoroughly before bed",
            "Consider adding retinol at night for anti-aging prevention",
        ],
    }
}

/// Tipsを生成
pub fn generate_tips(skin_type: SkinType) -> Vec<String> {
    tips_for(skin_type).iter().map(|s| s.to_string()).collect()
}

/// 名前からTipsを引く（未知の肌タイプはNormal扱い）
pub fn tips_for_name(name: &str) -> Vec<String> {
    generate_tips(SkinType::from_key(name).unwrap_or(SkinType::Normal))
}
