//! 推薦カタログ（製品・リップ・スタイル）
//!
//! 解析結果のカテゴリをキーに引く読み取り専用テーブル。
//! 未知のキーは製品が Normal、リップ/スタイルが Medium にフォールバックする。

use crate::types::{AnalysisReport, SkinTone, SkinType};
use serde::Serialize;

/// 製品
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: &'static str,
    pub brand: &'static str,
    pub price: &'static str,
    pub rating: f32,
    pub reviews: &'static str,
    pub url: &'static str,
    pub category: &'static str,
}

/// リップ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lipstick {
    pub name: &'static str,
    pub brand: &'static str,
    pub color: &'static str,
    pub price: &'static str,
}

/// スタイル提案
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleGuide {
    pub colors: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub metals: &'static str,
}

/// レポートに付随する推薦一式
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub products: &'static [Product],
    pub lipsticks: &'static [Lipstick],
    pub style_recommendations: &'static StyleGuide,
}

impl Recommendations {
    pub fn for_report(report: &AnalysisReport) -> Self {
        Self {
            products: products(report.skin_type),
            lipsticks: lipsticks(report.skin_tone.category),
            style_recommendations: style(report.skin_tone.category),
        }
    }
}

macro_rules! product {
    ($name:expr, $brand:expr, $price:expr, $rating:expr, $reviews:expr, $url:expr, $category:expr) => {
        Product {
            name: $name,
            brand: $brand,
            price: $price,
            rating: $rating,
            reviews: $reviews,
            url: $url,
            category: $category,
        }
    };
}

macro_rules! lipstick {
    ($name:expr, $brand:expr, $color:expr, $price:expr) => {
        Lipstick { name: $name, brand: $brand, color: $color, price: $price }
    };
}

static DRY_PRODUCTS: [Product; 5] = [
    product!(
        "Cetaphil DAM Daily Advance Ultra Hydrating Lotion", "Cetaphil", "₹749", 4.6,
        "Perfect for dry skin! Deeply moisturizing without being greasy.",
        "https://www.amazon.in/Cetaphil-Daily-Advance-Hydrating-Lotion/dp/B00GFQVK1Y",
        "Moisturizer"
    ),
    product!(
        "Neutrogena Deep Moisture Body Lotion", "Neutrogena", "₹599", 4.5,
        "Lasts all day! My skin feels soft and hydrated.",
        "https://www.amazon.in/Neutrogena-Norwegian-Formula-Moisture-Lotion/dp/B00GFQVK1G",
        "Body Care"
    ),
    product!(
        "Plum Green Tea Renewed Clarity Night Gel", "Plum", "₹475", 4.4,
        "Lightweight but super hydrating. Love this!",
        "https://www.amazon.in/Plum-Green-Renewed-Clarity-Night/dp/B01HHL4RCY",
        "Night Care"
    ),
    product!(
        "WOW Skin Science Vitamin C Face Serum", "WOW", "₹549", 4.3,
        "Brightens and hydrates. Perfect combo!",
        "https://www.flipkart.com/wow-skin-science-vitamin-c-face-serum",
        "Serum"
    ),
    product!(
        "Derma Co 10% Vitamin C Face Serum", "The Derma Co", "₹689", 4.5,
        "Game changer for dry, dull skin!",
        "https://www.amazon.in/Derma-Vitamin-Serum-Hyperpigmentation-Brightening/dp/B08KGSBLF9",
        "Serum"
    ),
];

static OILY_PRODUCTS: [Product; 5] = [
    product!(
        "Biotique Bio Cucumber Pore Tightening Toner", "Biotique", "₹165", 4.2,
        "Controls oil and tightens pores effectively!",
        "https://www.amazon.in/Biotique-Cucumber-Pore-Tightening-Toner/dp/B00MFZ6BKE",
        "Toner"
    ),
    product!(
        "Minimalist Niacinamide 10% Face Serum", "Minimalist", "₹599", 4.6,
        "Reduced my oil production in just 2 weeks!",
        "https://www.amazon.in/Minimalist-Niacinamide-Face-Serum-Women/dp/B08GKF9Z78",
        "Serum"
    ),
    product!(
        "The Derma Co 2% Salicylic Acid Face Wash", "The Derma Co", "₹399", 4.4,
        "Clears pores and controls oil perfectly.",
        "https://www.amazon.in/Derma-Salicylic-Acid-Face-Wash/dp/B08KGSCQFB",
        "Cleanser"
    ),
    product!(
        "Mamaearth Oil-Free Face Moisturizer", "Mamaearth", "₹399", 4.3,
        "Lightweight and oil-free. No greasy feeling!",
        "https://www.nykaa.com/mamaearth-oil-free-face-moisturizer",
        "Moisturizer"
    ),
    product!(
        "Innisfree Jeju Volcanic Pore Clay Mask", "Innisfree", "₹695", 4.5,
        "Best clay mask for oily skin. Deep cleanses!",
        "https://www.nykaa.com/innisfree-jeju-volcanic-pore-clay-mask",
        "Mask"
    ),
];

static COMBINATION_PRODUCTS: [Product; 4] = [
    product!(
        "Himalaya Herbals Oil Clear Lemon Face Wash", "Himalaya", "₹145", 4.3,
        "Balances my combination skin beautifully!",
        "https://www.amazon.in/Himalaya-Herbals-Oil-Clear-Lemon/dp/B00MFAK3FK",
        "Cleanser"
    ),
    product!(
        "Dot & Key Vitamin C + E Super Bright Moisturizer", "Dot & Key", "₹645", 4.5,
        "Not too heavy, perfect for combination skin!",
        "https://www.amazon.in/Dot-Key-Vitamin-Moisturizer-Niacinamide/dp/B08LQPJX2Y",
        "Moisturizer"
    ),
    product!(
        "Forest Essentials Facial Toner Pure Rosewater", "Forest Essentials", "₹725", 4.6,
        "Luxurious and effective. Balances skin pH.",
        "https://www.nykaa.com/forest-essentials-facial-toner-rosewater",
        "Toner"
    ),
    product!(
        "Plum 15% Niacinamide Face Serum", "Plum", "₹596", 4.4,
        "Perfect for balancing combination skin!",
        "https://www.amazon.in/Plum-Niacinamide-Face-Serum-Hyperpigmentation/dp/B08X4QZWM7",
        "Serum"
    ),
];

static SENSITIVE_PRODUCTS: [Product; 4] = [
    product!(
        "Cetaphil Gentle Skin Cleanser", "Cetaphil", "₹759", 4.7,
        "Gentle and doesn't irritate my sensitive skin at all!",
        "https://www.amazon.in/Cetaphil-Gentle-Skin-Cleanser-Face/dp/B001ET76EY",
        "Cleanser"
    ),
    product!(
        "Aveeno Daily Moisturizing Lotion", "Aveeno", "₹899", 4.6,
        "Soothes and hydrates without any irritation.",
        "https://www.amazon.in/Aveeno-Daily-Moisturizing-Lotion-591ml/dp/B00GFQVK26",
        "Moisturizer"
    ),
    product!(
        "Sebamed Clear Face Care Gel", "Sebamed", "₹575", 4.5,
        "Perfect for sensitive skin. No breakouts!",
        "https://www.amazon.in/Sebamed-Clear-Face-Care-Gel/dp/B00U2XQKPI",
        "Gel"
    ),
    product!(
        "La Roche-Posay Toleriane Sensitive Fluid", "La Roche-Posay", "₹1,750", 4.7,
        "Best for extremely sensitive skin. Worth every penny!",
        "https://www.nykaa.com/la-roche-posay-toleriane-sensitive-fluid",
        "Moisturizer"
    ),
];

static NORMAL_PRODUCTS: [Product; 4] = [
    product!(
        "Plum Green Tea Renewed Clarity Face Wash", "Plum", "₹345", 4.5,
        "Maintains my skin's balance perfectly!",
        "https://www.amazon.in/Plum-Green-Renewed-Clarity-Face/dp/B01HHL4RCW",
        "Cleanser"
    ),
    product!(
        "Biotique Bio Morning Nectar Sunscreen", "Biotique", "₹265", 4.4,
        "Light protection without heaviness.",
        "https://www.amazon.in/Biotique-Morning-Nectar-Flawless-Lotion/dp/B00MFZ6BKO",
        "Sunscreen"
    ),
    product!(
        "Mamaearth Vitamin C Face Serum", "Mamaearth", "₹599", 4.5,
        "Brightens and evens skin tone beautifully!",
        "https://www.amazon.in/Mamaearth-Vitamin-Serum-Reduce-Pigmentation/dp/B07VNMMV3Z",
        "Serum"
    ),
    product!(
        "The Face Shop Rice Water Bright Cleansing Foam", "The Face Shop", "₹450", 4.4,
        "Gentle cleansing with brightening effect!",
        "https://www.nykaa.com/the-face-shop-rice-water-bright-cleansing-foam",
        "Cleanser"
    ),
];

static FAIR_LIPSTICKS: [Lipstick; 4] = [
    lipstick!("Nude Pink", "Maybelline SuperStay Matte Ink - Dreamer", "#E6A9A3", "₹499"),
    lipstick!("Coral Blush", "Lakme 9to5 Primer + Matte - Rosy Plum", "#FF7F7F", "₹395"),
    lipstick!("Soft Rose", "Sugar Matte As Hell - 01 Scarlett OHara", "#D97B8F", "₹599"),
    lipstick!("Berry Pink", "Nykaa So Matte - Pink On Fleek", "#C25B7C", "₹449"),
];

static LIGHT_LIPSTICKS: [Lipstick; 4] = [
    lipstick!("Peachy Nude", "Maybelline SuperStay - Amazonian", "#FFAB91", "₹499"),
    lipstick!("Warm Rose", "Lakme Absolute Argan Oil - Rose Romance", "#E57373", "₹650"),
    lipstick!("Mauve Pink", "MAC Retro Matte - Dangerous", "#C48B9F", "₹1,900"),
    lipstick!("Dusty Pink", "Sugar Nothing Else Matter - 05 Plum Yum", "#D4A5A5", "₹699"),
];

static MEDIUM_LIPSTICKS: [Lipstick; 4] = [
    lipstick!("Terracotta", "Huda Beauty Liquid Matte - Bombshell", "#C4794D", "₹1,650"),
    lipstick!("Brick Red", "M.A.C Retro Matte - Ruby Woo", "#B33A3A", "₹1,900"),
    lipstick!("Warm Berry", "Nykaa Matte To Last - Espresso", "#8B3A62", "₹449"),
    lipstick!("Spice Brown", "Sugar Smudge Me Not - 09 Mochalicious", "#915C44", "₹599"),
];

static TAN_LIPSTICKS: [Lipstick; 4] = [
    lipstick!("Deep Berry", "Maybelline Sensational - Berry Bossy", "#722F37", "₹425"),
    lipstick!("Wine", "Lakme Enrich Matte - Shade PM11", "#5D2E46", "₹395"),
    lipstick!("Chocolate Brown", "Sugar Matte As Hell - 03 Unapologetic", "#6F4E37", "₹599"),
    lipstick!("Plum", "Nykaa So Matte - Immortal", "#8E4585", "₹449"),
];

static DEEP_LIPSTICKS: [Lipstick; 4] = [
    lipstick!("Deep Plum", "Fenty Beauty Stunna Lip Paint - Uncensored", "#5C1A33", "₹1,850"),
    lipstick!("Rich Berry", "MAC Satin Lipstick - Diva", "#6F2232", "₹1,900"),
    lipstick!("Dark Red", "Nykaa So Matte - Boss Lady", "#8B0000", "₹449"),
    lipstick!("Burgundy", "Sugar Nothing Else Matter - 06 Plum Yum", "#800020", "₹699"),
];

static FAIR_STYLE: StyleGuide = StyleGuide {
    colors: &["Soft pastels", "Light blues and lavenders", "Mint green", "Blush pink", "Powder blue"],
    avoid: &["Neon colors", "Very dark colors that create harsh contrast", "Pure black"],
    metals: "Silver and white gold jewelry complement fair skin beautifully",
};

static LIGHT_STYLE: StyleGuide = StyleGuide {
    colors: &["Coral and peach tones", "Light teal", "Soft yellow", "Rose pink", "Aqua blue"],
    avoid: &["Overly pale colors that wash you out", "Beige matching your skin tone"],
    metals: "Both gold and silver work well - choose based on undertone",
};

static MEDIUM_STYLE: StyleGuide = StyleGuide {
    colors: &["Earth tones", "Olive green", "Burnt orange", "Deep teal", "Burgundy", "Rich browns"],
    avoid: &["Colors too close to skin tone", "Pale yellows"],
    metals: "Warm gold tones look stunning on medium skin",
};

static TAN_STYLE: StyleGuide = StyleGuide {
    colors: &[
        "Rich jewel tones",
        "Emerald green",
        "Sapphire blue",
        "Ruby red",
        "Royal purple",
        "Mustard yellow",
    ],
    avoid: &["Muddy browns", "Dull olive tones"],
    metals: "Gold and bronze jewelry create beautiful warmth",
};

static DEEP_STYLE: StyleGuide = StyleGuide {
    colors: &[
        "Vibrant colors",
        "Electric blue",
        "Fuchsia",
        "Bright yellow",
        "Pure white",
        "Tangerine",
        "Hot pink",
    ],
    avoid: &["Dull, muted colors", "Dark navy that blends"],
    metals: "Gold jewelry creates stunning contrast against deep skin",
};

pub fn products(skin_type: SkinType) -> &'static [Product] {
    match skin_type {
        SkinType::Dry => &DRY_PRODUCTS,
        SkinType::Oily => &OILY_PRODUCTS,
        SkinType::Combination => &COMBINATION_PRODUCTS,
        SkinType::Sensitive => &SENSITIVE_PRODUCTS,
        SkinType::Normal => &NORMAL_PRODUCTS,
    }
}

pub fn lipsticks(tone: SkinTone) -> &'static [Lipstick] {
    match tone {
        SkinTone::Fair => &FAIR_LIPSTICKS,
        SkinTone::Light => &LIGHT_LIPSTICKS,
        SkinTone::Medium => &MEDIUM_LIPSTICKS,
        SkinTone::Tan => &TAN_LIPSTICKS,
        SkinTone::Deep => &DEEP_LIPSTICKS,
    }
}

pub fn style(tone: SkinTone) -> &'static StyleGuide {
    match tone {
        SkinTone::Fair => &FAIR_STYLE,
        SkinTone::Light => &LIGHT_STYLE,
        SkinTone::Medium => &MEDIUM_STYLE,
        SkinTone::Tan => &TAN_STYLE,
        SkinTone::Deep => &DEEP_STYLE,
    }
}

/// 文字列キーで製品を引く（未知はNormal）
pub fn products_for(skin_type: &str) -> &'static [Product] {
    products(SkinType::from_key(skin_type).unwrap_or(SkinType::Normal))
}

/// 文字列キーでリップを引く（未知はMedium）
pub fn lipsticks_for(skin_tone: &str) -> &'static [Lipstick] {
    lipsticks(SkinTone::from_key(skin_tone).unwrap_or(SkinTone::Medium))
}

/// 文字列キーでスタイルを引く（未知はMedium）
pub fn style_for(skin_tone: &str) -> &'static StyleGuide {
    style(SkinTone::from_key(skin_tone).unwrap_or(SkinTone::Medium))
}
