//! DermAI Common Library
//!
//! 解析パイプラインと呼び出し側で共有される型・静的テーブル

pub mod types;
pub mod advice;
pub mod catalog;
pub mod response;
pub mod error;

pub use types::{AnalysisReport, Metrics, SkinTone, SkinType, TechnicalMetrics, ToneResult, TypeResult};
pub use advice::{detect_concerns, generate_tips};
pub use catalog::{Lipstick, Product, Recommendations, StyleGuide};
pub use response::{AnalysisPayload, ApiResponse};
pub use error::{Error, Result};
