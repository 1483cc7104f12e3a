//! DermAI - 写真1枚からのルールベース肌解析
//!
//! 画像統計量のしきい値判定のみで構成され、学習済みモデルは使わない。

pub mod analyzer;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod scanner;

pub use analyzer::{analyze, analyze_image, analyze_with_timeout, DecodeLimits};
pub use error::{AnalysisError, DecodeError, DermAiError, Result};
