use std::time::Duration;
use thiserror::Error;

/// 画像ペイロードのデコード失敗（入力自体が不正なので再試行しない）
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Data URLにペイロードがありません")]
    MissingPayload,

    #[error("Base64デコードに失敗: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("画像形式を認識できません: {0}")]
    UnsupportedFormat(#[from] image::ImageError),

    #[error("ペイロードが大きすぎます: {bytes} bytes (上限 {limit} bytes)")]
    PayloadTooLarge { bytes: usize, limit: usize },

    #[error("解像度が大きすぎます: {width}x{height} (上限 {limit} px)")]
    ResolutionTooLarge { width: u32, height: u32, limit: u64 },

    #[error("画像サイズが0です")]
    EmptyImage,
}

/// デコード後の解析ステージでの失敗
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Analysis failed: {cause}")]
pub struct AnalysisError {
    pub cause: String,
}

impl AnalysisError {
    pub fn new(cause: impl Into<String>) -> Self {
        Self { cause: cause.into() }
    }
}

#[derive(Error, Debug)]
pub enum DermAiError {
    #[error("{0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("解析がタイムアウトしました ({limit:?})")]
    Timeout { limit: Duration },

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl DermAiError {
    /// 入力不正によるデコード失敗か
    pub fn is_decode(&self) -> bool {
        matches!(self, DermAiError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, DermAiError>;
