//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown skin type: {0}")]
    UnknownSkinType(String),

    #[error("Unknown skin tone: {0}")]
    UnknownSkinTone(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_skin_type() {
        let error = Error::UnknownSkinType("Greasy".to_string());
        assert_eq!(format!("{}", error), "Unknown skin type: Greasy");
    }

    #[test]
    fn test_error_display_unknown_skin_tone() {
        let error = Error::UnknownSkinTone("Olive".to_string());
        assert_eq!(format!("{}", error), "Unknown skin tone: Olive");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }
}
