use crate::analyzer::DecodeLimits;
use crate::error::{DermAiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// デコード後ペイロードの上限（バイト）
    pub max_payload_bytes: usize,
    /// 受け付ける最大画素数（幅×高さ）
    pub max_pixels: u64,
    /// 1枚あたりの解析タイムアウト
    pub timeout_seconds: u64,
    /// バッチ解析のスレッド数（0 = rayon既定）
    pub batch_threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        let limits = DecodeLimits::default();
        Self {
            max_payload_bytes: limits.max_payload_bytes,
            max_pixels: limits.max_pixels,
            timeout_seconds: 30,
            batch_threads: 0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 読めない・不正な設定ファイルは警告して既定値を返す
    pub fn load_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            warn!(path = %config_path.display(), error = %e, "設定を読み込めないため既定値を使用");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DermAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("derm-ai").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_seconds == 0 {
            return Err(DermAiError::Config("timeout_seconds は1以上を指定してください".into()));
        }
        if self.max_pixels == 0 || self.max_payload_bytes == 0 {
            return Err(DermAiError::Config("入力サイズ上限は1以上を指定してください".into()));
        }
        Ok(())
    }

    pub fn decode_limits(&self) -> DecodeLimits {
        DecodeLimits {
            max_payload_bytes: self.max_payload_bytes,
            max_pixels: self.max_pixels,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config { timeout_seconds: 5, max_pixels: 1_000_000, ..Default::default() };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.timeout_seconds, 5);
        assert_eq!(loaded.decode_limits().max_pixels, 1_000_000);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 10}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.max_pixels, DecodeLimits::default().max_pixels);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"timeout_seconds": 0}"#).unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(DermAiError::Config(_))));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());

        // 既定値から設定し直して保存すれば修復できる
        let mut config = Config::load_or_default(&path);
        assert_eq!(config, Config::default());
        config.timeout_seconds = 12;
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().timeout_seconds, 12);
    }
}
