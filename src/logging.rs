//! ログ初期化
//!
//! 標準出力はJSON結果専用のため、ログは標準エラーへ出す。
//! `RUST_LOG` があればそれを優先する。

use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("ログ初期化に失敗: {}", e))
}
