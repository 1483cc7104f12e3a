use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "derm-ai")]
#[command(about = "写真から肌トーン・肌タイプ・ウェルネス指標を解析", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像1枚を解析してJSONを出力
    Analyze {
        /// 画像ファイル（--data-url 指定時はData URLを含むテキストファイル）
        #[arg(required = true)]
        image: PathBuf,

        /// 入力ファイルを "data:image/...;base64,..." 形式として読む
        #[arg(long)]
        data_url: bool,

        /// 製品・リップ・スタイルの推薦を含める
        #[arg(short, long)]
        recommend: bool,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// フォルダ内の画像を一括解析
    Batch {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 製品・リップ・スタイルの推薦を含める
        #[arg(short, long)]
        recommend: bool,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 肌タイプ別の推薦製品を表示
    Products {
        /// 肌タイプ (Normal/Dry/Oily/Combination/Sensitive)
        skin_type: String,
    },

    /// 肌トーン別の推薦リップを表示
    Lipsticks {
        /// 肌トーン (Fair/Light/Medium/Tan/Deep)
        skin_tone: String,
    },

    /// 肌トーン別のスタイル（色・避ける色・メタル）を表示
    Style {
        /// 肌トーン (Fair/Light/Medium/Tan/Deep)
        skin_tone: String,
    },

    /// 肌タイプ別のスキンケアTipsを表示
    Tips {
        /// 肌タイプ (Normal/Dry/Oily/Combination/Sensitive)
        skin_type: String,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 1枚あたりのタイムアウト（秒）を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 受け付ける最大画素数を設定
        #[arg(long)]
        set_max_pixels: Option<u64>,
    },

    /// 動作確認
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from(["derm-ai", "analyze", "face.jpg", "--recommend", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { image, data_url, recommend, output } => {
                assert_eq!(image, PathBuf::from("face.jpg"));
                assert!(!data_url);
                assert!(recommend);
                assert!(output.is_none());
            }
            _ => panic!("analyze として解析されるべき"),
        }
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(["derm-ai", "config", "--set-timeout", "10"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config { show: false, set_timeout: Some(10), set_max_pixels: None }
        ));
    }

    #[test]
    fn test_parse_style_and_tips() {
        let cli = Cli::try_parse_from(["derm-ai", "style", "Tan"]).unwrap();
        assert!(matches!(cli.command, Commands::Style { ref skin_tone } if skin_tone == "Tan"));

        let cli = Cli::try_parse_from(["derm-ai", "tips", "Dry"]).unwrap();
        assert!(matches!(cli.command, Commands::Tips { ref skin_type } if skin_type == "Dry"));
    }

    #[test]
    fn test_analyze_requires_image() {
        assert!(Cli::try_parse_from(["derm-ai", "analyze"]).is_err());
    }
}
