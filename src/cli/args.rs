// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use super::value_enum::{CliEndingStyle, CliIndentMode};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "textfix",
    version = crate::VERSION,
    about = "テキストファイルの改行コード/インデント/バージョン番号の整形ツール"
)]
pub struct Args {
    /// ロゴ行を表示しない
    #[arg(short = 'q', long, global = true)]
    pub no_logo: bool,

    /// レポートを JSON で出力
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 改行コード (cr/lf/crlf) の集計と修正
    Endings {
        /// 対象のテキストファイル
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// 出力ファイル名（省略時は入力ファイルを上書き）
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// 改行コードを cr, lf, crlf, auto に修正（省略時はレポートのみ）
        #[arg(short = 'f', long = "fix", value_enum, ignore_case = true)]
        fix: Option<CliEndingStyle>,
    },

    /// 行頭タブ/スペースの集計と変換
    Indent {
        /// 対象のテキストファイル
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,

        /// 出力ファイル名（省略時は入力ファイルを上書き）
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// 変換モード: タブ→スペース 't2s' / スペース→タブ 's2t'（省略時はレポートのみ）
        #[arg(short = 'm', long = "mode", value_enum, ignore_case = true)]
        mode: Option<CliIndentMode>,

        /// タブ1個に対応するスペース数
        #[arg(short = 's', long = "tab-size", default_value_t = 4)]
        tab_size: usize,
    },

    /// .sln ディレクトリの .version ファイルを更新し、各ファイルの埋め込みバージョンへ反映
    Bump {
        /// 探索を開始するディレクトリ（省略時はカレントディレクトリ）
        #[arg(value_hint = ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
}
