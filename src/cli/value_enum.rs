// src/cli/value_enum.rs
use clap::ValueEnum;
use textfix_domain::endings::StyleChoice;
use textfix_domain::indent::Direction;

/// 改行コード指定 (clap 用)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliEndingStyle {
    Auto,
    Cr,
    Lf,
    Crlf,
}

impl From<CliEndingStyle> for StyleChoice {
    fn from(value: CliEndingStyle) -> Self {
        match value {
            CliEndingStyle::Auto => Self::Auto,
            CliEndingStyle::Cr => Self::Cr,
            CliEndingStyle::Lf => Self::Lf,
            CliEndingStyle::Crlf => Self::CrLf,
        }
    }
}

/// 変換モード指定 (clap 用)
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliIndentMode {
    T2s,
    S2t,
}

impl From<CliIndentMode> for Direction {
    fn from(value: CliIndentMode) -> Self {
        match value {
            CliIndentMode::T2s => Self::TabsToSpaces,
            CliIndentMode::S2t => Self::SpacesToTabs,
        }
    }
}
