// crates/domain/src/endings/style.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use textfix_shared_kernel::DomainError;

use super::counts::LineEndingCounts;

/// A single line-ending convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingStyle {
    Cr,
    Lf,
    CrLf,
}

impl LineEndingStyle {
    /// The terminator byte sequence this style writes.
    pub const fn terminator(self) -> &'static [u8] {
        match self {
            Self::Cr => b"\r",
            Self::Lf => b"\n",
            Self::CrLf => b"\r\n",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Cr => "cr",
            Self::Lf => "lf",
            Self::CrLf => "crlf",
        }
    }
}

impl fmt::Display for LineEndingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the caller asked for: a fixed style, or majority-vote detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleChoice {
    Auto,
    Cr,
    Lf,
    CrLf,
}

impl StyleChoice {
    /// Resolve `Auto` against scanned counts; fixed choices pass through.
    pub fn resolve(self, counts: &LineEndingCounts) -> LineEndingStyle {
        match self {
            Self::Cr => LineEndingStyle::Cr,
            Self::Lf => LineEndingStyle::Lf,
            Self::CrLf => LineEndingStyle::CrLf,
            Self::Auto => counts.dominant(),
        }
    }
}

impl FromStr for StyleChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "cr" => Ok(Self::Cr),
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::CrLf),
            _ => Err(DomainError::UnknownLineEndingStyle { style: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("CRLF".parse::<StyleChoice>().unwrap(), StyleChoice::CrLf);
        assert_eq!("Auto".parse::<StyleChoice>().unwrap(), StyleChoice::Auto);
        assert_eq!("lf".parse::<StyleChoice>().unwrap(), StyleChoice::Lf);
    }

    #[test]
    fn parse_rejects_unknown_styles() {
        let err = "unix".parse::<StyleChoice>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownLineEndingStyle { .. }));
    }

    #[test]
    fn fixed_choice_ignores_counts() {
        let counts = LineEndingCounts { cr: 9, lf: 0, crlf: 0 };
        assert_eq!(StyleChoice::Lf.resolve(&counts), LineEndingStyle::Lf);
    }

    #[test]
    fn labels_match_report_wording() {
        assert_eq!(LineEndingStyle::Cr.to_string(), "cr");
        assert_eq!(LineEndingStyle::Lf.to_string(), "lf");
        assert_eq!(LineEndingStyle::CrLf.to_string(), "crlf");
    }
}
