// crates/domain/src/indent/request.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use textfix_shared_kernel::{DomainError, DomainResult, TabWidth};

/// Which way leading whitespace is rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    SpacesToTabs,
    TabsToSpaces,
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s2t" | "spaces-to-tabs" => Ok(Self::SpacesToTabs),
            "t2s" | "tabs-to-spaces" => Ok(Self::TabsToSpaces),
            _ => Err(DomainError::InvalidConfiguration {
                reason: format!("unknown conversion mode '{s}' (expected t2s or s2t)"),
            }),
        }
    }
}

/// One conversion invocation. `direction` absent means report-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest {
    pub direction: Option<Direction>,
    pub tab_width: TabWidth,
}

impl ConversionRequest {
    pub const fn report_only(tab_width: TabWidth) -> Self {
        Self { direction: None, tab_width }
    }

    pub const fn converting(direction: Direction, tab_width: TabWidth) -> Self {
        Self { direction: Some(direction), tab_width }
    }

    /// Build a request from raw CLI-ish inputs, validating the width
    /// before any scanning begins.
    pub fn from_raw(direction: Option<Direction>, tab_width: usize) -> DomainResult<Self> {
        Ok(Self { direction, tab_width: TabWidth::new(tab_width)? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_and_long_mode_names() {
        assert_eq!("s2t".parse::<Direction>().unwrap(), Direction::SpacesToTabs);
        assert_eq!("T2S".parse::<Direction>().unwrap(), Direction::TabsToSpaces);
        assert_eq!("tabs-to-spaces".parse::<Direction>().unwrap(), Direction::TabsToSpaces);
    }

    #[test]
    fn parse_rejects_unknown_mode() {
        assert!("spaces".parse::<Direction>().is_err());
    }

    #[test]
    fn zero_width_is_a_configuration_error() {
        let err = ConversionRequest::from_raw(Some(Direction::TabsToSpaces), 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTabWidth { value: 0 }));
    }

    #[test]
    fn default_width_flows_through() {
        let request = ConversionRequest::from_raw(None, 4).unwrap();
        assert_eq!(request.tab_width, TabWidth::DEFAULT);
        assert_eq!(request.direction, None);
    }
}
