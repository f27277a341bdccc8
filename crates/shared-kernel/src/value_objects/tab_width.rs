// crates/shared-kernel/src/value_objects/tab_width.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Number of columns one tab character occupies. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabWidth(usize);

impl TabWidth {
    pub const DEFAULT: Self = Self(4);

    /// Validate `value` before any scanning takes place.
    pub fn new(value: usize) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::InvalidTabWidth { value });
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for TabWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TabWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<usize> for TabWidth {
    type Error = DomainError;

    fn try_from(value: usize) -> DomainResult<Self> {
        Self::new(value)
    }
}
