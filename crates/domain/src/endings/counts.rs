// crates/domain/src/endings/counts.rs
use serde::Serialize;
use textfix_shared_kernel::LineCount;

use super::style::LineEndingStyle;

/// Terminator tallies from one full scan of a buffer.
///
/// Invariant: the buffer has `cr + lf + crlf + 1` lines; the final line is
/// counted whether or not it is terminated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineEndingCounts {
    pub cr: usize,
    pub lf: usize,
    pub crlf: usize,
}

impl LineEndingCounts {
    /// Total terminators of any style.
    pub const fn terminators(&self) -> usize {
        self.cr + self.lf + self.crlf
    }

    pub const fn lines(&self) -> LineCount {
        LineCount::new(self.terminators() + 1)
    }

    /// Majority vote with a fixed evaluation order: LF first, then CRLF,
    /// then CR, each replacing the running winner only on a strictly
    /// greater count. Equal CR/LF with no CRLF therefore resolves to LF.
    pub fn dominant(&self) -> LineEndingStyle {
        let mut style = LineEndingStyle::Lf;
        let mut n = self.lf;

        if self.crlf > n {
            style = LineEndingStyle::CrLf;
            n = self.crlf;
        }
        if self.cr > n {
            style = LineEndingStyle::Cr;
        }

        style
    }
}
