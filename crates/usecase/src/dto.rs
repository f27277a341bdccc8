// crates/usecase/src/dto.rs
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use textfix_domain::endings::{LineEndingCounts, LineEndingStyle, StyleChoice};
use textfix_domain::indent::{Direction, IndentationCounts};
use textfix_shared_kernel::{LineCount, TabWidth};

/// Input parameters for one line-ending invocation.
#[derive(Debug, Clone)]
pub struct EndingsPlan {
    pub input: PathBuf,
    /// Defaults to rewriting the input in place.
    pub output: Option<PathBuf>,
    /// `None` means report-only: no output is produced at all.
    pub style: Option<StyleChoice>,
}

impl EndingsPlan {
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EndingsOutcome {
    pub input: PathBuf,
    pub lines: LineCount,
    pub counts: LineEndingCounts,
    pub rewrite: Option<RewriteSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteSummary {
    pub output: PathBuf,
    pub style: LineEndingStyle,
    pub lines: LineCount,
    /// Terminators written, always `lines - 1`.
    pub terminators: usize,
}

/// Input parameters for one indentation invocation.
#[derive(Debug, Clone)]
pub struct IndentPlan {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    /// `None` means report-only.
    pub direction: Option<Direction>,
    pub tab_width: TabWidth,
}

impl IndentPlan {
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IndentOutcome {
    pub input: PathBuf,
    pub before: IndentationCounts,
    pub rewrite: Option<IndentRewriteSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndentRewriteSummary {
    pub output: PathBuf,
    pub after: IndentationCounts,
}

/// Input parameters for one version bump.
#[derive(Debug, Clone)]
pub struct BumpPlan {
    /// Directory the solution search starts from.
    pub start_dir: PathBuf,
    /// Passed in by the caller so the use case stays deterministic.
    pub today: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct BumpOutcome {
    pub project_root: PathBuf,
    pub project_name: String,
    pub version_file: PathBuf,
    pub version: String,
    /// Files whose embedded version strings were rewritten.
    pub updated: Vec<PathBuf>,
    /// Listed files not present on disk.
    pub missing: Vec<PathBuf>,
}
