//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain engines and filesystem ports to implement
//! the three commands:
//!
//! - [`orchestrator`]: fix line endings, convert indentation, bump versions
//! - [`dto`]: plan/outcome objects crossing the use case boundary
//!
//! Use cases depend on domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{
    BumpOutcome, BumpPlan, EndingsOutcome, EndingsPlan, IndentOutcome, IndentPlan,
    IndentRewriteSummary, RewriteSummary,
};
pub use orchestrator::{BumpVersion, ConvertIndentation, FixEndings};
