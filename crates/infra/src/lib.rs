// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod version_store;

pub use filesystem::{LocalFileStore, SolutionLocator};
pub use version_store::JsonVersionStore;
