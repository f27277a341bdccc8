// crates/domain/src/version/mod.rs
pub mod info;
pub mod substitutions;

pub use info::VersionInfo;
pub use substitutions::update_for_path;
