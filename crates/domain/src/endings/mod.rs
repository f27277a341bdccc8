// crates/domain/src/endings/mod.rs
pub mod counts;
pub mod normalizer;
pub mod style;

pub use counts::LineEndingCounts;
pub use normalizer::{Normalized, normalize, scan};
pub use style::{LineEndingStyle, StyleChoice};
