pub mod counts;
pub mod tab_width;

pub use counts::{LineCount, SpaceCount, TabCount};
pub use tab_width::TabWidth;
