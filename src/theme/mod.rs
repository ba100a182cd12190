//! Visual theme for the biolink card.

mod styles;

pub use styles::GLOBAL_STYLES;
