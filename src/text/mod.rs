//! Glyph outlines turned into fillable shapes.

mod font;

pub use font::{Font, FontData, Glyph};
