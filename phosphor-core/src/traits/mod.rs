//! Collaborator traits
//!
//! These traits define the seams between the display core and its
//! collaborators (font lookup lives behind `GlyphSource`; the driver
//! consumes the frames it produces).

pub mod glyphs;

pub use glyphs::GlyphSource;
