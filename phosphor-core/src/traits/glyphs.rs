//! Glyph lookup trait
//!
//! Fonts are a collaborator concern - the core only needs a way to turn
//! characters into 8x16 cell bitmaps. Implementations decide charset and
//! storage (a built-in table, a filesystem font, ...).

use crate::color::Color;
use crate::frame::{FrameError, GlyphBitmap, TextFrame};

/// Maps characters to 8x16 character-cell bitmaps
pub trait GlyphSource {
    /// Bitmap for one character
    ///
    /// Implementations choose their own fallback for characters outside
    /// their charset; there is no error path.
    fn glyph(&self, ch: char) -> GlyphBitmap;

    /// Render a string into a frame with a uniform color plane
    fn render(&self, text: &str, color: Color) -> Result<TextFrame, FrameError> {
        let mut frame = TextFrame::default();
        for ch in text.chars() {
            frame.push(self.glyph(ch), color)?;
        }
        Ok(frame)
    }

    /// Render a string with an explicit per-character color plane
    ///
    /// `colors` cycles if shorter than the text, so a repeating pattern
    /// like green/green/orange can be given once.
    fn render_colored(&self, text: &str, colors: &[Color]) -> Result<TextFrame, FrameError> {
        let mut frame = TextFrame::default();
        for (i, ch) in text.chars().enumerate() {
            let color = if colors.is_empty() {
                Color::Green
            } else {
                colors[i % colors.len()]
            };
            frame.push(self.glyph(ch), color)?;
        }
        Ok(frame)
    }
}
