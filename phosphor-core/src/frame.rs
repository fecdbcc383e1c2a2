//! Glyph bitmap and color plane buffers
//!
//! A frame pairs a run of 8x16 character-cell bitmaps with a per-character
//! color plane. The original controller left mismatched buffer lengths as
//! undefined behavior; here the shapes are validated up front so a
//! malformed frame can never reach the panel bus.

use heapless::Vec;

use crate::color::Color;

/// Rows per character cell (and per physical RAM bank)
pub const GLYPH_ROWS: usize = 16;

/// Horizontal pixels per character cell
pub const GLYPH_WIDTH: usize = 8;

/// Maximum characters a frame can span
///
/// Sized for the longest scroll message the clock firmware produces;
/// matches four chained two-panel modules.
pub const MAX_CHARS: usize = 32;

/// Maximum pixel columns a frame can span
pub const MAX_COLUMNS: usize = MAX_CHARS * GLYPH_WIDTH;

/// One character cell: 16 rows, one byte per row, MSB = leftmost pixel
pub type GlyphBitmap = [u8; GLYPH_ROWS];

/// Per-pixel-column color plane, one entry per 8-pixel group
pub type ColumnColors = Vec<Color, MAX_COLUMNS>;

/// Frame shape violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Color plane length differs from the glyph count
    ColorLengthMismatch,
    /// Frame would exceed `MAX_CHARS` cells
    TooManyChars,
}

/// A renderable run of characters: glyph bitmaps plus a color plane
///
/// Invariant: `colors.len() == glyphs.len()` at all times.
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    glyphs: Vec<GlyphBitmap, MAX_CHARS>,
    colors: Vec<Color, MAX_CHARS>,
}

impl TextFrame {
    /// Create a frame from matching glyph and color buffers
    pub fn new(
        glyphs: Vec<GlyphBitmap, MAX_CHARS>,
        colors: Vec<Color, MAX_CHARS>,
    ) -> Result<Self, FrameError> {
        if glyphs.len() != colors.len() {
            return Err(FrameError::ColorLengthMismatch);
        }
        Ok(Self { glyphs, colors })
    }

    /// Create an all-dark frame of `n` cells
    pub fn blank(n: usize) -> Result<Self, FrameError> {
        if n > MAX_CHARS {
            return Err(FrameError::TooManyChars);
        }
        let mut frame = Self::default();
        for _ in 0..n {
            let _ = frame.glyphs.push([0; GLYPH_ROWS]);
            let _ = frame.colors.push(Color::None);
        }
        Ok(frame)
    }

    /// Append one character cell
    pub fn push(&mut self, glyph: GlyphBitmap, color: Color) -> Result<(), FrameError> {
        if self.glyphs.is_full() {
            return Err(FrameError::TooManyChars);
        }
        let _ = self.glyphs.push(glyph);
        let _ = self.colors.push(color);
        Ok(())
    }

    /// Number of character cells
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// True if the frame spans no cells
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph bitmaps, one per cell
    pub fn glyphs(&self) -> &[GlyphBitmap] {
        &self.glyphs
    }

    /// Per-character color plane
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Expand a per-character color plane to per-column granularity
///
/// Each character's color is replicated across its 8 pixel columns; the
/// result length is exactly `8 * colors.len()`.
pub fn expand_colors(colors: &[Color]) -> ColumnColors {
    let mut columns = ColumnColors::new();
    for &color in colors.iter().take(MAX_CHARS) {
        for _ in 0..GLYPH_WIDTH {
            let _ = columns.push(color);
        }
    }
    columns
}
