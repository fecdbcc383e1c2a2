//! Built-in 8x16 glyphs
//!
//! The clock face only needs digits and a little punctuation, so the
//! glyphs live in flash instead of behind a filesystem font. Characters
//! outside the charset render as a full block - wrong output that is
//! impossible to miss on the panel.

use phosphor_core::frame::{GlyphBitmap, GLYPH_ROWS};
use phosphor_core::traits::GlyphSource;

/// Fallback cell for characters outside the charset
const FALLBACK: GlyphBitmap = [0xFF; GLYPH_ROWS];

const SPACE: GlyphBitmap = [0x00; GLYPH_ROWS];

const DIGIT_0: GlyphBitmap = [
    0x00, 0x00, 0x38, 0x6C, 0xC6, 0xC6, 0xD6, 0xD6, 0xC6, 0xC6, 0x6C, 0x38, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_1: GlyphBitmap = [
    0x00, 0x00, 0x18, 0x38, 0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_2: GlyphBitmap = [
    0x00, 0x00, 0x7C, 0xC6, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0xC6, 0xFE, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_3: GlyphBitmap = [
    0x00, 0x00, 0x7C, 0xC6, 0x06, 0x06, 0x3C, 0x06, 0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_4: GlyphBitmap = [
    0x00, 0x00, 0x0C, 0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x0C, 0x0C, 0x1E, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_5: GlyphBitmap = [
    0x00, 0x00, 0xFE, 0xC0, 0xC0, 0xC0, 0xFC, 0x06, 0x06, 0x06, 0xC6, 0x7C, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_6: GlyphBitmap = [
    0x00, 0x00, 0x38, 0x60, 0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_7: GlyphBitmap = [
    0x00, 0x00, 0xFE, 0xC6, 0x06, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_8: GlyphBitmap = [
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00, 0x00, 0x00,
    0x00,
];

const DIGIT_9: GlyphBitmap = [
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7E, 0x06, 0x06, 0x06, 0x0C, 0x78, 0x00, 0x00, 0x00,
    0x00,
];

const COLON: GlyphBitmap = [
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

const PERIOD: GlyphBitmap = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00,
    0x00,
];

const DASH: GlyphBitmap = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

/// Flash-resident clock charset
pub struct BuiltinFont;

impl GlyphSource for BuiltinFont {
    fn glyph(&self, ch: char) -> GlyphBitmap {
        match ch {
            '0' => DIGIT_0,
            '1' => DIGIT_1,
            '2' => DIGIT_2,
            '3' => DIGIT_3,
            '4' => DIGIT_4,
            '5' => DIGIT_5,
            '6' => DIGIT_6,
            '7' => DIGIT_7,
            '8' => DIGIT_8,
            '9' => DIGIT_9,
            ':' => COLON,
            '.' => PERIOD,
            '-' => DASH,
            ' ' => SPACE,
            _ => FALLBACK,
        }
    }
}
