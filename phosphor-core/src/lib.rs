//! Board-agnostic core logic for the Phosphor sign firmware
//!
//! This crate contains all display logic that does not depend on specific
//! hardware implementations:
//!
//! - The three-color pixel palette and its two-line bus encoding
//! - Glyph bitmap and color plane buffer types with shape validation
//! - The carry-propagation bit shifting used by the scroll engine
//! - Wall-clock time arithmetic for the clock application
//! - Configuration type definitions
//! - Collaborator traits (glyph lookup)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod color;
pub mod config;
pub mod frame;
pub mod shift;
pub mod traits;

pub use color::{Color, ColorLines};
pub use frame::{FrameError, GlyphBitmap, TextFrame, GLYPH_ROWS, GLYPH_WIDTH, MAX_CHARS};
