//! Pixel colors and their bus encoding
//!
//! The HD-0158 RG0019A panel has a red and a green die per pixel, fed from
//! two serial data lines. A lit pixel takes one of three colors depending
//! on which combination of the two lines is asserted while the pixel bit is
//! clocked in.

/// Color of one 8-pixel character column
///
/// `None` means the column's pixels stay dark even where the bitmap has
/// bits set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel dark regardless of bitmap
    #[default]
    None,
    /// Red die only
    Red,
    /// Both dies lit
    Orange,
    /// Green die only
    Green,
}

/// Levels of the two color data lines for one clocked pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorLines {
    /// DR line (red die)
    pub red: bool,
    /// DG line (green die)
    pub green: bool,
}

impl Color {
    /// Encode this color as color-line levels for a lit pixel
    ///
    /// An unlit pixel always clocks in with both lines low, whatever its
    /// column color.
    pub fn lines(self) -> ColorLines {
        match self {
            Color::None => ColorLines {
                red: false,
                green: false,
            },
            Color::Red => ColorLines {
                red: true,
                green: false,
            },
            Color::Orange => ColorLines {
                red: true,
                green: true,
            },
            Color::Green => ColorLines {
                red: false,
                green: true,
            },
        }
    }
}
