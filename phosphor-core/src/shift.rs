//! Carry-propagation shifting for the scroll engine
//!
//! A display row spanning several character cells is stored as one byte per
//! cell, but scrolls as if it were a single long bit string. Shifting left
//! therefore folds the top bits of each following byte into the bottom of
//! the current one; the last byte shifts in zeros, so a full scroll drains
//! the row to all-dark.

use crate::color::Color;

/// Shift a row of cell bytes left by `n` bits (1-7) with carry
///
/// Bit order is MSB = leftmost pixel, bytes in cell order, so the row reads
/// as one continuous bit string across cell boundaries.
pub fn shift_line_left(line: &mut [u8], n: u8) {
    debug_assert!(n >= 1 && n < 8);
    let mask: u8 = 0xFF << (8 - n);
    for i in 0..line.len() {
        let carried = if i + 1 < line.len() {
            (line[i + 1] & mask) >> (8 - n)
        } else {
            0
        };
        line[i] = (line[i] << n) | carried;
    }
}

/// Shift a per-column color plane left by one column
///
/// Drops the leading entry and fills the vacated tail slot with
/// [`Color::None`], tracking the pixel shift of the bitmap rows.
pub fn shift_colors_left(colors: &mut [Color]) {
    if colors.is_empty() {
        return;
    }
    colors.rotate_left(1);
    if let Some(last) = colors.last_mut() {
        *last = Color::None;
    }
}
