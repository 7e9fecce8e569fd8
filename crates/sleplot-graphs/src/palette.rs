//! Fixed round-robin palette for XY series.
//!
//! A series' color depends only on the 1-based position of its file on the
//! command line, taken modulo the palette length.

use plotters::style::RGBColor;

/// Number of palette entries.
pub const PALETTE_LEN: usize = 9;

/// Palette indexed by `position % 9`: green, blue, red, cyan, magenta,
/// yellow, black, white, red.
pub const PALETTE: [RGBColor; PALETTE_LEN] = [
    RGBColor(0, 128, 0), // Green
    RGBColor(0, 0, 255), // Blue
    RGBColor(255, 0, 0), // Red
    RGBColor(0, 191, 191), // Cyan
    RGBColor(191, 0, 191), // Magenta
    RGBColor(191, 191, 0), // Yellow
    RGBColor(0, 0, 0), // Black
    RGBColor(255, 255, 255), // White
    RGBColor(255, 0, 0), // Red
];

/// Color for the series read from the file at 1-based `position`.
#[must_use]
pub const fn series_color(position: usize) -> RGBColor {
    PALETTE[position % PALETTE_LEN]
}
