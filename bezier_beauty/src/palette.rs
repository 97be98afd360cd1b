//! Fixed color palette shared by the handle levels and the curve trail.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 8 bit per channel RGB color, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Number of palette entries, also the largest polygon side count the animation reaches.
pub const PALETTE_SIZE: usize = 9;

/// Colors indexed by handle level and by `sides - 2` for the trail.
pub const PALETTE: [Rgb; PALETTE_SIZE] = [
    Rgb::new(204, 0, 0),
    Rgb::new(255, 153, 0),
    Rgb::new(153, 204, 0),
    Rgb::new(0, 204, 153),
    Rgb::new(0, 102, 204),
    Rgb::new(102, 0, 255),
    Rgb::new(204, 0, 204),
    Rgb::new(214, 0, 147),
    Rgb::new(255, 80, 80),
];

/// Frame background fill.
pub const BACKGROUND: Rgb = Rgb::new(20, 20, 20);

/// Color for the handle level at `level_index` (0 is the polygon itself).
///
/// An animation frame on `sides <= PALETTE_SIZE` has `sides` levels so each level has its own
/// entry. The clamp to the last entry only guards callers cascading longer point lists.
#[inline]
pub fn level_color(level_index: usize) -> Rgb {
    PALETTE[level_index.min(PALETTE_SIZE - 1)]
}

/// Color for the curve trail of a polygon with `sides` vertexes (`PALETTE[sides - 2]`).
///
/// # Examples
///
/// ```
/// # use bezier_beauty::palette::*;
/// assert_eq!(trail_color(3), PALETTE[1]);
/// assert_eq!(trail_color(9), PALETTE[7]);
/// ```
#[inline]
pub fn trail_color(sides: usize) -> Rgb {
    level_color(sides.saturating_sub(2))
}
