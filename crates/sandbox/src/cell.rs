//! Coordinate and Grain types for the simulation grid.

use std::fmt;

/// Grid address: `x` is the column, `y` the row, with row 0 at the top.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One grain of sand. The hue is fixed when the grain is painted and travels
/// with it on every move.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Grain {
    pub hue: f32,
}

impl Grain {
    pub const SATURATION: u8 = 70;
    pub const LIGHTNESS: u8 = 50;

    #[must_use]
    pub fn new(hue: f32) -> Self {
        Self { hue }
    }

    /// CSS colour string for the host canvas.
    #[must_use]
    pub fn css_color(&self) -> String {
        format!("hsl({:.1} {}% {}%)", self.hue, Self::SATURATION, Self::LIGHTNESS)
    }
}

impl fmt::Display for Grain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grain({:.1})", self.hue)
    }
}
