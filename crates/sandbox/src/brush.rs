//! Square brush that paints or erases grains around a cell.

use std::fmt;

use crate::cell::{Coord, Grain};
use crate::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum BrushMode {
    #[default]
    Paint,
    Erase,
}

impl BrushMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Paint => Self::Erase,
            Self::Erase => Self::Paint,
        }
    }
}

impl fmt::Display for BrushMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paint => write!(f, "draw"),
            Self::Erase => write!(f, "erase"),
        }
    }
}

/// The footprint covers offsets `-radius..radius` on both axes, so it is
/// `2 * radius` cells wide with the centre just right of and below the middle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Brush {
    pub radius: i32,
    pub mode: BrushMode,
}

impl Brush {
    #[must_use]
    pub fn new(radius: i32) -> Self {
        Self {
            radius,
            mode: BrushMode::Paint,
        }
    }

    /// In-bounds cells under the brush. Cells past the grid edge are dropped.
    pub fn footprint(&self, grid: &Grid, center: Coord) -> impl Iterator<Item = Coord> {
        let r = self.radius;
        let xs = center.x.saturating_sub(r).max(0)..center.x.saturating_add(r).min(grid.width as i32);
        let ys = center.y.saturating_sub(r).max(0)..center.y.saturating_add(r).min(grid.height as i32);
        ys.flat_map(move |y| xs.clone().map(move |x| Coord::new(x, y)))
    }

    /// Paint or erase depending on the current mode. Returns how many cells
    /// changed.
    pub fn apply(&self, grid: &mut Grid, center: Coord, hue: f32) -> usize {
        match self.mode {
            BrushMode::Paint => self.paint(grid, center, hue),
            BrushMode::Erase => self.erase(grid, center),
        }
    }

    /// Fill empty cells with new grains of `hue`. Existing grains keep their
    /// colour.
    pub fn paint(&self, grid: &mut Grid, center: Coord, hue: f32) -> usize {
        let targets: Vec<Coord> = self
            .footprint(grid, center)
            .filter(|&c| !grid.contains(c))
            .collect();
        for &coord in &targets {
            grid.set(coord, Grain::new(hue));
        }
        targets.len()
    }

    pub fn erase(&self, grid: &mut Grid, center: Coord) -> usize {
        let targets: Vec<Coord> = self.footprint(grid, center).collect();
        let mut erased = 0;
        for coord in targets {
            if grid.remove(coord) {
                erased += 1;
            }
        }
        erased
    }
}
