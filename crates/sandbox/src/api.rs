//! Relative-offset API the settling rule works through.

use crate::cell::Coord;
use crate::Grid;

/// A view of the grid centred on the grain being updated.
/// Out-of-bounds cells read as occupied, so a move never leaves the grid.
#[derive(Debug)]
pub struct SandApi<'a> {
    pub grid: &'a mut Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> SandApi<'a> {
    pub fn new(grid: &'a mut Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    fn at(&self, dx: i32, dy: i32) -> Coord {
        Coord::new(self.x, self.y).offset(dx, dy)
    }

    /// True if the cell at the offset is inside the grid and holds no grain.
    #[must_use]
    pub fn is_vacant(&self, dx: i32, dy: i32) -> bool {
        let target = self.at(dx, dy);
        self.grid.in_bounds(target) && !self.grid.contains(target)
    }

    /// Relocate the centre grain by the offset, keeping its colour.
    /// Returns false and changes nothing if the destination is blocked or the
    /// centre is empty.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        if !self.is_vacant(dx, dy) {
            return false;
        }
        let Some(grain) = self.grid.take(self.at(0, 0)) else {
            return false;
        };
        self.grid.set(self.at(dx, dy), grain);
        self.x += dx;
        self.y += dy;
        true
    }

    pub fn move_down(&mut self) -> bool {
        self.move_by(0, 1)
    }

    pub fn move_down_left(&mut self) -> bool {
        self.move_by(-1, 1)
    }

    pub fn move_down_right(&mut self) -> bool {
        self.move_by(1, 1)
    }
}
