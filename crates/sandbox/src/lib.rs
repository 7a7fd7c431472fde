//! Falling sand sandbox engine.
//!
//! Grains live in a sparse [`Grid`]; each [`Grid::tick`] lets every grain fall
//! one cell, sliding diagonally off whatever is below it. [`SandBox`] is the
//! WASM-facing wrapper the browser page drives.

// Logging macros must be declared before the modules that use them.
#[macro_use]
mod console;

pub mod api;
pub mod brush;
pub mod cell;
pub mod color;
pub mod config;
pub mod error;
pub mod sand;
pub mod sandbox;
pub mod simulation;


use std::collections::HashMap;

use cell::{Coord, Grain};
use rand::Rng;
use wasm_bindgen::prelude::*;

pub use brush::{Brush, BrushMode};
pub use config::{GridDimensions, SimulationConfig};
pub use error::ConfigError;
pub use sandbox::SandBox;
pub use simulation::Simulation;

/// Sparse grid of grains. Absent keys are empty cells.
///
/// `set` and `remove` do not check bounds; the brush and the settling rule
/// only ever hand it in-bounds coordinates.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: HashMap<Coord, Grain>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: HashMap::new(),
        }
    }

    #[must_use]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x >= 0 && (c.x as usize) < self.width && c.y >= 0 && (c.y as usize) < self.height
    }

    pub fn set(&mut self, c: Coord, grain: Grain) {
        self.cells.insert(c, grain);
    }

    /// Returns whether a grain was removed.
    pub fn remove(&mut self, c: Coord) -> bool {
        self.cells.remove(&c).is_some()
    }

    /// Remove and return the grain at `c`.
    pub fn take(&mut self, c: Coord) -> Option<Grain> {
        self.cells.remove(&c)
    }

    #[must_use]
    pub fn get(&self, c: Coord) -> Option<Grain> {
        self.cells.get(&c).copied()
    }

    #[must_use]
    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains_key(&c)
    }

    /// Occupied cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Grain)> + '_ {
        self.cells.iter().map(|(&c, &g)| (c, g))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Advance the simulation by one tick.
    ///
    /// Scans bottom-to-top, right-to-left. A grain only ever moves into the
    /// row below, which has already been scanned, so nothing moves twice in
    /// one tick. The floor row is never visited: grains there are at rest.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.cells.is_empty() || self.height < 2 {
            return;
        }
        let w = self.width as i32;
        let floor = self.height as i32 - 1;

        for y in (0..floor).rev() {
            for x in (0..w).rev() {
                if !self.contains(Coord::new(x, y)) {
                    continue;
                }
                let mut sand_api = api::SandApi::new(self, x, y);
                sand::update_sand(&mut sand_api, rng);
            }
        }
    }
}

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Install the panic hook and announce the engine in the console.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("sandbox engine {} initialized", env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen]
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    fn arb_cells(size: i32) -> impl Strategy<Value = HashSet<(i32, i32)>> {
        proptest::collection::hash_set((0..size, 0..size), 0..(size * size) as usize)
    }

    fn filled(size: usize, cells: &HashSet<(i32, i32)>) -> Grid {
        let mut grid = Grid::new(size, size);
        for &(x, y) in cells {
            grid.set(Coord::new(x, y), Grain::new((x + y) as f32));
        }
        grid
    }

    #[test]
    fn grid_new_is_empty() {
        let grid = Grid::new(64, 32);
        assert_eq!(grid.width, 64);
        assert_eq!(grid.height, 32);
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn grid_set_overwrites() {
        let mut grid = Grid::new(8, 8);
        let c = Coord::new(3, 4);
        grid.set(c, Grain::new(1.0));
        grid.set(c, Grain::new(2.0));
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.get(c), Some(Grain::new(2.0)));
    }

    #[test]
    fn grid_remove_reports_presence() {
        let mut grid = Grid::new(8, 8);
        let c = Coord::new(1, 1);
        assert!(!grid.remove(c));
        grid.set(c, Grain::new(0.0));
        assert!(grid.contains(c));
        assert!(grid.remove(c));
        assert!(!grid.contains(c));
        assert_eq!(grid.get(c), None);
    }

    #[test]
    fn grid_clear_empties_everything() {
        let mut grid = Grid::new(8, 8);
        for i in 0..8 {
            grid.set(Coord::new(i, i), Grain::new(0.0));
        }
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }

    #[test]
    fn grid_in_bounds_checks() {
        let grid = Grid::new(10, 5);
        assert!(grid.in_bounds(Coord::new(0, 0)));
        assert!(grid.in_bounds(Coord::new(9, 4)));
        assert!(!grid.in_bounds(Coord::new(-1, 0)));
        assert!(!grid.in_bounds(Coord::new(10, 0)));
        assert!(!grid.in_bounds(Coord::new(0, -1)));
        assert!(!grid.in_bounds(Coord::new(0, 5)));
    }

    #[test]
    fn single_grain_falls_to_floor_and_stays() {
        let mut grid = Grid::new(10, 10);
        let mut rng = rng();
        grid.set(Coord::new(5, 0), Grain::new(33.0));

        grid.tick(&mut rng);
        assert_eq!(grid.get(Coord::new(5, 1)), Some(Grain::new(33.0)));
        assert_eq!(grid.len(), 1);

        for _ in 1..9 {
            grid.tick(&mut rng);
        }
        assert!(grid.contains(Coord::new(5, 9)));

        for _ in 0..20 {
            grid.tick(&mut rng);
            assert_eq!(grid.get(Coord::new(5, 9)), Some(Grain::new(33.0)));
            assert_eq!(grid.len(), 1);
        }
    }

    #[test]
    fn column_falls_as_a_block() {
        // A stacked column moves down together, one row per tick.
        let mut grid = Grid::new(3, 10);
        for y in 0..3 {
            grid.set(Coord::new(1, y), Grain::new(y as f32));
        }
        grid.tick(&mut rng());
        for y in 1..4 {
            assert_eq!(grid.get(Coord::new(1, y)), Some(Grain::new((y - 1) as f32)));
        }
        assert!(!grid.contains(Coord::new(1, 0)));
    }

    #[test]
    fn single_row_grid_is_all_floor() {
        let mut grid = Grid::new(4, 1);
        grid.set(Coord::new(2, 0), Grain::new(0.0));
        grid.tick(&mut rng());
        assert!(grid.contains(Coord::new(2, 0)));
    }

    proptest! {
        #[test]
        fn prop_grid_set_get_round_trip(x in -100i32..100, y in -100i32..100, hue in 0.0f32..360.0) {
            let mut grid = Grid::new(16, 16);
            grid.set(Coord::new(x, y), Grain::new(hue));
            prop_assert_eq!(grid.get(Coord::new(x, y)), Some(Grain::new(hue)));
        }

        #[test]
        fn prop_tick_conserves_grains_and_bounds(cells in arb_cells(16), seed in any::<u64>()) {
            let mut grid = filled(16, &cells);
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut hues: Vec<u32> = grid.iter().map(|(_, g)| g.hue.to_bits()).collect();
            hues.sort_unstable();

            for _ in 0..4 {
                grid.tick(&mut rng);
                prop_assert_eq!(grid.len(), cells.len());
                for (c, _) in grid.iter() {
                    prop_assert!(grid.in_bounds(c));
                }
            }

            let mut after: Vec<u32> = grid.iter().map(|(_, g)| g.hue.to_bits()).collect();
            after.sort_unstable();
            prop_assert_eq!(after, hues);
        }

        #[test]
        fn prop_grains_move_at_most_one_row(cells in arb_cells(12), seed in any::<u64>()) {
            // Give every grain a unique hue so it can be tracked.
            let mut grid = Grid::new(12, 12);
            for (i, &(x, y)) in cells.iter().enumerate() {
                grid.set(Coord::new(x, y), Grain::new(i as f32));
            }
            let before: HashMap<u32, Coord> =
                grid.iter().map(|(c, g)| (g.hue.to_bits(), c)).collect();

            grid.tick(&mut SmallRng::seed_from_u64(seed));

            for (c, g) in grid.iter() {
                let from = before[&g.hue.to_bits()];
                let dy = c.y - from.y;
                let dx = c.x - from.x;
                prop_assert!(dy == 0 || dy == 1, "moved {dy} rows");
                prop_assert!(dx.abs() <= dy, "moved sideways without falling");
            }
        }

        #[test]
        fn prop_floor_row_never_moves(xs in proptest::collection::hash_set(0i32..16, 1..16), seed in any::<u64>()) {
            let mut grid = Grid::new(16, 16);
            for &x in &xs {
                grid.set(Coord::new(x, 15), Grain::new(0.0));
            }
            let mut rng = SmallRng::seed_from_u64(seed);
            for _ in 0..8 {
                grid.tick(&mut rng);
            }
            for &x in &xs {
                prop_assert!(grid.contains(Coord::new(x, 15)));
            }
            prop_assert_eq!(grid.len(), xs.len());
        }

        #[test]
        fn prop_lone_grain_falls_straight(x in 0i32..16, y in 0i32..15, seed in any::<u64>()) {
            let mut grid = Grid::new(16, 16);
            grid.set(Coord::new(x, y), Grain::new(0.0));
            grid.tick(&mut SmallRng::seed_from_u64(seed));
            prop_assert!(grid.contains(Coord::new(x, y + 1)));
            prop_assert!(!grid.contains(Coord::new(x, y)));
        }
    }
}
