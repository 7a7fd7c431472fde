//! A running sandbox: grid, brush, paint colour and random source together.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::brush::{Brush, BrushMode};
use crate::cell::{Coord, Grain};
use crate::color::HueCycle;
use crate::config::{GridDimensions, SimulationConfig};
use crate::error::ConfigError;
use crate::Grid;

#[derive(Debug)]
pub struct Simulation<R = SmallRng> {
    grid: Grid,
    dims: GridDimensions,
    brush: Brush,
    hue: HueCycle,
    tick_interval_ms: f64,
    ticks: u64,
    rng: R,
}

impl Simulation<SmallRng> {
    /// Build a simulation seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SimulationConfig::validate`].
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Build a simulation that draws its diagonal tie-breaks from `rng`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`SimulationConfig::validate`].
    pub fn with_rng(config: &SimulationConfig, rng: R) -> Result<Self, ConfigError> {
        let dims = config.validate()?;
        let radius = dims.brush_radius(config.brush_radius)?;
        Ok(Self {
            grid: Grid::new(dims.width as usize, dims.height as usize),
            dims,
            brush: Brush::new(radius),
            hue: HueCycle::new(config.initial_hue, config.hue_step),
            tick_interval_ms: config.tick_interval_ms(),
            ticks: 0,
            rng,
        })
    }

    /// Advance the paint colour, then settle every grain once.
    pub fn tick(&mut self) {
        self.hue.advance();
        self.grid.tick(&mut self.rng);
        self.ticks += 1;
    }

    /// Run the brush at `center` in the current mode.
    pub fn apply_brush(&mut self, center: Coord) -> usize {
        self.brush.apply(&mut self.grid, center, self.hue.current())
    }

    pub fn paint(&mut self, center: Coord) -> usize {
        self.brush.paint(&mut self.grid, center, self.hue.current())
    }

    pub fn erase(&mut self, center: Coord) -> usize {
        self.brush.erase(&mut self.grid, center)
    }

    /// Drop every grain. Returns how many were cleared.
    pub fn reset(&mut self) -> usize {
        let cleared = self.grid.len();
        self.grid.clear();
        cleared
    }

    #[must_use]
    pub fn mode(&self) -> BrushMode {
        self.brush.mode
    }

    pub fn set_mode(&mut self, mode: BrushMode) {
        self.brush.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> BrushMode {
        self.brush.mode = self.brush.mode.toggled();
        self.brush.mode
    }

    /// Resize the brush. The old radius stays if the new one is rejected.
    ///
    /// # Errors
    ///
    /// Zero, or wider than the grid.
    pub fn set_brush_radius(&mut self, radius: u32) -> Result<(), ConfigError> {
        self.brush.radius = self.dims.brush_radius(radius)?;
        Ok(())
    }

    #[must_use]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Occupied cells for the renderer.
    pub fn grains(&self) -> impl Iterator<Item = (Coord, Grain)> + '_ {
        self.grid.iter()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// Hue the next painted grain will get.
    #[must_use]
    pub fn current_hue(&self) -> f32 {
        self.hue.current()
    }

    #[must_use]
    pub fn tick_interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
