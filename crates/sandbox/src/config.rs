//! Simulation settings and the grid geometry derived from them.

use crate::cell::Coord;
use crate::error::ConfigError;

/// Particle budget the grain size is fitted to.
pub const DEFAULT_TARGET_PARTICLES: u32 = 1 << 14;
pub const DEFAULT_BRUSH_RADIUS: u32 = 2;
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;
pub const DEFAULT_INITIAL_HUE: f32 = 180.0;
pub const DEFAULT_HUE_STEP: f32 = 0.1;

/// Everything the host decides once at start-up.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Canvas size in pixels.
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub target_particles: u32,
    /// Half-width of the square brush footprint, in cells.
    pub brush_radius: u32,
    pub ticks_per_second: u32,
    pub initial_hue: f32,
    /// Degrees the paint hue advances per tick.
    pub hue_step: f32,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            target_particles: DEFAULT_TARGET_PARTICLES,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            initial_hue: DEFAULT_INITIAL_HUE,
            hue_step: DEFAULT_HUE_STEP,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn for_canvas(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_target_particles(mut self, target_particles: u32) -> Self {
        self.target_particles = target_particles;
        self
    }

    #[must_use]
    pub fn with_brush_radius(mut self, brush_radius: u32) -> Self {
        self.brush_radius = brush_radius;
        self
    }

    /// Milliseconds between ticks.
    #[must_use]
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.ticks_per_second.max(1))
    }

    /// Check every setting and derive the grid geometry.
    ///
    /// # Errors
    ///
    /// Returns the first setting that would leave the tick loop or the brush
    /// without a meaningful grid.
    pub fn validate(&self) -> Result<GridDimensions, ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.target_particles == 0 {
            return Err(ConfigError::ZeroParticleBudget);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if !self.hue_step.is_finite() || self.hue_step < 0.0 {
            return Err(ConfigError::InvalidHueStep(self.hue_step));
        }

        let area = u64::from(self.canvas_width) * u64::from(self.canvas_height);
        let grain_size = (area as f64 / f64::from(self.target_particles)).sqrt().floor() as u32;
        if grain_size == 0 {
            return Err(ConfigError::ZeroGrainSize {
                width: self.canvas_width,
                height: self.canvas_height,
                target: self.target_particles,
            });
        }

        let dims = GridDimensions {
            width: self.canvas_width / grain_size,
            height: self.canvas_height / grain_size,
            grain_size,
        };
        if dims.width == 0 || dims.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: dims.width,
                height: dims.height,
            });
        }
        dims.brush_radius(self.brush_radius)?;
        Ok(dims)
    }
}

/// Grid size in cells plus the pixel size of one cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
    pub grain_size: u32,
}

impl GridDimensions {
    /// Longest grid side; no brush needs to be wider than this.
    #[must_use]
    pub fn longest_side(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Check a brush radius against this grid and convert it for the brush.
    ///
    /// # Errors
    ///
    /// Zero, or larger than the longest grid side.
    pub fn brush_radius(&self, radius: u32) -> Result<i32, ConfigError> {
        if radius == 0 {
            return Err(ConfigError::ZeroBrushRadius);
        }
        let max = self.longest_side();
        if radius > max {
            return Err(ConfigError::BrushTooLarge { radius, max });
        }
        i32::try_from(radius).map_err(|_| ConfigError::BrushTooLarge { radius, max })
    }

    /// Floor a canvas pixel position to the cell under it. Positions left of
    /// or above the canvas map to negative coordinates.
    #[must_use]
    pub fn pixel_to_cell(&self, px: f64, py: f64) -> Coord {
        let size = f64::from(self.grain_size);
        Coord::new((px / size).floor() as i32, (py / size).floor() as i32)
    }
}
