//! WASM entry point for the browser page.
//!
//! The page owns the canvas, the buttons and the timers. It calls `tick` on a
//! fixed interval, forwards pointer events, and reads `render_data` on every
//! animation frame.

use wasm_bindgen::prelude::*;

use crate::brush::BrushMode;
use crate::cell::Grain;
use crate::config::SimulationConfig;
use crate::simulation::Simulation;

#[wasm_bindgen]
#[derive(Debug)]
pub struct SandBox {
    sim: Simulation,
    /// A pointer button is held down; moves keep applying the brush.
    drawing: bool,
}

#[wasm_bindgen]
impl SandBox {
    /// Fit a grid to the canvas. Throws if the canvas is too small to hold
    /// a single grain.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_width: u32, canvas_height: u32, seed: u32) -> Result<SandBox, JsError> {
        let config = SimulationConfig::for_canvas(canvas_width, canvas_height).with_seed(u64::from(seed));
        Ok(Self::from_config(&config)?)
    }

    /// Like the constructor, with the particle budget and brush radius
    /// chosen by the page.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(
        canvas_width: u32,
        canvas_height: u32,
        seed: u32,
        target_particles: u32,
        brush_radius: u32,
    ) -> Result<SandBox, JsError> {
        let config = SimulationConfig::for_canvas(canvas_width, canvas_height)
            .with_seed(u64::from(seed))
            .with_target_particles(target_particles)
            .with_brush_radius(brush_radius);
        Ok(Self::from_config(&config)?)
    }

    pub fn tick(&mut self) {
        self.sim.tick();
    }

    /// Start a stroke and paint or erase under the pointer.
    pub fn pointer_down(&mut self, px: f64, py: f64) {
        self.drawing = true;
        self.stroke(px, py);
    }

    pub fn pointer_move(&mut self, px: f64, py: f64) {
        if self.drawing {
            self.stroke(px, py);
        }
    }

    pub fn pointer_up(&mut self) {
        self.drawing = false;
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    #[must_use]
    pub fn is_erasing(&self) -> bool {
        self.sim.mode() == BrushMode::Erase
    }

    pub fn set_erasing(&mut self, erasing: bool) {
        let mode = if erasing { BrushMode::Erase } else { BrushMode::Paint };
        if mode != self.sim.mode() {
            self.sim.set_mode(mode);
            console_log!("brush mode: {mode}");
        }
    }

    /// Flip between painting and erasing; returns true when now erasing.
    pub fn toggle_erasing(&mut self) -> bool {
        let mode = self.sim.toggle_mode();
        console_log!("brush mode: {mode}");
        mode == BrushMode::Erase
    }

    /// Status label for the current mode, `"draw"` or `"erase"`.
    #[must_use]
    pub fn mode_label(&self) -> String {
        self.sim.mode().to_string()
    }

    pub fn reset(&mut self) {
        let cleared = self.sim.reset();
        console_log!("reset: cleared {cleared} grains");
    }

    /// Throws, keeping the old radius, if `radius` is zero or wider than
    /// the grid.
    pub fn set_brush_radius(&mut self, radius: u32) -> Result<(), JsError> {
        self.try_set_brush_radius(radius)?;
        Ok(())
    }

    #[must_use]
    pub fn brush_radius(&self) -> u32 {
        self.sim.brush().radius as u32
    }

    #[must_use]
    pub fn grid_width(&self) -> u32 {
        self.sim.dimensions().width
    }

    #[must_use]
    pub fn grid_height(&self) -> u32 {
        self.sim.dimensions().height
    }

    /// Side of one grain in canvas pixels.
    #[must_use]
    pub fn grain_size(&self) -> u32 {
        self.sim.dimensions().grain_size
    }

    #[must_use]
    pub fn tick_interval_ms(&self) -> f64 {
        self.sim.tick_interval_ms()
    }

    #[must_use]
    pub fn grain_count(&self) -> usize {
        self.sim.grid().len()
    }

    /// Flat `[x, y, hue, x, y, hue, ...]` triples, one per grain.
    #[must_use]
    pub fn render_data(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sim.grid().len() * 3);
        for (c, grain) in self.sim.grains() {
            out.extend_from_slice(&[c.x as f32, c.y as f32, grain.hue]);
        }
        out
    }

    /// CSS colour of the next grain, for the sand swatch.
    #[must_use]
    pub fn sand_color(&self) -> String {
        Grain::new(self.sim.current_hue()).css_color()
    }
}

impl SandBox {
    /// Build from a full config. Rejected configs are logged before the
    /// error is returned.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`](crate::ConfigError) from validation.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, crate::ConfigError> {
        let sim = Simulation::new(config).inspect_err(|err| {
            console_warn!("sandbox config rejected: {err}");
        })?;
        let dims = sim.dimensions();
        console_log!(
            "sandbox ready: {}x{} grid, {}px grains",
            dims.width,
            dims.height,
            dims.grain_size
        );
        Ok(Self { sim, drawing: false })
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Resize the brush, logging rejected sizes.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`](crate::ConfigError) for a zero or
    /// oversized radius.
    pub fn try_set_brush_radius(&mut self, radius: u32) -> Result<(), crate::ConfigError> {
        self.sim.set_brush_radius(radius).inspect_err(|err| {
            console_warn!("brush radius rejected: {err}");
        })?;
        console_log!("brush radius: {radius}");
        Ok(())
    }

    fn stroke(&mut self, px: f64, py: f64) {
        let center = self.sim.dimensions().pixel_to_cell(px, py);
        self.sim.apply_brush(center);
    }
}
