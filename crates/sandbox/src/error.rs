//! Start-up errors. The tick loop itself never fails.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("canvas must have a positive size, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },
    #[error("target particle count must be positive")]
    ZeroParticleBudget,
    #[error("canvas {width}x{height} is too small for {target} particles: grain size rounds to zero")]
    ZeroGrainSize { width: u32, height: u32, target: u32 },
    #[error("grid would be {width}x{height} cells; both sides must be at least one cell")]
    EmptyGrid { width: u32, height: u32 },
    #[error("brush radius must be positive")]
    ZeroBrushRadius,
    #[error("brush radius {radius} is larger than the grid ({max} cells)")]
    BrushTooLarge { radius: u32, max: u32 },
    #[error("tick rate must be positive")]
    ZeroTickRate,
    #[error("hue step must be a finite, non-negative number of degrees, got {0}")]
    InvalidHueStep(f32),
}
