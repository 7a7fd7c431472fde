//! Hue cycle that tints newly painted grains.
//!
//! The cycle advances once per tick, so a steady brush stroke leaves a slow
//! rainbow gradient behind it. Grains already on the grid keep their hue.

/// Degrees in a full turn of the colour wheel.
pub const FULL_TURN: f32 = 360.0;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct HueCycle {
    hue: f32,
    step: f32,
}

impl HueCycle {
    #[must_use]
    pub fn new(start: f32, step: f32) -> Self {
        Self {
            hue: wrap(start),
            step,
        }
    }

    #[must_use]
    pub fn current(&self) -> f32 {
        self.hue
    }

    pub fn advance(&mut self) -> f32 {
        self.hue = wrap(self.hue + self.step);
        self.hue
    }
}

/// `rem_euclid` can round up to exactly 360 for tiny negative inputs.
fn wrap(hue: f32) -> f32 {
    let wrapped = hue.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}
