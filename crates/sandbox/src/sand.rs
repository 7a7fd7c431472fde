//! Sand settling rule: fall straight down, else slide diagonally.

use rand::Rng;

use crate::api::SandApi;

/// Where a grain ended up after one update.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Settle {
    Down,
    DownLeft,
    DownRight,
    Stuck,
}

/// Apply one step of the settling rule to the grain under `api`.
///
/// When the cell below is taken, a coin flip picks which diagonal to try
/// first so piles grow symmetrically. `true` from the coin means left first.
pub fn update_sand<R: Rng + ?Sized>(api: &mut SandApi, rng: &mut R) -> Settle {
    if api.move_down() {
        return Settle::Down;
    }

    if rng.gen_bool(0.5) {
        if api.move_down_left() {
            return Settle::DownLeft;
        }
        if api.move_down_right() {
            return Settle::DownRight;
        }
    } else {
        if api.move_down_right() {
            return Settle::DownRight;
        }
        if api.move_down_left() {
            return Settle::DownLeft;
        }
    }
    Settle::Stuck
}
