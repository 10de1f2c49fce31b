//! Per-frame simulation step
//!
//! One call advances every block by one frame. Within a block the order is
//! fixed: input, damping, integration, restriction.

use super::state::World;
use crate::platform::HeldKeys;

/// Sanitize a raw frame delta: non-finite or negative becomes 0, long
/// frames are capped so a stall cannot tunnel a block across the grid.
#[inline]
pub fn frame_dt(raw: f32, max: f32) -> f32 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(max)
    } else {
        0.0
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World, keys: &HeldKeys, dt: f32) {
    let dt = frame_dt(dt, world.max_frame_dt);
    let speed = world.speed;
    let viscosity = world.viscosity;
    let arena = &world.arena;

    for block in &mut world.blocks {
        block.handle_input(keys, speed, dt);
        if let Some(viscosity) = viscosity {
            block.damping(viscosity, dt);
        }
        block.update(dt).restrict(arena);
    }

    world.frame += 1;
    log::trace!("frame {} advanced by {dt:.4}s", world.frame);
}
