//! Sandbox simulation module
//!
//! All movement logic lives here. Nothing in this module renders, sleeps, or
//! polls devices:
//! - Inputs arrive as `HeldKeys`
//! - Time arrives as a `dt` in seconds
//! - Iteration order over blocks is insertion order

pub mod block;
pub mod boundary;
pub mod physics;
pub mod policy;
pub mod state;
pub mod tick;

pub use block::{Block, BlockSpec};
pub use boundary::{Arena, Boundary, Grid, Playground};
pub use physics::{clamp_axis, damp_axis, stokes_attenuation, wrap_axis};
pub use policy::{BoundaryPolicy, InputPolicy};
pub use state::World;
pub use tick::{frame_dt, tick};
