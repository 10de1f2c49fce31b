//! The movable block entity
//!
//! A block is a sprite-sized rectangle with a kinematic state. All mutators
//! return `&mut Self` so a frame reads as a chain:
//!
//! ```
//! # use block_sandbox::sim::{Block, BlockSpec, Grid};
//! # use block_sandbox::platform::HeldKeys;
//! # use glam::Vec2;
//! # let grid = Grid::new(Vec2::ZERO, 10, 10, 20.0);
//! # let mut block = Block::new(BlockSpec::new(Vec2::splat(20.0)));
//! # let (keys, dt) = (HeldKeys::none(), 1.0 / 60.0);
//! block.set_speed_by_click(&keys, 100.0).damping(0.5, dt).update(dt).restrict(&grid);
//! ```
//!
//! Order matters: damping must run before `update` to affect that frame's
//! displacement, and `restrict` must run last.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boundary::{Boundary, Grid};
use super::physics::{clamp_axis, damp_axis, stokes_attenuation, wrap_axis};
use super::policy::{BoundaryPolicy, InputPolicy};
use crate::consts::DEFAULT_MASS;
use crate::error::SandboxError;
use crate::platform::assets::{AssetLoader, scaled_size};
use crate::platform::input::{Direction, HeldKeys};
use crate::rect_center;
use crate::renderer::Canvas;
use crate::renderer::vertex::colors;

/// Construction parameters for a block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSpec {
    pub size: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub boundary_policy: BoundaryPolicy,
    pub input_policy: InputPolicy,
}

impl BlockSpec {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            position: Vec2::new(100.0, 100.0),
            velocity: Vec2::ZERO,
            mass: DEFAULT_MASS,
            boundary_policy: BoundaryPolicy::default(),
            input_policy: InputPolicy::default(),
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_policies(mut self, boundary: BoundaryPolicy, input: InputPolicy) -> Self {
        self.boundary_policy = boundary;
        self.input_policy = input;
        self
    }
}

/// A rectangular sprite moving inside a boundary
///
/// Blocks serialize for snapshots but never deserialize; a block is built
/// from a `BlockSpec` and changes only through its own methods:
///
/// ```compile_fail
/// fn needs_deserialize<T: serde::de::DeserializeOwned>() {}
/// needs_deserialize::<block_sandbox::sim::Block>();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Top-left corner (screen coordinates, y down)
    position: Vec2,
    /// Fixed at construction
    size: Vec2,
    /// Last commanded velocity; persists until input changes it
    init_velocity: Vec2,
    /// Velocity integrated by `update`
    velocity: Vec2,
    mass: f32,
    boundary_policy: BoundaryPolicy,
    input_policy: InputPolicy,
}

impl Block {
    pub fn new(spec: BlockSpec) -> Self {
        Self {
            position: spec.position,
            size: spec.size,
            init_velocity: spec.velocity,
            velocity: spec.velocity,
            mass: spec.mass,
            boundary_policy: spec.boundary_policy,
            input_policy: spec.input_policy,
        }
    }

    /// Build a block whose size comes from its sprite asset
    ///
    /// `spec.size` is ignored and replaced with the asset's size scaled by
    /// `scaling_factor`. An unknown asset is an error.
    pub fn from_asset(
        loader: &impl AssetLoader,
        path: &str,
        scaling_factor: f32,
        spec: BlockSpec,
    ) -> Result<Self, SandboxError> {
        let size = scaled_size(loader.image_size(path)?, scaling_factor);
        log::debug!("Block asset {path} resolved to {}x{}", size.x, size.y);
        Ok(Self::new(BlockSpec { size, ..spec }))
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn init_velocity(&self) -> Vec2 {
        self.init_velocity
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.boundary_policy
    }

    pub fn input_policy(&self) -> InputPolicy {
        self.input_policy
    }

    pub fn center(&self) -> Vec2 {
        rect_center(self.position, self.size)
    }

    /// Whether this block can sit inside `area` at all
    pub fn fits_within(&self, area: &impl Boundary) -> bool {
        area.fits(self.size)
    }

    // === Movement primitives ===

    /// Shift the position; no constraint is applied
    pub fn move_by(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.position += Vec2::new(dx, dy);
        self
    }

    /// Nudge the position directly by `±speed·dt` per held direction
    ///
    /// Velocity is untouched. Opposite directions cancel; orthogonal ones
    /// compose into diagonal motion.
    pub fn interact_with_user(&mut self, keys: &HeldKeys, speed: f32, dt: f32) -> &mut Self {
        let step = speed * dt;
        for dir in keys.iter() {
            let (ux, uy) = dir.delta();
            self.move_by(ux * step, uy * step);
        }
        self
    }

    /// Add a `±speed` impulse to the velocity for each held direction
    ///
    /// The commanded axis of `init_velocity` is overwritten; `velocity` is
    /// accumulated, so holding a key keeps accelerating.
    pub fn set_speed_by_click(&mut self, keys: &HeldKeys, speed: f32) -> &mut Self {
        for dir in keys.iter() {
            let (ux, uy) = dir.delta();
            if ux != 0.0 {
                self.init_velocity.x = ux * speed;
                self.velocity.x += self.init_velocity.x;
            } else {
                self.init_velocity.y = uy * speed;
                self.velocity.y += self.init_velocity.y;
            }
        }
        self
    }

    /// Single-axis steering
    ///
    /// Each held direction replaces `init_velocity` with a one-axis vector;
    /// the last one in polling order (up, down, left, right) wins. The
    /// velocity is then copied verbatim from `init_velocity`, so the block
    /// keeps its heading when no key is held.
    pub fn steer(&mut self, keys: &HeldKeys, speed: f32) -> &mut Self {
        if let Some(dir) = keys.iter().last() {
            let (ux, uy) = dir.delta();
            self.init_velocity = Vec2::new(ux * speed, uy * speed);
        }
        self.velocity = self.init_velocity;
        self
    }

    /// Turn a direction into a steering command without key polling
    pub fn steer_toward(&mut self, dir: Direction, speed: f32) -> &mut Self {
        self.steer(&HeldKeys::none().with(dir), speed)
    }

    /// Apply held keys through this block's input policy
    pub fn handle_input(&mut self, keys: &HeldKeys, speed: f32, dt: f32) -> &mut Self {
        match self.input_policy {
            InputPolicy::Nudge => self.interact_with_user(keys, speed, dt),
            InputPolicy::Impulse => self.set_speed_by_click(keys, speed),
            InputPolicy::AxisExclusive => self.steer(keys, speed),
        }
    }

    // === Physics ===

    /// Integrate `position += velocity·dt`
    pub fn update(&mut self, dt: f32) -> &mut Self {
        let delta = self.velocity * dt;
        self.move_by(delta.x, delta.y)
    }

    /// Stokes-style viscous decay, each axis independently
    pub fn damping(&mut self, viscosity: f32, dt: f32) -> &mut Self {
        let attenuation = stokes_attenuation(viscosity, self.width(), self.mass);
        self.velocity.x = damp_axis(self.velocity.x, attenuation, dt);
        self.velocity.y = damp_axis(self.velocity.y, attenuation, dt);
        self
    }

    // === Boundary policies ===

    /// Apply this block's boundary policy
    pub fn restrict(&mut self, area: &impl Boundary) -> &mut Self {
        match self.boundary_policy {
            BoundaryPolicy::Clamp => self.clamp_to(area),
            BoundaryPolicy::Wrap => self.wrap_around(area),
        }
    }

    /// Hard clamp into `[origin, origin + area.size - block.size]`
    pub fn clamp_to(&mut self, area: &impl Boundary) -> &mut Self {
        let min = area.origin();
        let max = area.max_corner() - self.size;
        self.position = Vec2::new(
            clamp_axis(self.position.x, min.x, max.x),
            clamp_axis(self.position.y, min.y, max.y),
        );
        self
    }

    /// Teleport to the opposite edge when leaving the area
    pub fn wrap_around(&mut self, area: &impl Boundary) -> &mut Self {
        let min = area.origin();
        let max = area.max_corner() - self.size;
        self.position = Vec2::new(
            wrap_axis(self.position.x, min.x, max.x),
            wrap_axis(self.position.y, min.y, max.y),
        );
        self
    }

    // === Lattice queries ===

    /// Grid nodes closer to the block's center than its width, row-major
    pub fn closest_nodes(&self, grid: &Grid) -> Vec<Vec2> {
        let center = self.center();
        let reach = self.width();
        grid.iter_nodes()
            .filter(|node| node.distance(center) < reach)
            .collect()
    }

    pub fn draw(&self, canvas: &mut impl Canvas) {
        canvas.sprite(self.position, self.size, colors::BLOCK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::VertexBatch;
    use crate::sim::Playground;
    use proptest::prelude::*;

    fn grid() -> Grid {
        Grid::new(Vec2::new(10.0, 10.0), 28, 60, 21.0)
    }

    fn block(boundary: BoundaryPolicy, input: InputPolicy) -> Block {
        Block::new(BlockSpec::new(Vec2::splat(21.0)).with_policies(boundary, input))
    }

    fn keys(dirs: &[Direction]) -> HeldKeys {
        dirs.iter().fold(HeldKeys::none(), |k, d| k.with(*d))
    }

    #[test]
    fn test_move_by_is_unconstrained() {
        let mut b = block(BoundaryPolicy::Clamp, InputPolicy::Nudge);
        b.move_by(-1000.0, 5.0);
        assert_eq!(b.position(), Vec2::new(-900.0, 105.0));
    }

    #[test]
    fn test_diagonal_nudge() {
        let mut b = block(BoundaryPolicy::Clamp, InputPolicy::Nudge);
        let before = b.position();
        b.interact_with_user(&keys(&[Direction::Up, Direction::Left]), 50.0, 0.1);
        assert_eq!(b.position() - before, Vec2::new(-5.0, -5.0));
        assert_eq!(b.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_nudge_noop_cases() {
        let mut b = block(BoundaryPolicy::Clamp, InputPolicy::Nudge);
        let before = b.position();
        b.interact_with_user(&HeldKeys::none(), 50.0, 0.1);
        b.interact_with_user(&keys(&[Direction::Right]), 0.0, 0.1);
        b.interact_with_user(&keys(&[Direction::Right]), 50.0, 0.0);
        assert_eq!(b.position(), before);
    }

    #[test]
    fn test_impulse_accumulates() {
        let mut b = block(BoundaryPolicy::Clamp, InputPolicy::Impulse);
        let right = keys(&[Direction::Right]);
        b.set_speed_by_click(&right, 100.0).set_speed_by_click(&right, 100.0);
        assert_eq!(b.init_velocity(), Vec2::new(100.0, 0.0));
        assert_eq!(b.velocity(), Vec2::new(200.0, 0.0));

        b.set_speed_by_click(&keys(&[Direction::Up]), 100.0);
        assert_eq!(b.init_velocity(), Vec2::new(100.0, -100.0));
        assert_eq!(b.velocity(), Vec2::new(200.0, -100.0));
    }

    #[test]
    fn test_directional_exclusivity() {
        let mut b = block(BoundaryPolicy::Wrap, InputPolicy::AxisExclusive);
        b.handle_input(&keys(&[Direction::Right]), 50.0, 0.016);
        assert_eq!(b.velocity(), Vec2::new(50.0, 0.0));
        b.handle_input(&keys(&[Direction::Up]), 50.0, 0.016);
        assert_eq!(b.velocity(), Vec2::new(0.0, -50.0));
    }

    #[test]
    fn test_steer_keeps_heading_without_input() {
        let mut b = block(BoundaryPolicy::Wrap, InputPolicy::AxisExclusive);
        b.steer_toward(Direction::Down, 30.0);
        b.steer(&HeldKeys::none(), 30.0);
        assert_eq!(b.velocity(), Vec2::new(0.0, 30.0));
    }

    #[test]
    fn test_steer_priority_when_several_held() {
        let mut b = block(BoundaryPolicy::Wrap, InputPolicy::AxisExclusive);
        b.steer(&keys(&[Direction::Up, Direction::Right]), 10.0);
        assert_eq!(b.velocity(), Vec2::new(10.0, 0.0));
        b.steer(&keys(&[Direction::Up, Direction::Down]), 10.0);
        assert_eq!(b.velocity(), Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_update_integrates_velocity() {
        let mut b = Block::new(
            BlockSpec::new(Vec2::splat(10.0))
                .at(Vec2::ZERO)
                .with_velocity(Vec2::new(100.0, -50.0)),
        );
        b.update(0.5);
        assert_eq!(b.position(), Vec2::new(50.0, -25.0));
        b.update(0.0);
        assert_eq!(b.position(), Vec2::new(50.0, -25.0));
    }

    #[test]
    fn test_damping_decays_to_floor_and_stays() {
        let mut b = Block::new(
            BlockSpec::new(Vec2::splat(21.0)).with_velocity(Vec2::new(100.0, 0.0)),
        );
        let mut prev = b.velocity().x.abs();
        let mut reached_zero = false;
        for _ in 0..2000 {
            b.damping(50.0, 1.0 / 60.0);
            let v = b.velocity().x.abs();
            assert!(v <= prev);
            if reached_zero {
                assert_eq!(v, 0.0);
            }
            reached_zero |= v == 0.0;
            prev = v;
        }
        assert!(reached_zero);
        assert_eq!(b.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_clamp_to_edges() {
        let g = grid();
        let mut b = block(BoundaryPolicy::Clamp, InputPolicy::Nudge);
        b.move_by(-1000.0, -1000.0).restrict(&g);
        assert_eq!(b.position(), g.origin());

        b.move_by(5000.0, 5000.0).restrict(&g);
        assert_eq!(b.position(), g.max_corner() - b.size());
    }

    #[test]
    fn test_wrap_one_past_right_edge() {
        let g = grid();
        let mut b = block(BoundaryPolicy::Wrap, InputPolicy::AxisExclusive);
        let right = g.max_corner().x - b.width();
        b.move_by(right + 1.0 - b.position().x, 0.0).restrict(&g);
        assert_eq!(b.position().x, g.origin().x);
    }

    #[test]
    fn test_wrap_past_left_edge() {
        let g = grid();
        let mut b = Block::new(
            BlockSpec::new(Vec2::splat(21.0))
                .at(Vec2::new(5.0, 50.0))
                .with_policies(BoundaryPolicy::Wrap, InputPolicy::AxisExclusive),
        );
        b.restrict(&g);
        assert_eq!(b.position(), Vec2::new(g.max_corner().x - 21.0, 50.0));
    }

    #[test]
    fn test_oversized_block_does_not_panic() {
        let area = Playground::new(Vec2::ZERO, 1, 1, 10.0);
        let mut b = Block::new(BlockSpec::new(Vec2::splat(30.0)).at(Vec2::new(5.0, 5.0)));
        assert!(!b.fits_within(&area));
        b.restrict(&area);
        assert_eq!(b.position(), Vec2::splat(-20.0));
    }

    #[test]
    fn test_closest_nodes_around_lattice_point() {
        let g = grid();
        // Center the block exactly on node [13][9]
        let node = g.node(13, 9).unwrap();
        let b = Block::new(BlockSpec::new(Vec2::splat(21.0)).at(node - Vec2::splat(10.5)));
        let nodes = b.closest_nodes(&g);
        // Node itself plus its four neighbours at distance 21 are excluded (< width)
        assert_eq!(nodes, vec![node]);
    }

    #[test]
    fn test_closest_nodes_cell_center() {
        let g = grid();
        // Block covering cell [13][9] exactly: center is 14.85 px from each corner
        let node = g.node(13, 9).unwrap();
        let b = Block::new(BlockSpec::new(Vec2::splat(21.0)).at(node));
        let nodes = b.closest_nodes(&g);
        assert_eq!(
            nodes,
            vec![
                node,
                g.node(13, 10).unwrap(),
                g.node(14, 9).unwrap(),
                g.node(14, 10).unwrap(),
            ]
        );
    }

    #[test]
    fn test_from_asset() {
        use crate::platform::SizeTable;
        let table: SizeTable = [("head.svg", Vec2::new(20.0, 10.0))].into_iter().collect();
        let b = Block::from_asset(&table, "head.svg", 2.0, BlockSpec::new(Vec2::ZERO)).unwrap();
        assert_eq!(b.size(), Vec2::new(40.0, 20.0));
        assert!(Block::from_asset(&table, "tail.svg", 1.0, BlockSpec::new(Vec2::ZERO)).is_err());
    }

    #[test]
    fn test_draw_emits_sprite_quad() {
        let b = block(BoundaryPolicy::Clamp, InputPolicy::Nudge);
        let mut batch = VertexBatch::new();
        b.draw(&mut batch);
        assert_eq!(batch.triangle_count(), 2);
        assert_eq!(batch.vertices()[0].position, [100.0, 100.0]);
    }

    proptest! {
        #[test]
        fn prop_clamp_restrict_idempotent(x in -5000f32..5000.0, y in -5000f32..5000.0) {
            let g = grid();
            let mut b = Block::new(BlockSpec::new(Vec2::splat(21.0)).at(Vec2::new(x, y)));
            b.restrict(&g);
            prop_assert!(g.contains_rect(b.position(), b.size()));
            let once = b.position();
            b.restrict(&g);
            prop_assert_eq!(b.position(), once);
        }

        #[test]
        fn prop_wrap_restrict_total(x in -5000f32..5000.0, y in -5000f32..5000.0) {
            let g = grid();
            let mut b = Block::new(
                BlockSpec::new(Vec2::splat(21.0))
                    .at(Vec2::new(x, y))
                    .with_policies(BoundaryPolicy::Wrap, InputPolicy::AxisExclusive),
            );
            b.restrict(&g);
            prop_assert!(g.contains_rect(b.position(), b.size()));
        }
    }

    #[test]
    fn test_block_snapshot_serializes() {
        let block = Block::new(BlockSpec::new(Vec2::splat(21.0)).at(Vec2::new(3.0, 4.0)));
        let snapshot = serde_json::to_value(&block).unwrap();
        assert_eq!(snapshot["position"], serde_json::json!([3.0, 4.0]));
        assert_eq!(snapshot["boundary_policy"], serde_json::json!("clamp"));
    }
}
