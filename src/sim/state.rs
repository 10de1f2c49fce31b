//! Sandbox world state
//!
//! The world owns the boundary and every block. Blocks never own a boundary;
//! they borrow it each frame.

use glam::Vec2;

use super::block::{Block, BlockSpec};
use super::boundary::{Arena, Boundary};
use crate::error::SandboxError;
use crate::platform::AssetLoader;
use crate::settings::Settings;

/// Everything the frame tick mutates
#[derive(Debug, Clone)]
pub struct World {
    /// Grid or plain playground the blocks are restricted to
    pub arena: Arena,
    pub blocks: Vec<Block>,
    /// Input speed (pixels/s)
    pub speed: f32,
    /// Viscous damping; `None` disables it
    pub viscosity: Option<f32>,
    /// Largest dt one tick integrates
    pub max_frame_dt: f32,
    /// Draw lattice nodes near each block
    pub show_nodes: bool,
    /// Frames advanced so far
    pub frame: u64,
}

impl World {
    /// Empty world over a grid or playground
    pub fn new(arena: impl Into<Arena>, speed: f32) -> Self {
        Self {
            arena: arena.into(),
            blocks: Vec::new(),
            speed,
            viscosity: None,
            max_frame_dt: crate::consts::MAX_FRAME_DT,
            show_nodes: false,
            frame: 0,
        }
    }

    /// Build the configured boundary and spawn the configured block
    ///
    /// The block's top-left corner starts on `settings.block.start_node`.
    /// An unknown block asset is fatal.
    pub fn from_settings(settings: &Settings, loader: &impl AssetLoader) -> Result<Self, SandboxError> {
        let g = &settings.grid;
        let arena = Arena::new(Vec2::from(g.origin), g.rows, g.columns, g.cell_size, g.lattice);

        let [row, column] = settings.block.start_node;
        let start = arena.lattice_point(row, column).ok_or_else(|| {
            SandboxError::invalid(
                "block.start_node",
                format!("[{row}, {column}] is not a lattice point"),
            )
        })?;

        let mode = settings.mode;
        let spec = BlockSpec::new(Vec2::ZERO)
            .at(start)
            .with_velocity(Vec2::from(settings.block.velocity))
            .with_mass(settings.block.mass)
            .with_policies(mode.boundary_policy(), mode.input_policy());
        let block = Block::from_asset(
            loader,
            &settings.block.asset,
            settings.block.scaling_factor,
            spec,
        )?;

        let mut world = Self::new(arena, settings.speed);
        world.viscosity = mode.damped().then_some(settings.viscosity);
        world.max_frame_dt = settings.max_frame_dt;
        world.show_nodes = settings.show_nodes;
        world.spawn(block);

        log::info!(
            "World ready: {} mode, {}x{} {}, {} block(s)",
            mode.as_str(),
            world.arena.rows(),
            world.arena.columns(),
            world.arena.as_str(),
            world.blocks.len()
        );
        Ok(world)
    }

    /// Add a block, returning its index
    pub fn spawn(&mut self, block: Block) -> usize {
        if !block.fits_within(&self.arena) {
            // Restriction still runs; the block just pins to one edge
            log::warn!(
                "Block of size {}x{} does not fit the {}x{} boundary",
                block.width(),
                block.height(),
                self.arena.width(),
                self.arena.height()
            );
        }
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    /// Lattice nodes near each block, in block order
    ///
    /// A playground has no lattice, so every entry is empty.
    pub fn closest_nodes(&self) -> Vec<Vec<Vec2>> {
        match self.arena.lattice() {
            Some(grid) => self.blocks.iter().map(|b| b.closest_nodes(grid)).collect(),
            None => vec![Vec::new(); self.blocks.len()],
        }
    }
}
