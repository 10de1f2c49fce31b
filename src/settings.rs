//! Sandbox settings
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file only overrides what it names.

use std::collections::HashMap;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SandboxError;
use crate::platform::SizeTable;
use crate::renderer::Palette;
use crate::sim::{BoundaryPolicy, InputPolicy};

/// Which movement rules the sandbox runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Keys nudge the block directly, hard clamp at the edges
    Nudge,
    /// Keys add velocity impulses, viscous damping, hard clamp
    #[value(alias = "impulse")]
    Glide,
    /// Snake-style single-axis steering with wraparound
    #[default]
    Snake,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Nudge => "nudge",
            Mode::Glide => "glide",
            Mode::Snake => "snake",
        }
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        match self {
            Mode::Nudge | Mode::Glide => BoundaryPolicy::Clamp,
            Mode::Snake => BoundaryPolicy::Wrap,
        }
    }

    pub fn input_policy(&self) -> InputPolicy {
        match self {
            Mode::Nudge => InputPolicy::Nudge,
            Mode::Glide => InputPolicy::Impulse,
            Mode::Snake => InputPolicy::AxisExclusive,
        }
    }

    /// Whether viscous damping runs each frame
    pub fn damped(&self) -> bool {
        matches!(self, Mode::Glide)
    }
}

/// Window and pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 610,
            fps: TARGET_FPS,
        }
    }
}

/// Boundary lattice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub origin: [f32; 2],
    pub rows: u32,
    pub columns: u32,
    pub cell_size: f32,
    /// Materialize the node lattice; without it the boundary is a plain playground
    pub lattice: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            origin: [10.0, 10.0],
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            cell_size: DEFAULT_CELL_SIZE,
            lattice: true,
        }
    }
}

/// The controlled block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockSettings {
    /// Sprite asset; its size comes from `Settings::assets`
    pub asset: String,
    pub scaling_factor: f32,
    /// Lattice node `[row, column]` the block's top-left starts on
    pub start_node: [usize; 2],
    pub velocity: [f32; 2],
    pub mass: f32,
}

impl Default for BlockSettings {
    fn default() -> Self {
        Self {
            asset: "./snake-parts/head.svg".to_string(),
            scaling_factor: 1.0,
            start_node: [13, 9],
            velocity: [0.0, 0.0],
            mass: DEFAULT_MASS,
        }
    }
}

/// Scene colors as `#RRGGBB` strings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub background: String,
    pub grid_fill: String,
    pub grid_line: String,
    pub node_marker: String,
}

impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            background: "#0D1B2A".to_string(),
            grid_fill: "#778DA9".to_string(),
            grid_line: "#1B263B".to_string(),
            node_marker: "#FF0000".to_string(),
        }
    }
}

/// Sandbox settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: Mode,
    pub window: WindowSettings,
    pub grid: GridSettings,
    pub block: BlockSettings,
    pub palette: PaletteSettings,
    /// Known sprite sizes in pixels, keyed by asset path
    pub assets: HashMap<String, [f32; 2]>,
    /// Input speed (pixels/s)
    pub speed: f32,
    /// Viscosity used by damped modes
    pub viscosity: f32,
    /// Largest dt a single frame integrates
    pub max_frame_dt: f32,
    /// Draw the lattice nodes near each block
    pub show_nodes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let block = BlockSettings::default();
        let assets = HashMap::from([(block.asset.clone(), [DEFAULT_CELL_SIZE; 2])]);
        Self {
            mode: Mode::default(),
            window: WindowSettings::default(),
            grid: GridSettings::default(),
            block,
            palette: PaletteSettings::default(),
            assets,
            speed: DEFAULT_SPEED,
            viscosity: 5.0,
            max_frame_dt: MAX_FRAME_DT,
            show_nodes: true,
        }
    }
}

impl Settings {
    /// Default settings running the given mode
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Load settings from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, SandboxError> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };

        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, SandboxError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SandboxError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject values the sim cannot run with
    pub fn validate(&self) -> Result<(), SandboxError> {
        if self.grid.rows == 0 || self.grid.columns == 0 {
            return Err(SandboxError::invalid("grid", "rows and columns must be non-zero"));
        }
        if !positive(self.grid.cell_size) {
            return Err(SandboxError::invalid("grid.cell_size", "must be positive"));
        }
        if self.window.fps == 0 {
            return Err(SandboxError::invalid("window.fps", "must be non-zero"));
        }
        if !positive(self.block.mass) {
            return Err(SandboxError::invalid("block.mass", "must be positive"));
        }
        if !positive(self.block.scaling_factor) {
            return Err(SandboxError::invalid("block.scaling_factor", "must be positive"));
        }
        if !positive(self.max_frame_dt) {
            return Err(SandboxError::invalid("max_frame_dt", "must be positive"));
        }
        let [row, column] = self.block.start_node;
        if row > self.grid.rows as usize || column > self.grid.columns as usize {
            return Err(SandboxError::invalid(
                "block.start_node",
                format!(
                    "[{row}, {column}] is outside a {}x{} lattice",
                    self.grid.rows + 1,
                    self.grid.columns + 1
                ),
            ));
        }
        self.palette()?;
        Ok(())
    }

    /// Parsed scene colors
    pub fn palette(&self) -> Result<Palette, SandboxError> {
        Palette::from_settings(&self.palette)
    }

    /// Asset sizes as a loader
    pub fn size_table(&self) -> SizeTable {
        self.assets
            .iter()
            .map(|(path, [w, h])| (path.clone(), glam::Vec2::new(*w, *h)))
            .collect()
    }
}

fn positive(v: f32) -> bool {
    v > 0.0
}
