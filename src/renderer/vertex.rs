//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::error::SandboxError;
use crate::hex_color;
use crate::settings::PaletteSettings;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an uploaded buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Sandbox palette (https://coolors.co/palette/0d1b2a-1b263b-415a77-778da9-e0e1dd)
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.051, 0.106, 0.165, 1.0]; // #0D1B2A
    pub const GRID_LINE: [f32; 4] = [0.106, 0.149, 0.231, 1.0]; // #1B263B
    pub const GRID_FILL: [f32; 4] = [0.467, 0.553, 0.663, 1.0]; // #778DA9
    pub const BLOCK: [f32; 4] = [0.878, 0.882, 0.867, 1.0]; // #E0E1DD
    pub const NODE_MARKER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}

/// Scene colors, resolved once from `PaletteSettings`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: [f32; 4],
    pub grid_fill: [f32; 4],
    pub grid_line: [f32; 4],
    pub node_marker: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: colors::BACKGROUND,
            grid_fill: colors::GRID_FILL,
            grid_line: colors::GRID_LINE,
            node_marker: colors::NODE_MARKER,
        }
    }
}

impl Palette {
    /// Parse every `#RRGGBB` entry; the first bad one is reported by field
    pub fn from_settings(settings: &PaletteSettings) -> Result<Self, SandboxError> {
        let parse = |field: &'static str, hex: &str| {
            hex_color(hex).ok_or_else(|| {
                SandboxError::invalid(field, format!("`{hex}` is not a #RRGGBB color"))
            })
        };
        Ok(Self {
            background: parse("palette.background", &settings.background)?,
            grid_fill: parse("palette.grid_fill", &settings.grid_fill)?,
            grid_line: parse("palette.grid_line", &settings.grid_line)?,
            node_marker: parse("palette.node_marker", &settings.node_marker)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        let verts = [Vertex::new(1.0, 2.0, colors::BLOCK); 2];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 48);
    }

    fn close(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 0.001)
    }

    #[test]
    fn test_default_palette_settings_match_constants() {
        let palette = Palette::from_settings(&PaletteSettings::default()).unwrap();
        let fallback = Palette::default();
        assert!(close(palette.background, fallback.background));
        assert!(close(palette.grid_fill, fallback.grid_fill));
        assert!(close(palette.grid_line, fallback.grid_line));
        assert!(close(palette.node_marker, fallback.node_marker));
    }

    #[test]
    fn test_palette_rejects_bad_hex() {
        let settings = PaletteSettings {
            grid_line: "#1B26".to_string(),
            ..PaletteSettings::default()
        };
        let err = Palette::from_settings(&settings).unwrap_err();
        assert!(matches!(
            err,
            SandboxError::InvalidSetting {
                field: "palette.grid_line",
                ..
            }
        ));
    }
}
