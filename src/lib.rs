//! Block Sandbox - a tiny real-time 2D movement playground
//!
//! Core modules:
//! - `sim`: Block kinematics, damping, boundary policies, frame tick
//! - `platform`: Input mapping, frame clock, asset sizing
//! - `renderer`: Drawing contract and CPU tessellation
//! - `settings`: Data-driven sandbox configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SandboxError;
pub use settings::{Mode, Settings};

use glam::Vec2;

/// Sandbox constants
pub mod consts {
    /// Velocity magnitude below which damping snaps an axis to rest
    pub const VELOCITY_FLOOR: f32 = 15.0;
    /// Largest frame delta the tick will integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default block mass used by the damping computation
    pub const DEFAULT_MASS: f32 = 1000.0;
    /// Default input speed (pixels/s)
    pub const DEFAULT_SPEED: f32 = 50.0;

    /// Grid defaults
    pub const DEFAULT_CELL_SIZE: f32 = 21.0;
    pub const DEFAULT_ROWS: u32 = 28;
    pub const DEFAULT_COLUMNS: u32 = 60;

    /// Target frame rate of the native driver
    pub const TARGET_FPS: u32 = 60;
}

/// Center of an axis-aligned rectangle given its top-left corner and size
#[inline]
pub fn rect_center(top_left: Vec2, size: Vec2) -> Vec2 {
    top_left + size * 0.5
}

/// Parse a `#RRGGBB` hex color into linear-ish RGBA floats (alpha = 1)
pub fn hex_color(hex: &str) -> Option<[f32; 4]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?, 1.0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center() {
        let c = rect_center(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(c, Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#FFFFFF"), Some([1.0, 1.0, 1.0, 1.0]));
        assert_eq!(hex_color("000000"), Some([0.0, 0.0, 0.0, 1.0]));
        assert!(hex_color("#12345").is_none());
        assert!(hex_color("#GG0000").is_none());
    }
}
