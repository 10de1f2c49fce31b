//! Platform abstraction layer
//!
//! Handles the pieces a host window/event loop would normally own:
//! - Input polling (arrow keys and WASD)
//! - Frame timing
//! - Asset sizes

pub mod assets;
pub mod clock;
pub mod input;

pub use assets::{AssetLoader, SizeTable, scaled_size};
pub use clock::FrameClock;
pub use input::{Direction, HeldKeys, Key};
