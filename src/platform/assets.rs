//! Asset sizing
//!
//! Blocks only need the pixel size of their sprite. Decoding images belongs to
//! whatever presentation layer hosts the sandbox; the core just asks an
//! `AssetLoader` for `(width, height)`.

use std::collections::HashMap;

use glam::Vec2;

use crate::error::SandboxError;

/// Resolves an asset path to its native pixel size
pub trait AssetLoader {
    fn image_size(&self, path: &str) -> Result<Vec2, SandboxError>;
}

/// Lookup table of known sprite sizes
#[derive(Debug, Clone, Default)]
pub struct SizeTable {
    sizes: HashMap<String, Vec2>,
}

impl SizeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, size: Vec2) -> &mut Self {
        self.sizes.insert(path.into(), size);
        self
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Vec2)> for SizeTable {
    fn from_iter<I: IntoIterator<Item = (S, Vec2)>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl AssetLoader for SizeTable {
    fn image_size(&self, path: &str) -> Result<Vec2, SandboxError> {
        self.sizes
            .get(path)
            .copied()
            .ok_or_else(|| SandboxError::AssetNotFound(path.to_string()))
    }
}

/// Size after applying a uniform zoom factor
#[inline]
pub fn scaled_size(size: Vec2, scaling_factor: f32) -> Vec2 {
    size * scaling_factor
}
