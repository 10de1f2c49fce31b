//! Error type for sandbox startup
//!
//! Nothing in the per-frame path can fail; these errors only surface while
//! loading settings or resolving assets, and the driver treats them as fatal.

use thiserror::Error;

/// Error type for sandbox configuration and asset resolution.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// I/O error while reading a settings file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Settings file is not valid JSON for `Settings`.
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// No size is known for the requested asset.
    #[error("asset not found: {0}")]
    AssetNotFound(String),
    /// A setting is outside its allowed range.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting {
        field: &'static str,
        reason: String,
    },
}

impl SandboxError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}
