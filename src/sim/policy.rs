//! Movement policies selected when a block is composed
//!
//! A block holds exactly one boundary policy and one input policy. They are
//! fixed for the block's lifetime; the driver never switches them mid-run.

use serde::{Deserialize, Serialize};

/// How a block reacts to leaving its boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Hard clamp to the nearest edge
    #[default]
    Clamp,
    /// Teleport to the opposite edge (torus)
    Wrap,
}

impl BoundaryPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Clamp => "clamp",
            BoundaryPolicy::Wrap => "wrap",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clamp" => Some(BoundaryPolicy::Clamp),
            "wrap" | "torus" => Some(BoundaryPolicy::Wrap),
            _ => None,
        }
    }
}

/// How held directional keys become motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Each held direction nudges the position by `speed·dt`; diagonals compose
    #[default]
    Nudge,
    /// Each held direction adds a `±speed` impulse into the velocity
    Impulse,
    /// The winning direction overwrites the velocity; the other axis is zeroed
    AxisExclusive,
}

impl InputPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputPolicy::Nudge => "nudge",
            InputPolicy::Impulse => "impulse",
            InputPolicy::AxisExclusive => "axis_exclusive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "nudge" | "additive" => Some(InputPolicy::Nudge),
            "impulse" => Some(InputPolicy::Impulse),
            "axis_exclusive" | "exclusive" => Some(InputPolicy::AxisExclusive),
            _ => None,
        }
    }

    /// Whether the policy drives motion through the velocity field
    pub fn uses_velocity(&self) -> bool {
        !matches!(self, InputPolicy::Nudge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names_roundtrip() {
        for p in [BoundaryPolicy::Clamp, BoundaryPolicy::Wrap] {
            assert_eq!(BoundaryPolicy::from_str(p.as_str()), Some(p));
        }
        for p in [
            InputPolicy::Nudge,
            InputPolicy::Impulse,
            InputPolicy::AxisExclusive,
        ] {
            assert_eq!(InputPolicy::from_str(p.as_str()), Some(p));
        }
    }

    #[test]
    fn test_policy_aliases() {
        assert_eq!(
            InputPolicy::from_str("Axis-Exclusive"),
            Some(InputPolicy::AxisExclusive)
        );
        assert_eq!(BoundaryPolicy::from_str("TORUS"), Some(BoundaryPolicy::Wrap));
        assert_eq!(BoundaryPolicy::from_str("bounce"), None);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&InputPolicy::AxisExclusive).unwrap();
        assert_eq!(json, "\"axis_exclusive\"");
        let p: BoundaryPolicy = serde_json::from_str("\"wrap\"").unwrap();
        assert_eq!(p, BoundaryPolicy::Wrap);
    }
}
