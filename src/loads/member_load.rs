//! Member loads - uniformly distributed loads along a member

use serde::{Deserialize, Serialize};

/// A uniform load transverse to a member's local axis
///
/// Positive `w` acts along the member's local -y direction, so a horizontal
/// member running left to right with positive `w` is loaded downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MemberLoad {
    /// 1-based index of the loaded member
    pub member: usize,
    /// Load intensity (kN/m)
    pub w: f64,
}

impl MemberLoad {
    /// Create a new uniform member load
    pub fn new(member: usize, w: f64) -> Self {
        Self { member, w }
    }

    /// Total load carried by a member of the given length
    pub fn total(&self, length: f64) -> f64 {
        self.w * length
    }
}
