//! Node element - a point of the planar frame

use serde::{Deserialize, Serialize};

use super::Support;

/// A planar node in the frame model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate in m
    pub x: f64,
    /// Y coordinate in m
    pub y: f64,
    /// Support condition
    #[serde(default)]
    pub support: Support,
}

impl Node {
    /// Create a new free node at the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            support: Support::Free,
        }
    }

    /// Set the support condition
    pub fn with_support(mut self, support: Support) -> Self {
        self.support = support;
        self
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
