//! Nodal loads - forces and moments applied directly to nodes

use serde::{Deserialize, Serialize};

/// A load applied directly to a node, in global axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodalLoad {
    /// 1-based index of the loaded node
    pub node: usize,
    /// Force in X direction (kN)
    #[serde(default)]
    pub px: f64,
    /// Force in Y direction (kN)
    #[serde(default)]
    pub py: f64,
    /// Moment about Z axis (kN·m)
    #[serde(default)]
    pub mz: f64,
}

impl NodalLoad {
    /// Create a new nodal load with all components
    pub fn new(node: usize, px: f64, py: f64, mz: f64) -> Self {
        Self { node, px, py, mz }
    }

    /// Create a force-only nodal load
    pub fn force(node: usize, px: f64, py: f64) -> Self {
        Self::new(node, px, py, 0.0)
    }

    /// Create a moment-only nodal load
    pub fn moment(node: usize, mz: f64) -> Self {
        Self::new(node, 0.0, 0.0, mz)
    }

    /// Get the load as an array [PX, PY, MZ]
    pub fn as_array(&self) -> [f64; 3] {
        [self.px, self.py, self.mz]
    }
}
