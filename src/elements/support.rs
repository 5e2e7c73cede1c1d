//! Support conditions

use serde::{Deserialize, Serialize};

/// Support condition at a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Support {
    /// No restraint
    #[default]
    Free,
    /// Both translations restrained, rotation free
    Pinned,
    /// Both translations and the rotation restrained
    Fixed,
    /// Global Y translation restrained only
    Roller,
}

impl Support {
    /// Get the restrained DOF offsets within a node (0 = x, 1 = y, 2 = rotation)
    pub fn restrained_dofs(&self) -> &'static [usize] {
        match self {
            Support::Free => &[],
            Support::Pinned => &[0, 1],
            Support::Fixed => &[0, 1, 2],
            Support::Roller => &[1],
        }
    }

    /// Check if any DOF is restrained
    pub fn is_supported(&self) -> bool {
        !self.restrained_dofs().is_empty()
    }

    /// Count number of restrained DOFs
    pub fn num_restrained(&self) -> usize {
        self.restrained_dofs().len()
    }
}
