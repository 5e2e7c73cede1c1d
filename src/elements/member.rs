//! Member element - planar frame member (beam/column/truss bar)

use serde::{Deserialize, Serialize};

use super::{SectionProperties, Strength};

/// Moment connection at one end of a member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndCondition {
    /// Moment is transferred to the node
    #[default]
    Rigid,
    /// Moment released (hinge)
    Pinned,
}

/// End releases for a member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberReleases {
    /// i-node condition
    #[serde(default)]
    pub i: EndCondition,
    /// j-node condition
    #[serde(default)]
    pub j: EndCondition,
}

impl MemberReleases {
    /// Create releases with no end releases
    pub fn none() -> Self {
        Self::default()
    }

    /// Create releases for a pin at the i-node
    pub fn pin_i() -> Self {
        Self {
            i: EndCondition::Pinned,
            j: EndCondition::Rigid,
        }
    }

    /// Create releases for a pin at the j-node
    pub fn pin_j() -> Self {
        Self {
            i: EndCondition::Rigid,
            j: EndCondition::Pinned,
        }
    }

    /// Create releases for pins at both ends (truss member)
    pub fn pin_both() -> Self {
        Self {
            i: EndCondition::Pinned,
            j: EndCondition::Pinned,
        }
    }

    /// True when both ends are pinned
    pub fn is_truss(&self) -> bool {
        self.i == EndCondition::Pinned && self.j == EndCondition::Pinned
    }
}

/// A planar frame member
///
/// Properties are stored in input units: `e` in N/mm², section values in cm
/// based units (see [`SectionProperties`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// 1-based index of the i-node (start)
    pub i: usize,
    /// 1-based index of the j-node (end)
    pub j: usize,
    /// Modulus of elasticity in N/mm²
    pub e: f64,
    /// Allowable-stress basis
    pub strength: Strength,
    /// Section properties
    pub section: SectionProperties,
    /// End releases
    #[serde(default)]
    pub releases: MemberReleases,
}

impl Member {
    /// Create a new rigidly connected member
    pub fn new(i: usize, j: usize, e: f64, strength: Strength, section: SectionProperties) -> Self {
        Self {
            i,
            j,
            e,
            strength,
            section,
            releases: MemberReleases::none(),
        }
    }

    /// Set member end releases
    pub fn with_releases(mut self, releases: MemberReleases) -> Self {
        self.releases = releases;
        self
    }
}
