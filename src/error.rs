//! Error types for the frame solver

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An input record, identified by its 1-based position in the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Node(usize),
    Member(usize),
    NodalLoad(usize),
    MemberLoad(usize),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Node(n) => write!(f, "node {}", n),
            Entity::Member(m) => write!(f, "member {}", m),
            Entity::NodalLoad(l) => write!(f, "nodal load {}", l),
            Entity::MemberLoad(l) => write!(f, "member load {}", l),
        }
    }
}

/// Main error type for frame analysis
#[derive(Error, Debug)]
pub enum FrameError {
    /// Zero-length member, bad coordinates or an out-of-range index reference
    #[error("Invalid geometry in {entity}: {reason}")]
    InvalidGeometry { entity: Entity, reason: String },

    /// Non-finite or out-of-range numeric property
    #[error("Invalid property '{property}' in {entity}: {value}")]
    InvalidProperty {
        entity: Entity,
        property: &'static str,
        value: f64,
    },

    /// The reduced stiffness cannot be solved; `dof` is "x", "y" or "rz"
    #[error("Unstable structure or improper constraints at {entity} ({dof}): the reduced stiffness system is singular")]
    SingularSystem { entity: Entity, dof: &'static str },

    #[error("Member {member}: material '{material}' is not supported by the section check")]
    UnsupportedMaterial { member: usize, material: String },

    #[error("Member {member}: incomplete section data ({missing})")]
    IncompleteSectionData { member: usize, missing: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FrameError {
    pub(crate) fn geometry(entity: Entity, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            entity,
            reason: reason.into(),
        }
    }

    pub(crate) fn property(entity: Entity, property: &'static str, value: f64) -> Self {
        Self::InvalidProperty {
            entity,
            property,
            value,
        }
    }

    /// True for errors that abort a whole analysis run
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            FrameError::UnsupportedMaterial { .. } | FrameError::IncompleteSectionData { .. }
        )
    }
}

/// Result type for frame solver operations
pub type FrameResult<T> = Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_display_is_one_based_label() {
        let err = FrameError::geometry(Entity::Member(3), "zero length");
        assert_eq!(err.to_string(), "Invalid geometry in member 3: zero length");
    }

    #[test]
    fn test_section_data_errors_are_not_fatal() {
        let err = FrameError::IncompleteSectionData {
            member: 1,
            missing: "Z",
        };
        assert!(!err.is_fatal());
        let singular = FrameError::SingularSystem {
            entity: Entity::Node(4),
            dof: "rz",
        };
        assert!(singular.is_fatal());
        assert!(singular.to_string().contains("node 4 (rz)"));
    }
}
