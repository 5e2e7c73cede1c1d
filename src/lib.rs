//! Frame Solver - planar frame and truss analysis with allowable-stress checks
//!
//! This library provides linear static analysis of 2D frames by the direct
//! stiffness method, supporting:
//! - Rigid and pinned member ends (beams, columns, truss bars)
//! - Fixed, pinned and roller supports
//! - Nodal forces/moments and uniform member loads
//! - Combined axial + bending section checks for steel, stainless,
//!   aluminum and timber members
//!
//! Input units are kN, m, N/mm² (E, strengths) and cm based section
//! properties; displacements are reported in mm.
//!
//! ## Example
//! ```rust
//! use frame_solver::prelude::*;
//!
//! let mut model = FrameModel::new();
//!
//! // 6 m simply supported beam
//! model.add_node(Node::new(0.0, 0.0).with_support(Support::Pinned));
//! model.add_node(Node::new(6.0, 0.0).with_support(Support::Roller));
//!
//! // H-200x100: I = 1840 cm⁴, A = 26.67 cm², Z = 184 cm³
//! let section = SectionProperties::new(1840.0, 26.67, 184.0);
//! model.add_member(Member::new(1, 2, 205_000.0, Strength::SteelF(235.0), section));
//!
//! // 5 kN/m downwards
//! model.add_member_load(MemberLoad::new(1, 5.0));
//!
//! let result = model.analyze().unwrap();
//! let reaction = result.node_reactions(1).unwrap();
//! assert!((reaction.fy - 15.0).abs() < 1e-6);
//!
//! let checks = check_members(&model, &result, LoadTerm::Long).unwrap();
//! assert_eq!(checks[0].status, CheckStatus::Ok);
//! ```

pub mod analysis;
pub mod api;
pub mod diagrams;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;
pub mod section_check;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{analyze, AnalysisOptions, LoadTerm};
    pub use crate::diagrams::MemberDiagram;
    pub use crate::elements::{
        EndCondition, Member, MemberReleases, Node, SectionProperties, SectionSelection, Strength, Support,
        WoodSpecies,
    };
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::{MemberLoad, NodalLoad};
    pub use crate::model::FrameModel;
    pub use crate::results::{AnalysisResult, MemberEndForces, NodeDisplacement, Reactions};
    pub use crate::section_check::{check_members, CheckStatus, SectionCheckResult};
}

pub use model::FrameModel;

#[cfg(feature = "wasm")]
pub mod wasm;
