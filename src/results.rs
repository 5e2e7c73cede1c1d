//! Result types for frame analysis

use serde::{Deserialize, Serialize};

use crate::error::{Entity, FrameError, FrameResult};
use crate::math::Vec6;

/// Displacement results at a node, in reporting units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X direction (mm)
    pub dx: f64,
    /// Displacement in Y direction (mm)
    pub dy: f64,
    /// Rotation about Z axis (rad)
    pub rz: f64,
}

impl NodeDisplacement {
    /// Create from solver values [DX (m), DY (m), RZ (rad)]
    pub fn from_solver(arr: [f64; 3]) -> Self {
        Self {
            dx: arr[0] * 1e3,
            dy: arr[1] * 1e3,
            rz: arr[2],
        }
    }

    /// Get translation magnitude (mm)
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }
}

/// Reaction forces at a supported node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in X direction (kN)
    pub fx: f64,
    /// Reaction force in Y direction (kN)
    pub fy: f64,
    /// Reaction moment about Z axis (kN·m)
    pub mz: f64,
}

impl Reactions {
    /// Create from array [FX, FY, MZ]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self {
            fx: arr[0],
            fy: arr[1],
            mz: arr[2],
        }
    }

    /// Get total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        (self.fx.powi(2) + self.fy.powi(2)).sqrt()
    }
}

/// Local end forces of a member (kN, kN·m)
///
/// These are the forces the nodes exert on the member, in member axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberEndForces {
    pub n_i: f64,
    pub q_i: f64,
    pub m_i: f64,
    pub n_j: f64,
    pub q_j: f64,
    pub m_j: f64,
}

impl MemberEndForces {
    /// Create from a local force vector [N_i, Q_i, M_i, N_j, Q_j, M_j]
    pub fn from_vector(f: &Vec6) -> Self {
        Self {
            n_i: f[0],
            q_i: f[1],
            m_i: f[2],
            n_j: f[3],
            q_j: f[4],
            m_j: f[5],
        }
    }

    pub fn as_vector(&self) -> Vec6 {
        Vec6::new(self.n_i, self.q_i, self.m_i, self.n_j, self.q_j, self.m_j)
    }

    /// Axial force, positive in tension
    pub fn axial(&self) -> f64 {
        -self.n_i
    }

    /// Larger absolute end moment
    pub fn max_end_moment(&self) -> f64 {
        self.m_i.abs().max(self.m_j.abs())
    }
}

/// Global equilibrium residuals of a solved model
///
/// Sums of support reactions and applied loads, including the equivalent
/// nodal loads of member loads. Moments are taken about the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticsCheck {
    pub sum_fx: f64,
    pub sum_fy: f64,
    pub sum_mz: f64,
    /// Absolute tolerance used for `balanced`
    pub tolerance: f64,
    pub balanced: bool,
}

/// Summary of analysis results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Maximum translation (mm)
    pub max_displacement: f64,
    /// Node with maximum translation (1-based, 0 if none moved)
    pub max_disp_node: usize,
    /// Maximum reaction force (kN)
    pub max_reaction: f64,
    /// Node with maximum reaction
    pub max_reaction_node: usize,
    /// Maximum member axial force (kN)
    pub max_axial: f64,
    /// Member with maximum axial
    pub max_axial_member: usize,
    /// Maximum member end moment (kN·m)
    pub max_moment: f64,
    /// Member with maximum end moment
    pub max_moment_member: usize,
    /// Total number of nodes
    pub num_nodes: usize,
    /// Total number of members
    pub num_members: usize,
    /// Total DOFs
    pub total_dofs: usize,
    /// Free DOFs (unknown)
    pub free_dofs: usize,
}

/// Output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Global displacements (m, rad), 3 per node
    pub displacements: Vec<f64>,
    /// Global residual forces `K·D - F` (kN, kN·m), 3 per node
    pub reactions: Vec<f64>,
    /// Local end forces, one per member
    pub member_forces: Vec<MemberEndForces>,
    /// Restrained global DOF indices, ascending
    pub restrained: Vec<usize>,
    /// Equilibrium check, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statics: Option<StaticsCheck>,
}

impl AnalysisResult {
    pub fn node_count(&self) -> usize {
        self.displacements.len() / 3
    }

    fn node_offset(&self, node: usize) -> FrameResult<usize> {
        if node == 0 || node > self.node_count() {
            return Err(FrameError::geometry(Entity::Node(node), "no such node"));
        }
        Ok((node - 1) * 3)
    }

    /// Get node displacement (mm, mm, rad) by 1-based node number
    pub fn node_displacement(&self, node: usize) -> FrameResult<NodeDisplacement> {
        let k = self.node_offset(node)?;
        let d = &self.displacements;
        Ok(NodeDisplacement::from_solver([d[k], d[k + 1], d[k + 2]]))
    }

    /// Get node reactions; DOFs that are not restrained report zero
    pub fn node_reactions(&self, node: usize) -> FrameResult<Reactions> {
        let k = self.node_offset(node)?;
        let mut arr = [0.0; 3];
        for (offset, value) in arr.iter_mut().enumerate() {
            if self.is_restrained(k + offset) {
                *value = self.reactions[k + offset];
            }
        }
        Ok(Reactions::from_array(arr))
    }

    /// Get member end forces by 1-based member number
    pub fn member_forces(&self, member: usize) -> FrameResult<&MemberEndForces> {
        member
            .checked_sub(1)
            .and_then(|k| self.member_forces.get(k))
            .ok_or_else(|| FrameError::geometry(Entity::Member(member), "no such member"))
    }

    /// Check whether a global DOF is restrained
    pub fn is_restrained(&self, dof: usize) -> bool {
        self.restrained.binary_search(&dof).is_ok()
    }

    /// Get analysis summary
    pub fn summary(&self) -> AnalysisSummary {
        let num_nodes = self.node_count();
        let total_dofs = self.displacements.len();
        let mut summary = AnalysisSummary {
            num_nodes,
            num_members: self.member_forces.len(),
            total_dofs,
            free_dofs: total_dofs - self.restrained.len(),
            ..Default::default()
        };

        for node in 1..=num_nodes {
            if let Ok(disp) = self.node_displacement(node) {
                let mag = disp.translation_magnitude();
                if mag > summary.max_displacement {
                    summary.max_displacement = mag;
                    summary.max_disp_node = node;
                }
            }
            if let Ok(rxn) = self.node_reactions(node) {
                let mag = rxn.force_magnitude();
                if mag > summary.max_reaction {
                    summary.max_reaction = mag;
                    summary.max_reaction_node = node;
                }
            }
        }

        for (k, forces) in self.member_forces.iter().enumerate() {
            let axial = forces.n_i.abs();
            if axial > summary.max_axial {
                summary.max_axial = axial;
                summary.max_axial_member = k + 1;
            }
            let moment = forces.max_end_moment();
            if moment > summary.max_moment {
                summary.max_moment = moment;
                summary.max_moment_member = k + 1;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            displacements: vec![0.0, 0.0, 0.0, 0.002, -0.004, 0.01],
            reactions: vec![-3.0, 4.0, 12.0, 1e-12, 0.0, 0.0],
            member_forces: vec![MemberEndForces {
                n_i: 3.0,
                q_i: 4.0,
                m_i: 12.0,
                n_j: -3.0,
                q_j: -4.0,
                m_j: 0.0,
            }],
            restrained: vec![0, 1, 2],
            statics: None,
        }
    }

    #[test]
    fn test_displacements_are_reported_in_mm() {
        let disp = sample().node_displacement(2).unwrap();
        assert!((disp.dx - 2.0).abs() < 1e-12);
        assert!((disp.dy + 4.0).abs() < 1e-12);
        assert_eq!(disp.rz, 0.01);
    }

    #[test]
    fn test_reactions_are_masked_to_restrained_dofs() {
        let result = sample();
        assert_eq!(result.node_reactions(1).unwrap(), Reactions::from_array([-3.0, 4.0, 12.0]));
        assert_eq!(result.node_reactions(2).unwrap(), Reactions::from_array([0.0, 0.0, 0.0]));
        assert!(result.node_reactions(3).is_err());
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.num_nodes, 2);
        assert_eq!(summary.free_dofs, 3);
        assert_eq!(summary.max_disp_node, 2);
        assert_eq!(summary.max_reaction_node, 1);
        assert_eq!(summary.max_moment_member, 1);
        assert!((summary.max_reaction - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_axial_sign() {
        let forces = sample().member_forces[0];
        assert_eq!(forces.axial(), -3.0);
        assert_eq!(MemberEndForces::from_vector(&forces.as_vector()), forces);
    }
}
