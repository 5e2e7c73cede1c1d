//! Frame model - main structural model container

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{self, AnalysisOptions};
use crate::elements::{Member, MemberReleases, Node, SectionSelection, Strength};
use crate::error::{Entity, FrameError, FrameResult};
use crate::loads::{MemberLoad, NodalLoad};
use crate::math::{self, Mat6};
use crate::results::AnalysisResult;

/// The planar frame model
///
/// Records are stored in input order and addressed by 1-based position, the
/// same numbering used in error messages and results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameModel {
    /// Nodes in the model
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Members in the model
    #[serde(default)]
    pub members: Vec<Member>,
    /// Loads applied directly at nodes
    #[serde(default)]
    pub nodal_loads: Vec<NodalLoad>,
    /// Uniform loads along members
    #[serde(default)]
    pub member_loads: Vec<MemberLoad>,
}

/// A validated member in solver units (kN, m)
#[derive(Debug, Clone)]
pub struct PreparedMember {
    /// 1-based member number
    pub index: usize,
    /// 0-based i-node index
    pub i: usize,
    /// 0-based j-node index
    pub j: usize,
    /// Modulus of elasticity in kN/m²
    pub e: f64,
    /// Moment of inertia in m⁴
    pub inertia: f64,
    /// Area in m²
    pub a: f64,
    /// Section modulus in m³
    pub z: f64,
    /// Radius of gyration about the strong axis in m
    pub ix: f64,
    /// Radius of gyration about the weak axis in m
    pub iy: f64,
    /// Allowable-stress basis
    pub strength: Strength,
    pub releases: MemberReleases,
    /// Length in m
    pub length: f64,
    /// Direction cosine with global X
    pub c: f64,
    /// Direction cosine with global Y
    pub s: f64,
    /// Local stiffness matrix
    pub k_local: Mat6,
    /// Global-to-local transformation matrix
    pub t: Mat6,
}

impl PreparedMember {
    /// Global DOF indices of the member ends
    pub fn dofs(&self) -> [usize; 6] {
        let (i, j) = (self.i * 3, self.j * 3);
        [i, i + 1, i + 2, j, j + 1, j + 2]
    }

    /// Member stiffness in global coordinates
    pub fn global_stiffness(&self) -> Mat6 {
        math::global_stiffness(&self.k_local, &self.t)
    }

    /// Smaller radius of gyration in m
    pub fn min_radius(&self) -> f64 {
        self.ix.min(self.iy)
    }
}

impl FrameModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its 1-based position
    pub fn add_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len()
    }

    /// Add a member and return its 1-based position
    pub fn add_member(&mut self, member: Member) -> usize {
        self.members.push(member);
        self.members.len()
    }

    /// Add a nodal load and return its 1-based position
    pub fn add_nodal_load(&mut self, load: NodalLoad) -> usize {
        self.nodal_loads.push(load);
        self.nodal_loads.len()
    }

    /// Add a member load and return its 1-based position
    pub fn add_member_load(&mut self, load: MemberLoad) -> usize {
        self.member_loads.push(load);
        self.member_loads.len()
    }

    /// Get a node by 1-based position
    pub fn node(&self, index: usize) -> FrameResult<&Node> {
        index
            .checked_sub(1)
            .and_then(|k| self.nodes.get(k))
            .ok_or_else(|| FrameError::geometry(Entity::Node(index), "no such node"))
    }

    /// Get a member by 1-based position
    pub fn member(&self, index: usize) -> FrameResult<&Member> {
        index
            .checked_sub(1)
            .and_then(|k| self.members.get(k))
            .ok_or_else(|| FrameError::geometry(Entity::Member(index), "no such member"))
    }

    /// Total number of degrees of freedom (3 per node)
    pub fn dof_count(&self) -> usize {
        self.nodes.len() * 3
    }

    /// Apply properties chosen by a section picker to one member
    pub fn apply_section_selection(&mut self, selection: SectionSelection) -> FrameResult<()> {
        let target = selection.target_member;
        let member = target
            .checked_sub(1)
            .and_then(|k| self.members.get_mut(k))
            .ok_or_else(|| FrameError::geometry(Entity::Member(target), "section selection targets a missing member"))?;

        if let Some(e) = selection.e {
            member.e = e;
        }
        if let Some(strength) = selection.strength {
            member.strength = strength;
        }
        member.section = selection.section;

        debug!("Applied section selection to member {}", target);
        Ok(())
    }

    /// Summed uniform load intensity of every member (kN/m), 0-based
    pub fn member_load_intensities(&self) -> Vec<f64> {
        let mut w = vec![0.0; self.members.len()];
        for load in &self.member_loads {
            if let Some(slot) = load.member.checked_sub(1).and_then(|k| w.get_mut(k)) {
                *slot += load.w;
            }
        }
        w
    }

    /// Validate the model and convert members to solver units
    pub fn prepare(&self) -> FrameResult<Vec<PreparedMember>> {
        for (k, node) in self.nodes.iter().enumerate() {
            if !node.is_finite() {
                return Err(FrameError::geometry(Entity::Node(k + 1), "non-finite coordinate"));
            }
        }

        let prepared = self
            .members
            .iter()
            .enumerate()
            .map(|(k, member)| self.prepare_member(k + 1, member))
            .collect::<FrameResult<Vec<_>>>()?;

        for (k, load) in self.nodal_loads.iter().enumerate() {
            let entity = Entity::NodalLoad(k + 1);
            if load.node == 0 || load.node > self.nodes.len() {
                return Err(FrameError::geometry(entity, format!("references missing node {}", load.node)));
            }
            for (name, value) in [("px", load.px), ("py", load.py), ("mz", load.mz)] {
                if !value.is_finite() {
                    return Err(FrameError::property(entity, name, value));
                }
            }
        }

        for (k, load) in self.member_loads.iter().enumerate() {
            let entity = Entity::MemberLoad(k + 1);
            if load.member == 0 || load.member > self.members.len() {
                return Err(FrameError::geometry(entity, format!("references missing member {}", load.member)));
            }
            if !load.w.is_finite() {
                return Err(FrameError::property(entity, "w", load.w));
            }
        }

        Ok(prepared)
    }

    fn prepare_member(&self, index: usize, member: &Member) -> FrameResult<PreparedMember> {
        let entity = Entity::Member(index);
        let node_count = self.nodes.len();

        for end in [member.i, member.j] {
            if end == 0 || end > node_count {
                return Err(FrameError::geometry(entity, format!("references missing node {}", end)));
            }
        }

        let section = &member.section;
        let required = [("E", member.e), ("I", section.i), ("A", section.a), ("Z", section.z)];
        for (name, value) in required {
            if !value.is_finite() {
                return Err(FrameError::property(entity, name, value));
            }
        }
        if member.e <= 0.0 {
            return Err(FrameError::property(entity, "E", member.e));
        }
        if section.a <= 0.0 {
            return Err(FrameError::property(entity, "A", section.a));
        }
        for (name, value) in [("I", section.i), ("Z", section.z)] {
            if value < 0.0 {
                return Err(FrameError::property(entity, name, value));
            }
        }
        let optional = [("Zx", section.zx), ("Zy", section.zy), ("ix", section.ix), ("iy", section.iy)];
        for (name, value) in optional {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(FrameError::property(entity, name, v));
                }
            }
        }

        if let Some(value) = member.strength.value() {
            if !value.is_finite() || value <= 0.0 {
                return Err(FrameError::property(entity, "strength", value));
            }
        }

        let ni = &self.nodes[member.i - 1];
        let nj = &self.nodes[member.j - 1];
        let length = ni.distance_to(nj);
        if length <= 0.0 {
            return Err(FrameError::geometry(entity, "zero length"));
        }
        let c = (nj.x - ni.x) / length;
        let s = (nj.y - ni.y) / length;

        let e = member.e * 1e3;
        let inertia = section.i * 1e-8;
        let a = section.a * 1e-4;

        // A missing (or zero) radius of gyration falls back to sqrt(I/A), iy to ix
        let ix = section
            .ix
            .filter(|v| *v > 0.0)
            .map(|v| v * 1e-2)
            .unwrap_or_else(|| (inertia / a).sqrt());
        let iy = section.iy.filter(|v| *v > 0.0).map(|v| v * 1e-2).unwrap_or(ix);

        Ok(PreparedMember {
            index,
            i: member.i - 1,
            j: member.j - 1,
            e,
            inertia,
            a,
            z: section.z * 1e-6,
            ix,
            iy,
            strength: member.strength,
            releases: member.releases,
            length,
            c,
            s,
            k_local: math::local_stiffness(e, a, inertia, length, member.releases),
            t: math::transformation_matrix(c, s),
        })
    }

    /// Run linear static analysis with default options
    pub fn analyze(&self) -> FrameResult<AnalysisResult> {
        analysis::analyze(self, &AnalysisOptions::default())
    }

    /// Run analysis with custom options
    pub fn analyze_with(&self, options: &AnalysisOptions) -> FrameResult<AnalysisResult> {
        analysis::analyze(self, options)
    }
}
