//! Sampled internal force and deflection diagrams of members

use serde::{Deserialize, Serialize};

use crate::elements::EndCondition;
use crate::error::{Entity, FrameError, FrameResult};
use crate::math::Vec6;
use crate::model::{FrameModel, PreparedMember};
use crate::results::{AnalysisResult, MemberEndForces};
use crate::section_check::SAMPLE_POINTS;

/// One station of a member diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramStation {
    /// Distance from the i-end (m)
    pub x: f64,
    /// Axial force, tension positive (kN)
    pub axial: f64,
    /// Shear force (kN)
    pub shear: f64,
    /// Bending moment (kN·m)
    pub moment: f64,
    /// Transverse deflection in member axes (mm)
    pub deflection: f64,
    /// Displacement in global X (mm)
    pub dx: f64,
    /// Displacement in global Y (mm)
    pub dy: f64,
}

/// Axial, shear, moment and deflection of one member at 21 stations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDiagram {
    /// 1-based member number
    pub member: usize,
    pub length: f64,
    /// Summed uniform load (kN/m)
    pub w: f64,
    pub forces: MemberEndForces,
    pub stations: Vec<DiagramStation>,
}

impl MemberDiagram {
    /// Sample a member of an analysed model
    pub fn sample(model: &FrameModel, analysis: &AnalysisResult, member: usize) -> FrameResult<Self> {
        let members = model.prepare()?;
        let prepared = member
            .checked_sub(1)
            .and_then(|k| members.get(k))
            .ok_or_else(|| FrameError::geometry(Entity::Member(member), "no such member"))?;
        let forces = *analysis.member_forces(member)?;
        let w = model.member_load_intensities()[member - 1];

        let dofs = prepared.dofs();
        let d_global = Vec6::from_fn(|a, _| analysis.displacements.get(dofs[a]).copied().unwrap_or(0.0));
        let d_local = prepared.t * d_global;
        let shape = DeflectedShape::new(prepared, &d_local, w);

        let l = prepared.length;
        let stations = (0..SAMPLE_POINTS)
            .map(|k| {
                let x = k as f64 * l / (SAMPLE_POINTS - 1) as f64;
                let (u, v) = shape.at(x);
                DiagramStation {
                    x,
                    axial: forces.axial(),
                    shear: forces.q_i - w * x,
                    moment: moment_at(&forces, w, l, x),
                    deflection: v * 1e3,
                    dx: (u * prepared.c - v * prepared.s) * 1e3,
                    dy: (u * prepared.s + v * prepared.c) * 1e3,
                }
            })
            .collect();

        Ok(Self {
            member,
            length: l,
            w,
            forces,
            stations,
        })
    }

    /// Largest absolute moment as `(x, M)`
    ///
    /// The end moments are compared with the parabolic peak at the point of
    /// zero shear when it lies inside the span.
    pub fn max_moment(&self) -> (f64, f64) {
        let l = self.length;
        let f = &self.forces;
        let mut best = if f.m_j.abs() > f.m_i.abs() {
            (l, moment_at(f, self.w, l, l))
        } else {
            (0.0, moment_at(f, self.w, l, 0.0))
        };

        if self.w != 0.0 && f.q_i.abs() > 1e-9 {
            let x0 = f.q_i / self.w;
            if x0 > 0.0 && x0 < l {
                let m0 = moment_at(f, self.w, l, x0);
                if m0.abs() > best.1.abs() {
                    best = (x0, m0);
                }
            }
        }
        best
    }

    /// Largest absolute deflection along the member (mm)
    pub fn max_deflection(&self) -> f64 {
        self.stations.iter().map(|s| s.deflection.abs()).fold(0.0, f64::max)
    }
}

/// Bending moment at `x` from end moments and the uniform load
pub(crate) fn moment_at(forces: &MemberEndForces, w: f64, l: f64, x: f64) -> f64 {
    -forces.m_i * (1.0 - x / l) + forces.m_j * (x / l) + w * l * x / 2.0 - w * x * x / 2.0
}

/// Cubic interpolation of the end displacements plus the load's particular
/// solution
struct DeflectedShape {
    l: f64,
    ui: f64,
    uj: f64,
    vi: f64,
    vj: f64,
    theta_i: f64,
    theta_j: f64,
    w_over_ei: f64,
    releases: (EndCondition, EndCondition),
}

impl DeflectedShape {
    fn new(member: &PreparedMember, d_local: &Vec6, w: f64) -> Self {
        let l = member.length;
        let (vi, vj) = (d_local[1], d_local[4]);
        let chord = (vj - vi) / l;
        let releases = (member.releases.i, member.releases.j);

        // A pinned end takes the rotation that leaves it moment-free, not the
        // node rotation
        let (theta_i, theta_j) = match releases {
            (EndCondition::Rigid, EndCondition::Rigid) => (d_local[2], d_local[5]),
            (EndCondition::Pinned, EndCondition::Rigid) => (1.5 * chord - d_local[5] / 2.0, d_local[5]),
            (EndCondition::Rigid, EndCondition::Pinned) => (d_local[2], 1.5 * chord - d_local[2] / 2.0),
            (EndCondition::Pinned, EndCondition::Pinned) => (chord, chord),
        };

        let ei = member.e * member.inertia;
        Self {
            l,
            ui: d_local[0],
            uj: d_local[3],
            vi,
            vj,
            theta_i,
            theta_j,
            w_over_ei: if ei > 0.0 { w / ei } else { 0.0 },
            releases,
        }
    }

    fn particular(&self, x: f64) -> f64 {
        let (l, q) = (self.l, self.w_over_ei);
        if q == 0.0 {
            return 0.0;
        }
        match self.releases {
            (EndCondition::Rigid, EndCondition::Rigid) => q * x * x * (l - x).powi(2) / 24.0,
            (EndCondition::Pinned, EndCondition::Pinned) => q * x * (l.powi(3) - 2.0 * l * x * x + x.powi(3)) / 24.0,
            (EndCondition::Rigid, EndCondition::Pinned) => {
                q * x * x * (3.0 * l * l - 5.0 * l * x + 2.0 * x * x) / 48.0
            }
            (EndCondition::Pinned, EndCondition::Rigid) => {
                q * x * (l.powi(3) - 3.0 * l * x * x + 2.0 * x.powi(3)) / 48.0
            }
        }
    }

    /// Local (u, v) displacement at `x` in m
    fn at(&self, x: f64) -> (f64, f64) {
        let l = self.l;
        let xi = x / l;
        let n1 = 1.0 - 3.0 * xi * xi + 2.0 * xi.powi(3);
        let n2 = x * (1.0 - xi).powi(2);
        let n3 = 3.0 * xi * xi - 2.0 * xi.powi(3);
        let n4 = (x * x / l) * (xi - 1.0);

        let u = (1.0 - xi) * self.ui + xi * self.uj;
        let v = n1 * self.vi + n2 * self.theta_i + n3 * self.vj + n4 * self.theta_j - self.particular(x);
        (u, v)
    }
}
