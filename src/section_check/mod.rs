//! Allowable-stress section checks
//!
//! Each member is sampled at 21 equally spaced stations. At every station the
//! combined axial and bending demand/capacity ratio is evaluated against the
//! allowable stresses of the member's material:
//!
//! * tension (σa ≥ 0): `σa/ft + σb/fb`
//! * compression: `|σa|/fc + σb/fb`
//!
//! Members whose material or section data can't be checked produce an
//! `Error` row instead of aborting the whole run.

pub mod allowable;
pub mod wood;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::LoadTerm;
use crate::error::{Entity, FrameError, FrameResult};
use crate::model::{FrameModel, PreparedMember};
use crate::results::{AnalysisResult, MemberEndForces};

pub use allowable::allowable_stresses;

/// Number of sampling stations along a member (ends included)
pub const SAMPLE_POINTS: usize = 21;

/// Allowable stresses in N/mm²
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllowableStresses {
    /// Tension
    pub ft: f64,
    /// Compression (buckling reduced for metals)
    pub fc: f64,
    /// Bending
    pub fb: f64,
    /// Shear
    pub fs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NG")]
    Ng,
    Error,
}

/// What a result row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckType {
    /// Combined axial and bending stress check
    CombinedStress,
    /// Section modulus or area missing
    IncompleteSectionData,
    /// Material class has no allowable-stress rule
    UnsupportedMaterial,
}

/// Section check outcome of one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCheckResult {
    /// 1-based member number
    pub member: usize,
    /// Largest ratio along the member, `None` when not applicable
    pub max_ratio: Option<f64>,
    /// Axial force, tension positive (kN)
    pub axial: f64,
    /// Bending moment at the governing station (kN·m)
    pub moment: f64,
    pub check_type: CheckType,
    pub status: CheckStatus,
    /// Ratio at each of the 21 stations
    pub ratios: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable: Option<AllowableStresses>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Stresses and ratio at one station
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckPoint {
    /// Distance from the i-end (m)
    pub x: f64,
    /// Axial force (kN)
    pub axial: f64,
    /// Bending moment (kN·m)
    pub moment: f64,
    /// Axial stress (N/mm²)
    pub sigma_a: f64,
    /// Bending stress (N/mm²)
    pub sigma_b: f64,
    pub ratio: f64,
    pub status: CheckStatus,
}

impl SectionCheckResult {
    fn error(member: usize, error: &FrameError) -> Self {
        let check_type = match error {
            FrameError::UnsupportedMaterial { .. } => CheckType::UnsupportedMaterial,
            _ => CheckType::IncompleteSectionData,
        };
        Self {
            member,
            max_ratio: None,
            axial: 0.0,
            moment: 0.0,
            check_type,
            status: CheckStatus::Error,
            ratios: vec![0.0; SAMPLE_POINTS],
            allowable: None,
            message: Some(error.to_string()),
        }
    }

    /// True when the member passed the check
    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }

    /// Per-station breakdown of this result; empty for `Error` rows
    pub fn details(&self, model: &FrameModel, analysis: &AnalysisResult) -> FrameResult<Vec<CheckPoint>> {
        let Some(allowable) = self.allowable else {
            return Ok(Vec::new());
        };
        let members = model.prepare()?;
        let member = self
            .member
            .checked_sub(1)
            .and_then(|k| members.get(k))
            .ok_or_else(|| FrameError::geometry(Entity::Member(self.member), "no such member"))?;
        let forces = analysis.member_forces(self.member)?;
        let w = model.member_load_intensities()[member.index - 1];

        let profile = StressProfile::new(member, forces, w);
        Ok((0..SAMPLE_POINTS).map(|k| profile.point(k, &allowable)).collect())
    }
}

/// Combined demand/capacity ratio; non-finite stresses give +∞
pub fn combined_ratio(sigma_a: f64, sigma_b: f64, allowable: &AllowableStresses) -> f64 {
    if !sigma_a.is_finite() || !sigma_b.is_finite() {
        return f64::INFINITY;
    }
    let ratio = if sigma_a >= 0.0 {
        sigma_a / allowable.ft + sigma_b / allowable.fb
    } else {
        sigma_a.abs() / allowable.fc + sigma_b / allowable.fb
    };
    if ratio.is_nan() {
        f64::INFINITY
    } else {
        ratio
    }
}

fn status_of(ratio: f64) -> CheckStatus {
    if ratio > 1.0 {
        CheckStatus::Ng
    } else {
        CheckStatus::Ok
    }
}

/// Axial force and moment distribution of a member under its end forces and
/// uniform load
struct StressProfile {
    length: f64,
    axial: f64,
    m_i: f64,
    m_j: f64,
    w: f64,
    a_mm2: f64,
    z_mm3: f64,
}

impl StressProfile {
    fn new(member: &PreparedMember, forces: &MemberEndForces, w: f64) -> Self {
        Self {
            length: member.length,
            axial: forces.axial(),
            m_i: forces.m_i,
            m_j: forces.m_j,
            w,
            a_mm2: member.a * 1e6,
            z_mm3: member.z * 1e9,
        }
    }

    fn station(&self, k: usize) -> f64 {
        k as f64 * self.length / (SAMPLE_POINTS - 1) as f64
    }

    fn moment_at(&self, x: f64) -> f64 {
        let l = self.length;
        -self.m_i * (1.0 - x / l) + self.m_j * (x / l) + self.w * l * x / 2.0 - self.w * x * x / 2.0
    }

    fn point(&self, k: usize, allowable: &AllowableStresses) -> CheckPoint {
        let x = self.station(k);
        let moment = self.moment_at(x);
        let sigma_a = self.axial * 1e3 / self.a_mm2;
        let sigma_b = moment.abs() * 1e6 / self.z_mm3;
        let ratio = combined_ratio(sigma_a, sigma_b, allowable);
        CheckPoint {
            x,
            axial: self.axial,
            moment,
            sigma_a,
            sigma_b,
            ratio,
            status: status_of(ratio),
        }
    }
}

/// Check one member
///
/// # Arguments
/// * `member` - Prepared member (solver units)
/// * `forces` - Its local end forces from the analysis
/// * `w` - Summed uniform load on the member (kN/m)
/// * `load_term` - Long- or short-term allowable stresses
pub fn check_member(
    member: &PreparedMember,
    forces: &MemberEndForces,
    w: f64,
    load_term: LoadTerm,
) -> SectionCheckResult {
    if member.z <= 0.0 {
        let err = FrameError::IncompleteSectionData {
            member: member.index,
            missing: "Z",
        };
        warn!("{}", err);
        return SectionCheckResult::error(member.index, &err);
    }

    let allowable = match allowable_stresses(member, load_term) {
        Ok(a) => a,
        Err(err) => {
            warn!("{}", err);
            return SectionCheckResult::error(member.index, &err);
        }
    };

    let profile = StressProfile::new(member, forces, w);
    let mut ratios = Vec::with_capacity(SAMPLE_POINTS);
    let mut max_ratio = 0.0;
    let mut moment_at_max = 0.0;

    for k in 0..SAMPLE_POINTS {
        let point = profile.point(k, &allowable);
        if point.ratio > max_ratio {
            max_ratio = point.ratio;
            moment_at_max = point.moment;
        }
        ratios.push(point.ratio);
    }

    debug!("Member {} section check: max ratio {:.3}", member.index, max_ratio);

    SectionCheckResult {
        member: member.index,
        max_ratio: Some(max_ratio),
        axial: profile.axial,
        moment: moment_at_max,
        check_type: CheckType::CombinedStress,
        status: status_of(max_ratio),
        ratios,
        allowable: Some(allowable),
        message: None,
    }
}

/// Check every member of an analysed model
pub fn check_members(
    model: &FrameModel,
    analysis: &AnalysisResult,
    load_term: LoadTerm,
) -> FrameResult<Vec<SectionCheckResult>> {
    let members = model.prepare()?;
    if analysis.member_forces.len() != members.len() {
        return Err(FrameError::InvalidInput(format!(
            "analysis has {} member results but the model has {} members",
            analysis.member_forces.len(),
            members.len()
        )));
    }
    let w = model.member_load_intensities();

    Ok(members
        .iter()
        .zip(&analysis.member_forces)
        .zip(w)
        .map(|((member, forces), w)| check_member(member, forces, w, load_term))
        .collect())
}
