//! Allowable stresses per material class

use std::f64::consts::PI;

use super::AllowableStresses;
use crate::analysis::LoadTerm;
use crate::elements::Strength;
use crate::error::{FrameError, FrameResult};
use crate::model::PreparedMember;

use super::wood;

/// Radii of gyration at or below this (m) disable the buckling reduction
pub const MIN_RADIUS: f64 = 1e-9;

/// Allowable stresses of a prepared member
///
/// Concrete (`Fc`) members and timber without table data are not checked and
/// return `UnsupportedMaterial`.
pub fn allowable_stresses(member: &PreparedMember, load_term: LoadTerm) -> FrameResult<AllowableStresses> {
    match member.strength {
        Strength::SteelF(f) | Strength::StainlessF(f) | Strength::AluminumF(f) => Ok(metal(
            f,
            member.e * 1e-3,
            member.length,
            member.min_radius(),
            load_term,
        )),
        Strength::Wood(species) => wood::allowable(species, load_term).ok_or_else(|| unsupported(member)),
        Strength::ConcreteFc(_) => Err(unsupported(member)),
    }
}

fn unsupported(member: &PreparedMember) -> FrameError {
    FrameError::UnsupportedMaterial {
        member: member.index,
        material: member.strength.to_string(),
    }
}

/// Allowable stresses of a metal member with compressive buckling reduction
///
/// # Arguments
/// * `f` - Reference strength F (N/mm²)
/// * `e` - Modulus of elasticity (N/mm²)
/// * `length` - Buckling length (m)
/// * `radius` - Smallest radius of gyration (m)
/// * `load_term` - Long- or short-term loading
pub fn metal(f: f64, e: f64, length: f64, radius: f64, load_term: LoadTerm) -> AllowableStresses {
    let factor = load_term.safety_factor();
    let ft = f / factor;
    let fs = f / (factor * 3f64.sqrt());

    let fc = if radius > MIN_RADIUS {
        let lambda = length / radius;
        let lambda_p = PI * (e / (0.6 * f)).sqrt();
        let ratio = lambda / lambda_p;
        if lambda <= lambda_p {
            (1.0 - 0.4 * ratio * ratio) * f / factor
        } else {
            0.277 * f / (ratio * ratio)
        }
    } else {
        ft
    };

    AllowableStresses { ft, fc, fb: ft, fs }
}
