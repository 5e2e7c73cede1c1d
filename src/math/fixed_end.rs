//! Fixed-end forces for uniformly loaded members

use super::Vec6;
use crate::elements::{EndCondition, MemberReleases};

/// Compute the local fixed-end force vector for a uniform transverse load
///
/// # Arguments
/// * `w` - Load intensity (positive acts along local -y)
/// * `l` - Member length
/// * `releases` - End conditions at the i- and j-node
///
/// # Returns
/// `[N_i, Q_i, M_i, N_j, Q_j, M_j]`; the axial terms are always zero.
pub fn fixed_end_forces(w: f64, l: f64, releases: MemberReleases) -> Vec6 {
    let builder = match (releases.i, releases.j) {
        (EndCondition::Rigid, EndCondition::Rigid) => rigid_rigid,
        (EndCondition::Pinned, EndCondition::Rigid) => pinned_rigid,
        (EndCondition::Rigid, EndCondition::Pinned) => rigid_pinned,
        (EndCondition::Pinned, EndCondition::Pinned) => pinned_pinned,
    };
    builder(w, l)
}

fn rigid_rigid(w: f64, l: f64) -> Vec6 {
    let l2 = l * l;
    Vec6::new(0.0, w * l / 2.0, w * l2 / 12.0, 0.0, w * l / 2.0, -w * l2 / 12.0)
}

fn pinned_rigid(w: f64, l: f64) -> Vec6 {
    Vec6::new(0.0, 3.0 * w * l / 8.0, 0.0, 0.0, 5.0 * w * l / 8.0, -w * l * l / 8.0)
}

fn rigid_pinned(w: f64, l: f64) -> Vec6 {
    Vec6::new(0.0, 5.0 * w * l / 8.0, w * l * l / 8.0, 0.0, 3.0 * w * l / 8.0, 0.0)
}

fn pinned_pinned(w: f64, l: f64) -> Vec6 {
    Vec6::new(0.0, w * l / 2.0, 0.0, 0.0, w * l / 2.0, 0.0)
}
