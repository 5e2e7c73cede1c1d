//! Global system assembly, boundary conditions and force recovery

use log::debug;

use crate::elements::Node;
use crate::error::{Entity, FrameError, FrameResult};
use crate::loads::NodalLoad;
use crate::math::{self, Mat, SolveError, Vec, Vec6};
use crate::model::PreparedMember;

/// Names of the three DOFs of a node, in global order
pub const DOF_NAMES: [&str; 3] = ["x", "y", "rz"];

/// Build the global stiffness matrix
///
/// Each member is transformed with `Tᵀ k T` and scatter-added into the rows
/// and columns of its six end DOFs.
pub fn build_global_stiffness(n_dofs: usize, members: &[PreparedMember]) -> Mat {
    let mut k_global = Mat::zeros(n_dofs, n_dofs);

    for member in members {
        let k_member = member.global_stiffness();
        let dofs = member.dofs();
        for (a, &row) in dofs.iter().enumerate() {
            for (b, &col) in dofs.iter().enumerate() {
                k_global[(row, col)] += k_member[(a, b)];
            }
        }
    }

    k_global
}

/// Local fixed-end forces of every member for the summed member loads
pub fn member_fixed_end_forces(members: &[PreparedMember], w: &[f64]) -> std::vec::Vec<Vec6> {
    members
        .iter()
        .zip(w)
        .map(|(member, &w)| {
            if w == 0.0 {
                Vec6::zeros()
            } else {
                math::fixed_end_forces(w, member.length, member.releases)
            }
        })
        .collect()
}

/// Build the global load vector
///
/// Nodal loads are added at their DOFs; the fixed-end forces of loaded
/// members are transformed to global axes and subtracted. Load node indices
/// must already be checked by [`FrameModel::prepare`](crate::FrameModel::prepare).
pub fn build_load_vector(
    n_dofs: usize,
    nodal_loads: &[NodalLoad],
    members: &[PreparedMember],
    fixed_end: &[Vec6],
) -> Vec {
    let mut f = Vec::zeros(n_dofs);

    for (member, fel) in members.iter().zip(fixed_end) {
        if fel.iter().all(|v| *v == 0.0) {
            continue;
        }
        let feg = member.t.transpose() * fel;
        for (a, &dof) in member.dofs().iter().enumerate() {
            f[dof] -= feg[a];
        }
    }

    for load in nodal_loads {
        let base = (load.node - 1) * 3;
        for (offset, value) in load.as_array().into_iter().enumerate() {
            f[base + offset] += value;
        }
    }

    f
}

/// Restrained global DOF indices from the node supports, ascending
pub fn restrained_dofs(nodes: &[Node]) -> std::vec::Vec<usize> {
    nodes
        .iter()
        .enumerate()
        .flat_map(|(k, node)| node.support.restrained_dofs().iter().map(move |d| k * 3 + d))
        .collect()
}

/// Solve the reduced system and scatter back to the full displacement vector
///
/// Restrained DOFs keep zero displacement. Returns `SingularSystem` naming the
/// node and DOF whose equation could not be satisfied.
pub fn solve_reduced(k_global: &Mat, f: &Vec, restrained: &[usize]) -> FrameResult<Vec> {
    let n_dofs = f.len();
    if k_global.shape() != (n_dofs, n_dofs) {
        return Err(FrameError::InvalidInput(format!(
            "stiffness is {}x{} but the load vector has {} entries",
            k_global.nrows(),
            k_global.ncols(),
            n_dofs
        )));
    }
    let free: std::vec::Vec<usize> = (0..n_dofs).filter(|d| restrained.binary_search(d).is_err()).collect();
    let n_free = free.len();

    let mut d_full = Vec::zeros(n_dofs);
    if n_free == 0 {
        return Ok(d_full);
    }

    let mut k_reduced = Mat::zeros(n_free, n_free);
    let mut f_reduced = Vec::zeros(n_free);
    for (r, &dr) in free.iter().enumerate() {
        f_reduced[r] = f[dr];
        for (c, &dc) in free.iter().enumerate() {
            k_reduced[(r, c)] = k_global[(dr, dc)];
        }
    }

    debug!("Solving reduced system with {} free DOFs", n_free);
    let d_reduced = math::gauss_solve(&k_reduced, &f_reduced).map_err(|e| match e {
        SolveError::Singular { unknown } => {
            let dof = free[unknown];
            FrameError::SingularSystem {
                entity: Entity::Node(dof / 3 + 1),
                dof: DOF_NAMES[dof % 3],
            }
        }
        SolveError::DimensionMismatch => FrameError::InvalidInput("reduced system is not square".to_string()),
    })?;

    for (r, &dr) in free.iter().enumerate() {
        d_full[dr] = d_reduced[r];
    }
    Ok(d_full)
}

/// Recover local member end forces from global displacements
///
/// `f = k · T · d + fixed-end forces`
pub fn recover_member_forces(members: &[PreparedMember], fixed_end: &[Vec6], d: &Vec) -> std::vec::Vec<Vec6> {
    members
        .iter()
        .zip(fixed_end)
        .map(|(member, fel)| {
            let dofs = member.dofs();
            let d_global = Vec6::from_fn(|a, _| d[dofs[a]]);
            let d_local = member.t * d_global;
            member.k_local * d_local + fel
        })
        .collect()
}
