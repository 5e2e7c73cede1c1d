//! Linear static analysis by the direct stiffness method

pub mod assembly;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::FrameResult;
use crate::math::Vec;
use crate::model::FrameModel;
use crate::results::{AnalysisResult, MemberEndForces, StaticsCheck};

/// Load duration used to pick allowable stresses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadTerm {
    /// Long-term (sustained) loading
    #[default]
    Long,
    /// Short-term (seismic, wind, snow) loading
    Short,
}

impl LoadTerm {
    /// Safety factor applied to metal reference strengths
    pub fn safety_factor(&self) -> f64 {
        match self {
            LoadTerm::Long => 1.5,
            LoadTerm::Short => 1.0,
        }
    }

    /// Column of the long/short allowable-stress tables
    pub fn table_index(&self) -> usize {
        match self {
            LoadTerm::Long => 0,
            LoadTerm::Short => 1,
        }
    }
}

/// Options for structural analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Allowable-stress selector for section checks
    pub load_term: LoadTerm,
    /// Check static equilibrium after analysis
    pub check_statics: bool,
    /// Relative tolerance of the statics check
    pub statics_tolerance: f64,
    /// Run section checks after the solve (used by the service boundary)
    pub section_check: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            load_term: LoadTerm::Long,
            check_statics: true,
            statics_tolerance: 1e-6,
            section_check: false,
        }
    }
}

impl AnalysisOptions {
    /// Set the load term
    pub fn with_load_term(mut self, load_term: LoadTerm) -> Self {
        self.load_term = load_term;
        self
    }

    /// Enable or disable the statics check
    pub fn with_statics_check(mut self, enabled: bool) -> Self {
        self.check_statics = enabled;
        self
    }

    /// Set the statics tolerance
    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.statics_tolerance = tol;
        self
    }

    /// Request section checks
    pub fn with_section_check(mut self) -> Self {
        self.section_check = true;
        self
    }
}

/// Run a linear static analysis
///
/// The model is validated first; invalid geometry or properties abort before
/// any matrix is assembled.
pub fn analyze(model: &FrameModel, options: &AnalysisOptions) -> FrameResult<AnalysisResult> {
    let members = model.prepare()?;
    let n_dofs = model.dof_count();
    debug!(
        "Assembling {} members over {} nodes ({} DOFs)",
        members.len(),
        model.nodes.len(),
        n_dofs
    );

    let w = model.member_load_intensities();
    let fixed_end = assembly::member_fixed_end_forces(&members, &w);
    let k_global = assembly::build_global_stiffness(n_dofs, &members);
    let f_global = assembly::build_load_vector(n_dofs, &model.nodal_loads, &members, &fixed_end);
    let restrained = assembly::restrained_dofs(&model.nodes);

    let (d_global, reactions, member_forces) = if restrained.len() == n_dofs {
        debug!("All DOFs restrained; skipping solve");
        let forces: std::vec::Vec<MemberEndForces> =
            fixed_end.iter().map(MemberEndForces::from_vector).collect();
        (Vec::zeros(n_dofs), -f_global.clone(), forces)
    } else {
        let d = assembly::solve_reduced(&k_global, &f_global, &restrained)?;
        let r = &k_global * &d - &f_global;
        let forces: std::vec::Vec<MemberEndForces> = assembly::recover_member_forces(&members, &fixed_end, &d)
            .iter()
            .map(MemberEndForces::from_vector)
            .collect();
        (d, r, forces)
    };

    let mut result = AnalysisResult {
        displacements: d_global.as_slice().to_vec(),
        reactions: reactions.as_slice().to_vec(),
        member_forces,
        restrained,
        statics: None,
    };

    if options.check_statics {
        let check = statics_check(model, &f_global, &result, options.statics_tolerance);
        if !check.balanced {
            warn!(
                "Equilibrium residual above tolerance: Fx={:.3e}, Fy={:.3e}, Mz={:.3e}",
                check.sum_fx, check.sum_fy, check.sum_mz
            );
        }
        result.statics = Some(check);
    }

    info!(
        "Analysis complete: {} nodes, {} members, {} free DOFs",
        model.nodes.len(),
        members.len(),
        n_dofs - result.restrained.len()
    );
    Ok(result)
}

/// Sum support reactions and applied loads over the whole structure
fn statics_check(model: &FrameModel, f_global: &Vec, result: &AnalysisResult, tolerance: f64) -> StaticsCheck {
    let mut sum_fx = 0.0;
    let mut sum_fy = 0.0;
    let mut sum_mz = 0.0;
    let mut scale: f64 = 1.0;

    for (k, node) in model.nodes.iter().enumerate() {
        let mut total = [0.0; 3];
        for (offset, value) in total.iter_mut().enumerate() {
            let dof = k * 3 + offset;
            let reaction = if result.is_restrained(dof) {
                result.reactions[dof]
            } else {
                0.0
            };
            *value = reaction + f_global[dof];
            scale = scale.max(reaction.abs()).max(f_global[dof].abs());
        }
        sum_fx += total[0];
        sum_fy += total[1];
        sum_mz += total[2] + node.x * total[1] - node.y * total[0];
    }

    let abs_tol = tolerance * scale;
    StaticsCheck {
        sum_fx,
        sum_fy,
        sum_mz,
        tolerance: abs_tol,
        balanced: sum_fx.abs() <= abs_tol && sum_fy.abs() <= abs_tol && sum_mz.abs() <= abs_tol,
    }
}
