//! Mathematical utilities for frame calculations

pub mod fixed_end;
pub mod stiffness;

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

pub use fixed_end::fixed_end_forces;
pub use stiffness::{global_stiffness, local_stiffness, transformation_matrix};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 6x6 matrix for planar member stiffness / transformation
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-element vector for member end forces/displacements
/// ordered (axial_i, shear_i, moment_i, axial_j, shear_j, moment_j)
pub type Vec6 = SVector<f64, 6>;

/// Pivots smaller than this fraction of the largest coefficient count as zero
pub const PIVOT_TOLERANCE: f64 = 1e-12;
/// Residual below this fraction of the largest right-hand side counts as zero
pub const RESIDUAL_TOLERANCE: f64 = 1e-9;

/// Why [`gauss_solve`] found no solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// `a` is not square or `b` does not match it
    DimensionMismatch,
    /// Unknown with a vanishing pivot but a non-zero residual, or a
    /// non-finite value
    Singular { unknown: usize },
}

/// Solve `a * x = b` by Gaussian elimination with partial pivoting.
///
/// Columns whose pivot vanishes are skipped during elimination. During back
/// substitution the matching unknown is set to zero when its residual is also
/// zero; a non-zero residual means the system has no solution and the index
/// of that unknown is returned.
pub fn gauss_solve(a: &Mat, b: &Vec) -> Result<Vec, SolveError> {
    let n = a.nrows();
    if a.ncols() != n || b.len() != n {
        return Err(SolveError::DimensionMismatch);
    }
    if n == 0 {
        return Ok(Vec::zeros(0));
    }

    let mut aug = Mat::zeros(n, n + 1);
    aug.view_mut((0, 0), (n, n)).copy_from(a);
    aug.set_column(n, b);

    let scale = a.amax();
    let pivot_tol = PIVOT_TOLERANCE * scale;
    let residual_tol = RESIDUAL_TOLERANCE * b.amax().max(1.0);

    for col in 0..n {
        let mut max_row = col;
        for row in (col + 1)..n {
            if aug[(row, col)].abs() > aug[(max_row, col)].abs() {
                max_row = row;
            }
        }
        aug.swap_rows(col, max_row);

        let pivot = aug[(col, col)];
        if pivot.abs() <= pivot_tol {
            continue;
        }

        for row in (col + 1)..n {
            let factor = aug[(row, col)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..=n {
                aug[(row, k)] -= factor * aug[(col, k)];
            }
        }
    }

    let mut x = Vec::zeros(n);
    for row in (0..n).rev() {
        let mut sum = 0.0;
        for k in (row + 1)..n {
            sum += aug[(row, k)] * x[k];
        }
        let residual = aug[(row, n)] - sum;
        let pivot = aug[(row, row)];

        if pivot.abs() <= pivot_tol {
            if residual.abs() > residual_tol {
                return Err(SolveError::Singular { unknown: row });
            }
            x[row] = 0.0;
        } else {
            x[row] = residual / pivot;
        }
    }

    match x.iter().position(|v| !v.is_finite()) {
        Some(unknown) => Err(SolveError::Singular { unknown }),
        None => Ok(x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_requires_pivoting() {
        // Zero in the leading position forces a row swap
        let a = Mat::from_row_slice(3, 3, &[0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
        let b = Vec::from_vec(vec![5.0, 6.0, 13.0]);
        let x = gauss_solve(&a, &b).unwrap();

        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matches_lu_on_stiffness_like_system() {
        let a = Mat::from_row_slice(3, 3, &[4.0, -2.0, 0.0, -2.0, 4.0, -2.0, 0.0, -2.0, 4.0]);
        let b = Vec::from_vec(vec![1.0, 0.0, 1.0]);
        let x = gauss_solve(&a, &b).unwrap();
        let reference = a.clone().lu().solve(&b).unwrap();

        for i in 0..3 {
            assert_relative_eq!(x[i], reference[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_zero_row_with_zero_load_is_forced_to_zero() {
        // Second unknown has no stiffness and no load (e.g. a free rotation
        // where every connected member end is pinned)
        let a = Mat::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 0.0]);
        let b = Vec::from_vec(vec![4.0, 0.0]);
        let x = gauss_solve(&a, &b).unwrap();

        assert_relative_eq!(x[0], 2.0);
        assert_eq!(x[1], 0.0);
    }

    #[test]
    fn test_zero_row_with_load_is_singular() {
        let a = Mat::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 0.0]);
        let b = Vec::from_vec(vec![4.0, 1.0]);
        assert_eq!(gauss_solve(&a, &b), Err(SolveError::Singular { unknown: 1 }));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = Mat::zeros(2, 3);
        let b = Vec::zeros(2);
        assert_eq!(gauss_solve(&a, &b), Err(SolveError::DimensionMismatch));
    }
}
