//! Local stiffness and coordinate transformation of planar frame members

use super::Mat6;
use crate::elements::{EndCondition, MemberReleases};

/// Compute the 6x6 local stiffness matrix of a planar member
///
/// DOFs are ordered (axial_i, shear_i, moment_i, axial_j, shear_j, moment_j).
///
/// # Arguments
/// * `e` - Modulus of elasticity
/// * `a` - Cross-sectional area
/// * `i` - Moment of inertia
/// * `l` - Member length
/// * `releases` - End conditions at the i- and j-node
pub fn local_stiffness(e: f64, a: f64, i: f64, l: f64, releases: MemberReleases) -> Mat6 {
    let coeffs = Coefficients::new(e, a, i, l);
    let builder = match (releases.i, releases.j) {
        (EndCondition::Rigid, EndCondition::Rigid) => rigid_rigid,
        (EndCondition::Pinned, EndCondition::Rigid) => pinned_rigid,
        (EndCondition::Rigid, EndCondition::Pinned) => rigid_pinned,
        (EndCondition::Pinned, EndCondition::Pinned) => pinned_pinned,
    };
    builder(&coeffs)
}

struct Coefficients {
    ea_l: f64,
    ei_l: f64,
    ei_l2: f64,
    ei_l3: f64,
}

impl Coefficients {
    fn new(e: f64, a: f64, i: f64, l: f64) -> Self {
        Self {
            ea_l: e * a / l,
            ei_l: e * i / l,
            ei_l2: e * i / (l * l),
            ei_l3: e * i / (l * l * l),
        }
    }
}

fn rigid_rigid(k: &Coefficients) -> Mat6 {
    let (ea, ei, ei2, ei3) = (k.ea_l, k.ei_l, k.ei_l2, k.ei_l3);
    #[rustfmt::skip]
    let data = [
        ea,   0.0,         0.0,        -ea,  0.0,         0.0,
        0.0,  12.0*ei3,    6.0*ei2,    0.0,  -12.0*ei3,   6.0*ei2,
        0.0,  6.0*ei2,     4.0*ei,     0.0,  -6.0*ei2,    2.0*ei,
        -ea,  0.0,         0.0,        ea,   0.0,         0.0,
        0.0,  -12.0*ei3,   -6.0*ei2,   0.0,  12.0*ei3,    -6.0*ei2,
        0.0,  6.0*ei2,     2.0*ei,     0.0,  -6.0*ei2,    4.0*ei,
    ];
    Mat6::from_row_slice(&data)
}

fn pinned_rigid(k: &Coefficients) -> Mat6 {
    let (ea, ei, ei2, ei3) = (k.ea_l, k.ei_l, k.ei_l2, k.ei_l3);
    #[rustfmt::skip]
    let data = [
        ea,   0.0,        0.0,  -ea,  0.0,        0.0,
        0.0,  3.0*ei3,    0.0,  0.0,  -3.0*ei3,   3.0*ei2,
        0.0,  0.0,        0.0,  0.0,  0.0,        0.0,
        -ea,  0.0,        0.0,  ea,   0.0,        0.0,
        0.0,  -3.0*ei3,   0.0,  0.0,  3.0*ei3,    -3.0*ei2,
        0.0,  3.0*ei2,    0.0,  0.0,  -3.0*ei2,   3.0*ei,
    ];
    Mat6::from_row_slice(&data)
}

fn rigid_pinned(k: &Coefficients) -> Mat6 {
    let (ea, ei, ei2, ei3) = (k.ea_l, k.ei_l, k.ei_l2, k.ei_l3);
    #[rustfmt::skip]
    let data = [
        ea,   0.0,        0.0,        -ea,  0.0,        0.0,
        0.0,  3.0*ei3,    3.0*ei2,    0.0,  -3.0*ei3,   0.0,
        0.0,  3.0*ei2,    3.0*ei,     0.0,  -3.0*ei2,   0.0,
        -ea,  0.0,        0.0,        ea,   0.0,        0.0,
        0.0,  -3.0*ei3,   -3.0*ei2,   0.0,  3.0*ei3,    0.0,
        0.0,  0.0,        0.0,        0.0,  0.0,        0.0,
    ];
    Mat6::from_row_slice(&data)
}

fn pinned_pinned(k: &Coefficients) -> Mat6 {
    let ea = k.ea_l;
    let mut m = Mat6::zeros();
    m[(0, 0)] = ea;
    m[(0, 3)] = -ea;
    m[(3, 0)] = -ea;
    m[(3, 3)] = ea;
    m
}

/// Compute the transformation matrix from global to local coordinates
///
/// Block diagonal with the 2D rotation `[[c, s, 0], [-s, c, 0], [0, 0, 1]]`
/// at each end, where `c` and `s` are the member direction cosines.
pub fn transformation_matrix(c: f64, s: f64) -> Mat6 {
    let mut t = Mat6::zeros();
    for offset in [0, 3] {
        t[(offset, offset)] = c;
        t[(offset, offset + 1)] = s;
        t[(offset + 1, offset)] = -s;
        t[(offset + 1, offset + 1)] = c;
        t[(offset + 2, offset + 2)] = 1.0;
    }
    t
}

/// Transform a local stiffness matrix to global coordinates: `Tᵀ k T`
pub fn global_stiffness(k_local: &Mat6, t: &Mat6) -> Mat6 {
    t.transpose() * k_local * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const E: f64 = 205_000_000.0;
    const A: f64 = 5.0e-3;
    const I: f64 = 1.0e-4;
    const L: f64 = 4.0;

    fn all_releases() -> [MemberReleases; 4] {
        [
            MemberReleases::none(),
            MemberReleases::pin_i(),
            MemberReleases::pin_j(),
            MemberReleases::pin_both(),
        ]
    }

    #[test]
    fn test_local_stiffness_symmetry() {
        for releases in all_releases() {
            let k = local_stiffness(E, A, I, L, releases);
            for r in 0..6 {
                for c in 0..6 {
                    assert_relative_eq!(k[(r, c)], k[(c, r)], max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_rigid_rigid_coefficients() {
        let k = local_stiffness(E, A, I, L, MemberReleases::none());
        assert_relative_eq!(k[(0, 0)], E * A / L);
        assert_relative_eq!(k[(1, 1)], 12.0 * E * I / L.powi(3));
        assert_relative_eq!(k[(1, 2)], 6.0 * E * I / L.powi(2));
        assert_relative_eq!(k[(2, 2)], 4.0 * E * I / L);
        assert_relative_eq!(k[(2, 5)], 2.0 * E * I / L);
    }

    #[test]
    fn test_released_end_rotation_collapses() {
        let k = local_stiffness(E, A, I, L, MemberReleases::pin_i());
        for c in 0..6 {
            assert_eq!(k[(2, c)], 0.0);
            assert_eq!(k[(c, 2)], 0.0);
        }
        assert_relative_eq!(k[(5, 5)], 3.0 * E * I / L);

        let k = local_stiffness(E, A, I, L, MemberReleases::pin_j());
        for c in 0..6 {
            assert_eq!(k[(5, c)], 0.0);
            assert_eq!(k[(c, 5)], 0.0);
        }
        assert_relative_eq!(k[(2, 2)], 3.0 * E * I / L);
        assert_relative_eq!(k[(1, 1)], 3.0 * E * I / L.powi(3));
    }

    #[test]
    fn test_truss_member_has_only_axial_terms() {
        let k = local_stiffness(E, A, I, L, MemberReleases::pin_both());
        for r in 0..6 {
            for c in 0..6 {
                let axial = (r == 0 || r == 3) && (c == 0 || c == 3);
                if !axial {
                    assert_eq!(k[(r, c)], 0.0, "entry ({}, {}) should be zero", r, c);
                }
            }
        }
        assert_relative_eq!(k[(0, 3)], -E * A / L);
    }

    #[test]
    fn test_transformation_is_orthogonal() {
        let angle: f64 = 0.6;
        let t = transformation_matrix(angle.cos(), angle.sin());
        let product = t.transpose() * t;
        for r in 0..6 {
            for c in 0..6 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_relative_eq!(product[(r, c)], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_vertical_member_global_stiffness() {
        // Local axis along global Y: axial stiffness lands on the global y DOFs
        let k_local = local_stiffness(E, A, I, L, MemberReleases::none());
        let t = transformation_matrix(0.0, 1.0);
        let k = global_stiffness(&k_local, &t);

        assert_relative_eq!(k[(1, 1)], E * A / L, max_relative = 1e-12);
        assert_relative_eq!(k[(0, 0)], 12.0 * E * I / L.powi(3), max_relative = 1e-12);
        assert_relative_eq!(k[(2, 2)], 4.0 * E * I / L, max_relative = 1e-12);
    }
}
