//! Textbook beam, frame and truss cases checked against closed-form results

use approx::assert_relative_eq;
use frame_solver::analysis::assembly;
use frame_solver::elements::material::{elastic_modulus, grade};
use frame_solver::error::Entity;
use frame_solver::math;
use frame_solver::prelude::*;

const E: f64 = elastic_modulus::STEEL;
const I_CM4: f64 = 4720.0;
const A_CM2: f64 = 39.01;
const Z_CM3: f64 = 324.0;

fn section() -> SectionProperties {
    SectionProperties::new(I_CM4, A_CM2, Z_CM3)
}

/// Flexural rigidity in kN·m²
fn ei() -> f64 {
    E * 1e3 * I_CM4 * 1e-8
}

fn beam(nodes: &[(f64, Support)]) -> FrameModel {
    let mut model = FrameModel::new();
    for &(x, support) in nodes {
        model.add_node(Node::new(x, 0.0).with_support(support));
    }
    for k in 1..nodes.len() {
        model.add_member(Member::new(k, k + 1, E, grade::SS400, section()));
    }
    model
}

#[test]
fn simply_supported_point_load_at_midspan() {
    let (l, p) = (8.0, 40.0);
    let mut model = beam(&[(0.0, Support::Pinned), (l / 2.0, Support::Free), (l, Support::Roller)]);
    model.add_nodal_load(NodalLoad::force(2, 0.0, -p));

    let result = model.analyze().unwrap();

    let mid = result.node_displacement(2).unwrap();
    assert_relative_eq!(mid.dy, -p * l.powi(3) / (48.0 * ei()) * 1e3, max_relative = 1e-9);
    assert!(mid.rz.abs() < 1e-12);

    assert_relative_eq!(result.node_reactions(1).unwrap().fy, p / 2.0, max_relative = 1e-9);
    assert_relative_eq!(result.node_reactions(3).unwrap().fy, p / 2.0, max_relative = 1e-9);
    assert_relative_eq!(result.member_forces(1).unwrap().m_j.abs(), p * l / 4.0, max_relative = 1e-9);
    assert_relative_eq!(result.member_forces(2).unwrap().m_i.abs(), p * l / 4.0, max_relative = 1e-9);
}

#[test]
fn simply_supported_uniform_load() {
    let (l, w) = (6.0, 12.0);
    let mut model = beam(&[(0.0, Support::Pinned), (l, Support::Roller)]);
    model.add_member_load(MemberLoad::new(1, w));

    let result = model.analyze().unwrap();
    let forces = result.member_forces(1).unwrap();

    assert_relative_eq!(forces.q_i, w * l / 2.0, max_relative = 1e-9);
    assert_relative_eq!(forces.q_j.abs(), w * l / 2.0, max_relative = 1e-9);
    assert!(forces.m_i.abs() < 1e-9 && forces.m_j.abs() < 1e-9);

    let diagram = MemberDiagram::sample(&model, &result, 1).unwrap();
    let (x, m) = diagram.max_moment();
    assert_relative_eq!(x, l / 2.0, max_relative = 1e-9);
    assert_relative_eq!(m, w * l * l / 8.0, max_relative = 1e-9);
}

#[test]
fn cantilever_tip_load() {
    let (l, p) = (3.0, 5.0);
    let mut model = beam(&[(0.0, Support::Fixed), (l, Support::Free)]);
    model.add_nodal_load(NodalLoad::force(2, 0.0, -p));

    let result = model.analyze().unwrap();

    let tip = result.node_displacement(2).unwrap();
    assert_relative_eq!(tip.dy, -p * l.powi(3) / (3.0 * ei()) * 1e3, max_relative = 1e-9);
    assert_relative_eq!(tip.rz, -p * l * l / (2.0 * ei()), max_relative = 1e-9);

    let base = result.node_reactions(1).unwrap();
    assert_relative_eq!(base.fy, p, max_relative = 1e-9);
    assert_relative_eq!(base.mz, p * l, max_relative = 1e-9);
    assert!(base.fx.abs() < 1e-9);
}

#[test]
fn fixed_fixed_beam_takes_fixed_end_forces() {
    let (l, w) = (5.0, 8.0);
    let mut model = beam(&[(0.0, Support::Fixed), (l, Support::Fixed)]);
    model.add_member_load(MemberLoad::new(1, w));

    let result = model.analyze().unwrap();

    assert!(result.displacements.iter().all(|d| *d == 0.0));
    let fel = math::fixed_end_forces(w, l, MemberReleases::none());
    assert_relative_eq!(result.member_forces(1).unwrap().as_vector(), fel, epsilon = 1e-12);

    let left = result.node_reactions(1).unwrap();
    let right = result.node_reactions(2).unwrap();
    assert_relative_eq!(left.fy, w * l / 2.0, max_relative = 1e-12);
    assert_relative_eq!(right.fy, w * l / 2.0, max_relative = 1e-12);
    assert_relative_eq!(left.mz, w * l * l / 12.0, max_relative = 1e-12);
    assert_relative_eq!(right.mz, -w * l * l / 12.0, max_relative = 1e-12);
}

#[test]
fn portal_frame_is_in_equilibrium() {
    let mut model = FrameModel::new();
    model.add_node(Node::new(0.0, 0.0).with_support(Support::Fixed));
    model.add_node(Node::new(0.0, 4.0));
    model.add_node(Node::new(6.0, 4.0));
    model.add_node(Node::new(6.0, 0.0).with_support(Support::Pinned));
    model.add_member(Member::new(1, 2, E, grade::SS400, section()));
    model.add_member(Member::new(2, 3, E, grade::SS400, section()));
    model.add_member(Member::new(3, 4, E, grade::SS400, section()));
    model.add_member_load(MemberLoad::new(2, 20.0));
    model.add_member_load(MemberLoad::new(2, 5.0));
    model.add_nodal_load(NodalLoad::new(2, 10.0, 0.0, 3.0));

    let result = model.analyze().unwrap();
    let statics = result.statics.unwrap();
    assert!(statics.balanced, "{:?}", statics);

    // Both member loads act together
    let vertical: f64 = [1, 4].iter().map(|&n| result.node_reactions(n).unwrap().fy).sum();
    assert_relative_eq!(vertical, 25.0 * 6.0, max_relative = 1e-9);
    let horizontal: f64 = [1, 4].iter().map(|&n| result.node_reactions(n).unwrap().fx).sum();
    assert_relative_eq!(horizontal, -10.0, max_relative = 1e-9);

    // Pinned support carries no moment
    assert_eq!(result.node_reactions(4).unwrap().mz, 0.0);
}

#[test]
fn member_forces_follow_from_displacements() {
    let mut model = beam(&[(0.0, Support::Fixed), (4.0, Support::Free), (9.0, Support::Roller)]);
    model.add_member_load(MemberLoad::new(2, 15.0));
    model.add_nodal_load(NodalLoad::new(2, 3.0, -20.0, 7.0));
    let result = model.analyze().unwrap();

    let members = model.prepare().unwrap();
    let fixed_end = assembly::member_fixed_end_forces(&members, &model.member_load_intensities());
    let d = math::Vec::from_column_slice(&result.displacements);
    let recovered = assembly::recover_member_forces(&members, &fixed_end, &d);

    for (k, f) in recovered.iter().enumerate() {
        assert_relative_eq!(result.member_forces(k + 1).unwrap().as_vector(), *f, epsilon = 1e-9);
    }
}

#[test]
fn triangular_truss_axial_forces() {
    let p = 30.0;
    let mut model = FrameModel::new();
    model.add_node(Node::new(0.0, 0.0).with_support(Support::Pinned));
    model.add_node(Node::new(4.0, 0.0).with_support(Support::Roller));
    model.add_node(Node::new(2.0, 2.0));
    for (i, j) in [(1, 2), (1, 3), (2, 3)] {
        model.add_member(
            Member::new(i, j, E, grade::SS400, SectionProperties::new(100.0, 10.0, 20.0))
                .with_releases(MemberReleases::pin_both()),
        );
    }
    model.add_nodal_load(NodalLoad::force(3, 0.0, -p));

    let result = model.analyze().unwrap();

    assert_relative_eq!(result.member_forces(1).unwrap().axial(), p / 2.0, max_relative = 1e-9);
    for k in [2, 3] {
        let forces = result.member_forces(k).unwrap();
        assert_relative_eq!(forces.axial(), -p / 2f64.sqrt(), max_relative = 1e-9);
        assert!(forces.max_end_moment() < 1e-9);
    }
}

#[test]
fn zero_length_member_is_rejected() {
    let mut model = FrameModel::new();
    model.add_node(Node::new(1.0, 1.0).with_support(Support::Fixed));
    model.add_node(Node::new(1.0, 1.0));
    model.add_member(Member::new(1, 2, E, grade::SS400, section()));

    let err = model.analyze().unwrap_err();
    assert!(matches!(err, FrameError::InvalidGeometry { .. }), "{}", err);
    assert!(err.to_string().contains("member 1"));
}

#[test]
fn unsupported_structure_is_singular() {
    let mut model = beam(&[(0.0, Support::Free), (5.0, Support::Free)]);
    model.add_nodal_load(NodalLoad::force(2, 0.0, -1.0));

    match model.analyze() {
        Err(FrameError::SingularSystem { entity, dof }) => {
            assert!(matches!(entity, Entity::Node(1) | Entity::Node(2)), "{}", entity);
            assert!(["x", "y", "rz"].contains(&dof));
        }
        other => panic!("expected a singular system, got {:?}", other),
    }
}

#[test]
fn singular_error_names_the_unconnected_node() {
    // Node 3 has a load but no member attached
    let mut model = beam(&[(0.0, Support::Fixed), (3.0, Support::Free)]);
    model.add_node(Node::new(6.0, 0.0));
    model.add_nodal_load(NodalLoad::force(3, 0.0, -1.0));

    let err = model.analyze().unwrap_err();
    assert!(
        matches!(err, FrameError::SingularSystem { entity: Entity::Node(3), dof: "y" }),
        "{}",
        err
    );
    assert!(err.to_string().contains("node 3 (y)"));
}
