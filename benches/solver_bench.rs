//! Benchmarks for the frame solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use frame_solver::elements::material::{elastic_modulus, grade};
use frame_solver::prelude::*;

fn create_cantilever_model() -> FrameModel {
    let mut model = FrameModel::new();
    model.add_node(Node::new(0.0, 0.0).with_support(Support::Fixed));
    model.add_node(Node::new(10.0, 0.0));
    model.add_member(Member::new(
        1,
        2,
        elastic_modulus::STEEL,
        grade::SS400,
        SectionProperties::rectangular(300.0, 500.0),
    ));
    model.add_nodal_load(NodalLoad::force(2, 0.0, -10.0));
    model
}

fn create_multi_story_frame(stories: usize, bays: usize) -> FrameModel {
    let mut model = FrameModel::new();

    let column = SectionProperties::new(20_400.0, 119.4, 1_360.0);
    let beam = SectionProperties::new(23_500.0, 72.38, 1_170.0);
    let story_height = 3.5;
    let bay_width = 6.0;
    let node_number = |story: usize, bay: usize| story * (bays + 1) + bay + 1;

    for story in 0..=stories {
        for bay in 0..=bays {
            let support = if story == 0 { Support::Fixed } else { Support::Free };
            model.add_node(Node::new(bay as f64 * bay_width, story as f64 * story_height).with_support(support));
        }
    }

    for story in 0..stories {
        for bay in 0..=bays {
            model.add_member(Member::new(
                node_number(story, bay),
                node_number(story + 1, bay),
                elastic_modulus::STEEL,
                grade::SN490B,
                column,
            ));
        }
    }

    for story in 1..=stories {
        for bay in 0..bays {
            let m = model.add_member(Member::new(
                node_number(story, bay),
                node_number(story, bay + 1),
                elastic_modulus::STEEL,
                grade::SN400B,
                beam,
            ));
            model.add_member_load(MemberLoad::new(m, 25.0));
        }
        model.add_nodal_load(NodalLoad::force(node_number(story, 0), 15.0, 0.0));
    }

    model
}

fn benchmark_cantilever(c: &mut Criterion) {
    let model = create_cantilever_model();
    c.bench_function("cantilever_linear", |b| {
        b.iter(|| black_box(model.analyze().unwrap()))
    });
}

fn benchmark_small_frame(c: &mut Criterion) {
    let model = create_multi_story_frame(3, 2);
    c.bench_function("frame_3story_2bay_linear", |b| {
        b.iter(|| black_box(model.analyze().unwrap()))
    });
}

fn benchmark_medium_frame(c: &mut Criterion) {
    let model = create_multi_story_frame(10, 5);
    c.bench_function("frame_10story_5bay_linear", |b| {
        b.iter(|| black_box(model.analyze().unwrap()))
    });
}

fn benchmark_section_check(c: &mut Criterion) {
    let model = create_multi_story_frame(10, 5);
    let result = model.analyze().unwrap();
    c.bench_function("frame_10story_5bay_section_check", |b| {
        b.iter(|| black_box(check_members(&model, &result, LoadTerm::Long).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_cantilever,
    benchmark_small_frame,
    benchmark_medium_frame,
    benchmark_section_check,
);

criterion_main!(benches);
