//! Frame Solver Example - Simple Portal Frame

use frame_solver::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    println!("=== Frame Solver Example: Portal Frame ===\n");

    // Create a simple portal frame
    //
    //     N2 -------- N3
    //     |          |
    //     |          |
    //     N1         N4
    //   Fixed      Pinned
    //
    let height = 4.0;
    let span = 6.0;

    let mut model = FrameModel::new();
    model.add_node(Node::new(0.0, 0.0).with_support(Support::Fixed));
    model.add_node(Node::new(0.0, height));
    model.add_node(Node::new(span, height));
    model.add_node(Node::new(span, 0.0).with_support(Support::Pinned));

    // H-250x125: I = 4050 cm⁴, A = 37.66 cm², Z = 324 cm³, ix = 10.4 cm, iy = 2.79 cm
    let h250 = SectionProperties::new(4050.0, 37.66, 324.0).with_radii(10.4, 2.79);
    // H-300x150: I = 7210 cm⁴, A = 46.78 cm², Z = 481 cm³
    let h300 = SectionProperties::new(7210.0, 46.78, 481.0).with_radii(12.4, 3.29);

    let steel = frame_solver::elements::material::elastic_modulus::STEEL;
    model.add_member(Member::new(1, 2, steel, Strength::SteelF(235.0), h250));
    model.add_member(Member::new(2, 3, steel, Strength::SteelF(235.0), h300));
    // Right column pinned into the beam
    model.add_member(
        Member::new(3, 4, steel, Strength::SteelF(235.0), h250).with_releases(MemberReleases::pin_i()),
    );

    // 20 kN/m on the beam, 10 kN wind at eaves level
    model.add_member_load(MemberLoad::new(2, 20.0));
    model.add_nodal_load(NodalLoad::force(2, 10.0, 0.0));

    println!("Running linear analysis...\n");
    let options = AnalysisOptions::default().with_load_term(LoadTerm::Short);
    let result = model.analyze_with(&options)?;

    println!("Node Displacements:");
    for k in 1..=model.nodes.len() {
        let disp = result.node_displacement(k)?;
        println!("  N{}: DX={:.4}mm, DY={:.4}mm, RZ={:.6}rad", k, disp.dx, disp.dy, disp.rz);
    }

    println!("\nSupport Reactions:");
    for (k, node) in model.nodes.iter().enumerate() {
        if node.support.is_supported() {
            let rxn = result.node_reactions(k + 1)?;
            println!("  N{}: FX={:.2}kN, FY={:.2}kN, MZ={:.2}kN·m", k + 1, rxn.fx, rxn.fy, rxn.mz);
        }
    }

    println!("\nMember Forces:");
    for k in 1..=model.members.len() {
        let forces = result.member_forces(k)?;
        let diagram = MemberDiagram::sample(&model, &result, k)?;
        let (x, m) = diagram.max_moment();
        println!(
            "  M{}: N={:.2}kN, Mmax={:.2}kN·m at x={:.2}m, max deflection={:.3}mm",
            k,
            forces.axial(),
            m,
            x,
            diagram.max_deflection()
        );
    }

    if let Some(statics) = &result.statics {
        println!(
            "\nEquilibrium: ΣFx={:.2e}, ΣFy={:.2e}, ΣMz={:.2e} ({})",
            statics.sum_fx,
            statics.sum_fy,
            statics.sum_mz,
            if statics.balanced { "balanced" } else { "NOT balanced" }
        );
    }

    println!("\nSection Checks (short term):");
    for check in check_members(&model, &result, options.load_term)? {
        match check.max_ratio {
            Some(ratio) => println!("  M{}: ratio={:.3} {:?}", check.member, ratio, check.status),
            None => println!("  M{}: {}", check.member, check.message.unwrap_or_default()),
        }
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Max displacement: {:.4}mm at N{}", summary.max_displacement, summary.max_disp_node);
    println!("  Max reaction: {:.2}kN at N{}", summary.max_reaction, summary.max_reaction_node);
    println!("  Max axial: {:.2}kN in M{}", summary.max_axial, summary.max_axial_member);
    println!("  Max moment: {:.2}kN·m in M{}", summary.max_moment, summary.max_moment_member);

    println!("\n=== Analysis Complete ===");
    Ok(())
}
