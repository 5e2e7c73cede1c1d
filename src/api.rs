//! JSON request/response boundary shared by the HTTP server and WASM bindings

use log::{error, info};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisOptions;
use crate::elements::SectionSelection;
use crate::error::FrameResult;
use crate::model::FrameModel;
use crate::results::{AnalysisResult, AnalysisSummary};
use crate::section_check::{self, SectionCheckResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub model: FrameModel,
    #[serde(default)]
    pub options: AnalysisOptions,
    /// Section picker choices applied to the model before analysis
    #[serde(default)]
    pub selections: Vec<SectionSelection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsData {
    pub node_displacements: Vec<NodeDisplacementResult>,
    pub reactions: Vec<ReactionResult>,
    pub summary: AnalysisSummary,
    pub analysis: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_checks: Option<Vec<SectionCheckResult>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDisplacementResult {
    pub node: usize,
    /// mm
    pub dx: f64,
    /// mm
    pub dy: f64,
    /// rad
    pub rz: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionResult {
    pub node: usize,
    pub fx: f64,
    pub fy: f64,
    pub mz: f64,
}

/// Run one request and wrap the outcome in a response
pub fn run(request: AnalysisRequest) -> AnalysisResponse {
    match run_analysis(request) {
        Ok(results) => AnalysisResponse {
            success: true,
            error: None,
            results: Some(results),
        },
        Err(e) => {
            error!("Analysis failed: {}", e);
            AnalysisResponse {
                success: false,
                error: Some(e.to_string()),
                results: None,
            }
        }
    }
}

/// Parse a JSON request, run it and serialize the response
pub fn run_json(request_json: &str) -> String {
    let response = match serde_json::from_str::<AnalysisRequest>(request_json) {
        Ok(request) => run(request),
        Err(e) => AnalysisResponse {
            success: false,
            error: Some(format!("Failed to parse request: {}", e)),
            results: None,
        },
    };

    serde_json::to_string(&response)
        .unwrap_or_else(|e| format!(r#"{{"success":false,"error":"Serialization failed: {}"}}"#, e))
}

fn run_analysis(request: AnalysisRequest) -> FrameResult<ResultsData> {
    let AnalysisRequest {
        mut model,
        options,
        selections,
    } = request;

    for selection in selections {
        model.apply_section_selection(selection)?;
    }

    let analysis = model.analyze_with(&options)?;

    let mut node_displacements = Vec::with_capacity(model.nodes.len());
    let mut reactions = Vec::new();
    for (k, node) in model.nodes.iter().enumerate() {
        let disp = analysis.node_displacement(k + 1)?;
        node_displacements.push(NodeDisplacementResult {
            node: k + 1,
            dx: disp.dx,
            dy: disp.dy,
            rz: disp.rz,
        });
        if node.support.is_supported() {
            let rxn = analysis.node_reactions(k + 1)?;
            reactions.push(ReactionResult {
                node: k + 1,
                fx: rxn.fx,
                fy: rxn.fy,
                mz: rxn.mz,
            });
        }
    }

    let section_checks = if options.section_check {
        Some(section_check::check_members(&model, &analysis, options.load_term)?)
    } else {
        None
    };

    let summary = analysis.summary();
    info!(
        "Request solved: max displacement {:.3} mm at node {}",
        summary.max_displacement, summary.max_disp_node
    );

    Ok(ResultsData {
        node_displacements,
        reactions,
        summary,
        analysis,
        section_checks,
    })
}
