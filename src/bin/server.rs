//! Frame Solver HTTP Server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use frame_solver::api::{self, AnalysisRequest};

const DEFAULT_PORT: u16 = 8086;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn analyze(Json(request): Json<AnalysisRequest>) -> impl IntoResponse {
    let response = api::run(request);
    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(response))
}

fn port() -> anyhow::Result<u16> {
    match std::env::var("FRAME_SOLVER_PORT") {
        Ok(value) => Ok(value.parse()?),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/analyze", post(analyze))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port()?));
    println!("Frame Solver Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Analysis:     POST /api/v1/analyze");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
