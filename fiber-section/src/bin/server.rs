//! Fiber Section HTTP Server

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

use fiber_section::prelude::*;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct SectionSummary {
    tag: u32,
    gross_area: f64,
    steel_area: f64,
    reinforcement_ratio: f64,
    fiber_count: u64,
    svg: String,
    section: FiberSection,
}

#[derive(Debug, Serialize)]
struct BuildResponse {
    commands: Vec<Command>,
    tcl: String,
    python: String,
    sections: Vec<SectionSummary>,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn example() -> impl IntoResponse {
    Json(ModelInput::example())
}

async fn build_sections(Json(input): Json<ModelInput>) -> impl IntoResponse {
    match build(&input) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            log::warn!("rejected model input: {}", e);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn build(input: &ModelInput) -> SectionResult<BuildResponse> {
    let model = Model::from_input(input)?;
    let plotter = SvgPlotter::default();
    let palette = Palette::default();

    let sections = model
        .sections()
        .map(|section| {
            Ok(SectionSummary {
                tag: section.tag,
                gross_area: section.gross_area(),
                steel_area: section.steel_area(),
                reinforcement_ratio: section.reinforcement_ratio(),
                fiber_count: section.fiber_count(),
                svg: plotter.render(section, &palette)?,
                section: section.clone(),
            })
        })
        .collect::<SectionResult<Vec<_>>>()?;

    Ok(BuildResponse {
        commands: model.commands().to_vec(),
        tcl: model.to_script(ScriptFormat::Tcl)?,
        python: model.to_script(ScriptFormat::Python)?,
        sections,
    })
}

/// `HOST` may be an IPv4 or a bracketed IPv6 address
fn listen_addr(host: &str, port: &str) -> Result<SocketAddr, std::net::AddrParseError> {
    format!("{}:{}", host, port).parse()
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/example", get(example))
        .route("/api/v1/sections", post(build_sections))
        .layer(cors);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8087".to_string());
    let addr = match listen_addr(&host, &port) {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("invalid listen address {}:{}: {}", host, port, e);
            std::process::exit(1);
        }
    };

    println!("Fiber Section Server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Example:      GET  /api/v1/example");
    println!("  Sections:     POST /api/v1/sections");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
