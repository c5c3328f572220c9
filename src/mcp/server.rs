//! HTTP front door: list-tools, call-tool, and health endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::mcp::handlers::ResearchServer;
use crate::mcp::tools::ToolName;

/// Shared state for the HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    server: Arc<ResearchServer>,
}

impl AppState {
    /// Wrap a tool server for sharing across requests.
    pub fn new(server: ResearchServer) -> Self {
        Self {
            server: Arc::new(server),
        }
    }
}

/// Build the application router.
///
/// - `GET /mcp/tools` lists the tool descriptors
/// - `POST /mcp/tools/{tool_name}` invokes a tool with a JSON argument bag
/// - `GET /health` reports liveness and the configured cache path
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/mcp/tools", get(list_tools))
        .route("/mcp/tools/{tool_name}", post(call_tool))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn list_tools(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "tools": state.server.tools() }))
}

async fn call_tool(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    Json(arguments): Json<Value>,
) -> Response {
    let tool = match tool_name.parse::<ToolName>() {
        Ok(tool) => tool,
        Err(e) => {
            // Dispatch-level failure: the only case that is not a 200
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": e.to_string() })),
            )
                .into_response();
        }
    };

    let result = state.server.handle_tool_call(tool, arguments).await;
    Json(json!({ "result": result })).into_response()
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "cache_path": state.server.cache_path()
    }))
}
