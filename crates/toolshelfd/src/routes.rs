//! API routes for toolshelfd

use crate::error::ApiError;
use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;
use toolshelf_shared::api::{messages, HealthResponse, MessageResponse, ToolsQuery};
use toolshelf_shared::{Tool, ToolId, VERSION};
use tracing::{debug, warn};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Tool Routes
// ============================================================================

pub fn tool_routes() -> Router<AppStateArc> {
    Router::new().route("/api/tools", get(list_tools))
}

async fn list_tools(
    State(state): State<AppStateArc>,
    Query(query): Query<ToolsQuery>,
) -> Json<Vec<Tool>> {
    Json(state.catalog.list(query.category.as_deref()))
}

// ============================================================================
// Favorite Routes
// ============================================================================

pub fn favorite_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/favorites", get(list_favorites).post(add_favorite))
        .route("/api/favorites/:id", delete(remove_favorite))
}

async fn list_favorites(State(state): State<AppStateArc>) -> Result<Json<Vec<Tool>>, ApiError> {
    Ok(Json(state.favorites.list().await?))
}

async fn add_favorite(
    State(state): State<AppStateArc>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("  Bad favorite request: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    // A missing or non-integral toolId matches no catalog entry
    let id = body_tool_id(&body).ok_or_else(|| {
        debug!("  No usable toolId in {}", body);
        ApiError::NotFound(messages::TOOL_NOT_FOUND.into())
    })?;

    state.favorites.add(id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(messages::FAVORITE_ADDED)),
    ))
}

async fn remove_favorite(
    State(state): State<AppStateArc>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = leading_int(&id).ok_or_else(|| {
        debug!("  Non-numeric favorite id '{}'", id);
        ApiError::NotFound(messages::FAVORITE_NOT_FOUND.into())
    })?;

    state.favorites.remove(id).await?;

    Ok(Json(MessageResponse::new(messages::FAVORITE_REMOVED)))
}

/// `toolId` as an integer; whole floats like `2.0` count
fn body_tool_id(body: &Value) -> Option<ToolId> {
    let value = body.get("toolId")?;
    if let Some(id) = value.as_i64() {
        return Some(id);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as ToolId)
    } else {
        None
    }
}

/// Integer prefix of a path segment: `"2abc"` is 2, `"abc"` is nothing
fn leading_int(segment: &str) -> Option<ToolId> {
    let s = segment.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        tools: state.catalog.len(),
        favorites: state.favorites.count().await?,
    }))
}
