//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use crate::tool::ToolId;

/// Body of `POST /api/favorites`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(rename = "toolId")]
    pub tool_id: ToolId,
}

/// Query string of `GET /api/tools`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// Confirmation or error body carrying a human readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub tools: usize,
    pub favorites: usize,
}

/// Messages returned by the favorites endpoints
pub mod messages {
    pub const TOOL_NOT_FOUND: &str = "Tool not found";
    pub const ALREADY_FAVORITE: &str = "Tool already in favorites";
    pub const FAVORITE_ADDED: &str = "Tool added to favorites";
    pub const FAVORITE_NOT_FOUND: &str = "Favorite not found";
    pub const FAVORITE_REMOVED: &str = "Removed from favorites";
}
