//! HTTP client for communicating with toolshelfd.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use toolshelf_shared::api::{AddFavoriteRequest, HealthResponse, MessageResponse};
use toolshelf_shared::{Tool, ToolId};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Cannot reach toolshelfd at {url}: {source}")]
    Unavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success status; `message` is the body's `message` field, if any
    #[error("{}", describe(.status, .message))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("Invalid response from toolshelfd: {0}")]
    InvalidResponse(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Server message, else the status reason
fn describe(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => StatusCode::from_u16(*status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Request failed")
            .to_string(),
    }
}

/// Client for the toolshelfd HTTP API
#[derive(Debug, Clone)]
pub struct ToolshelfClient {
    http: reqwest::Client,
    base_url: String,
}

impl ToolshelfClient {
    /// `base_url` points at the API root, e.g. `http://localhost:3001/api`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /tools`, optionally narrowed to one category server-side
    pub async fn list_tools(&self, category: Option<&str>) -> ClientResult<Vec<Tool>> {
        let url = self.url("/tools");
        let mut request = self.http.get(&url);
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }
        let resp = request.send().await.map_err(|e| unavailable(&url, e))?;
        decode(resp).await
    }

    pub async fn list_favorites(&self) -> ClientResult<Vec<Tool>> {
        self.get("/favorites").await
    }

    /// Returns the server's confirmation message
    pub async fn add_favorite(&self, tool_id: ToolId) -> ClientResult<String> {
        let body = AddFavoriteRequest { tool_id };
        let resp: MessageResponse = self.post("/favorites", &body).await?;
        Ok(resp.message)
    }

    /// Returns the server's confirmation message
    pub async fn remove_favorite(&self, tool_id: ToolId) -> ClientResult<String> {
        let url = self.url(&format!("/favorites/{}", tool_id));
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| unavailable(&url, e))?;
        let body: MessageResponse = decode(resp).await?;
        Ok(body.message)
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.get("/health").await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(&url, e))?;
        decode(resp).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ClientResult<T> {
        let url = self.url(path);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| unavailable(&url, e))?;
        decode(resp).await
    }
}

fn unavailable(url: &str, source: reqwest::Error) -> ClientError {
    ClientError::Unavailable {
        url: url.to_string(),
        source,
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    let status = resp.status();
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
    debug!("{} ({} bytes)", status, bytes.len());

    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(&bytes),
        });
    }

    serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// The `message` field of an error body
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<MessageResponse>(body)
        .ok()
        .map(|m| m.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ToolshelfClient::new("http://localhost:3001/api/");
        assert_eq!(client.base_url(), "http://localhost:3001/api");
        assert_eq!(client.url("/tools"), "http://localhost:3001/api/tools");
    }

    #[test]
    fn test_error_message_from_body() {
        assert_eq!(
            error_message(br#"{"message":"Tool already in favorites"}"#).as_deref(),
            Some("Tool already in favorites")
        );
        assert_eq!(error_message(b"<html>"), None);
    }

    #[test]
    fn test_api_error_display_falls_back_to_reason() {
        let err = ClientError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = ClientError::Api {
            status: 409,
            message: Some("Tool already in favorites".into()),
        };
        assert_eq!(err.to_string(), "Tool already in favorites");
    }
}
