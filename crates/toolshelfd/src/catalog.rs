//! Catalog store - the immutable tool list.
//!
//! Loaded once at startup from a JSON array, either a file from the config
//! or the sample dataset compiled into the binary. Records without an `id`
//! get their 1-based position in the source.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use toolshelf_shared::{Tool, ToolId};
use tracing::{debug, info};

/// Sample dataset served when no catalog path is configured
pub const SAMPLE_CATALOG: &str = include_str!("../data/ai_tools_sample_data.json");

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate tool id {0} in catalog")]
    DuplicateId(ToolId),
}

/// Tool record as it appears in the source file
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(default)]
    id: Option<ToolId>,
    name: String,
    category: String,
    #[serde(default)]
    excerpt: Option<String>,
    url: String,
}

/// Read-only tool catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    tools: Vec<Tool>,
}

impl CatalogStore {
    /// Build a catalog from already-identified tools
    pub fn new(tools: Vec<Tool>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(tools.len());
        for tool in &tools {
            if !seen.insert(tool.id) {
                return Err(CatalogError::DuplicateId(tool.id));
            }
        }
        Ok(Self { tools })
    }

    /// Parse a JSON array of tool records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<CatalogRecord> = serde_json::from_str(json)?;
        let tools = records
            .into_iter()
            .enumerate()
            .map(|(i, r)| Tool {
                id: r.id.unwrap_or(i as ToolId + 1),
                name: r.name,
                category: r.category,
                excerpt: r.excerpt,
                url: r.url,
            })
            .collect();
        Self::new(tools)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!("Loaded {} tools from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// The bundled sample dataset
    pub fn sample() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(SAMPLE_CATALOG)?;
        info!("Loaded {} tools from bundled sample", catalog.len());
        Ok(catalog)
    }

    /// Full catalog or the case-insensitive category subset, in load order
    pub fn list(&self, category: Option<&str>) -> Vec<Tool> {
        match category.filter(|c| !c.is_empty()) {
            Some(category) => {
                let matched: Vec<Tool> = self
                    .tools
                    .iter()
                    .filter(|t| t.in_category(category))
                    .cloned()
                    .collect();
                debug!("Category '{}' matched {} tools", category, matched.len());
                matched
            }
            None => self.tools.clone(),
        }
    }

    pub fn all(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, id: ToolId) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: ToolId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
