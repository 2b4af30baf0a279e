//! Favorites - the set of tool IDs the user has marked.
//!
//! Storage sits behind [`FavoritesStore`] so a durable backend can replace
//! the in-memory set without touching the handlers. [`Favorites`] enforces
//! the catalog invariant on top of whichever store is plugged in.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use toolshelf_shared::{Tool, ToolId};
use tracing::{debug, info};

use crate::catalog::CatalogStore;

/// Result alias for favorites operations
pub type FavoritesResult<T> = Result<T, FavoriteError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FavoriteError {
    #[error("Tool not found: {0}")]
    UnknownTool(ToolId),

    #[error("Tool already in favorites: {0}")]
    AlreadyFavorite(ToolId),

    #[error("Favorite not found: {0}")]
    NotFavorite(ToolId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Storage backend for favorite IDs.
///
/// `insert` and `remove` must check and mutate atomically.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Fails with `AlreadyFavorite` if the ID is present
    async fn insert(&self, id: ToolId) -> FavoritesResult<()>;

    /// Fails with `NotFavorite` if the ID is absent
    async fn remove(&self, id: ToolId) -> FavoritesResult<()>;

    async fn contains(&self, id: ToolId) -> FavoritesResult<bool>;

    async fn ids(&self) -> FavoritesResult<HashSet<ToolId>>;

    async fn len(&self) -> FavoritesResult<usize>;
}

/// Process-lifetime favorites, lost on restart
#[derive(Debug, Default)]
pub struct MemoryFavoritesStore {
    ids: RwLock<HashSet<ToolId>>,
}

impl MemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn insert(&self, id: ToolId) -> FavoritesResult<()> {
        let mut ids = self.ids.write().await;
        if !ids.insert(id) {
            return Err(FavoriteError::AlreadyFavorite(id));
        }
        Ok(())
    }

    async fn remove(&self, id: ToolId) -> FavoritesResult<()> {
        let mut ids = self.ids.write().await;
        if !ids.remove(&id) {
            return Err(FavoriteError::NotFavorite(id));
        }
        Ok(())
    }

    async fn contains(&self, id: ToolId) -> FavoritesResult<bool> {
        Ok(self.ids.read().await.contains(&id))
    }

    async fn ids(&self) -> FavoritesResult<HashSet<ToolId>> {
        Ok(self.ids.read().await.clone())
    }

    async fn len(&self) -> FavoritesResult<usize> {
        Ok(self.ids.read().await.len())
    }
}

/// Favorites service handed to request handlers
#[derive(Clone)]
pub struct Favorites {
    catalog: Arc<CatalogStore>,
    store: Arc<dyn FavoritesStore>,
}

impl Favorites {
    pub fn new(catalog: Arc<CatalogStore>, store: Arc<dyn FavoritesStore>) -> Self {
        Self { catalog, store }
    }

    /// Service over a fresh in-memory store
    pub fn in_memory(catalog: Arc<CatalogStore>) -> Self {
        Self::new(catalog, Arc::new(MemoryFavoritesStore::new()))
    }

    /// Favorited tools in catalog order
    pub async fn list(&self) -> FavoritesResult<Vec<Tool>> {
        let ids = self.store.ids().await?;
        Ok(self
            .catalog
            .all()
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }

    pub async fn add(&self, id: ToolId) -> FavoritesResult<()> {
        if !self.catalog.contains(id) {
            debug!("Rejected favorite for unknown tool {}", id);
            return Err(FavoriteError::UnknownTool(id));
        }
        self.store.insert(id).await?;
        info!("Added tool {} to favorites", id);
        Ok(())
    }

    pub async fn remove(&self, id: ToolId) -> FavoritesResult<()> {
        self.store.remove(id).await?;
        info!("Removed tool {} from favorites", id);
        Ok(())
    }

    pub async fn count(&self) -> FavoritesResult<usize> {
        self.store.len().await
    }
}
