//! Background API calls.
//!
//! Each task turns one request into view actions and sends them to the
//! event loop. A closed channel means the TUI exited; results are dropped.

use tokio::sync::mpsc::Sender;
use toolshelf_shared::view::{ViewAction, FAVORITE_REMOVE_FAILED, FAVORITE_SAVE_FAILED};
use toolshelf_shared::ToolId;
use tracing::debug;

use crate::client::{ClientError, ToolshelfClient};

pub fn load_tools(client: ToolshelfClient, tx: Sender<ViewAction>) {
    tokio::spawn(async move {
        let _ = tx.send(ViewAction::ToolsRequested).await;
        let action = match client.list_tools(None).await {
            Ok(tools) => ViewAction::ToolsLoaded(tools),
            Err(e) => {
                debug!("Tool fetch failed: {}", e);
                ViewAction::ToolsFailed
            }
        };
        let _ = tx.send(action).await;
    });
}

pub fn load_favorites(client: ToolshelfClient, tx: Sender<ViewAction>) {
    tokio::spawn(async move {
        fetch_favorites(&client, &tx).await;
    });
}

pub fn add_favorite(client: ToolshelfClient, tx: Sender<ViewAction>, id: ToolId) {
    tokio::spawn(async move {
        let _ = tx.send(ViewAction::FavoriteChangeRequested).await;
        match client.add_favorite(id).await {
            Ok(message) => {
                let _ = tx.send(ViewAction::FavoriteAdded(message)).await;
                fetch_favorites(&client, &tx).await;
            }
            Err(ClientError::Api {
                message: Some(message),
                ..
            }) => {
                let _ = tx.send(ViewAction::ActionFailed(message)).await;
            }
            Err(e) => {
                debug!("Add favorite failed: {}", e);
                let _ = tx
                    .send(ViewAction::ActionFailed(FAVORITE_SAVE_FAILED.to_string()))
                    .await;
            }
        }
    });
}

pub fn remove_favorite(client: ToolshelfClient, tx: Sender<ViewAction>, id: ToolId) {
    tokio::spawn(async move {
        let _ = tx.send(ViewAction::FavoriteChangeRequested).await;
        match client.remove_favorite(id).await {
            Ok(message) => {
                let _ = tx.send(ViewAction::FavoriteRemoved(message)).await;
                fetch_favorites(&client, &tx).await;
            }
            Err(e) => {
                debug!("Remove favorite failed: {}", e);
                let _ = tx
                    .send(ViewAction::ActionFailed(FAVORITE_REMOVE_FAILED.to_string()))
                    .await;
            }
        }
    });
}

async fn fetch_favorites(client: &ToolshelfClient, tx: &Sender<ViewAction>) {
    let _ = tx.send(ViewAction::FavoritesRequested).await;
    let action = match client.list_favorites().await {
        Ok(favorites) => ViewAction::FavoritesLoaded(favorites),
        Err(e) => {
            debug!("Favorites fetch failed: {}", e);
            ViewAction::FavoritesFailed
        }
    };
    let _ = tx.send(action).await;
}
