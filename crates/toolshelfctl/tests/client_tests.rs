//! Client tests against a live daemon router on an ephemeral port.

use toolshelf_shared::Tool;
use toolshelfctl::client::{ClientError, ToolshelfClient};
use toolshelfctl::errors::{exit_code, EXIT_DAEMON_UNAVAILABLE};
use toolshelfd::catalog::CatalogStore;
use toolshelfd::config::CorsConfig;
use toolshelfd::server::{router, AppState};

async fn spawn_daemon() -> ToolshelfClient {
    let catalog = CatalogStore::new(vec![
        Tool::new(1, "Alpha", "NLP", "https://alpha.example"),
        Tool::new(2, "Beta", "Vision", "https://beta.example"),
    ])
    .unwrap();
    let app = router(AppState::new(catalog), &CorsConfig::default());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ToolshelfClient::new(format!("http://{}/api", addr))
}

#[tokio::test]
async fn test_list_tools_with_category() {
    let client = spawn_daemon().await;

    let all = client.list_tools(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let nlp = client.list_tools(Some("nlp")).await.unwrap();
    assert_eq!(nlp.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
}

#[tokio::test]
async fn test_favorite_round_trip() {
    let client = spawn_daemon().await;

    assert_eq!(client.add_favorite(2).await.unwrap(), "Tool added to favorites");
    let favorites = client.list_favorites().await.unwrap();
    assert_eq!(favorites.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);

    match client.add_favorite(2).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 409);
            assert_eq!(message.as_deref(), Some("Tool already in favorites"));
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    assert_eq!(client.remove_favorite(2).await.unwrap(), "Removed from favorites");
    assert!(client.list_favorites().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_not_found_errors_carry_server_message() {
    let client = spawn_daemon().await;

    match client.add_favorite(42).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message.as_deref(), Some("Tool not found"));
        }
        other => panic!("expected not found, got {:?}", other),
    }

    match client.remove_favorite(1).await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message.as_deref(), Some("Favorite not found"));
        }
        other => panic!("expected not found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_health() {
    let client = spawn_daemon().await;
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.tools, 2);
    assert_eq!(health.favorites, 0);
}

#[tokio::test]
async fn test_unreachable_daemon() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ToolshelfClient::new(format!("http://{}/api", addr));
    let err = client.list_tools(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Unavailable { .. }));
    assert_eq!(exit_code(&anyhow::Error::new(err)), EXIT_DAEMON_UNAVAILABLE);
}
