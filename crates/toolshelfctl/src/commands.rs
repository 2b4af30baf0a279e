//! Command implementations for one-shot CLI use.

use anyhow::Result;
use owo_colors::OwoColorize;
use toolshelf_shared::filter::{apply_filters, category_counts, is_favorite};
use toolshelf_shared::view::FAVORITES_LOAD_FAILED;
use toolshelf_shared::{Tool, ToolId};
use tracing::warn;

use crate::client::ToolshelfClient;
use crate::display;

/// List tools with client-side category and search filters
pub async fn tools(
    client: &ToolshelfClient,
    category: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let all = client.list_tools(None).await?;
    let filtered = apply_filters(
        &all,
        category.as_deref().unwrap_or(""),
        search.as_deref().unwrap_or(""),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    // Hearts are cosmetic; a favorites failure should not hide the list
    let favorites = match client.list_favorites().await {
        Ok(favorites) => favorites,
        Err(e) => {
            warn!("{}: {}", FAVORITES_LOAD_FAILED, e);
            Vec::new()
        }
    };

    display::print_tools(&filtered, |t| is_favorite(t.id, &favorites), "No tools found");
    println!(
        "{}",
        format!("{} of {} tools", filtered.len(), all.len()).dimmed()
    );
    Ok(())
}

pub async fn favorites(client: &ToolshelfClient, json: bool) -> Result<()> {
    let favorites = client.list_favorites().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&favorites)?);
        return Ok(());
    }

    println!("{}", format!("My Favorites ({})", favorites.len()).bold());
    display::print_tools(&favorites, |_| true, "No favorites saved");
    Ok(())
}

pub async fn add(client: &ToolshelfClient, id: ToolId) -> Result<()> {
    let message = client.add_favorite(id).await?;
    display::print_success(&message);
    Ok(())
}

pub async fn remove(client: &ToolshelfClient, id: ToolId) -> Result<()> {
    let message = client.remove_favorite(id).await?;
    display::print_success(&message);
    Ok(())
}

pub async fn categories(client: &ToolshelfClient) -> Result<()> {
    let tools = client.list_tools(None).await?;
    for (name, count) in sorted_counts(&tools) {
        println!("  {:<24} {}", name, count);
    }
    Ok(())
}

pub async fn chart(client: &ToolshelfClient) -> Result<()> {
    let tools = client.list_tools(None).await?;
    display::print_chart(&category_counts(&tools));
    Ok(())
}

pub async fn status(client: &ToolshelfClient, json: bool) -> Result<()> {
    let health = client.health().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&health)?);
        return Ok(());
    }

    println!("{} {}", "toolshelfd".bold(), health.version);
    println!("  Endpoint:  {}", client.base_url());
    println!("  Status:    {}", health.status.green());
    println!("  Uptime:    {}s", health.uptime_seconds);
    println!("  Tools:     {}", health.tools);
    println!("  Favorites: {}", health.favorites);
    Ok(())
}

/// Category counts ordered by category name
fn sorted_counts(tools: &[Tool]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = category_counts(tools)
        .into_iter()
        .map(|c| (c.name, c.count))
        .collect();
    counts.sort();
    counts
}
