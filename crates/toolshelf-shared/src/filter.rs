//! Client-side filtering and aggregation over the tool catalog.
//!
//! Everything here is a pure function of its inputs. Empty filter strings
//! mean "no filter".

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::tool::{Tool, ToolId};

/// Number of tools in a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

/// Keep tools matching both the category filter and the search term.
///
/// Output is a subsequence of `tools` in the original order.
pub fn apply_filters(tools: &[Tool], category_filter: &str, search_term: &str) -> Vec<Tool> {
    tools
        .iter()
        .filter(|t| category_filter.is_empty() || t.in_category(category_filter))
        .filter(|t| search_term.is_empty() || t.name_contains(search_term))
        .cloned()
        .collect()
}

/// Count tools per category, in the order each category first appears
pub fn category_counts(tools: &[Tool]) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for tool in tools {
        match index.get(tool.category.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(tool.category.as_str(), counts.len());
                counts.push(CategoryCount {
                    name: tool.category.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// Distinct category names, sorted
pub fn categories(tools: &[Tool]) -> Vec<String> {
    tools
        .iter()
        .map(|t| t.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// True iff some favorite has this ID
pub fn is_favorite(tool_id: ToolId, favorites: &[Tool]) -> bool {
    favorites.iter().any(|fav| fav.id == tool_id)
}
