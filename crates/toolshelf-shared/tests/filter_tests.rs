//! Tests for client-side filtering and category aggregation.

use toolshelf_shared::filter::{apply_filters, categories, category_counts, is_favorite, CategoryCount};
use toolshelf_shared::Tool;

fn catalog() -> Vec<Tool> {
    vec![
        Tool::new(1, "ChatGPT", "NLP", "https://chat.example"),
        Tool::new(2, "Midjourney", "Image Generation", "https://mj.example"),
        Tool::new(3, "Claude", "NLP", "https://claude.example"),
        Tool::new(4, "Whisper", "Audio", "https://whisper.example"),
        Tool::new(5, "Stable Diffusion", "image generation", "https://sd.example"),
    ]
}

fn ids(tools: &[Tool]) -> Vec<i64> {
    tools.iter().map(|t| t.id).collect()
}

#[test]
fn test_empty_filters_are_identity() {
    let tools = catalog();
    assert_eq!(apply_filters(&tools, "", ""), tools);
}

#[test]
fn test_empty_input_yields_empty_output() {
    assert!(apply_filters(&[], "NLP", "chat").is_empty());
}

#[test]
fn test_category_filter_ignores_case() {
    let tools = catalog();
    assert_eq!(ids(&apply_filters(&tools, "nlp", "")), vec![1, 3]);
    assert_eq!(ids(&apply_filters(&tools, "IMAGE GENERATION", "")), vec![2, 5]);
}

#[test]
fn test_category_filter_is_exact_not_substring() {
    let tools = catalog();
    assert!(apply_filters(&tools, "Image", "").is_empty());
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let tools = catalog();
    assert_eq!(ids(&apply_filters(&tools, "", "GPT")), vec![1]);
    assert_eq!(ids(&apply_filters(&tools, "", "i")), vec![2, 4, 5]);
}

#[test]
fn test_filters_combine_with_and() {
    let tools = catalog();
    assert_eq!(ids(&apply_filters(&tools, "nlp", "cl")), vec![3]);
    assert!(apply_filters(&tools, "audio", "chat").is_empty());
}

#[test]
fn test_filter_output_preserves_input_order() {
    let mut tools = catalog();
    tools.reverse();
    assert_eq!(ids(&apply_filters(&tools, "", "i")), vec![5, 4, 2]);
}

#[test]
fn test_category_counts_example() {
    let tools = vec![
        Tool::new(1, "x", "A", "u"),
        Tool::new(2, "y", "A", "u"),
        Tool::new(3, "z", "B", "u"),
    ];
    assert_eq!(
        category_counts(&tools),
        vec![
            CategoryCount { name: "A".into(), count: 2 },
            CategoryCount { name: "B".into(), count: 1 },
        ]
    );
}

#[test]
fn test_category_counts_keep_first_seen_order_and_exact_names() {
    let counts = category_counts(&catalog());
    let names: Vec<&str> = counts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["NLP", "Image Generation", "Audio", "image generation"]);
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 5);
}

#[test]
fn test_category_counts_empty() {
    assert!(category_counts(&[]).is_empty());
}

#[test]
fn test_categories_sorted_and_distinct() {
    let tools = catalog();
    assert_eq!(
        categories(&tools),
        vec!["Audio", "Image Generation", "NLP", "image generation"]
    );
}

#[test]
fn test_is_favorite() {
    let favorites = vec![Tool::new(3, "Claude", "NLP", "u")];
    assert!(is_favorite(3, &favorites));
    assert!(!is_favorite(1, &favorites));
    assert!(!is_favorite(3, &[]));
}
