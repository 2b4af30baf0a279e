//! Terminal output for one-shot commands.

use owo_colors::OwoColorize;
use toolshelf_shared::filter::CategoryCount;
use toolshelf_shared::Tool;

use crate::chart::chart_rows;

/// Width of chart bars in cells
pub const CHART_WIDTH: usize = 40;

/// Multi-line card for a single tool
pub fn format_tool(tool: &Tool, favorite: bool) -> String {
    let heart = if favorite { "❤️ " } else { "🤍" };
    let mut out = format!(
        "{} {} {}\n    {} {}\n",
        heart,
        tool.name.bold(),
        format!("#{}", tool.id).dimmed(),
        "Category:".bold(),
        tool.category
    );
    if let Some(excerpt) = &tool.excerpt {
        out.push_str(&format!("    {}\n", excerpt));
    }
    out.push_str(&format!("    {}\n", tool.url.cyan().underline()));
    out
}

pub fn print_tools(tools: &[Tool], is_favorite: impl Fn(&Tool) -> bool, empty: &str) {
    if tools.is_empty() {
        println!("{}", empty.dimmed());
        return;
    }
    for tool in tools {
        println!("{}", format_tool(tool, is_favorite(tool)));
    }
}

/// Horizontal bar chart, one line per category
pub fn format_chart(counts: &[CategoryCount]) -> Vec<String> {
    let rows = chart_rows(counts, CHART_WIDTH);
    let name_width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);

    rows.iter()
        .map(|row| {
            let (r, g, b) = row.color;
            format!(
                "{:<width$}  {} {} ({:.0}%)",
                row.name,
                "█".repeat(row.bar).truecolor(r, g, b),
                row.count,
                row.percent,
                width = name_width
            )
        })
        .collect()
}

pub fn print_chart(counts: &[CategoryCount]) {
    println!("{}", "Tools by Category".bold());
    let lines = format_chart(counts);
    if lines.is_empty() {
        println!("{}", "No data".dimmed());
    }
    for line in lines {
        println!("  {}", line);
    }
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}
