//! Rendering - UI drawing functions for header, filters, list and chart

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use toolshelf_shared::view::{ActiveView, ViewState};

use crate::chart::chart_rows;

/// Colors for light and dark mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub selection: Color,
    pub error: Color,
    pub notice: Color,
}

impl Theme {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                bg: Color::Rgb(0x12, 0x12, 0x12),
                fg: Color::Rgb(0xEE, 0xEE, 0xEE),
                muted: Color::Rgb(0x99, 0x99, 0x99),
                accent: Color::Rgb(0x64, 0xB5, 0xF6),
                selection: Color::Rgb(0x33, 0x33, 0x33),
                error: Color::Rgb(0xFF, 0x6F, 0x6F),
                notice: Color::Rgb(0x00, 0xC4, 0x9F),
            }
        } else {
            Self {
                bg: Color::Rgb(0xF9, 0xF9, 0xF9),
                fg: Color::Rgb(0x22, 0x22, 0x22),
                muted: Color::Rgb(0x66, 0x66, 0x66),
                accent: Color::Rgb(0x19, 0x76, 0xD2),
                selection: Color::Rgb(0xCC, 0xCC, 0xCC),
                error: Color::Rgb(0xB0, 0x00, 0x20),
                notice: Color::Rgb(0x00, 0x7A, 0x5E),
            }
        }
    }
}

/// Draw the whole screen from the view state
pub fn draw_ui(f: &mut Frame, state: &ViewState) {
    let theme = Theme::for_mode(state.dark_mode);
    let size = f.size();

    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Filters
            Constraint::Length(1), // Banner
            Constraint::Min(5),    // Body
            Constraint::Length(1), // Key help
        ])
        .split(size);

    draw_header(f, chunks[0], state, &theme);
    draw_filters(f, chunks[1], state, &theme);
    draw_banner(f, chunks[2], state, &theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[3]);

    draw_tool_list(f, body[0], state, &theme);
    draw_chart(f, body[1], state, &theme);
    draw_footer(f, chunks[4], &theme);
}

fn draw_header(f: &mut Frame, area: Rect, state: &ViewState, theme: &Theme) {
    let tab = |label: String, active: bool| {
        if active {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(theme.muted))
        }
    };

    let mode = if state.dark_mode { "☀ Light Mode" } else { "☾ Dark Mode" };

    let line = Line::from(vec![
        Span::styled(
            " AI Tools Explorer ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        tab("All Tools".to_string(), state.view == ActiveView::All),
        tab(
            format!("My Favorites ({})", state.favorite_count()),
            state.view == ActiveView::Favorites,
        ),
        Span::styled(format!("  ^D {}", mode), Style::default().fg(theme.muted)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

fn draw_filters(f: &mut Frame, area: Rect, state: &ViewState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));

    if state.view == ActiveView::Favorites {
        f.render_widget(Paragraph::new(" Saved favorites").block(block), area);
        return;
    }

    let search = if state.search_term.is_empty() {
        Span::styled("Search by tool name...", Style::default().fg(theme.muted))
    } else {
        Span::styled(state.search_term.clone(), Style::default().fg(theme.fg))
    };
    let category = if state.category_filter.is_empty() {
        "All Categories".to_string()
    } else {
        state.category_filter.clone()
    };

    let line = Line::from(vec![
        Span::styled(" Search: ", Style::default().add_modifier(Modifier::BOLD)),
        search,
        Span::raw("   "),
        Span::styled("Category: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(category, Style::default().fg(theme.accent)),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_banner(f: &mut Frame, area: Rect, state: &ViewState, theme: &Theme) {
    let line = if let Some(error) = &state.error {
        Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ))
    } else if state.is_loading() {
        let what = match state.view {
            ActiveView::All => "Loading tools...",
            ActiveView::Favorites => "Loading favorites...",
        };
        Line::from(Span::styled(
            format!(" {}", what),
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        ))
    } else if let Some(notice) = &state.notice {
        Line::from(Span::styled(format!(" {}", notice), Style::default().fg(theme.notice)))
    } else {
        Line::default()
    };

    f.render_widget(Paragraph::new(line), area);
}

fn draw_tool_list(f: &mut Frame, area: Rect, state: &ViewState, theme: &Theme) {
    let title = match state.view {
        ActiveView::All => " Tools ",
        ActiveView::Favorites => " Favorites ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));

    let tools = state.visible_tools();
    if tools.is_empty() {
        let empty = match state.view {
            _ if state.is_loading() => "",
            ActiveView::All => "No tools found",
            ActiveView::Favorites => "No favorites saved",
        };
        f.render_widget(
            Paragraph::new(Span::styled(empty, Style::default().fg(theme.muted))).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = tools
        .iter()
        .map(|tool| {
            let heart = match state.view {
                ActiveView::Favorites => "✖ ",
                ActiveView::All if state.is_favorite(tool.id) => "♥ ",
                ActiveView::All => "♡ ",
            };
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(heart, Style::default().fg(theme.error)),
                    Span::styled(tool.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(vec![
                    Span::styled("   Category: ", Style::default().fg(theme.muted)),
                    Span::raw(tool.category.clone()),
                ]),
            ];
            if let Some(excerpt) = &tool.excerpt {
                lines.push(Line::from(Span::raw(format!("   {}", excerpt))));
            }
            lines.push(Line::from(Span::styled(
                format!("   {}", tool.url),
                Style::default().fg(theme.accent),
            )));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.selection));

    let mut list_state = ListState::default().with_selected(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_chart(f: &mut Frame, area: Rect, state: &ViewState, theme: &Theme) {
    let block = Block::default()
        .title(" Tools by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));

    let counts = state.chart();
    if counts.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("No data", Style::default().fg(theme.muted))).block(block),
            area,
        );
        return;
    }

    let name_width = counts
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);
    // borders + spacing + count column
    let bar_width = (area.width as usize).saturating_sub(name_width + 10).max(1);

    let lines: Vec<Line> = chart_rows(&counts, bar_width)
        .into_iter()
        .map(|row| {
            let (r, g, b) = row.color;
            Line::from(vec![
                Span::raw(format!("{:<width$} ", row.name, width = name_width)),
                Span::styled("█".repeat(row.bar), Style::default().fg(Color::Rgb(r, g, b))),
                Span::styled(format!(" {}", row.count), Style::default().fg(theme.muted)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let help = " ↑/↓ select  Enter favorite/remove  Tab category  ^L clear  ^F favorites  ^R reload  Esc quit";
    f.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(theme.muted))),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use toolshelf_shared::view::ViewAction;
    use toolshelf_shared::Tool;

    fn screen(state: &ViewState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_tools_and_chart() {
        let state = ViewState::new().reduce(ViewAction::ToolsLoaded(vec![
            Tool::new(1, "Alpha", "NLP", "https://alpha.example"),
            Tool::new(2, "Beta", "Vision", "https://beta.example"),
        ]));
        let text = screen(&state);
        assert!(text.contains("AI Tools Explorer"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("Tools by Category"));
        assert!(text.contains("Vision"));
    }

    #[test]
    fn test_renders_error_banner() {
        let state = ViewState::new().reduce(ViewAction::ToolsFailed);
        let text = screen(&state);
        assert!(text.contains("Failed to load tools"));
        assert!(text.contains("No tools found"));
        assert!(text.contains("No data"));
    }

    #[test]
    fn test_renders_empty_favorites() {
        let state = ViewState::new().reduce(ViewAction::ShowFavorites);
        assert!(screen(&state).contains("No favorites saved"));
    }

    #[test]
    fn test_dark_mode_changes_palette() {
        assert_ne!(Theme::for_mode(true), Theme::for_mode(false));
    }
}
