//! Event Loop - Main TUI entry point and event handling

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use toolshelf_shared::view::{ActiveView, ViewAction, ViewState};
use toolshelf_shared::ToolId;

use super::render::draw_ui;
use super::tasks;
use crate::client::ToolshelfClient;

/// What a key press asks the loop to do
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    Quit,
    Dispatch(ViewAction),
    AddFavorite(ToolId),
    RemoveFavorite(ToolId),
    Reload,
    Ignore,
}

/// Run the TUI
pub async fn run(client: ToolshelfClient) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, client).await;

    // Restore terminal (always attempt cleanup)
    let cleanup_result = restore_terminal(&mut terminal);

    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: ToolshelfClient,
) -> Result<()> {
    let mut state = ViewState::new();
    let (tx, mut rx) = mpsc::channel(32);

    tasks::load_tools(client.clone(), tx.clone());
    tasks::load_favorites(client.clone(), tx.clone());

    loop {
        while let Ok(action) = rx.try_recv() {
            dispatch(&mut state, action);
        }

        terminal.draw(|f| draw_ui(f, &state))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_outcome(&state, key) {
            KeyOutcome::Quit => break,
            KeyOutcome::Dispatch(action) => dispatch(&mut state, action),
            KeyOutcome::AddFavorite(id) => tasks::add_favorite(client.clone(), tx.clone(), id),
            KeyOutcome::RemoveFavorite(id) => {
                tasks::remove_favorite(client.clone(), tx.clone(), id)
            }
            KeyOutcome::Reload => {
                tasks::load_tools(client.clone(), tx.clone());
                tasks::load_favorites(client.clone(), tx.clone());
            }
            KeyOutcome::Ignore => {}
        }
    }

    Ok(())
}

fn dispatch(state: &mut ViewState, action: ViewAction) {
    *state = std::mem::take(state).reduce(action);
}

/// Map a key press to its effect given the current state
pub fn key_outcome(state: &ViewState, key: KeyEvent) -> KeyOutcome {
    let browsing = state.view == ActiveView::All;

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => KeyOutcome::Quit,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => KeyOutcome::Dispatch(if browsing {
            ViewAction::ShowFavorites
        } else {
            ViewAction::ShowAll
        }),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
            KeyOutcome::Dispatch(ViewAction::ToggleDarkMode)
        }
        (KeyCode::Char('l'), KeyModifiers::CONTROL) if browsing => {
            KeyOutcome::Dispatch(ViewAction::ClearFilters)
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => KeyOutcome::Reload,
        (KeyCode::Up, _) => KeyOutcome::Dispatch(ViewAction::SelectPrevious),
        (KeyCode::Down, _) => KeyOutcome::Dispatch(ViewAction::SelectNext),
        (KeyCode::Tab, _) if browsing => KeyOutcome::Dispatch(ViewAction::CycleCategory),
        (KeyCode::Enter, _) => match state.selected_tool() {
            Some(tool) if !browsing => KeyOutcome::RemoveFavorite(tool.id),
            // Already-favorited tools cannot be added again
            Some(tool) if !state.is_favorite(tool.id) => KeyOutcome::AddFavorite(tool.id),
            _ => KeyOutcome::Ignore,
        },
        (KeyCode::Backspace, _) if browsing => {
            let mut term = state.search_term.clone();
            term.pop();
            KeyOutcome::Dispatch(ViewAction::SetSearch(term))
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT)
            if browsing =>
        {
            let mut term = state.search_term.clone();
            term.push(c);
            KeyOutcome::Dispatch(ViewAction::SetSearch(term))
        }
        _ => KeyOutcome::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshelf_shared::Tool;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state() -> ViewState {
        ViewState::new()
            .reduce(ViewAction::ToolsLoaded(vec![
                Tool::new(1, "Alpha", "NLP", "u"),
                Tool::new(2, "Beta", "Vision", "u"),
            ]))
            .reduce(ViewAction::FavoritesLoaded(vec![Tool::new(2, "Beta", "Vision", "u")]))
    }

    #[test]
    fn test_typing_edits_search() {
        let s = state().reduce(ViewAction::SetSearch("al".into()));
        assert_eq!(
            key_outcome(&s, press(KeyCode::Char('p'))),
            KeyOutcome::Dispatch(ViewAction::SetSearch("alp".into()))
        );
        assert_eq!(
            key_outcome(&s, press(KeyCode::Backspace)),
            KeyOutcome::Dispatch(ViewAction::SetSearch("a".into()))
        );
    }

    #[test]
    fn test_enter_adds_unfavorited_tool() {
        assert_eq!(key_outcome(&state(), press(KeyCode::Enter)), KeyOutcome::AddFavorite(1));
    }

    #[test]
    fn test_enter_ignores_existing_favorite() {
        let s = state().reduce(ViewAction::SelectNext);
        assert_eq!(key_outcome(&s, press(KeyCode::Enter)), KeyOutcome::Ignore);
    }

    #[test]
    fn test_enter_removes_in_favorites_view() {
        let s = state().reduce(ViewAction::ShowFavorites);
        assert_eq!(key_outcome(&s, press(KeyCode::Enter)), KeyOutcome::RemoveFavorite(2));
    }

    #[test]
    fn test_favorites_view_ignores_typing() {
        let s = state().reduce(ViewAction::ShowFavorites);
        assert_eq!(key_outcome(&s, press(KeyCode::Char('x'))), KeyOutcome::Ignore);
        assert_eq!(key_outcome(&s, press(KeyCode::Tab)), KeyOutcome::Ignore);
    }

    #[test]
    fn test_control_keys() {
        let s = state();
        assert_eq!(key_outcome(&s, ctrl('c')), KeyOutcome::Quit);
        assert_eq!(key_outcome(&s, press(KeyCode::Esc)), KeyOutcome::Quit);
        assert_eq!(key_outcome(&s, ctrl('r')), KeyOutcome::Reload);
        assert_eq!(
            key_outcome(&s, ctrl('f')),
            KeyOutcome::Dispatch(ViewAction::ShowFavorites)
        );
        assert_eq!(
            key_outcome(&s, ctrl('d')),
            KeyOutcome::Dispatch(ViewAction::ToggleDarkMode)
        );
        assert_eq!(
            key_outcome(&s.reduce(ViewAction::ShowFavorites), ctrl('f')),
            KeyOutcome::Dispatch(ViewAction::ShowAll)
        );
    }
}
