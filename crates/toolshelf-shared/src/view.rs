//! View State - Client UI state as an immutable value
//!
//! Every screen the client draws is derived from [`ViewState`]. State only
//! changes through [`ViewState::reduce`], which consumes the old state and
//! an action and returns the next state. No I/O happens here; the caller
//! performs fetches and feeds their outcome back in as actions.

use crate::filter::{self, CategoryCount};
use crate::tool::{Tool, ToolId};

pub const TOOLS_LOAD_FAILED: &str = "Failed to load tools";
pub const FAVORITES_LOAD_FAILED: &str = "Failed to load favorites";
pub const FAVORITE_SAVE_FAILED: &str = "Failed to save favorite";
pub const FAVORITE_REMOVE_FAILED: &str = "Failed to remove favorite";

/// Which list is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    All,
    Favorites,
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    ToolsRequested,
    ToolsLoaded(Vec<Tool>),
    ToolsFailed,
    FavoritesRequested,
    FavoritesLoaded(Vec<Tool>),
    FavoritesFailed,
    SetCategory(String),
    SetSearch(String),
    ClearFilters,
    /// Step to the next category in sorted order, wrapping through "all"
    CycleCategory,
    ToggleDarkMode,
    ShowAll,
    ShowFavorites,
    FavoriteChangeRequested,
    /// Carries the server's confirmation message
    FavoriteAdded(String),
    FavoriteRemoved(String),
    ActionFailed(String),
    SelectNext,
    SelectPrevious,
}

/// Client UI state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub tools: Vec<Tool>,
    pub favorites: Vec<Tool>,
    pub category_filter: String,
    pub search_term: String,
    pub dark_mode: bool,
    pub view: ActiveView,
    pub loading_tools: bool,
    pub loading_favorites: bool,
    /// Error banner, cleared when the next request starts
    pub error: Option<String>,
    /// Last confirmation from the server
    pub notice: Option<String>,
    /// Cursor into [`ViewState::visible_tools`]
    pub selected: usize,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action and return the resulting state
    pub fn reduce(self, action: ViewAction) -> Self {
        let mut next = self;

        match action {
            ViewAction::ToolsRequested => {
                next.loading_tools = true;
                next.error = None;
            }
            ViewAction::ToolsLoaded(tools) => {
                next.loading_tools = false;
                next.tools = tools;
            }
            ViewAction::ToolsFailed => {
                next.loading_tools = false;
                next.error = Some(TOOLS_LOAD_FAILED.to_string());
            }
            ViewAction::FavoritesRequested => {
                next.loading_favorites = true;
                next.error = None;
            }
            ViewAction::FavoritesLoaded(favorites) => {
                next.loading_favorites = false;
                next.favorites = favorites;
            }
            ViewAction::FavoritesFailed => {
                next.loading_favorites = false;
                next.error = Some(FAVORITES_LOAD_FAILED.to_string());
            }
            ViewAction::SetCategory(category) => {
                next.category_filter = category;
            }
            ViewAction::SetSearch(term) => {
                next.search_term = term;
            }
            ViewAction::ClearFilters => {
                next.category_filter.clear();
                next.search_term.clear();
                next.selected = 0;
            }
            ViewAction::CycleCategory => {
                next.category_filter = next_category(&next.tools, &next.category_filter);
                next.selected = 0;
            }
            ViewAction::ToggleDarkMode => {
                next.dark_mode = !next.dark_mode;
            }
            ViewAction::ShowAll => {
                if next.view != ActiveView::All {
                    next.view = ActiveView::All;
                    next.selected = 0;
                }
            }
            ViewAction::ShowFavorites => {
                if next.view != ActiveView::Favorites {
                    next.view = ActiveView::Favorites;
                    next.selected = 0;
                }
            }
            ViewAction::FavoriteChangeRequested => {
                next.error = None;
                next.notice = None;
            }
            ViewAction::FavoriteAdded(message) | ViewAction::FavoriteRemoved(message) => {
                next.notice = Some(message);
            }
            ViewAction::ActionFailed(message) => {
                next.notice = None;
                next.error = Some(message);
            }
            ViewAction::SelectNext => {
                next.selected = next.selected.saturating_add(1);
            }
            ViewAction::SelectPrevious => {
                next.selected = next.selected.saturating_sub(1);
            }
        }

        next.clamp_selection();
        next
    }

    /// Tools shown in the active view
    pub fn visible_tools(&self) -> Vec<Tool> {
        match self.view {
            ActiveView::All => {
                filter::apply_filters(&self.tools, &self.category_filter, &self.search_term)
            }
            ActiveView::Favorites => self.favorites.clone(),
        }
    }

    pub fn selected_tool(&self) -> Option<Tool> {
        self.visible_tools().into_iter().nth(self.selected)
    }

    pub fn is_favorite(&self, tool_id: ToolId) -> bool {
        filter::is_favorite(tool_id, &self.favorites)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Per-category counts over the whole catalog
    pub fn chart(&self) -> Vec<CategoryCount> {
        filter::category_counts(&self.tools)
    }

    /// Category choices for the selector, sorted
    pub fn categories(&self) -> Vec<String> {
        filter::categories(&self.tools)
    }

    /// Whether the active view is waiting on its data
    pub fn is_loading(&self) -> bool {
        match self.view {
            ActiveView::All => self.loading_tools,
            ActiveView::Favorites => self.loading_favorites,
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tools().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// "" -> first category -> ... -> last category -> ""
fn next_category(tools: &[Tool], current: &str) -> String {
    let categories = filter::categories(tools);
    if current.is_empty() {
        return categories.into_iter().next().unwrap_or_default();
    }

    let position = categories
        .iter()
        .position(|c| c.to_lowercase() == current.to_lowercase());

    match position {
        Some(i) => categories.get(i + 1).cloned().unwrap_or_default(),
        None => categories.into_iter().next().unwrap_or_default(),
    }
}
