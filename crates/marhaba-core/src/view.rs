use marhaba_types::{Category, Term};

use crate::search::SearchIndex;

/// What the viewer is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Welcome,
    AllCategories,
    SingleCategory(Category),
    SearchResults { query: String, results: Vec<Term> },
}

/// Views that are restored once a search is cleared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RestoreView {
    #[default]
    Welcome,
    AllCategories,
    SingleCategory(Category),
}

impl From<RestoreView> for ViewState {
    fn from(view: RestoreView) -> Self {
        match view {
            RestoreView::Welcome => ViewState::Welcome,
            RestoreView::AllCategories => ViewState::AllCategories,
            RestoreView::SingleCategory(category) => ViewState::SingleCategory(category),
        }
    }
}

/// Tracks the current view and the one to go back to after searching
#[derive(Debug, Clone)]
pub struct ViewTracker {
    current: ViewState,
    restore: Option<RestoreView>,
}

impl Default for ViewTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTracker {
    /// State right after a dataset has been loaded
    pub fn new() -> Self {
        Self {
            current: ViewState::Welcome,
            restore: Some(RestoreView::Welcome),
        }
    }

    pub fn current(&self) -> &ViewState {
        &self.current
    }

    pub fn restore_view(&self) -> Option<&RestoreView> {
        self.restore.as_ref()
    }

    pub fn show_all(&mut self) -> &ViewState {
        self.remember(RestoreView::AllCategories)
    }

    pub fn select_category(&mut self, category: Category) -> &ViewState {
        self.remember(RestoreView::SingleCategory(category))
    }

    /// A non-empty query shows results without touching the restore view;
    /// an empty one goes back to it.
    pub fn search(&mut self, query: &str, index: &SearchIndex) -> &ViewState {
        if query.is_empty() {
            let restored = self.restore.clone().unwrap_or_default();
            tracing::debug!("Search cleared, restoring {:?}", restored);
            self.current = restored.into();
        } else {
            let results = index.search(query);
            tracing::debug!("Search '{}' matched {} terms", query, results.len());
            self.current = ViewState::SearchResults {
                query: query.to_string(),
                results,
            };
        }
        &self.current
    }

    fn remember(&mut self, view: RestoreView) -> &ViewState {
        self.restore = Some(view.clone());
        self.current = view.into();
        &self.current
    }
}
