use marhaba_types::{Dataset, Screen};

use crate::error::CoreError;
use crate::search::SearchIndex;
use crate::view::{ViewState, ViewTracker};

/// Everything the viewer knows, owned by the single event-loop task
#[derive(Default)]
pub struct AppState {
    dataset: Dataset,
    index: SearchIndex,
    view: ViewTracker,
    query: String,
}

impl AppState {
    /// First load: Welcome view
    pub fn initialize(dataset: Dataset) -> Self {
        let index = SearchIndex::build(&dataset);
        tracing::info!(
            "Loaded {} topics with {} terms",
            dataset.len(),
            index.len()
        );

        Self {
            dataset,
            index,
            view: ViewTracker::new(),
            query: String::new(),
        }
    }

    /// Replace the dataset after an import; switches to the all-topics view
    pub fn reinitialize(&mut self, dataset: Dataset) -> &ViewState {
        *self = Self::initialize(dataset);
        self.view.show_all()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view(&self) -> &ViewState {
        self.view.current()
    }

    pub fn topics(&self) -> Vec<String> {
        self.dataset.iter().map(|c| c.name.clone()).collect()
    }

    pub fn show_all(&mut self) -> &ViewState {
        self.query.clear();
        self.view.show_all()
    }

    /// Out-of-range positions leave the state untouched
    pub fn select_category(&mut self, index: usize) -> Result<&ViewState, CoreError> {
        let category = self
            .dataset
            .get(index)
            .cloned()
            .ok_or(CoreError::UnknownCategory {
                index,
                count: self.dataset.len(),
            })?;

        self.query.clear();
        Ok(self.view.select_category(category))
    }

    pub fn search(&mut self, query: &str) -> &ViewState {
        self.query = query.to_string();
        self.view.search(query, &self.index)
    }

    /// Render payload for the current view
    pub fn screen(&self) -> Screen {
        match self.view.current() {
            ViewState::Welcome => Screen::Welcome,
            ViewState::AllCategories => Screen::AllCategories(self.dataset.clone()),
            ViewState::SingleCategory(category) => Screen::SingleCategory(category.clone()),
            ViewState::SearchResults { query, results } => Screen::SearchResults {
                query: query.clone(),
                results: results.clone(),
            },
        }
    }
}
