use std::path::PathBuf;

use crate::types::{Category, Dataset, Term};

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Group a fresh spreadsheet and replace the loaded dataset
    Import {
        path: PathBuf,
        password: Option<String>,
    },
    Render(Screen),
    ShowTopics(Vec<String>),
    Notice(String),
    BackendReady,
    Quit,
}

/// User intents coming from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ShowAll,
    ListTopics,
    /// Zero-based position in the topic list
    SelectCategory(usize),
    SearchText(String),
}

/// What the presentation layer should draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    AllCategories(Dataset),
    SingleCategory(Category),
    SearchResults { query: String, results: Vec<Term> },
    LoadError(String),
}
