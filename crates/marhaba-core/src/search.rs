use marhaba_types::{Category, Term};

use crate::preprocess::fold;

/// The lowered and folded forms of english, pronunciation and arabic.
struct IndexedTerm {
    term: Term,
    lowered: [String; 3],
    folded: [String; 3],
}

impl IndexedTerm {
    fn new(term: &Term) -> Self {
        let fields = [&term.english, &term.pronunciation, &term.arabic];
        Self {
            lowered: fields.map(|field| field.to_lowercase()),
            folded: fields.map(|field| fold(field)),
            term: term.clone(),
        }
    }

    fn matches(&self, needle: &Needle) -> bool {
        self.lowered.iter().any(|field| field.contains(&needle.lowered))
            || self.folded.iter().any(|field| field.contains(&needle.folded))
    }
}

/// A query in both forms. Folding only widens the match set: anything the
/// plain lowercase comparison finds is still found.
struct Needle {
    lowered: String,
    folded: String,
}

/// Substring search over every term of a dataset.
///
/// Terms are kept in dataset order (category order, then term order) and
/// their fields are folded once at build time.
#[derive(Default)]
pub struct SearchIndex {
    entries: Vec<IndexedTerm>,
}

impl SearchIndex {
    pub fn build(dataset: &[Category]) -> Self {
        let entries: Vec<IndexedTerm> = dataset
            .iter()
            .flat_map(|category| category.terms.iter())
            .map(IndexedTerm::new)
            .collect();

        tracing::debug!("Indexed {} terms", entries.len());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring match against english, pronunciation or arabic.
    ///
    /// An empty query matches nothing; callers restore their previous view instead.
    pub fn search(&self, query: &str) -> Vec<Term> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = Needle {
            lowered: query.to_lowercase(),
            folded: fold(query),
        };

        self.entries
            .iter()
            .filter(|entry| entry.matches(&needle))
            .map(|entry| entry.term.clone())
            .collect()
    }
}
