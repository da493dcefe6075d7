use marhaba_types::{Category, Dataset, Row, Term};

/// How a single row was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Header,
    Term,
    Ignored,
}

/// Per-pass counters; `headers + terms + ignored == rows`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingReport {
    pub rows: usize,
    pub headers: usize,
    pub terms: usize,
    pub ignored: usize,
}

impl GroupingReport {
    fn record(&mut self, kind: RowKind) {
        self.rows += 1;
        match kind {
            RowKind::Header => self.headers += 1,
            RowKind::Term => self.terms += 1,
            RowKind::Ignored => self.ignored += 1,
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Classify a row by field presence alone.
///
/// A term-shaped row only counts as a term when a category is open.
pub fn classify(row: &Row, has_category: bool) -> RowKind {
    let english = present(&row.english).is_some();
    let pronunciation = present(&row.pronunciation).is_some();
    let arabic = present(&row.arabic).is_some();

    if english && !pronunciation && !arabic {
        RowKind::Header
    } else if english && pronunciation && arabic && has_category {
        RowKind::Term
    } else {
        RowKind::Ignored
    }
}

/// Group flat spreadsheet rows into categories in a single forward pass.
///
/// Never fails: rows that are neither a header nor a term inside an open
/// category are dropped.
pub fn group_rows<I>(rows: I) -> (Dataset, GroupingReport)
where
    I: IntoIterator<Item = Row>,
{
    let mut dataset: Dataset = Vec::new();
    let mut report = GroupingReport::default();

    for row in rows {
        // The current category is always the last one pushed
        let kind = classify(&row, !dataset.is_empty());
        report.record(kind);

        match kind {
            RowKind::Header => {
                let image = row.image.filter(|image| !image.is_empty());
                let name = row.english.unwrap_or_default();
                tracing::debug!("Opening category '{}'", name);
                dataset.push(Category::new(name, image));
            }
            RowKind::Term => {
                if let Some(current) = dataset.last_mut() {
                    current.terms.push(Term {
                        english: row.english.unwrap_or_default(),
                        pronunciation: row.pronunciation.unwrap_or_default(),
                        arabic: row.arabic.unwrap_or_default(),
                    });
                }
            }
            RowKind::Ignored => {
                tracing::trace!("Ignoring row {}", report.rows);
            }
        }
    }

    tracing::debug!(
        "Grouped {} rows: {} categories, {} terms, {} ignored",
        report.rows,
        report.headers,
        report.terms,
        report.ignored
    );

    (dataset, report)
}
