//! Plain-text rendering of screens for the terminal.

use std::fmt::Write;

use marhaba_config::ui::UiConfig;
use marhaba_types::{Category, Screen, Term};

const HEADERS: [&str; 3] = ["English", "Pronunciation", "Arabic"];

fn width(text: &str) -> usize {
    text.chars().count()
}

pub fn render_terms(terms: &[Term]) -> String {
    let mut widths = HEADERS.map(width);
    for term in terms {
        widths[0] = widths[0].max(width(&term.english));
        widths[1] = widths[1].max(width(&term.pronunciation));
        widths[2] = widths[2].max(width(&term.arabic));
    }

    let mut out = String::new();
    let mut line = |cells: [&str; 3]| {
        let _ = writeln!(
            out,
            "  {:<w0$}  {:<w1$}  {:>w2$}",
            cells[0],
            cells[1],
            cells[2],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
        );
    };

    line(HEADERS);
    for term in terms {
        line([term.english.as_str(), term.pronunciation.as_str(), term.arabic.as_str()]);
    }
    out
}

fn render_category(category: &Category, out: &mut String) {
    let _ = writeln!(out, "== {} ({} terms) ==", category.name, category.terms.len());
    if let Some(image) = &category.image {
        let _ = writeln!(out, "   [{}]", image);
    }
    out.push_str(&render_terms(&category.terms));
}

pub fn render_screen(screen: &Screen, ui: &UiConfig) -> String {
    let mut out = String::new();
    match screen {
        Screen::Welcome => {
            let _ = writeln!(out, "{}", ui.welcome_title);
            let _ = writeln!(out, "{}", ui.welcome_message);
        }
        Screen::AllCategories(dataset) => {
            if dataset.is_empty() {
                out.push_str("No topics found.\n");
            }
            for category in dataset.iter().filter(|c| !c.terms.is_empty()) {
                render_category(category, &mut out);
                out.push('\n');
            }
        }
        Screen::SingleCategory(category) => render_category(category, &mut out),
        Screen::SearchResults { query, results } => {
            if results.is_empty() {
                let _ = writeln!(out, "No terms found for \"{}\".", query);
            } else {
                let _ = writeln!(
                    out,
                    "== Search results for \"{}\" ({} found) ==",
                    query,
                    results.len()
                );
                out.push_str(&render_terms(results));
            }
        }
        Screen::LoadError(message) => {
            out.push_str(
                "Error: Could not load the learning data. Please check the data file and try again.\n",
            );
            let _ = writeln!(out, "({})", message);
        }
    }
    out
}

pub fn render_topics(topics: &[String]) -> String {
    let mut out = String::from("Topics:\n");
    for (position, topic) in topics.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {}", position + 1, topic);
    }
    out
}
