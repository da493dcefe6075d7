//! One-shot CLI commands.

use std::path::Path;

use anyhow::{Context, bail};
use marhaba_config::import::ImportConfig;
use marhaba_config::ui::UiConfig;
use marhaba_core::{GroupingReport, SearchIndex, group_rows, interchange};
use marhaba_io::{DatasetLoader, KeyValueStore};
use marhaba_types::{Category, Dataset, Screen};

use crate::render::render_screen;

async fn group_spreadsheet(path: &Path) -> anyhow::Result<(Dataset, GroupingReport)> {
    let sheet_path = path.to_path_buf();
    let rows = tokio::task::spawn_blocking(move || marhaba_sheet::read_rows(&sheet_path))
        .await?
        .with_context(|| {
            format!(
                "Could not read the Excel file at \"{}\". Make sure the file exists and is not open elsewhere",
                path.display()
            )
        })?;
    Ok(group_rows(rows))
}

/// Spreadsheet to JSON data file
pub async fn convert(input: &Path, output: &Path) -> anyhow::Result<()> {
    tracing::info!("Starting Excel to JSON conversion");
    let (dataset, report) = group_spreadsheet(input).await?;

    let json = interchange::to_json(&dataset)?;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    tokio::fs::write(output, json)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Success!");
    println!("Processed {} rows from Excel.", report.rows);
    println!("Found {} categories.", dataset.len());
    println!("The file \"{}\" has been updated.", output.display());
    tracing::debug!("{:?}", report);
    Ok(())
}

/// Group a spreadsheet and overwrite the cached dataset
pub async fn import<S: KeyValueStore>(
    mut loader: DatasetLoader<S>,
    import: &ImportConfig,
    path: &Path,
    password: Option<&str>,
) -> anyhow::Result<()> {
    if !import.accepts(password) {
        bail!("Incorrect password.");
    }

    let (dataset, report) = group_spreadsheet(path).await?;
    loader.save(&dataset)?;

    println!(
        "Data updated successfully from {} ({} topics, {} terms).",
        path.display(),
        report.headers,
        report.terms
    );
    Ok(())
}

pub async fn search<S: KeyValueStore>(
    loader: &DatasetLoader<S>,
    query: &str,
) -> anyhow::Result<()> {
    let (dataset, _) = loader.load().await?;
    let screen = search_screen(&dataset, query);
    print!("{}", render_screen(&screen, &UiConfig::default()));
    Ok(())
}

// An empty query has nothing to restore to, so it lands on the welcome screen
fn search_screen(dataset: &[Category], query: &str) -> Screen {
    if query.is_empty() {
        return Screen::Welcome;
    }
    let index = SearchIndex::build(dataset);
    Screen::SearchResults {
        query: query.to_string(),
        results: index.search(query),
    }
}

pub fn clear_cache<S: KeyValueStore>(mut loader: DatasetLoader<S>) -> anyhow::Result<()> {
    loader.clear_cache()?;
    println!("Cached data cleared.");
    Ok(())
}
