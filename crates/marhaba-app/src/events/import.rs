use std::path::Path;

use kanal::AsyncSender;
use marhaba_config::import::ImportConfig;
use marhaba_core::{AppState, CoreError, group_rows};
use marhaba_io::{DatasetLoader, KeyValueStore};
use marhaba_types::{AppEvent, Row};

/// Replace the loaded dataset with a freshly grouped spreadsheet.
///
/// Failures are reported to the ui and leave the current dataset in place.
pub async fn handle_import<S: KeyValueStore>(
    state: &mut AppState,
    loader: &mut DatasetLoader<S>,
    import: &ImportConfig,
    path: &Path,
    password: Option<&str>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !import.accepts(password) {
        tracing::warn!("Import of {} refused", path.display());
        app_to_ui_tx
            .send(AppEvent::Notice(CoreError::ImportRefused.to_string()))
            .await?;
        return Ok(());
    }

    let rows = match read_sheet(path).await? {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Import failed: {}", e);
            app_to_ui_tx
                .send(AppEvent::Notice(format!("Import failed: {e}")))
                .await?;
            return Ok(());
        }
    };

    let (dataset, report) = group_rows(rows);
    tracing::info!(
        "Imported {}: {} rows, {} topics, {} terms",
        path.display(),
        report.rows,
        report.headers,
        report.terms
    );

    if let Err(e) = loader.save(&dataset) {
        tracing::warn!("Imported data not cached: {}", e);
    }

    state.reinitialize(dataset);
    app_to_ui_tx.send(AppEvent::ShowTopics(state.topics())).await?;
    app_to_ui_tx.send(AppEvent::Render(state.screen())).await?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    app_to_ui_tx
        .send(AppEvent::Notice(format!(
            "Data updated successfully from {file_name}"
        )))
        .await?;

    Ok(())
}

// Outer error: the blocking task died. Inner error: the file is unusable.
async fn read_sheet(path: &Path) -> anyhow::Result<Result<Vec<Row>, String>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => return Ok(Err(format!("{}: {e}", path.display()))),
    };
    let rows = tokio::task::spawn_blocking(move || marhaba_sheet::read_rows_from_bytes(bytes))
        .await?;
    Ok(rows.map_err(|e| e.to_string()))
}
