use std::ops::ControlFlow;

use kanal::{AsyncReceiver, AsyncSender};
use marhaba_config::import::ImportConfig;
use marhaba_core::AppState;
use marhaba_io::{DatasetLoader, KeyValueStore};
use marhaba_types::{AppEvent, Screen};
use tokio_util::sync::CancellationToken;

pub mod import;
pub mod navigate;

use import::handle_import;
use navigate::handle_ui_event;

/// Loads the dataset once, then handles one event at a time until quit or cancel
pub async fn event_loop<S: KeyValueStore>(
    mut loader: DatasetLoader<S>,
    import: ImportConfig,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut state = match loader.load().await {
        Ok((dataset, source)) => {
            tracing::debug!("Dataset source: {:?}", source);
            let state = AppState::initialize(dataset);
            app_to_ui_tx.send(AppEvent::ShowTopics(state.topics())).await?;
            app_to_ui_tx.send(AppEvent::Render(state.screen())).await?;
            state
        }
        Err(e) => {
            tracing::error!("Error loading data: {}", e);
            app_to_ui_tx
                .send(AppEvent::Render(Screen::LoadError(e.to_string())))
                .await?;
            AppState::default()
        }
    };
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );
        let flow = handle_events(&mut state, &mut loader, &import, &app_to_ui_tx, event).await?;
        if flow.is_break() {
            tracing::info!("[EVENT_LOOP] Quit requested");
            break;
        }
    }

    Ok(())
}

pub async fn handle_events<S: KeyValueStore>(
    state: &mut AppState,
    loader: &mut DatasetLoader<S>,
    import: &ImportConfig,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<ControlFlow<()>> {
    match event {
        AppEvent::UiEvent(event) => {
            handle_ui_event(state, event, app_to_ui_tx).await?;
        }
        AppEvent::Import { path, password } => {
            handle_import(state, loader, import, &path, password.as_deref(), app_to_ui_tx).await?;
        }
        AppEvent::Quit => return Ok(ControlFlow::Break(())),
        AppEvent::Render(_)
        | AppEvent::ShowTopics(_)
        | AppEvent::Notice(_)
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(ControlFlow::Continue(()))
}
