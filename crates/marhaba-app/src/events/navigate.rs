use kanal::AsyncSender;
use marhaba_core::AppState;
use marhaba_types::{AppEvent, UiEvent};

pub async fn handle_ui_event(
    state: &mut AppState,
    event: UiEvent,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match event {
        UiEvent::ShowAll => {
            state.show_all();
        }
        UiEvent::ListTopics => {
            app_to_ui_tx.send(AppEvent::ShowTopics(state.topics())).await?;
            return Ok(());
        }
        UiEvent::SelectCategory(index) => {
            if let Err(e) = state.select_category(index) {
                tracing::warn!("Ignoring topic selection: {}", e);
                app_to_ui_tx.send(AppEvent::Notice(e.to_string())).await?;
                return Ok(());
            }
        }
        UiEvent::SearchText(query) => {
            state.search(&query);
        }
    }

    app_to_ui_tx.send(AppEvent::Render(state.screen())).await?;
    Ok(())
}
