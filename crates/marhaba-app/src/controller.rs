use kanal::{AsyncReceiver, AsyncSender};
use marhaba_config::import::ImportConfig;
use marhaba_config::ui::UiConfig;
use marhaba_io::{DatasetLoader, KeyValueStore};
use marhaba_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            app_to_ui: kanal::bounded_async(capacity),
            ui_to_app: kanal::bounded_async(capacity),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(capacity),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks<S>(
        &self,
        loader: DatasetLoader<S>,
        import: ImportConfig,
        ui: UiConfig,
    ) -> JoinSet<anyhow::Result<()>>
    where
        S: KeyValueStore + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop owns the app state
        tasks.spawn(event_loop(
            loader,
            import,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Terminal ui
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            ui,
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
