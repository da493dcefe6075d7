use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use marhaba_config::ui::UiConfig;
use marhaba_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::input::Command;
use crate::render::{render_screen, render_topics};

/// Blocking stdin reads live on their own thread so shutdown never waits on them
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (line_tx, line_rx) = kanal::bounded::<String>(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            }
        }
        tracing::debug!("Input reader stopping");
    });
    line_rx.to_async()
}

/// Terminal front end: renders app events and turns input lines into events
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    ui: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let lines = spawn_stdin_reader();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("UI loop stopping");
                break;
            }
            event = app_to_ui_rx.recv() => {
                show(event?, &ui);
            }
            line = lines.recv() => {
                let Ok(line) = line else {
                    // stdin closed
                    ui_to_app_tx.send(AppEvent::Quit).await?;
                    break;
                };
                match line.parse::<Command>() {
                    Ok(Command::Ui(event)) => ui_to_app_tx.send(AppEvent::UiEvent(event)).await?,
                    Ok(Command::Import { path, password }) => {
                        println!("Importing {} ...", path.display());
                        ui_to_app_tx.send(AppEvent::Import { path, password }).await?;
                    }
                    Ok(Command::Help) => println!("{}", Command::help()),
                    Ok(Command::Quit) => {
                        ui_to_app_tx.send(AppEvent::Quit).await?;
                        break;
                    }
                    Err(e) => println!("{e}. Type \\h for help."),
                }
            }
        }
    }

    Ok(())
}

fn show(event: AppEvent, ui: &UiConfig) {
    match event {
        AppEvent::Render(screen) => {
            tracing::debug!("[UI] Rendering {:?}", std::mem::discriminant(&screen));
            println!("{}", render_screen(&screen, ui));
        }
        AppEvent::ShowTopics(topics) => println!("{}", render_topics(&topics)),
        AppEvent::Notice(message) => println!("{message}"),
        AppEvent::BackendReady => println!("Type \\h for help."),
        _ => {}
    }
}
