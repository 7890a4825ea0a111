use keyhop::app::{App, AppMessage};
use keyhop::background::{self, Background};
use keyhop::config::Config;
use keyhop::page::{Page, PageActivator};
use keyhop::ui::{self, OverlayView};

use color_eyre::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = match Config::default_path() {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    init_tracing(&config)?;

    let page = Page::sample(config.highlight_filter);
    let (mut app, request_rx, message_tx) = App::new(&config, page);
    let background_task = background::start(Background::new(true), request_rx, message_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = run_app(&mut terminal, &mut app).await;

    // Restore the terminal before reporting any error
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    background_task.abort();
    run_result
}

/// Set up file-based logging so the TUI never shares its screen with
/// log lines. RUST_LOG overrides the configured filter.
fn init_tracing(config: &Config) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("keyhop");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::File::create(log_dir.join("keyhop.log"))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut overlay = OverlayView::new();
    let mut activator = PageActivator::new(app.page.origin().to_string(), app.request_sender());

    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| {
                ui::render(frame, app, &overlay);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if let Some(command) = app.process_key(key, Instant::now()) {
                            if let Err(err) = app.execute_command(command, &mut overlay, &mut activator) {
                                tracing::error!("command failed: {err}");
                                app.status = Some(err.to_string());
                                app.mark_dirty();
                            }
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                }
            }

            message = recv_message(&mut message_rx) => {
                match message {
                    Some(message) => app.handle_message(message, &mut overlay),
                    // Channel closed: stop polling it
                    None => message_rx = None,
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Await the next background message, or park forever when the receiver
/// has already been taken or closed.
async fn recv_message(
    message_rx: &mut Option<mpsc::UnboundedReceiver<AppMessage>>,
) -> Option<AppMessage> {
    match message_rx {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}
