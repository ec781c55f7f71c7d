//! Kiosk Check-in
//!
//! Full-screen terminal kiosk: welcome, phone number entry and success
//! confirmation, cycling forever. Configuration comes from `KIOSK_*`
//! environment variables and diagnostics go to `kiosk.log`.

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{error, info};

use kiosk_checkin::application::{App, FlowEvent};
use kiosk_checkin::infrastructure::{init_logging, HttpCheckinBackend, KioskConfig};
use kiosk_checkin::presentation::{render_ui, InputHandler};

/// Redraw interval, so the success screen reveal advances without input.
const TICK: Duration = Duration::from_millis(100);

/// Everything the event loop can wake up for.
enum Step {
    Terminal(Option<io::Result<Event>>),
    Flow(FlowEvent),
    Tick,
}

/// Entry point for the kiosk.
///
/// Loads configuration, sets up logging and the terminal, and runs the event
/// loop on a single-threaded runtime until the operator presses Ctrl+C.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the HTTP client cannot be
/// built, or the terminal fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = KioskConfig::from_env()?;
    let _log_guard = init_logging(&config.log_dir);
    info!(backend = %config.backend_url, reset = ?config.reset_delay, "kiosk starting");

    let backend = HttpCheckinBackend::new(config.backend_url.clone(), config.request_timeout)?;
    let mut app = App::new(Arc::new(backend), config.reset_delay);

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(%err, "event loop failed");
    }
    info!("kiosk stopped");
    res
}

/// Main event loop.
///
/// Waits on terminal input, flow controller events and the redraw tick, and
/// redraws after each. Ends when the app stops running.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK);

    while app.running {
        // Clicks are hit-tested against the area the screen was drawn into.
        let area = terminal.draw(|f| render_ui(f, app))?.area;

        let step = tokio::select! {
            maybe_event = events.next() => Step::Terminal(maybe_event),
            Some(event) = app.controller.next_event() => Step::Flow(event),
            _ = ticker.tick() => Step::Tick,
        };

        match step {
            Step::Terminal(Some(Ok(Event::Key(key)))) if key.kind == KeyEventKind::Press => {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
            Step::Terminal(Some(Ok(Event::Mouse(mouse)))) => {
                InputHandler::handle_mouse_event(app, mouse, area);
            }
            Step::Terminal(Some(Err(err))) => return Err(err.into()),
            Step::Terminal(None) => app.quit(),
            Step::Terminal(Some(Ok(_))) => {}
            Step::Flow(event) => {
                app.apply(event);
            }
            Step::Tick => {}
        }
    }

    Ok(())
}
