//! Terminal setup and the dashboard event loop.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use medlocator::controller::LocatorController;
use medlocator::map::ModelMapView;

use crate::error::CliError;
use crate::ui::{render, LocatorApp};

const TICK_RATE: Duration = Duration::from_millis(50);

/// Run the interactive dashboard until the user quits.
pub fn run(locator: LocatorController<ModelMapView>) -> Result<(), CliError> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, LocatorApp::new(locator));

    // Always restore the terminal, even when the loop failed.
    let restore = restore_terminal(&mut terminal);
    result?;
    restore?;
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, CliError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), CliError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: LocatorApp,
) -> Result<(), CliError> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Windows terminals also report key release events.
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit() {
            info!("Dashboard closed by user");
            return Ok(());
        }
    }
}
