//! Terminal setup and teardown
//!
//! Raw mode and the alternate screen are restored on normal exit and from
//! the panic hook.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::services::Dashboard;
use crate::storage::KeyValueStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui<S: KeyValueStore>(dashboard: Dashboard<S>, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(dashboard, settings);
    tracing::info!(cards = app.dashboard.cards().len(), "tui started");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    tracing::info!("tui stopped");
    result
}

fn event_loop<S: KeyValueStore>(terminal: &mut Tui, app: &mut App<'_, S>) -> Result<()> {
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &*app))?;

        match events.next()? {
            Event::Tick => app.tick(),
            event => handle_event(app, event)?,
        }
    }
    Ok(())
}
