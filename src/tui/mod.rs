// Module declarations
pub mod app;
pub mod keys;
pub mod widgets;

pub use app::App;
pub use keys::{key_to_action, AppAction};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;

/// Poll interval while animating (about 60 frames per second)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval while idle
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

/// Main entry point for TUI mode
pub fn run(config: Config, today: NaiveDate) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &config, today);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let size = terminal.size()?;
    let mut area = Rect::new(0, 0, size.width, size.height);
    let mut app = App::new(config, today, area)
        .context("Terminal too small for the calendar, or today outside the configured range")?;

    loop {
        let size = terminal.size()?;
        area = Rect::new(0, 0, size.width, size.height);
        app.resize(area);
        app.tick();

        terminal.draw(|f| {
            let area = f.area();
            app.render(area, f.buffer_mut());
        })?;

        let timeout = if app.is_animating() {
            FRAME_INTERVAL
        } else {
            IDLE_INTERVAL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = key_to_action(key) {
                        app.handle_action(action);
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse, area),
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::debug!("ACTION: Quitting application");
            break;
        }
    }

    Ok(())
}
