//! Terminal front-end.

mod actions;
mod app;
mod help;
mod input;
mod keymap;
mod ui;

pub use app::App;
pub use help::get_help_text;
pub use keymap::{load_config, user_config_path};

use crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};

/// Restores the terminal even if the event loop errors out.
struct Cleanup;

impl Drop for Cleanup {
    fn drop(&mut self) {
        let mut out = stdout();
        let _ = out.execute(DisableMouseCapture);
        let _ = out.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Take over the terminal and run the app until the user quits.
pub fn run(app: &mut App) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let _cleanup = Cleanup;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    log::info!("terminal ui started with keymap '{}'", app.keymap.name());
    let result = input::run_app(&mut terminal, app);
    log::info!("terminal ui stopped");
    result
}
