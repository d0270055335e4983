use std::{
    io::{self, Stdout},
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

static RESTORE_ON_PANIC: Once = Once::new();

/// Raw mode plus alternate screen for one form session. Dropping it (or
/// panicking while it is alive) gives the shell its screen back.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn open() -> Result<Self> {
        RESTORE_ON_PANIC.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave_screen();
                previous(info);
            }));
        });

        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        let terminal = execute!(stdout, EnterAlternateScreen)
            .context("failed to enter alternate screen")
            .and_then(|_| {
                Terminal::new(CrosstermBackend::new(stdout))
                    .context("failed to initialize terminal")
            });
        match terminal {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                leave_screen();
                Err(err)
            }
        }
    }

    pub fn render(&mut self, view: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal
            .draw(view)
            .map(|_| ())
            .context("failed to draw form")
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        leave_screen();
    }
}

fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
