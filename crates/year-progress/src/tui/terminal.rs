use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

pub(super) type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen, restored when dropped.
pub(super) struct TerminalGuard {
    terminal: CrosstermTerminal,
}

impl TerminalGuard {
    pub(super) fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err).context("failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                execute!(io::stdout(), LeaveAlternateScreen).ok();
                disable_raw_mode().ok();
                return Err(err).context("failed to initialise terminal");
            }
        };
        let mut guard = Self { terminal };
        guard.terminal.hide_cursor().context("failed to hide cursor")?;
        Ok(guard)
    }

    pub(super) const fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
    }
}
