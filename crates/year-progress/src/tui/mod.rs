//! Terminal dashboard: terminal lifecycle, frame loop and layout.

use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info};
use tracing::subscriber::NoSubscriber;
use year_progress_core::{BarGlyphs, BarRenderer, snapshot};

use crate::clock::{Clock, SystemClock};
use crate::config::LaunchConfig;

mod canvas;
mod constants;
mod terminal;
mod view;

use self::constants::TICK_RATE_MS;
use self::terminal::TerminalGuard;
use self::view::Dashboard;

/// Input observed between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The user asked to close the dashboard.
    Quit,
    /// The terminal was resized.
    Resize,
    /// Nothing relevant happened before the timeout.
    Idle,
}

/// Blocking source of [`HostEvent`]s.
pub trait EventSource {
    /// Wait up to `timeout` for the next event.
    fn wait(&mut self, timeout: Duration) -> Result<HostEvent>;
}

/// Reads events from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn wait(&mut self, timeout: Duration) -> Result<HostEvent> {
        if !event::poll(timeout).context("failed to poll terminal events")? {
            return Ok(HostEvent::Idle);
        }
        let evt = event::read().context("failed to read terminal event")?;
        Ok(classify(&evt))
    }
}

/// Map a terminal event to what the frame loop cares about.
pub fn classify(evt: &CrosstermEvent) -> HostEvent {
    match evt {
        CrosstermEvent::Key(key) if is_quit_key(key) => HostEvent::Quit,
        CrosstermEvent::Resize(..) => HostEvent::Resize,
        _ => HostEvent::Idle,
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Launch the dashboard.
///
/// Without a terminal on stdout the bars are printed once as plain text.
pub fn run(config: LaunchConfig) -> Result<()> {
    let mut clock = SystemClock::new();
    let dashboard = Dashboard::new(BarRenderer::new(BarGlyphs::default()), config);

    // Surface invalid lifespan input before the terminal is touched.
    let first = snapshot(clock.now(), dashboard.lifespan())?;

    if !io::stdout().is_terminal() {
        debug!("stdout is not a terminal, printing once");
        for line in dashboard.plain_lines(&first) {
            println!("{}", line.trim_end());
        }
        return Ok(());
    }

    info!(lifespan = dashboard.lifespan().is_some(), "starting dashboard");
    let mut guard = TerminalGuard::enter()?;
    tracing::subscriber::with_default(NoSubscriber::default(), || {
        run_event_loop(guard.terminal_mut(), &dashboard, &mut clock, &mut CrosstermEvents)
    })
}

fn run_event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &Dashboard,
    clock: &mut impl Clock,
    events: &mut impl EventSource,
) -> Result<()> {
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    loop {
        let snap = snapshot(clock.now(), dashboard.lifespan())?;
        terminal.draw(|f| dashboard.draw(f, &snap))?;

        match events.wait(tick_rate)? {
            HostEvent::Quit => break,
            HostEvent::Resize => terminal.autoresize()?,
            HostEvent::Idle => {}
        }
    }

    Ok(())
}
