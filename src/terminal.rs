use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use tracing::warn;

/// Runs `restore` exactly once when dropped, on every exit path.
pub struct RestoreOnDrop<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreOnDrop<F> {
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show) {
        warn!(error = %err, "failed to leave alternate screen");
    }
}

/// Raw mode plus alternate screen. The guard must outlive the terminal; it
/// puts the tty back even when setup fails halfway.
pub fn setup() -> io::Result<(RestoreOnDrop<fn()>, Terminal<CrosstermBackend<Stdout>>)> {
    enable_raw_mode()?;
    let guard = RestoreOnDrop::new(restore_terminal as fn());
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((guard, terminal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn restore_runs_once_on_drop() {
        let calls = Cell::new(0);
        {
            let _guard = RestoreOnDrop::new(|| calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn restore_runs_when_setup_bails_early() {
        let calls = Cell::new(0);
        let failing_setup = || -> io::Result<()> {
            let _guard = RestoreOnDrop::new(|| calls.set(calls.get() + 1));
            Err(io::Error::other("no tty"))
        };

        assert!(failing_setup().is_err());
        assert_eq!(calls.get(), 1);
    }
}
