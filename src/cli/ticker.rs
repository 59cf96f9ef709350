//! Ticker CLI commands
//!
//! `show` prints one snapshot. `watch` re-reads the expense document and
//! reprints the snapshot on every tick until interrupted.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::config::settings::{Settings, MIN_TICK_INTERVAL_MS};
use crate::display::{format_snapshot, Formatter};
use crate::error::{BurnRateError, BurnRateResult};
use crate::services::ticker::{local_now, Ticker};
use crate::storage::Storage;

/// Options for the `watch` command
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    /// Override of the configured tick interval
    pub interval_ms: Option<u64>,
    /// Stop after this many ticks instead of running until interrupted
    pub ticks: Option<u64>,
}

impl WatchOptions {
    fn interval(&self, settings: &Settings) -> Duration {
        match self.interval_ms {
            Some(ms) => Duration::from_millis(ms.max(MIN_TICK_INTERVAL_MS)),
            None => settings.tick_interval(),
        }
    }
}

/// Print the current snapshot once
pub fn handle_show_command(storage: &Storage, settings: &Settings, json: bool) -> BurnRateResult<()> {
    let store = storage.expenses.snapshot()?;
    let now = local_now();
    let snapshot = Ticker::new(now).tick(&store, now);

    if json {
        let output = serde_json::to_string_pretty(&snapshot)?;
        println!("{}", output);
    } else {
        let formatter = Formatter::from_settings(settings);
        print!("{}", format_snapshot(&snapshot, &formatter));
    }

    Ok(())
}

/// Reprint the snapshot on every tick
pub fn handle_watch_command(
    storage: &Storage,
    settings: &Settings,
    options: WatchOptions,
) -> BurnRateResult<()> {
    let formatter = Formatter::from_settings(settings);
    let interval = options.interval(settings);
    let interactive = io::stdout().is_terminal();
    let mut ticker = Ticker::start();
    let mut count = 0u64;

    loop {
        let warning = storage.expenses.load().err();
        let store = storage.expenses.snapshot()?;
        let snapshot = ticker.tick(&store, local_now());

        let mut stdout = io::stdout();
        if interactive {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
                .map_err(|e| BurnRateError::Io(format!("Failed to clear terminal: {}", e)))?;
        }
        if let Some(e) = warning {
            writeln!(stdout, "Warning: {}", e)?;
        }
        write!(stdout, "{}", format_snapshot(&snapshot, &formatter))?;
        stdout.flush()?;

        count += 1;
        if options.ticks.is_some_and(|limit| count >= limit) {
            return Ok(());
        }

        thread::sleep(interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_override_is_clamped() {
        let settings = Settings::default();

        let options = WatchOptions {
            interval_ms: Some(10),
            ticks: None,
        };
        assert_eq!(options.interval(&settings), Duration::from_millis(100));

        let options = WatchOptions::default();
        assert_eq!(options.interval(&settings), Duration::from_millis(1000));
    }
}
