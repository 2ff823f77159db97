use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{debug, info, warn};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use crate::api::{EventRecord, EventsClient, FetchError};
use crate::cli::Cli;
use crate::schedule::{classify, display_offset, Schedule};
use crate::ui;

/// Upper bound on how long a single key poll blocks between scans.
const KEY_POLL_INTERVAL: Duration = Duration::from_millis(250);

const FAREWELL: &str = ">> MONITOR DEACTIVATED.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Full,
    ActiveOnly,
}

/// What the monitor knows after its most recent scan.
#[derive(Debug)]
pub enum Snapshot {
    Idle,
    Ready {
        schedule: Schedule,
        scanned_at: DateTime<FixedOffset>,
    },
    Failed {
        message: String,
    },
}

pub struct App {
    client: EventsClient,
    mode: ViewMode,
    interval: Duration,
    snapshot: Snapshot,
    should_quit: bool,
}

impl App {
    pub fn new(client: EventsClient, mode: ViewMode, interval: Duration) -> App {
        App {
            client,
            mode,
            interval,
            snapshot: Snapshot::Idle,
            should_quit: false,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn refresh(&mut self) {
        let result = self.client.fetch_schedule();
        self.apply_scan(result, Utc::now());
    }

    /// Folds one scan result into the snapshot. A failed scan replaces the
    /// table with an error notice and nothing else; the loop keeps going.
    pub fn apply_scan(&mut self, result: Result<Vec<EventRecord>, FetchError>, now: DateTime<Utc>) {
        match result {
            Ok(records) => {
                let schedule = classify(records, now);
                debug!(
                    "Scan found {} active and {} upcoming events",
                    schedule.active.len(),
                    schedule.upcoming.len()
                );
                self.snapshot = Snapshot::Ready {
                    schedule,
                    scanned_at: now.with_timezone(&display_offset()),
                };
            }
            Err(err) => {
                warn!("Scan failed: {err}");
                self.snapshot = Snapshot::Failed {
                    message: err.to_string(),
                };
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let client = EventsClient::new(&cli.url)?;
    let mode = if cli.active_only {
        ViewMode::ActiveOnly
    } else {
        ViewMode::Full
    };
    let mut app = App::new(client, mode, Duration::from_secs(cli.interval));

    info!("Watching {} every {}s", cli.url, cli.interval);

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let outcome = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome?;
    println!("{FAREWELL}");
    Ok(())
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    // The first scan happens right away. Each later one is timed from the
    // end of the previous fetch, so a slow request stretches the cadence
    // instead of stacking requests.
    let mut next_scan = Instant::now();

    while !app.should_quit() {
        if Instant::now() >= next_scan {
            app.refresh();
            next_scan = Instant::now() + app.interval;
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(KEY_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key);
            }
        }
    }

    Ok(())
}
