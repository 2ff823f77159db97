mod table;

use chrono::{DateTime, FixedOffset};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Table};
use ratatui::Frame;

use crate::app::{App, Snapshot, ViewMode};

const BANNER: &str = "A R C  M O N I T O R";

/// Draws the whole monitor: banner, schedule table, last-scan caption.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(banner(app.mode()), chunks[0]);

    let rows = match app.snapshot() {
        Snapshot::Idle => table::placeholder_rows(),
        Snapshot::Ready { schedule, .. } => table::schedule_rows(schedule, app.mode()),
        Snapshot::Failed { message } => table::error_rows(message),
    };
    frame.render_widget(Table::new(rows, table::COLUMN_WIDTHS), chunks[1]);

    if let Snapshot::Ready { scanned_at, .. } = app.snapshot() {
        frame.render_widget(caption(scanned_at), chunks[2]);
    }
}

fn banner(mode: ViewMode) -> Paragraph<'static> {
    let tag = match mode {
        ViewMode::Full => " │ EVENT SCHEDULE",
        ViewMode::ActiveOnly => " │ LIVE ONLY",
    };

    Paragraph::new(Line::from(vec![
        Span::styled(
            BANNER,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(tag, Style::default().add_modifier(Modifier::DIM)),
    ]))
    .alignment(Alignment::Center)
}

fn caption(scanned_at: &DateTime<FixedOffset>) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        format!(
            "LAST SCAN: {} │ press q to quit",
            scanned_at.format("%H:%M:%S")
        ),
        Style::default().add_modifier(Modifier::DIM),
    ))
}
