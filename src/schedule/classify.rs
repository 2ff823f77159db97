use chrono::{DateTime, FixedOffset, Utc};
use itertools::Itertools;
use ratatui::style::Color;

use crate::api::EventRecord;
use crate::schedule::palette::{category_for, color_for, Category};

// The schedule is published against UTC+1, so every human-facing time in
// the table uses that offset.
const DISPLAY_OFFSET_SECS: i32 = 3600;

pub fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).expect("UTC+1 is a valid offset")
}

/// An event whose window contains the current instant.
#[derive(Debug, Clone)]
pub struct ActiveEvent {
    pub name: String,
    pub map: String,
    /// Whole minutes until the window closes, rounded down.
    pub minutes_left: i64,
    pub color: Color,
    pub category: Category,
}

/// An event whose window has not opened yet.
#[derive(Debug, Clone)]
pub struct UpcomingEvent {
    pub name: String,
    pub map: String,
    /// Start instant preformatted in display time, with a `DD/MM` prefix
    /// when it falls outside the current display-time day.
    pub starts_display: String,
    pub color: Color,
    pub category: Category,
}

/// Result of one scan, already sorted by start time. Events that have
/// ended are not kept.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub active: Vec<ActiveEvent>,
    pub upcoming: Vec<UpcomingEvent>,
}

impl Schedule {
    /// Ordering for the live-only view: major events first, keeping start
    /// time order within each group.
    pub fn active_major_first(&self) -> Vec<&ActiveEvent> {
        let (major, minor): (Vec<_>, Vec<_>) = self
            .active
            .iter()
            .partition(|event| event.category == Category::Major);
        major.into_iter().chain(minor).collect()
    }
}

/// Splits the raw schedule into active and upcoming events as of `now`.
pub fn classify(records: Vec<EventRecord>, now: DateTime<Utc>) -> Schedule {
    let mut schedule = Schedule::default();

    for record in records
        .into_iter()
        .sorted_by_key(|record| record.start_time)
    {
        let color = color_for(&record.name);
        let category = category_for(&record.name);

        if record.start_time <= now && now <= record.end_time {
            schedule.active.push(ActiveEvent {
                minutes_left: (record.end_time - now).num_minutes(),
                color,
                category,
                name: record.name,
                map: record.map,
            });
        } else if record.start_time > now {
            schedule.upcoming.push(UpcomingEvent {
                starts_display: start_display(record.start_time, now),
                color,
                category,
                name: record.name,
                map: record.map,
            });
        }
    }

    schedule
}

fn start_display(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let offset = display_offset();
    let start_local = start.with_timezone(&offset);

    if start_local.date_naive() == now.with_timezone(&offset).date_naive() {
        start_local.format("%H:%M").to_string()
    } else {
        start_local.format("%d/%m %H:%M").to_string()
    }
}
