use ratatui::layout::Constraint;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use crate::app::ViewMode;
use crate::schedule::{ActiveEvent, Category, Schedule, UpcomingEvent};

/// Event label column plus a narrower right-aligned status column.
pub const COLUMN_WIDTHS: [Constraint; 2] = [Constraint::Fill(3), Constraint::Fill(1)];

const SECTION_LIVE: &str = "LIVE STATUS";
const SECTION_UPCOMING: &str = "FULL UPCOMING SEQUENCE";

pub fn schedule_rows(schedule: &Schedule, mode: ViewMode) -> Vec<Row<'static>> {
    let mut rows = live_rows(schedule, mode);

    if mode == ViewMode::Full {
        rows.push(blank_row());
        rows.extend(upcoming_rows(&schedule.upcoming));
    }

    rows
}

pub fn error_rows(message: &str) -> Vec<Row<'static>> {
    vec![Row::new(vec![
        Cell::from(Span::styled(
            format!("Error fetching data: {message}"),
            Style::default().fg(Color::Red),
        )),
        Cell::from(""),
    ])]
}

pub fn placeholder_rows() -> Vec<Row<'static>> {
    vec![Row::new(vec![
        Cell::from(Span::styled(
            "    waiting for first scan...",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Cell::from(""),
    ])]
}

fn live_rows(schedule: &Schedule, mode: ViewMode) -> Vec<Row<'static>> {
    let mut rows = vec![section_row(
        SECTION_LIVE,
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )];

    let ordered: Vec<&ActiveEvent> = match mode {
        ViewMode::Full => schedule.active.iter().collect(),
        ViewMode::ActiveOnly => schedule.active_major_first(),
    };

    if ordered.is_empty() {
        rows.push(Row::new(vec![
            Cell::from(Span::styled(
                "    no active events right now",
                Style::default().add_modifier(Modifier::DIM),
            )),
            Cell::from(""),
        ]));
        return rows;
    }

    for event in ordered {
        let mut style = Style::default().fg(event.color);
        if mode == ViewMode::ActiveOnly && event.category == Category::Major {
            style = style.add_modifier(Modifier::BOLD);
        }

        rows.push(Row::new(vec![
            Cell::from(Span::styled(active_label(event), style)),
            Cell::from(Line::from(Span::styled(active_status(event), style)).right_aligned()),
        ]));
    }

    rows
}

fn upcoming_rows(upcoming: &[UpcomingEvent]) -> Vec<Row<'static>> {
    let mut rows = vec![section_row(
        SECTION_UPCOMING,
        Style::default()
            .fg(Color::Rgb(0x80, 0x80, 0x80))
            .add_modifier(Modifier::BOLD),
    )];

    for event in upcoming {
        let style = Style::default().fg(event.color);
        rows.push(Row::new(vec![
            Cell::from(Span::styled(upcoming_label(event), style)),
            Cell::from(
                Line::from(Span::styled(event.starts_display.clone(), style)).right_aligned(),
            ),
        ]));
    }

    rows
}

fn section_row(label: &'static str, style: Style) -> Row<'static> {
    Row::new(vec![Cell::from(Span::styled(label, style)), Cell::from("")])
}

fn blank_row() -> Row<'static> {
    Row::new(vec![Cell::from(""), Cell::from("")])
}

fn active_label(event: &ActiveEvent) -> String {
    format!("● {} - {}", event.name.to_uppercase(), event.map)
}

fn active_status(event: &ActiveEvent) -> String {
    format!("ACTIVE │ {}m left", event.minutes_left)
}

fn upcoming_label(event: &UpcomingEvent) -> String {
    format!("{} - {}", event.name, event.map)
}

#[cfg(test)]
mod tests {
    use crate::schedule::{color_for, DEFAULT_COLOR};

    use super::*;

    fn active(name: &str, map: &str, minutes_left: i64) -> ActiveEvent {
        ActiveEvent {
            name: name.to_string(),
            map: map.to_string(),
            minutes_left,
            color: color_for(name),
            category: crate::schedule::category_for(name),
        }
    }

    fn upcoming(name: &str, map: &str, starts: &str) -> UpcomingEvent {
        UpcomingEvent {
            name: name.to_string(),
            map: map.to_string(),
            starts_display: starts.to_string(),
            color: color_for(name),
            category: crate::schedule::category_for(name),
        }
    }

    #[test]
    fn active_labels_shout_the_name_but_not_the_map() {
        let event = active("Night Raid", "Dam Battlegrounds", 12);

        assert_eq!(active_label(&event), "● NIGHT RAID - Dam Battlegrounds");
        assert_eq!(active_status(&event), "ACTIVE │ 12m left");
    }

    #[test]
    fn upcoming_labels_keep_the_name_as_reported() {
        let event = upcoming("Lush Blooms", "Buried City", "21:30");

        assert_eq!(upcoming_label(&event), "Lush Blooms - Buried City");
    }

    #[test]
    fn full_view_stacks_both_sections_with_a_spacer() {
        let schedule = Schedule {
            active: vec![active("Night Raid", "Dam Battlegrounds", 12)],
            upcoming: vec![
                upcoming("Lush Blooms", "Buried City", "21:30"),
                upcoming("Hidden Bunker", "Spaceport", "06/03 00:30"),
            ],
        };

        // Live header, one active row, spacer, upcoming header, two rows.
        assert_eq!(schedule_rows(&schedule, ViewMode::Full).len(), 6);
    }

    #[test]
    fn live_only_view_has_no_upcoming_section() {
        let schedule = Schedule {
            active: vec![active("Night Raid", "Dam Battlegrounds", 12)],
            upcoming: vec![upcoming("Lush Blooms", "Buried City", "21:30")],
        };

        assert_eq!(schedule_rows(&schedule, ViewMode::ActiveOnly).len(), 2);
    }

    #[test]
    fn quiet_schedule_gets_a_placeholder_row() {
        let schedule = Schedule {
            active: vec![],
            upcoming: vec![upcoming("Lush Blooms", "Buried City", "21:30")],
        };

        let rows = schedule_rows(&schedule, ViewMode::Full);

        // Live header, placeholder, spacer, upcoming header, one row.
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn fetch_errors_collapse_to_one_row() {
        assert_eq!(error_rows("schedule endpoint returned 503").len(), 1);
    }

    #[test]
    fn unknown_event_names_still_get_a_color() {
        let event = active("Meteor Shower", "Stella Montis", 3);

        assert_eq!(event.color, DEFAULT_COLOR);
    }
}
