mod classify;
mod palette;

pub use classify::{classify, display_offset, ActiveEvent, Schedule, UpcomingEvent};
pub use palette::{category_for, color_for, Category, DEFAULT_COLOR, EVENT_COLORS};
