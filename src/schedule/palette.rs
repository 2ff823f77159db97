use ratatui::style::Color;

/// Display color for every event name the feed currently emits. Names not
/// listed here fall back to [`DEFAULT_COLOR`].
pub const EVENT_COLORS: [(&str, Color); 10] = [
    ("Prospecting Probes", Color::Rgb(0x5f, 0x5f, 0x5f)),
    ("Electromagnetic Storm", Color::Rgb(0x87, 0x87, 0x87)),
    ("Husk Graveyard", Color::Rgb(0xb2, 0xb2, 0xb2)),
    ("Lush Blooms", Color::Rgb(0xda, 0xda, 0xda)),
    ("Hidden Bunker", Color::White),
    ("Locked Gate", Color::Rgb(0xff, 0xff, 0xff)),
    ("Night Raid", Color::Rgb(0xff, 0xaf, 0x00)),
    ("Harvester", Color::Rgb(0xff, 0x87, 0x00)),
    ("Matriarch", Color::Rgb(0xff, 0x5f, 0x00)),
    ("Launch Tower Loot", Color::Rgb(0xd7, 0x00, 0x00)),
];

pub const DEFAULT_COLOR: Color = Color::Rgb(0x9e, 0x9e, 0x9e);

/// The headline events. These get bold emphasis and jump the queue in the
/// live-only view.
const MAJOR_EVENTS: [&str; 4] = ["Night Raid", "Harvester", "Matriarch", "Launch Tower Loot"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Major,
    Minor,
}

pub fn color_for(name: &str) -> Color {
    EVENT_COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

pub fn category_for(name: &str) -> Category {
    if MAJOR_EVENTS.contains(&name) {
        Category::Major
    } else {
        Category::Minor
    }
}
