use clap::Parser;

use crate::api::DEFAULT_SCHEDULE_URL;

/// Terminal monitor for the in-world event schedule.
#[derive(Parser, Debug)]
#[command(name = "arcmon", version)]
pub struct Cli {
    /// Seconds to wait between schedule scans.
    #[arg(long, default_value_t = 30)]
    pub interval: u64,

    /// Show only the events that are live right now.
    #[arg(long)]
    pub active_only: bool,

    /// Schedule endpoint to poll.
    #[arg(long, default_value = DEFAULT_SCHEDULE_URL)]
    pub url: String,
}
