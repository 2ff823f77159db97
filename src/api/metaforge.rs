use std::time::Duration;

use log::debug;

use crate::api::error::FetchError;
use crate::api::metaforge_schema::{EventRecord, ScheduleResponse};

/// Public schedule feed for in-world events.
pub const DEFAULT_SCHEDULE_URL: &str = "https://metaforge.app/api/arc-raiders/events-schedule";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct EventsClient {
    http: reqwest::blocking::Client,
    url: String,
}

impl EventsClient {
    pub fn new(url: impl Into<String>) -> Result<EventsClient, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(EventsClient {
            http,
            url: url.into(),
        })
    }

    /// Fetches the entire published schedule, past entries included.
    pub fn fetch_schedule(&self) -> Result<Vec<EventRecord>, FetchError> {
        debug!("Fetching event schedule from {}", self.url);

        let response = self.http.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let text = response.text()?;
        let schedule: ScheduleResponse = serde_json::from_str(&text)?;

        debug!("Schedule contains {} events", schedule.data.len());
        Ok(schedule.data)
    }
}
