mod error;
mod metaforge;
mod metaforge_schema;

pub use error::FetchError;
pub use metaforge::{EventsClient, DEFAULT_SCHEDULE_URL};
pub use metaforge_schema::{EventRecord, ScheduleResponse};
