use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Envelope the schedule endpoint wraps its event list in.
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub data: Vec<EventRecord>,
}

/// One scheduled event exactly as the feed reports it. Timestamps on the
/// wire are epoch milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub name: String,
    pub map: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub end_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_epoch_millisecond_timestamps() {
        let json = r#"{
            "data": [
                {
                    "name": "Night Raid",
                    "map": "Dam Battlegrounds",
                    "startTime": 1767225600000,
                    "endTime": 1767229200000
                }
            ]
        }"#;

        let response: ScheduleResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.data.len(), 1);
        let record = &response.data[0];
        assert_eq!(record.name, "Night Raid");
        assert_eq!(record.map, "Dam Battlegrounds");
        assert_eq!(record.start_time.timestamp_millis(), 1767225600000);
        assert_eq!(record.end_time.timestamp_millis(), 1767229200000);
    }

    #[test]
    fn missing_data_key_means_no_events() {
        let response: ScheduleResponse = serde_json::from_str("{}").unwrap();

        assert!(response.data.is_empty());
    }

    #[test]
    fn rejects_payloads_without_timestamps() {
        let json = r#"{"data": [{"name": "Night Raid", "map": "Dam Battlegrounds"}]}"#;

        assert!(serde_json::from_str::<ScheduleResponse>(json).is_err());
    }
}
