use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("schedule endpoint returned {status}")]
    Status { status: StatusCode },

    #[error("malformed schedule payload: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
}
