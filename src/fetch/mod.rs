//! iTunes Search API client.

pub mod search;

pub use search::{lookup_track, search_tracks};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog request rejected with status {0}")]
    Status(reqwest::StatusCode),

    #[error("could not decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}
