use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::decoder::RestartToken;

/// Outcome of one page fetch, after transport-level retries are resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// A body worth handing to the decoder.
    Body(Value),
    /// The service answered with an empty shell (its challenge/blocking
    /// response); the same page may succeed on a re-request.
    Empty,
}

/// Transport failures the fetch collaborator could not absorb.
///
/// These are terminal for the pagination stream; the controller never
/// retries them itself.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("service kept answering status {status} after {attempts} attempts")]
    RetriesExhausted { status: u16, attempts: u32 },

    #[error("service answered non-retryable status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("response body is not JSON: {0}")]
    NonJsonBody(String),
}

/// Capability that fetches one result page per call.
///
/// Passing the previous page's restart token requests the next page; `None`
/// requests the first. Implementations own HTTP transport, headers, and
/// status-code-level retry; the controller only ever sees a decodable body
/// or the empty indicator.
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&mut self, token: Option<&RestartToken>) -> Result<FetchOutcome, FetchError>;
}
