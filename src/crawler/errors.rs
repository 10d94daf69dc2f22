use thiserror::Error;

use crate::crawler::fetcher::FetchError;
use crate::decoder::DecodeError;
use crate::sink::SinkError;

/// Terminal failures of one pagination stream.
///
/// Sibling streams (other regions, other queries) are unaffected; there is
/// no mechanism to resume a stream mid-page.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("page fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("page decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("no usable page after {attempts} consecutive empty responses")]
    ExhaustedRetries { attempts: u32 },

    #[error("record sink failed: {0}")]
    Sink(#[from] SinkError),
}
