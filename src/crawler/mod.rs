pub mod controller;
pub mod errors;
pub mod fetcher;
pub mod window;

pub use controller::{DEFAULT_MAX_EMPTY_RETRIES, PaginationController, StopReason};
pub use errors::CrawlError;
pub use fetcher::{FetchError, FetchOutcome, PageFetcher};
pub use window::{CrawlWindow, WindowVerdict};

#[cfg(test)]
mod window_test;
