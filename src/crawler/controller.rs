use tracing::{info, warn};

use crate::crawler::errors::CrawlError;
use crate::crawler::fetcher::{FetchOutcome, PageFetcher};
use crate::crawler::window::{CrawlWindow, WindowVerdict};
use crate::decoder::{ColumnLayout, PageBody, PageDecoder, Record, RestartToken};
use crate::sink::RecordSink;

/// Default cap on consecutive empty responses for one page.
pub const DEFAULT_MAX_EMPTY_RETRIES: u32 = 50;

/// Why a pagination stream ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A row dated in the boundary month proved the window is exhausted.
    BoundaryReached,
    /// The service returned no restart token; there are no further pages.
    NoMorePages,
}

/// Drives one pagination stream: fetch, decode, window-filter, emit.
///
/// Requests are strictly sequential; each page's restart token is the only
/// state carried to the next request, and the decoder cache never outlives
/// a page. One controller serves one query; concurrent queries get
/// independent instances.
pub struct PaginationController<'a, F> {
    fetcher: F,
    layout: &'a ColumnLayout,
    window: CrawlWindow,
    max_empty_retries: u32,
}

impl<'a, F: PageFetcher> PaginationController<'a, F> {
    pub fn new(fetcher: F, layout: &'a ColumnLayout, window: CrawlWindow) -> Self {
        Self {
            fetcher,
            layout,
            window,
            max_empty_retries: DEFAULT_MAX_EMPTY_RETRIES,
        }
    }

    pub fn with_max_empty_retries(mut self, max_empty_retries: u32) -> Self {
        self.max_empty_retries = max_empty_retries;
        self
    }

    /// Runs the stream to completion, pushing each emitted record into the
    /// sink in discovery order.
    ///
    /// A record is only surfaced once fully decoded and window-checked;
    /// decode of a page is all-or-nothing, so a malformed page emits
    /// nothing.
    pub async fn run<S: RecordSink>(mut self, sink: &mut S) -> Result<StopReason, CrawlError> {
        let mut token: Option<RestartToken> = None;
        let mut empty_streak: u32 = 0;
        let mut page_index: u64 = 0;

        loop {
            match self.fetcher.fetch(token.as_ref()).await? {
                FetchOutcome::Empty => {
                    empty_streak += 1;
                    if empty_streak > self.max_empty_retries {
                        warn!(
                            target: "moj::crawl",
                            attempts = empty_streak,
                            page = page_index,
                            "Giving up on blocked page"
                        );
                        return Err(CrawlError::ExhaustedRetries {
                            attempts: empty_streak,
                        });
                    }
                    info!(
                        target: "moj::crawl",
                        attempt = empty_streak,
                        max = self.max_empty_retries,
                        page = page_index,
                        "Empty response, re-requesting the same page"
                    );
                }
                FetchOutcome::Body(body) => {
                    empty_streak = 0;
                    let page = PageBody::parse(&body, self.layout)?;
                    let rows = PageDecoder::new(self.layout, page.dictionaries())
                        .decode(page.rows())?;

                    let mut emitted = 0usize;
                    for row in rows {
                        let record = Record::from_resolved(row)?;
                        match self.window.classify(&record.date) {
                            WindowVerdict::Stop => {
                                info!(
                                    target: "moj::crawl",
                                    page = page_index,
                                    emitted,
                                    boundary = %self.window.boundary(),
                                    "Reached the boundary month, stopping"
                                );
                                return Ok(StopReason::BoundaryReached);
                            }
                            WindowVerdict::Emit => {
                                sink.accept(record)?;
                                emitted += 1;
                            }
                            WindowVerdict::Discard => {}
                        }
                    }

                    match page.into_restart_token() {
                        Some(next) => {
                            info!(
                                target: "moj::crawl",
                                page = page_index,
                                emitted,
                                "Page done, following restart token"
                            );
                            token = Some(next);
                            page_index += 1;
                        }
                        None => {
                            info!(
                                target: "moj::crawl",
                                page = page_index,
                                emitted,
                                "No restart token, pagination exhausted"
                            );
                            return Ok(StopReason::NoMorePages);
                        }
                    }
                }
            }
        }
    }
}
