use chrono::NaiveDate;

use crate::shared::datetime::YearMonth;

/// What the controller does with one dated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowVerdict {
    /// Dated in the target month; surface it.
    Emit,
    /// Dated outside both months; skip it and keep scanning.
    Discard,
    /// Dated in the boundary month; the crawl has walked past its window.
    Stop,
}

/// The month window a delta crawl emits.
///
/// `target` is the most recently completed calendar month; `boundary` is
/// the month before it. Upstream rows arrive in descending date order, so
/// the first boundary-month row proves the target month is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlWindow {
    target: YearMonth,
    boundary: YearMonth,
    target_prefix: String,
    boundary_prefix: String,
}

impl CrawlWindow {
    pub fn new(target: YearMonth, boundary: YearMonth) -> Self {
        Self {
            target_prefix: target.wire_prefix(),
            boundary_prefix: boundary.wire_prefix(),
            target,
            boundary,
        }
    }

    /// Window for a crawl started today: last month, bounded by the month
    /// before it.
    pub fn for_today(today: NaiveDate) -> Self {
        let target = YearMonth::of(today).prev();
        Self::new(target, target.prev())
    }

    pub fn target(&self) -> YearMonth {
        self.target
    }

    pub fn boundary(&self) -> YearMonth {
        self.boundary
    }

    /// Classifies a resolved Gregorian date string.
    ///
    /// The boundary check runs first: a row dated in the boundary month
    /// must stop the stream even if the prefixes were ever to overlap.
    pub fn classify(&self, date: &str) -> WindowVerdict {
        if date.starts_with(&self.boundary_prefix) {
            WindowVerdict::Stop
        } else if date.starts_with(&self.target_prefix) {
            WindowVerdict::Emit
        } else {
            WindowVerdict::Discard
        }
    }
}
