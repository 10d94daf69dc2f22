use chrono::NaiveDate;

use crate::crawler::{CrawlWindow, WindowVerdict};
use crate::shared::datetime::YearMonth;

fn window() -> CrawlWindow {
    CrawlWindow::new(
        YearMonth {
            year: 2024,
            month: 5,
        },
        YearMonth {
            year: 2024,
            month: 4,
        },
    )
}

#[test]
fn target_month_rows_are_emitted() {
    assert_eq!(window().classify("2024/05/14"), WindowVerdict::Emit);
    assert_eq!(window().classify("2024/05/01"), WindowVerdict::Emit);
}

#[test]
fn boundary_month_rows_stop_the_stream() {
    assert_eq!(window().classify("2024/04/30"), WindowVerdict::Stop);
}

#[test]
fn rows_outside_both_months_are_discarded() {
    // Descending order means current-month rows arrive before the target
    // window; they are skipped, not stopped on.
    assert_eq!(window().classify("2024/06/02"), WindowVerdict::Discard);
    assert_eq!(window().classify("2023/05/14"), WindowVerdict::Discard);
    assert_eq!(window().classify("2024/03/31"), WindowVerdict::Discard);
}

#[test]
fn for_today_targets_the_last_completed_month() {
    let window = CrawlWindow::for_today(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    assert_eq!(
        window.target(),
        YearMonth {
            year: 2024,
            month: 5
        }
    );
    assert_eq!(
        window.boundary(),
        YearMonth {
            year: 2024,
            month: 4
        }
    );
}

#[test]
fn for_today_wraps_across_year_boundaries() {
    let january = CrawlWindow::for_today(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    assert_eq!(
        january.target(),
        YearMonth {
            year: 2023,
            month: 12
        }
    );
    assert_eq!(
        january.boundary(),
        YearMonth {
            year: 2023,
            month: 11
        }
    );

    let february = CrawlWindow::for_today(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(
        february.target(),
        YearMonth {
            year: 2024,
            month: 1
        }
    );
    assert_eq!(
        february.boundary(),
        YearMonth {
            year: 2023,
            month: 12
        }
    );
}
