//! Ordering and count checks over data pulled from the page.
//! Nothing here touches the browser.

use crate::error::{E2eError, Result};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Date format of vacancy publication dates, e.g. `08.06.2025`
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = E2eError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(E2eError::InvalidSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

/// Parse the date of every `(title, date)` entry.
///
/// Empty dates are skipped; dates in another format are skipped with a
/// warning. The returned dates keep the entry order.
pub fn extract_dates(entries: &[(&str, &str)]) -> Vec<NaiveDate> {
    entries
        .iter()
        .filter(|(_, date)| !date.is_empty())
        .filter_map(|(title, date)| match NaiveDate::parse_from_str(date.trim(), DATE_FORMAT) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                log::warn!("Invalid date format: {} in vacancy {}", date, title);
                None
            }
        })
        .collect()
}

/// Adjacent pairs respect `order`; equal dates are accepted either way
pub fn is_sorted(dates: &[NaiveDate], order: SortOrder) -> bool {
    dates.windows(2).all(|pair| match order {
        SortOrder::Desc => pair[0] >= pair[1],
        SortOrder::Asc => pair[0] <= pair[1],
    })
}

/// Fail unless the entries are ordered by date.
///
/// The error lists every entry as `"{n}) {title} - {date}"`, numbered from 1.
pub fn check_sorted_by_date(entries: &[(&str, &str)], order: SortOrder) -> Result<()> {
    log::info!("Checking that vacancies are sorted by publication date: '{}'", order);
    let dates = extract_dates(entries);
    if is_sorted(&dates, order) {
        return Ok(());
    }

    let current_order = entries
        .iter()
        .enumerate()
        .map(|(i, (title, date))| format!("{}) {} - {}", i + 1, title, date))
        .collect::<Vec<_>>()
        .join("\n");
    let message = format!("Vacancies are not sorted in '{}' order.\nCurrent order:\n{}", order, current_order);
    log::error!("{}", message);
    Err(E2eError::AssertionFailed(message))
}

/// Fail when `actual` exceeds `expected_max`
pub fn check_count_at_most(what: &str, actual: usize, expected_max: usize) -> Result<()> {
    if actual <= expected_max {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!(
            "{} has {} elements, more than the expected maximum of {}",
            what, actual, expected_max
        )))
    }
}
