//! Month grid generation.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Grid rows always start on this weekday.
pub const WEEK_START: Weekday = Weekday::Sun;

/// First and last calendar day of the month containing `reference`.
pub fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = reference - Days::new(u64::from(reference.day0()));
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// Calculate the start of the week containing the given date.
fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = days_since_week_start(date);
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

fn week_end(date: NaiveDate) -> NaiveDate {
    let remaining = 6 - days_since_week_start(date);
    date.checked_add_days(Days::new(remaining)).unwrap_or(date)
}

fn days_since_week_start(date: NaiveDate) -> u64 {
    let weekday = u64::from(date.weekday().num_days_from_sunday());
    let start = u64::from(WEEK_START.num_days_from_sunday());
    (weekday + 7 - start) % 7
}

/// Every date shown in the month view for `reference`'s month.
///
/// The range runs from the Sunday on or before the 1st to the Saturday on
/// or after the last day, so the result is always whole weeks (28, 35 or
/// 42 cells) in ascending order. Only the year and month of `reference`
/// matter.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use event_calendar::services::calendar::generate_grid;
///
/// // June 2024 starts on a Saturday and ends on a Sunday.
/// let grid = generate_grid(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
/// assert_eq!(grid.len(), 42);
/// assert_eq!(grid[0], NaiveDate::from_ymd_opt(2024, 5, 26).unwrap());
/// assert_eq!(grid[41], NaiveDate::from_ymd_opt(2024, 7, 6).unwrap());
/// ```
pub fn generate_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let (first, last) = month_bounds(reference);
    let grid_start = week_start(first);
    let grid_end = week_end(last);

    grid_start
        .iter_days()
        .take_while(|day| *day <= grid_end)
        .collect()
}

/// True when `date` is in the same month (and year) as `reference`.
pub fn is_in_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}
