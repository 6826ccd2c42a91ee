//! Temporal organization of events for the month grid and list views.
//!
//! Everything here is a pure function of its arguments: the reference
//! month, the day under test, or an explicit `now`. Nothing reads the
//! clock or touches storage, so the views can call these freely and the
//! tests can pin every instant.

pub mod buckets;
pub mod day_matcher;
pub mod grid;
pub mod sorting;

pub use buckets::{classify, TimeBucket, TimeBuckets};
pub use day_matcher::{events_for_day, is_event_on_day};
pub use grid::{generate_grid, is_in_month, month_bounds, WEEK_START};
pub use sorting::{filter_events, sort_by_start};
