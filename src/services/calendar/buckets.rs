//! Relative-time grouping for the list view.

use chrono::{DateTime, Duration, Local};

use crate::models::event::Event;

/// How far ahead "this week" reaches from `now`, inclusive.
pub const THIS_WEEK_DAYS: i64 = 7;

/// Relative-time group an event is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    Today,
    Tomorrow,
    ThisWeek,
    Later,
    Past,
}

impl TimeBucket {
    /// Order in which the list view shows the groups.
    pub const DISPLAY_ORDER: [TimeBucket; 5] = [
        TimeBucket::Today,
        TimeBucket::Tomorrow,
        TimeBucket::ThisWeek,
        TimeBucket::Later,
        TimeBucket::Past,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeBucket::Today => "Today",
            TimeBucket::Tomorrow => "Tomorrow",
            TimeBucket::ThisWeek => "This Week",
            TimeBucket::Later => "Later",
            TimeBucket::Past => "Past",
        }
    }

    /// Bucket for an event starting at `start`, relative to `now`.
    ///
    /// Checked in order, first match wins:
    /// 1. `Past`: starts on a calendar day before today (earlier today is
    ///    not past).
    /// 2. `Today`, then 3. `Tomorrow`, by calendar day.
    /// 4. `ThisWeek`: within `[now, now + 7 days]`.
    /// 5. `Later`: anything further out.
    ///
    /// Only the start matters: an event that began yesterday and is still
    /// running is `Past`.
    pub fn for_start(start: DateTime<Local>, now: DateTime<Local>) -> Self {
        let today = now.date_naive();
        let start_day = start.date_naive();

        if start_day < today {
            return TimeBucket::Past;
        }
        if start_day == today {
            return TimeBucket::Today;
        }
        if today.succ_opt() == Some(start_day) {
            return TimeBucket::Tomorrow;
        }

        let within_week = now
            .checked_add_signed(Duration::days(THIS_WEEK_DAYS))
            .map_or(true, |limit| start <= limit);
        if start >= now && within_week {
            TimeBucket::ThisWeek
        } else {
            TimeBucket::Later
        }
    }
}

/// Events partitioned by [`TimeBucket`]; each group keeps input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeBuckets<'a> {
    pub today: Vec<&'a Event>,
    pub tomorrow: Vec<&'a Event>,
    pub this_week: Vec<&'a Event>,
    pub later: Vec<&'a Event>,
    pub past: Vec<&'a Event>,
}

impl<'a> TimeBuckets<'a> {
    pub fn get(&self, bucket: TimeBucket) -> &[&'a Event] {
        match bucket {
            TimeBucket::Today => &self.today,
            TimeBucket::Tomorrow => &self.tomorrow,
            TimeBucket::ThisWeek => &self.this_week,
            TimeBucket::Later => &self.later,
            TimeBucket::Past => &self.past,
        }
    }

    fn push(&mut self, bucket: TimeBucket, event: &'a Event) {
        match bucket {
            TimeBucket::Today => self.today.push(event),
            TimeBucket::Tomorrow => self.tomorrow.push(event),
            TimeBucket::ThisWeek => self.this_week.push(event),
            TimeBucket::Later => self.later.push(event),
            TimeBucket::Past => self.past.push(event),
        }
    }

    /// Groups in display order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (TimeBucket, &[&'a Event])> + '_ {
        TimeBucket::DISPLAY_ORDER
            .into_iter()
            .map(move |bucket| (bucket, self.get(bucket)))
    }

    /// Total number of events across all groups.
    pub fn len(&self) -> usize {
        self.iter().map(|(_, events)| events.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `events` into relative-time groups as of `now`.
///
/// Every event lands in exactly one group.
pub fn classify<'a, I>(events: I, now: DateTime<Local>) -> TimeBuckets<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut buckets = TimeBuckets::default();
    for event in events {
        buckets.push(TimeBucket::for_start(event.start, now), event);
    }

    log::debug!(
        "Classified {} events: {} today, {} tomorrow, {} this week, {} later, {} past",
        buckets.len(),
        buckets.today.len(),
        buckets.tomorrow.len(),
        buckets.this_week.len(),
        buckets.later.len(),
        buckets.past.len()
    );
    buckets
}
