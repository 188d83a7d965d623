/// Scoring helpers shared by the analyzers
///
/// Day arithmetic and the mapping from "how many days" to a priority.

use crate::recommend::Priority;
use chrono::{DateTime, Days, Local, TimeZone, Utc};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Scorer for day counts and priorities
pub struct Scorer;

impl Scorer {
    /// Whole days from `earlier` to `later`, floored
    ///
    /// Negative when `earlier` is actually in the future.
    pub fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
        (later - earlier).num_milliseconds().div_euclid(MS_PER_DAY)
    }

    /// Priority for a suggested due date `days` out
    ///
    /// # Arguments
    /// * `days` - Days until the suggested date
    /// * `high_max` - Up to this many days is high
    /// * `medium_max` - Up to this many days is medium, beyond is low
    pub fn priority_for_days(days: u64, high_max: u64, medium_max: u64) -> Priority {
        if days <= high_max {
            Priority::High
        } else if days <= medium_max {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Last millisecond of the local day `days` after `now`
    ///
    /// Returns `None` only when the date is out of chrono's range.
    pub fn end_of_day_after(now: DateTime<Local>, days: u64) -> Option<DateTime<Utc>> {
        let date = now.date_naive().checked_add_days(Days::new(days))?;
        let naive = date.and_hms_milli_opt(23, 59, 59, 999)?;
        let local = Local.from_local_datetime(&naive).earliest()?;
        Some(local.with_timezone(&Utc))
    }
}
