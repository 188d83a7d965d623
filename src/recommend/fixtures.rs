// Shared test helpers: a pinned clock and a one-call analyzer runner

use crate::recommend::{AnalysisContext, Analyzer, Recommendation};
use crate::snapshot::{flatten, ListSnapshot};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};

/// Monday 2025-03-10, noon local time
pub fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    (fixed_now() - Duration::days(days)).with_timezone(&Utc)
}

pub fn run(analyzer: &dyn Analyzer, lists: &[ListSnapshot]) -> Vec<Recommendation> {
    let cards = flatten(lists);
    let ctx = AnalysisContext {
        cards: &cards,
        lists,
        now: fixed_now(),
    };
    analyzer.analyze(&ctx)
}

/// The classic three-column board
pub fn kanban() -> Vec<ListSnapshot> {
    vec![
        ListSnapshot::new("todo", "To Do"),
        ListSnapshot::new("doing", "In Progress"),
        ListSnapshot::new("done", "Done"),
    ]
}
