use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Current and best consecutive-day runs for one habit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakStats {
    pub current: u32,
    pub best: u32,
}

/// Calculate streaks for a set of completion dates as of `today`.
///
/// The best streak is a property of the history alone. The current streak
/// is zero unless the latest completion is today or yesterday.
pub fn calculate_streaks(completed: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakStats {
    let Some(&latest) = completed.iter().next_back() else {
        return StreakStats::default();
    };

    StreakStats {
        current: current_streak(completed, latest, today),
        best: best_streak(completed),
    }
}

fn best_streak(completed: &BTreeSet<NaiveDate>) -> u32 {
    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &date in completed {
        run = match previous {
            Some(prev) if date - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(date);
    }

    best
}

fn current_streak(completed: &BTreeSet<NaiveDate>, latest: NaiveDate, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);
    if latest != today && latest != yesterday {
        return 0;
    }

    let mut streak = 0;
    let mut day = latest;
    while completed.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}
