use super::streak::{calculate_streaks, StreakStats};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A tracked activity and the days it was done
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    /// Completion days, stored as `YYYY-MM-DD` strings
    #[serde(default)]
    pub completed: BTreeSet<NaiveDate>,
}

impl Habit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: BTreeSet::new(),
        }
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed.contains(&date)
    }

    /// Flip membership of `date`. Returns true if the day is now completed.
    pub fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.completed.remove(&date) {
            false
        } else {
            self.completed.insert(date);
            true
        }
    }

    pub fn streaks(&self, today: NaiveDate) -> StreakStats {
        calculate_streaks(&self.completed, today)
    }
}

/// Habits shown on first launch
pub fn default_habits() -> Vec<Habit> {
    vec![
        Habit::new("Exercise"),
        Habit::new("Read (20 mins)"),
        Habit::new("Drink Water (2L)"),
    ]
}
