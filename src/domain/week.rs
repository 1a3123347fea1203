use chrono::{Datelike, Duration, NaiveDate};

/// Number of days shown in the grid
pub const DAYS_PER_WEEK: usize = 7;

/// Monday-to-Sunday span containing a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub dates: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekWindow {
    /// Header label, e.g. "Jan 1 - Jan 7, 2024" (year taken from the Sunday)
    pub fn label(&self) -> String {
        format!(
            "{} - {}, {}",
            self.start.format("%b %-d"),
            self.end.format("%b %-d"),
            self.end.year()
        )
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Column of `date` within the week, if it falls inside it
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|d| *d == date)
    }
}

/// Compute the week window for `date`.
///
/// Sunday belongs to the week that started the previous Monday, so the
/// offset is `weekday - 1` in Sunday-first numbering, or 6 for Sunday.
pub fn week_window(date: NaiveDate) -> WeekWindow {
    let day_of_week = date.weekday().num_days_from_sunday();
    let offset = if day_of_week == 0 { 6 } else { day_of_week - 1 };

    let start = date - Duration::days(i64::from(offset));
    let end = start + Duration::days(6);

    let mut dates = [start; DAYS_PER_WEEK];
    for (i, slot) in dates.iter_mut().enumerate() {
        *slot = start + Duration::days(i as i64);
    }

    WeekWindow { start, end, dates }
}

/// Grid column header for a day, e.g. "Mon 1"
pub fn day_header(date: NaiveDate) -> String {
    date.format("%a %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pretty_assertions::assert_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_well_formed(date: NaiveDate) {
        let window = week_window(date);
        assert_eq!(window.dates.len(), 7);
        assert_eq!(window.dates[0].weekday(), Weekday::Mon);
        assert_eq!(window.dates[0], window.start);
        assert_eq!(window.dates[6], window.end);
        for pair in window.dates.windows(2) {
            assert_eq!(pair[1], pair[0] + Duration::days(1));
        }
        assert!(window.dates.contains(&date), "{date} missing from its window");
    }

    #[test]
    fn test_midweek_date() {
        let window = week_window(ymd(2024, 5, 15)); // Wednesday
        assert_eq!(window.start, ymd(2024, 5, 13));
        assert_eq!(window.end, ymd(2024, 5, 19));
    }

    #[test]
    fn test_monday_is_its_own_start() {
        let window = week_window(ymd(2024, 5, 13));
        assert_eq!(window.start, ymd(2024, 5, 13));
    }

    #[test]
    fn test_sunday_goes_back_to_monday() {
        let window = week_window(ymd(2024, 5, 19));
        assert_eq!(window.start, ymd(2024, 5, 13));
        assert_eq!(window.end, ymd(2024, 5, 19));
    }

    #[test]
    fn test_year_boundaries() {
        // Jan 1 2025 is a Wednesday; its week starts in 2024
        let window = week_window(ymd(2025, 1, 1));
        assert_eq!(window.start, ymd(2024, 12, 30));
        assert_eq!(window.end, ymd(2025, 1, 5));

        // Dec 31 2024 (leap year) is a Tuesday
        let window = week_window(ymd(2024, 12, 31));
        assert_eq!(window.start, ymd(2024, 12, 30));
    }

    #[test]
    fn test_leap_day_week() {
        let window = week_window(ymd(2024, 2, 29));
        assert_eq!(window.start, ymd(2024, 2, 26));
        assert_eq!(window.end, ymd(2024, 3, 3));
    }

    #[test]
    fn test_every_day_of_a_year_is_well_formed() {
        let mut date = ymd(2023, 12, 1);
        while date <= ymd(2025, 1, 31) {
            assert_well_formed(date);
            date += Duration::days(1);
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(week_window(ymd(2024, 1, 3)).label(), "Jan 1 - Jan 7, 2024");
        assert_eq!(
            week_window(ymd(2025, 1, 1)).label(),
            "Dec 30 - Jan 5, 2025"
        );
    }

    #[test]
    fn test_contains_and_position() {
        let window = week_window(ymd(2024, 5, 15));
        assert!(window.contains(ymd(2024, 5, 13)));
        assert!(!window.contains(ymd(2024, 5, 20)));
        assert_eq!(window.position(ymd(2024, 5, 15)), Some(2));
        assert_eq!(window.position(ymd(2024, 5, 12)), None);
    }

    #[test]
    fn test_day_header() {
        assert_eq!(day_header(ymd(2024, 1, 1)), "Mon 1");
        assert_eq!(day_header(ymd(2024, 1, 14)), "Sun 14");
    }
}
