use crate::domain::{cell_glyph, grid_rows, week_window, Habit};
use chrono::NaiveDate;

/// Plain-text streak summary for every habit as of `date`, with that week's grid
pub fn format_streak_report(habits: &[Habit], date: NaiveDate) -> String {
    let week = week_window(date);
    let mut out = String::new();

    out.push_str(&format!("Week: {}\n", week.label()));
    if habits.is_empty() {
        out.push_str("No habits tracked.\n");
        return out;
    }

    let name_width = habits
        .iter()
        .map(|h| h.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("HABIT".len());

    out.push_str(&format!(
        "{:<width$}  {:>7}  {:>4}  M T W T F S S\n",
        "HABIT",
        "CURRENT",
        "BEST",
        width = name_width
    ));

    for (habit, row) in habits.iter().zip(grid_rows(habits, &week, date)) {
        let stats = habit.streaks(date);
        let cells: Vec<&str> = row.cells.iter().map(|c| cell_glyph(*c, false)).collect();
        out.push_str(&format!(
            "{:<width$}  {:>7}  {:>4}  {}\n",
            habit.name,
            stats.current,
            stats.best,
            cells.join(" "),
            width = name_width
        ));
    }

    out
}
