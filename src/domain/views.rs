use super::enums::CellState;
use super::habit::Habit;
use super::week::WeekWindow;
use chrono::NaiveDate;

/// A habit's row in the week grid
#[derive(Debug, Clone)]
pub struct GridRow {
    /// Index into the habits list
    pub habit_index: usize,
    pub cells: [CellState; 7],
}

/// Build the grid rows for every habit over `window`
pub fn grid_rows(habits: &[Habit], window: &WeekWindow, today: NaiveDate) -> Vec<GridRow> {
    habits
        .iter()
        .enumerate()
        .map(|(habit_index, habit)| {
            let mut cells = [CellState::Incomplete; 7];
            for (cell, date) in cells.iter_mut().zip(window.dates.iter()) {
                *cell = CellState::for_day(habit.is_completed_on(*date), *date, today);
            }
            GridRow { habit_index, cells }
        })
        .collect()
}

/// Choose cell glyph for a grid cell
pub fn cell_glyph(state: CellState, use_emoji: bool) -> &'static str {
    if use_emoji {
        match state {
            CellState::Completed => "●",
            CellState::Future => "·",
            CellState::Incomplete => "○",
        }
    } else {
        // ASCII fallback
        match state {
            CellState::Completed => "x",
            CellState::Future => ".",
            CellState::Incomplete => "o",
        }
    }
}

/// Pluralize a day count, e.g. "1 day", "3 days"
pub fn days_label(count: u32) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", count)
    }
}
