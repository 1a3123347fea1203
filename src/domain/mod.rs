pub mod enums;
pub mod habit;
pub mod selection;
pub mod streak;
pub mod views;
pub mod week;

pub use enums::{CellState, ConfirmAction, Focus, UiMode};
pub use habit::{default_habits, Habit};
pub use selection::{adjust_selection_after_delete, clamp_cursor};
pub use streak::StreakStats;
pub use views::{cell_glyph, days_label, grid_rows};
pub use week::{day_header, week_window, WeekWindow, DAYS_PER_WEEK};
