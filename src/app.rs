use crate::domain::{
    adjust_selection_after_delete, clamp_cursor, week_window, CellState, ConfirmAction, Focus,
    Habit, StreakStats, UiMode, WeekWindow, DAYS_PER_WEEK,
};
use crate::persistence::{clear_habits, load_habits, save_habits, KeyValueStore};
use chrono::{Duration, Local, NaiveDate};
use tracing::{debug, error, info};

/// Pending yes/no prompt for a destructive action
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

/// Input form state for adding habits
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub name: String,
}

/// Current local calendar date
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Main application state
pub struct AppState {
    pub habits: Vec<Habit>,
    /// Anchors which week the grid shows
    pub current_date: NaiveDate,
    /// Habit whose streak is shown
    pub selected_habit_index: Option<usize>,
    pub ui_mode: UiMode,
    pub focus: Focus,
    pub cursor_row: usize,
    pub cursor_day: usize, // Column in the week grid, 0 = Monday
    pub input_form: Option<InputFormState>,
    pub confirm: Option<ConfirmState>,
    pub status_message: Option<String>,
    pub use_emoji: bool,
    pub clock: fn() -> NaiveDate,
    store: Box<dyn KeyValueStore>,
}

impl AppState {
    /// Load habits from `store` (seeding defaults when absent) and build the state
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let habits = load_habits(store.as_ref());
        let clock: fn() -> NaiveDate = local_today;
        let today = clock();
        let cursor_day = week_window(today).position(today).unwrap_or(0);

        info!(count = habits.len(), "loaded habits");

        Self {
            habits,
            current_date: today,
            selected_habit_index: None,
            ui_mode: UiMode::Normal,
            focus: Focus::List,
            cursor_row: 0,
            cursor_day,
            input_form: None,
            confirm: None,
            status_message: None,
            use_emoji: true,
            clock,
            store,
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// The week currently shown in the grid
    pub fn week(&self) -> WeekWindow {
        week_window(self.current_date)
    }

    /// Write the whole habit list; failures are logged and surfaced in the hint bar
    fn persist(&mut self) {
        match save_habits(self.store.as_mut(), &self.habits) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                error!("failed to save habits: {e}");
                self.status_message = Some(format!("Could not save habits: {}", e));
            }
        }
    }

    /// Append a habit. Blank names are ignored.
    pub fn add_habit(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }

        debug!(name, "adding habit");
        self.habits.push(Habit::new(name));
        self.persist();
    }

    /// Ask for confirmation before deleting the habit at `index`
    pub fn request_delete(&mut self, index: usize) {
        if let Some(habit) = self.habits.get(index) {
            self.confirm = Some(ConfirmState {
                action: ConfirmAction::DeleteHabit(index),
                message: format!("Are you sure you want to delete \"{}\"?", habit.name),
            });
            self.ui_mode = UiMode::Confirm;
        }
    }

    /// Remove the habit at `index` and shift the selection to match
    pub fn delete_habit(&mut self, index: usize) {
        if index >= self.habits.len() {
            return;
        }

        let removed = self.habits.remove(index);
        debug!(name = %removed.name, index, "deleted habit");

        self.selected_habit_index = adjust_selection_after_delete(self.selected_habit_index, index);
        self.cursor_row = clamp_cursor(self.cursor_row, self.habits.len());
        self.persist();
    }

    /// Flip completion of `date` for the habit at `index`. Future dates are ignored.
    pub fn toggle_completion(&mut self, index: usize, date: NaiveDate) {
        if date > self.today() {
            return;
        }

        if let Some(habit) = self.habits.get_mut(index) {
            let done = habit.toggle(date);
            debug!(name = %habit.name, %date, done, "toggled completion");
            self.persist();
        }
    }

    /// Ask for confirmation before wiping everything
    pub fn request_clear_all(&mut self) {
        self.confirm = Some(ConfirmState {
            action: ConfirmAction::ClearAll,
            message: "WARNING: This will delete ALL habits and progress. Are you sure?".to_string(),
        });
        self.ui_mode = UiMode::Confirm;
    }

    /// Erase stored data and in-memory state
    pub fn clear_all(&mut self) {
        if let Err(e) = clear_habits(self.store.as_mut()) {
            error!("failed to erase stored habits: {e}");
            self.status_message = Some(format!("Could not erase stored habits: {}", e));
        } else {
            self.status_message = None;
        }

        info!(count = self.habits.len(), "cleared all habits");
        self.habits.clear();
        self.selected_habit_index = None;
        self.cursor_row = 0;
    }

    /// Run the pending destructive action
    pub fn confirm_pending(&mut self) {
        if let Some(confirm) = self.confirm.take() {
            match confirm.action {
                ConfirmAction::DeleteHabit(index) => self.delete_habit(index),
                ConfirmAction::ClearAll => self.clear_all(),
            }
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Drop the pending action without touching any state
    pub fn cancel_pending(&mut self) {
        self.confirm = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Show streaks for the habit at `index`
    pub fn select_habit(&mut self, index: usize) {
        if index < self.habits.len() {
            self.selected_habit_index = Some(index);
            self.cursor_row = index;
        }
    }

    pub fn previous_week(&mut self) {
        self.current_date -= Duration::days(7);
    }

    pub fn next_week(&mut self) {
        self.current_date += Duration::days(7);
    }

    /// The selected habit with its streaks, if any
    pub fn selected_streaks(&self) -> Option<(&Habit, StreakStats)> {
        let habit = self.habits.get(self.selected_habit_index?)?;
        Some((habit, habit.streaks(self.today())))
    }

    /// State of the grid cell under the cursor
    pub fn cursor_cell(&self) -> Option<(usize, NaiveDate, CellState)> {
        let habit = self.habits.get(self.cursor_row)?;
        let date = *self.week().dates.get(self.cursor_day)?;
        let state = CellState::for_day(habit.is_completed_on(date), date, self.today());
        Some((self.cursor_row, date, state))
    }

    pub fn toggle_cursor_cell(&mut self) {
        if let Some((index, date, state)) = self.cursor_cell() {
            if state.is_togglable() {
                self.toggle_completion(index, date);
            }
        }
    }

    pub fn select_at_cursor(&mut self) {
        self.select_habit(self.cursor_row);
    }

    pub fn request_delete_at_cursor(&mut self) {
        self.request_delete(self.cursor_row);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    /// Move selection up
    pub fn move_cursor_up(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_cursor_down(&mut self) {
        if self.cursor_row + 1 < self.habits.len() {
            self.cursor_row += 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_day = self.cursor_day.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_day + 1 < DAYS_PER_WEEK {
            self.cursor_day += 1;
        }
    }

    /// Start adding a new habit (opens input form)
    pub fn start_add_habit(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingHabit;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.name.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.name.pop();
        }
    }

    /// Submit input form and add the habit
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            self.add_habit(&form.name);
            self.ui_mode = UiMode::Normal;
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }
}
