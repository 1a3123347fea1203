use chrono::NaiveDate;

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingHabit,
    Confirm, // Blocking yes/no prompt for destructive actions
}

/// Which pane receives cursor keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Grid,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::List => Focus::Grid,
            Focus::Grid => Focus::List,
        }
    }
}

/// Destructive action waiting for confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteHabit(usize),
    ClearAll,
}

/// Visual state of one habit/day cell in the week grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Completed,
    /// After today; not togglable
    Future,
    Incomplete,
}

impl CellState {
    /// Completion wins over future so stray stored dates still show up
    pub fn for_day(completed: bool, date: NaiveDate, today: NaiveDate) -> Self {
        if completed {
            Self::Completed
        } else if date > today {
            Self::Future
        } else {
            Self::Incomplete
        }
    }

    pub fn is_togglable(&self) -> bool {
        !matches!(self, Self::Future)
    }
}
