use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub list_area: Rect,
    pub streak_area: Rect,
    pub grid_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Split horizontally
///   - Left (35%): habit list above the streak pane
///   - Right (65%): week grid
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // List + streaks
            Constraint::Percentage(65), // Grid
        ])
        .split(main_chunks[1]);

    let left_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Habit list
            Constraint::Length(6), // Streak pane
        ])
        .split(horizontal_split[0]);

    MainLayout {
        keybindings_area: main_chunks[0],
        list_area: left_split[0],
        streak_area: left_split[1],
        grid_area: horizontal_split[1],
    }
}

/// Create centered modal area (for prompts and the add form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(9),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
