use crate::app::AppState;
use crate::domain::{Focus, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingHabit => handle_input_form_mode(app, key),
        UiMode::Confirm => handle_confirm_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),

        // Week navigation
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::PageUp => app.previous_week(),
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::PageDown => app.next_week(),

        // Select habit (list) or toggle day (grid)
        KeyCode::Enter | KeyCode::Char(' ') => match app.focus {
            Focus::List => app.select_at_cursor(),
            Focus::Grid => app.toggle_cursor_cell(),
        },

        // Delete habit under cursor
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_at_cursor(),

        // Add habit
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_habit(),

        // Clear everything
        KeyCode::Char('C') => app.request_clear_all(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys in input form mode (adding a habit)
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the confirmation prompt
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_pending(),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use chrono::NaiveDate;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap()
    }

    fn create_test_app() -> AppState {
        let mut app = AppState::new(Box::new(MemoryStore::default()));
        app.clock = fixed_today;
        app.current_date = fixed_today();
        app
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_submits_new_habit() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Meditate q");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.habits.last().unwrap().name, "Meditate");
    }

    #[test]
    fn test_quit_key_is_text_inside_form() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = create_test_app();
        let quit = handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(quit);
    }

    #[test]
    fn test_delete_flow_with_confirmation() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.ui_mode, UiMode::Confirm);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.habits.len(), 3);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.habits.len(), 2);
        assert_eq!(app.habits[1].name, "Drink Water (2L)");
    }

    #[test]
    fn test_enter_selects_in_list_and_toggles_in_grid() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_habit_index, Some(1));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Grid);
        app.cursor_day = 2; // Wednesday = today
        press(&mut app, KeyCode::Enter);
        assert!(app.habits[1].is_completed_on(fixed_today()));
    }

    #[test]
    fn test_week_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.current_date, NaiveDate::from_ymd_opt(2024, 5, 8).unwrap());
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.current_date, NaiveDate::from_ymd_opt(2024, 5, 22).unwrap());
    }

    #[test]
    fn test_clear_all_flow() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.habits.len(), 3);

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.habits.is_empty());
    }
}
