pub mod grid_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod streak_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::UiMode;
use grid_pane::render_grid_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_confirm_modal;
use ratatui::Frame;
use streak_pane::render_streak_pane;

/// Main render function - draws the entire UI from state
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);
    render_list_pane(f, app, layout.list_area);
    render_streak_pane(f, app, layout.streak_area);
    render_grid_pane(f, app, layout.grid_area);

    match app.ui_mode {
        UiMode::AddingHabit => render_input_form(f, app, size),
        UiMode::Confirm => render_confirm_modal(f, app, size),
        UiMode::Normal => {}
    }
}
