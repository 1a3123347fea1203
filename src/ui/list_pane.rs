use crate::app::AppState;
use crate::domain::Focus;
use crate::ui::styles::{
    border_style, cursor_style, default_style, focused_border_style, selected_habit_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the habit list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused { focused_border_style() } else { border_style() })
        .title(Span::styled(" Habits ", title_style()));

    if app.habits.is_empty() {
        let empty = Paragraph::new("No habits yet. Press 'a' to add one.").block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .habits
        .iter()
        .enumerate()
        .map(|(idx, habit)| {
            let is_selected = app.selected_habit_index == Some(idx);
            let line = create_habit_line(&habit.name, is_selected);
            let style = if focused && idx == app.cursor_row {
                cursor_style()
            } else if is_selected {
                selected_habit_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    // Selecting the cursor row keeps it scrolled into view
    let cursor = app.cursor_row.min(app.habits.len() - 1);
    let mut state = ListState::default().with_selected(Some(cursor));
    f.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

/// Create a single list line; the selected habit gets a marker
fn create_habit_line(name: &str, is_selected: bool) -> Line<'static> {
    let marker = if is_selected { "▸ " } else { "  " };
    Line::from(vec![Span::raw(marker), Span::raw(name.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_habit_line() {
        let line = create_habit_line("Read (20 mins)", false);
        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Read (20 mins)"));
        assert!(!line_str.contains("▸"));
    }

    #[test]
    fn test_selected_line_has_marker() {
        let line = create_habit_line("Exercise", true);
        assert_eq!(line.spans[0].content, "▸ ");
    }
}
