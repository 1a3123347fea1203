use crate::app::AppState;
use crate::domain::days_label;
use crate::ui::styles::{border_style, hint_style, streak_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Placeholder shown when no habit is selected
pub const STREAK_PLACEHOLDER: &str = "Select a habit to see its streak";

/// Render the streak statistics for the selected habit
pub fn render_streak_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Streaks ", title_style()));

    let Some((habit, stats)) = app.selected_streaks() else {
        let placeholder = Paragraph::new(Span::styled(STREAK_PLACEHOLDER, hint_style())).block(block);
        f.render_widget(placeholder, area);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(habit.name.clone(), title_style())),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(days_label(stats.current), streak_style()),
        ]),
        Line::from(vec![
            Span::raw("Best:    "),
            Span::styled(days_label(stats.best), streak_style()),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
