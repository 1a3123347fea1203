use crate::app::AppState;
use crate::domain::ConfirmAction;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the confirmation prompt for destructive actions
pub fn render_confirm_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(confirm) = &app.confirm {
        let modal_area = create_modal_area(area);

        // Clear the area behind the modal
        f.render_widget(Clear, modal_area);

        let title = match confirm.action {
            ConfirmAction::DeleteHabit(_) => " Delete Habit ",
            ConfirmAction::ClearAll => " Clear All ",
        };

        let lines = vec![
            Line::raw(""),
            Line::raw(format!("  {}", confirm.message)),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [y]", modal_title_style()),
                Span::raw(" Yes  "),
                Span::styled("[n]", modal_title_style()),
                Span::raw(" No"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
