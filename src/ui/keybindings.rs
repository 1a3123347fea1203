use crate::app::AppState;
use crate::ui::styles::{error_style, hint_style};
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar, or the latest status message
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(message) = &app.status_message {
        let paragraph = Paragraph::new(format!(" {}", message)).style(error_style());
        f.render_widget(paragraph, area);
        return;
    }

    let hints = Line::from(vec![
        Span::raw(" ↑/↓ move   "),
        Span::raw("←/→ day   "),
        Span::raw("Tab list/grid   "),
        Span::raw("Enter select/toggle   "),
        Span::raw("[ / ] week   "),
        Span::raw("a add   "),
        Span::raw("d delete   "),
        Span::raw("C clear all   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
