use crate::app::AppState;
use crate::domain::{cell_glyph, day_header, grid_rows, CellState, Focus, DAYS_PER_WEEK};
use crate::ui::styles::{
    border_style, completed_style, cursor_style, default_style, focused_border_style,
    future_style, incomplete_style, title_style, today_style,
};
use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

fn cell_style(state: CellState) -> Style {
    match state {
        CellState::Completed => completed_style(),
        CellState::Future => future_style(),
        CellState::Incomplete => incomplete_style(),
    }
}

/// Render the week grid: one row per habit, one column per day
pub fn render_grid_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let week = app.week();
    let today = app.today();
    let focused = app.focus == Focus::Grid;

    let mut header_cells = vec![Cell::from(Span::styled("HABIT", title_style()))];
    header_cells.extend(week.dates.iter().map(|date| {
        let style = if *date == today { today_style() } else { title_style() };
        Cell::from(Span::styled(day_header(*date), style))
    }));
    let header = Row::new(header_cells).bottom_margin(1);

    let rows: Vec<Row> = grid_rows(&app.habits, &week, today)
        .into_iter()
        .map(|row| {
            let name = app.habits[row.habit_index].name.clone();
            let mut cells = vec![Cell::from(Span::styled(name, default_style()))];

            cells.extend(row.cells.iter().enumerate().map(|(day, state)| {
                let under_cursor =
                    focused && row.habit_index == app.cursor_row && day == app.cursor_day;
                let style = if under_cursor { cursor_style() } else { cell_style(*state) };
                Cell::from(Span::styled(format!("  {}  ", cell_glyph(*state, app.use_emoji)), style))
            }));

            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Min(16)];
    widths.extend(std::iter::repeat(Constraint::Length(7)).take(DAYS_PER_WEEK));

    let title = if week.contains(today) {
        format!(" {} · this week ", week.label())
    } else {
        format!(" {} ", week.label())
    };
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if focused { focused_border_style() } else { border_style() })
            .title(Span::styled(title, title_style())),
    );

    let selected = (!app.habits.is_empty()).then(|| app.cursor_row.min(app.habits.len() - 1));
    let mut state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, area, &mut state);
}
