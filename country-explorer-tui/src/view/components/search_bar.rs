//! Search bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

const PLACEHOLDER: &str = "Press / to search by official name";

/// Render the search bar with the sort indicator on the right
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode.is_search();
    let query = app.explorer.search_query();

    let block = Block::default()
        .title(" Search ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(if editing {
            Styles::border_focused()
        } else {
            Styles::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(16)])
        .split(inner);

    let query_line = if editing {
        Line::from(vec![
            Span::styled("/ ", Styles::hint_key()),
            Span::styled(query, Styles::title()),
            Span::styled("▎", Styles::hint_key()),
        ])
    } else if query.is_empty() {
        Line::styled(PLACEHOLDER, Styles::muted())
    } else {
        Line::from(vec![
            Span::styled("/ ", Styles::muted()),
            Span::styled(query, Styles::hint_desc()),
        ])
    };
    frame.render_widget(Paragraph::new(query_line), columns[0]);

    let sort_line = Line::from(vec![
        Span::styled("Sort ", Styles::muted()),
        Span::styled(app.explorer.sort_direction().label(), Styles::hint_key()),
    ]);
    frame.render_widget(
        Paragraph::new(sort_line).alignment(Alignment::Right),
        columns[1],
    );
}
