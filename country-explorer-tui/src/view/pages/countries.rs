//! Country table page

use ratatui::{
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Paragraph, Row, Table, TableState},
    Frame,
};

use crate::model::{App, LoadState};
use crate::view::theme::Styles;

const HEADERS: [&str; 6] = ["Flag", "Official name", "CCA2", "CCA3", "Native name", "IDD"];

/// Render the country table
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if app.load_state == LoadState::Loading {
        render_loading(frame, area);
    } else {
        render_table(app, frame, area);
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  Loading countries...", Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// The table; stays empty (headers only) when there is nothing to show
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.countries();

    let header = Row::new(HEADERS).style(Styles::header());

    let rows = state.rows.iter().map(|row| {
        Row::new([
            row.flag.as_str(),
            row.official.as_str(),
            row.cca2.as_str(),
            row.cca3.as_str(),
            row.native_name.as_str(),
            row.idd.as_str(),
        ])
    });

    let widths = [
        Constraint::Percentage(22),
        Constraint::Percentage(38),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Percentage(22),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    if !state.rows.is_empty() {
        table_state.select(Some(state.selected));
    }

    frame.render_stateful_widget(table, area, &mut table_state);
}
