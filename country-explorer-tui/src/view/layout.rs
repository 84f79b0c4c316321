//! Main layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// Render the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(3), // search bar
            Constraint::Min(3),    // table
            Constraint::Length(1), // pagination
            Constraint::Length(1), // status bar
        ])
        .split(size);

    render_title_bar(frame, rows[0]);
    components::search_bar::render(app, frame, rows[1]);
    render_table_panel(app, frame, rows[2]);
    components::pagination::render(app, frame, rows[3]);
    components::statusbar::render(app, frame, rows[4]);

    // Modal on top
    components::modal::render(app, frame);
}

/// Title bar
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(concat!(" Country Explorer v", env!("CARGO_PKG_VERSION")))
        .style(
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

/// Bordered panel holding the country table
fn render_table_panel(app: &App, frame: &mut Frame, area: Rect) {
    let border_style = if app.input_mode.is_search() {
        Styles::border()
    } else {
        Styles::border_focused()
    };

    let block = Block::default()
        .title(" Countries ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    pages::countries::render(app, frame, inner);
}
