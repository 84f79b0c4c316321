//! Pagination line

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

const PREV: &str = "◀ Prev";
const NEXT: &str = "Next ▶";

/// Render `◀ Prev   Page X of Y   Next ▶`, dimming disabled controls
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.countries();

    let control = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, Styles::hint_key())
        } else {
            Span::styled(label, Styles::muted())
        }
    };

    let line = Line::from(vec![
        control(PREV, state.prev_enabled),
        Span::raw("   "),
        Span::styled(state.page.label(), Styles::title()),
        Span::styled(format!(" ({} matches)", state.page.total_items), Styles::muted()),
        Span::raw("   "),
        control(NEXT, state.next_enabled),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
