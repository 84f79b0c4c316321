//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// Render key hints followed by the status message
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);
    let separator = Style::default().fg(colors().muted);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", separator));
        spans.push(Span::styled(msg.as_str(), Styles::hint_key()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current input context
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal().is_open() {
        return vec![("Esc", "Close")];
    }

    if app.input_mode.is_search() {
        return vec![("Enter/Esc", "Done"), ("Ctrl+u", "Clear")];
    }

    vec![
        ("/", "Search"),
        ("s", "Sort"),
        ("←→", "Page"),
        ("↑↓", "Select"),
        ("Enter", "Details"),
        ("?", "Help"),
        ("q", "Quit"),
    ]
}
