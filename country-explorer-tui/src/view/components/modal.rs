//! Modals

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::domain::CountryDetail;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// Render the open modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal().active else {
        return;
    };

    match modal {
        Modal::Detail(detail) => render_detail(frame, detail),
        Modal::Help => render_help(frame),
    }
}

/// Centered rectangle of at most `width` x `height`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Clear the area and draw the modal frame; returns the content area
fn render_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let c = colors();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(c.bg).fg(c.fg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// Label column width, measured in terminal cells
fn label_width(labels: impl Iterator<Item = &'static str>) -> usize {
    labels.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Pad `label` to `width` cells
fn pad_label(label: &str, width: usize) -> String {
    let padding = width.saturating_sub(label.width());
    format!("{label}{}  ", " ".repeat(padding))
}

/// Country detail modal
fn render_detail(frame: &mut Frame, detail: &CountryDetail) {
    let fields = detail.fields();
    let width = label_width(fields.iter().map(|(label, _)| *label));

    let mut lines = vec![
        Line::from(vec![
            Span::styled(pad_label("Flag", width), Styles::muted()),
            Span::styled(detail.flag_svg.as_str(), Styles::hint_desc()),
        ]),
        Line::from(""),
    ];
    for (label, value) in fields {
        lines.push(Line::from(vec![
            Span::styled(pad_label(label, width), Styles::muted()),
            Span::styled(value, Styles::hint_desc()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("Press Esc, Enter or q to close", Styles::muted()));

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let title_width = detail.title.width() + 4;
    let modal_width = u16::try_from(content_width.max(title_width) + 4).unwrap_or(u16::MAX);
    let modal_height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);

    let area = centered_rect(modal_width.clamp(40, 90), modal_height, frame.area());
    let inner = render_frame(frame, area, &detail.title);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Key binding help
const HELP_SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Table",
        &[
            ("↑↓ / jk", "Move cursor"),
            ("←→ / hl", "Previous / next page"),
            ("PgUp/PgDn", "Previous / next page"),
            ("Enter", "Show details"),
            ("q", "Quit"),
        ],
    ),
    (
        "Search and sort",
        &[
            ("/", "Search official names"),
            ("Ctrl+u / Alt+c", "Clear search"),
            ("s", "Toggle sort order"),
            ("a / d", "Sort ascending / descending"),
        ],
    ),
    (
        "Modals",
        &[("Esc / Enter / q", "Close"), ("? / Alt+h", "This help")],
    ),
];

/// Help modal
fn render_help(frame: &mut Frame) {
    let width = label_width(
        HELP_SECTIONS
            .iter()
            .flat_map(|(_, keys)| keys.iter().map(|(key, _)| *key)),
    );

    let mut lines = Vec::new();
    for (title, keys) in HELP_SECTIONS {
        lines.push(Line::styled(title, Styles::header()));
        for (key, desc) in keys {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(pad_label(key, width), Styles::hint_key()),
                Span::styled(*desc, Styles::hint_desc()),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::styled("Press Esc to close the help", Styles::muted()));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(56, height, frame.area());
    let inner = render_frame(frame, area, "Help");

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_pad_to_display_width() {
        assert_eq!(pad_label("Codes", 8), "Codes     ");
        assert_eq!(pad_label("↑↓", 4), "↑↓    ");
    }

    #[test]
    fn centered_rect_fits_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(50, 20, area);
        assert_eq!(rect, Rect::new(0, 0, 30, 10));

        let rect = centered_rect(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(rect, Rect::new(10, 3, 10, 4));
    }
}
