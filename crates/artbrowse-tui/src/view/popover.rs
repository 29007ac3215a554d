use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::app::App;

/// Render the "select first N rows" entry popover.
pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let page_len = app.records().len();
    let popup = centered_rect(52, 8, f.area());

    let entry = if app.popover.buffer.is_empty() {
        Span::styled(format!("1 \u{2013} {page_len}"), theme.placeholder_style())
    } else {
        Span::styled(
            app.popover.buffer.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        Line::from(Span::styled(
            " Enter number of rows to select from the current page",
            Style::default().fg(theme.dim),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" > ", Style::default().fg(theme.accent)),
            entry,
            Span::styled("\u{2588}", Style::default().fg(theme.accent)),
        ]),
    ];
    if app.popover.exceeds(page_len) {
        lines.push(Line::from(Span::styled(
            format!(" Capped to {page_len} \u{2014} only current page rows are available"),
            Style::default().fg(theme.error),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(vec![
        Span::styled(
            " Enter",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(": select   ", Style::default().fg(theme.dim)),
        Span::styled(
            "Esc",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(": close", Style::default().fg(theme.dim)),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" Select rows "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
