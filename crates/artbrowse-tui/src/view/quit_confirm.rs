use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered_rect;
use crate::theme::Theme;

pub fn render(f: &mut Frame, theme: &Theme) {
    let popup = centered_rect(36, 5, f.area());

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quit artbrowse?",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                "  q",
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Span::styled(": quit   ", Style::default().fg(theme.dim)),
            Span::styled(
                "Esc",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(": cancel", Style::default().fg(theme.dim)),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .title(" Confirm Quit "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
