use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered_rect;
use crate::theme::Theme;

/// Render the key reference as a centered popup.
pub fn render(f: &mut Frame, theme: &Theme) {
    let popup = centered_rect(60, 30, f.area());

    let lines = vec![
        Line::from(Span::styled(" Keyboard Shortcuts ", theme.header_style())),
        Line::from(""),
        section_header("Rows", theme),
        key_line("j / \u{2193}", "Move down", theme),
        key_line("k / \u{2191}", "Move up", theme),
        key_line("g / G", "First / last row", theme),
        key_line("Enter", "Toggle detail pane", theme),
        Line::from(""),
        section_header("Pages", theme),
        key_line("l / \u{2192} / PgDn", "Next page", theme),
        key_line("h / \u{2190} / PgUp", "Previous page", theme),
        key_line("Home / End", "First / last page", theme),
        key_line("r", "Reload current page", theme),
        Line::from(""),
        section_header("Selection", theme),
        key_line("Space", "Toggle row", theme),
        key_line("a", "Toggle every row on the page", theme),
        key_line("n", "Select the first N rows", theme),
        key_line("c", "Clear selection (all pages)", theme),
        Line::from(""),
        section_header("Global", theme),
        key_line("t", "Toggle light / dark theme", theme),
        key_line("?", "Toggle this help", theme),
        key_line("q", "Quit", theme),
        key_line("Ctrl+c", "Force quit", theme),
        Line::from(""),
        section_header("Mouse", theme),
        key_line("Click", "Move to row (checkbox toggles)", theme),
        key_line("Wheel", "Move up / down", theme),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

fn section_header<'a>(title: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ))
}

fn key_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("    {key:<20}"), Style::default().fg(theme.text)),
        Span::styled(desc, Style::default().fg(theme.dim)),
    ])
}
