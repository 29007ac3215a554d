use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use artbrowse_core::format::{date_range, text_or_placeholder};

use crate::app::App;
use crate::theme::Theme;

/// Full record under the cursor, inscriptions untruncated.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Detail (Enter: close) ");

    let Some(record) = app.current_record() else {
        f.render_widget(
            Paragraph::new(Span::styled(" No row selected", theme.placeholder_style()))
                .block(block),
            area,
        );
        return;
    };

    let checked = if app.selection.contains(record.id) {
        Span::styled(
            "  [selected]",
            Style::default().fg(theme.checked).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("")
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {}", text_or_placeholder(record.title.as_deref())),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  #{}", record.id), Style::default().fg(theme.dim)),
            checked,
        ]),
        field_line("Artist", record.artist_display.as_deref(), theme),
        field_line("Origin", record.place_of_origin.as_deref(), theme),
        Line::from(vec![
            label("Dates"),
            Span::styled(
                date_range(record.date_start, record.date_end),
                Style::default().fg(theme.chip),
            ),
        ]),
        field_line("Inscriptions", record.inscriptions.as_deref(), theme),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn label(name: &str) -> Span<'static> {
    Span::styled(format!(" {name:<13}"), Style::default().add_modifier(Modifier::DIM))
}

fn field_line<'a>(name: &str, value: Option<&'a str>, theme: &Theme) -> Line<'a> {
    let style = if value.is_some_and(|v| !v.trim().is_empty()) {
        Style::default().fg(theme.text)
    } else {
        theme.placeholder_style()
    };
    Line::from(vec![label(name), Span::styled(text_or_placeholder(value), style)])
}
