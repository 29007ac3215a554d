use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use artbrowse_core::format::group_thousands;

use crate::app::App;

/// Three-line masthead: meta line, title with selection badge, subtitle.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " Collection Database",
            Style::default().fg(theme.dim),
        ))),
        rows[0],
    );

    let title = Line::from(Span::styled(
        " Art Institute of Chicago ",
        theme.header_style(),
    ));
    let title_row =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(40)]).split(rows[1]);
    f.render_widget(Paragraph::new(title), title_row[0]);

    let mut right: Vec<Span> = Vec::new();
    if !app.selection.is_empty() {
        right.push(Span::styled(
            format!(" {} ", app.selection.count()),
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.checked)
                .add_modifier(Modifier::BOLD),
        ));
        right.push(Span::styled(" selected ", Style::default().fg(theme.text)));
        right.push(Span::styled("(c:clear)  ", Style::default().fg(theme.dim)));
    }
    right.push(Span::styled(
        format!("[{}] t ", theme.preference.label()),
        Style::default().fg(theme.accent),
    ));
    f.render_widget(
        Paragraph::new(Line::from(right)).alignment(Alignment::Right),
        title_row[1],
    );

    let subtitle = format!(
        " Browse the permanent collection \u{2014} {} artworks",
        group_thousands(app.loader.total())
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            subtitle,
            Style::default().fg(theme.text),
        ))),
        rows[2],
    );
}

/// One-line banner for the last fetch error. Stays until the next request.
pub fn render_error_banner(f: &mut Frame, area: Rect, app: &App) {
    let Some(err) = app.loader.error() else {
        return;
    };
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(
            " \u{26A0} Failed to load: ",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ),
        Span::styled(err.to_string(), Style::default().fg(theme.error)),
        Span::styled("  (r: retry)", Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
