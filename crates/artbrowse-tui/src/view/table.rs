use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use artbrowse_core::format::{date_range, inscription_cell, text_or_placeholder};

use super::spinner_char;
use crate::app::App;

/// Width of the checkbox column, used to map clicks onto toggles.
pub const CHECKBOX_WIDTH: u16 = 4;

/// A slot in the paginator strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    Gap,
}

/// Page links around `current`: always the first and last page, `window`
/// pages either side of the current one, and gaps where pages are elided.
pub fn page_links(current: u32, count: u32, window: u32) -> Vec<PageLink> {
    let count = count.max(1);
    let current = current.clamp(1, count);
    let lo = current.saturating_sub(window).max(1);
    let hi = current.saturating_add(window).min(count);

    let mut links = Vec::new();
    if lo > 1 {
        links.push(PageLink::Page(1));
        if lo > 2 {
            links.push(PageLink::Gap);
        }
    }
    links.extend((lo..=hi).map(PageLink::Page));
    if hi < count {
        if hi + 1 < count {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(count));
    }
    links
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    app.last_table_area = Some(area);
    let theme = &app.theme;
    let loader = &app.loader;

    let title = if loader.is_loading() {
        format!(
            " {} Loading page {}\u{2026} ",
            spinner_char(app.tick),
            loader.page()
        )
    } else {
        format!(" Page {} of {} ", loader.page(), loader.page_count())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(title, Style::default().fg(theme.accent)));

    if loader.records().is_empty() {
        app.table_offset = 0;
        let message = if loader.is_loading() {
            Span::styled("Loading artworks\u{2026}", Style::default().fg(theme.spinner))
        } else if loader.error().is_some() {
            Span::styled("Nothing loaded", theme.placeholder_style())
        } else {
            Span::styled("No artworks found", theme.placeholder_style())
        };
        let paragraph = Paragraph::new(vec![Line::from(""), Line::from(message)])
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(
        ["", "Title", "Origin", "Artist", "Inscriptions", "Dates"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
            }),
    )
    .height(1);

    let cell_style = |value: Option<&str>| {
        if value.is_some_and(|v| !v.trim().is_empty()) {
            Style::default().fg(theme.text)
        } else {
            theme.placeholder_style()
        }
    };
    let text_cell = |value: Option<&str>| {
        Cell::from(text_or_placeholder(value).to_string()).style(cell_style(value))
    };

    let rows: Vec<Row> = loader
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let checkbox = if app.selection.contains(record.id) {
                Cell::from("[x]").style(
                    Style::default()
                        .fg(theme.checked)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Cell::from("[ ]").style(Style::default().fg(theme.dim))
            };
            let inscriptions = record.inscriptions.as_deref();
            let row = Row::new(vec![
                checkbox,
                text_cell(record.title.as_deref()),
                text_cell(record.place_of_origin.as_deref()),
                text_cell(record.artist_display.as_deref()),
                Cell::from(inscription_cell(inscriptions)).style(cell_style(inscriptions)),
                Cell::from(date_range(record.date_start, record.date_end))
                    .style(Style::default().fg(theme.chip)),
            ]);
            if i % 2 == 1 {
                row.style(Style::default().bg(theme.stripe_bg))
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(CHECKBOX_WIDTH - 1),
        Constraint::Fill(3),
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default().with_offset(app.table_offset);
    state.select(Some(app.cursor));
    f.render_stateful_widget(table, area, &mut state);
    app.table_offset = state.offset();
}

/// Centered strip of page links with previous/next arrows.
pub fn render_paginator(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let current = app.loader.page();
    let count = app.loader.page_count();
    let window = u32::from(area.width / 24).clamp(1, 3);

    let arrow = |enabled: bool, glyph: &'static str| {
        let style = if enabled {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        Span::styled(glyph, style)
    };

    let mut spans = vec![arrow(current > 1, "\u{2039} h "), Span::raw(" ")];
    for link in page_links(current, count, window) {
        match link {
            PageLink::Page(p) if p == current => spans.push(Span::styled(
                format!("[{p}]"),
                Style::default()
                    .fg(theme.header_fg)
                    .bg(theme.header_bg)
                    .add_modifier(Modifier::BOLD),
            )),
            PageLink::Page(p) => {
                spans.push(Span::styled(format!(" {p} "), Style::default().fg(theme.text)))
            }
            PageLink::Gap => {
                spans.push(Span::styled(" \u{2026} ", Style::default().fg(theme.dim)))
            }
        }
        spans.push(Span::raw(" "));
    }
    spans.push(arrow(current < count, " l \u{203A}"));

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = Vec::new();

    if let Some(notice) = &app.notice {
        spans.push(Span::styled(
            format!(" {notice} "),
            Style::default()
                .fg(theme.header_fg)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        " Space:toggle  a:page  n:select N  c:clear  h/l:page  r:reload  t:theme  ?:help  q:quit",
        theme.footer_style(),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Gap, Page};

    #[test]
    fn single_page() {
        assert_eq!(page_links(1, 1, 2), vec![Page(1)]);
    }

    #[test]
    fn short_range_has_no_gaps() {
        assert_eq!(
            page_links(2, 4, 2),
            vec![Page(1), Page(2), Page(3), Page(4)]
        );
    }

    #[test]
    fn middle_page_elides_both_ends() {
        assert_eq!(
            page_links(50, 100, 1),
            vec![Page(1), Gap, Page(49), Page(50), Page(51), Gap, Page(100)]
        );
    }

    #[test]
    fn adjacent_ends_are_not_gaps() {
        assert_eq!(
            page_links(3, 5, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn current_is_clamped() {
        assert_eq!(page_links(9, 3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_links(0, 0, 1), vec![Page(1)]);
    }
}
