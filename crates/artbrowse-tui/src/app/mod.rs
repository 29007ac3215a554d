mod backend;
mod update;

use ratatui::layout::{Constraint, Layout, Rect};
use tokio::sync::mpsc;

use artbrowse_core::{PageLoader, PageRequest, Record, RecordId, SelectionSet, ThemePreference};

use crate::model::popover::BulkSelectPopover;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Input mode determines how keyboard input is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing a row count into the bulk-select popover.
    Count,
}

/// Main application state.
pub struct App {
    pub loader: PageLoader,
    pub selection: SelectionSet,
    pub popover: BulkSelectPopover,
    pub theme: Theme,
    pub input_mode: InputMode,
    /// Row under the cursor on the current page.
    pub cursor: usize,
    pub tick: usize,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    pub show_detail: bool,
    /// Advisory left by the last capped bulk select.
    pub notice: Option<String>,
    /// First page row visible in the table after the last render.
    pub table_offset: usize,
    /// Channel to send commands to the backend listener.
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    /// Last table area rendered (for mouse click → row mapping).
    pub last_table_area: Option<Rect>,
}

impl App {
    pub fn new(page_size: u32, theme: ThemePreference) -> Self {
        Self {
            loader: PageLoader::new(page_size),
            selection: SelectionSet::new(),
            popover: BulkSelectPopover::default(),
            theme: Theme::for_preference(theme),
            input_mode: InputMode::Normal,
            cursor: 0,
            tick: 0,
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            show_detail: false,
            notice: None,
            table_offset: 0,
            backend_cmd_tx: None,
            last_table_area: None,
        }
    }

    /// Issue the initial fetch for page 1.
    pub fn start(&mut self) {
        self.fetch_page(1);
    }

    pub fn records(&self) -> &[Record] {
        self.loader.records()
    }

    /// Ids of every row on the loaded page, in display order.
    pub fn page_ids(&self) -> Vec<RecordId> {
        self.records().iter().map(|r| r.id).collect()
    }

    /// Ids on the loaded page that the selection currently holds.
    pub fn checked_on_page(&self) -> Vec<RecordId> {
        self.selection
            .selected_on_page(self.records())
            .iter()
            .map(|r| r.id)
            .collect()
    }

    pub fn current_record(&self) -> Option<&Record> {
        self.records().get(self.cursor)
    }

    /// Navigate to `page`, clamped to the known page range. Re-selecting the
    /// current page does nothing.
    pub fn go_to_page(&mut self, page: u32) {
        let page = page.clamp(1, self.loader.page_count());
        if page == self.loader.page() {
            return;
        }
        self.fetch_page(page);
    }

    /// Re-request the current page.
    pub fn reload(&mut self) {
        let request = self.loader.reload();
        self.send_request(request);
    }

    fn fetch_page(&mut self, page: u32) {
        if page != self.loader.page() {
            self.cursor = 0;
            self.notice = None;
        }
        let request = self.loader.request(page, self.loader.page_size());
        self.send_request(request);
    }

    fn send_request(&self, request: PageRequest) {
        let page = request.page;
        match &self.backend_cmd_tx {
            Some(tx) => {
                if tx.send(BackendCommand::FetchPage(request)).is_err() {
                    tracing::error!(page, "backend listener is gone");
                }
            }
            None => tracing::debug!(page, "no backend attached; request not sent"),
        }
    }

    /// Flip the row under the cursor and reconcile the page's checked set.
    pub fn toggle_row(&mut self) {
        let Some(id) = self.current_record().map(|r| r.id) else {
            return;
        };
        let mut checked = self.checked_on_page();
        match checked.iter().position(|&c| c == id) {
            Some(pos) => {
                checked.remove(pos);
            }
            None => checked.push(id),
        }
        let page_ids = self.page_ids();
        self.selection.reconcile_current_page(page_ids, checked);
    }

    /// Check every row on the page, or uncheck them all if they already are.
    pub fn toggle_all_on_page(&mut self) {
        let ids = self.page_ids();
        if ids.is_empty() {
            return;
        }
        let all_checked = ids.iter().all(|&id| self.selection.contains(id));
        let checked = if all_checked { Vec::new() } else { ids.clone() };
        self.selection.reconcile_current_page(ids, checked);
    }

    /// Submit the popover entry as a "select first N" request.
    pub fn submit_bulk_select(&mut self) {
        let Some(n) = self.popover.submit() else {
            return;
        };
        self.input_mode = InputMode::Normal;
        let outcome = self.selection.select_first_n(self.loader.records(), n);
        if outcome.capped {
            tracing::info!(
                requested = outcome.requested,
                applied = outcome.applied,
                "bulk select capped to current page"
            );
        }
        self.notice = outcome.capped.then(|| {
            format!(
                "Capped to {} \u{2014} only current page rows are available",
                outcome.applied
            )
        });
    }

    pub fn open_bulk_select(&mut self) {
        self.popover.open();
        self.input_mode = InputMode::Count;
    }

    pub fn dismiss_bulk_select(&mut self) {
        self.popover.dismiss();
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_theme(&mut self) {
        let next = self.theme.preference.toggle();
        tracing::debug!(theme = next.label(), "theme toggled");
        self.theme = Theme::for_preference(next);
    }

    /// Map a left click onto the table: clicking a row moves the cursor there,
    /// clicking its checkbox column also toggles it.
    fn handle_click(&mut self, col: u16, row: u16) {
        let Some(area) = self.last_table_area else {
            return;
        };
        // border + header row
        let first_row = area.y + 2;
        let inside = col > area.x
            && col < area.x + area.width.saturating_sub(1)
            && row >= first_row
            && row < area.y + area.height.saturating_sub(1);
        if !inside {
            return;
        }
        let idx = self.table_offset + (row - first_row) as usize;
        if idx >= self.records().len() {
            return;
        }
        self.cursor = idx;
        if col <= area.x + crate::view::table::CHECKBOX_WIDTH {
            self.toggle_row();
        }
    }

    /// Render the current screen.
    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();
        let has_error = self.loader.error().is_some();

        let mut constraints = vec![Constraint::Length(3)]; // header
        if has_error {
            constraints.push(Constraint::Length(1)); // error banner
        }
        constraints.push(Constraint::Min(5)); // table
        constraints.push(Constraint::Length(1)); // paginator
        constraints.push(Constraint::Length(1)); // footer

        let chunks = Layout::vertical(constraints).split(area);
        let mut idx = 0;

        crate::view::header::render(f, chunks[idx], self);
        idx += 1;

        if has_error {
            crate::view::header::render_error_banner(f, chunks[idx], self);
            idx += 1;
        }

        let table_area = chunks[idx];
        if self.show_detail {
            let split = Layout::vertical([Constraint::Min(5), Constraint::Length(10)])
                .split(table_area);
            crate::view::table::render(f, split[0], self);
            crate::view::detail::render(f, split[1], self);
        } else {
            crate::view::table::render(f, table_area, self);
        }

        crate::view::table::render_paginator(f, chunks[idx + 1], self);
        crate::view::table::render_footer(f, chunks[idx + 2], self);

        if self.popover.visible {
            crate::view::popover::render(f, self);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
