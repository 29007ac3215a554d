use ratatui::layout::Rect;
use tokio::sync::mpsc;

use artbrowse_core::source::mock::synthetic_page;
use artbrowse_core::{FetchError, PageRequest, RecordId, ThemePreference};

use super::*;
use crate::action::Action;
use crate::tui_event::{BackendCommand, BackendEvent};

const TOTAL: u64 = 100;

/// App wired to a command channel the test drains by hand.
fn test_app() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut app = App::new(20, ThemePreference::Light);
    app.backend_cmd_tx = Some(tx);
    (app, rx)
}

fn pending(rx: &mut mpsc::UnboundedReceiver<BackendCommand>) -> Vec<PageRequest> {
    let mut out = Vec::new();
    while let Ok(BackendCommand::FetchPage(req)) = rx.try_recv() {
        out.push(req);
    }
    out
}

fn answer(app: &mut App, request: PageRequest) {
    app.handle_backend_event(BackendEvent::PageFetched {
        request,
        result: Ok(synthetic_page(request.page, request.page_size, TOTAL)),
    });
}

/// Answer every outstanding request in the order it was issued.
fn deliver(app: &mut App, rx: &mut mpsc::UnboundedReceiver<BackendCommand>) {
    for req in pending(rx) {
        answer(app, req);
    }
}

fn started() -> (App, mpsc::UnboundedReceiver<BackendCommand>) {
    let (mut app, mut rx) = test_app();
    app.start();
    deliver(&mut app, &mut rx);
    (app, rx)
}

fn type_count(app: &mut App, digits: &str) {
    app.update(Action::OpenBulkSelect);
    for ch in digits.chars() {
        app.update(Action::CountInput(ch));
    }
    app.update(Action::CountSubmit);
}

// ── Loading ────────────────────────────────────────────────────

#[test]
fn start_requests_first_page() {
    let (mut app, mut rx) = test_app();
    app.start();
    assert!(app.loader.is_loading());

    let reqs = pending(&mut rx);
    assert_eq!(reqs.len(), 1);
    assert_eq!((reqs[0].page, reqs[0].page_size), (1, 20));

    answer(&mut app, reqs[0]);
    assert!(!app.loader.is_loading());
    assert_eq!(app.records().len(), 20);
    assert_eq!(app.loader.page_count(), 5);
}

#[test]
fn stale_page_does_not_overwrite_newer_one() {
    let (mut app, mut rx) = started();
    app.update(Action::NextPage);
    app.update(Action::NextPage);
    let reqs = pending(&mut rx);
    assert_eq!(reqs.iter().map(|r| r.page).collect::<Vec<_>>(), vec![2, 3]);

    // page 3 lands first, the slower page 2 afterwards
    answer(&mut app, reqs[1]);
    answer(&mut app, reqs[0]);

    assert_eq!(app.loader.page(), 3);
    assert_eq!(app.records()[0].id, 41);
    assert!(!app.loader.is_loading());
}

#[test]
fn failed_reload_keeps_rows_and_selection() {
    let (mut app, mut rx) = started();
    type_count(&mut app, "3");

    app.update(Action::Reload);
    let req = pending(&mut rx)[0];
    app.handle_backend_event(BackendEvent::PageFetched {
        request: req,
        result: Err(FetchError::Status(500)),
    });

    assert_eq!(app.loader.error(), Some("HTTP 500"));
    assert_eq!(app.records().len(), 20);
    assert_eq!(app.selection.count(), 3);

    // retry clears the banner
    app.update(Action::Reload);
    assert_eq!(app.loader.error(), None);
}

#[test]
fn reload_reissues_current_page_with_fresh_ticket() {
    let (mut app, mut rx) = started();
    app.update(Action::NextPage);
    let first = pending(&mut rx)[0];
    app.update(Action::Reload);
    let reqs = pending(&mut rx);
    assert_eq!(reqs.len(), 1);
    assert_eq!((reqs[0].page, reqs[0].page_size), (2, 20));
    assert!(reqs[0].seq > first.seq);

    // the pre-reload ticket no longer applies
    answer(&mut app, first);
    assert!(app.loader.is_loading());
    answer(&mut app, reqs[0]);
    assert_eq!(app.records()[0].id, 21);
}

#[test]
fn same_page_navigation_is_a_no_op() {
    let (mut app, mut rx) = started();
    app.update(Action::FirstPage);
    app.update(Action::PrevPage);
    assert!(pending(&mut rx).is_empty());

    app.update(Action::LastPage);
    let reqs = pending(&mut rx);
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].page, 5);
}

#[test]
fn page_change_resets_cursor() {
    let (mut app, mut rx) = started();
    app.update(Action::GoBottom);
    assert_eq!(app.cursor, 19);
    app.update(Action::NextPage);
    deliver(&mut app, &mut rx);
    assert_eq!(app.cursor, 0);
}

// ── Selection ──────────────────────────────────────────────────

#[test]
fn selection_spans_pages() {
    let (mut app, mut rx) = started();
    type_count(&mut app, "5");
    assert_eq!(app.selection.count(), 5);

    app.update(Action::NextPage);
    deliver(&mut app, &mut rx);
    app.update(Action::ToggleRow);
    app.update(Action::MoveDown);
    app.update(Action::ToggleRow);

    assert_eq!(app.selection.count(), 7);
    assert_eq!(app.selection.ids(), vec![1, 2, 3, 4, 5, 21, 22]);

    app.update(Action::PrevPage);
    deliver(&mut app, &mut rx);
    assert_eq!(app.checked_on_page(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn toggling_a_row_twice_restores_it() {
    let (mut app, _rx) = started();
    app.update(Action::MoveDown);
    app.update(Action::ToggleRow);
    assert_eq!(app.selection.ids(), vec![2]);
    app.update(Action::ToggleRow);
    assert!(app.selection.is_empty());
}

#[test]
fn toggle_all_on_page_flips_whole_page() {
    let (mut app, _rx) = started();
    app.selection
        .reconcile_current_page(Vec::<RecordId>::new(), [500]);
    app.update(Action::ToggleAllOnPage);
    assert_eq!(app.selection.count(), 21);
    app.update(Action::ToggleAllOnPage);
    assert_eq!(app.selection.ids(), vec![500]);
}

#[test]
fn capped_bulk_select_leaves_notice() {
    let (mut app, _rx) = started();
    type_count(&mut app, "500");

    assert_eq!(app.selection.count(), 20);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.popover.visible);
    let notice = app.notice.as_deref().unwrap();
    assert!(notice.starts_with("Capped to 20"), "{notice}");
}

#[test]
fn zero_or_empty_count_is_rejected() {
    let (mut app, _rx) = started();
    app.update(Action::OpenBulkSelect);
    app.update(Action::CountSubmit);
    assert!(app.popover.visible);

    app.update(Action::CountInput('0'));
    app.update(Action::CountSubmit);
    assert!(app.popover.visible);
    assert_eq!(app.input_mode, InputMode::Count);
    assert!(app.selection.is_empty());
}

#[test]
fn count_mode_swallows_normal_keys() {
    let (mut app, _rx) = started();
    type_count(&mut app, "4");
    app.update(Action::OpenBulkSelect);

    // 'c' and 'q' arrive as text while the popover is open
    app.update(Action::CountInput('c'));
    app.update(Action::ClearSelection);
    app.update(Action::Quit);
    assert_eq!(app.selection.count(), 4);
    assert!(!app.confirm_quit);
    assert!(app.popover.buffer.is_empty());
}

#[test]
fn dismissed_popover_keeps_entry() {
    let (mut app, _rx) = started();
    app.update(Action::OpenBulkSelect);
    app.update(Action::CountInput('7'));
    app.update(Action::NavigateBack);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert!(!app.popover.visible);

    app.update(Action::OpenBulkSelect);
    app.update(Action::CountSubmit);
    assert_eq!(app.selection.count(), 7);
}

#[test]
fn clear_empties_selection_across_pages() {
    let (mut app, mut rx) = started();
    type_count(&mut app, "500");
    app.update(Action::NextPage);
    deliver(&mut app, &mut rx);
    app.update(Action::ToggleRow);
    assert_eq!(app.selection.count(), 21);

    app.update(Action::ClearSelection);
    assert!(app.selection.is_empty());
    assert!(app.notice.is_none());
    assert!(app.checked_on_page().is_empty());
}

#[test]
fn click_on_checkbox_toggles_row() {
    let (mut app, _rx) = started();
    app.last_table_area = Some(Rect::new(0, 5, 100, 20));

    // first data row sits below the border and the header
    app.update(Action::ClickAt(1, 8));
    assert_eq!(app.cursor, 1);
    assert_eq!(app.selection.ids(), vec![2]);

    app.update(Action::ClickAt(30, 9));
    assert_eq!(app.cursor, 2);
    assert_eq!(app.selection.count(), 1);
}

// ── Chrome ─────────────────────────────────────────────────────

#[test]
fn theme_toggles_between_light_and_dark() {
    let (mut app, _rx) = test_app();
    assert_eq!(app.theme.preference, ThemePreference::Light);
    app.update(Action::ToggleTheme);
    assert_eq!(app.theme.preference, ThemePreference::Dark);
    app.update(Action::ToggleTheme);
    assert_eq!(app.theme.preference, ThemePreference::Light);
}

#[test]
fn quit_requires_confirmation() {
    let (mut app, _rx) = test_app();
    app.update(Action::Quit);
    assert!(app.confirm_quit);
    assert!(!app.should_quit);

    app.update(Action::NavigateBack);
    assert!(!app.confirm_quit);

    app.update(Action::Quit);
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn force_quit_skips_confirmation() {
    let (mut app, _rx) = test_app();
    assert!(app.update(Action::ForceQuit));
    assert!(app.should_quit);
}

#[test]
fn help_overlay_blocks_navigation() {
    let (mut app, mut rx) = started();
    app.update(Action::ToggleHelp);
    app.update(Action::NextPage);
    assert!(pending(&mut rx).is_empty());
    app.update(Action::NavigateBack);
    assert!(!app.show_help);
}

#[test]
fn escape_closes_detail_before_clearing_notice() {
    let (mut app, _rx) = started();
    type_count(&mut app, "99");
    app.update(Action::ToggleDetail);
    app.update(Action::NavigateBack);
    assert!(!app.show_detail);
    assert!(app.notice.is_some());
    app.update(Action::NavigateBack);
    assert!(app.notice.is_none());
}
