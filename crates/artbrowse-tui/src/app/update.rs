use super::{App, InputMode};
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        match action {
            Action::ForceQuit => {
                self.should_quit = true;
                return true;
            }
            Action::Tick => {
                self.tick = self.tick.wrapping_add(1);
                return false;
            }
            // The next draw picks up the new size.
            Action::Resize => return false,
            _ => {}
        }

        // Quit confirmation modal: q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => {
                    self.confirm_quit = false;
                }
                _ => {}
            }
            return false;
        }

        // Bulk-select popover owns the keyboard while open
        if self.input_mode == InputMode::Count {
            match action {
                Action::CountInput(ch) => self.popover.push(ch),
                Action::CountBackspace => self.popover.backspace(),
                Action::CountSubmit => self.submit_bulk_select(),
                Action::NavigateBack => self.dismiss_bulk_select(),
                Action::ClickAt(..) => self.dismiss_bulk_select(),
                _ => {}
            }
            return false;
        }

        if self.show_help {
            match action {
                Action::ToggleHelp | Action::NavigateBack => self.show_help = false,
                Action::Quit => self.confirm_quit = true,
                _ => {}
            }
            return false;
        }

        match action {
            Action::Quit => {
                self.confirm_quit = true;
            }
            Action::MoveDown => {
                let len = self.records().len();
                if len > 0 {
                    self.cursor = (self.cursor + 1).min(len - 1);
                }
            }
            Action::MoveUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Action::GoTop => {
                self.cursor = 0;
            }
            Action::GoBottom => {
                self.cursor = self.records().len().saturating_sub(1);
            }
            Action::NextPage => {
                self.go_to_page(self.loader.page().saturating_add(1));
            }
            Action::PrevPage => {
                self.go_to_page(self.loader.page().saturating_sub(1));
            }
            Action::FirstPage => {
                self.go_to_page(1);
            }
            Action::LastPage => {
                self.go_to_page(self.loader.page_count());
            }
            Action::Reload => {
                self.reload();
            }
            Action::ToggleRow => {
                self.toggle_row();
            }
            Action::ToggleAllOnPage => {
                self.toggle_all_on_page();
            }
            Action::OpenBulkSelect => {
                self.open_bulk_select();
            }
            Action::ClearSelection => {
                self.selection.clear();
                self.notice = None;
            }
            Action::ToggleTheme => {
                self.toggle_theme();
            }
            Action::ToggleHelp => {
                self.show_help = true;
            }
            Action::ToggleDetail => {
                self.show_detail = !self.show_detail;
            }
            Action::NavigateBack => {
                if self.show_detail {
                    self.show_detail = false;
                } else {
                    self.notice = None;
                }
            }
            Action::ClickAt(col, row) => {
                self.handle_click(col, row);
            }
            Action::CountInput(_)
            | Action::CountBackspace
            | Action::CountSubmit
            | Action::ForceQuit
            | Action::Tick
            | Action::Resize
            | Action::None => {}
        }
        false
    }
}
