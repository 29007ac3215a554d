use artbrowse_core::Resolution;

use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::PageFetched { request, result } => {
                if self.loader.resolve(request, result) == Resolution::Applied {
                    let len = self.records().len();
                    self.cursor = self.cursor.min(len.saturating_sub(1));
                }
            }
        }
    }
}
