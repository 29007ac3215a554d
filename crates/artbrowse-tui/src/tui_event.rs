use artbrowse_core::{FetchError, Page, PageRequest};

/// Commands sent from the TUI to the backend.
#[derive(Debug, Clone, Copy)]
pub enum BackendCommand {
    /// Fetch the page described by the ticket.
    FetchPage(PageRequest),
}

/// Events flowing from the backend to the TUI.
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// A fetch finished. The ticket tells the loader whether it still matters.
    PageFetched {
        request: PageRequest,
        result: Result<Page, FetchError>,
    },
}
