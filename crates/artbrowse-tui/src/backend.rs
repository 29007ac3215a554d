use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use artbrowse_core::CatalogSource;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Receive commands until the channel closes or `cancel` fires.
///
/// Each fetch runs in its own task so a slow page never blocks a newer one.
/// Superseded fetches are left to finish; the loader drops their results.
pub async fn run_listener(
    source: Arc<dyn CatalogSource>,
    client: reqwest::Client,
    timeout: Duration,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
    cancel: CancellationToken,
) {
    loop {
        let cmd = tokio::select! {
            _ = cancel.cancelled() => break,
            cmd = cmd_rx.recv() => match cmd {
                Some(cmd) => cmd,
                None => break,
            },
        };

        match cmd {
            BackendCommand::FetchPage(request) => {
                let source = source.clone();
                let client = client.clone();
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    tracing::debug!(
                        source = source.name(),
                        seq = request.seq,
                        page = request.page,
                        "fetch started"
                    );
                    let result = source
                        .fetch_page(request.page, request.page_size, &client, timeout)
                        .await;
                    if let Err(e) = &result {
                        tracing::warn!(
                            source = source.name(),
                            page = request.page,
                            error = %e,
                            "fetch failed"
                        );
                    }
                    // The UI may have shut down already.
                    let _ = tx.send(BackendEvent::PageFetched { request, result });
                });
            }
        }
    }
    tracing::debug!("backend listener stopped");
}
