use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use news_core::Page;
use news_logging::news_debug;

use crate::source::PageSource;
use crate::{EngineEvent, FetchError, RequestId};

enum EngineCommand {
    FetchPage {
        request_id: RequestId,
        url: String,
    },
    FetchNow {
        url: String,
        reply: mpsc::Sender<Result<Page, FetchError>>,
    },
}

/// Runs page fetches on a background tokio runtime. Fetches are neither
/// cancelled nor sequenced; callers sort out stale answers by request id.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(source: Arc<dyn PageSource>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("news-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let source = source.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(source.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch_page(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage {
            request_id,
            url: url.into(),
        });
    }

    /// Fetches `url` and blocks until the answer arrives. Used for the first page.
    pub fn fetch_page_blocking(&self, url: impl Into<String>) -> Option<Result<Page, FetchError>> {
        let (reply, answer) = mpsc::channel();
        self.cmd_tx
            .send(EngineCommand::FetchNow {
                url: url.into(),
                reply,
            })
            .ok()?;
        answer.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    source: &dyn PageSource,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage { request_id, url } => {
            news_debug!("Engine fetching request_id={} url={}", request_id, url);
            let result = source.fetch_page(&url).await;
            let _ = event_tx.send(EngineEvent::PageFetched { request_id, result });
        }
        EngineCommand::FetchNow { url, reply } => {
            let _ = reply.send(source.fetch_page(&url).await);
        }
    }
}
