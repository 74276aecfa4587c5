use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use folio_logging::{folio_info, folio_warn};

use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, FileFetcher, ReqwestFetcher};
use crate::{EngineEvent, EntrySource};

enum EngineCommand {
    Fetch { source: EntrySource },
}

struct Fetchers {
    http: ReqwestFetcher,
    file: FileFetcher,
}

/// Runs fetches on a background tokio runtime and reports results over a channel.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetchers = Arc::new(Fetchers {
            file: FileFetcher::new(&settings),
            http: ReqwestFetcher::new(settings),
        });

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let fetchers = fetchers.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetchers.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch(&self, source: EntrySource) {
        folio_info!("Fetching entries from {}", source);
        if self.cmd_tx.send(EngineCommand::Fetch { source }).is_err() {
            folio_warn!("Engine worker is gone; fetch dropped");
        }
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    fetchers: &Fetchers,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { source } => {
            let sink = ChannelProgressSink::new(event_tx.clone());
            let location = source.to_string();
            let result = match &source {
                EntrySource::Url(url) => fetchers.http.fetch(url, &sink).await,
                EntrySource::File(_) => fetchers.file.fetch(&location, &sink).await,
            };
            let _ = event_tx.send(EngineEvent::DocumentFetched { location, result });
        }
    }
}
