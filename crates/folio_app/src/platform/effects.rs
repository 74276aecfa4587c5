use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use folio_core::{decode_entries, Effect, Msg};
use folio_engine::{EngineEvent, EngineHandle, EntrySource, FetchOutput, FetchSettings};
use folio_logging::{folio_debug, folio_info, folio_warn};

use super::persistence;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Executes reducer effects and feeds engine results back as messages.
///
/// Dropping the runner stops its event loop thread; the engine worker and its
/// runtime exit once the last `EngineHandle` is gone.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    base_url: Option<String>,
    state_dir: PathBuf,
    shutdown: Arc<AtomicBool>,
    event_loop: Option<JoinHandle<()>>,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        settings: FetchSettings,
        base_url: Option<String>,
        state_dir: PathBuf,
    ) -> std::io::Result<Self> {
        let engine = EngineHandle::new(settings)?;
        let shutdown = Arc::new(AtomicBool::new(false));
        let event_loop = spawn_event_loop(engine.clone(), msg_tx.clone(), shutdown.clone());
        Ok(Self {
            engine,
            msg_tx,
            base_url,
            state_dir,
            shutdown,
            event_loop: Some(event_loop),
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchEntries { source } => self.fetch(&source),
                Effect::PersistFilter(filter) => {
                    persistence::save_filter(&self.state_dir, &filter);
                }
            }
        }
    }

    fn fetch(&self, raw_source: &str) {
        let source = EntrySource::parse(raw_source);
        let source = match self.base_url.as_deref() {
            Some(base) => match source.resolve_against(base) {
                Ok(resolved) => resolved,
                Err(err) => {
                    folio_warn!("Cannot resolve entries source {}: {}", raw_source, err);
                    let _ = self.msg_tx.send(Msg::EntriesFailed {
                        reason: err.to_string(),
                    });
                    return;
                }
            },
            None => source,
        };
        self.engine.fetch(source);
    }
}

impl Drop for EffectRunner {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.event_loop.take() {
            let _ = handle.join();
        }
    }
}

fn spawn_event_loop(
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
    shutdown: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            let Some(event) = engine.recv_timeout(POLL_INTERVAL) else {
                continue;
            };
            let msg = match event {
                EngineEvent::Progress(progress) => {
                    folio_debug!("{}: {} bytes", progress.location, progress.bytes);
                    continue;
                }
                EngineEvent::DocumentFetched { location, result } => {
                    document_msg(&location, result)
                }
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    })
}

/// Fetch and decode failures both end in `EntriesFailed`; the entry list stays empty.
pub fn document_msg(
    location: &str,
    result: Result<FetchOutput, folio_engine::FetchError>,
) -> Msg {
    let output = match result {
        Ok(output) => output,
        Err(err) => {
            folio_warn!("Fetching entries from {} failed: {}", location, err);
            return Msg::EntriesFailed {
                reason: err.to_string(),
            };
        }
    };
    match decode_entries(&output.bytes) {
        Ok(entries) => {
            folio_info!(
                "Loaded {} entries from {} ({} bytes)",
                entries.len(),
                output.metadata.final_location,
                output.metadata.byte_len
            );
            Msg::EntriesLoaded(entries)
        }
        Err(err) => {
            folio_warn!("Entries document from {} is malformed: {}", location, err);
            Msg::EntriesFailed {
                reason: err.to_string(),
            }
        }
    }
}
