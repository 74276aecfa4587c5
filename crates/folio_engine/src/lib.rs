//! Folio engine: fetching the entries document and writing rendered output.
mod engine;
mod fetch;
mod persist;
mod source;
mod types;

pub use engine::EngineHandle;
pub use fetch::{
    ChannelProgressSink, FetchSettings, Fetcher, FileFetcher, ProgressSink, ReqwestFetcher,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use source::{EntrySource, SourceError};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, FetchProgress};
