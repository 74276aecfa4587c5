use std::path::Path;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use folio_logging::folio_debug;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;

use crate::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, FetchProgress};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// `None` leaves connecting to the OS defaults.
    pub connect_timeout: Option<Duration>,
    /// `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    /// Empty accepts any content type; the decoder is the only validation.
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            request_timeout: None,
            redirect_limit: 5,
            max_bytes: 2 * 1024 * 1024,
            allowed_content_types: Vec::new(),
        }
    }
}

pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(
        &self,
        location: &str,
        sink: &dyn ProgressSink,
    ) -> Result<FetchOutput, FetchError>;
}

/// Single unconditional GET; no retries.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(
        &self,
        redirect_counter: Arc<AtomicUsize>,
    ) -> Result<reqwest::Client, FetchError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let count = attempt.previous().len();
            redirect_counter.store(count, Ordering::Relaxed);
            if count >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        let mut builder = reqwest::Client::builder().redirect(policy);
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        if self.settings.allowed_content_types.is_empty() {
            return true;
        }
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        location: &str,
        sink: &dyn ProgressSink,
    ) -> Result<FetchOutput, FetchError> {
        let parsed = reqwest::Url::parse(location)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.build_client(redirect_counter.clone())?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, content_len, location));
            }
        }

        let final_location = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    final_location.clone(),
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, next_len, location));
            }
            bytes.extend_from_slice(&chunk);
            sink.emit(EngineEvent::Progress(FetchProgress {
                location: location.to_string(),
                bytes: bytes.len() as u64,
            }));
        }

        let metadata = FetchMetadata {
            original_location: location.to_string(),
            final_location,
            redirect_count: redirect_counter.load(Ordering::Relaxed),
            content_type,
            byte_len: bytes.len() as u64,
        };

        Ok(FetchOutput { bytes, metadata })
    }
}

/// Reads the document from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    max_bytes: u64,
}

impl FileFetcher {
    pub fn new(settings: &FetchSettings) -> Self {
        Self {
            max_bytes: settings.max_bytes,
        }
    }
}

#[async_trait::async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(
        &self,
        location: &str,
        sink: &dyn ProgressSink,
    ) -> Result<FetchOutput, FetchError> {
        let path = Path::new(location);
        let meta = tokio::fs::metadata(path).await.map_err(map_io_error)?;
        if meta.len() > self.max_bytes {
            return Err(too_large(self.max_bytes, meta.len(), location));
        }
        let bytes = tokio::fs::read(path).await.map_err(map_io_error)?;
        folio_debug!("Read {} bytes from {}", bytes.len(), location);
        sink.emit(EngineEvent::Progress(FetchProgress {
            location: location.to_string(),
            bytes: bytes.len() as u64,
        }));

        let metadata = FetchMetadata {
            original_location: location.to_string(),
            final_location: location.to_string(),
            redirect_count: 0,
            content_type: None,
            byte_len: bytes.len() as u64,
        };
        Ok(FetchOutput { bytes, metadata })
    }
}

fn too_large(max_bytes: u64, actual: u64, location: &str) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        location,
    )
}

fn map_io_error(err: std::io::Error) -> FetchError {
    FetchError::new(FailureKind::Io, err.to_string())
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
