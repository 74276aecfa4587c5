use std::fmt;
use std::path::PathBuf;

use url::Url;

/// Where the entries document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("invalid base url {base}: {message}")]
    InvalidBase { base: String, message: String },
    #[error("cannot join {path} onto {base}: {message}")]
    Join {
        base: String,
        path: String,
        message: String,
    },
}

impl EntrySource {
    /// `http://` and `https://` strings are URLs; anything else is a filesystem path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            EntrySource::Url(raw.to_string())
        } else {
            EntrySource::File(PathBuf::from(raw))
        }
    }

    /// Resolve a relative file source against a site base URL, as a browser would
    /// resolve the page's relative fetch path. URLs and absolute paths are kept.
    pub fn resolve_against(&self, base: &str) -> Result<EntrySource, SourceError> {
        let path = match self {
            EntrySource::File(path) if path.is_relative() => path,
            _ => return Ok(self.clone()),
        };
        let base_url = Url::parse(base).map_err(|err| SourceError::InvalidBase {
            base: base.to_string(),
            message: err.to_string(),
        })?;
        let relative = path.to_string_lossy().replace('\\', "/");
        let joined = base_url
            .join(&relative)
            .map_err(|err| SourceError::Join {
                base: base.to_string(),
                path: relative.clone(),
                message: err.to_string(),
            })?;
        Ok(EntrySource::Url(joined.to_string()))
    }
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySource::Url(url) => f.write_str(url),
            EntrySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
