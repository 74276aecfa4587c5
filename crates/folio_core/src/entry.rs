use serde::{Deserialize, Serialize};

/// One project shown on the portfolio page.
///
/// Entries are immutable once decoded; a successful load replaces the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub title: String,
    #[serde(default)]
    pub picture: Option<String>,
    pub architecture: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub description: String,
}

impl PortfolioEntry {
    pub fn has_picture(&self) -> bool {
        self.picture.is_some()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed entries document: {message}")]
    Json { message: String },
    /// Titles are headings on the page, so a whitespace-only title counts as empty.
    #[error("entry {index} has an empty title")]
    EmptyTitle { index: usize },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json {
            message: err.to_string(),
        }
    }
}

/// Decode a JSON array of entry records. Any malformed record fails the whole document.
///
/// A title that is empty after trimming is rejected with [`DecodeError::EmptyTitle`].
pub fn decode_entries(bytes: &[u8]) -> Result<Vec<PortfolioEntry>, DecodeError> {
    let entries: Vec<PortfolioEntry> = serde_json::from_slice(bytes)?;
    validate(entries)
}

pub fn decode_entries_str(text: &str) -> Result<Vec<PortfolioEntry>, DecodeError> {
    decode_entries(text.as_bytes())
}

fn validate(entries: Vec<PortfolioEntry>) -> Result<Vec<PortfolioEntry>, DecodeError> {
    if let Some(index) = entries.iter().position(|e| e.title.trim().is_empty()) {
        return Err(DecodeError::EmptyTitle { index });
    }
    Ok(entries)
}
