use std::path::Path;

use folio_core::{FilterState, Selection};
use folio_engine::AtomicFileWriter;
use folio_logging::{folio_error, folio_info, folio_warn};
use serde::{Deserialize, Serialize};

pub const STATE_FILENAME: &str = ".folio_state.ron";

/// `None` on an axis means "All".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
struct PersistedFilter {
    architecture: Option<String>,
    technology: Option<String>,
}

impl From<&FilterState> for PersistedFilter {
    fn from(filter: &FilterState) -> Self {
        let tag = |selection: &Selection| match selection {
            Selection::All => None,
            Selection::Tag(tag) => Some(tag.clone()),
        };
        Self {
            architecture: tag(&filter.architecture),
            technology: tag(&filter.technology),
        }
    }
}

impl From<PersistedFilter> for FilterState {
    fn from(persisted: PersistedFilter) -> Self {
        let selection = |tag: Option<String>| tag.map_or(Selection::All, Selection::Tag);
        FilterState::new(
            selection(persisted.architecture),
            selection(persisted.technology),
        )
    }
}

/// Last saved filter selection, if any. Unreadable state is logged and ignored.
pub fn load_filter(state_dir: &Path) -> Option<FilterState> {
    let writer = AtomicFileWriter::new(state_dir);
    let content = match writer.read_optional(STATE_FILENAME) {
        Ok(Some(text)) => text,
        Ok(None) => return None,
        Err(err) => {
            folio_warn!("Failed to read filter state from {:?}: {}", state_dir, err);
            return None;
        }
    };

    match ron::from_str::<PersistedFilter>(&content) {
        Ok(persisted) => {
            folio_info!("Restored filter selection from {:?}", state_dir);
            Some(persisted.into())
        }
        Err(err) => {
            folio_warn!("Failed to parse filter state in {:?}: {}", state_dir, err);
            None
        }
    }
}

pub fn save_filter(state_dir: &Path, filter: &FilterState) {
    let pretty = ron::ser::PrettyConfig::new();
    let content = match ron::ser::to_string_pretty(&PersistedFilter::from(filter), pretty) {
        Ok(text) => text,
        Err(err) => {
            folio_error!("Failed to serialize filter state: {}", err);
            return;
        }
    };

    let writer = AtomicFileWriter::new(state_dir);
    if let Err(err) = writer.write(STATE_FILENAME, content) {
        folio_error!("Failed to write filter state to {:?}: {}", state_dir, err);
    }
}
