use std::collections::HashSet;
use std::fmt;

use crate::PortfolioEntry;

const ALL_LABEL: &str = "All";

/// One axis selection: either unconstrained or a concrete tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Tag(String),
}

impl Selection {
    /// Parse a dropdown value. The literal `"All"` is the sentinel.
    ///
    /// Surrounding whitespace is ignored, as it is when tags are compared.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == ALL_LABEL {
            Selection::All
        } else {
            Selection::Tag(raw.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Selection::All => ALL_LABEL,
            Selection::Tag(tag) => tag,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    fn admits(&self, tags: &[String]) -> bool {
        match self {
            Selection::All => true,
            Selection::Tag(tag) => {
                let tag = tag.trim();
                tags.iter().any(|t| t.trim() == tag)
            }
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Architecture,
    Technology,
}

impl Axis {
    pub fn tags_of(self, entry: &PortfolioEntry) -> &[String] {
        match self {
            Axis::Architecture => &entry.architecture,
            Axis::Technology => &entry.technologies,
        }
    }
}

/// Two independent axis selections, both `All` initially.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub architecture: Selection,
    pub technology: Selection,
}

impl FilterState {
    pub fn new(architecture: Selection, technology: Selection) -> Self {
        Self {
            architecture,
            technology,
        }
    }

    pub fn selection(&self, axis: Axis) -> &Selection {
        match axis {
            Axis::Architecture => &self.architecture,
            Axis::Technology => &self.technology,
        }
    }

    pub fn set(&mut self, axis: Axis, selection: Selection) {
        match axis {
            Axis::Architecture => self.architecture = selection,
            Axis::Technology => self.technology = selection,
        }
    }

    /// Both axes must admit the entry.
    pub fn matches(&self, entry: &PortfolioEntry) -> bool {
        self.architecture.admits(Axis::Architecture.tags_of(entry))
            && self.technology.admits(Axis::Technology.tags_of(entry))
    }
}

/// Dropdown options for one axis: `All` followed by distinct tags in first-seen order.
///
/// Tags are trimmed. Blank tags and tags spelled like the `All` sentinel are not
/// offered, since selecting them would mean "no constraint".
pub fn available_options(entries: &[PortfolioEntry], axis: Axis) -> Vec<Selection> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options = vec![Selection::All];
    for tag in entries.iter().flat_map(|entry| axis.tags_of(entry)) {
        let tag = tag.trim();
        if tag.is_empty() || tag == ALL_LABEL {
            continue;
        }
        if seen.insert(tag) {
            options.push(Selection::Tag(tag.to_string()));
        }
    }
    options
}

/// Order-preserving subsequence of `entries` admitted by `filter`.
pub fn apply_filter<'a>(
    filter: &FilterState,
    entries: &'a [PortfolioEntry],
) -> Vec<&'a PortfolioEntry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}
