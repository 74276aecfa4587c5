#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchEntries { source: String },
    PersistFilter(crate::FilterState),
}
