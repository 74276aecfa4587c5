#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application started; request the entries document.
    Started,
    /// Entries document fetched and decoded.
    EntriesLoaded(Vec<crate::PortfolioEntry>),
    /// Entries document could not be fetched or decoded.
    EntriesFailed { reason: String },
    /// User picked a value in the architecture dropdown.
    ArchitectureSelected(crate::Selection),
    /// User picked a value in the technology dropdown.
    TechnologySelected(crate::Selection),
    LayoutChanged(crate::Layout),
    /// Restore a previously persisted filter selection.
    RestoreFilter(crate::FilterState),
    /// Fallback for placeholder wiring.
    NoOp,
}
