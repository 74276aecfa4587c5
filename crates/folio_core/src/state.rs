use crate::view_model::AppViewModel;
use crate::{
    apply_filter, available_options, compose_columns, Axis, ColorBand, ColumnSeeds, FilterState,
    Layout, PortfolioEntry, Selection,
};

pub const DEFAULT_SOURCE: &str = "entries.json";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    source: String,
    entries: Vec<PortfolioEntry>,
    filter: FilterState,
    status: LoadStatus,
    layout: Layout,
    seeds: ColumnSeeds,
    band: ColorBand,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            entries: Vec::new(),
            filter: FilterState::default(),
            status: LoadStatus::Idle,
            layout: Layout::default(),
            seeds: ColumnSeeds::default(),
            band: ColorBand::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_seeds(mut self, seeds: ColumnSeeds) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_band(mut self, band: ColorBand) -> Self {
        self.band = band;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn entries(&self) -> &[PortfolioEntry] {
        &self.entries
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Derive the presentation model. The filtered list is recomputed on every call.
    pub fn view(&self) -> AppViewModel {
        let shown = apply_filter(&self.filter, &self.entries);
        AppViewModel {
            status: self.status.clone(),
            filter: self.filter.clone(),
            layout: self.layout,
            architecture_options: available_options(&self.entries, Axis::Architecture),
            technology_options: available_options(&self.entries, Axis::Technology),
            columns: compose_columns(&shown, self.layout, self.seeds, &self.band),
            total_entries: self.entries.len(),
            shown_entries: shown.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading;
        self.mark_dirty();
    }

    pub(crate) fn replace_entries(&mut self, entries: Vec<PortfolioEntry>) {
        self.entries = entries;
        self.status = LoadStatus::Loaded;
        self.mark_dirty();
    }

    pub(crate) fn fail_loading(&mut self, reason: String) {
        self.status = LoadStatus::Failed { reason };
        self.mark_dirty();
    }

    /// Returns false when the selection is unchanged.
    pub(crate) fn select(&mut self, axis: Axis, selection: Selection) -> bool {
        if self.filter.selection(axis) == &selection {
            return false;
        }
        self.filter.set(axis, selection);
        self.mark_dirty();
        true
    }

    pub(crate) fn restore_filter(&mut self, filter: FilterState) {
        if self.filter != filter {
            self.filter = filter;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        if self.layout != layout {
            self.layout = layout;
            self.mark_dirty();
        }
    }
}
