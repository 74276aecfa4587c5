use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use chrono::Utc;
use folio_core::{
    update, AppState, AppViewModel, ColumnSeeds, Layout, LoadStatus, Msg, Selection,
};
use folio_engine::{AtomicFileWriter, FetchSettings};
use folio_logging::{folio_debug, folio_info};

use super::effects::EffectRunner;
use super::{persistence, ui};

pub const PAGE_FILENAME: &str = "index.html";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub source: String,
    pub base_url: Option<String>,
    pub output_dir: PathBuf,
    pub layout: Layout,
    pub seeds: ColumnSeeds,
    pub fetch: FetchSettings,
    pub architecture: Option<Selection>,
    pub technology: Option<Selection>,
}

/// Load the entries, apply the requested selections and write the page.
///
/// Blocks until the single fetch resolves. A failed load is not an error here:
/// the page is still written, with a notice in place of the entries.
pub fn run_app(options: RunOptions) -> anyhow::Result<AppViewModel> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(
        msg_tx,
        options.fetch.clone(),
        options.base_url.clone(),
        options.output_dir.clone(),
    )
    .context("failed to start fetch engine")?;

    let mut state = AppState::new()
        .with_source(options.source.clone())
        .with_layout(options.layout)
        .with_seeds(options.seeds);

    for msg in startup_messages(&options) {
        state = dispatch(state, msg, &runner);
    }

    while !is_settled(state.status()) {
        let msg = msg_rx
            .recv()
            .context("engine stopped before the entries document resolved")?;
        state = dispatch(state, msg, &runner);
    }

    let view = state.view();
    let page = ui::render::render_page(&view, &Utc::now().to_rfc3339());
    let writer = AtomicFileWriter::new(&options.output_dir);
    let path = writer
        .write(PAGE_FILENAME, page)
        .with_context(|| format!("failed to write page into {}", options.output_dir.display()))?;
    folio_info!("Wrote {:?}", path);

    Ok(view)
}

/// The saved filter is restored first so flags override it axis by axis and
/// any change they make, including back to `All`, is saved again.
fn startup_messages(options: &RunOptions) -> Vec<Msg> {
    let mut messages = Vec::new();
    if let Some(filter) = persistence::load_filter(&options.output_dir) {
        messages.push(Msg::RestoreFilter(filter));
    }
    messages.push(Msg::Started);
    if let Some(selection) = options.architecture.clone() {
        messages.push(Msg::ArchitectureSelected(selection));
    }
    if let Some(selection) = options.technology.clone() {
        messages.push(Msg::TechnologySelected(selection));
    }
    messages
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (mut state, effects) = update(state, msg);
    if state.consume_dirty() {
        folio_debug!(
            "State changed: status={:?} architecture={} technology={}",
            state.status(),
            state.filter().architecture,
            state.filter().technology
        );
    }
    runner.enqueue(effects);
    state
}

fn is_settled(status: &LoadStatus) -> bool {
    matches!(status, LoadStatus::Loaded | LoadStatus::Failed { .. })
}
