use crate::{AppState, Axis, Effect, LoadStatus, Msg, Selection};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            // Only one fetch per run; later starts are ignored.
            if *state.status() == LoadStatus::Idle {
                state.begin_loading();
                vec![Effect::FetchEntries {
                    source: state.source().to_string(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::EntriesLoaded(entries) => {
            state.replace_entries(entries);
            Vec::new()
        }
        Msg::EntriesFailed { reason } => {
            state.fail_loading(reason);
            Vec::new()
        }
        Msg::ArchitectureSelected(selection) => select(&mut state, Axis::Architecture, selection),
        Msg::TechnologySelected(selection) => select(&mut state, Axis::Technology, selection),
        Msg::LayoutChanged(layout) => {
            state.set_layout(layout);
            Vec::new()
        }
        Msg::RestoreFilter(filter) => {
            state.restore_filter(filter);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn select(state: &mut AppState, axis: Axis, selection: Selection) -> Vec<Effect> {
    if state.select(axis, selection) {
        vec![Effect::PersistFilter(state.filter().clone())]
    } else {
        Vec::new()
    }
}
