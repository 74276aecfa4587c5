use std::sync::Once;

use folio_core::{
    update, AppState, Effect, FilterState, Layout, LoadStatus, Msg, PortfolioEntry, Selection,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(folio_logging::initialize_for_tests);
}

fn entry(title: &str, architecture: &[&str], technologies: &[&str]) -> PortfolioEntry {
    PortfolioEntry {
        title: title.to_string(),
        picture: None,
        architecture: architecture.iter().map(|s| s.to_string()).collect(),
        technologies: technologies.iter().map(|s| s.to_string()).collect(),
        link: None,
        description: format!("{title} description"),
    }
}

fn loaded(entries: Vec<PortfolioEntry>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(state, Msg::EntriesLoaded(entries));
    state
}

#[test]
fn started_requests_single_fetch() {
    init_logging();
    let state = AppState::new().with_source("data/entries.json");

    let (mut state, effects) = update(state, Msg::Started);
    assert_eq!(
        effects,
        vec![Effect::FetchEntries {
            source: "data/entries.json".to_string()
        }]
    );
    assert_eq!(*state.status(), LoadStatus::Loading);
    assert!(state.consume_dirty());

    let (state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
    assert_eq!(*state.status(), LoadStatus::Loading);
}

#[test]
fn entries_are_empty_until_loaded() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let view = state.view();
    assert_eq!(view.total_entries, 0);
    assert_eq!(view.architecture_options, vec![Selection::All]);
}

#[test]
fn loaded_entries_replace_list_wholesale() {
    init_logging();
    let state = loaded(vec![entry("A", &["Web"], &["Go"])]);
    let (state, _) = update(
        state,
        Msg::EntriesLoaded(vec![entry("B", &["CLI"], &[]), entry("C", &[], &[])]),
    );

    let titles: Vec<&str> = state.entries().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["B", "C"]);
    assert_eq!(*state.status(), LoadStatus::Loaded);
}

#[test]
fn fetch_failure_keeps_entries_empty_and_is_distinguishable() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (mut state, effects) = update(
        state,
        Msg::EntriesFailed {
            reason: "http status 500".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.entries().is_empty());
    assert_eq!(
        state.view().status,
        LoadStatus::Failed {
            reason: "http status 500".to_string()
        }
    );
    assert!(state.consume_dirty());

    let empty = loaded(Vec::new());
    assert_eq!(empty.view().status, LoadStatus::Loaded);
    assert_ne!(empty.view().status, state.view().status);
}

#[test]
fn selecting_a_filter_emits_persist_effect() {
    init_logging();
    let state = loaded(vec![entry("A", &["Web"], &["Go"])]);

    let (state, effects) = update(state, Msg::ArchitectureSelected(Selection::parse("Web")));
    assert_eq!(
        effects,
        vec![Effect::PersistFilter(FilterState::new(
            Selection::Tag("Web".into()),
            Selection::All
        ))]
    );

    let (_state, effects) = update(state, Msg::TechnologySelected(Selection::parse("Go")));
    assert_eq!(
        effects,
        vec![Effect::PersistFilter(FilterState::new(
            Selection::Tag("Web".into()),
            Selection::Tag("Go".into())
        ))]
    );
}

#[test]
fn reselecting_same_value_is_quiet() {
    init_logging();
    let mut state = loaded(vec![entry("A", &["Web"], &["Go"])]);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::ArchitectureSelected(Selection::All));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
}

#[test]
fn filter_selection_before_load_applies_after_load() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(state, Msg::TechnologySelected(Selection::parse("Rust")));
    assert_eq!(state.view().shown_entries, 0);

    let (state, _) = update(
        state,
        Msg::EntriesLoaded(vec![
            entry("A", &["Web"], &["Go"]),
            entry("B", &["CLI"], &["Rust"]),
        ]),
    );
    let view = state.view();
    assert_eq!(view.total_entries, 2);
    assert_eq!(view.shown_entries, 1);
    let shown: Vec<&str> = view
        .columns
        .iter()
        .flatten()
        .map(|card| card.title.as_str())
        .collect();
    assert_eq!(shown, vec!["B"]);
}

#[test]
fn restored_filter_does_not_persist_again() {
    init_logging();
    let restored = FilterState::new(Selection::Tag("CLI".into()), Selection::All);
    let (mut state, effects) = update(AppState::new(), Msg::RestoreFilter(restored.clone()));

    assert!(effects.is_empty());
    assert_eq!(state.filter(), &restored);
    assert!(state.consume_dirty());
}

#[test]
fn layout_change_reshapes_columns() {
    init_logging();
    let state = loaded(vec![
        entry("A", &[], &[]),
        entry("B", &[], &[]),
        entry("C", &[], &[]),
    ]);
    assert_eq!(state.view().columns.len(), 2);

    let (state, effects) = update(state, Msg::LayoutChanged(Layout::Single));
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.layout, Layout::Single);
    assert_eq!(view.columns.len(), 1);
    assert_eq!(view.columns[0].len(), 3);
}
