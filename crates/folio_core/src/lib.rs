//! Folio core: pure state machine, entry decoding, filtering and view-model helpers.
mod color;
mod effect;
mod entry;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use color::{assign_colors, ColorBand, Hsl, Lcg, Seed};
pub use effect::Effect;
pub use entry::{decode_entries, decode_entries_str, DecodeError, PortfolioEntry};
pub use filter::{apply_filter, available_options, Axis, FilterState, Selection};
pub use msg::Msg;
pub use state::{AppState, LoadStatus, DEFAULT_SOURCE};
pub use update::update;
pub use view_model::{
    compose_cards, compose_columns, split_columns, AppViewModel, Backdrop, ColumnSeeds,
    EntryCard, Layout,
};
