use serde::{Deserialize, Serialize};

use crate::{
    assign_colors, ColorBand, FilterState, Hsl, LoadStatus, PortfolioEntry, Seed, Selection,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Layout {
    Single,
    /// Even-indexed entries on the left, odd-indexed on the right.
    #[default]
    Columns,
}

/// Independent seeds so each column keeps its own reproducible coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSeeds {
    pub primary: Seed,
    pub secondary: Seed,
}

impl Default for ColumnSeeds {
    fn default() -> Self {
        Self {
            primary: Seed(42),
            secondary: Seed(1337),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Backdrop {
    Picture(String),
    Tile(Hsl),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryCard {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub architecture: Vec<String>,
    pub technologies: Vec<String>,
    pub backdrop: Backdrop,
}

impl EntryCard {
    fn new(entry: &PortfolioEntry, color: Hsl) -> Self {
        let backdrop = match &entry.picture {
            Some(url) => Backdrop::Picture(url.clone()),
            None => Backdrop::Tile(color),
        };
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            link: entry.link.clone(),
            architecture: entry.architecture.clone(),
            technologies: entry.technologies.clone(),
            backdrop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub status: LoadStatus,
    pub filter: FilterState,
    pub layout: Layout,
    pub architecture_options: Vec<Selection>,
    pub technology_options: Vec<Selection>,
    pub columns: Vec<Vec<EntryCard>>,
    pub total_entries: usize,
    pub shown_entries: usize,
    pub dirty: bool,
}

/// Zip entries with colors drawn from `seed`, one color per entry in display order.
///
/// Every entry consumes a color, pictured or not, so a tile's color depends only
/// on its position.
pub fn compose_cards(
    entries: &[&PortfolioEntry],
    seed: Seed,
    band: &ColorBand,
) -> Vec<EntryCard> {
    let colors = assign_colors(seed, band, entries.len());
    entries
        .iter()
        .zip(colors)
        .map(|(entry, color)| EntryCard::new(entry, color))
        .collect()
}

/// Stable partition by index parity.
pub fn split_columns<T: Clone>(items: &[T]) -> (Vec<T>, Vec<T>) {
    let mut left = Vec::with_capacity(items.len().div_ceil(2));
    let mut right = Vec::with_capacity(items.len() / 2);
    for (index, item) in items.iter().enumerate() {
        if index % 2 == 0 {
            left.push(item.clone());
        } else {
            right.push(item.clone());
        }
    }
    (left, right)
}

pub fn compose_columns(
    entries: &[&PortfolioEntry],
    layout: Layout,
    seeds: ColumnSeeds,
    band: &ColorBand,
) -> Vec<Vec<EntryCard>> {
    match layout {
        Layout::Single => vec![compose_cards(entries, seeds.primary, band)],
        Layout::Columns => {
            let (left, right) = split_columns(entries);
            vec![
                compose_cards(&left, seeds.primary, band),
                compose_cards(&right, seeds.secondary, band),
            ]
        }
    }
}
