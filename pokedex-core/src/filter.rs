use std::collections::BTreeSet;

use crate::model::Pokemon;

/// Search text plus the two facet selections.
///
/// Created empty at startup and only changed through the toggle/clear
/// methods; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub selected_types: BTreeSet<String>,
    pub selected_games: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Add `label` if absent, remove it if present.
    pub fn toggle_type(&mut self, label: &str) {
        toggle(&mut self.selected_types, label);
    }

    pub fn toggle_game(&mut self, game: &str) {
        toggle(&mut self.selected_games, game);
    }

    pub fn is_type_selected(&self, label: &str) -> bool {
        self.selected_types.contains(label)
    }

    pub fn is_game_selected(&self, game: &str) -> bool {
        self.selected_games.contains(game)
    }

    /// True when either facet has a selection. Search text doesn't count.
    pub fn has_filters(&self) -> bool {
        !self.selected_types.is_empty() || !self.selected_games.is_empty()
    }

    /// Empty both facet selections. The search text is left alone.
    pub fn clear_filters(&mut self) {
        self.selected_types.clear();
        self.selected_games.clear();
    }

    pub fn apply<'a>(&self, catalog: &'a [Pokemon]) -> Vec<&'a Pokemon> {
        filter(
            catalog,
            &self.search_text,
            &self.selected_types,
            &self.selected_games,
        )
    }

    /// Positions in `catalog` of the entries that pass, in catalog order.
    pub fn matching_indices(&self, catalog: &[Pokemon]) -> Vec<usize> {
        let predicate = Predicate::new(
            &self.search_text,
            &self.selected_types,
            &self.selected_games,
        );
        catalog
            .iter()
            .enumerate()
            .filter(|(_, p)| predicate.matches(p))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Filter `catalog` by search text and facet selections.
///
/// The three constraints are ANDed; within a facet any selected value
/// matches. An empty search or empty selection imposes no constraint.
/// Catalog order is preserved.
pub fn filter<'a>(
    catalog: &'a [Pokemon],
    search_text: &str,
    selected_types: &BTreeSet<String>,
    selected_games: &BTreeSet<String>,
) -> Vec<&'a Pokemon> {
    let predicate = Predicate::new(search_text, selected_types, selected_games);
    catalog.iter().filter(|p| predicate.matches(p)).collect()
}

/// The composed predicate, with the search needle lower-cased once.
struct Predicate<'s> {
    needle: Option<String>,
    types: &'s BTreeSet<String>,
    games: &'s BTreeSet<String>,
}

impl<'s> Predicate<'s> {
    fn new(
        search_text: &str,
        types: &'s BTreeSet<String>,
        games: &'s BTreeSet<String>,
    ) -> Self {
        let needle = (!search_text.is_empty()).then(|| search_text.to_lowercase());
        Self {
            needle,
            types,
            games,
        }
    }

    fn matches(&self, pokemon: &Pokemon) -> bool {
        if let Some(ref needle) = self.needle
            && !pokemon.name.to_lowercase().contains(needle.as_str())
        {
            return false;
        }
        if !self.types.is_empty() && !self.types.iter().any(|t| pokemon.has_type(t)) {
            return false;
        }
        if !self.games.is_empty() && !self.games.iter().any(|g| pokemon.appears_in(g)) {
            return false;
        }
        true
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
