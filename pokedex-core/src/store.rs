//! Single-owner state container for the browser.
//!
//! The UI thread owns the [`Store`] and changes it only through
//! [`Store::dispatch`]. Every dispatch that changes the filter recomputes the
//! derived view before listeners are told about it, so a listener always sees
//! a consistent store.

use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::model::Pokemon;

/// User interactions produced by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSearchText(String),
    ToggleType(String),
    ToggleGame(String),
    ClearFilters,
    /// Open the detail view for the entity with this id.
    Select(u32),
    DismissDetail,
}

/// Notifications sent to listeners after a dispatch changed something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The filtered view was recomputed; `visible` entries survive.
    FilterChanged { visible: usize },
    SelectionChanged(Option<u32>),
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

pub struct Store {
    catalog: Catalog,
    filter: FilterState,
    selected: Option<u32>,
    /// Indices into `catalog` of the entries passing `filter`.
    visible: Vec<usize>,
    revision: u64,
    listeners: Vec<Listener>,
}

impl Store {
    pub fn new(catalog: Catalog) -> Self {
        let filter = FilterState::new();
        let visible = filter.matching_indices(catalog.as_slice());
        Self {
            catalog,
            filter,
            selected: None,
            visible,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// Register a listener that is called after every effective change.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply `action`. Returns true if the store changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        log::debug!("dispatch {:?}", action);
        let event = match action {
            Action::SetSearchText(text) => {
                if self.filter.search_text == text {
                    return false;
                }
                self.filter.set_search_text(text);
                self.refilter()
            }
            Action::ToggleType(label) => {
                self.filter.toggle_type(&label);
                self.refilter()
            }
            Action::ToggleGame(game) => {
                self.filter.toggle_game(&game);
                self.refilter()
            }
            Action::ClearFilters => {
                if !self.filter.has_filters() {
                    return false;
                }
                self.filter.clear_filters();
                self.refilter()
            }
            Action::Select(id) => {
                if self.catalog.get(id).is_none() {
                    log::warn!("Ignoring selection of unknown id {}", id);
                    return false;
                }
                if self.selected == Some(id) {
                    return false;
                }
                self.selected = Some(id);
                StoreEvent::SelectionChanged(self.selected)
            }
            Action::DismissDetail => {
                if self.selected.take().is_none() {
                    return false;
                }
                StoreEvent::SelectionChanged(None)
            }
        };
        self.notify(&event);
        true
    }

    fn refilter(&mut self) -> StoreEvent {
        self.visible = self.filter.matching_indices(self.catalog.as_slice());
        self.revision += 1;
        StoreEvent::FilterChanged {
            visible: self.visible.len(),
        }
    }

    fn notify(&mut self, event: &StoreEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Increments each time the filtered view is recomputed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The filtered view, in catalog order.
    pub fn visible(&self) -> impl Iterator<Item = &Pokemon> + '_ {
        let entries = self.catalog.as_slice();
        self.visible.iter().map(move |&i| &entries[i])
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn selected(&self) -> Option<&Pokemon> {
        self.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn all_types(&self) -> Vec<String> {
        self.catalog.all_types()
    }

    pub fn all_games(&self) -> Vec<String> {
        self.catalog.all_games()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("entries", &self.catalog.len())
            .field("filter", &self.filter)
            .field("selected", &self.selected)
            .field("visible", &self.visible.len())
            .field("revision", &self.revision)
            .finish()
    }
}
