use std::collections::HashSet;

use pokedex_core::{Action, Catalog, ImageResolver, ResourceBundle, Store, StoreEvent};

use crate::backend::images;
use crate::settings::{self, AppSettings};
use crate::state::{CardImages, DetailState};
use crate::views;

/// Main application state.
pub struct PokedexApp {
    pub settings: AppSettings,

    /// Catalog, filter, and selection. Changed only through [`PokedexApp::dispatch`].
    pub store: Store,

    /// Shared by every card and the detail view.
    pub resolver: ImageResolver,

    /// Image state for cards mounted in the grid.
    pub cards: CardImages,

    /// Present while the detail window is open.
    pub detail: Option<DetailState>,

    /// Edit buffer for the search field.
    pub search_text: String,

    /// Facet values, computed once from the catalog.
    pub facet_types: Vec<String>,
    pub facet_games: Vec<String>,

    /// Store revision the mounted cards were last pruned against.
    last_revision: u64,
}

impl PokedexApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = settings::load_settings();
        let theme = if settings.display.dark_mode {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        };
        cc.egui_ctx.set_theme(theme);

        let bundle = ResourceBundle::locate(settings::bundle_candidates(&settings));
        log::info!("Using resources at {}", bundle.root().display());

        let catalog = Catalog::load(&bundle);
        let resolver = images::build_resolver(bundle, &cc.egui_ctx);

        let mut store = Store::new(catalog);
        let ctx = cc.egui_ctx.clone();
        store.subscribe(move |event| {
            match event {
                StoreEvent::FilterChanged { visible } => {
                    log::debug!("Filter changed, {} visible", visible);
                }
                StoreEvent::SelectionChanged(id) => {
                    log::debug!("Selection changed to {:?}", id);
                }
            }
            ctx.request_repaint();
        });

        Self {
            facet_types: store.all_types(),
            facet_games: store.all_games(),
            last_revision: store.revision(),
            settings,
            store,
            resolver,
            cards: CardImages::default(),
            detail: None,
            search_text: String::new(),
        }
    }

    /// Forward an action to the store and bring the view state in line.
    pub fn dispatch(&mut self, action: Action) {
        if !self.store.dispatch(action) {
            return;
        }
        self.sync_detail();
        if self.store.revision() != self.last_revision {
            self.last_revision = self.store.revision();
            self.prune_cards();
        }
    }

    fn sync_detail(&mut self) {
        match self.store.selected() {
            Some(pokemon) => {
                if self.detail.as_ref().map(|d| d.pokemon_id) != Some(pokemon.id) {
                    self.detail = Some(DetailState::open(pokemon, &self.resolver));
                }
            }
            None => self.detail = None,
        }
    }

    /// Unmount cards whose entity left the filtered view.
    fn prune_cards(&mut self) {
        let visible: HashSet<u32> = self.store.visible().map(|p| p.id).collect();
        let dropped = self.cards.retain_visible(&visible);
        if dropped > 0 {
            log::debug!("Unmounted {} cards, {} still mounted", dropped, self.cards.len());
        }
    }
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        views::browser::show(ctx, self, &mut actions);
        for action in actions {
            self.dispatch(action);
        }
    }
}
