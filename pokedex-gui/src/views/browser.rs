use pokedex_core::{Action, Pokemon};

use crate::app::PokedexApp;
use crate::util::capitalize;
use crate::widgets::{card, detail_panel, filter_chips, filter_list};

const CARD_HEIGHT: f32 = 250.0;

/// Render the browser: facet sidebar, search and chips, the card grid, and
/// the detail window. User input is collected into `actions`.
pub fn show(ctx: &egui::Context, app: &mut PokedexApp, actions: &mut Vec<Action>) {
    egui::SidePanel::left("filters")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Pokédex");
            ui.separator();
            egui::ScrollArea::vertical()
                .id_salt("filters_scroll")
                .show(ui, |ui| show_filters(ui, app, actions));
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        show_toolbar(ui, app, actions);
        ui.separator();
        show_grid(ui, app, actions);
    });

    if let Some(detail) = app.detail.as_mut()
        && let Some(pokemon) = app.store.catalog().get(detail.pokemon_id)
        && detail_panel::show(ctx, pokemon, detail)
    {
        actions.push(Action::DismissDetail);
    }
}

fn show_filters(ui: &mut egui::Ui, app: &PokedexApp, actions: &mut Vec<Action>) {
    let filter = app.store.filter_state();

    if let Some(label) = filter_list::show(
        ui,
        "Types",
        &app.facet_types,
        |label| filter.is_type_selected(label),
        capitalize,
    ) {
        actions.push(Action::ToggleType(label));
    }

    ui.add_space(4.0);

    if let Some(game) = filter_list::show(
        ui,
        "Games",
        &app.facet_games,
        |game| filter.is_game_selected(game),
        str::to_owned,
    ) {
        actions.push(Action::ToggleGame(game));
    }
}

fn show_toolbar(ui: &mut egui::Ui, app: &mut PokedexApp, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .hint_text("Search Pokémon")
                .desired_width(260.0),
        );
        if response.changed() {
            actions.push(Action::SetSearchText(app.search_text.clone()));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(format!(
                "{} of {} Pokémon",
                app.store.visible_count(),
                app.store.catalog().len()
            ));
        });
    });

    let filter = app.store.filter_state();
    if filter.has_filters() {
        ui.add_space(4.0);
        if let Some(label) =
            filter_chips::show(ui, "Types:", &filter.selected_types, capitalize)
        {
            actions.push(Action::ToggleType(label));
        }
        if let Some(game) =
            filter_chips::show(ui, "Games:", &filter.selected_games, str::to_owned)
        {
            actions.push(Action::ToggleGame(game));
        }
        if ui.button("Clear All Filters").clicked() {
            actions.push(Action::ClearFilters);
        }
    }
}

fn show_grid(ui: &mut egui::Ui, app: &mut PokedexApp, actions: &mut Vec<Action>) {
    let visible: Vec<&Pokemon> = app.store.visible().collect();
    if visible.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(egui::RichText::new("No Pokémon match the current filters.").weak());
        });
        return;
    }

    let spacing = ui.spacing().item_spacing.x;
    let min_width = app.settings.display.card_min_width.max(120.0);
    let available = ui.available_width();
    let columns = (((available + spacing) / (min_width + spacing)).floor() as usize).max(1);
    let card_width = (available - spacing * (columns - 1) as f32) / columns as f32;
    let rows = visible.len().div_ceil(columns);

    let cards = &mut app.cards;
    let resolver = &app.resolver;
    egui::ScrollArea::vertical()
        .id_salt("card_grid")
        .auto_shrink([false, false])
        .show_rows(ui, CARD_HEIGHT, rows, |ui, row_range| {
            for row in row_range {
                ui.horizontal(|ui| {
                    let start = row * columns;
                    let end = (start + columns).min(visible.len());
                    for pokemon in &visible[start..end] {
                        let image = cards.get_or_mount(pokemon, resolver);
                        let response =
                            card::show(ui, pokemon, image, egui::vec2(card_width, CARD_HEIGHT));
                        if response.clicked() {
                            actions.push(Action::Select(pokemon.id));
                        }
                    }
                });
            }
        });
}
