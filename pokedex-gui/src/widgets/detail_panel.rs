use egui_extras::{Column, TableBuilder};
use pokedex_core::Pokemon;

use crate::state::DetailState;
use crate::util::{capitalize, join_or_placeholder};
use crate::widgets::{remote_image, type_badge};

const IMAGE_SIZE: f32 = 300.0;

/// Render the detail window. Returns true when the user asked to close it.
pub fn show(ctx: &egui::Context, pokemon: &Pokemon, detail: &mut DetailState) -> bool {
    detail.image.poll(ctx);

    let mut open = true;
    let mut close_clicked = false;

    egui::Window::new(capitalize(&pokemon.name))
        .id(egui::Id::new("detail_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(pokemon.display_number()).weak());
                remote_image::show(ui, &detail.image, egui::Vec2::splat(IMAGE_SIZE));
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for label in &pokemon.types {
                        type_badge::show(ui, label, 14.0);
                    }
                });
            });

            ui.add_space(8.0);
            if pokemon.description.is_empty() {
                ui.label(egui::RichText::new("No description.").weak().italics());
            } else {
                ui.label(&pokemon.description);
            }

            ui.add_space(8.0);
            ui.separator();
            details_table(ui, pokemon);

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    !open || close_clicked || escape
}

fn details_table(ui: &mut egui::Ui, pokemon: &Pokemon) {
    let row_height = ui.text_style_height(&egui::TextStyle::Body) + 4.0;
    let types: Vec<String> = pokemon.types.iter().map(|t| capitalize(t)).collect();
    let rows = [
        ("Generation", pokemon.generation.to_string()),
        ("Types", join_or_placeholder(&types)),
        ("Games", join_or_placeholder(&pokemon.games)),
    ];

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::exact(90.0))
        .column(Column::remainder())
        .body(|mut body| {
            for (name, value) in rows {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.strong(name);
                    });
                    row.col(|ui| {
                        ui.label(value);
                    });
                });
            }
        });
}
