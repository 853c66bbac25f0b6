use pokedex_core::Pokemon;

use crate::state::CardImage;
use crate::util::capitalize;
use crate::widgets::{remote_image, type_badge};

const IMAGE_SIZE: f32 = 120.0;
const INNER_MARGIN: f32 = 8.0;

/// Render one grid card in exactly `size`. Content that doesn't fit is
/// clipped. The whole card is clickable.
pub fn show(
    ui: &mut egui::Ui,
    pokemon: &Pokemon,
    image: &mut CardImage,
    size: egui::Vec2,
) -> egui::Response {
    image.poll(ui.ctx());

    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let mut child = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect)
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );
        child.set_clip_rect(rect.intersect(ui.clip_rect()));

        let frame = egui::Frame::group(child.style())
            .rounding(8.0)
            .inner_margin(egui::Margin::same(INNER_MARGIN));
        let chrome = egui::Vec2::splat(2.0 * (INNER_MARGIN + frame.stroke.width));
        frame.show(&mut child, |ui| {
            let content = (size - chrome).max(egui::Vec2::ZERO);
            ui.set_min_size(content);
            ui.set_max_size(content);
            ui.vertical_centered(|ui| {
                remote_image::show(ui, image, egui::Vec2::splat(IMAGE_SIZE));
                ui.label(egui::RichText::new(pokemon.display_number()).weak());
                ui.strong(capitalize(&pokemon.name));
                ui.horizontal_wrapped(|ui| {
                    for label in &pokemon.types {
                        type_badge::show(ui, label, 11.0);
                    }
                });
                ui.add(
                    egui::Label::new(egui::RichText::new(&pokemon.description).small().weak())
                        .truncate(),
                );
            });
        });
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}
