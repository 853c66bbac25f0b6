use pokedex_core::ImageState;

use crate::state::CardImage;

/// Draw the current state of an image slot in a box of `size`: a spinner
/// while loading, the texture once loaded, or a placeholder glyph with the
/// failure diagnostic.
pub fn show(ui: &mut egui::Ui, image: &CardImage, size: egui::Vec2) {
    match (image.slot.state(), image.texture.as_ref()) {
        (ImageState::Loaded(_), Some(texture)) => {
            ui.add(
                egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                    .fit_to_exact_size(size),
            );
        }
        (ImageState::Failed(diagnostic), _) => {
            ui.allocate_ui_with_layout(
                size,
                egui::Layout::top_down(egui::Align::Center),
                |ui| {
                    ui.set_min_size(size);
                    ui.label(egui::RichText::new("🖼").size(size.y * 0.35).weak());
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(diagnostic)
                                .small()
                                .color(ui.visuals().error_fg_color),
                        )
                        .wrap(),
                    );
                },
            );
        }
        // Loading, or loaded but not uploaded yet
        _ => {
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            if ui.is_rect_visible(rect) {
                let spinner = rect.shrink(size.min_elem() * 0.35);
                ui.put(spinner, egui::Spinner::new());
            }
        }
    }
}
