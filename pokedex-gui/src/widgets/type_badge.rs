use crate::util::capitalize;

/// Badge color for a type label. Unknown labels get a neutral gray.
pub fn type_color(label: &str) -> egui::Color32 {
    match label.to_lowercase().as_str() {
        "normal" => egui::Color32::from_rgb(168, 167, 122),
        "fire" => egui::Color32::from_rgb(238, 129, 48),
        "water" => egui::Color32::from_rgb(99, 144, 240),
        "electric" => egui::Color32::from_rgb(214, 181, 23),
        "grass" => egui::Color32::from_rgb(102, 176, 60),
        "ice" => egui::Color32::from_rgb(95, 190, 185),
        "fighting" => egui::Color32::from_rgb(194, 46, 40),
        "poison" => egui::Color32::from_rgb(163, 62, 161),
        "ground" => egui::Color32::from_rgb(200, 160, 80),
        "flying" => egui::Color32::from_rgb(137, 115, 220),
        "psychic" => egui::Color32::from_rgb(249, 85, 135),
        "bug" => egui::Color32::from_rgb(145, 165, 26),
        "rock" => egui::Color32::from_rgb(182, 161, 54),
        "ghost" => egui::Color32::from_rgb(115, 87, 151),
        "dragon" => egui::Color32::from_rgb(111, 53, 252),
        "dark" => egui::Color32::from_rgb(112, 87, 70),
        "steel" => egui::Color32::from_rgb(150, 150, 175),
        "fairy" => egui::Color32::from_rgb(214, 133, 173),
        _ => egui::Color32::GRAY,
    }
}

/// Draw a rounded capsule with the capitalized type label.
pub fn show(ui: &mut egui::Ui, label: &str, font_size: f32) -> egui::Response {
    let galley = ui.painter().layout_no_wrap(
        capitalize(label),
        egui::FontId::proportional(font_size),
        egui::Color32::WHITE,
    );
    let padding = egui::vec2(font_size * 0.6, font_size * 0.25);
    let size = galley.size() + padding * 2.0;
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, rect.height() / 2.0, type_color(label));
        painter.galley(rect.min + padding, galley, egui::Color32::WHITE);
    }
    response
}
