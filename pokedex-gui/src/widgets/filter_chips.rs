use std::collections::BTreeSet;

/// One row of active-filter chips under a caption such as "Types:".
/// Clicking a chip returns its label so the caller can toggle it off.
pub fn show(
    ui: &mut egui::Ui,
    caption: &str,
    selected: &BTreeSet<String>,
    display: fn(&str) -> String,
) -> Option<String> {
    if selected.is_empty() {
        return None;
    }

    let mut removed = None;
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(caption).weak());
        for label in selected {
            let chip = egui::Button::new(format!("{} ✕", display(label)))
                .small()
                .rounding(10.0);
            if ui.add(chip).on_hover_text("Remove filter").clicked() {
                removed = Some(label.clone());
            }
        }
    });
    removed
}
