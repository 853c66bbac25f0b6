/// Collapsible list of selectable facet rows, each captioned with
/// `display(label)` and check-marked while selected. Returns the label the
/// user toggled this frame, if any.
pub fn show(
    ui: &mut egui::Ui,
    heading: &str,
    labels: &[String],
    is_selected: impl Fn(&str) -> bool,
    display: fn(&str) -> String,
) -> Option<String> {
    let mut toggled = None;

    egui::CollapsingHeader::new(egui::RichText::new(heading).strong())
        .id_salt(format!("facet_{}", heading))
        .default_open(true)
        .show(ui, |ui| {
            if labels.is_empty() {
                ui.label(egui::RichText::new("None").weak());
                return;
            }
            for label in labels {
                let selected = is_selected(label);
                let text = if selected {
                    format!("✔ {}", display(label))
                } else {
                    display(label)
                };
                if ui.selectable_label(selected, text).clicked() {
                    toggled = Some(label.clone());
                }
            }
        });

    toggled
}
