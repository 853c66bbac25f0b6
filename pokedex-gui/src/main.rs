//! Pokédex desktop browser.
//!
//! Loads the bundled catalog once, then lets the user search, filter by type
//! and game, and open a detail view per entry.

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Pokédex")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pokédex",
        options,
        Box::new(|cc| Ok(Box::new(pokedex_gui::PokedexApp::new(cc)))),
    )
}
