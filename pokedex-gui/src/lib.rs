pub mod app;
pub mod backend;
pub mod settings;
pub mod state;
pub mod util;
pub mod views;
pub mod widgets;

pub use app::PokedexApp;
