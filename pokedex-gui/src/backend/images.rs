use std::sync::Arc;

use pokedex_core::{DecodedImage, HttpFetcher, ImageResolver, ResourceBundle};

/// Build the app's resolver: HTTP fetches, with every delivered state
/// scheduling a repaint so results show up without user input.
pub fn build_resolver(bundle: ResourceBundle, ctx: &egui::Context) -> ImageResolver {
    let ctx = ctx.clone();
    ImageResolver::new(bundle, Arc::new(HttpFetcher::new()))
        .with_waker(Arc::new(move || ctx.request_repaint()))
}

/// Upload decoded pixels as a GPU texture. The texture is freed when the
/// returned handle is dropped.
pub fn upload_texture(
    ctx: &egui::Context,
    name: &str,
    image: &DecodedImage,
) -> egui::TextureHandle {
    let color = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.pixels);
    ctx.load_texture(name, color, egui::TextureOptions::LINEAR)
}
