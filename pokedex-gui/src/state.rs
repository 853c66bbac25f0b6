use std::collections::{HashMap, HashSet};

use pokedex_core::{ImageResolver, ImageSlot, ImageState, Pokemon};

use crate::backend::images;

// -- Card images --

/// Image state for one mounted card or detail view, plus its texture once
/// the image has loaded.
pub struct CardImage {
    pub slot: ImageSlot,
    pub texture: Option<egui::TextureHandle>,
    texture_name: String,
}

impl CardImage {
    pub fn mount(texture_name: String, reference: &str, resolver: &ImageResolver) -> Self {
        Self {
            slot: ImageSlot::new(resolver.resolve(reference)),
            texture: None,
            texture_name,
        }
    }

    /// Apply arrived states and upload the texture on first load.
    pub fn poll(&mut self, ctx: &egui::Context) {
        self.slot.poll();
        if self.texture.is_none()
            && let ImageState::Loaded(ref image) = *self.slot.state()
        {
            self.texture = Some(images::upload_texture(ctx, &self.texture_name, image));
        }
    }
}

/// Per-card image state, keyed by entity id.
///
/// Cards mount on first display and unmount when their entity leaves the
/// filtered view. Identical references are never shared between cards.
#[derive(Default)]
pub struct CardImages {
    cards: HashMap<u32, CardImage>,
}

impl CardImages {
    pub fn get_or_mount(&mut self, pokemon: &Pokemon, resolver: &ImageResolver) -> &mut CardImage {
        self.cards.entry(pokemon.id).or_insert_with(|| {
            log::debug!("Mounting card for #{} {}", pokemon.id, pokemon.name);
            CardImage::mount(format!("card-{}", pokemon.id), &pokemon.image_url, resolver)
        })
    }

    /// Drop every card whose id is not in `visible`. Returns how many went.
    pub fn retain_visible(&mut self, visible: &HashSet<u32>) -> usize {
        let before = self.cards.len();
        self.cards.retain(|id, _| visible.contains(id));
        before - self.cards.len()
    }

    pub fn is_mounted(&self, id: u32) -> bool {
        self.cards.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// -- Detail view --

/// The open detail view. It resolves its image independently of the card.
pub struct DetailState {
    pub pokemon_id: u32,
    pub image: CardImage,
}

impl DetailState {
    pub fn open(pokemon: &Pokemon, resolver: &ImageResolver) -> Self {
        Self {
            pokemon_id: pokemon.id,
            image: CardImage::mount(format!("detail-{}", pokemon.id), &pokemon.image_url, resolver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::{FetchResponse, Fetcher, ResourceBundle, Url};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingFetcher(AtomicUsize);

    impl Fetcher for CountingFetcher {
        fn get(&self, _url: &Url) -> Result<FetchResponse, String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(FetchResponse {
                status: 404,
                body: Vec::new(),
            })
        }
    }

    fn pokemon(id: u32, image_url: &str) -> Pokemon {
        Pokemon {
            id,
            name: format!("Mon{}", id),
            types: vec!["normal".to_string()],
            image_url: image_url.to_string(),
            description: String::new(),
            generation: 1,
            games: Vec::new(),
        }
    }

    fn resolver(fetcher: Arc<CountingFetcher>) -> ImageResolver {
        let tmp = std::env::temp_dir().join("pokedex-gui-state-tests-missing");
        ImageResolver::new(ResourceBundle::new(tmp), fetcher)
    }

    #[test]
    fn mounts_once_per_entity() {
        let fetcher = Arc::new(CountingFetcher(AtomicUsize::new(0)));
        let resolver = resolver(fetcher);
        let mut cards = CardImages::default();
        let bulbasaur = pokemon(1, "not-local");

        cards.get_or_mount(&bulbasaur, &resolver);
        cards.get_or_mount(&bulbasaur, &resolver);
        assert_eq!(cards.len(), 1);
        assert!(cards.is_mounted(1));
        assert!(!cards.get_or_mount(&bulbasaur, &resolver).slot.is_loading());
    }

    #[test]
    fn unmounts_entities_outside_view() {
        let fetcher = Arc::new(CountingFetcher(AtomicUsize::new(0)));
        let resolver = resolver(fetcher);
        let mut cards = CardImages::default();
        for id in [1, 4, 7] {
            cards.get_or_mount(&pokemon(id, "not-local"), &resolver);
        }

        let visible: HashSet<u32> = [4].into_iter().collect();
        assert_eq!(cards.retain_visible(&visible), 2);
        assert!(cards.is_mounted(4));
        assert!(!cards.is_mounted(1));
    }

    #[test]
    fn same_reference_resolves_per_card() {
        let fetcher = Arc::new(CountingFetcher(AtomicUsize::new(0)));
        let resolver = resolver(fetcher.clone());
        let mut cards = CardImages::default();
        let url = "https://example.com/shared.png";

        cards.get_or_mount(&pokemon(1, url), &resolver);
        cards.get_or_mount(&pokemon(2, url), &resolver);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while fetcher.0.load(Ordering::SeqCst) < 2 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(5));
        }
        assert_eq!(fetcher.0.load(Ordering::SeqCst), 2);
    }
}
