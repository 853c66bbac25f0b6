use serde::{Deserialize, Serialize};

/// One catalog record.
///
/// Immutable once constructed; the catalog hands out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number, unique within the catalog.
    pub id: u32,
    pub name: String,
    /// Type labels in display order (e.g. `["grass", "poison"]`).
    pub types: Vec<String>,
    /// Either an HTTP(S) URL or a bundle-relative resource name.
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
    pub generation: u32,
    /// Games the entity appears in, in release order.
    pub games: Vec<String>,
}

impl Pokemon {
    /// The built-in entity used when the packaged catalog cannot be read.
    pub fn sample() -> Self {
        Self {
            id: 1,
            name: "Bulbasaur".to_string(),
            types: vec!["Grass".to_string(), "Poison".to_string()],
            image_url: "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png"
                .to_string(),
            description: "A strange seed was planted on its back at birth. \
                          The plant sprouts and grows with this Pokémon."
                .to_string(),
            generation: 1,
            games: vec!["Red".to_string(), "Blue".to_string(), "Yellow".to_string()],
        }
    }

    /// Dex number as shown in the detail view, e.g. `#0025`.
    pub fn display_number(&self) -> String {
        format!("#{:04}", self.id)
    }

    pub fn has_type(&self, label: &str) -> bool {
        self.types.iter().any(|t| t == label)
    }

    pub fn appears_in(&self, game: &str) -> bool {
        self.games.iter().any(|g| g == game)
    }
}

/// Top-level shape of the packaged JSON document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub pokemon: Vec<Pokemon>,
}

/// Returns true if `reference` carries an `http://` or `https://` scheme.
pub fn is_remote_reference(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
