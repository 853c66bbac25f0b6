use std::collections::BTreeSet;
use std::path::Path;

use crate::bundle::ResourceBundle;
use crate::error::CatalogError;
use crate::model::{CatalogDocument, Pokemon};

/// File name of the packaged catalog inside the resource bundle.
pub const CATALOG_FILE_NAME: &str = "pokemon.json";

/// The fixed, ordered list of entities loaded at startup.
///
/// Never mutated after construction; filtering produces index views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pokemon: Vec<Pokemon>,
}

impl Catalog {
    pub fn new(pokemon: Vec<Pokemon>) -> Self {
        Self { pokemon }
    }

    /// Catalog holding only [`Pokemon::sample`].
    pub fn fallback() -> Self {
        Self::new(vec![Pokemon::sample()])
    }

    /// Load the packaged catalog from `bundle`, substituting the sample entity
    /// on any failure.
    pub fn load(bundle: &ResourceBundle) -> Self {
        Self::load_from(&bundle.root().join(CATALOG_FILE_NAME))
    }

    /// Load from an explicit path, substituting the sample entity on failure.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded {} entries from {}",
                    catalog.len(),
                    path.display()
                );
                catalog
            }
            Err(e) => {
                log::warn!(
                    "Failed to load catalog from {}: {}; using built-in sample",
                    path.display(),
                    e
                );
                Self::fallback()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Ok(Self::new(document.pokemon))
    }

    pub fn as_slice(&self) -> &[Pokemon] {
        &self.pokemon
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pokemon> {
        self.pokemon.iter()
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Pokemon> {
        self.pokemon.iter().find(|p| p.id == id)
    }

    /// Every type label in the catalog, de-duplicated and sorted.
    pub fn all_types(&self) -> Vec<String> {
        collect_sorted(self.pokemon.iter().flat_map(|p| p.types.iter()))
    }

    /// Every game in the catalog, de-duplicated and sorted.
    pub fn all_games(&self) -> Vec<String> {
        collect_sorted(self.pokemon.iter().flat_map(|p| p.games.iter()))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Pokemon;
    type IntoIter = std::slice::Iter<'a, Pokemon>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn collect_sorted<'a>(labels: impl Iterator<Item = &'a String>) -> Vec<String> {
    labels
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const TWO_ENTRIES: &str = r#"{
        "pokemon": [
            {
                "id": 1,
                "name": "Bulbasaur",
                "types": ["grass", "poison"],
                "imageUrl": "PokemonImages/001.png",
                "description": "A strange seed was planted on its back at birth.",
                "generation": 1,
                "games": ["Red", "Blue"]
            },
            {
                "id": 4,
                "name": "Charmander",
                "types": ["fire"],
                "imageUrl": "https://example.com/004.png",
                "description": "",
                "generation": 1,
                "games": ["Red", "Yellow"]
            }
        ]
    }"#;

    #[test]
    fn parses_document_in_order() {
        let catalog = Catalog::from_json_str(TWO_ENTRIES).unwrap();
        assert_eq!(catalog.len(), 2);
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bulbasaur", "Charmander"]);
        assert_eq!(catalog.get(4).unwrap().image_url, "https://example.com/004.png");
        assert!(catalog.get(7).is_none());
    }

    #[test]
    fn facet_vocabularies_are_sorted_and_unique() {
        let catalog = Catalog::from_json_str(TWO_ENTRIES).unwrap();
        assert_eq!(catalog.all_types(), vec!["fire", "grass", "poison"]);
        assert_eq!(catalog.all_games(), vec!["Blue", "Red", "Yellow"]);
    }

    #[test]
    fn missing_file_falls_back_to_sample() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::load(&ResourceBundle::new(tmp.path()));
        assert_eq!(catalog.len(), 1);
        let only = catalog.iter().next().unwrap();
        assert_eq!(only.id, 1);
        assert_eq!(only.name, "Bulbasaur");
    }

    #[test]
    fn malformed_json_falls_back_to_sample() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CATALOG_FILE_NAME), "{ \"pokemon\": [ {").unwrap();
        let catalog = Catalog::load(&ResourceBundle::new(tmp.path()));
        assert_eq!(catalog, Catalog::fallback());
    }

    #[test]
    fn schema_mismatch_falls_back_to_sample() {
        let tmp = TempDir::new().unwrap();
        // `generation` is missing
        fs::write(
            tmp.path().join(CATALOG_FILE_NAME),
            r#"{"pokemon": [{"id": 2, "name": "Ivysaur", "types": [], "imageUrl": "",
                "description": "", "games": []}]}"#,
        )
        .unwrap();
        let catalog = Catalog::load(&ResourceBundle::new(tmp.path()));
        assert_eq!(catalog, Catalog::fallback());
    }

    #[test]
    fn try_load_reports_error_kind() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join(CATALOG_FILE_NAME);
        assert!(matches!(
            Catalog::try_load_from(&missing),
            Err(CatalogError::Io(_))
        ));
        fs::write(&missing, "[]").unwrap();
        assert!(matches!(
            Catalog::try_load_from(&missing),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = Catalog::from_json_str(r#"{"pokemon": []}"#).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.all_types().is_empty());
    }

    #[test]
    fn loads_from_bundle_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CATALOG_FILE_NAME), TWO_ENTRIES).unwrap();
        let catalog = Catalog::load(&ResourceBundle::new(tmp.path()));
        assert_eq!(catalog.len(), 2);
    }
}
