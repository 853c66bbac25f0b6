use std::collections::BTreeSet;

use pokedex_core::{Catalog, IMAGE_DIRECTORY, ResourceBundle, filter};

const BUNDLED: &str = include_str!("../resources/pokemon.json");

fn bundled() -> Catalog {
    Catalog::from_json_str(BUNDLED).unwrap()
}

#[test]
fn bundled_catalog_parses() {
    let catalog = bundled();
    assert_eq!(catalog.len(), 15);
    assert_eq!(catalog.as_slice()[0].name, "Bulbasaur");
}

#[test]
fn bundled_ids_are_unique() {
    let catalog = bundled();
    let ids: BTreeSet<u32> = catalog.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn bundled_facets_are_sorted_and_distinct() {
    let catalog = bundled();
    let types = catalog.all_types();
    let mut sorted = types.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(types, sorted);
    assert!(types.contains(&"fire".to_string()));
    assert!(catalog.all_games().contains(&"Red".to_string()));
}

#[test]
fn bundled_search_finds_starters() {
    let catalog = bundled();
    let none = BTreeSet::new();
    let names: Vec<&str> = filter(catalog.as_slice(), "char", &none, &none)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["Charmander", "Charizard"]);
}

#[test]
fn bundle_directory_loads_shipped_catalog() {
    let bundle = ResourceBundle::new(concat!(env!("CARGO_MANIFEST_DIR"), "/resources"));
    let catalog = Catalog::load(&bundle);
    assert_eq!(catalog.len(), bundled().len());
}

#[test]
fn bundle_ships_image_directory() {
    let bundle = ResourceBundle::new(concat!(env!("CARGO_MANIFEST_DIR"), "/resources"));
    assert!(bundle.root().join(IMAGE_DIRECTORY).is_dir());
}
