//! Core of the Pokédex browser: the catalog model, its loader, the filter
//! engine and store, and image resolution for cards.
//!
//! The GUI crate renders what this crate computes; nothing here depends on a
//! windowing toolkit.

pub mod bundle;
pub mod catalog;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod model;
pub mod resolver;
pub mod store;

pub use bundle::{IMAGE_DIRECTORY, ResourceBundle};
pub use catalog::{CATALOG_FILE_NAME, Catalog};
pub use error::{CatalogError, ImageError};
pub use fetch::{FetchResponse, Fetcher, HttpFetcher};
pub use filter::{FilterState, filter};
pub use model::{CatalogDocument, Pokemon, is_remote_reference};
pub use resolver::{
    DecodedImage, ImageResolver, ImageSlot, ImageState, ImageStream, LocalStrategy, Waker,
};
pub use store::{Action, Store, StoreEvent};

pub use reqwest::Url;
