//! Turns an image reference into a displayable image.
//!
//! Resolution tries the local strategies in order, then at most one remote
//! fetch on a background thread. Each call to [`ImageResolver::resolve`]
//! yields an [`ImageStream`] that reports `Loading` followed by exactly one
//! terminal state. Nothing is cached between calls: two cards showing the
//! same artwork fetch it twice.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use reqwest::Url;

use crate::bundle::{IMAGE_DIRECTORY, ResourceBundle};
use crate::error::ImageError;
use crate::fetch::Fetcher;
use crate::model::is_remote_reference;

/// Callback invoked after a state is delivered, e.g. to request a repaint.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Decoded RGBA8 pixels, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Decode an encoded image (PNG, JPEG, ...), sniffing the format.
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded = ::image::load_from_memory(bytes).map_err(|e| {
            log::debug!("Image decode failed: {}", e);
            ImageError::Decode { bytes: bytes.len() }
        })?;
        let rgba = decoded.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pixels.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Loaded(Arc<DecodedImage>),
    /// Terminal failure with the diagnostic to show under the placeholder.
    Failed(String),
}

impl ImageState {
    /// Loaded and Failed are terminal; no transition follows them.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImageState::Loading)
    }
}

impl From<Result<DecodedImage, ImageError>> for ImageState {
    fn from(result: Result<DecodedImage, ImageError>) -> Self {
        match result {
            Ok(image) => ImageState::Loaded(Arc::new(image)),
            Err(e) => ImageState::Failed(e.to_string()),
        }
    }
}

/// One way of finding a reference inside the resource bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalStrategy {
    /// The reference itself, as a bundle-relative path.
    BundlePath,
    /// The reference's file name, inside the given bundle subdirectory.
    BundleDirectory(&'static str),
}

impl LocalStrategy {
    /// The default lookup order.
    pub const DEFAULT: [LocalStrategy; 2] = [
        LocalStrategy::BundlePath,
        LocalStrategy::BundleDirectory(IMAGE_DIRECTORY),
    ];

    fn locate(&self, bundle: &ResourceBundle, reference: &str) -> Option<PathBuf> {
        match self {
            LocalStrategy::BundlePath => bundle.path_for_resource(reference),
            LocalStrategy::BundleDirectory(dir) => {
                let file_name = last_path_component(reference)?;
                bundle.path_in_directory(file_name, dir)
            }
        }
    }
}

/// Last `/`-separated segment, ignoring any query or fragment.
fn last_path_component(reference: &str) -> Option<&str> {
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference);
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Receiving end of one resolution.
///
/// Yields `Loading`, then one terminal state, then ends. Use
/// [`ImageStream::try_next`] from a UI thread; iterating blocks.
#[derive(Debug)]
pub struct ImageStream {
    rx: Receiver<ImageState>,
}

impl ImageStream {
    /// Next state if one has arrived, without blocking.
    pub fn try_next(&self) -> Result<Option<ImageState>, TryRecvError> {
        match self.rx.try_recv() {
            Ok(state) => Ok(Some(state)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Block until the terminal state arrives.
    pub fn wait(self) -> ImageState {
        self.filter(ImageState::is_terminal)
            .last()
            .unwrap_or_else(|| ImageState::Failed("Image resolution stopped".to_string()))
    }
}

impl Iterator for ImageStream {
    type Item = ImageState;

    fn next(&mut self) -> Option<ImageState> {
        self.rx.recv().ok()
    }
}

pub struct ImageResolver {
    bundle: ResourceBundle,
    fetcher: Arc<dyn Fetcher>,
    strategies: Vec<LocalStrategy>,
    waker: Option<Waker>,
}

impl ImageResolver {
    pub fn new(bundle: ResourceBundle, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            bundle,
            fetcher,
            strategies: LocalStrategy::DEFAULT.to_vec(),
            waker: None,
        }
    }

    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /// Start resolving `reference`.
    ///
    /// Local lookups run on the calling thread; a remote fetch is handed to a
    /// background thread whose result arrives on the returned stream. If the
    /// stream is dropped first, that result is discarded.
    pub fn resolve(&self, reference: &str) -> ImageStream {
        let (tx, rx) = mpsc::channel();
        let stream = ImageStream { rx };
        self.deliver(&tx, ImageState::Loading);

        if let Some(image) = self.resolve_local(reference) {
            self.deliver(&tx, ImageState::Loaded(Arc::new(image)));
            return stream;
        }

        let url = match remote_url(reference) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("{}", e);
                self.deliver(&tx, ImageState::Failed(e.to_string()));
                return stream;
            }
        };

        let fetcher = Arc::clone(&self.fetcher);
        let waker = self.waker.clone();
        std::thread::spawn(move || {
            let state = ImageState::from(fetch_remote(fetcher.as_ref(), &url));
            if let ImageState::Failed(ref diagnostic) = state {
                log::debug!("Fetch of {} failed: {}", url, diagnostic);
            }
            if tx.send(state).is_err() {
                log::debug!("Discarding image for {}: no longer displayed", url);
                return;
            }
            if let Some(waker) = waker {
                waker();
            }
        });

        stream
    }

    /// Run the whole chain on the calling thread.
    pub fn resolve_blocking(&self, reference: &str) -> Result<DecodedImage, ImageError> {
        if let Some(image) = self.resolve_local(reference) {
            return Ok(image);
        }
        let url = remote_url(reference)?;
        fetch_remote(self.fetcher.as_ref(), &url)
    }

    /// Try each local strategy in order. Files that exist but don't decode
    /// count as misses.
    pub fn resolve_local(&self, reference: &str) -> Option<DecodedImage> {
        for strategy in &self.strategies {
            let Some(path) = strategy.locate(&self.bundle, reference) else {
                log::debug!("{:?}: no local match for {}", strategy, reference);
                continue;
            };
            let decoded = std::fs::read(&path)
                .map_err(|e| e.to_string())
                .and_then(|bytes| DecodedImage::decode(&bytes).map_err(|e| e.to_string()));
            match decoded {
                Ok(image) => {
                    log::debug!("{:?}: loaded {}", strategy, path.display());
                    return Some(image);
                }
                Err(e) => {
                    log::debug!("{:?}: unusable {}: {}", strategy, path.display(), e);
                }
            }
        }
        log::debug!("Image not found in bundle: {}", reference);
        None
    }

    fn deliver(&self, tx: &Sender<ImageState>, state: ImageState) {
        // The receiver is held by our caller for synchronous deliveries.
        let _ = tx.send(state);
        if let Some(ref waker) = self.waker {
            waker();
        }
    }
}

impl std::fmt::Debug for ImageResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageResolver")
            .field("bundle", &self.bundle)
            .field("strategies", &self.strategies)
            .field("waker", &self.waker.is_some())
            .finish()
    }
}

/// Build the request URL for a remote reference, percent-encoding as needed.
pub fn remote_url(reference: &str) -> Result<Url, ImageError> {
    if !is_remote_reference(reference) {
        return Err(ImageError::NotFound {
            reference: reference.to_string(),
        });
    }
    Url::parse(reference.trim()).map_err(|e| {
        log::debug!("URL parse failed for {}: {}", reference, e);
        ImageError::InvalidUrl {
            reference: reference.to_string(),
        }
    })
}

/// Issue the single GET for `url` and decode the body.
pub fn fetch_remote(fetcher: &dyn Fetcher, url: &Url) -> Result<DecodedImage, ImageError> {
    log::debug!("Fetching {}", url);
    let response = fetcher.get(url).map_err(ImageError::Network)?;
    if !response.is_success() {
        return Err(ImageError::HttpStatus {
            status: response.status,
        });
    }
    if response.body.is_empty() {
        return Err(ImageError::NoData);
    }
    DecodedImage::decode(&response.body)
}

/// Per-card view of one resolution: the image once loaded, whether it's
/// still loading, and the diagnostic if it failed.
///
/// Owned by the UI thread; [`ImageSlot::poll`] applies arrived states.
#[derive(Debug)]
pub struct ImageSlot {
    state: ImageState,
    stream: Option<ImageStream>,
}

impl ImageSlot {
    pub fn new(stream: ImageStream) -> Self {
        let mut slot = Self {
            state: ImageState::Loading,
            stream: Some(stream),
        };
        slot.poll();
        slot
    }

    /// Drain pending states. Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(stream) = self.stream.take() else {
            return false;
        };
        let mut changed = false;
        loop {
            match stream.try_next() {
                Ok(Some(state)) => {
                    changed |= state != self.state;
                    self.state = state;
                    if self.state.is_terminal() {
                        return changed;
                    }
                }
                Ok(None) => break,
                Err(_) => {
                    // Sender gone without a terminal state
                    self.state = ImageState::Failed("Image resolution stopped".to_string());
                    return true;
                }
            }
        }
        self.stream = Some(stream);
        changed
    }

    pub fn state(&self) -> &ImageState {
        &self.state
    }

    pub fn image(&self) -> Option<&Arc<DecodedImage>> {
        match self.state {
            ImageState::Loaded(ref image) => Some(image),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ImageState::Loading)
    }

    /// Empty unless the resolution failed.
    pub fn diagnostic(&self) -> &str {
        match self.state {
            ImageState::Failed(ref diagnostic) => diagnostic,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_component_ignores_query() {
        assert_eq!(
            last_path_component("https://cdn.example.com/full/001.png?v=2"),
            Some("001.png")
        );
        assert_eq!(last_path_component("PokemonImages/025.png"), Some("025.png"));
        assert_eq!(last_path_component("025.png"), Some("025.png"));
        assert_eq!(last_path_component("https://example.com/"), None);
    }

    #[test]
    fn remote_url_requires_http_scheme() {
        assert_eq!(
            remote_url("not-a-url-and-not-local"),
            Err(ImageError::NotFound {
                reference: "not-a-url-and-not-local".to_string()
            })
        );
        assert!(matches!(
            remote_url("ftp://example.com/1.png"),
            Err(ImageError::NotFound { .. })
        ));
    }

    #[test]
    fn remote_url_percent_encodes() {
        let url = remote_url("https://example.com/sprites/mr mime.png").unwrap();
        assert_eq!(url.as_str(), "https://example.com/sprites/mr%20mime.png");
    }

    #[test]
    fn remote_url_rejects_unparseable() {
        assert_eq!(
            remote_url("http://"),
            Err(ImageError::InvalidUrl {
                reference: "http://".to_string()
            })
        );
    }

    #[test]
    fn failed_state_carries_error_text() {
        let state = ImageState::from(Err(ImageError::HttpStatus { status: 404 }));
        assert_eq!(state, ImageState::Failed("HTTP Error: 404".to_string()));
        assert!(state.is_terminal());
        assert!(!ImageState::Loading.is_terminal());
    }
}
