use std::path::{Component, Path, PathBuf};

/// Conventional subdirectory holding bundled artwork, keyed by file name.
pub const IMAGE_DIRECTORY: &str = "PokemonImages";

/// The packaged, read-only resource directory shipped next to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the first existing directory among `candidates`.
    ///
    /// Falls back to the last candidate when none exist, so lookups simply
    /// miss instead of failing construction.
    pub fn locate<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut last = None;
        for candidate in candidates {
            if candidate.is_dir() {
                log::debug!("Using resource bundle at {}", candidate.display());
                return Self::new(candidate);
            }
            log::debug!("No resource bundle at {}", candidate.display());
            last = Some(candidate);
        }
        let root = last.unwrap_or_else(|| PathBuf::from("resources"));
        log::warn!(
            "No resource bundle found, falling back to {}",
            root.display()
        );
        Self::new(root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` as a bundle-relative path.
    ///
    /// Returns `None` for absolute paths, names that climb out of the bundle,
    /// and files that don't exist.
    pub fn path_for_resource(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if name.is_empty() || !is_bundle_relative(relative) {
            return None;
        }
        let path = self.root.join(relative);
        path.is_file().then_some(path)
    }

    /// Look up `file_name` inside the bundle subdirectory `directory`.
    pub fn path_in_directory(&self, file_name: &str, directory: &str) -> Option<PathBuf> {
        if file_name.is_empty() || !is_bundle_relative(Path::new(file_name)) {
            return None;
        }
        let path = self.root.join(directory).join(file_name);
        path.is_file().then_some(path)
    }
}

fn is_bundle_relative(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn finds_relative_resource() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("pokemon.json"), "{}").unwrap();
        let bundle = ResourceBundle::new(tmp.path());
        assert_eq!(
            bundle.path_for_resource("pokemon.json"),
            Some(tmp.path().join("pokemon.json"))
        );
        assert_eq!(bundle.path_for_resource("missing.json"), None);
    }

    #[test]
    fn rejects_paths_outside_bundle() {
        let tmp = TempDir::new().unwrap();
        let inner = tmp.path().join("bundle");
        fs::create_dir(&inner).unwrap();
        fs::write(tmp.path().join("secret.txt"), "x").unwrap();
        let bundle = ResourceBundle::new(&inner);
        assert_eq!(bundle.path_for_resource("../secret.txt"), None);
        let absolute = tmp.path().join("secret.txt");
        assert_eq!(bundle.path_for_resource(&absolute.to_string_lossy()), None);
    }

    #[test]
    fn finds_file_in_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(IMAGE_DIRECTORY);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("001.png"), b"png").unwrap();
        let bundle = ResourceBundle::new(tmp.path());
        assert_eq!(
            bundle.path_in_directory("001.png", IMAGE_DIRECTORY),
            Some(dir.join("001.png"))
        );
        assert_eq!(bundle.path_in_directory("002.png", IMAGE_DIRECTORY), None);
    }

    #[test]
    fn locate_prefers_first_existing_directory() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let present = tmp.path().join("resources");
        fs::create_dir(&present).unwrap();
        let bundle = ResourceBundle::locate([missing.clone(), present.clone()]);
        assert_eq!(bundle.root(), present.as_path());

        let bundle = ResourceBundle::locate([missing.clone()]);
        assert_eq!(bundle.root(), missing.as_path());
    }
}
