use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Read-only user settings. The app never writes this file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub resources: ResourceSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResourceSettings {
    /// Resource bundle to use instead of the one shipped with the app.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default = "default_card_min_width")]
    pub card_min_width: f32,
}

fn default_true() -> bool {
    true
}

fn default_card_min_width() -> f32 {
    200.0
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            card_min_width: default_card_min_width(),
        }
    }
}

/// Returns `~/.config/pokedex/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("pokedex").join("settings.toml")
}

/// Load settings from disk, returning defaults if missing or corrupt.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> AppSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Failed to parse settings at {}: {}", path.display(), e);
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Directories to probe for the resource bundle, most specific first.
pub fn bundle_candidates(settings: &AppSettings) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(ref dir) = settings.resources.dir {
        candidates.push(dir.clone());
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(exe_dir.join("resources"));
    }
    candidates.push(Path::new(env!("CARGO_MANIFEST_DIR")).join("resources"));
    candidates.push(PathBuf::from("resources"));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let settings = load_settings_from(&tmp.path().join("settings.toml"));
        assert!(settings.resources.dir.is_none());
        assert!(settings.display.dark_mode);
        assert_eq!(settings.display.card_min_width, 200.0);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        fs::write(&path, "[display]\ndark_mode = false\n").unwrap();
        let settings = load_settings_from(&path);
        assert!(!settings.display.dark_mode);
        assert_eq!(settings.display.card_min_width, 200.0);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        fs::write(&path, "[display\ndark_mode = ").unwrap();
        let settings = load_settings_from(&path);
        assert!(settings.display.dark_mode);
    }

    #[test]
    fn configured_dir_is_probed_first() {
        let mut settings = AppSettings::default();
        settings.resources.dir = Some(PathBuf::from("/opt/pokedex/resources"));
        let candidates = bundle_candidates(&settings);
        assert_eq!(candidates[0], PathBuf::from("/opt/pokedex/resources"));
        assert_eq!(candidates.last(), Some(&PathBuf::from("resources")));
    }
}
