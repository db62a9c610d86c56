//! Application configuration.

use std::path::PathBuf;

/// Environment variable overriding the icon template path.
pub const ICON_ENV: &str = "MUNSELL_ICON";
/// Environment variable overriding the settings file path.
pub const SETTINGS_ENV: &str = "MUNSELL_SETTINGS";

/// Icon template shipped with the application.
const DEFAULT_ICON: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/xo-icon.svg");

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Two-color icon template recolored by the pickers.
    pub icon_path: PathBuf,
    /// Settings file. `None` uses the per-user default location.
    pub settings_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Munsell color picker".to_string(),
            width: 1200,
            height: 860,
            icon_path: PathBuf::from(DEFAULT_ICON),
            settings_path: None,
        }
    }
}

impl AppConfig {
    /// Defaults with `MUNSELL_ICON` / `MUNSELL_SETTINGS` applied.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(ICON_ENV).filter(|p| !p.is_empty()) {
            config.icon_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(SETTINGS_ENV).filter(|p| !p.is_empty()) {
            config.settings_path = Some(PathBuf::from(path));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_point_at_bundled_icon() {
        let config = AppConfig::default();
        assert!(config.icon_path.ends_with("assets/xo-icon.svg"));
        assert!(config.icon_path.exists());
        assert_eq!(config.settings_path, None);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ICON_ENV, "/tmp/other.svg"),
            (SETTINGS_ENV, "/tmp/munsell.json"),
        ]
        .into_iter()
        .collect();
        let config = AppConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.icon_path, PathBuf::from("/tmp/other.svg"));
        assert_eq!(config.settings_path, Some(PathBuf::from("/tmp/munsell.json")));
        assert_eq!(config.title, "Munsell color picker");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = AppConfig::from_vars(|_| Some(String::new()));
        assert_eq!(config, AppConfig::default());
    }
}
