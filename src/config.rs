//! Application configuration
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file (or none at all) is valid.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::widget::controls::PanelOptions;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub panel: PanelOptions,
    /// Background RGB in `[0, 1]`.
    pub clear_color: [f64; 3],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "surfview".to_string(),
            width: 1200.0,
            height: 800.0,
            panel: PanelOptions::default(),
            clear_color: [0.08, 0.08, 0.1],
        }
    }
}

impl AppConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::widget::controls::Theme;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::from_json_str(
            r#"{"width": 640, "panel": {"theme": "yorha", "opacity": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 800.0);
        assert_eq!(config.panel.theme, Theme::Yorha);
        assert_eq!(config.panel.opacity, 0.5);
        assert_eq!(config.panel.title, "Surface Viewer");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            AppConfig::from_json_str("{width: }"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            AppConfig::load("/nonexistent/surfview.json"),
            Err(Error::Io(_))
        ));
    }
}
