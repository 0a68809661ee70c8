//! Window config: bundled default via include_str!, overridden by a local file if present.

use serde::Deserialize;

const DEFAULT_UI_CONFIG: &str = include_str!("../assets/ui_config.json");

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

fn default_window_width() -> f32 {
    980.0
}
fn default_window_height() -> f32 {
    640.0
}

impl WindowConfig {
    /// Local `assets/ui_config.json` (next to the manifest or under the cwd) if present, else bundled.
    pub fn load() -> Self {
        let manifest_assets = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
        let cwd_assets = std::env::current_dir()
            .ok()
            .map(|p| p.join("add-ons").join("snapshot-gallery-ui").join("assets"));

        let local = [Some(manifest_assets), cwd_assets]
            .into_iter()
            .flatten()
            .map(|b| b.join("ui_config.json"))
            .find(|p| p.exists())
            .and_then(|p| std::fs::read_to_string(p).ok());

        Self::parse(local.as_deref().unwrap_or(DEFAULT_UI_CONFIG))
    }

    pub fn parse(s: &str) -> Self {
        serde_json::from_str(s).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ui_config.json unreadable; using defaults");
            Self::default()
        })
    }
}
