//! Gallery configuration: defaults, then an optional file, then `SNAPSHOT__*` env.
//!
//! | Source | Example |
//! |--------|---------|
//! | `SNAPSHOT_CONFIG` | path of the config file (default `config/gallery`, any supported extension) |
//! | `PUBLIC_URL` | base path injected by the hosting environment; used as the default `base_path` |
//! | `SNAPSHOT__BASE_PATH` | overrides `base_path` |
//! | `SNAPSHOT__IMAGES` | comma-separated identifiers, e.g. `a.png,b.png` |
//! | `SNAPSHOT__TITLE`, `SNAPSHOT__TILE_WIDTH`, `SNAPSHOT__DEGRADED_OPACITY` | presentation |

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::gallery::{GalleryError, ImageList, DEFAULT_TITLE, DEGRADED_OPACITY};

/// Env var naming the config file.
pub const CONFIG_ENV: &str = "SNAPSHOT_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "config/gallery";

/// Resolves `public/snapshots/*` relative to the working directory when no
/// `PUBLIC_URL` is injected.
pub const DEFAULT_BASE_PATH: &str = "file://public";

const DEFAULT_TILE_WIDTH: f32 = 220.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    pub base_path: String,
    /// `None` means the built-in default list.
    #[serde(default)]
    pub images: Option<ImageList>,
    pub title: String,
    pub tile_width: f32,
    pub degraded_opacity: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            images: None,
            title: DEFAULT_TITLE.to_string(),
            tile_width: DEFAULT_TILE_WIDTH,
            degraded_opacity: DEGRADED_OPACITY,
        }
    }
}

impl GalleryConfig {
    /// Load from `SNAPSHOT_CONFIG` (or `config/gallery`) and the environment.
    pub fn load() -> Result<Self, GalleryError> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load with an explicit file path. A missing file falls through to defaults.
    pub fn load_from(path: &Path) -> Result<Self, GalleryError> {
        Self::load_with_vars(path, None)
    }

    /// Like [`GalleryConfig::load_from`], but `vars` (when `Some`) stands in for the
    /// process environment, both for `PUBLIC_URL` and for `SNAPSHOT__*`.
    pub fn load_with_vars(
        path: &Path,
        vars: Option<config::Map<String, String>>,
    ) -> Result<Self, GalleryError> {
        let public_url = match &vars {
            Some(vars) => vars.get("PUBLIC_URL").cloned(),
            None => std::env::var("PUBLIC_URL").ok(),
        };
        let base_path = public_url.unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());

        let built = config::Config::builder()
            .set_default("base_path", base_path)?
            .set_default("title", DEFAULT_TITLE)?
            .set_default("tile_width", f64::from(DEFAULT_TILE_WIDTH))?
            .set_default("degraded_opacity", f64::from(DEGRADED_OPACITY))?
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("SNAPSHOT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("images")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let mut cfg: Self = built.try_deserialize()?;
        tracing::debug!(
            path = %path.display(),
            base_path = %cfg.base_path,
            images = cfg.images.as_ref().map(ImageList::len),
            "gallery config loaded"
        );
        cfg.sanitize();
        Ok(cfg)
    }

    fn sanitize(&mut self) {
        if !(0.0..=1.0).contains(&self.degraded_opacity) {
            let clamped = self.degraded_opacity.clamp(0.0, 1.0);
            tracing::warn!(
                configured = self.degraded_opacity,
                clamped,
                "degraded_opacity outside 0..=1"
            );
            self.degraded_opacity = clamped;
        }
        if !(self.tile_width.is_finite() && self.tile_width > 0.0) {
            tracing::warn!(configured = self.tile_width, "invalid tile_width; using default");
            self.tile_width = DEFAULT_TILE_WIDTH;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps_opacity_and_width() {
        let mut cfg = GalleryConfig {
            degraded_opacity: -0.5,
            tile_width: 0.0,
            ..GalleryConfig::default()
        };
        cfg.sanitize();
        assert_eq!(cfg.degraded_opacity, 0.0);
        assert_eq!(cfg.tile_width, 220.0);
    }
}
