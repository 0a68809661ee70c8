//! Gallery model: ordered tiles, each with its own load state.
//!
//! A tile starts `Normal` and may move to `LoadFailed` once; nothing moves it
//! back. The displayed source and opacity are computed from that flag when a
//! [`TileView`] is built, so a renderer never rewrites what it already drew.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GalleryConfig;

/// Identifiers shown when the caller supplies no image list.
pub const DEFAULT_IMAGES: [&str; 4] = ["ui-1.png", "ui-2.png", "ui-3.png", "ui-4.png"];

/// Folder under the base path that holds the screenshots and the placeholder.
pub const SNAPSHOTS_DIR: &str = "snapshots";

/// File substituted for any tile whose image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// Opacity of a tile in the load-failed state.
pub const DEGRADED_OPACITY: f32 = 0.6;

pub const NORMAL_OPACITY: f32 = 1.0;

pub const DEFAULT_TITLE: &str = "UI Snapshots";

#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("tile index {index} out of range (gallery has {len} tiles)")]
    TileOutOfRange { index: usize, len: usize },
}

/// Opaque file name under `{base}/snapshots/`. Doubles as caption and alt text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ImageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Ordered image identifiers; render order equals list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageList(Vec<ImageId>);

impl ImageList {
    pub fn new(ids: Vec<ImageId>) -> Self {
        Self(ids)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageId> {
        self.0.iter()
    }
}

impl Default for ImageList {
    fn default() -> Self {
        DEFAULT_IMAGES.iter().copied().collect()
    }
}

impl<T: Into<ImageId>> FromIterator<T> for ImageList {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for ImageList {
    type Item = ImageId;
    type IntoIter = std::vec::IntoIter<ImageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Prefix supplied by the hosting environment. Not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/snapshots/{id}`
    pub fn resource_ref(&self, id: &ImageId) -> String {
        self.snapshot_ref(id.as_str())
    }

    /// `{base}/snapshots/placeholder.png`
    pub fn placeholder_ref(&self) -> String {
        self.snapshot_ref(PLACEHOLDER_IMAGE)
    }

    fn snapshot_ref(&self, file: &str) -> String {
        format!("{}/{}/{}", self.0, SNAPSHOTS_DIR, file)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TileState {
    #[default]
    Normal,
    LoadFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: ImageId,
    state: TileState,
}

impl Tile {
    pub fn new(id: ImageId) -> Self {
        Self {
            id,
            state: TileState::Normal,
        }
    }

    pub fn id(&self) -> &ImageId {
        &self.id
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    pub fn is_failed(&self) -> bool {
        self.state == TileState::LoadFailed
    }

    /// Records a load failure. Returns true only on the `Normal -> LoadFailed`
    /// transition; repeated calls leave the tile as it is.
    pub fn mark_failed(&mut self) -> bool {
        let was_normal = self.state == TileState::Normal;
        self.state = TileState::LoadFailed;
        was_normal
    }
}

/// What a renderer draws for one tile in the current pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub index: usize,
    pub caption: String,
    pub alt_text: String,
    pub source: String,
    pub opacity: f32,
    pub failed: bool,
}

/// Titled, ordered collection of tiles resolved against one base path.
#[derive(Debug, Clone)]
pub struct Gallery {
    title: String,
    base: BasePath,
    degraded_opacity: f32,
    tiles: Vec<Tile>,
}

impl Gallery {
    /// Builds one tile per identifier, in order. `None` selects [`DEFAULT_IMAGES`].
    /// Duplicates are kept as separate tiles.
    pub fn new(base: BasePath, images: Option<ImageList>) -> Self {
        let tiles = images
            .unwrap_or_default()
            .into_iter()
            .map(Tile::new)
            .collect();
        Self {
            title: DEFAULT_TITLE.to_string(),
            base,
            degraded_opacity: DEGRADED_OPACITY,
            tiles,
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(BasePath::new(config.base_path.clone()), config.images.clone())
            .with_title(config.title.clone())
            .with_degraded_opacity(config.degraded_opacity)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_degraded_opacity(mut self, opacity: f32) -> Self {
        self.degraded_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base(&self) -> &BasePath {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub fn failed_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_failed()).count()
    }

    /// Flags tile `index` as load-failed. Other tiles are untouched.
    pub fn mark_failed(&mut self, index: usize) -> Result<bool, GalleryError> {
        let len = self.tiles.len();
        self.tiles
            .get_mut(index)
            .map(Tile::mark_failed)
            .ok_or(GalleryError::TileOutOfRange { index, len })
    }

    pub fn tile_view(&self, index: usize) -> Option<TileView> {
        self.tiles.get(index).map(|tile| self.project(index, tile))
    }

    pub fn views(&self) -> Vec<TileView> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| self.project(index, tile))
            .collect()
    }

    fn project(&self, index: usize, tile: &Tile) -> TileView {
        let (source, opacity) = match tile.state {
            TileState::Normal => (self.base.resource_ref(&tile.id), NORMAL_OPACITY),
            TileState::LoadFailed => (self.base.placeholder_ref(), self.degraded_opacity),
        };
        TileView {
            index,
            caption: tile.id.to_string(),
            alt_text: tile.id.to_string(),
            source,
            opacity,
            failed: tile.is_failed(),
        }
    }
}
