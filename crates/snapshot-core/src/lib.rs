//! snapshot-core: gallery model for the UI snapshot viewer.
//!
//! Owns image identifiers, base-path resolution, and the per-tile
//! `Normal | LoadFailed` flag. Renderers (see `snapshot-gallery-ui`) project
//! each tile through [`Gallery::tile_view`] every frame instead of mutating
//! drawn output.

mod config;
mod gallery;

pub use config::{GalleryConfig, CONFIG_ENV, DEFAULT_BASE_PATH, DEFAULT_CONFIG_PATH};
pub use gallery::{
    BasePath, Gallery, GalleryError, ImageId, ImageList, Tile, TileState, TileView,
    DEFAULT_IMAGES, DEFAULT_TITLE, DEGRADED_OPACITY, NORMAL_OPACITY, PLACEHOLDER_IMAGE,
    SNAPSHOTS_DIR,
};
