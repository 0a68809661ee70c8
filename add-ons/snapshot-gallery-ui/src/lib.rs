//! snapshot-gallery-ui: egui renderer for the snapshot gallery.
//!
//! Draws a [`snapshot_core::Gallery`] as a wrapping row of captioned tiles.
//! Tiles whose image fails to load switch to the dimmed placeholder.

pub mod config;
pub mod snapshot_gallery;

pub use config::WindowConfig;
pub use snapshot_gallery::{GalleryStyle, SnapshotGallery, NO_PREVIEW};
