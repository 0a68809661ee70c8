//! Snapshot Gallery — standalone egui window showing UI screenshots.
//!
//! Run with: cargo run -p snapshot-gallery-ui -- [IMAGE...]
//! Images resolve to `{base_path}/snapshots/{IMAGE}`; see `snapshot_core::GalleryConfig`.

use eframe::egui;
use snapshot_core::{GalleryConfig, ImageList, DEFAULT_IMAGES};
use snapshot_gallery_ui::{SnapshotGallery, WindowConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[snapshot-gallery] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = GalleryConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "gallery config failed to load; using defaults");
        GalleryConfig::default()
    });

    // Positional arguments replace the configured image list.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        config.images = Some(args.into_iter().collect::<ImageList>());
    }

    tracing::info!(
        base_path = %config.base_path,
        images = config.images.as_ref().map_or(DEFAULT_IMAGES.len(), ImageList::len),
        "snapshot gallery starting"
    );

    let window = WindowConfig::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.window_width, window.window_height])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Snapshot Gallery",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(SnapshotGalleryApp::new(SnapshotGallery::from_config(
                &config,
            ))))
        }),
    )
}

struct SnapshotGalleryApp {
    gallery: SnapshotGallery,
}

impl SnapshotGalleryApp {
    fn new(gallery: SnapshotGallery) -> Self {
        Self { gallery }
    }
}

impl eframe::App for SnapshotGalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.gallery.snapshot_ui(ui);
            });
        });
    }
}
