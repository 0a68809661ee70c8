//! Snapshot gallery widget (egui immediate mode).
//!
//! Each frame the widget projects every tile through the gallery model, probes
//! the image loader for that tile's current source, and records a load error as
//! the tile's `LoadFailed` flag. The flag, not the drawn image, decides what is
//! shown: the original screenshot at full opacity, or the placeholder dimmed.

use egui::{Align2, Color32, FontId, Frame, Image, RichText, Sense, Stroke, Ui, Vec2};
use snapshot_core::{Gallery, GalleryConfig, TileView};

/// Shown in place of the image when the placeholder itself cannot be loaded.
pub const NO_PREVIEW: &str = "no preview";

/// Layout constants for the tile grid. The failed-tile opacity belongs to the
/// [`Gallery`] model, which bakes it into each [`TileView`].
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryStyle {
    /// Content width of one tile; images are scaled to it.
    pub tile_width: f32,
    pub gap: f32,
    pub padding: f32,
    pub border: Stroke,
    pub caption_size: f32,
}

impl Default for GalleryStyle {
    fn default() -> Self {
        Self {
            tile_width: 220.0,
            gap: 12.0,
            padding: 8.0,
            border: Stroke::new(1.0, Color32::from_gray(0xdd)),
            caption_size: 12.0,
        }
    }
}

/// Gallery model plus presentation. Call [`SnapshotGallery::snapshot_ui`] each frame.
#[derive(Debug, Clone)]
pub struct SnapshotGallery {
    gallery: Gallery,
    style: GalleryStyle,
}

impl SnapshotGallery {
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            style: GalleryStyle::default(),
        }
    }

    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(Gallery::from_config(config)).with_style(GalleryStyle {
            tile_width: config.tile_width,
            ..GalleryStyle::default()
        })
    }

    pub fn with_style(mut self, style: GalleryStyle) -> Self {
        self.style = style;
        self
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn style(&self) -> &GalleryStyle {
        &self.style
    }

    /// Title, then one tile per identifier in list order, wrapping to the available width.
    pub fn snapshot_ui(&mut self, ui: &mut Ui) {
        ui.heading(self.gallery.title());
        ui.add_space(self.style.padding);

        let gap = self.style.gap;
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::splat(gap);
            for index in 0..self.gallery.len() {
                // Salted by position so duplicate identifiers keep separate widget state.
                ui.push_id(index, |ui| self.tile_ui(ui, index));
            }
        });
    }

    fn tile_ui(&mut self, ui: &mut Ui, index: usize) {
        let Some(mut view) = self.gallery.tile_view(index) else {
            return;
        };
        let width = self.style.tile_width;
        let size_hint = Vec2::splat(width);

        if !view.failed && probe(ui, &view.source, size_hint).is_err() {
            if let Ok(true) = self.gallery.mark_failed(index) {
                if let Some(updated) = self.gallery.tile_view(index) {
                    view = updated;
                }
            }
        }

        let style = &self.style;
        Frame::none()
            .stroke(style.border)
            .inner_margin(style.padding)
            .show(ui, |ui| {
                ui.set_width(width);
                ui.vertical_centered(|ui| {
                    if view.failed && probe(ui, &view.source, size_hint).is_err() {
                        missing_placeholder_ui(ui, &view, style);
                    } else {
                        image_ui(ui, &view, width);
                    }
                    ui.add_space(6.0);
                    ui.label(RichText::new(&view.caption).size(style.caption_size));
                });
            });
    }
}

fn probe(ui: &Ui, source: &str, size_hint: Vec2) -> egui::load::TextureLoadResult {
    Image::new(source.to_string()).load_for_size(ui.ctx(), size_hint)
}

fn image_ui(ui: &mut Ui, view: &TileView, width: f32) {
    let image = Image::new(view.source.clone())
        .fit_to_exact_size(Vec2::new(width, f32::INFINITY))
        .maintain_aspect_ratio(true)
        .tint(Color32::WHITE.gamma_multiply(view.opacity));
    ui.add(image).on_hover_text(&view.alt_text);
}

/// Both the screenshot and the placeholder failed: a dimmed box with a short label.
fn missing_placeholder_ui(ui: &mut Ui, view: &TileView, style: &GalleryStyle) {
    let width = style.tile_width;
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, width * 0.6), Sense::hover());
    let opacity = view.opacity;
    let painter = ui.painter();
    painter.rect_filled(rect, 2.0, ui.visuals().faint_bg_color.gamma_multiply(opacity));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        NO_PREVIEW,
        FontId::proportional(style.caption_size),
        ui.visuals().weak_text_color().gamma_multiply(opacity),
    );
    response.on_hover_text(&view.alt_text);
}
