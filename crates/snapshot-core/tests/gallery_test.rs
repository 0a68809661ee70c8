//! Integration test: gallery model behaviour as seen by a renderer.
//!
//! Verifies that:
//! 1. Tile count and order follow the image list (including empty and default lists).
//! 2. Sources resolve to `{base}/snapshots/{id}` until a load failure.
//! 3. A failure swaps only that tile to the dimmed placeholder; captions never change.

use snapshot_core::{BasePath, Gallery, ImageList, TileState, DEGRADED_OPACITY, NORMAL_OPACITY};

fn gallery(base: &str, names: &[&str]) -> Gallery {
    Gallery::new(BasePath::new(base), Some(names.iter().copied().collect()))
}

#[test]
fn no_images_option_renders_the_four_defaults() {
    let gallery = Gallery::new(BasePath::new("/app"), None);
    let ids: Vec<&str> = gallery.tiles().iter().map(|t| t.id().as_str()).collect();
    assert_eq!(ids, ["ui-1.png", "ui-2.png", "ui-3.png", "ui-4.png"]);
    assert_eq!(gallery.base().as_str(), "/app");
    let captions: Vec<String> = gallery.views().into_iter().map(|v| v.caption).collect();
    assert_eq!(captions, ["ui-1.png", "ui-2.png", "ui-3.png", "ui-4.png"]);
    assert_eq!(gallery.title(), "UI Snapshots");
}

#[test]
fn empty_list_renders_no_tiles() {
    let gallery = Gallery::new(BasePath::new("/app"), Some(ImageList::new(vec![])));
    assert!(gallery.is_empty());
    assert!(gallery.views().is_empty());
    assert_eq!(gallery.title(), "UI Snapshots");
}

#[test]
fn tiles_follow_list_order() {
    let names = ["c.png", "a.png", "b.png", "z.jpg", "m.png"];
    let gallery = gallery("/app", &names);
    assert_eq!(gallery.len(), names.len());
    for (i, view) in gallery.views().iter().enumerate() {
        assert_eq!(view.index, i);
        assert_eq!(view.caption, names[i]);
        assert_eq!(view.alt_text, names[i]);
        assert_eq!(view.source, format!("/app/snapshots/{}", names[i]));
        assert_eq!(view.opacity, NORMAL_OPACITY);
        assert!(!view.failed);
    }
}

#[test]
fn failure_on_first_tile_only_changes_first_tile() {
    let mut gallery = gallery("/app", &["a.png", "b.png"]);
    let before = gallery.views();
    assert_eq!(before[0].source, "/app/snapshots/a.png");
    assert_eq!(before[1].source, "/app/snapshots/b.png");

    assert!(gallery.mark_failed(0).unwrap());

    let after = gallery.views();
    assert_eq!(after[0].source, "/app/snapshots/placeholder.png");
    assert_eq!(after[0].opacity, DEGRADED_OPACITY);
    assert!(after[0].failed);
    assert_eq!(after[0].caption, "a.png");
    assert_eq!(after[1], before[1]);
    assert_eq!(gallery.failed_count(), 1);
}

#[test]
fn repeated_failure_is_idempotent() {
    let mut gallery = gallery("/app", &["a.png", "b.png"]);
    assert!(gallery.mark_failed(1).unwrap());
    let once = gallery.views();
    assert!(!gallery.mark_failed(1).unwrap());
    assert_eq!(gallery.views(), once);
    assert_eq!(gallery.tile(1).unwrap().state(), TileState::LoadFailed);
}

#[test]
fn duplicate_identifiers_fail_independently() {
    let mut gallery = gallery("", &["same.png", "same.png"]);
    gallery.mark_failed(1).unwrap();
    let views = gallery.views();
    assert_eq!(views[0].source, "/snapshots/same.png");
    assert!(!views[0].failed);
    assert_eq!(views[1].source, "/snapshots/placeholder.png");
    assert_eq!(views[1].caption, "same.png");
}

#[test]
fn configured_opacity_applies_to_failed_tiles() {
    let mut gallery = gallery("/app", &["a.png"]).with_degraded_opacity(0.25);
    gallery.mark_failed(0).unwrap();
    assert_eq!(gallery.tile_view(0).unwrap().opacity, 0.25);
    assert!(gallery.tile_view(1).is_none());
}
