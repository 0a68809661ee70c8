//! Integration test: `GalleryConfig::load` against the real process environment.
//!
//! Kept to a single test in its own binary because it mutates process-wide
//! variables.

use snapshot_core::{GalleryConfig, ImageList, CONFIG_ENV};
use std::io::Write;

#[test]
fn load_reads_config_path_and_variables_from_process_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "title = \"From File\"\nimages = [\"file.png\"]").unwrap();

    std::env::set_var(CONFIG_ENV, &path);
    std::env::set_var("PUBLIC_URL", "/app");
    std::env::remove_var("SNAPSHOT__BASE_PATH");
    std::env::remove_var("SNAPSHOT__IMAGES");
    std::env::remove_var("SNAPSHOT__TITLE");

    let cfg = GalleryConfig::load().expect("load from SNAPSHOT_CONFIG");
    assert_eq!(cfg.title, "From File");
    assert_eq!(cfg.base_path, "/app");
    assert_eq!(cfg.images, Some(["file.png"].into_iter().collect::<ImageList>()));

    std::env::set_var("SNAPSHOT__IMAGES", "a.png,b.png");
    std::env::set_var("SNAPSHOT__TITLE", "From Env");
    let cfg = GalleryConfig::load().expect("load with env overrides");
    assert_eq!(cfg.title, "From Env");
    assert_eq!(
        cfg.images,
        Some(["a.png", "b.png"].into_iter().collect::<ImageList>())
    );

    for key in [CONFIG_ENV, "PUBLIC_URL", "SNAPSHOT__IMAGES", "SNAPSHOT__TITLE"] {
        std::env::remove_var(key);
    }
}
