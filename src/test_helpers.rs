//! Shared test utilities for the photo-grid test suite.
//!
//! Provides in-memory photo/album builders for the pure layout modules and
//! tiny on-disk PNG writers for scan-level tests (the scanner probes real
//! image headers, so fixtures must be decodable files, not placeholder
//! bytes).

use std::path::Path;

use crate::types::{Album, Orientation, Photo};

// =========================================================================
// In-memory builders
// =========================================================================

/// Build a photo with the fields the layout algorithms care about.
pub fn photo(id: &str, orientation: Orientation, featured: bool) -> Photo {
    Photo {
        id: id.to_string(),
        number: 0,
        source_path: format!("010-test/{id}.jpg"),
        orientation,
        featured,
        title: None,
    }
}

/// Build an unfeatured photo list from a compact spec string:
/// `L` = landscape, `p` = portrait. Ids are `p1`, `p2`, ... in order.
///
/// `photos_from_spec("pLp")` → portrait `p1`, landscape `p2`, portrait `p3`.
pub fn photos_from_spec(spec: &str) -> Vec<Photo> {
    spec.chars()
        .enumerate()
        .map(|(i, c)| {
            let orientation = match c {
                'L' => Orientation::Landscape,
                'p' => Orientation::Portrait,
                other => panic!("unknown photo spec char '{other}' (use 'L' or 'p')"),
            };
            photo(&format!("p{}", i + 1), orientation, false)
        })
        .collect()
}

/// Build an album around a photo list. Title derives from the path.
pub fn album(path: &str, photos: Vec<Photo>) -> Album {
    let entry = crate::naming::parse_entry(path.rsplit('/').next().unwrap_or(path));
    Album {
        path: path.to_string(),
        title: entry.title.unwrap_or_else(|| path.to_string()),
        date: None,
        description: None,
        photos,
        in_nav: entry.number.is_some(),
    }
}

// =========================================================================
// On-disk fixtures
// =========================================================================

/// Write a minimal real PNG of the given dimensions, creating parent
/// directories as needed.
pub fn write_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbaImage::new(width, height)
        .save(path)
        .unwrap_or_else(|e| panic!("failed to write fixture {}: {e}", path.display()));
}

/// A 4:3 landscape fixture image.
pub fn write_landscape(path: &Path) {
    write_image(path, 16, 12);
}

/// A 3:4 portrait fixture image.
pub fn write_portrait(path: &Path) {
    write_image(path, 12, 16);
}
