//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the photo-grid pipeline. Walks a content directory tree to
//! discover albums and photos, probing each image header for its dimensions
//! so orientation is known before any layout runs.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── 010-Landscapes/              # Album (numbered = appears in nav)
//! │   ├── album.toml               # Album metadata + featured list (optional)
//! │   ├── description.txt          # Fallback description (optional)
//! │   ├── 001-dawn.jpg
//! │   ├── 002-sunset.jpg
//! │   └── 010-mountains.jpg
//! ├── 020-Travel/                  # Container directory (has subdirs)
//! │   ├── 010-Japan/               # Nested album
//! │   │   ├── 001-tokyo.jpg
//! │   │   └── 002-kyoto.jpg
//! │   └── 020-Italy/
//! │       └── 001-rome.jpg
//! └── wip-drafts/                  # Unnumbered = hidden from nav
//!     └── 001-draft.jpg
//! ```
//!
//! ## Album metadata
//!
//! Each album directory may carry an `album.toml` sidecar:
//!
//! ```toml
//! title = "Japan, spring"
//! date = "2026-04"
//! description = "Two weeks from Tokyo to Naoshima."
//! featured = ["tokyo", "kyoto"]    # photo ids preferred for the cover
//! ```
//!
//! Description resolution: `album.toml` wins, `description.txt` is the
//! fallback. Featured ids must name photos that exist — a typo there would
//! otherwise silently demote the cover.
//!
//! ## Orientation probing
//!
//! Orientation comes from `image::image_dimensions`, which reads only the
//! file header. No pixel data is decoded; resizing and encoding belong to
//! an external image-processing utility.
//!
//! ## Validation
//!
//! - No duplicate image numbers within an album
//! - No duplicate photo ids within an album
//! - Every `featured` entry must match a photo id
//! - Unreadable image headers fail the scan, naming the file

use crate::config::{self, SiteConfig};
use crate::naming::parse_entry;
use crate::types::{Album, Orientation, Photo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid album.toml in {path}: {source}")]
    Meta {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Duplicate image number {0} in {1}")]
    DuplicateNumber(u32, PathBuf),
    #[error("Duplicate photo id '{0}' in {1}")]
    DuplicateId(String, PathBuf),
    #[error("featured entry '{0}' in {1} matches no photo")]
    UnknownFeatured(String, PathBuf),
    #[error("Cannot read image header of {path}: {source}")]
    UnreadableImage {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub albums: Vec<Album>,
    pub config: SiteConfig,
}

/// Album sidecar metadata (`album.toml`).
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct AlbumMeta {
    title: Option<String>,
    date: Option<String>,
    description: Option<String>,
    featured: Vec<String>,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Scan a content root into a [`Manifest`].
///
/// Every directory containing at least one image becomes an album. Albums
/// are ordered by the number prefixes along their path, so nav order matches
/// the filesystem convention.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let site_config = config::load_config(root)?;

    // Group image files by their parent directory.
    let mut album_dirs: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    // depth 0 is the root itself; its own name is not subject to the
    // hidden-entry rule.
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && is_image(path) {
            album_dirs
                .entry(path.parent().unwrap_or(root).to_path_buf())
                .or_default()
                .push(path.to_path_buf());
        }
    }

    let mut albums = Vec::new();
    for (dir, images) in &album_dirs {
        albums.push(build_album(dir, root, images)?);
    }

    albums.sort_by_key(|a| path_sort_key(&a.path));

    Ok(Manifest {
        albums,
        config: site_config,
    })
}

/// True when any path component starts with a dot.
fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// Sort key: each path component's number prefix, unnumbered components last.
fn path_sort_key(rel_path: &str) -> Vec<(u32, String)> {
    rel_path
        .split('/')
        .map(|c| {
            let parsed = parse_entry(c);
            (parsed.number.unwrap_or(u32::MAX), c.to_string())
        })
        .collect()
}

fn build_album(dir: &Path, root: &Path, images: &[PathBuf]) -> Result<Album, ScanError> {
    let rel_path = dir.strip_prefix(root).unwrap_or(dir);
    let dir_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let dir_entry = parse_entry(&dir_name);

    let meta = read_album_meta(dir)?;

    // Order images by number prefix; unnumbered ones sort after, keeping
    // filename order.
    let mut ordered: BTreeMap<u32, &PathBuf> = BTreeMap::new();
    let mut unnumbered_counter = 0u32;
    for img in images {
        let stem = img
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        match parse_entry(&stem).number {
            Some(num) => {
                if ordered.contains_key(&num) {
                    return Err(ScanError::DuplicateNumber(num, dir.to_path_buf()));
                }
                ordered.insert(num, img);
            }
            None => {
                ordered.insert(1_000_000 + unnumbered_counter, img);
                unnumbered_counter += 1;
            }
        }
    }

    let mut photos = Vec::with_capacity(ordered.len());
    for (&number, img_path) in &ordered {
        photos.push(build_photo(img_path, root, number, &meta)?);
    }

    // Duplicate ids would make `featured` references ambiguous.
    for (i, photo) in photos.iter().enumerate() {
        if photos[..i].iter().any(|p| p.id == photo.id) {
            return Err(ScanError::DuplicateId(photo.id.clone(), dir.to_path_buf()));
        }
    }

    for slug in &meta.featured {
        if !photos.iter().any(|p| &p.id == slug) {
            return Err(ScanError::UnknownFeatured(slug.clone(), dir.to_path_buf()));
        }
    }

    // Description: album.toml wins, description.txt is the fallback.
    let description = meta
        .description
        .clone()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| read_description_sidecar(dir));

    let title = meta
        .title
        .clone()
        .or(dir_entry.title)
        .unwrap_or_else(|| dir_name.clone());

    Ok(Album {
        path: rel_path.to_string_lossy().to_string(),
        title,
        date: meta.date.clone(),
        description,
        photos,
        in_nav: dir_entry.number.is_some(),
    })
}

fn build_photo(
    img_path: &Path,
    root: &Path,
    number: u32,
    meta: &AlbumMeta,
) -> Result<Photo, ScanError> {
    let stem = img_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let entry = parse_entry(&stem);

    // Number-only filenames fall back to the full stem as id.
    let id = if entry.slug.is_empty() {
        stem.clone()
    } else {
        entry.slug.clone()
    };

    let (width, height) =
        image::image_dimensions(img_path).map_err(|source| ScanError::UnreadableImage {
            path: img_path.to_path_buf(),
            source,
        })?;

    let source = img_path.strip_prefix(root).unwrap_or(img_path);

    Ok(Photo {
        featured: meta.featured.contains(&id),
        id,
        number,
        source_path: source.to_string_lossy().to_string(),
        orientation: Orientation::from_dimensions(width, height),
        title: entry.title,
    })
}

fn read_album_meta(dir: &Path) -> Result<AlbumMeta, ScanError> {
    let path = dir.join("album.toml");
    if !path.exists() {
        return Ok(AlbumMeta::default());
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|source| ScanError::Meta { path, source })
}

/// Read `description.txt` in an album directory, trimmed, non-empty.
fn read_description_sidecar(dir: &Path) -> Option<String> {
    fs::read_to_string(dir.join("description.txt"))
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
