//! Per-album layout assembly.
//!
//! Combines the two layout passes — cover selection ([`crate::cover`]) and
//! row packing ([`crate::pack`]) — into one view model per album, and lays
//! out whole sites in parallel.
//!
//! Layouts are throwaway values: one per album per capacity. A responsive
//! caller re-invokes [`layout_album`] with the new column count on every
//! viewport change; there is no subscription state and no incremental
//! patching, the previous layout is simply dropped.

use crate::cover::select_cover;
use crate::pack::{PackError, Row, pack_rows};
use crate::types::{Album, Photo};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Computed layout for one album at one column count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumLayout {
    /// Album directory path, for joining back to the album.
    pub path: String,
    pub title: String,
    /// 0–2 cover photos for listings (landscape single or portrait pair).
    pub cover: Vec<Photo>,
    /// Packed grid rows in display order.
    pub rows: Vec<Row>,
    /// Column count the rows were packed for.
    pub capacity: u32,
}

impl AlbumLayout {
    /// An empty layout standing in for an album whose packing failed.
    fn empty(album: &Album, capacity: u32) -> Self {
        Self {
            path: album.path.clone(),
            title: album.title.clone(),
            cover: Vec::new(),
            rows: Vec::new(),
            capacity,
        }
    }
}

/// Whole-site layout plus the albums that failed to pack.
#[derive(Debug, Serialize)]
pub struct SiteLayout {
    pub albums: Vec<AlbumLayout>,
    /// `(album path, error message)` for albums substituted with an empty
    /// layout. One album's failure never aborts the others.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<(String, String)>,
}

/// Lay out one album: select its cover and pack its grid rows.
///
/// Pure; recompute by calling again with a new `capacity`.
pub fn layout_album(album: &Album, capacity: u32) -> Result<AlbumLayout, PackError> {
    let cover = select_cover(&album.photos)
        .into_iter()
        .cloned()
        .collect();
    let rows = pack_rows(&album.photos, capacity)?;

    Ok(AlbumLayout {
        path: album.path.clone(),
        title: album.title.clone(),
        cover,
        rows,
        capacity,
    })
}

/// Lay out every album at the given capacity, in parallel.
///
/// Albums are independent, so this fans out across the rayon pool. A
/// failing album is reported in [`SiteLayout::failures`] and replaced with
/// an empty layout rather than aborting the run — the caller logs it and
/// renders an empty grid for that album.
pub fn layout_site(albums: &[Album], capacity: u32) -> SiteLayout {
    let results: Vec<(AlbumLayout, Option<(String, String)>)> = albums
        .par_iter()
        .map(|album| match layout_album(album, capacity) {
            Ok(layout) => (layout, None),
            Err(e) => (
                AlbumLayout::empty(album, capacity),
                Some((album.path.clone(), e.to_string())),
            ),
        })
        .collect();

    let mut layouts = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (layout, failure) in results {
        layouts.push(layout);
        failures.extend(failure);
    }

    SiteLayout {
        albums: layouts,
        failures,
    }
}
