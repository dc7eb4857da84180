//! Greedy row packing for the masonry photo grid.
//!
//! Photos are packed left-to-right into rows of a fixed capacity measured in
//! width units (landscape = 2, portrait = 1). The capacity equals the
//! responsive column count and is fixed per row at creation; a viewport
//! resize means a full repack from the original photo order, never an
//! incremental patch.
//!
//! ## Placement scan
//!
//! For each photo every existing row is scanned in creation order, and the
//! photo lands in the *last* row that still has room — not the first. This
//! mirrors the layout the site has always shipped (a fit scan without an
//! early exit, where later matches overwrite earlier ones), and album pages
//! were tuned against it. Normalizing to earliest-fit would reshuffle rows
//! whenever a later row has spare units, so the scan is kept as-is and
//! pinned by tests. See DESIGN.md.
//!
//! ## Oversized photos
//!
//! At capacity 1 a landscape photo can never satisfy the fit test. Rather
//! than erroring out of a one-column viewport, such a photo gets a dedicated
//! row of its own whose `units_used` exceeds `capacity`. [`Row::is_oversized`]
//! flags these so renderers can style the overflow.

use crate::types::Photo;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PackError {
    #[error("grid capacity must be at least 1 width unit, got {0}")]
    InvalidCapacity(u32),
}

/// One display row of the packed grid.
///
/// Rows are created lazily, never merged or split, and keep the photos in
/// the order they were appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Photos in placement order.
    pub photos: Vec<Photo>,
    /// Sum of the photos' width units.
    pub units_used: u32,
    /// Width-unit ceiling fixed when the row was created.
    pub capacity: u32,
}

impl Row {
    fn new(capacity: u32) -> Self {
        Self {
            photos: Vec::new(),
            units_used: 0,
            capacity,
        }
    }

    fn has_room_for(&self, units: u32) -> bool {
        self.units_used + units <= self.capacity
    }

    fn push(&mut self, photo: Photo) {
        self.units_used += photo.width_units();
        self.photos.push(photo);
    }

    /// True for the single-photo rows holding a photo wider than the whole
    /// grid (a landscape photo at capacity 1).
    pub fn is_oversized(&self) -> bool {
        self.units_used > self.capacity
    }
}

/// Pack photos into display rows of `capacity` width units.
///
/// Single left-to-right pass over `photos` in input order. Pure: calling
/// twice with the same arguments yields structurally identical rows.
///
/// # Errors
///
/// `capacity == 0` is rejected with [`PackError::InvalidCapacity`] — no
/// photo could ever be placed, so the caller gets the error rather than a
/// silently clamped grid.
pub fn pack_rows(photos: &[Photo], capacity: u32) -> Result<Vec<Row>, PackError> {
    if capacity < 1 {
        return Err(PackError::InvalidCapacity(capacity));
    }

    let mut rows: Vec<Row> = Vec::new();

    for photo in photos {
        let units = photo.width_units();

        // Full scan, last match wins. Intentional — see module docs.
        let target = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.has_room_for(units))
            .map(|(i, _)| i)
            .next_back();

        match target {
            Some(i) => rows[i].push(photo.clone()),
            None => {
                // Covers both "all rows full" and the oversized case where
                // the photo never fits any row (units > capacity).
                let mut row = Row::new(capacity);
                row.push(photo.clone());
                rows.push(row);
            }
        }
    }

    Ok(rows)
}
