//! Shared types used across all pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → layout → render)
//! and must be identical across all three modules.

use serde::{Deserialize, Serialize};

/// Photo orientation, derived once from decoded pixel dimensions.
///
/// Width greater than or equal to height classifies as landscape; everything
/// else is portrait. Square images count as landscape so they take a full
/// double-width grid cell rather than being squeezed into a portrait slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Classify pixel dimensions. `width >= height` is landscape.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width >= height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    /// Layout weight in grid width units: landscape spans 2 columns,
    /// portrait spans 1. Derived, never stored.
    pub fn width_units(self) -> u32 {
        match self {
            Orientation::Landscape => 2,
            Orientation::Portrait => 1,
        }
    }
}

/// A single photo within an album.
///
/// Photos are owned by their parent [`Album`] and immutable for the duration
/// of a render pass. The `id` is unique within its album — it is the filename
/// stem with the number prefix stripped, or the full stem for unnumbered
/// files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Identifier unique within the album (filename-derived slug).
    pub id: String,
    /// Sort key from the `NNN-` filename prefix.
    pub number: u32,
    /// Path to the source image, relative to the content root.
    pub source_path: String,
    /// Landscape or portrait, probed from the image header at scan time.
    pub orientation: Orientation,
    /// Author-assigned via `featured = [...]` in `album.toml`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub featured: bool,
    /// Display title from the filename (dashes become spaces).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Photo {
    /// Grid width units for this photo (2 landscape, 1 portrait).
    pub fn width_units(&self) -> u32 {
        self.orientation.width_units()
    }
}

/// An album: an ordered collection of photos sharing a directory.
///
/// Photo order is scan order (numbered images first by number, then
/// unnumbered in filename order) and equals display order everywhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    /// Directory path relative to the content root.
    pub path: String,
    /// Title from `album.toml` or the directory name.
    pub title: String,
    /// Optional album date from `album.toml` (free-form, e.g. `2026-05`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Description from `album.toml` or a `description.txt` sidecar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Photos in display order.
    pub photos: Vec<Photo>,
    /// Whether the album directory carries a number prefix.
    pub in_nav: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_than_tall_is_landscape() {
        assert_eq!(
            Orientation::from_dimensions(1600, 1200),
            Orientation::Landscape
        );
    }

    #[test]
    fn taller_than_wide_is_portrait() {
        assert_eq!(
            Orientation::from_dimensions(1200, 1600),
            Orientation::Portrait
        );
    }

    #[test]
    fn square_counts_as_landscape() {
        assert_eq!(
            Orientation::from_dimensions(1000, 1000),
            Orientation::Landscape
        );
    }

    #[test]
    fn width_units_by_orientation() {
        assert_eq!(Orientation::Landscape.width_units(), 2);
        assert_eq!(Orientation::Portrait.width_units(), 1);
    }
}
