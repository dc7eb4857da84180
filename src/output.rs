//! CLI output formatting for the scan and layout stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (album, photo, row) is its semantic identity — title and
//! positional index — with filesystem paths shown as secondary context via
//! indented `Source:` lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Albums
//! 001 Landscapes (3 photos)
//!     Source: 010-Landscapes/
//!     A week of ridge walks
//!     001 dawn [landscape, featured]
//!         Source: 010-Landscapes/001-dawn.jpg
//!     002 sunset [portrait]
//!         Source: 010-Landscapes/002-sunset.jpg
//!
//! Scanned 1 album, 3 photos
//! ```
//!
//! ## Layout
//!
//! ```text
//! 001 Landscapes (4 columns)
//!     Cover: dawn
//!     001 dawn, sunset (3/4 units)
//!     002 mountains (2/4 units)
//!
//! Packed 1 album into 2 rows at 4 columns
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::layout::{AlbumLayout, SiteLayout};
use crate::scan::Manifest;
use crate::types::{Album, Orientation, Photo};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Pluralize a count: `1 album`, `2 albums`.
fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Bracketed tag list for a photo: orientation plus an optional featured
/// marker. `[landscape, featured]`, `[portrait]`.
fn photo_tags(photo: &Photo) -> String {
    let orientation = match photo.orientation {
        Orientation::Landscape => "landscape",
        Orientation::Portrait => "portrait",
    };
    if photo.featured {
        format!("[{orientation}, featured]")
    } else {
        format!("[{orientation}]")
    }
}

/// Photo display name: title when present, id otherwise.
fn photo_name(photo: &Photo) -> &str {
    photo.title.as_deref().unwrap_or(&photo.id)
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing discovered albums and photos.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Albums".to_string());
    for (i, album) in manifest.albums.iter().enumerate() {
        lines.extend(format_album(i + 1, album));
    }

    let photo_total: usize = manifest.albums.iter().map(|a| a.photos.len()).sum();
    lines.push(String::new());
    lines.push(format!(
        "Scanned {}, {}",
        count_noun(manifest.albums.len(), "album"),
        count_noun(photo_total, "photo")
    ));

    lines
}

fn format_album(index: usize, album: &Album) -> Vec<String> {
    let mut lines = Vec::new();

    let hidden = if album.in_nav { "" } else { " (hidden)" };
    lines.push(format!(
        "{} {} ({}){}",
        format_index(index),
        album.title,
        count_noun(album.photos.len(), "photo"),
        hidden
    ));
    lines.push(format!("{}Source: {}/", indent(1), album.path));

    if let Some(ref desc) = album.description {
        let truncated = truncate_desc(desc.trim(), 60);
        if !truncated.is_empty() {
            lines.push(format!("{}{}", indent(1), truncated));
        }
    }

    for (i, photo) in album.photos.iter().enumerate() {
        lines.push(format!(
            "{}{} {} {}",
            indent(1),
            format_index(i + 1),
            photo_name(photo),
            photo_tags(photo)
        ));
        lines.push(format!("{}Source: {}", indent(2), photo.source_path));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

// ============================================================================
// Stage 2: Layout output
// ============================================================================

/// Format layout stage output: covers and packed rows per album.
pub fn format_layout_output(site: &SiteLayout, capacity: u32) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, album) in site.albums.iter().enumerate() {
        lines.extend(format_album_layout(i + 1, album));
    }

    for (path, error) in &site.failures {
        lines.push(format!("Failed: {path} ({error})"));
    }

    let row_total: usize = site.albums.iter().map(|a| a.rows.len()).sum();
    lines.push(String::new());
    lines.push(format!(
        "Packed {} into {} at {}",
        count_noun(site.albums.len(), "album"),
        count_noun(row_total, "row"),
        count_noun(capacity as usize, "column")
    ));

    lines
}

fn format_album_layout(index: usize, layout: &AlbumLayout) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {} ({})",
        format_index(index),
        layout.title,
        count_noun(layout.capacity as usize, "column")
    ));

    let cover_names: Vec<&str> = layout.cover.iter().map(photo_name).collect();
    if cover_names.is_empty() {
        lines.push(format!("{}Cover: (none)", indent(1)));
    } else {
        lines.push(format!("{}Cover: {}", indent(1), cover_names.join(", ")));
    }

    for (i, row) in layout.rows.iter().enumerate() {
        let names: Vec<&str> = row.photos.iter().map(photo_name).collect();
        let oversized = if row.is_oversized() { ", oversized" } else { "" };
        lines.push(format!(
            "{}{} {} ({}/{} units{})",
            indent(1),
            format_index(i + 1),
            names.join(", "),
            row.units_used,
            row.capacity,
            oversized
        ));
    }

    lines
}

/// Print layout output to stdout.
pub fn print_layout_output(site: &SiteLayout, capacity: u32) {
    for line in format_layout_output(site, capacity) {
        println!("{line}");
    }
}
