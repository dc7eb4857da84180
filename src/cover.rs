//! Album cover selection.
//!
//! Picks 1–2 photos to represent an album in listings. Landscape covers
//! stand alone (they fill the card); portrait covers come as a side-by-side
//! pair when a partner exists. Featured photos always outrank unfeatured
//! ones.
//!
//! ## Selection priority
//!
//! The rules are tried in order; the first that matches wins, and within
//! each rule the earliest photo in album order wins. This makes the result
//! a pure function of album order plus the `featured`/`orientation` fields,
//! so listings are stable across rebuilds:
//!
//! 1. First featured landscape, alone.
//! 2. First two featured portraits.
//! 3. A lone featured portrait paired with the first unfeatured portrait.
//! 4. First unfeatured landscape, alone.
//! 5. Up to two unfeatured portraits.
//! 6. A lone featured portrait, paired with whatever photo comes first in
//!    album order if one exists.
//! 7. The first photo of the album, whatever it is.
//!
//! Empty albums produce an empty cover.

use crate::types::{Orientation, Photo};

/// Select 0–2 cover photos for an album.
///
/// Pure and deterministic: depends only on photo order and the
/// `orientation`/`featured` fields. Every returned reference points into
/// `photos`.
pub fn select_cover(photos: &[Photo]) -> Vec<&Photo> {
    let featured_landscape = filtered(photos, true, Orientation::Landscape);
    let featured_portrait = filtered(photos, true, Orientation::Portrait);
    let other_landscape = filtered(photos, false, Orientation::Landscape);
    let other_portrait = filtered(photos, false, Orientation::Portrait);

    if let Some(first) = featured_landscape.first() {
        return vec![first];
    }

    if featured_portrait.len() >= 2 {
        return featured_portrait[..2].to_vec();
    }

    if featured_portrait.len() == 1
        && let Some(partner) = other_portrait.first()
    {
        // Featured photo leads the pair.
        return vec![featured_portrait[0], partner];
    }

    if let Some(first) = other_landscape.first() {
        return vec![first];
    }

    if !other_portrait.is_empty() {
        let take = other_portrait.len().min(2);
        return other_portrait[..take].to_vec();
    }

    if featured_portrait.len() == 1 {
        let lone = featured_portrait[0];
        let mut cover = vec![lone];
        if let Some(partner) = photos.iter().find(|p| !std::ptr::eq(*p, lone)) {
            cover.push(partner);
        }
        return cover;
    }

    photos.first().map(|p| vec![p]).unwrap_or_default()
}

/// Photos matching a featured flag and orientation, in original order.
fn filtered(photos: &[Photo], featured: bool, orientation: Orientation) -> Vec<&Photo> {
    photos
        .iter()
        .filter(|p| p.featured == featured && p.orientation == orientation)
        .collect()
}
