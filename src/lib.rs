//! # Photo Grid
//!
//! Cover selection and justified grid layout for photo gallery sites.
//! Your filesystem is the data source: directories become albums, images
//! are ordered by numeric prefix, and `album.toml` sidecars mark featured
//! photos.
//!
//! # Architecture: Scan, Then Lay Out
//!
//! The pipeline has two halves with a JSON manifest between them:
//!
//! ```text
//! 1. Scan     content/  →  Manifest       (filesystem → albums + photos)
//! 2. Layout   manifest  →  SiteLayout     (covers + packed rows per album)
//!    Preview  layout    →  preview/       (static HTML for inspection)
//! ```
//!
//! The split exists because the two halves have different lifetimes. A scan
//! happens once per build: it walks directories, probes image headers, and
//! reads sidecar metadata. A layout happens once per *column count* — a
//! responsive consumer recomputes it for every breakpoint the viewport
//! crosses — so everything downstream of the manifest is pure computation
//! over in-memory values, cheap to re-run and trivial to unit test.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content directory, probes orientations, produces the manifest |
//! | [`cover`] | Picks 1–2 photos to represent an album in listings |
//! | [`pack`] | Packs photos into fixed-capacity grid rows |
//! | [`layout`] | Assembles cover + rows per album; parallel site layout |
//! | [`config`] | `config.toml`: responsive breakpoints → column count |
//! | [`types`] | Shared types serialized between stages (`Photo`, `Album`) |
//! | [`naming`] | `NNN-name` filename convention parser |
//! | [`output`] | CLI output formatting — tree-based display of results |
//! | [`render`] | Static HTML preview of the computed layout (Maud) |
//!
//! # Design Decisions
//!
//! ## Width Units, Not Pixels
//!
//! The grid measures photos in abstract width units — landscape spans 2
//! columns, portrait spans 1 — rather than pixel math. The published site's
//! CSS grid does the pixel work; keeping the packer integral makes the
//! algorithm deterministic across platforms and its tests exact.
//!
//! ## Layouts Are Throwaway Values
//!
//! Nothing persists across renders except the manifest itself. A viewport
//! resize means calling [`layout::layout_album`] again with the new column
//! count; there is no subscription state, no incremental patching, no cache
//! to invalidate. The caller owns the event wiring.
//!
//! ## Header Probing Only
//!
//! Orientation comes from `image::image_dimensions`, which reads a few
//! bytes of header. No pixel data is ever decoded here — resizing and
//! encoding are a separate tool's job. This keeps a full scan of thousands
//! of photos fast enough to run on every build.
//!
//! ## Maud Over Template Engines
//!
//! The preview HTML is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system: malformed markup is a build error, all
//! interpolation is auto-escaped, and there is no template directory to
//! ship or get out of sync.

pub mod config;
pub mod cover;
pub mod layout;
pub mod naming;
pub mod output;
pub mod pack;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
