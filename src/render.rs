//! Static HTML preview of the computed layout.
//!
//! Renders the scan manifest plus a site layout into a small static site:
//! an index page of album cards (covers) and one page per album showing the
//! packed grid. This is an inspection surface for the layout algorithms,
//! not the published site — routing, theming, and responsive image variants
//! belong to the site generator consuming this crate.
//!
//! ## Output Structure
//!
//! ```text
//! preview/
//! ├── index.html                 # Album cards with covers
//! ├── 010-Landscapes/
//! │   ├── index.html             # Packed grid page
//! │   ├── 001-dawn.jpg           # Source images (copied)
//! │   └── ...
//! └── 020-Travel/010-Japan/
//!     └── ...
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping. The grid
//! is plain CSS grid: every row is a `repeat(capacity, 1fr)` strip and each
//! photo spans its width units; oversized photos span the full strip.

use crate::layout::{AlbumLayout, SiteLayout};
use crate::scan::Manifest;
use crate::types::Photo;
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/preview.css");

/// Write the preview site: index page, one grid page per album, and copies
/// of the source images so pages are self-contained.
pub fn render_preview(
    manifest: &Manifest,
    site: &SiteLayout,
    content_root: &Path,
    output_dir: &Path,
) -> Result<(), RenderError> {
    fs::create_dir_all(output_dir)?;

    let index = render_index(site);
    fs::write(output_dir.join("index.html"), index.into_string())?;

    for layout in &site.albums {
        let album_dir = output_dir.join(&layout.path);
        fs::create_dir_all(&album_dir)?;

        let page = render_album_page(layout);
        fs::write(album_dir.join("index.html"), page.into_string())?;

        if let Some(album) = manifest.albums.iter().find(|a| a.path == layout.path) {
            for photo in &album.photos {
                let src = content_root.join(&photo.source_path);
                fs::copy(&src, album_dir.join(file_name(&photo.source_path)))?;
            }
        }
    }

    Ok(())
}

/// Final component of a relative source path.
fn file_name(source_path: &str) -> &str {
    source_path.rsplit('/').next().unwrap_or(source_path)
}

/// Renders the base HTML document structure.
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the index page: one card per album, showing its cover.
///
/// Landscape covers fill the card alone; portrait covers render as a
/// side-by-side pair.
pub fn render_index(site: &SiteLayout) -> Markup {
    let content = html! {
        main.index-page {
            h1 { "Albums" }
            div.album-cards {
                @for layout in &site.albums {
                    a.album-card href={ (layout.path) "/" } {
                        (render_cover(layout))
                        span.album-title { (layout.title) }
                    }
                }
            }
        }
    };
    base_document("Albums", content)
}

fn render_cover(layout: &AlbumLayout) -> Markup {
    html! {
        @match layout.cover.as_slice() {
            [] => {
                div.cover.cover-empty { "no photos" }
            }
            [single] => {
                div.cover.cover-single { (cover_img(layout, single)) }
            }
            pair => {
                div.cover.cover-pair {
                    @for photo in pair {
                        (cover_img(layout, photo))
                    }
                }
            }
        }
    }
}

fn cover_img(layout: &AlbumLayout, photo: &Photo) -> Markup {
    let src = format!("{}/{}", layout.path, file_name(&photo.source_path));
    html! {
        img src=(src) alt=(photo.title.as_deref().unwrap_or(&photo.id)) loading="lazy";
    }
}

/// Renders one album's packed grid page.
pub fn render_album_page(layout: &AlbumLayout) -> Markup {
    let columns_style = format!("--columns: {};", layout.capacity);

    let content = html! {
        main.album-page {
            header.album-header {
                nav.breadcrumb {
                    a href="../" { "Albums" }
                    " › "
                    (layout.title)
                }
                h1 { (layout.title) }
                p.grid-meta { (layout.capacity) " columns" }
            }
            div.grid style=(columns_style) {
                @for row in &layout.rows {
                    div.row.oversize[row.is_oversized()] {
                        @for photo in &row.photos {
                            @let span = if row.is_oversized() {
                                layout.capacity
                            } else {
                                photo.width_units()
                            };
                            figure.cell style={ "grid-column: span " (span) ";" } {
                                img src=(file_name(&photo.source_path))
                                    alt=(photo.title.as_deref().unwrap_or(&photo.id))
                                    loading="lazy";
                            }
                        }
                    }
                }
            }
        }
    };

    base_document(&layout.title, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_album, layout_site};
    use crate::test_helpers::{album, photo, write_landscape, write_portrait};
    use crate::types::Orientation::{Landscape, Portrait};
    use tempfile::TempDir;

    // =========================================================================
    // Markup tests (pure)
    // =========================================================================

    #[test]
    fn index_links_album_pages() {
        let albums = vec![album("010-Hills", vec![photo("dawn", Landscape, false)])];
        let site = layout_site(&albums, 4);
        let html = render_index(&site).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"href="010-Hills/""#));
        assert!(html.contains("Hills"));
    }

    #[test]
    fn index_single_landscape_cover() {
        let albums = vec![album("010-Hills", vec![photo("dawn", Landscape, false)])];
        let site = layout_site(&albums, 4);
        let html = render_index(&site).into_string();

        assert!(html.contains("cover-single"));
        assert!(html.contains("010-Hills/dawn.jpg"));
    }

    #[test]
    fn index_portrait_pair_cover() {
        let albums = vec![album(
            "010-Hills",
            vec![
                photo("one", Portrait, false),
                photo("two", Portrait, false),
            ],
        )];
        let site = layout_site(&albums, 4);
        let html = render_index(&site).into_string();

        assert!(html.contains("cover-pair"));
        assert!(html.contains("one.jpg"));
        assert!(html.contains("two.jpg"));
    }

    #[test]
    fn index_empty_album_gets_placeholder() {
        let albums = vec![album("010-Empty", vec![])];
        let site = layout_site(&albums, 4);
        let html = render_index(&site).into_string();
        assert!(html.contains("cover-empty"));
    }

    #[test]
    fn album_page_spans_match_width_units() {
        let layout = layout_album(
            &album(
                "010-Hills",
                vec![
                    photo("wide", Landscape, false),
                    photo("tall", Portrait, false),
                ],
            ),
            4,
        )
        .unwrap();
        let html = render_album_page(&layout).into_string();

        assert!(html.contains("--columns: 4;"));
        assert!(html.contains("grid-column: span 2;"));
        assert!(html.contains("grid-column: span 1;"));
    }

    #[test]
    fn album_page_marks_oversized_rows() {
        let layout =
            layout_album(&album("010-Hills", vec![photo("pano", Landscape, false)]), 1).unwrap();
        let html = render_album_page(&layout).into_string();

        assert!(html.contains(r#"class="row oversize""#));
        // Oversized photos span the whole strip, not their nominal units.
        assert!(html.contains("grid-column: span 1;"));
    }

    #[test]
    fn photo_titles_are_escaped() {
        let mut p = photo("x", Landscape, false);
        p.title = Some("<script>alert('xss')</script>".to_string());
        let layout = layout_album(&album("010-Hills", vec![p]), 4).unwrap();
        let html = render_album_page(&layout).into_string();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    // =========================================================================
    // Filesystem test
    // =========================================================================

    #[test]
    fn preview_writes_pages_and_copies_images() {
        let content = TempDir::new().unwrap();
        write_landscape(&content.path().join("010-Hills/001-dawn.png"));
        write_portrait(&content.path().join("010-Hills/002-tall.png"));

        let manifest = crate::scan::scan(content.path()).unwrap();
        let site = layout_site(&manifest.albums, 3);

        let out = TempDir::new().unwrap();
        render_preview(&manifest, &site, content.path(), out.path()).unwrap();

        assert!(out.path().join("index.html").exists());
        assert!(out.path().join("010-Hills/index.html").exists());
        assert!(out.path().join("010-Hills/001-dawn.png").exists());
        assert!(out.path().join("010-Hills/002-tall.png").exists());
    }
}
