//! Filename parsing for the `NNN-name` ordering convention.
//!
//! Albums and images alike are ordered by an optional numeric prefix:
//! `010-Japan/`, `001-dawn.jpg`. The part after the prefix becomes the
//! entry's slug (photo id, album title source); dashes in it turn into
//! spaces for display.
//!
//! - `001-dawn` → number 1, slug `dawn`, title "dawn"
//! - `003-my-museum` → number 3, slug `my-museum`, title "my museum"
//! - `001` / `001-` → number 1, no slug, no title
//! - `drafts` → no number (hidden from nav for albums), slug `drafts`

/// Parsed pieces of an entry name.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryName {
    /// Sequence number from the `NNN-` prefix, if present.
    pub number: Option<u32>,
    /// Stem with any number prefix stripped. Empty for number-only names.
    pub slug: String,
    /// Slug with dashes converted to spaces; `None` when the slug is empty.
    pub title: Option<String>,
}

/// Parse a directory or file stem following the `NNN-name` convention.
pub fn parse_entry(stem: &str) -> EntryName {
    let (number, slug) = match stem.split_once('-') {
        Some((prefix, rest)) if prefix.parse::<u32>().is_ok() => {
            (prefix.parse::<u32>().ok(), rest.to_string())
        }
        // Number-only stems like "001" carry no slug at all.
        _ => match stem.parse::<u32>() {
            Ok(n) => (Some(n), String::new()),
            Err(_) => (None, stem.to_string()),
        },
    };

    let title = if slug.is_empty() {
        None
    } else {
        Some(slug.replace('-', " "))
    };

    EntryName {
        number,
        slug,
        title,
    }
}
