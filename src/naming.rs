//! `NNN-name` parsing for category directories and media filenames.
//!
//! A scanned media directory orders everything by an optional numeric
//! prefix, the same way for categories and files:
//!
//! - `020-Antelope-Canyon/` → number 20, title "Antelope Canyon", id `antelope-canyon`
//! - `001-Cinque-Terre.jpeg` → number 1, title "Cinque Terre"
//! - `003.mp4` → number 3, no title
//! - `Misc/` → unnumbered, title "Misc", id `misc`
//!
//! Dashes in the name become spaces in the title. Category ids are slugs of
//! the title, so renumbering a directory never changes the id stored on
//! items.

/// A filename stem or directory name split into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Numeric prefix, if any (`20` from `020-Antelope-Canyon`).
    pub number: Option<u32>,
    /// Display title with dashes as spaces. Empty for number-only names.
    pub title: String,
}

impl ParsedName {
    /// Sort key: numbered entries first by number, unnumbered after.
    pub fn sort_key(&self) -> u32 {
        self.number.unwrap_or(u32::MAX)
    }
}

/// Parse a name following the `NNN-name` convention.
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some((prefix, rest)) = name.split_once('-')
        && let Ok(number) = prefix.parse::<u32>()
    {
        return ParsedName {
            number: Some(number),
            title: display_title(rest),
        };
    }
    if let Ok(number) = name.parse::<u32>() {
        return ParsedName {
            number: Some(number),
            title: String::new(),
        };
    }
    ParsedName {
        number: None,
        title: display_title(name),
    }
}

fn display_title(raw: &str) -> String {
    raw.split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase, dash-separated identifier for a title.
///
/// Runs of anything other than ASCII letters and digits collapse into a
/// single dash; leading and trailing dashes are dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
