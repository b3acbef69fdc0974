//! Build a catalog from a directory of media files.
//!
//! Instead of writing `gallery.toml` by hand, drop files into one directory
//! per category and let the scanner produce the catalog:
//!
//! ```text
//! photography/                      # Scan root
//! ├── 010-Misc/                     # Category "Misc", id `misc`
//! │   ├── 001-Cinque-Terre.jpeg     # Title "Cinque Terre"
//! │   ├── 002-Colosseum.jpeg
//! │   └── 003.mp4                   # No title → category name
//! ├── 020-Antelope-Canyon/          # Category "Antelope Canyon"
//! │   └── 001-Upper-Canyon.webm     # Video (by extension)
//! └── Switzerland/                  # Unnumbered → sorted after numbered
//!     └── alps.jpg
//! ```
//!
//! ## Ordering
//!
//! Categories and items sort by numeric prefix, unnumbered entries last in
//! filename order. Catalog order is category order, then item order within
//! the category, which is what the unfiltered view shows.
//!
//! ## Validation
//!
//! - Media files directly in the root have no category and are rejected.
//! - Directories inside a category are rejected (categories are flat).
//! - Two items in one category may not share a number.
//! - Two directories may not produce the same category id.
//! - No directory may produce the id `all`, which means "no filter".
//!
//! Files that are neither images nor videos (sidecars, notes) are ignored.

use crate::catalog::{CATALOG_FILE, CatalogFile, DisplayConfig};
use crate::gallery::ALL_CATEGORY;
use crate::media::{MediaItem, VIDEO_EXTENSIONS};
use crate::naming::{self, ParsedName};
use crate::types::Category;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Media file is not inside a category directory: {0}")]
    Uncategorized(PathBuf),
    #[error("Category directories cannot be nested: {0}")]
    NestedDirectory(PathBuf),
    #[error("Duplicate item number {0} in {1}")]
    DuplicateNumber(u32, PathBuf),
    #[error("Directories {0} and {1} both map to category id '{2}'")]
    DuplicateCategory(PathBuf, PathBuf, String),
    #[error("Cannot derive a category id from directory name: {0}")]
    UnnamedCategory(PathBuf),
    #[error("Directory {0} maps to the reserved category id 'all'")]
    ReservedCategory(PathBuf),
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "avif"];

/// Scan `root` into a catalog whose URLs start with `url_prefix`.
pub fn scan(root: &Path, url_prefix: &str) -> Result<CatalogFile, ScanError> {
    let mut groups: Vec<CategoryDir> = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped(e));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        match (entry.depth(), entry.file_type().is_dir()) {
            (1, true) => groups.push(CategoryDir::new(path)?),
            (1, false) if is_media(path) => {
                return Err(ScanError::Uncategorized(path.to_path_buf()));
            }
            (2, true) => return Err(ScanError::NestedDirectory(path.to_path_buf())),
            (2, false) if is_media(path) => {
                // sort_by_file_name yields a directory's children right after it
                let Some(group) = groups.last_mut() else {
                    return Err(ScanError::Uncategorized(path.to_path_buf()));
                };
                group.add(path)?;
            }
            _ => debug!(path = %path.display(), "skipping non-media entry"),
        }
    }

    groups.sort_by_key(|g| (g.parsed.sort_key(), g.dir_name.clone()));

    let mut categories: Vec<Category> = Vec::new();
    let mut items = Vec::new();
    for (i, group) in groups.iter().enumerate() {
        if let Some(earlier) = groups[..i].iter().find(|g| g.id == group.id) {
            return Err(ScanError::DuplicateCategory(
                earlier.path.clone(),
                group.path.clone(),
                group.id.clone(),
            ));
        }
        categories.push(Category::new(&group.id, &group.parsed.title));
        for media in group.files.values() {
            items.push(group.item(root, media, url_prefix));
        }
    }

    debug!(
        root = %root.display(),
        categories = categories.len(),
        items = items.len(),
        "scan complete"
    );

    Ok(CatalogFile {
        display: DisplayConfig::default(),
        categories,
        items,
    })
}

/// One category directory and its media files, keyed by sort position.
struct CategoryDir {
    path: PathBuf,
    dir_name: String,
    parsed: ParsedName,
    id: String,
    files: BTreeMap<(u32, String), ParsedMedia>,
}

struct ParsedMedia {
    path: PathBuf,
    parsed: ParsedName,
}

impl CategoryDir {
    fn new(path: &Path) -> Result<Self, ScanError> {
        let dir_name = file_name(path);
        let parsed = naming::parse_entry_name(&dir_name);
        let id = naming::slugify(&parsed.title);
        if id.is_empty() {
            return Err(ScanError::UnnamedCategory(path.to_path_buf()));
        }
        if id == ALL_CATEGORY {
            return Err(ScanError::ReservedCategory(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            dir_name,
            parsed,
            id,
            files: BTreeMap::new(),
        })
    }

    fn add(&mut self, path: &Path) -> Result<(), ScanError> {
        let filename = file_name(path);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let parsed = naming::parse_entry_name(&stem);
        if let Some(number) = parsed.number
            && self.files.keys().any(|(n, _)| *n == number)
        {
            return Err(ScanError::DuplicateNumber(number, self.path.clone()));
        }
        self.files.insert(
            (parsed.sort_key(), filename),
            ParsedMedia {
                path: path.to_path_buf(),
                parsed,
            },
        );
        Ok(())
    }

    fn item(&self, root: &Path, media: &ParsedMedia, url_prefix: &str) -> MediaItem {
        let title = if media.parsed.title.is_empty() {
            self.parsed.title.clone()
        } else {
            media.parsed.title.clone()
        };
        MediaItem::new(media_url(root, &media.path, url_prefix), &self.id, title)
    }
}

/// `<prefix>/<relative path>` with forward slashes regardless of platform.
fn media_url(root: &Path, path: &Path, url_prefix: &str) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let rel: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    let prefix = url_prefix.trim_end_matches('/');
    format!("{prefix}/{}", rel.join("/"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == CATALOG_FILE
}

fn is_media(path: &Path) -> bool {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if ext.is_empty() {
        return false;
    }
    IMAGE_EXTENSIONS.contains(&ext.as_str())
        || VIDEO_EXTENSIONS
            .iter()
            .any(|v| v.trim_start_matches('.') == ext)
}
